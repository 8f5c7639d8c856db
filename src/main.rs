use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use postpreview::{
    render_instagram_post, render_multiplatform, render_x_thread, ImageDimensions,
    ImageValidation, InstagramPostInput, InstagramValidation, MultiplatformInput, PostPreview,
    SplitLimits, ThreadPreview, ValidationStatus, XThreadInput, DEFAULT_NUMBERING_RESERVE,
    DEFAULT_SEGMENT_LIMIT, DEFAULT_WARN_THRESHOLD,
};

#[derive(Parser)]
#[command(
    name = "postpreview",
    version,
    about = "Preview social posts: split X threads, validate Instagram captions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split long-form text into an X/Twitter thread preview
    Thread {
        /// Text to split; read from stdin when neither this nor --file is given
        text: Option<String>,
        /// Read the text from a file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Per-segment character limit
        #[arg(long, default_value_t = DEFAULT_SEGMENT_LIMIT)]
        limit: usize,
        /// First-pass reserve for the numbering suffix
        #[arg(long, default_value_t = DEFAULT_NUMBERING_RESERVE)]
        reserve: usize,
        /// Segment count that triggers a length warning
        #[arg(long, default_value_t = DEFAULT_WARN_THRESHOLD)]
        warn_threshold: usize,
        /// Username shown on the tweets
        #[arg(long)]
        username: Option<String>,
        /// Display name shown on the tweets
        #[arg(long)]
        display_name: Option<String>,
        /// Emit the preview as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate and preview an Instagram post
    Instagram {
        /// Caption text; read from stdin when neither this nor --file is given
        caption: Option<String>,
        /// Read the caption from a file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Image URL shown on the post
        #[arg(long)]
        image_url: Option<String>,
        /// Image size as WIDTHxHEIGHT, e.g. 1080x1350
        #[arg(long)]
        image_size: Option<String>,
        /// Username shown on the post
        #[arg(long)]
        username: Option<String>,
        /// Like count shown on the post
        #[arg(long, default_value_t = 0)]
        likes: u64,
        /// Show a verified badge
        #[arg(long)]
        verified: bool,
        /// Emit the preview as JSON
        #[arg(long)]
        json: bool,
    },
    /// Preview both platforms from one submission
    Multi {
        /// Caption text; read from stdin when neither this nor --file is given
        caption: Option<String>,
        /// Read the caption from a file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Separate long-form content for the thread; defaults to the caption
        #[arg(long)]
        thread_content: Option<String>,
        /// Image URL shown on the Instagram post
        #[arg(long)]
        image_url: Option<String>,
        /// Image size as WIDTHxHEIGHT
        #[arg(long)]
        image_size: Option<String>,
        /// Username shown on both platforms
        #[arg(long)]
        username: Option<String>,
        /// Display name shown on the tweets
        #[arg(long)]
        display_name: Option<String>,
        /// Emit the preview as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Thread {
            text,
            file,
            limit,
            reserve,
            warn_threshold,
            username,
            display_name,
            json,
        } => {
            let content = read_input(text, file)?;
            let limits = SplitLimits {
                per_segment_limit: limit,
                numbering_reserve: reserve,
                warn_threshold,
            };
            limits.validate()?;

            let preview = render_x_thread(
                &XThreadInput {
                    content,
                    username,
                    display_name,
                },
                &limits,
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&preview)?);
            } else {
                print_thread(&preview, limit);
            }
        }

        Command::Instagram {
            caption,
            file,
            image_url,
            image_size,
            username,
            likes,
            verified,
            json,
        } => {
            let caption = read_input(caption, file)?;
            let preview = render_instagram_post(&InstagramPostInput {
                caption,
                image_url,
                image_dimensions: image_size.as_deref().map(parse_image_size).transpose()?,
                username,
                likes,
                is_verified: verified,
            });

            if json {
                println!("{}", serde_json::to_string_pretty(&preview)?);
            } else {
                print_instagram(&preview);
            }
        }

        Command::Multi {
            caption,
            file,
            thread_content,
            image_url,
            image_size,
            username,
            display_name,
            json,
        } => {
            let caption = read_input(caption, file)?;
            let limits = SplitLimits::default();
            let preview = render_multiplatform(
                &MultiplatformInput {
                    caption,
                    image_url,
                    image_dimensions: image_size.as_deref().map(parse_image_size).transpose()?,
                    thread_content,
                    username,
                    display_name,
                },
                &limits,
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&preview)?);
            } else {
                print_instagram(&preview.post);
                println!();
                print_thread(&preview.thread, limits.per_segment_limit);
            }
        }
    }

    Ok(())
}

/// Positional text, then --file, then stdin
fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read from stdin")?;
    Ok(buffer)
}

/// Parse "1080x1350" into dimensions
fn parse_image_size(size: &str) -> Result<ImageDimensions> {
    let Some((width, height)) = size.split_once('x') else {
        bail!("image size must look like 1080x1350, got '{}'", size);
    };
    Ok(ImageDimensions {
        width: width
            .trim()
            .parse()
            .with_context(|| format!("invalid width in '{}'", size))?,
        height: height
            .trim()
            .parse()
            .with_context(|| format!("invalid height in '{}'", size))?,
    })
}

fn status_icon(status: ValidationStatus) -> &'static str {
    match status {
        ValidationStatus::Valid => "✅",
        ValidationStatus::Warning => "⚠️",
        ValidationStatus::Error => "❌",
    }
}

fn print_thread(preview: &ThreadPreview, limit: usize) {
    println!(
        "=== X Thread Preview: {} ({}) ===\n",
        preview.display_name, preview.username
    );

    for segment in &preview.thread.segments {
        let marker = if segment.is_within_limit { "✓" } else { "✗" };
        println!(
            "[{}/{}] {} {}/{} chars",
            segment.position,
            segment.total_segments,
            marker,
            segment.effective_length,
            limit
        );
        println!("{}\n", segment.text);
    }

    if let Some(hook) = &preview.hook {
        println!("Hook: {}", hook.feedback);
    }

    for warning in &preview.thread.warnings {
        println!("⚠️  {}", warning);
    }
}

fn print_instagram(preview: &PostPreview) {
    println!("=== Instagram Preview: {} ===\n", preview.username);

    if let Some(url) = &preview.image_url {
        println!("Image: {}", url);
    }
    println!("{}\n", preview.caption);

    print_validation(&preview.validation);

    if let Some(image) = &preview.image_validation {
        print_image_validation(image);
    }
}

fn print_validation(validation: &InstagramValidation) {
    println!(
        "Caption: {} {}/{} chars — {}",
        status_icon(validation.caption.status),
        validation.caption.char_count,
        validation.caption.max_chars,
        validation.caption.engagement.label
    );
    println!("  {}", validation.caption.engagement.tip);

    println!(
        "Hashtags: {} {} (optimal ≤ {})",
        status_icon(validation.hashtags.status),
        validation.hashtags.count,
        validation.hashtags.optimal
    );
    if !validation.hashtags.tags.is_empty() {
        println!("  {}", validation.hashtags.tags.join(" "));
    }
    if !validation.mentions.is_empty() {
        println!("Mentions: {}", validation.mentions.join(" "));
    }
}

fn print_image_validation(image: &ImageValidation) {
    let marker = if image.is_valid { "✅" } else { "⚠️" };
    match image.detected_format {
        Some(format) => println!(
            "Image format: {} {} ({:.2})",
            marker,
            format.spec().name,
            image.actual_aspect_ratio
        ),
        None => println!(
            "Image format: {} unsupported ratio ({:.2})",
            marker, image.actual_aspect_ratio
        ),
    }
    for recommendation in &image.recommendations {
        println!("  {}", recommendation);
    }
}
