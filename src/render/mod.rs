
use serde::{Deserialize, Serialize};

use crate::hook::{analyze_hook, HookAnalysis};
use crate::image::{validate_image_dimensions, ImageDimensions, ImageValidation};
use crate::splitter::{split_into_thread, SplitLimits, ThreadSplitResult};
use crate::validation::{validate_instagram_caption, InstagramValidation};

/// Inputs for an Instagram post preview
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramPostInput {
    pub caption: String,
    pub image_url: Option<String>,
    /// Pixel size of the attached image, when the caller knows it
    pub image_dimensions: Option<ImageDimensions>,
    pub username: Option<String>,
    pub likes: u64,
    pub is_verified: bool,
}

/// Inputs for an X thread preview
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XThreadInput {
    pub content: String,
    pub username: Option<String>,
    pub display_name: Option<String>,
}

/// Inputs for the combined preview
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplatformInput {
    pub caption: String,
    pub image_url: Option<String>,
    pub image_dimensions: Option<ImageDimensions>,
    /// Thread content; the caption is reused when absent
    pub thread_content: Option<String>,
    pub username: Option<String>,
    pub display_name: Option<String>,
}

/// Renderable Instagram post record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPreview {
    pub caption: String,
    pub image_url: Option<String>,
    pub username: String,
    pub likes: u64,
    pub is_verified: bool,
    /// Relative-time label shown on the mock post
    pub timestamp: String,
    pub validation: InstagramValidation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_validation: Option<ImageValidation>,
}

/// Renderable X thread record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadPreview {
    pub username: String,
    pub display_name: String,
    pub thread: ThreadSplitResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<HookAnalysis>,
}

/// Both platforms in one payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplatformPreview {
    pub post: PostPreview,
    pub thread: ThreadPreview,
}

/// Build an Instagram post preview with caption and image validation.
pub fn render_instagram_post(input: &InstagramPostInput) -> PostPreview {
    PostPreview {
        caption: input.caption.clone(),
        image_url: input.image_url.clone(),
        username: at_prefixed(input.username.as_deref().unwrap_or("@yourname")),
        likes: input.likes,
        is_verified: input.is_verified,
        timestamp: "Just now".to_string(),
        validation: validate_instagram_caption(&input.caption),
        image_validation: input.image_dimensions.map(validate_image_dimensions),
    }
}

/// Split content into a thread preview with hook analysis of the opener.
pub fn render_x_thread(input: &XThreadInput, limits: &SplitLimits) -> ThreadPreview {
    let thread = split_into_thread(&input.content, limits);
    let hook = thread
        .segments
        .first()
        .map(|segment| analyze_hook(&segment.text));

    ThreadPreview {
        username: at_prefixed(input.username.as_deref().unwrap_or("@username")),
        display_name: input
            .display_name
            .clone()
            .unwrap_or_else(|| "Thread Author".to_string()),
        thread,
        hook,
    }
}

/// Build previews for both platforms from one submission.
pub fn render_multiplatform(input: &MultiplatformInput, limits: &SplitLimits) -> MultiplatformPreview {
    let post_input = InstagramPostInput {
        caption: input.caption.clone(),
        image_url: input.image_url.clone(),
        image_dimensions: input.image_dimensions,
        username: input.username.clone(),
        likes: 0,
        is_verified: false,
    };

    let thread_input = XThreadInput {
        content: input
            .thread_content
            .clone()
            .unwrap_or_else(|| input.caption.clone()),
        username: input.username.clone(),
        display_name: input.display_name.clone(),
    };

    MultiplatformPreview {
        post: render_instagram_post(&post_input),
        thread: render_x_thread(&thread_input, limits),
    }
}

/// Usernames render with a leading `@` whether or not the caller sent one
fn at_prefixed(username: &str) -> String {
    if username.starts_with('@') {
        username.to_string()
    } else {
        format!("@{}", username)
    }
}
