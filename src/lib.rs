// Public API exports
pub mod hook;
pub mod image;
pub mod render;
pub mod splitter;
pub mod validation;

// Re-export main types for convenience
pub use splitter::{
    effective_length, split_into_thread, strip_numbering, LimitsError, Segment, SplitLimits,
    ThreadSplitResult, DEFAULT_NUMBERING_RESERVE, DEFAULT_SEGMENT_LIMIT, DEFAULT_WARN_THRESHOLD,
    URL_FIXED_LENGTH,
};

pub use hook::{analyze_hook, HookAnalysis};

pub use validation::{
    extract_hashtags, extract_mentions, validate_instagram_caption, validate_tweet,
    CaptionEngagement, InstagramValidation, TweetValidation, ValidationStatus,
};

pub use image::{
    detect_format, validate_image_dimensions, ImageDimensions, ImageValidation, InstagramFormat,
};

pub use render::{
    render_instagram_post, render_multiplatform, render_x_thread, InstagramPostInput,
    MultiplatformInput, MultiplatformPreview, PostPreview, ThreadPreview, XThreadInput,
};
