
use serde::{Deserialize, Serialize};

/// Minimum dimension below which an image looks pixelated in feed
pub const MIN_RESOLUTION: u32 = 600;

/// Recommended minimum for crisp rendering
pub const OPTIMAL_RESOLUTION: u32 = 1080;

/// The post formats Instagram renders without cropping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstagramFormat {
    Square,
    Portrait,
    Landscape,
}

/// Target geometry for one format
#[derive(Debug, Clone, Copy)]
pub struct FormatSpec {
    pub name: &'static str,
    pub aspect_ratio: &'static str,
    pub width: u32,
    pub height: u32,
    /// Allowed relative deviation from the target ratio
    pub tolerance: f64,
}

impl InstagramFormat {
    pub const ALL: [InstagramFormat; 3] = [
        InstagramFormat::Square,
        InstagramFormat::Portrait,
        InstagramFormat::Landscape,
    ];

    pub fn spec(self) -> FormatSpec {
        match self {
            InstagramFormat::Square => FormatSpec {
                name: "Square",
                aspect_ratio: "1:1",
                width: 1080,
                height: 1080,
                tolerance: 0.02,
            },
            InstagramFormat::Portrait => FormatSpec {
                name: "Portrait",
                aspect_ratio: "4:5",
                width: 1080,
                height: 1350,
                tolerance: 0.02,
            },
            InstagramFormat::Landscape => FormatSpec {
                name: "Landscape",
                aspect_ratio: "1.91:1",
                width: 1080,
                height: 566,
                tolerance: 0.02,
            },
        }
    }

    fn target_ratio(self) -> f64 {
        let spec = self.spec();
        f64::from(spec.width) / f64::from(spec.height)
    }
}

/// Pixel dimensions supplied by the caller; no image decoding happens here
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Crop target for an image that matches no format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedCrop {
    pub format: InstagramFormat,
    pub target_width: u32,
    pub target_height: u32,
}

/// Outcome of validating image dimensions against the format table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageValidation {
    pub is_valid: bool,
    pub detected_format: Option<InstagramFormat>,
    pub actual_aspect_ratio: f64,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_crop: Option<SuggestedCrop>,
}

/// Detect the format whose target ratio the image falls within, if any
pub fn detect_format(dimensions: ImageDimensions) -> Option<InstagramFormat> {
    let ratio = dimensions.aspect_ratio();

    InstagramFormat::ALL.into_iter().find(|format| {
        let target = format.target_ratio();
        let deviation = (ratio - target).abs() / target;
        deviation <= format.spec().tolerance
    })
}

/// Validate dimensions against Instagram's supported formats.
///
/// A matching image may still collect resolution recommendations; an
/// unmatched one gets the closest format as a suggested crop.
pub fn validate_image_dimensions(dimensions: ImageDimensions) -> ImageValidation {
    let ratio = dimensions.aspect_ratio();
    let mut recommendations = Vec::new();

    if let Some(format) = detect_format(dimensions) {
        let spec = format.spec();

        if dimensions.width < spec.width {
            recommendations.push(format!(
                "Image width ({}px) is below recommended {}px. Consider using a higher resolution image.",
                dimensions.width, spec.width
            ));
        }
        if dimensions.width.min(dimensions.height) < MIN_RESOLUTION {
            recommendations.push(format!(
                "{}×{} — Too small, may appear pixelated",
                dimensions.width, dimensions.height
            ));
        }

        return ImageValidation {
            is_valid: true,
            detected_format: Some(format),
            actual_aspect_ratio: ratio,
            recommendations,
            suggested_crop: None,
        };
    }

    let closest = closest_format(ratio);
    let spec = closest.spec();

    recommendations.push(format!(
        "Image aspect ratio ({:.2}) doesn't match Instagram's supported formats.",
        ratio
    ));
    recommendations.push(format!(
        "Closest format: {} ({}). Consider cropping to {}x{}px.",
        spec.name, spec.aspect_ratio, spec.width, spec.height
    ));

    ImageValidation {
        is_valid: false,
        detected_format: None,
        actual_aspect_ratio: ratio,
        recommendations,
        suggested_crop: Some(SuggestedCrop {
            format: closest,
            target_width: spec.width,
            target_height: spec.height,
        }),
    }
}

/// Format whose target ratio is nearest to `ratio`
fn closest_format(ratio: f64) -> InstagramFormat {
    let mut best = InstagramFormat::Square;
    let mut smallest_diff = f64::INFINITY;

    for format in InstagramFormat::ALL {
        let diff = (ratio - format.target_ratio()).abs();
        if diff < smallest_diff {
            smallest_diff = diff;
            best = format;
        }
    }

    best
}
