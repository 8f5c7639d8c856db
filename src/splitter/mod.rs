mod breakpoint;
mod length;
mod thread;

#[cfg(test)]
mod tests;

pub use length::{effective_length, URL_FIXED_LENGTH};
pub use thread::{split_into_thread, strip_numbering, Segment, ThreadSplitResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard per-segment character cap on X (configurable)
pub const DEFAULT_SEGMENT_LIMIT: usize = 280;

/// Space reserved for a " 1/10" style numbering suffix during the first pass
pub const DEFAULT_NUMBERING_RESERVE: usize = 6;

/// Segment count past which a shortening warning is emitted
pub const DEFAULT_WARN_THRESHOLD: usize = 10;

#[derive(Error, Debug)]
pub enum LimitsError {
    #[error("per-segment limit must be positive")]
    ZeroLimit,

    #[error("numbering reserve ({reserve}) leaves no working budget under limit {limit}")]
    ReserveTooLarge { reserve: usize, limit: usize },
}

/// Platform limits driving one split operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLimits {
    /// Hard cap on each segment's effective length
    pub per_segment_limit: usize,
    /// First-pass reserve for the numbering suffix
    pub numbering_reserve: usize,
    /// Segment count above which a length warning is added
    pub warn_threshold: usize,
}

impl Default for SplitLimits {
    fn default() -> Self {
        Self {
            per_segment_limit: DEFAULT_SEGMENT_LIMIT,
            numbering_reserve: DEFAULT_NUMBERING_RESERVE,
            warn_threshold: DEFAULT_WARN_THRESHOLD,
        }
    }
}

impl SplitLimits {
    /// Reject configurations whose working budget would be non-positive.
    ///
    /// The splitter itself assumes valid limits; callers at the process
    /// boundary are expected to run this before splitting.
    pub fn validate(&self) -> Result<(), LimitsError> {
        if self.per_segment_limit == 0 {
            return Err(LimitsError::ZeroLimit);
        }
        if self.numbering_reserve >= self.per_segment_limit {
            return Err(LimitsError::ReserveTooLarge {
                reserve: self.numbering_reserve,
                limit: self.per_segment_limit,
            });
        }
        Ok(())
    }
}
