use alloc::string::String;

/// Configuration errors reported by [`crate::Scroller::new`] and the string parsers.
///
/// Running operations (`call`, `cancel`, `set_target`) never fail.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum Error {
    #[error("duration must be a finite number of milliseconds greater than zero (got {0})")]
    InvalidDuration(f64),

    #[error("frame rate must be greater than zero")]
    InvalidFrameRate,

    #[error("unknown position mode: {0:?} (expected start, top, center or end)")]
    UnknownPosition(String),

    #[error("unknown offset resolution: {0:?} (expected scoped or document-relative)")]
    UnknownOffsetResolution(String),
}

pub type Result<T> = core::result::Result<T, Error>;
