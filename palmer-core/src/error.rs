/// Errors at the edges of the notation engine. The notation functions
/// themselves are total; these come from parsing external input.
#[derive(thiserror::Error, Debug)]
pub enum NotationError {
    #[error("unrecognized quadrant label: {0:?}")]
    UnknownQuadrant(String),

    #[error("malformed finding {0:?}, expected <quadrant>:<symbols>")]
    MalformedFinding(String),

    #[error("finding index {index} out of range ({len} findings)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
