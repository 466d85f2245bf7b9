use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("unknown ease `{0}`")]
    UnknownEase(String),
    #[error("invalid ease parameters in `{0}`")]
    InvalidEaseParams(String),
}
