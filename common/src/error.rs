/// Errors from maze generation and configuration.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MazeError {
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
