use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("path `{path}` uses `{segment}` as both a leaf and a branch prefix")]
    PathCollision { path: String, segment: String },

    #[error("empty path")]
    EmptyPath,
}

pub type CodecResult<T> = Result<T, CodecError>;
