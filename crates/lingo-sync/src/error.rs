use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("remote fetch failed: {0}")]
    Remote(#[from] lingo_remote::RemoteError),

    #[error("store error: {0}")]
    Store(#[from] lingo_store::StoreError),

    #[error("codec error: {0}")]
    Codec(#[from] lingo_codec::CodecError),
}

pub type SyncResult<T> = Result<T, SyncError>;
