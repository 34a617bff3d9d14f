use thiserror::Error;

use crate::store::Version;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("element not found in container")]
    NotFound,
    #[error("cursor out of range: position {position} of {len}")]
    OutOfRange { position: usize, len: usize },
    #[error("container modified during iteration: cursor captured version {expected}, container is at {found}")]
    ConcurrentModification { expected: Version, found: Version },
    #[error("unknown order kind: {0}")]
    UnknownOrderKind(String),
}
