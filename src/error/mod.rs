mod io;
mod signature;

pub use io::IoError;
pub use signature::SignatureError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Signature(#[from] SignatureError),
}

pub type Result<T> = std::result::Result<T, Error>;
