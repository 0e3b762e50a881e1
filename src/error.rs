use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("memory allocation of {0} bytes failed")]
    OutOfMemory(usize),
    #[error("capacity overflow")]
    CapacityOverflow,
}
