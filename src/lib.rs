//! Growable array containers built directly on raw memory.
//!
//! Storage and occupancy are managed in separate layers:
//! [`alloc::RawArray`] owns untyped capacity and never touches element
//! lifetimes, while [`array::DynArray`] tracks the live prefix and
//! performs every construction, relocation and destruction.
pub mod alloc;
pub mod array;
pub mod error;

pub use array::{DynArray, IntoIter};
pub use error::{Error, Result};
