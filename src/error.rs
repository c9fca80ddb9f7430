use thiserror::Error;

/// Errors surfaced by the fallible, allocating entry points of [`crate::SwissMap`].
///
/// Every other operation (`get`, `remove`, `contains_key`, `len`, `capacity`)
/// is infallible: "key not present" is `None`/`false`, never an error.
#[derive(Error, Debug)]
pub enum SwissMapError {
    #[error("failed to allocate a table of {capacity} slots")]
    AllocationFailed { capacity: usize },
    #[error("requested capacity {requested} has no representable power-of-two table size")]
    CapacityOverflow { requested: usize },
}

pub type Result<T> = std::result::Result<T, SwissMapError>;
