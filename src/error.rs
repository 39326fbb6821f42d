use std::collections::TryReserveError;

use thiserror::Error;

/// The ways a sort call can fail.
///
/// The slice entry points can only ever report [`ResourceExhaustion`]; the
/// pointer/length entry points additionally reject a null pointer paired
/// with a nonzero length.
///
/// [`ResourceExhaustion`]: SortError::ResourceExhaustion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A null pointer was passed together with a nonzero length.
    #[error("null pointer passed for a sequence of length {len}")]
    InvalidArgument { len: usize },

    /// Allocating the temporary merge buffers failed.
    #[error("failed to allocate merge scratch space: {0}")]
    ResourceExhaustion(#[from] TryReserveError),
}
