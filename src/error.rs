use thiserror::Error;

/// Returned by [`crate::stable::top_down::try_merge`] when the inputs can not be merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("destination holds {dst} elements, expected left ({left}) + right ({right})")]
    LengthMismatch {
        dst: usize,
        left: usize,
        right: usize,
    },
}
