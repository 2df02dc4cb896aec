use pbx_types::ObjectRef;

use crate::objects::ObjectKind;

/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The reference token is already bound to an entity.
    ///
    /// Tokens are unique across every entity kind, so an insert under an
    /// existing token is rejected regardless of the kinds involved.
    #[error("reference {reference} is already bound to a {existing}")]
    DuplicateRef {
        reference: ObjectRef,
        existing: ObjectKind,
    },

    /// No unused reference token was found within the attempt bound.
    #[error("no unused reference for {kind} after {attempts} attempts")]
    AllocationExhausted { kind: ObjectKind, attempts: u32 },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
