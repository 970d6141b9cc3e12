//! Errors reported by type construction.
//!
//! A query that finds nothing is not an error: `find_*` methods return
//! `None`. Everything here is a construction request the store refused, or
//! a broken store invariant.

use crate::String;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// A string encoding name that no string type exists for.
    #[error("unknown string encoding `{name}`")]
    UnknownEncoding { name: String },

    /// A sum type was requested over an empty member list.
    #[error("a sum type needs at least one member")]
    EmptySum,

    /// A product type was requested with fewer than two components.
    #[error("a product type needs at least two components, found {found}")]
    ProductArity { found: usize },

    /// A function type was requested without parameters.
    #[error("a function type needs at least one parameter")]
    NullaryFunction,

    /// A component handle was issued by a different store.
    #[error("type `{signature}` does not belong to this store")]
    ForeignType { signature: String },

    /// A new node would share its signature with an existing, different
    /// node. Signatures are injective by construction, so this means the
    /// store itself is corrupt.
    #[error("signature `{signature}` is already held by another type")]
    SignatureCollision { signature: String },
}

impl TypeError {
    /// Whether this error reports a defect in the store rather than a bad
    /// request.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, TypeError::SignatureCollision { .. })
    }
}
