//! Interned type representation for the ilang front end.
//!
//! Every type a program can mention is a [`TypeNode`] owned by a
//! [`TypeStore`]. Structurally equal requests always produce the same
//! [`TypeHandle`], so type identity is a pointer comparison.
//!
//! The store is threaded by value: queries (`find_*`) borrow it and never
//! change it, constructions (`get_*`) consume it and return it together with
//! their result.
//!
//! # Example
//!
//! ```
//! use ilang_types::TypeStore;
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let store = TypeStore::new(&arena);
//!
//! let (store, nat8) = store.get_natural_type(8);
//! let (store, int32) = store.get_integer_type(32);
//!
//! assert!(store.is_integer_type(nat8));
//! assert!(!store.is_natural_type(int32));
//! assert_eq!(nat8.signature(), "n8");
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{format, string::String, string::ToString, vec, vec::Vec};

mod construct;
mod error;
mod family;
mod node;
mod options;
mod predicates;
mod query;
mod signature;
mod store;


pub use error::TypeError;
pub use family::{Category, NumericFamily, StringEncoding};
pub use node::{Ancestors, TypeFlags, TypeHandle, TypeNode, TypeShape};
pub use options::{SingletonSum, StoreOptions};
pub use store::{TryTypeResult, TypeResult, TypeStore};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_interning() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
