//! ilang - interned types for a statically typed expression language
//!
//! # Overview
//!
//! This crate is the entry point for hosts embedding the ilang front end. The
//! type representation lives in [`ilang_types`]; everything here is
//! re-exported so a host only needs one dependency.
//!
//! # Quick Start
//!
//! ```
//! use ilang::{Category, TypeStore};
//! use bumpalo::Bump;
//!
//! // All type data lives in the arena; handles stay valid while it does.
//! let arena = Bump::new();
//! let store = TypeStore::new(&arena);
//!
//! let (store, int32) = store.get_integer_type(32);
//! let (store, text) = store.get_string_type(None);
//! let (store, boolean) = store.get_boolean_type(0);
//! let (store, predicate) = store.get_function_type(&[int32, text], boolean);
//! let predicate = predicate.unwrap();
//!
//! assert_eq!(predicate.display_name(), "Integer32 -> String -> Boolean");
//! assert!(store.is_category(predicate, Category::Function));
//! ```
//!
//! # Threading the store
//!
//! Constructions take the [`TypeStore`] by value and hand it back with their
//! result, so a compiler pass that creates types takes ownership of the store
//! and returns it:
//!
//! ```
//! use ilang::TypeStore;
//!
//! fn declare_counter(store: TypeStore<'_>) -> TypeStore<'_> {
//!     let (store, _) = store.get_natural_type(64);
//!     store
//! }
//! ```

pub use ilang_types::{
    Ancestors, Category, NumericFamily, SingletonSum, StoreOptions, StringEncoding, TryTypeResult,
    TypeError, TypeFlags, TypeHandle, TypeNode, TypeResult, TypeShape, TypeStore,
};

/// Re-exported so hosts can name the arena type without a direct dependency.
pub use bumpalo::Bump;
