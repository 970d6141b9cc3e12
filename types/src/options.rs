//! Configuration options for a type store.

/// What a sum over a single distinct member turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingletonSum {
    /// Return the member itself. `A | A` is just `A`.
    #[default]
    Collapse,

    /// Intern a one-member sum node (`u1<sig>`) distinct from the member.
    Intern,
}

/// Configuration options for a [`TypeStore`](crate::TypeStore).
///
/// # Example
///
/// ```
/// use ilang_types::{SingletonSum, StoreOptions};
///
/// let options = StoreOptions {
///     singleton_sum: SingletonSum::Intern,
///     ..StoreOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// How single-member sums are interned.
    ///
    /// Default: `SingletonSum::Collapse`
    pub singleton_sum: SingletonSum,

    /// Initial capacity of every per-family index.
    ///
    /// Default: 16
    pub index_capacity: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            singleton_sum: SingletonSum::default(),
            index_capacity: 16,
        }
    }
}
