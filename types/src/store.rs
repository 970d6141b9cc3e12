use bumpalo::Bump;
use hashbrown::{DefaultHashBuilder, HashMap};

use crate::{
    String, ToString, Vec,
    error::TypeError,
    family::{Category, NumericFamily, StringEncoding},
    node::{TypeHandle, TypeNode, TypeShape},
    options::StoreOptions,
    signature::Naming,
};

pub(crate) type Index<'a, K> = HashMap<K, TypeHandle<'a>, DefaultHashBuilder, &'a Bump>;

/// A store threaded through a construction, paired with what it produced.
pub type TypeResult<'a, T = TypeHandle<'a>> = (TypeStore<'a>, T);

/// Outcome of a construction that may refuse its request.
pub type TryTypeResult<'a> = TypeResult<'a, Result<TypeHandle<'a>, TypeError>>;

/// Owner of every type created for one compilation.
///
/// Nodes live in the arena the store was created with and are never moved
/// or freed while the arena lives, so handles survive any number of moves of
/// the store value itself. Queries (`find_*`) borrow the store; constructions
/// (`get_*`) consume it and hand it back together with their result, so only
/// one owner can ever grow it.
///
/// # Example
///
/// ```
/// use ilang_types::TypeStore;
/// use bumpalo::Bump;
///
/// let arena = Bump::new();
/// let store = TypeStore::new(&arena);
///
/// let (store, int32) = store.get_integer_type(32);
/// let (store, text) = store.get_string_type(None);
/// let (store, pair) = store.get_product_type(&[int32, text]);
///
/// assert_eq!(pair.unwrap().display_name(), "Integer32 * String");
/// assert_eq!(store.find_integer_type(32), Some(int32));
/// ```
pub struct TypeStore<'a> {
    pub(crate) arena: &'a Bump,
    pub(crate) options: StoreOptions,

    pub(crate) universal: TypeHandle<'a>,
    // Indexed by `Category::index`.
    pub(crate) roots: Vec<TypeHandle<'a>>,

    // Every node in creation order.
    nodes: Vec<TypeHandle<'a>>,
    // Secondary indices kept sorted for binary search. Equal display names
    // keep creation order.
    by_name: Vec<TypeHandle<'a>>,
    by_signature: Vec<TypeHandle<'a>>,

    // Indexed by `NumericFamily::index`.
    pub(crate) sized: [Index<'a, u32>; NumericFamily::COUNT],
    pub(crate) strings: Index<'a, StringEncoding>,
    pub(crate) sums: Index<'a, &'a [TypeHandle<'a>]>,
    pub(crate) products: Index<'a, &'a [TypeHandle<'a>]>,
    pub(crate) functions:
        HashMap<&'a [TypeHandle<'a>], Index<'a, TypeHandle<'a>>, DefaultHashBuilder, &'a Bump>,
    pub(crate) partials: Vec<TypeHandle<'a>>,
}

/// Everything needed to allocate one node.
pub(crate) struct Draft<'s, 'a> {
    pub naming: Naming,
    pub parent: TypeHandle<'a>,
    pub components: &'s [TypeHandle<'a>],
    pub shape: TypeShape,
}

impl<'a> TypeStore<'a> {
    /// Creates a store with default options and the backbone hierarchy
    /// already built.
    pub fn new(arena: &'a Bump) -> Self {
        Self::with_options(arena, StoreOptions::default())
    }

    pub fn with_options(arena: &'a Bump, options: StoreOptions) -> Self {
        let universal = TypeHandle::new(arena.alloc(TypeNode::new(
            "Infinity",
            "??",
            None,
            &[],
            TypeShape::Universal,
        )));

        // Parents precede children in `Category::ALL`, so every parent
        // lookup below hits an already-built root.
        let mut roots: Vec<TypeHandle<'a>> = Vec::with_capacity(Category::COUNT);
        for category in Category::ALL {
            let parent = match category.parent() {
                Some(parent) => roots[parent.index()],
                None => universal,
            };
            roots.push(TypeHandle::new(arena.alloc(TypeNode::new(
                category.name(),
                category.root_signature(),
                Some(parent),
                &[],
                TypeShape::Category(category),
            ))));
        }

        let capacity = options.index_capacity;
        let mut store = Self {
            arena,
            universal,
            roots: Vec::new(),
            nodes: Vec::with_capacity(capacity + Category::COUNT + 1),
            by_name: Vec::with_capacity(capacity + Category::COUNT + 1),
            by_signature: Vec::with_capacity(capacity + Category::COUNT + 1),
            sized: core::array::from_fn(|_| HashMap::with_capacity_in(capacity, arena)),
            strings: HashMap::new_in(arena),
            sums: HashMap::with_capacity_in(capacity, arena),
            products: HashMap::with_capacity_in(capacity, arena),
            functions: HashMap::with_capacity_in(capacity, arena),
            partials: Vec::new(),
            options,
        };

        store.record(universal);
        for &root in &roots {
            store.record(root);
        }
        store.roots = roots;

        tracing::debug!(types = store.len(), "type store bootstrapped");
        store
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Number of interned types, backbone included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the backbone is built on creation.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every interned type in creation order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = TypeHandle<'a>> + '_ {
        self.nodes.iter().copied()
    }

    /// Number of placeholder types handed out so far.
    pub fn partial_count(&self) -> usize {
        self.partials.len()
    }

    /// Whether `ty` was interned by this store.
    pub fn owns(&self, ty: TypeHandle<'a>) -> bool {
        self.find_type_by_signature(ty.signature()) == Some(ty)
    }

    pub(crate) fn search_by_name(&self, name: &str) -> Option<TypeHandle<'a>> {
        let pos = self
            .by_name
            .partition_point(|ty| ty.display_name() < name);
        self.by_name
            .get(pos)
            .copied()
            .filter(|ty| ty.display_name() == name)
    }

    pub(crate) fn search_by_signature(&self, signature: &str) -> Option<TypeHandle<'a>> {
        self.by_signature
            .binary_search_by(|ty| ty.signature().cmp(signature))
            .ok()
            .map(|pos| self.by_signature[pos])
    }

    /// Rejects `ty` unless it belongs to this store.
    pub(crate) fn check_owned(&self, ty: TypeHandle<'a>) -> Result<(), TypeError> {
        if self.owns(ty) {
            Ok(())
        } else {
            Err(TypeError::ForeignType {
                signature: ty.signature().to_string(),
            })
        }
    }

    /// Allocates a node for `draft` and registers it in the creation-order
    /// list and both sorted indices. Family indices are the caller's job.
    pub(crate) fn alloc(&mut self, draft: Draft<'_, 'a>) -> Result<TypeHandle<'a>, TypeError> {
        let signature = draft.naming.signature.as_str();
        if let Some(existing) = self.search_by_signature(signature) {
            tracing::error!(
                signature,
                existing = existing.display_name(),
                requested = draft.naming.display_name.as_str(),
                "signature collision while interning"
            );
            return Err(TypeError::SignatureCollision {
                signature: String::from(signature),
            });
        }

        let node = TypeNode::new(
            self.arena.alloc_str(&draft.naming.display_name),
            self.arena.alloc_str(signature),
            Some(draft.parent),
            self.arena.alloc_slice_copy(draft.components),
            draft.shape,
        );
        let ty = TypeHandle::new(self.arena.alloc(node));
        self.record(ty);

        tracing::debug!(
            signature = ty.signature(),
            name = ty.display_name(),
            parent = ty.parent().signature(),
            "interned type"
        );
        Ok(ty)
    }

    /// Like [`alloc`](Self::alloc), for families whose signatures cannot
    /// collide unless the store is corrupt.
    ///
    /// # Panics
    /// Panics on a signature collision.
    pub(crate) fn alloc_unique(&mut self, draft: Draft<'_, 'a>) -> TypeHandle<'a> {
        self.alloc(draft)
            .unwrap_or_else(|e| panic!("type store invariant violated: {e}"))
    }

    fn record(&mut self, ty: TypeHandle<'a>) {
        self.nodes.push(ty);

        let name = ty.display_name();
        let pos = self.by_name.partition_point(|t| t.display_name() <= name);
        self.by_name.insert(pos, ty);

        let signature = ty.signature();
        let pos = self
            .by_signature
            .partition_point(|t| t.signature() < signature);
        self.by_signature.insert(pos, ty);
    }
}

impl core::fmt::Debug for TypeStore<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypeStore")
            .field("arena", &(self.arena as *const Bump))
            .field("len", &self.nodes.len())
            .field("partials", &self.partials.len())
            .finish_non_exhaustive()
    }
}
