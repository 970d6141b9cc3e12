use core::{fmt, hash, iter, ops::Deref, ptr};

use bitflags::bitflags;

use crate::family::{Category, NumericFamily, StringEncoding};

bitflags! {
    /// Properties of a type computed once when it is interned.
    ///
    /// Compound types inherit the flags of their components, so asking
    /// whether a large function type still mentions a placeholder never
    /// needs a traversal.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct TypeFlags: u8 {
        /// The type has components (sum, product or function).
        const COMPOUND = 1;
        /// A placeholder type occurs in the type or any of its components.
        const HAS_PARTIAL = 1 << 1;
    }
}

/// What kind of node this is, with the parameters it was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeShape {
    /// The universal type every other type refines.
    Universal,
    /// The fixed root of a backbone category.
    Category(Category),
    /// A numeric family member with an explicit bit-width.
    Sized(NumericFamily, u32),
    /// A string type with a fixed encoding.
    Encoded(StringEncoding),
    /// An unresolved placeholder with its sequence id.
    Partial(u32),
    Sum,
    Product,
    Function,
}

impl TypeShape {
    pub(crate) fn flags(self, components: &[TypeHandle<'_>]) -> TypeFlags {
        let mut flags = match self {
            TypeShape::Partial(_) => TypeFlags::HAS_PARTIAL,
            _ => TypeFlags::empty(),
        };
        if !components.is_empty() {
            flags |= TypeFlags::COMPOUND;
        }
        for component in components {
            flags |= component.flags() & TypeFlags::HAS_PARTIAL;
        }
        flags
    }
}

/// One canonical type.
///
/// Nodes are allocated once in the store's arena and never change
/// afterwards. Type identity is decided by [`TypeHandle`] equality; the
/// `PartialEq` implemented here is structural (parent signature plus
/// signature) and only meant for diagnostics, e.g. comparing types that
/// came from two different stores.
pub struct TypeNode<'a> {
    display_name: &'a str,
    signature: &'a str,
    // `None` marks the universal type. Its logical parent is itself, but
    // traversals stop here instead of following a cycle.
    parent: Option<TypeHandle<'a>>,
    components: &'a [TypeHandle<'a>],
    shape: TypeShape,
    flags: TypeFlags,
}

impl<'a> TypeNode<'a> {
    pub(crate) fn new(
        display_name: &'a str,
        signature: &'a str,
        parent: Option<TypeHandle<'a>>,
        components: &'a [TypeHandle<'a>],
        shape: TypeShape,
    ) -> Self {
        Self {
            display_name,
            signature,
            parent,
            components,
            shape,
            flags: shape.flags(components),
        }
    }

    /// Human-readable rendering, e.g. `Natural32` or `Integer -> Real`.
    pub fn display_name(&self) -> &'a str {
        self.display_name
    }

    /// Structural encoding of the type. Equal signatures mean equal types.
    pub fn signature(&self) -> &'a str {
        self.signature
    }

    /// Component types: members for sums and products, parameters followed
    /// by the result for functions, empty otherwise.
    pub fn components(&self) -> &'a [TypeHandle<'a>] {
        self.components
    }

    pub fn shape(&self) -> TypeShape {
        self.shape
    }

    pub fn flags(&self) -> TypeFlags {
        self.flags
    }
}

impl fmt::Debug for TypeNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeNode")
            .field("display_name", &self.display_name)
            .field("signature", &self.signature)
            .field("parent", &self.parent.map(|p| p.signature()))
            .field("shape", &self.shape)
            .finish_non_exhaustive()
    }
}

/// Structural comparison. Never use this to decide type identity: compare
/// handles instead.
impl PartialEq for TypeNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.parent.map(|p| p.signature()) == other.parent.map(|p| p.signature())
            && self.signature == other.signature
    }
}

impl Eq for TypeNode<'_> {}

/// Non-owning reference to an interned [`TypeNode`].
///
/// Handles compare and hash by address: within one store two handles are
/// equal exactly when their signatures are. A handle stays valid for as long
/// as the arena behind its store, no matter how often the store value is
/// moved.
#[derive(Clone, Copy)]
pub struct TypeHandle<'a>(&'a TypeNode<'a>);

impl<'a> TypeHandle<'a> {
    pub(crate) fn new(node: &'a TypeNode<'a>) -> Self {
        Self(node)
    }

    pub fn node(self) -> &'a TypeNode<'a> {
        self.0
    }

    /// The immediate supertype. The universal type is its own parent.
    pub fn parent(self) -> TypeHandle<'a> {
        self.0.parent.unwrap_or(self)
    }

    /// The immediate supertype, or `None` for the universal type.
    pub fn base(self) -> Option<TypeHandle<'a>> {
        self.0.parent
    }

    pub fn is_universal(self) -> bool {
        self.0.parent.is_none()
    }

    /// Iterates the parent chain, nearest first, ending with the universal
    /// type. Yields nothing for the universal type itself.
    pub fn ancestors(self) -> Ancestors<'a> {
        Ancestors { next: self.base() }
    }

    pub fn contains_partial(self) -> bool {
        self.0.flags.contains(TypeFlags::HAS_PARTIAL)
    }

    /// Parameter types of a function type.
    pub fn function_params(self) -> Option<&'a [TypeHandle<'a>]> {
        match self.0.shape {
            TypeShape::Function => self.0.components.split_last().map(|(_, params)| params),
            _ => None,
        }
    }

    /// Result type of a function type.
    pub fn function_result(self) -> Option<TypeHandle<'a>> {
        match self.0.shape {
            TypeShape::Function => self.0.components.last().copied(),
            _ => None,
        }
    }
}

impl<'a> Deref for TypeHandle<'a> {
    type Target = TypeNode<'a>;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl PartialEq for TypeHandle<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.0, other.0)
    }
}

impl Eq for TypeHandle<'_> {}

impl hash::Hash for TypeHandle<'_> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        ptr::hash(self.0, state)
    }
}

impl fmt::Debug for TypeHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHandle({})", self.0.signature)
    }
}

impl fmt::Display for TypeHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.display_name)
    }
}

/// Iterator over a type's ancestors. See [`TypeHandle::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    next: Option<TypeHandle<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = TypeHandle<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.base();
        Some(current)
    }
}

impl iter::FusedIterator for Ancestors<'_> {}
