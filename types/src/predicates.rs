//! Hierarchy membership and refinement queries.
//!
//! The nominal test (walk the parent chain) is the source of truth for
//! category membership. [`TypeHandle::matches_signature_tag`] is a shortcut
//! that agrees with it wherever it gives an answer.

use core::iter;

use crate::{family::Category, node::TypeHandle, store::TypeStore};

impl<'a> TypeHandle<'a> {
    /// Whether `base` is a (transitive) supertype of `self`.
    ///
    /// The universal type is a base of everything, itself included. A type
    /// is not its own base otherwise.
    pub fn has_base_type(self, base: TypeHandle<'a>) -> bool {
        base.is_universal() || self.ancestors().any(|ancestor| ancestor == base)
    }

    /// Whether the parent is the universal type.
    pub fn is_root_type(self) -> bool {
        self.base().is_some_and(TypeHandle::is_universal)
    }

    /// Whether the parent is itself a root or refined type.
    pub fn is_refined_type(self) -> bool {
        self.base()
            .is_some_and(|parent| parent.is_root_type() || parent.is_refined_type())
    }

    /// Whether the type is built from component types.
    pub fn is_compound_type(self) -> bool {
        !self.components().is_empty()
    }

    /// Signature-prefix membership test.
    ///
    /// Returns `None` for categories without a unique tag (see
    /// [`Category::signature_tag`]); use
    /// [`TypeStore::is_category`] for those.
    pub fn matches_signature_tag(self, category: Category) -> Option<bool> {
        let tag = category.signature_tag()?;
        Some(self.signature().starts_with(tag))
    }

    /// Nearest type that both `self` and `other` are, or refine. Every chain
    /// ends at the universal type, so one always exists.
    pub fn common_base_type(self, other: TypeHandle<'a>) -> TypeHandle<'a> {
        iter::once(self)
            .chain(self.ancestors())
            .find(|&candidate| candidate == other || other.has_base_type(candidate))
            .unwrap_or(self)
    }
}

macro_rules! category_predicates {
    ($($name:ident => $category:ident),* $(,)?) => {
        $(
            #[doc = concat!("Whether `ty` is `", stringify!($category), "` or refines it.")]
            pub fn $name(&self, ty: TypeHandle<'a>) -> bool {
                self.is_category(ty, Category::$category)
            }
        )*
    };
}

impl<'a> TypeStore<'a> {
    /// Whether `ty` is the root of `category` or has it as a base.
    pub fn is_category(&self, ty: TypeHandle<'a>, category: Category) -> bool {
        let root = self.root(category);
        ty == root || ty.has_base_type(root)
    }

    category_predicates! {
        is_type_type => Type,
        is_unit_type => Unit,
        is_string_type => String,
        is_number_type => Number,
        is_function_type => Function,
        is_partial_type => Partial,
        is_complex_type => Complex,
        is_imaginary_type => Imaginary,
        is_real_type => Real,
        is_rational_type => Rational,
        is_integer_type => Integer,
        is_natural_type => Natural,
        is_boolean_type => Boolean,
    }
}
