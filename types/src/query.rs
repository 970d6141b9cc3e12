//! Pure lookups. Nothing here allocates or changes the store.

use crate::{
    Vec,
    family::{Category, NumericFamily, StringEncoding},
    node::TypeHandle,
    options::SingletonSum,
    store::TypeStore,
};

/// Sorts by signature and drops duplicates.
///
/// Within one store equal signatures mean equal handles, so deduplicating
/// handles after sorting leaves exactly one handle per distinct type.
pub(crate) fn canonical_members<'a>(members: &[TypeHandle<'a>]) -> Vec<TypeHandle<'a>> {
    let mut members = members.to_vec();
    members.sort_by(|a, b| a.signature().cmp(b.signature()));
    members.dedup();
    members
}

macro_rules! sized_finders {
    ($($name:ident => $family:ident),* $(,)?) => {
        $(
            #[doc = concat!("Finds the `", stringify!($family), "` type of the given width; 0 means the family root.")]
            pub fn $name(&self, bits: u32) -> Option<TypeHandle<'a>> {
                self.find_sized_type(NumericFamily::$family, bits)
            }
        )*
    };
}

impl<'a> TypeStore<'a> {
    /// The universal type, parent of every root type.
    pub fn universal(&self) -> TypeHandle<'a> {
        self.universal
    }

    /// The fixed root node of `category`.
    pub fn root(&self, category: Category) -> TypeHandle<'a> {
        self.roots[category.index()]
    }

    pub fn find_unit_type(&self) -> TypeHandle<'a> {
        self.root(Category::Unit)
    }

    pub fn find_type_type(&self) -> TypeHandle<'a> {
        self.root(Category::Type)
    }

    pub fn find_number_type(&self) -> TypeHandle<'a> {
        self.root(Category::Number)
    }

    /// Finds the member of `family` with the given bit-width.
    ///
    /// A width of 0 names the unparameterized family root, which always
    /// exists. Any other width is only found if it was constructed before.
    pub fn find_sized_type(&self, family: NumericFamily, bits: u32) -> Option<TypeHandle<'a>> {
        if bits == 0 {
            return Some(self.root(family.category()));
        }
        self.sized[family.index()].get(&bits).copied()
    }

    sized_finders! {
        find_boolean_type => Boolean,
        find_natural_type => Natural,
        find_integer_type => Integer,
        find_rational_type => Rational,
        find_real_type => Real,
        find_imaginary_type => Imaginary,
        find_complex_type => Complex,
    }

    /// `None` finds the String root.
    pub fn find_string_type(&self, encoding: Option<StringEncoding>) -> Option<TypeHandle<'a>> {
        match encoding {
            None => Some(self.root(Category::String)),
            Some(encoding) => self.strings.get(&encoding).copied(),
        }
    }

    /// `None` finds the Partial root; `Some(id)` finds the placeholder with
    /// that sequence id.
    pub fn find_partial_type(&self, id: Option<u32>) -> Option<TypeHandle<'a>> {
        match id {
            None => Some(self.root(Category::Partial)),
            Some(id) => self.partials.get(usize::try_from(id).ok()?).copied(),
        }
    }

    /// Finds a sum type by its canonical member list (sorted by signature,
    /// no duplicates). A non-canonical list is simply not found; use
    /// [`find_sum_type_canonical`](Self::find_sum_type_canonical) to
    /// canonicalize first.
    pub fn find_sum_type(&self, members: &[TypeHandle<'a>]) -> Option<TypeHandle<'a>> {
        match (members, self.options.singleton_sum) {
            ([only], SingletonSum::Collapse) => Some(*only),
            _ => self.sums.get(members).copied(),
        }
    }

    /// Finds a sum type over `members` in any order, duplicates allowed.
    pub fn find_sum_type_canonical(&self, members: &[TypeHandle<'a>]) -> Option<TypeHandle<'a>> {
        self.find_sum_type(&canonical_members(members))
    }

    /// Finds a product type. Component order matters.
    pub fn find_product_type(&self, components: &[TypeHandle<'a>]) -> Option<TypeHandle<'a>> {
        self.products.get(components).copied()
    }

    pub fn find_function_type(
        &self,
        params: &[TypeHandle<'a>],
        result: TypeHandle<'a>,
    ) -> Option<TypeHandle<'a>> {
        self.functions.get(params)?.get(&result).copied()
    }

    /// The Function root, which every function type refines.
    pub fn find_function_root(&self) -> TypeHandle<'a> {
        self.root(Category::Function)
    }

    /// Finds a type by its exact display name. When several types render
    /// the same way, the earliest created one wins.
    pub fn find_type_by_name(&self, name: &str) -> Option<TypeHandle<'a>> {
        self.search_by_name(name)
    }

    /// Finds a type by its exact signature.
    pub fn find_type_by_signature(&self, signature: &str) -> Option<TypeHandle<'a>> {
        self.search_by_signature(signature)
    }
}
