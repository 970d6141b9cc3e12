//! Find-or-create constructions.
//!
//! Every `get_*` method consumes the store and returns it alongside its
//! result. A hit returns the existing handle and leaves the store as it was;
//! a miss allocates exactly one node and registers it in its family index.

use crate::{
    Vec,
    error::TypeError,
    family::{Category, NumericFamily, StringEncoding},
    node::{TypeHandle, TypeShape},
    options::SingletonSum,
    query::canonical_members,
    signature::{self, Naming},
    store::{Draft, TryTypeResult, TypeResult, TypeStore},
};

macro_rules! sized_getters {
    ($($name:ident => $family:ident),* $(,)?) => {
        $(
            #[doc = concat!("Gets or creates the `", stringify!($family), "` type of the given width; 0 means the family root.")]
            pub fn $name(self, bits: u32) -> TypeResult<'a> {
                self.get_sized_type(NumericFamily::$family, bits)
            }
        )*
    };
}

impl<'a> TypeStore<'a> {
    pub fn get_universal_type(self) -> TypeResult<'a> {
        let ty = self.universal();
        (self, ty)
    }

    /// Returns the fixed root of `category`. Never allocates.
    pub fn get_root_type(self, category: Category) -> TypeResult<'a> {
        let ty = self.root(category);
        (self, ty)
    }

    pub fn get_unit_type(self) -> TypeResult<'a> {
        self.get_root_type(Category::Unit)
    }

    pub fn get_type_type(self) -> TypeResult<'a> {
        self.get_root_type(Category::Type)
    }

    pub fn get_number_type(self) -> TypeResult<'a> {
        self.get_root_type(Category::Number)
    }

    /// Gets or creates the member of `family` with the given bit-width.
    ///
    /// A width of 0 returns the family root without allocating. A new sized
    /// type is parented to the family root, never to a sibling width.
    pub fn get_sized_type(mut self, family: NumericFamily, bits: u32) -> TypeResult<'a> {
        let ty = self.sized(family, bits);
        (self, ty)
    }

    sized_getters! {
        get_boolean_type => Boolean,
        get_natural_type => Natural,
        get_integer_type => Integer,
        get_rational_type => Rational,
        get_real_type => Real,
        get_imaginary_type => Imaginary,
        get_complex_type => Complex,
    }

    /// Gets or creates a string type. `None` returns the String root.
    ///
    /// Encodings that arrive as text are parsed with
    /// [`StringEncoding::from_str`](core::str::FromStr::from_str), which
    /// reports unknown names as [`TypeError::UnknownEncoding`].
    pub fn get_string_type(mut self, encoding: Option<StringEncoding>) -> TypeResult<'a> {
        let ty = self.string(encoding);
        (self, ty)
    }

    /// Creates a fresh placeholder. Placeholders are never shared: every
    /// call yields a new type with the next sequence id.
    pub fn get_partial_type(mut self) -> TypeResult<'a> {
        let ty = self.partial();
        (self, ty)
    }

    /// Gets or creates the sum of `members`, in any order and with
    /// duplicates allowed.
    ///
    /// With [`SingletonSum::Collapse`] a single distinct member is returned
    /// as is.
    pub fn get_sum_type(mut self, members: &[TypeHandle<'a>]) -> TryTypeResult<'a> {
        let ty = self.sum(members);
        (self, ty)
    }

    /// Gets or creates the product of `components`. Order matters and at
    /// least two components are required.
    pub fn get_product_type(mut self, components: &[TypeHandle<'a>]) -> TryTypeResult<'a> {
        let ty = self.product(components);
        (self, ty)
    }

    /// Gets or creates the function type `params -> result`. At least one
    /// parameter is required.
    pub fn get_function_type(
        mut self,
        params: &[TypeHandle<'a>],
        result: TypeHandle<'a>,
    ) -> TryTypeResult<'a> {
        let ty = self.function(params, result);
        (self, ty)
    }

    fn sized(&mut self, family: NumericFamily, bits: u32) -> TypeHandle<'a> {
        if let Some(ty) = self.find_sized_type(family, bits) {
            tracing::trace!(%family, bits, "sized type hit");
            return ty;
        }
        let ty = self.alloc_unique(Draft {
            naming: signature::sized(family, bits),
            parent: self.root(family.category()),
            components: &[],
            shape: TypeShape::Sized(family, bits),
        });
        self.sized[family.index()].insert(bits, ty);
        ty
    }

    fn string(&mut self, encoding: Option<StringEncoding>) -> TypeHandle<'a> {
        if let Some(ty) = self.find_string_type(encoding) {
            return ty;
        }
        // `find_string_type(None)` always hits, so only encoded strings
        // reach this point.
        let Some(encoding) = encoding else {
            return self.root(Category::String);
        };
        let ty = self.alloc_unique(Draft {
            naming: Naming {
                display_name: encoding.display_name().into(),
                signature: encoding.signature().into(),
            },
            parent: self.root(Category::String),
            components: &[],
            shape: TypeShape::Encoded(encoding),
        });
        self.strings.insert(encoding, ty);
        ty
    }

    fn partial(&mut self) -> TypeHandle<'a> {
        let Ok(id) = u32::try_from(self.partials.len()) else {
            panic!("partial type id overflowed");
        };
        let ty = self.alloc_unique(Draft {
            naming: signature::partial(id),
            parent: self.root(Category::Partial),
            components: &[],
            shape: TypeShape::Partial(id),
        });
        self.partials.push(ty);
        ty
    }

    fn sum(&mut self, members: &[TypeHandle<'a>]) -> Result<TypeHandle<'a>, TypeError> {
        for &member in members {
            self.check_owned(member)?;
        }
        let members: Vec<TypeHandle<'a>> = canonical_members(members);
        if members.is_empty() {
            return Err(TypeError::EmptySum);
        }
        if let Some(ty) = self.find_sum_type(&members) {
            tracing::trace!(arity = members.len(), "sum type hit");
            return Ok(ty);
        }
        debug_assert!(members.len() > 1 || self.options.singleton_sum == SingletonSum::Intern);

        let ty = self.alloc(Draft {
            naming: signature::compound('u', " | ", &members),
            parent: self.universal,
            components: &members,
            shape: TypeShape::Sum,
        })?;
        self.sums.insert(ty.components(), ty);
        Ok(ty)
    }

    fn product(&mut self, components: &[TypeHandle<'a>]) -> Result<TypeHandle<'a>, TypeError> {
        if components.len() < 2 {
            return Err(TypeError::ProductArity {
                found: components.len(),
            });
        }
        for &component in components {
            self.check_owned(component)?;
        }
        if let Some(ty) = self.find_product_type(components) {
            tracing::trace!(arity = components.len(), "product type hit");
            return Ok(ty);
        }

        let ty = self.alloc(Draft {
            naming: signature::compound('p', " * ", components),
            parent: self.universal,
            components,
            shape: TypeShape::Product,
        })?;
        self.products.insert(ty.components(), ty);
        Ok(ty)
    }

    fn function(
        &mut self,
        params: &[TypeHandle<'a>],
        result: TypeHandle<'a>,
    ) -> Result<TypeHandle<'a>, TypeError> {
        if params.is_empty() {
            return Err(TypeError::NullaryFunction);
        }
        for &ty in params.iter().chain([&result]) {
            self.check_owned(ty)?;
        }
        if let Some(ty) = self.find_function_type(params, result) {
            tracing::trace!(params = params.len(), "function type hit");
            return Ok(ty);
        }

        let mut components = Vec::with_capacity(params.len() + 1);
        components.extend_from_slice(params);
        components.push(result);
        let ty = self.alloc(Draft {
            naming: signature::function(params, result),
            parent: self.root(Category::Function),
            components: &components,
            shape: TypeShape::Function,
        })?;

        // Key the index by the node's own arena copy of the parameters.
        let (arena_params, _) = ty.components().split_at(params.len());
        match self.functions.get_mut(arena_params) {
            Some(by_result) => {
                by_result.insert(result, ty);
            }
            None => {
                let mut by_result = hashbrown::HashMap::new_in(self.arena);
                by_result.insert(result, ty);
                self.functions.insert(arena_params, by_result);
            }
        }
        Ok(ty)
    }
}
