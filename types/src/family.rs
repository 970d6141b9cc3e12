//! Fixed categories of the type hierarchy and the parameterized families
//! built on top of them.
//!
//! Every table the store needs (display names, signature tags, the parent of
//! each backbone category) lives here, so adding a category means touching a
//! single `match` per property instead of one function per category.

use core::fmt;
use core::str::FromStr;

use crate::{ToString, error::TypeError};

/// A nominal category of the backbone hierarchy.
///
/// Variants are declared in dependency order: a category's parent always
/// comes before it, which is what [`Category::ALL`] relies on when the store
/// bootstraps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Partial,
    Type,
    Unit,
    String,
    Number,
    Function,
    Complex,
    Imaginary,
    Real,
    Rational,
    Integer,
    Natural,
    Boolean,
}

impl Category {
    pub const COUNT: usize = 13;

    /// All categories, parents before children.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Partial,
        Category::Type,
        Category::Unit,
        Category::String,
        Category::Number,
        Category::Function,
        Category::Complex,
        Category::Imaginary,
        Category::Real,
        Category::Rational,
        Category::Integer,
        Category::Natural,
        Category::Boolean,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Category::Partial => "Partial",
            Category::Type => "Type",
            Category::Unit => "Unit",
            Category::String => "String",
            Category::Number => "Number",
            Category::Function => "Function",
            Category::Complex => "Complex",
            Category::Imaginary => "Imaginary",
            Category::Real => "Real",
            Category::Rational => "Rational",
            Category::Integer => "Integer",
            Category::Natural => "Natural",
            Category::Boolean => "Boolean",
        }
    }

    /// Signature of the category's root node.
    pub const fn root_signature(self) -> &'static str {
        match self {
            Category::Partial => "_?",
            Category::Type => "t?",
            Category::Unit => "u0",
            Category::String => "s?",
            Category::Number => "w?",
            Category::Function => "f?",
            Category::Complex => "c?",
            Category::Imaginary => "i?",
            Category::Real => "r?",
            Category::Rational => "q?",
            Category::Integer => "z?",
            Category::Natural => "n?",
            Category::Boolean => "b?",
        }
    }

    /// The category this one refines, or `None` for categories hanging
    /// directly off the universal type.
    pub const fn parent(self) -> Option<Category> {
        match self {
            Category::Partial
            | Category::Type
            | Category::Unit
            | Category::String
            | Category::Number
            | Category::Function => None,
            Category::Complex => Some(Category::Number),
            Category::Imaginary | Category::Real => Some(Category::Complex),
            Category::Rational => Some(Category::Real),
            Category::Integer => Some(Category::Rational),
            Category::Natural => Some(Category::Integer),
            Category::Boolean => Some(Category::Natural),
        }
    }

    /// Leading signature character shared by every member of this category
    /// and by nothing else.
    ///
    /// Only defined for categories with no refined categories beneath them,
    /// since a member of a refinement carries the refinement's tag. `Unit` is
    /// excluded because its `u` also starts sum signatures.
    pub const fn signature_tag(self) -> Option<char> {
        match self {
            Category::Partial => Some('_'),
            Category::Type => Some('t'),
            Category::String => Some('s'),
            Category::Function => Some('f'),
            Category::Imaginary => Some('i'),
            Category::Boolean => Some('b'),
            Category::Unit
            | Category::Number
            | Category::Complex
            | Category::Real
            | Category::Rational
            | Category::Integer
            | Category::Natural => None,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric category whose instances are parameterized by bit-width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericFamily {
    Boolean,
    Natural,
    Integer,
    Rational,
    Real,
    Imaginary,
    Complex,
}

impl NumericFamily {
    pub const COUNT: usize = 7;

    pub const ALL: [NumericFamily; NumericFamily::COUNT] = [
        NumericFamily::Boolean,
        NumericFamily::Natural,
        NumericFamily::Integer,
        NumericFamily::Rational,
        NumericFamily::Real,
        NumericFamily::Imaginary,
        NumericFamily::Complex,
    ];

    pub const fn category(self) -> Category {
        match self {
            NumericFamily::Boolean => Category::Boolean,
            NumericFamily::Natural => Category::Natural,
            NumericFamily::Integer => Category::Integer,
            NumericFamily::Rational => Category::Rational,
            NumericFamily::Real => Category::Real,
            NumericFamily::Imaginary => Category::Imaginary,
            NumericFamily::Complex => Category::Complex,
        }
    }

    pub const fn name(self) -> &'static str {
        self.category().name()
    }

    /// Signature prefix of sized members, followed by the bit-width.
    ///
    /// Integer is `z` so it never shares a prefix with Imaginary's `i`.
    pub const fn tag(self) -> char {
        match self {
            NumericFamily::Boolean => 'b',
            NumericFamily::Natural => 'n',
            NumericFamily::Integer => 'z',
            NumericFamily::Rational => 'q',
            NumericFamily::Real => 'r',
            NumericFamily::Imaginary => 'i',
            NumericFamily::Complex => 'c',
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NumericFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Character encoding of a string type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StringEncoding {
    Ascii,
    Utf8,
}

impl StringEncoding {
    pub const fn display_name(self) -> &'static str {
        match self {
            StringEncoding::Ascii => "AsciiString",
            StringEncoding::Utf8 => "Utf8String",
        }
    }

    pub const fn signature(self) -> &'static str {
        match self {
            StringEncoding::Ascii => "sa8",
            StringEncoding::Utf8 => "su8",
        }
    }
}

impl FromStr for StringEncoding {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascii" => Ok(StringEncoding::Ascii),
            "utf8" | "utf-8" => Ok(StringEncoding::Utf8),
            other => Err(TypeError::UnknownEncoding {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for StringEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringEncoding::Ascii => f.write_str("ascii"),
            StringEncoding::Utf8 => f.write_str("utf8"),
        }
    }
}
