//! Display names and signatures for parameterized types.
//!
//! Signatures concatenate component signatures without delimiters. That is
//! still uniquely decodable: every signature starts with a non-digit tag,
//! numeric fields run until the next non-digit, and compound signatures
//! carry their arity up front. The store additionally rejects any insertion
//! whose signature is already taken.

use core::fmt::Write;

use crate::{String, family::NumericFamily, node::TypeHandle};

/// The two strings every new node needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Naming {
    pub display_name: String,
    pub signature: String,
}

/// `Natural32` / `n32`.
pub(crate) fn sized(family: NumericFamily, bits: u32) -> Naming {
    let mut naming = Naming {
        display_name: String::from(family.name()),
        signature: String::new(),
    };
    let _ = write!(naming.display_name, "{bits}");
    let _ = write!(naming.signature, "{}{bits}", family.tag());
    naming
}

/// `Partial3` / `_3`.
pub(crate) fn partial(id: u32) -> Naming {
    let mut naming = Naming {
        display_name: String::new(),
        signature: String::new(),
    };
    let _ = write!(naming.display_name, "Partial{id}");
    let _ = write!(naming.signature, "_{id}");
    naming
}

/// `A | B` / `u2<a><b>` for sums, `A * B` / `p2<a><b>` for products.
pub(crate) fn compound(tag: char, separator: &str, members: &[TypeHandle<'_>]) -> Naming {
    let mut naming = Naming {
        display_name: String::new(),
        signature: String::new(),
    };
    let _ = write!(naming.signature, "{tag}{}", members.len());
    for (i, member) in members.iter().enumerate() {
        if i > 0 {
            naming.display_name.push_str(separator);
        }
        naming.display_name.push_str(member.display_name());
        naming.signature.push_str(member.signature());
    }
    naming
}

/// `A -> B -> R` / `f2<r><a><b>`.
///
/// The result signature comes right after the parameter count so it can be
/// read without skipping over the parameters.
pub(crate) fn function(params: &[TypeHandle<'_>], result: TypeHandle<'_>) -> Naming {
    let mut naming = Naming {
        display_name: String::new(),
        signature: String::new(),
    };
    let _ = write!(naming.signature, "f{}{}", params.len(), result.signature());
    for param in params {
        naming.display_name.push_str(param.display_name());
        naming.display_name.push_str(" -> ");
        naming.signature.push_str(param.signature());
    }
    naming.display_name.push_str(result.display_name());
    naming
}
