//! Set-valued gradual types.
//!
//! A `Type` is either the wildcard `Any` or a non-empty set of primitive tags
//! drawn from {Nil, Numeric, String, Boolean}. `Any` is compatible with every
//! tag in both directions, which is what lets unannotated function parameters
//! flow through checked arithmetic.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Primitive type tags.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeTags: u8 {
        const NIL = 1 << 0;
        const NUMERIC = 1 << 1;
        const STRING = 1 << 2;
        const BOOLEAN = 1 << 3;
    }
}

impl TypeTags {
    /// Name of a single tag, in declaration order.
    const NAMES: [(TypeTags, &'static str); 4] = [
        (TypeTags::NIL, "Nil"),
        (TypeTags::NUMERIC, "Numeric"),
        (TypeTags::STRING, "String"),
        (TypeTags::BOOLEAN, "Boolean"),
    ];
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
enum Repr {
    Any,
    Tags(TypeTags),
}

/// A gradual type: `Any`, or a non-empty set of primitive tags.
///
/// Concrete types are built from the tag constants and `union`, so the empty
/// set is unrepresentable.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Type(Repr);

impl Type {
    pub const ANY: Type = Type(Repr::Any);
    pub const NIL: Type = Type(Repr::Tags(TypeTags::NIL));
    pub const NUMERIC: Type = Type(Repr::Tags(TypeTags::NUMERIC));
    pub const STRING: Type = Type(Repr::Tags(TypeTags::STRING));
    pub const BOOLEAN: Type = Type(Repr::Tags(TypeTags::BOOLEAN));

    /// `other`'s tags are a subset of `self`'s, or either side is `Any`.
    pub fn contains(self, other: Type) -> bool {
        match (self.0, other.0) {
            (Repr::Any, _) | (_, Repr::Any) => true,
            (Repr::Tags(mine), Repr::Tags(theirs)) => mine.contains(theirs),
        }
    }

    /// `self`'s tags are a subset of `allowed`. `Any` is within everything.
    pub fn within(self, allowed: TypeTags) -> bool {
        match self.0 {
            Repr::Any => true,
            Repr::Tags(tags) => allowed.contains(tags),
        }
    }

    /// Set union; `Any` absorbs.
    #[must_use]
    pub fn union(self, other: Type) -> Type {
        match (self.0, other.0) {
            (Repr::Any, _) | (_, Repr::Any) => Type::ANY,
            (Repr::Tags(a), Repr::Tags(b)) => Type(Repr::Tags(a | b)),
        }
    }

    /// One of `self` or `other` contains the other.
    pub fn compatible(self, other: Type) -> bool {
        self.contains(other) || other.contains(self)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Repr::Tags(tags) = self.0 else {
            return f.write_str("Any");
        };
        let mut first = true;
        for (tag, name) in TypeTags::NAMES {
            if tags.contains(tag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
