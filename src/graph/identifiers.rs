use std::fmt::{Display, Formatter};

/// An opaque metabolite identifier.
///
/// The core never inspects the contents of this string beyond equality, ordering, and
/// hashing — prefixed tags such as organism markers are meaningful to callers, not to this
/// crate.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetaboliteId(String);

/// An opaque reaction identifier.
///
/// Synthetic prefixes such as `IR`/`RR`/`ER` (used by the external graph assembler to mark
/// exchange and reversibility splits) are opaque here as well.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionId(String);

macro_rules! impl_id {
    ($ty:ident) => {
        impl $ty {
            pub fn new(id: impl Into<String>) -> Self {
                $ty(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                $ty::new(value)
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                $ty::new(value)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_id!(MetaboliteId);
impl_id!(ReactionId);

/// A reaction-set: the canonical, dedup-ready representation of a pathway.
///
/// Stored as a sorted set so that two pathways built via different enumeration orders compare
/// equal (and hash equal) whenever they contain the same reactions — this is the "canonical
/// key" the flat pathway table relies on for O(1) amortised deduplication.
pub type ReactionSet = std::collections::BTreeSet<ReactionId>;
