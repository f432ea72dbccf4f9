//! The [`RegistryEntry`] trait shared by every registry enum.

use std::fmt;

use thiserror::Error;

/// Returned when a string does not name any entry of a registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {field} id: {id:?}")]
pub struct UnknownId {
    /// Configuration field the id was meant for (e.g. `"colorScheme"`).
    pub field: &'static str,
    /// The rejected id, verbatim.
    pub id: String,
}

/// A closed set of ids backed by a static descriptor table.
pub trait RegistryEntry: Copy + Eq + Default + fmt::Debug + Send + Sync + 'static {
    /// The descriptor record each id resolves to.
    type Descriptor: 'static;

    /// Configuration path of the field this registry populates.
    const FIELD: &'static str;

    /// Every valid id, in display order.
    const ALL: &'static [Self];

    /// The stable string id used in storage and in the UI.
    fn id(self) -> &'static str;

    /// The immutable descriptor for this id.
    fn descriptor(self) -> &'static Self::Descriptor;

    /// Looks up an id by its string form.
    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|entry| entry.id() == id)
    }

    /// Resolves a descriptor, falling back to the registry default for unknown ids.
    fn descriptor_or_default(id: &str) -> &'static Self::Descriptor {
        Self::from_id(id).unwrap_or_default().descriptor()
    }

    /// All descriptors in display order, for picker UIs.
    fn descriptors() -> Vec<&'static Self::Descriptor> {
        Self::ALL.iter().map(|entry| entry.descriptor()).collect()
    }

    /// Parses an id, reporting the field name on failure.
    fn parse_id(id: &str) -> Result<Self, UnknownId> {
        Self::from_id(id).ok_or_else(|| UnknownId {
            field: Self::FIELD,
            id: id.to_string(),
        })
    }
}

/// Implements `Display` and `FromStr` for a registry enum in terms of its ids.
macro_rules! impl_registry_text {
    ($ty:ty) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::domain::registry::RegistryEntry::id(*self))
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::domain::registry::UnknownId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::domain::registry::RegistryEntry>::parse_id(s)
            }
        }
    };
}

pub(crate) use impl_registry_text;
