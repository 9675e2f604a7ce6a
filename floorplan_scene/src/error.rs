// Copyright 2025 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Which of the two cosmetic selectors an option list belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    /// The floor selector.
    Floor,
    /// The entrance selector.
    Entrance,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Floor => "floor",
            Self::Entrance => "entrance",
        })
    }
}

/// Error returned when a scene description is rejected at load time.
///
/// Validation is all-or-nothing: the first malformed entry rejects the whole
/// apartment list.
#[derive(Debug)]
pub enum SceneError {
    /// The JSON document could not be parsed into a scene description.
    Parse(serde_json::Error),
    /// The scene has no apartments.
    NoApartments,
    /// The apartment at `index` has an empty identifier.
    EmptyId {
        /// Position in the apartment list.
        index: usize,
    },
    /// Two apartments share the same identifier.
    DuplicateId(String),
    /// The area summary does not have exactly two entries.
    InfoArity {
        /// Offending apartment.
        id: String,
        /// Number of entries found.
        found: usize,
    },
    /// One of the area strings is empty.
    EmptyArea {
        /// Offending apartment.
        id: String,
    },
    /// The apartment has no shapes.
    NoShapes {
        /// Offending apartment.
        id: String,
    },
    /// A shape has a non-finite position or a non-positive size.
    InvalidShape {
        /// Offending apartment.
        id: String,
        /// Position in the apartment's shape list.
        index: usize,
    },
    /// The apartment's group origin is not finite.
    InvalidOrigin {
        /// Offending apartment.
        id: String,
    },
    /// The building outline is not finite or has a non-positive size.
    InvalidBuilding,
    /// A colour string is not `#RGB` or `#RRGGBB`.
    InvalidColor {
        /// Offending apartment.
        id: String,
        /// The rejected text.
        value: String,
    },
    /// A selector has no options.
    EmptyOptions(SelectorKind),
    /// A selector lists the same option twice.
    DuplicateOption {
        /// Selector holding the duplicate.
        kind: SelectorKind,
        /// The repeated value.
        value: u32,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "malformed scene document: {err}"),
            Self::NoApartments => f.write_str("scene has no apartments"),
            Self::EmptyId { index } => write!(f, "apartment #{index} has an empty id"),
            Self::DuplicateId(id) => write!(f, "apartment id {id:?} is used more than once"),
            Self::InfoArity { id, found } => write!(
                f,
                "apartment {id:?} must have exactly 2 area entries, found {found}"
            ),
            Self::EmptyArea { id } => write!(f, "apartment {id:?} has an empty area entry"),
            Self::NoShapes { id } => write!(f, "apartment {id:?} has no shapes"),
            Self::InvalidShape { id, index } => {
                write!(f, "shape #{index} of apartment {id:?} has invalid geometry")
            }
            Self::InvalidOrigin { id } => write!(f, "apartment {id:?} has a non-finite origin"),
            Self::InvalidBuilding => f.write_str("building outline has invalid geometry"),
            Self::InvalidColor { id, value } => {
                write!(f, "apartment {id:?} uses malformed colour {value:?}")
            }
            Self::EmptyOptions(kind) => write!(f, "{kind} selector has no options"),
            Self::DuplicateOption { kind, value } => {
                write!(f, "{kind} selector lists {value} more than once")
            }
        }
    }
}

impl core::error::Error for SceneError {}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
