// In: src/bridge/row_kind.rs

//! Maps the streaming engine's row-change markers onto operation tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A row-change marker as the streaming engine's change-tracking encoding
/// emits it: one of exactly four two-character tags.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    Insert,
    UpdateBefore,
    UpdateAfter,
    Delete,
}

impl RowKind {
    /// Parses a two-character marker. Anything outside the four known tags
    /// yields `None`; an unrecognized marker is "not applicable", not an
    /// error.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "+I" => Some(Self::Insert),
            "-U" => Some(Self::UpdateBefore),
            "+U" => Some(Self::UpdateAfter),
            "-D" => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Self::Insert => "+I",
            Self::UpdateBefore => "-U",
            Self::UpdateAfter => "+U",
            Self::Delete => "-D",
        }
    }

    /// The operation tag recorded for this row kind. Both halves of an
    /// update map to the same tag.
    pub fn operation(&self) -> OperationTag {
        match self {
            Self::Insert => OperationTag::Insert,
            Self::UpdateBefore | Self::UpdateAfter => OperationTag::Update,
            Self::Delete => OperationTag::Delete,
        }
    }
}

/// The three operation tags the lakehouse records for a changed row.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OperationTag {
    Insert,
    Update,
    Delete,
}

impl OperationTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for OperationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a raw marker straight to its operation tag.
pub fn row_kind_to_operation(marker: &str) -> Option<OperationTag> {
    RowKind::from_marker(marker).map(|kind| kind.operation())
}
