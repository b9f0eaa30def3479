// In: src/bridge/partition.rs

//! Builds partition directory path suffixes from ordered partition specs.

use crate::error::BridgeError;

/// An ordered partition-column → partition-value mapping.
///
/// Insertion order is the path order, so this is a thin wrapper over a pair
/// list rather than a hash map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionSpec {
    entries: Vec<(String, String)>,
}

impl PartitionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for PartitionSpec {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Renders a spec as the `k1=v1,k2=v2` path suffix, in insertion order.
///
/// An empty spec renders as the empty string. Empty keys or values are
/// rejected before they can produce an unreadable path.
pub fn format_partition_path(spec: &PartitionSpec) -> Result<String, BridgeError> {
    if spec.is_empty() {
        return Ok(String::new());
    }
    let mut suffix = String::new();
    for (i, (key, value)) in spec.iter().enumerate() {
        if i > 0 {
            suffix.push(',');
        }
        suffix.push_str(escape_path_name(key)?);
        suffix.push('=');
        suffix.push_str(escape_path_name(value)?);
    }
    Ok(suffix)
}

/// Validates one path segment.
///
/// Currently the identity for every non-empty segment: no characters are
/// rewritten. Values containing `,` or `=` would produce an ambiguous path;
/// whether to escape them is an open question tracked in DESIGN.md.
pub fn escape_path_name(segment: &str) -> Result<&str, BridgeError> {
    if segment.is_empty() {
        return Err(BridgeError::InvalidPartitionSegment(segment.to_string()));
    }
    Ok(segment)
}

/// The partition value recorded for a spec.
///
/// Placeholder: always returns the literal `"Null"`. The real value
/// derivation has to be supplied by the surrounding system; see `DESIGN.md`.
pub fn partition_desc_value(spec: &PartitionSpec) -> String {
    let _ = spec;
    log::debug!("partition_desc_value is a placeholder and always reports \"Null\"");
    "Null".to_string()
}
