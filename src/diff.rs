//! Core tree diff algorithm.
//!
//! This module walks two mapping trees in lockstep and classifies every key as
//! added, removed, changed, nested or unchanged. The result is a tree of
//! [`DiffEntry`] values that mirrors the nesting of the inputs, with siblings
//! ordered by the configured [`KeyOrdering`].
//!
//! # Examples
//!
//! ```
//! use gendiff::{compute_diff, DiffConfig, DiffKind, Value};
//!
//! let old: Value = [("timeout".to_string(), Value::from(50))].into_iter().collect();
//! let new: Value = [("timeout".to_string(), Value::from(20))].into_iter().collect();
//!
//! let diff = compute_diff(&old, &new, &DiffConfig::default()).unwrap();
//!
//! assert_eq!(diff.stats.changed, 1);
//! assert!(matches!(diff.entries[0].kind, DiffKind::Changed { .. }));
//! ```

use crate::error::DiffError;
use crate::order::KeyOrdering;
use crate::tree::{Mapping, Value};
use std::collections::BTreeSet;
use tracing::debug;

/// Default bound on how many mapping levels the differ descends into.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Classification of one key, with the values needed to render it.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffKind {
    /// Key exists only on the right side.
    Added(Value),
    /// Key exists only on the left side.
    Removed(Value),
    /// Key exists on both sides with different values, at least one not a mapping.
    Changed { old_value: Value, new_value: Value },
    /// Both sides hold mappings; children are their diff.
    Nested(Vec<DiffEntry>),
    /// Key exists on both sides with deeply equal values.
    Unchanged(Value),
}

/// One compared key at one nesting level.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffEntry {
    pub key: String,
    pub kind: DiffKind,
}

impl DiffEntry {
    pub fn new(key: impl Into<String>, kind: DiffKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    pub fn added(key: impl Into<String>, value: Value) -> Self {
        Self::new(key, DiffKind::Added(value))
    }

    pub fn removed(key: impl Into<String>, value: Value) -> Self {
        Self::new(key, DiffKind::Removed(value))
    }

    pub fn changed(key: impl Into<String>, old_value: Value, new_value: Value) -> Self {
        Self::new(
            key,
            DiffKind::Changed {
                old_value,
                new_value,
            },
        )
    }

    pub fn nested(key: impl Into<String>, children: Vec<DiffEntry>) -> Self {
        Self::new(key, DiffKind::Nested(children))
    }

    pub fn unchanged(key: impl Into<String>, value: Value) -> Self {
        Self::new(key, DiffKind::Unchanged(value))
    }

    /// Lower-case name of the kind, as used by the JSON renderer.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            DiffKind::Added(_) => "added",
            DiffKind::Removed(_) => "removed",
            DiffKind::Changed { .. } => "changed",
            DiffKind::Nested(_) => "nested",
            DiffKind::Unchanged(_) => "unchanged",
        }
    }
}

/// Leaf counts over a whole diff tree. Nested entries are not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
    pub unchanged: usize,
}

impl DiffStats {
    pub fn new() -> Self {
        Self::default()
    }

    fn collect(entries: &[DiffEntry]) -> Self {
        let mut stats = Self::new();
        stats.count(entries);
        stats
    }

    fn count(&mut self, entries: &[DiffEntry]) {
        for entry in entries {
            match &entry.kind {
                DiffKind::Added(_) => self.added += 1,
                DiffKind::Removed(_) => self.removed += 1,
                DiffKind::Changed { .. } => self.changed += 1,
                DiffKind::Unchanged(_) => self.unchanged += 1,
                DiffKind::Nested(children) => self.count(children),
            }
        }
    }

    /// Returns the total number of changes (excluding unchanged).
    pub fn total_changes(&self) -> usize {
        self.added + self.removed + self.changed
    }

    pub fn is_empty(&self) -> bool {
        self.total_changes() == 0
    }
}

/// The complete diff of two documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diff {
    /// Root-level entries, ordered by the key ordering in use.
    pub entries: Vec<DiffEntry>,
    pub stats: DiffStats,
}

impl Diff {
    pub fn new(entries: Vec<DiffEntry>) -> Self {
        let stats = DiffStats::collect(&entries);
        Self { entries, stats }
    }

    /// Returns true if no key was added, removed or changed.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Configuration for the diff algorithm.
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Maximum number of mapping levels compared, the root counting as one.
    pub max_depth: usize,
    /// Order of sibling keys in the produced entry sequences.
    pub key_order: KeyOrdering,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            key_order: KeyOrdering::default(),
        }
    }
}

/// Computes the diff between two documents.
///
/// Both roots must be mappings; anything else is rejected with
/// [`DiffError::NotAMapping`].
///
/// # Examples
///
/// ```
/// use gendiff::{compute_diff, DiffConfig, Value};
///
/// let doc: Value = [("host".to_string(), Value::from("hexlet.io"))].into_iter().collect();
/// let diff = compute_diff(&doc, &doc, &DiffConfig::default()).unwrap();
///
/// assert!(diff.is_empty());
/// assert_eq!(diff.stats.unchanged, 1);
/// ```
pub fn compute_diff(left: &Value, right: &Value, config: &DiffConfig) -> Result<Diff, DiffError> {
    let left = left
        .as_mapping()
        .ok_or(DiffError::NotAMapping { side: "left" })?;
    let right = right
        .as_mapping()
        .ok_or(DiffError::NotAMapping { side: "right" })?;

    let entries = diff_mappings(left, right, config)?;
    let diff = Diff::new(entries);
    debug!(
        added = diff.stats.added,
        removed = diff.stats.removed,
        changed = diff.stats.changed,
        unchanged = diff.stats.unchanged,
        "diff computed"
    );
    Ok(diff)
}

/// Compares two mappings and returns one entry per key of their union.
pub fn diff_mappings(
    left: &Mapping,
    right: &Mapping,
    config: &DiffConfig,
) -> Result<Vec<DiffEntry>, DiffError> {
    diff_level(left, right, "", 1, config)
}

fn diff_level(
    left: &Mapping,
    right: &Mapping,
    path: &str,
    depth: usize,
    config: &DiffConfig,
) -> Result<Vec<DiffEntry>, DiffError> {
    if depth > config.max_depth {
        return Err(DiffError::DepthLimitExceeded {
            limit: config.max_depth,
            path: path.to_string(),
        });
    }

    let keys: BTreeSet<&str> = left
        .keys()
        .chain(right.keys())
        .map(String::as_str)
        .collect();
    let mut keys: Vec<&str> = keys.into_iter().collect();
    config.key_order.sort(&mut keys);

    keys.into_iter()
        .map(|key| {
            let kind = match (left.get(key), right.get(key)) {
                (None, Some(new)) => DiffKind::Added(new.clone()),
                (Some(old), None) => DiffKind::Removed(old.clone()),
                (Some(Value::Mapping(old)), Some(Value::Mapping(new))) => {
                    let child_path = join_path(path, key);
                    DiffKind::Nested(diff_level(old, new, &child_path, depth + 1, config)?)
                }
                (Some(old), Some(new)) if old == new => DiffKind::Unchanged(old.clone()),
                (Some(old), Some(new)) => DiffKind::Changed {
                    old_value: old.clone(),
                    new_value: new.clone(),
                },
                (None, None) => unreachable!("key {key} came from one of the two mappings"),
            };
            Ok(DiffEntry::new(key, kind))
        })
        .collect()
}

/// Joins a dotted parent path and a child key.
pub(crate) fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}
