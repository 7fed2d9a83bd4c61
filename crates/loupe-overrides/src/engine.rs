#![forbid(unsafe_code)]

//! The per-element override engine.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use loupe_core::{StyleMap, StyleValue};
use loupe_tree::TreeAdapter;
use tracing::debug;

use crate::input::{MAX_VALUE_LEN, is_valid_style_key};

/// Projection of one original style entry for the property panel:
/// where it ended up after renames, what value it shows, and whether it
/// is struck through.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    /// The key currently in effect for this original entry.
    pub active_key: String,
    /// Override value if one is set, else the original value.
    pub value: StyleValue,
    /// Whether the entry is disabled (excluded from the effective
    /// style).
    pub disabled: bool,
}

/// Tracks edits against one element's captured original style.
///
/// The original is captured once, deep-copied, and stays immutable for
/// the engine's lifetime; selecting a different element means building a
/// fresh engine. Every mutating call recomputes the complete effective
/// style from the four delta parts and writes it back through the
/// adapter in a single call — the effective style is never held as
/// authoritative mutable state.
pub struct OverrideEngine<A: TreeAdapter> {
    adapter: Arc<A>,
    node: A::Node,
    original: StyleMap,
    /// Active-key → replacement value.
    overrides: HashMap<String, StyleValue>,
    /// Original keys excluded from the effective style.
    disabled: HashSet<String>,
    /// Original key → active key.
    renames: HashMap<String, String>,
    /// Entries with no counterpart in the original, in insertion order.
    added: Vec<(String, StyleValue)>,
}

impl<A: TreeAdapter> OverrideEngine<A> {
    /// Capture the element's current style as the immutable baseline.
    pub fn capture(adapter: Arc<A>, node: A::Node) -> Self {
        let original = adapter.style(&node).unwrap_or_default();
        Self {
            adapter,
            node,
            original,
            overrides: HashMap::new(),
            disabled: HashSet::new(),
            renames: HashMap::new(),
            added: Vec::new(),
        }
    }

    /// The element this engine edits.
    pub fn target(&self) -> &A::Node {
        &self.node
    }

    /// The captured baseline style.
    pub fn original(&self) -> &StyleMap {
        &self.original
    }

    /// Added entries (no counterpart in the original), in insertion
    /// order.
    pub fn added(&self) -> &[(String, StyleValue)] {
        &self.added
    }

    /// The key currently in effect for an original key.
    fn active_key<'a>(&'a self, original_key: &'a str) -> &'a str {
        self.renames
            .get(original_key)
            .map(String::as_str)
            .unwrap_or(original_key)
    }

    /// Flip whether an original entry participates in the effective
    /// style. Returns `false` for keys the original never had.
    pub fn toggle(&mut self, original_key: &str) -> bool {
        if !self.original.contains_key(original_key) {
            return false;
        }
        if !self.disabled.remove(original_key) {
            self.disabled.insert(original_key.to_string());
        }
        self.apply();
        true
    }

    /// Override an original entry's value. Returns `false` for unknown
    /// keys or oversized text values.
    pub fn set_value(&mut self, original_key: &str, value: StyleValue) -> bool {
        if !self.original.contains_key(original_key) || !value_fits(&value) {
            return false;
        }
        let active = self.active_key(original_key).to_string();
        self.overrides.insert(active, value);
        self.apply();
        true
    }

    /// Rename an original entry's key, carrying any override value to
    /// the new active key. Renaming back to the original key reverts
    /// the rename. Syntactically invalid keys are rejected.
    pub fn rename_key(&mut self, original_key: &str, new_key: &str) -> bool {
        if !self.original.contains_key(original_key) || !is_valid_style_key(new_key) {
            return false;
        }
        let current = self.active_key(original_key).to_string();
        if new_key == current {
            return true;
        }

        if let Some(value) = self.overrides.remove(&current) {
            self.overrides.insert(new_key.to_string(), value);
        }
        if new_key == original_key {
            self.renames.remove(original_key);
        } else {
            self.renames
                .insert(original_key.to_string(), new_key.to_string());
        }
        self.apply();
        true
    }

    /// Add an entry with no counterpart in the original. Rejects
    /// invalid keys, oversized values, and keys that already exist in
    /// the original or among added entries.
    pub fn add_property(&mut self, key: &str, value: StyleValue) -> bool {
        if !is_valid_style_key(key)
            || !value_fits(&value)
            || self.original.contains_key(key)
            || self.added.iter().any(|(k, _)| k == key)
        {
            return false;
        }
        self.added.push((key.to_string(), value));
        self.apply();
        true
    }

    /// Remove an added entry.
    pub fn remove_added(&mut self, key: &str) -> bool {
        let Some(idx) = self.added.iter().position(|(k, _)| k == key) else {
            return false;
        };
        self.added.remove(idx);
        self.apply();
        true
    }

    /// Rename an added entry in place (position and value preserved).
    pub fn rename_added(&mut self, key: &str, new_key: &str) -> bool {
        if !is_valid_style_key(new_key)
            || self.original.contains_key(new_key)
            || (new_key != key && self.added.iter().any(|(k, _)| k == new_key))
        {
            return false;
        }
        let Some(entry) = self.added.iter_mut().find(|(k, _)| k == key) else {
            return false;
        };
        entry.0 = new_key.to_string();
        self.apply();
        true
    }

    /// Change an added entry's value.
    pub fn set_added_value(&mut self, key: &str, value: StyleValue) -> bool {
        if !value_fits(&value) {
            return false;
        }
        let Some(entry) = self.added.iter_mut().find(|(k, _)| k == key) else {
            return false;
        };
        entry.1 = value;
        self.apply();
        true
    }

    /// Whether no deltas are in effect (nothing overridden, disabled,
    /// renamed, or added).
    pub fn is_pristine(&self) -> bool {
        self.overrides.is_empty()
            && self.disabled.is_empty()
            && self.renames.is_empty()
            && self.added.is_empty()
    }

    /// Drop all deltas and write the captured original back unchanged.
    pub fn reset(&mut self) -> bool {
        self.overrides.clear();
        self.disabled.clear();
        self.renames.clear();
        self.added.clear();
        self.adapter.write_style(&self.node, &self.original)
    }

    /// Recompute the complete effective style from the baseline and the
    /// four delta parts.
    pub fn effective_style(&self) -> StyleMap {
        let mut style = StyleMap::new();
        for (original_key, original_value) in self.original.iter() {
            if self.disabled.contains(original_key) {
                continue;
            }
            let active = self.active_key(original_key);
            let value = self
                .overrides
                .get(active)
                .cloned()
                .unwrap_or_else(|| original_value.clone());
            style.insert(active, value);
        }
        for (key, value) in &self.added {
            style.insert(key.as_str(), value.clone());
        }
        style
    }

    /// Resolve how one original entry should render in the panel.
    /// `None` for keys the original never had.
    pub fn resolve_entry(&self, original_key: &str) -> Option<ResolvedEntry> {
        let original_value = self.original.get(original_key)?;
        let active = self.active_key(original_key);
        let value = self
            .overrides
            .get(active)
            .cloned()
            .unwrap_or_else(|| original_value.clone());
        Some(ResolvedEntry {
            active_key: active.to_string(),
            value,
            disabled: self.disabled.contains(original_key),
        })
    }

    /// Write the current effective style to the live element in one
    /// whole-object call. Failure means the host has no override
    /// channel; there is nothing useful to do beyond noting it.
    fn apply(&self) -> bool {
        let applied = self
            .adapter
            .write_style(&self.node, &self.effective_style());
        if !applied {
            debug!(node = ?self.node, "style write-back had no effect");
        }
        applied
    }
}

/// Text values are bounded; numbers and booleans always fit.
fn value_fits(value: &StyleValue) -> bool {
    match value {
        StyleValue::Text(s) => s.len() <= MAX_VALUE_LEN,
        _ => true,
    }
}
