use crate::model::document;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown document key: {0}")]
    UnknownKey(String),
}

/// The document keys currently chosen for generation.
///
/// Members are always catalog keys: they are stored as the catalog's own
/// `&'static str`, so a key that is not in the catalog cannot get in. Keys keep
/// the order in which they were selected. The generation service treats every
/// repeated field independently, so the order carries no meaning on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    keys: Vec<&'static str>,
}

impl Default for SelectionState {
    /// Starts with every catalog entry selected.
    fn default() -> Self {
        Self::all()
    }
}

impl SelectionState {
    pub fn all() -> Self {
        Self {
            keys: document::keys().collect(),
        }
    }

    /// Applies a checkbox change. Returns whether the selection changed.
    ///
    /// Checking an already selected key and unchecking an absent one are both no-ops.
    pub fn toggle(&mut self, key: &str, checked: bool) -> Result<bool, SelectionError> {
        let kind =
            document::find(key).ok_or_else(|| SelectionError::UnknownKey(key.to_string()))?;

        let position = self.keys.iter().position(|k| *k == kind.key);
        let changed = match (checked, position) {
            (true, None) => {
                self.keys.push(kind.key);
                true
            }
            (false, Some(index)) => {
                self.keys.remove(index);
                true
            }
            _ => false,
        };
        Ok(changed)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| *k == key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }

    /// Owned copy of the keys, used to build a request that outlives this state.
    pub fn to_vec(&self) -> Vec<String> {
        self.keys.iter().map(|k| k.to_string()).collect()
    }
}
