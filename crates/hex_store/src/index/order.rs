use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-folder display order of sequence names.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayOrder {
    folders: BTreeMap<String, Vec<String>>,
}

impl DisplayOrder {
    pub fn get(&self, folder: &str) -> &[String] {
        self.folders.get(folder).map_or(&[], Vec::as_slice)
    }

    pub fn set(&mut self, folder: &str, names: Vec<String>) {
        self.folders.insert(folder.to_string(), names);
    }

    pub fn contains(&self, folder: &str, name: &str) -> bool {
        self.get(folder).iter().any(|n| n == name)
    }

    /// Append `name` unless present. Returns `true` if it was added.
    pub fn append(&mut self, folder: &str, name: &str) -> bool {
        let names = self.folders.entry(folder.to_string()).or_default();
        if names.iter().any(|n| n == name) {
            return false;
        }
        names.push(name.to_string());
        true
    }

    /// Insert `name` at `index` (clamped), removing any earlier occurrence.
    pub fn insert(&mut self, folder: &str, name: &str, index: usize) {
        let names = self.folders.entry(folder.to_string()).or_default();
        names.retain(|n| n != name);
        let index = index.min(names.len());
        names.insert(index, name.to_string());
    }

    /// Returns `true` if the name was present.
    pub fn remove(&mut self, folder: &str, name: &str) -> bool {
        let Some(names) = self.folders.get_mut(folder) else {
            return false;
        };
        let before = names.len();
        names.retain(|n| n != name);
        names.len() != before
    }

    /// Replace `old` with `new` at the same position, appending if absent.
    pub fn replace(&mut self, folder: &str, old: &str, new: &str) {
        let names = self.folders.entry(folder.to_string()).or_default();
        let Some(index) = names.iter().position(|n| n == old) else {
            if !names.iter().any(|n| n == new) {
                names.push(new.to_string());
            }
            return;
        };
        names[index] = new.to_string();
        let mut position = 0;
        names.retain(|n| {
            let keep = n != new || position == index;
            position += 1;
            keep
        });
    }

    pub fn rename_folder(&mut self, old: &str, new: &str) {
        if let Some(names) = self.folders.remove(old) {
            self.folders.insert(new.to_string(), names);
        }
    }

    pub fn remove_folder(&mut self, folder: &str) -> bool {
        self.folders.remove(folder).is_some()
    }

    pub fn folders(&self) -> impl Iterator<Item = &str> {
        self.folders.keys().map(String::as_str)
    }

    /// Drop entries for which `keep` returns `false`. Returns the number dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) -> usize {
        let mut dropped = 0;
        for (folder, names) in &mut self.folders {
            let before = names.len();
            names.retain(|name| keep(folder, name));
            dropped += before - names.len();
        }
        dropped
    }
}

/// Position just after the last favorite in `names`.
pub(crate) fn favorites_boundary(names: &[String], is_favorite: impl Fn(&str) -> bool) -> usize {
    names
        .iter()
        .rposition(|name| is_favorite(name))
        .map_or(0, |index| index + 1)
}
