use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::folder::favorite_key;

/// Favorites index: `folder/name` keys.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    entries: BTreeMap<String, bool>,
}

impl Favorites {
    pub fn contains(&self, folder: &str, name: &str) -> bool {
        self.entries
            .get(&favorite_key(folder, name))
            .copied()
            .unwrap_or(false)
    }

    /// Returns `true` if the index changed.
    pub fn set(&mut self, folder: &str, name: &str, favorite: bool) -> bool {
        let key = favorite_key(folder, name);
        if favorite {
            self.entries.insert(key, true) != Some(true)
        } else {
            self.entries.remove(&key).is_some()
        }
    }

    /// Remove a key, returning whether it was a favorite.
    pub fn remove(&mut self, folder: &str, name: &str) -> bool {
        self.entries
            .remove(&favorite_key(folder, name))
            .unwrap_or(false)
    }

    /// Move a key, keeping its favorite state. Returns `true` if it was a
    /// favorite.
    pub fn relocate(&mut self, from: (&str, &str), to: (&str, &str)) -> bool {
        let favorite = self.remove(from.0, from.1);
        if favorite {
            self.set(to.0, to.1, true);
        }
        favorite
    }

    /// Re-key every entry under `old/` to `new/`.
    pub fn rename_folder(&mut self, old: &str, new: &str) {
        let prefix = format!("{old}/");
        let moved: Vec<(String, bool)> = self
            .entries
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(key, &value)| (key.clone(), value))
            .collect();
        for (key, value) in moved {
            self.entries.remove(&key);
            let name = &key[prefix.len()..];
            self.entries.insert(favorite_key(new, name), value);
        }
    }

    /// Names favorited in `folder`.
    pub fn names_in<'a>(&'a self, folder: &str) -> impl Iterator<Item = &'a str> + 'a {
        let prefix = format!("{folder}/");
        self.entries
            .iter()
            .filter(|(_, favorite)| **favorite)
            .filter_map(move |(key, _)| key.strip_prefix(prefix.as_str()))
    }

    /// Drop keys for which `keep` returns `false`. Returns the number dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| match key.split_once('/') {
            Some((folder, name)) => keep(folder, name),
            None => false,
        });
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
