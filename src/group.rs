use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use crate::collector::extension_of;

/// Group key for paths directly under the scan root
pub const ROOT_FOLDER: &str = "root";

/// Group key for paths without an extension
pub const NO_EXTENSION: &str = "no_extension";

/// String-keyed map that keeps keys in first-insertion order.
///
/// Serializes as a JSON object with keys in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, inserting `default()` at the end on first encounter.
    pub fn get_or_insert_with(&mut self, key: &str, default: impl FnOnce() -> V) -> &mut V {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                self.entries.push((key.to_string(), default()));
                let idx = self.entries.len() - 1;
                self.index.insert(key.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Same keys in the same order, values mapped through `f`.
    pub fn map_values<U>(&self, mut f: impl FnMut(&V) -> U) -> OrderedMap<U> {
        OrderedMap {
            entries: self.entries.iter().map(|(k, v)| (k.clone(), f(v))).collect(),
            index: self.index.clone(),
        }
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Image paths partitioned by a string key
pub type PathGroups = OrderedMap<Vec<String>>;

/// Group sizes keyed like the groups they count
pub type GroupCounts = OrderedMap<usize>;

/// Parent directory of a `/`-separated relative path, or `"root"`.
pub fn folder_key(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((parent, _)) if !parent.is_empty() => parent,
        _ => ROOT_FOLDER,
    }
}

/// Lowercased extension (with dot) of the path's file name, or `"no_extension"`.
pub fn extension_key(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    match extension_of(file_name) {
        Some(ext) => ext.to_lowercase(),
        None => NO_EXTENSION.to_string(),
    }
}

fn group_by(paths: &[String], key_fn: impl Fn(&str) -> String) -> PathGroups {
    let mut grouped = PathGroups::new();
    for path in paths {
        grouped
            .get_or_insert_with(&key_fn(path.as_str()), Vec::new)
            .push(path.clone());
    }
    grouped
}

pub fn group_by_folder(paths: &[String]) -> PathGroups {
    group_by(paths, |p| folder_key(p).to_string())
}

pub fn group_by_extension(paths: &[String]) -> PathGroups {
    group_by(paths, extension_key)
}

/// Size of every group, keyed and ordered like `groups`.
pub fn group_counts(groups: &PathGroups) -> GroupCounts {
    groups.map_values(Vec::len)
}

// -- tests
