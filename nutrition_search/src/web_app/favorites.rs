// web_app/favorites.rs - Favorites store keyed by product id
//
// The store is a plain value handed to whoever needs it; where it is
// persisted (browser storage under the `favorites` key, a file, ...) is
// the owner's business. Two stored layouts exist in the wild: a bare id
// array and an array of product snapshots carrying an `id` field. Both
// load; only the id array is written back.

use serde::{Deserialize, Serialize};

/// Ordered set of favorite product ids
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<i32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredFavorite {
    Id(i32),
    Entry { id: i32 },
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product; returns false if it was already a favorite
    pub fn add(&mut self, id: i32) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove a product; returns false if it was not a favorite
    pub fn remove(&mut self, id: i32) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| *existing != id);
        self.ids.len() != before
    }

    /// Flip membership and return the new state
    pub fn toggle(&mut self, id: i32) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id)
        }
    }

    pub fn contains(&self, id: i32) -> bool {
        self.ids.contains(&id)
    }

    /// Ids in the order they were added
    pub fn list(&self) -> &[i32] {
        &self.ids
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn to_json(&self) -> String {
        // A Vec<i32> always serializes
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// Load from a stored JSON value.
    ///
    /// Unreadable storage yields an empty set, the same outcome the pages
    /// had when local storage was corrupted.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Vec<StoredFavorite>>(raw) {
            Ok(stored) => stored
                .into_iter()
                .map(|entry| match entry {
                    StoredFavorite::Id(id) | StoredFavorite::Entry { id } => id,
                })
                .collect(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable favorites: {}", e);
                Self::default()
            }
        }
    }
}

impl FromIterator<i32> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut set = FavoriteSet::new();
        for id in iter {
            set.add(id);
        }
        set
    }
}
