//! User preferences: the last selected symbol and the favorites list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{FAVORITES_KEY, SELECTED_SYMBOL_KEY};

/// Key/value port the preferences persist through.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    /// `None` removes the key.
    fn save(&mut self, key: &str, value: Option<String>);
}

/// eframe's storage: a file next to the binary natively, local storage in the browser.
impl PreferenceStore for dyn eframe::Storage + '_ {
    fn load(&self, key: &str) -> Option<String> {
        self.get_string(key)
    }

    fn save(&mut self, key: &str, value: Option<String>) {
        // eframe storage has no delete; an empty string reads back as "unset".
        self.set_string(key, value.unwrap_or_default());
    }
}

/// In-process store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: Option<String>) {
        match value {
            Some(v) => {
                self.values.insert(key.to_string(), v);
            }
            None => {
                self.values.remove(key);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub selected_symbol: Option<String>,
    /// Symbols in the order they were starred
    pub favorites: Vec<String>,
}

impl Preferences {
    /// Read from `store`. Missing or unreadable entries fall back to defaults.
    pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> Self {
        let selected_symbol = store
            .load(SELECTED_SYMBOL_KEY)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let favorites = match store.load(FAVORITES_KEY).filter(|s| !s.is_empty()) {
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(list) => dedup_keep_order(list),
                Err(e) => {
                    log::warn!("Ignoring unreadable favorites ({}): {}", raw, e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!(
                "Loaded preferences: selected {:?}, {} favorites",
                selected_symbol,
                favorites.len()
            );
        }

        Self {
            selected_symbol,
            favorites,
        }
    }

    pub fn save<S: PreferenceStore + ?Sized>(&self, store: &mut S) {
        store.save(SELECTED_SYMBOL_KEY, self.selected_symbol.clone());
        match serde_json::to_string(&self.favorites) {
            Ok(json) => store.save(FAVORITES_KEY, Some(json)),
            Err(e) => log::error!("Failed to serialize favorites: {}", e),
        }
    }

    pub fn is_favorite(&self, symbol: &str) -> bool {
        self.favorites.iter().any(|s| s == symbol)
    }

    /// Add `symbol` if missing, remove it otherwise. Returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, symbol: &str) -> bool {
        if self.is_favorite(symbol) {
            self.remove_favorite(symbol);
            false
        } else {
            self.favorites.push(symbol.to_string());
            true
        }
    }

    pub fn remove_favorite(&mut self, symbol: &str) {
        self.favorites.retain(|s| s != symbol);
    }
}

fn dedup_keep_order(list: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(list.len());
    for symbol in list {
        if !out.contains(&symbol) {
            out.push(symbol);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_gives_defaults() {
        let prefs = Preferences::load(&MemoryStore::default());
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn save_then_load_restores_selection_and_favorites() {
        let mut store = MemoryStore::default();
        let prefs = Preferences {
            selected_symbol: Some("SBER".into()),
            favorites: vec!["GAZP".into(), "LKOH".into()],
        };
        prefs.save(&mut store);

        assert_eq!(store.load(SELECTED_SYMBOL_KEY).as_deref(), Some("SBER"));
        assert_eq!(
            store.load(FAVORITES_KEY).as_deref(),
            Some(r#"["GAZP","LKOH"]"#)
        );
        assert_eq!(Preferences::load(&store), prefs);
    }

    #[test]
    fn cleared_selection_removes_key() {
        let mut store = MemoryStore::default();
        let mut prefs = Preferences {
            selected_symbol: Some("SBER".into()),
            favorites: vec![],
        };
        prefs.save(&mut store);
        prefs.selected_symbol = None;
        prefs.save(&mut store);

        assert_eq!(store.load(SELECTED_SYMBOL_KEY), None);
        assert_eq!(Preferences::load(&store).selected_symbol, None);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut prefs = Preferences::default();
        assert!(prefs.toggle_favorite("SBER"));
        assert!(prefs.toggle_favorite("GAZP"));
        assert_eq!(prefs.favorites, vec!["SBER", "GAZP"]);

        assert!(!prefs.toggle_favorite("SBER"));
        assert_eq!(prefs.favorites, vec!["GAZP"]);
        prefs.remove_favorite("GAZP");
        assert!(prefs.favorites.is_empty());
    }

    #[test]
    fn corrupt_favorites_are_ignored_and_duplicates_dropped() {
        let mut store = MemoryStore::default();
        store.save(FAVORITES_KEY, Some("not json".into()));
        assert!(Preferences::load(&store).favorites.is_empty());

        store.save(FAVORITES_KEY, Some(r#"["SBER","SBER","GAZP"]"#.into()));
        assert_eq!(Preferences::load(&store).favorites, vec!["SBER", "GAZP"]);
    }
}
