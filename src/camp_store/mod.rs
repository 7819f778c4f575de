//! CampStore - Selected Camp State
//!
//! ## Responsibilities
//!
//! - Hold the camp list and the currently selected camp
//! - `select_camp` / `reset` mutations
//! - Notify list, map and detail views on every change
//!
//! One instance per application context; views receive it by parameter.

use crate::camp_catalog::Camp;
use crate::store::{Subscription, Writable};

/// Selected-camp state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CampState {
    pub selected_camp: Option<Camp>,
    pub camps: Vec<Camp>,
}

/// CampStore instance
#[derive(Clone)]
pub struct CampStore {
    state: Writable<CampState>,
    initial: CampState,
}

impl CampStore {
    /// Create a store over the loaded camp list; nothing selected.
    pub fn new(camps: Vec<Camp>) -> Self {
        let initial = CampState {
            selected_camp: None,
            camps,
        };
        Self {
            state: Writable::new(initial.clone()),
            initial,
        }
    }

    /// Current state
    pub fn get(&self) -> CampState {
        self.state.get()
    }

    /// Make `camp` the selected camp. Membership in `camps` is not checked.
    pub fn select_camp(&self, camp: Camp) {
        tracing::debug!(camp_id = camp.id, "Camp selected");
        self.state.update(|state| CampState {
            selected_camp: Some(camp),
            camps: state.camps.clone(),
        });
    }

    /// Restore the snapshot taken at creation
    pub fn reset(&self) {
        tracing::debug!("Camp store reset");
        self.state.set(self.initial.clone());
    }

    /// Observe state changes; called immediately with the current state.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&CampState) + Send + Sync + 'static,
    {
        self.state.subscribe(observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn camp(id: i64, nombre: &str) -> Camp {
        Camp {
            id,
            nombre: Some(nombre.to_string()),
            lat: 40.0 + id as f64,
            lng: -3.0,
            details: serde_json::Map::new(),
        }
    }

    fn sample_store() -> CampStore {
        CampStore::new(vec![camp(1, "Pinar"), camp(2, "Ribera")])
    }

    #[test]
    fn test_initial_state() {
        let store = sample_store();
        let state = store.get();
        assert!(state.selected_camp.is_none());
        assert_eq!(state.camps.len(), 2);
    }

    #[test]
    fn test_select_camp_notifies_observers() {
        let store = sample_store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = store.subscribe(move |s: &CampState| sink.lock().unwrap().push(s.clone()));

        let chosen = camp(2, "Ribera");
        store.select_camp(chosen.clone());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].selected_camp.is_none());
        assert_eq!(seen[1].selected_camp.as_ref(), Some(&chosen));
        assert_eq!(seen[1].camps, store.get().camps);
    }

    #[test]
    fn test_select_unknown_camp_is_accepted() {
        let store = sample_store();
        let stranger = camp(99, "Fuera de catálogo");
        store.select_camp(stranger.clone());
        assert_eq!(store.get().selected_camp, Some(stranger));
    }

    #[test]
    fn test_reset_restores_snapshot() {
        let store = sample_store();
        let original = store.get();

        store.select_camp(camp(1, "Pinar"));
        store.reset();

        assert_eq!(store.get(), original);
    }

    #[test]
    fn test_unsubscribe() {
        let store = sample_store();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let sub = store.subscribe(move |_| *counter.lock().unwrap() += 1);

        sub.unsubscribe();
        store.select_camp(camp(1, "Pinar"));

        assert_eq!(*calls.lock().unwrap(), 1);
    }
}
