mod persistence;

use watchlist_core::{StoreKeys, ValidationError, WatchEntry, WatchlistState, validate_name};
use watchlist_storage::KeyValueStore;

use crate::render::WatchlistRenderer;
use persistence::{load_list, save_list};

/// In-memory watchlist and watch history, mirrored to a key-value store.
///
/// Every mutation updates memory first, then writes the changed list, then
/// notifies the renderer. One instance per session; the store and renderer
/// are supplied by the host.
pub struct WatchlistStore<S, R> {
    storage: S,
    renderer: R,
    keys: StoreKeys,
    state: WatchlistState,
}

impl<S, R> WatchlistStore<S, R>
where
    S: KeyValueStore,
    R: WatchlistRenderer,
{
    /// Load both lists under the default keys and render them once.
    pub fn new(storage: S, renderer: R) -> Self {
        Self::with_keys(storage, renderer, StoreKeys::default())
    }

    pub fn with_keys(storage: S, mut renderer: R, keys: StoreKeys) -> Self {
        let active = load_list::<String, _>(&storage, &keys.active);
        let history = load_list::<WatchEntry, _>(&storage, &keys.history);
        let state = WatchlistState::from_parts(active, history);

        tracing::debug!(
            active_len = state.active_list().len(),
            history_len = state.history().len(),
            "Watchlist loaded"
        );

        renderer.on_active_list_changed(state.active_list());
        renderer.on_history_changed(state.history());

        Self { storage, renderer, keys, state }
    }

    /// Add a title to the active list.
    ///
    /// Blank titles are rejected with nothing recorded. A title already on the
    /// list is rejected too, but its watch count is still incremented first.
    pub fn add_movie(&mut self, raw_name: &str) -> Result<(), ValidationError> {
        let name = validate_name(raw_name).inspect_err(|_| {
            tracing::debug!(raw_name, "Rejected blank title");
        })?;

        if self.state.contains(&name) {
            self.record_watch(&name);
            tracing::debug!(name = %name, "Rejected duplicate title");
            return Err(ValidationError::DuplicateName { name });
        }

        self.state.push_active(&name);
        self.persist_active();
        self.refresh_full_view();
        self.record_watch(&name);
        tracing::debug!(name = %name, active_len = self.state.active_list().len(), "Added title");
        Ok(())
    }

    /// Blank the displayed list. With `reset_persisted`, also empty the stored list.
    ///
    /// History is never affected.
    pub fn clear(&mut self, reset_persisted: bool) {
        self.renderer.on_active_list_changed(&[]);
        if reset_persisted {
            self.state.clear_active();
            self.persist_active();
            tracing::info!("Active watchlist cleared");
        }
    }

    /// Blank the displayed list, then show `items`.
    pub fn refresh_view(&mut self, items: &[String]) {
        self.clear(false);
        self.renderer.on_active_list_changed(items);
    }

    /// Show the active titles containing `query`; `None` or `""` shows all.
    ///
    /// Matching is case-sensitive against the lowercase stored names and the
    /// query is used as given.
    pub fn filter(&mut self, query: Option<&str>) {
        match query.filter(|q| !q.is_empty()) {
            None => self.refresh_full_view(),
            Some(q) => {
                let matches = self.state.filtered(q);
                tracing::debug!(query = q, matched = matches.len(), "Filtered watchlist");
                self.refresh_view(&matches);
            },
        }
    }

    pub fn active_list(&self) -> &[String] {
        self.state.active_list()
    }

    pub fn history(&self) -> &[WatchEntry] {
        self.state.history()
    }

    pub fn state(&self) -> &WatchlistState {
        &self.state
    }

    /// Watch count for `name` after normalization.
    pub fn watches(&self, name: &str) -> Option<u32> {
        self.state.watches(name)
    }

    pub fn keys(&self) -> &StoreKeys {
        &self.keys
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_parts(self) -> (S, R) {
        (self.storage, self.renderer)
    }

    fn refresh_full_view(&mut self) {
        self.clear(false);
        self.renderer.on_active_list_changed(self.state.active_list());
    }

    fn record_watch(&mut self, name: &str) {
        let recorded = self.state.record_watch(name);
        tracing::debug!(
            name,
            watches = recorded.watches,
            first_seen = recorded.first_seen,
            "Recorded watch"
        );
        self.persist_history();
        self.renderer.on_history_changed(self.state.history());
    }

    fn persist_active(&self) {
        save_list(&self.storage, &self.keys.active, self.state.active_list());
    }

    fn persist_history(&self) {
        save_list(&self.storage, &self.keys.history, self.state.history());
    }
}
