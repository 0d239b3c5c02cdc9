use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use watchlist_core::StoreKeys;
use watchlist_service::{LatestView, WatchlistStore};
use watchlist_storage::{StorageBackend, db_pool_size};

use super::output::{Format, print_history, print_titles};

/// Exit status for a rejected title.
const EXIT_REJECTED: u8 = 2;

/// Plays the page: one store per invocation, views printed once at the end.
pub(crate) struct Host {
    store: WatchlistStore<StorageBackend, LatestView>,
    format: Format,
}

impl Host {
    pub(crate) fn open(db_path: &Path, format: Format) -> Result<Self> {
        let pool_size = db_pool_size();
        let storage = StorageBackend::new_sqlite(db_path, pool_size)
            .with_context(|| format!("failed to open watchlist database {}", db_path.display()))?;
        tracing::debug!(path = %db_path.display(), backend = storage.kind(), "Opened storage");

        let store = WatchlistStore::with_keys(storage, LatestView::default(), StoreKeys::from_env());
        Ok(Self { store, format })
    }

    pub(crate) fn add(&mut self, name: &str) -> Result<ExitCode> {
        match self.store.add_movie(name) {
            Ok(()) => {
                print_titles(self.format, &self.store.renderer().active)?;
                Ok(ExitCode::SUCCESS)
            },
            Err(e) => {
                eprintln!("{e}");
                Ok(ExitCode::from(EXIT_REJECTED))
            },
        }
    }

    pub(crate) fn filter(&mut self, query: Option<&str>) -> Result<ExitCode> {
        self.store.filter(query);
        print_titles(self.format, &self.store.renderer().active)?;
        Ok(ExitCode::SUCCESS)
    }

    pub(crate) fn clear(&mut self, reset_persisted: bool) -> Result<ExitCode> {
        self.store.clear(reset_persisted);
        if self.format == Format::Json {
            print_titles(self.format, &self.store.renderer().active)?;
        }
        Ok(ExitCode::SUCCESS)
    }

    pub(crate) fn list(&self) -> Result<ExitCode> {
        print_titles(self.format, &self.store.renderer().active)?;
        Ok(ExitCode::SUCCESS)
    }

    pub(crate) fn history(&self) -> Result<ExitCode> {
        print_history(self.format, &self.store.renderer().history)?;
        Ok(ExitCode::SUCCESS)
    }
}
