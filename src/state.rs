use crate::dispatch::{Completion, Generation};
use crate::loading::LoadingIndicator;
use crate::presenter::{ResultsView, WAITING_MESSAGE};
use log::{debug, info};

/// Presentation state, owned and mutated by the UI thread only
#[derive(Default)]
pub struct AppState {
    /// Contents of the search field
    pub query: String,
    status: String,
    view: Option<ResultsView>,
    latest: Generation,
    loading: Option<LoadingIndicator>,
}

impl AppState {
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn view(&self) -> Option<&ResultsView> {
        self.view.as_ref()
    }

    pub fn latest_generation(&self) -> Generation {
        self.latest
    }

    pub fn is_searching(&self) -> bool {
        self.loading.is_some()
    }

    /// Blink phase of the loading label while a search is outstanding
    pub fn blink_phase(&self) -> Option<bool> {
        self.loading.as_ref().map(LoadingIndicator::is_alternate)
    }

    /// Record a newly dispatched search. Any indicator of a superseded search
    /// is cancelled by being replaced.
    pub fn begin_search(&mut self, generation: Generation, loading: Option<LoadingIndicator>) {
        self.latest = generation;
        self.status = WAITING_MESSAGE.to_string();
        self.loading = loading;
    }

    /// Apply a finished search if it is still the latest one.
    ///
    /// The previous view is replaced as a whole. Returns whether anything
    /// changed.
    pub fn apply(&mut self, completion: Completion) -> bool {
        if completion.generation != self.latest {
            debug!(
                "Discarding stale search #{} (latest is #{})",
                completion.generation, self.latest
            );
            return false;
        }

        info!(
            "Showing search #{}: {} rows",
            completion.generation,
            completion.view.rows.len()
        );
        if let Some(loading) = self.loading.take() {
            loading.cancel();
        }
        self.status = completion.view.status.clone();
        self.view = Some(completion.view);
        true
    }
}
