use crate::client::{RecipeSearch, SearchClient};
use crate::config::AppConfig;
use crate::dispatch::{Generation, SearchDispatcher, Waker};
use crate::error::FinderError;
use crate::images::ImageFetcher;
use crate::loading::LoadingIndicator;
use crate::model::SearchQuery;
use crate::presenter::ResultPresenter;
use crate::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Glue between the UI thread and the background searches
pub struct SearchController {
    dispatcher: SearchDispatcher,
    state: AppState,
    blink_period: Duration,
}

impl SearchController {
    pub fn new(dispatcher: SearchDispatcher, blink_period: Duration) -> Self {
        SearchController {
            dispatcher,
            state: AppState::default(),
            blink_period,
        }
    }

    /// Build the search client, image fetcher and presenter for the configured
    /// API. Downloads the fallback image before returning, so it must be
    /// called from outside the runtime.
    pub fn from_config(
        config: &AppConfig,
        runtime: Handle,
        waker: Waker,
    ) -> Result<Self, FinderError> {
        let client = SearchClient::from_config(config)?;
        let layout = client.adapter().layout();
        let size = client.adapter().thumbnail_size();
        let images = runtime.block_on(ImageFetcher::from_config(config, size))?;
        let presenter = ResultPresenter::new(Arc::new(images), layout);
        let search: Arc<dyn RecipeSearch> = Arc::new(client);

        let dispatcher = SearchDispatcher::new(runtime, search, Arc::new(presenter), waker);
        Ok(Self::new(
            dispatcher,
            Duration::from_millis(config.loading.interval_ms),
        ))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Search for the current contents of the search field
    pub fn submit(&mut self) -> Generation {
        let query = SearchQuery::new(self.state.query.clone());
        let generation = self.dispatcher.dispatch(query);

        let waker = self.dispatcher.waker();
        let loading =
            LoadingIndicator::start(self.dispatcher.runtime(), self.blink_period, move || waker());
        self.state.begin_search(generation, Some(loading));
        generation
    }

    /// Apply every finished search; returns whether the display changed
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Some(completion) = self.dispatcher.try_next() {
            changed |= self.state.apply(completion);
        }
        changed
    }

    /// Wait until the latest search has been applied
    pub async fn settle(&mut self) {
        while self.state.is_searching() {
            match self.dispatcher.next().await {
                Some(completion) => {
                    self.state.apply(completion);
                }
                None => break,
            }
        }
    }
}
