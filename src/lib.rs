pub mod adapters;
pub mod client;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
#[cfg(feature = "gui")]
pub mod gui;
pub mod images;
pub mod loading;
pub mod model;
pub mod presenter;
pub mod state;

pub use adapters::{AdapterFactory, EndpointAdapter, ResultLayout};
pub use client::{RecipeSearch, SearchClient};
pub use config::AppConfig;
pub use controller::SearchController;
pub use dispatch::{Completion, Generation, SearchDispatcher};
pub use error::FinderError;
pub use images::{ImageFetcher, Thumbnail};
pub use model::{Recipe, RecipeMatch, RecipeSummary, SearchOutcome, SearchQuery};
pub use presenter::{ResultPresenter, ResultRow, ResultsView};

use std::sync::Arc;

/// Run one search with the configured API and render it as text
pub async fn search_to_text(config: &AppConfig, query: &str) -> Result<String, FinderError> {
    let client = SearchClient::from_config(config)?;
    let images = ImageFetcher::from_config(config, client.adapter().thumbnail_size()).await?;
    let presenter = ResultPresenter::new(Arc::new(images), client.adapter().layout());

    let outcome = client.search(&SearchQuery::new(query)).await;
    Ok(presenter.prepare(outcome).await.to_text())
}
