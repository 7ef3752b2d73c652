use crate::adapters::{AdapterFactory, EndpointAdapter};
use crate::config::AppConfig;
use crate::error::FinderError;
use crate::model::{Recipe, SearchOutcome, SearchQuery};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; RecipeFinder/0.1)";

/// Anything that can turn a query into a [`SearchOutcome`]
#[async_trait]
pub trait RecipeSearch: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> SearchOutcome;
}

/// Issues one GET per search against the configured recipe API
pub struct SearchClient {
    client: Client,
    adapter: Box<dyn EndpointAdapter>,
}

impl SearchClient {
    /// Create a client for `adapter`; without a timeout a hung request hangs
    /// its search task
    pub fn new(
        adapter: Box<dyn EndpointAdapter>,
        timeout: Option<Duration>,
    ) -> Result<Self, FinderError> {
        Ok(SearchClient {
            client: build_http_client(timeout)?,
            adapter,
        })
    }

    /// Create a client for the API selected in configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, FinderError> {
        let adapter = AdapterFactory::create(config)?;
        Self::new(adapter, config.timeout.map(Duration::from_secs))
    }

    pub fn adapter(&self) -> &dyn EndpointAdapter {
        self.adapter.as_ref()
    }

    /// Fetch and map recipes, surfacing every failure as an error
    pub async fn fetch(&self, query: &SearchQuery) -> Result<Vec<Recipe>, FinderError> {
        let response = self
            .adapter
            .build_request(&self.client, query)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FinderError::StatusError(status));
        }

        let body: Value = serde_json::from_slice(&response.bytes().await?)?;
        debug!("{} response: {}", self.adapter.name(), body);

        Ok(self.adapter.map_response(body))
    }
}

#[async_trait]
impl RecipeSearch for SearchClient {
    async fn search(&self, query: &SearchQuery) -> SearchOutcome {
        match self.fetch(query).await {
            Ok(recipes) if recipes.is_empty() => {
                info!("No recipes found for {:?}", query.as_str());
                SearchOutcome::NotFound
            }
            Ok(recipes) => {
                info!(
                    "Found {} recipes for {:?} via {}",
                    recipes.len(),
                    query.as_str(),
                    self.adapter.name()
                );
                SearchOutcome::Found(recipes)
            }
            Err(e) => {
                warn!("Search for {:?} failed: {}", query.as_str(), e);
                SearchOutcome::TransportError(e.to_string())
            }
        }
    }
}

pub(crate) fn build_http_client(timeout: Option<Duration>) -> Result<Client, FinderError> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}
