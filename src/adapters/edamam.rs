use crate::adapters::{EndpointAdapter, ResultLayout};
use crate::config::EdamamConfig;
use crate::error::FinderError;
use crate::model::{Recipe, RecipeSummary, SearchQuery};
use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

pub struct EdamamAdapter {
    app_id: String,
    app_key: String,
    base_url: String,
    number: u32,
}

impl EdamamAdapter {
    /// Create a new adapter from configuration
    pub fn new(config: &EdamamConfig) -> Result<Self, FinderError> {
        let app_id = config
            .app_id
            .clone()
            .or_else(|| std::env::var("EDAMAM_APP_ID").ok())
            .ok_or(FinderError::MissingCredential("EDAMAM_APP_ID"))?;
        let app_key = config
            .app_key
            .clone()
            .or_else(|| std::env::var("EDAMAM_APP_KEY").ok())
            .ok_or(FinderError::MissingCredential("EDAMAM_APP_KEY"))?;

        Ok(EdamamAdapter {
            app_id,
            app_key,
            base_url: config.base_url.clone(),
            number: config.number,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(app_id: String, app_key: String, base_url: String) -> Self {
        EdamamAdapter {
            app_id,
            app_key,
            base_url,
            number: 1,
        }
    }
}

impl EndpointAdapter for EdamamAdapter {
    fn name(&self) -> &str {
        "edamam"
    }

    fn build_request(&self, client: &Client, query: &SearchQuery) -> RequestBuilder {
        debug!("edamam search q={:?}", query.as_str());

        client.get(format!("{}/search", self.base_url)).query(&[
            ("q", query.as_str().to_string()),
            ("app_id", self.app_id.clone()),
            ("app_key", self.app_key.clone()),
            ("from", "0".to_string()),
            ("to", self.number.to_string()),
        ])
    }

    fn map_response(&self, mut body: Value) -> Vec<Recipe> {
        let Some(first) = body
            .get_mut("hits")
            .and_then(Value::as_array_mut)
            .and_then(|hits| hits.first_mut())
        else {
            return Vec::new();
        };

        let recipe = first.get_mut("recipe").map(Value::take).unwrap_or_default();
        match serde_json::from_value::<RecipeSummary>(recipe) {
            Ok(summary) => vec![Recipe::Summary(summary)],
            Err(e) => {
                warn!("First hit is not a recipe object: {}", e);
                Vec::new()
            }
        }
    }

    fn layout(&self) -> ResultLayout {
        ResultLayout::SingleRecipe
    }

    fn thumbnail_size(&self) -> (u32, u32) {
        (350, 300)
    }
}
