use crate::adapters::{EndpointAdapter, ResultLayout};
use crate::config::SpoonacularConfig;
use crate::error::FinderError;
use crate::model::{Recipe, RecipeMatch, SearchQuery};
use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use uuid::Uuid;

const CACHE_BUSTER_LEN: usize = 8;

pub struct SpoonacularAdapter {
    api_key: String,
    base_url: String,
    number: u32,
    split_ingredients: bool,
}

impl SpoonacularAdapter {
    /// Create a new adapter from configuration
    pub fn new(config: &SpoonacularConfig) -> Result<Self, FinderError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
            .ok_or(FinderError::MissingCredential("SPOONACULAR_API_KEY"))?;

        Ok(SpoonacularAdapter {
            api_key,
            base_url: config.base_url.clone(),
            number: config.number,
            split_ingredients: config.split_ingredients,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        SpoonacularAdapter {
            api_key,
            base_url,
            number: 6,
            split_ingredients: false,
        }
    }
}

impl EndpointAdapter for SpoonacularAdapter {
    fn name(&self) -> &str {
        "spoonacular"
    }

    fn build_request(&self, client: &Client, query: &SearchQuery) -> RequestBuilder {
        let ingredients = query.ingredients(self.split_ingredients).join(",");
        debug!(
            "findByIngredients ingredients={:?} number={}",
            ingredients, self.number
        );

        client
            .get(format!("{}/recipes/findByIngredients", self.base_url))
            .query(&[
                ("ingredients", ingredients),
                ("apiKey", self.api_key.clone()),
                ("number", self.number.to_string()),
                ("random", cache_buster()),
            ])
    }

    fn map_response(&self, body: Value) -> Vec<Recipe> {
        let items = match body {
            Value::Array(items) => items,
            other => {
                warn!("Expected a JSON array from findByIngredients, got: {}", other);
                return Vec::new();
            }
        };

        items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<RecipeMatch>(item) {
                Ok(found) => Some(Recipe::Match(found)),
                Err(e) => {
                    warn!("Skipping malformed recipe entry: {}", e);
                    None
                }
            })
            .collect()
    }

    fn layout(&self) -> ResultLayout {
        ResultLayout::RecipeList
    }

    fn thumbnail_size(&self) -> (u32, u32) {
        (150, 150)
    }
}

/// Random lowercase alphanumeric string that defeats upstream caching
pub fn cache_buster() -> String {
    let mut token = Uuid::new_v4().simple().to_string();
    token.truncate(CACHE_BUSTER_LEN);
    token
}
