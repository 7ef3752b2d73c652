mod edamam;
mod factory;
mod spoonacular;

pub use edamam::EdamamAdapter;
pub use factory::AdapterFactory;
pub use spoonacular::{cache_buster, SpoonacularAdapter};

use crate::model::{Recipe, SearchQuery};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

/// How the results of an API are laid out on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLayout {
    /// One recipe with its ingredient list and an external link
    SingleRecipe,
    /// A scrollable list of recipes with their missing ingredients
    RecipeList,
}

/// Request builder and response mapper for one recipe-search API
pub trait EndpointAdapter: Send + Sync {
    /// Get the adapter name (e.g., "spoonacular", "edamam")
    fn name(&self) -> &str;

    /// Build the GET request for a query
    fn build_request(&self, client: &Client, query: &SearchQuery) -> RequestBuilder;

    /// Map a 200 response body to recipes, in API order
    fn map_response(&self, body: Value) -> Vec<Recipe>;

    fn layout(&self) -> ResultLayout;

    /// Default thumbnail size (width, height) in pixels, before the border
    fn thumbnail_size(&self) -> (u32, u32);
}
