use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Deserializer};

/// Main application configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Which recipe API to query ("spoonacular" or "edamam")
    #[serde(default = "default_api")]
    pub api: String,
    /// Request timeout in seconds; the HTTP client default applies when unset
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Ingredient-based search API settings
    #[serde(default)]
    pub spoonacular: SpoonacularConfig,
    /// Single-recipe lookup API settings
    #[serde(default)]
    pub edamam: EdamamConfig,
    /// Thumbnail settings
    #[serde(default)]
    pub images: ImagesConfig,
    /// Loading indicator settings
    #[serde(default)]
    pub loading: LoadingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            timeout: None,
            spoonacular: SpoonacularConfig::default(),
            edamam: EdamamConfig::default(),
            images: ImagesConfig::default(),
            loading: LoadingConfig::default(),
        }
    }
}

/// Configuration for the ingredient-based API
#[derive(Debug, Deserialize, Clone)]
pub struct SpoonacularConfig {
    /// API key (can also be set via SPOONACULAR_API_KEY)
    pub api_key: Option<String>,
    #[serde(default = "default_spoonacular_base_url")]
    pub base_url: String,
    /// Maximum number of recipes returned per search
    #[serde(default = "default_spoonacular_number")]
    pub number: u32,
    /// Split the search text on commas into several ingredients
    #[serde(default)]
    pub split_ingredients: bool,
}

impl Default for SpoonacularConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_spoonacular_base_url(),
            number: default_spoonacular_number(),
            split_ingredients: false,
        }
    }
}

/// Configuration for the single-recipe API
#[derive(Debug, Deserialize, Clone)]
pub struct EdamamConfig {
    /// Application id (can also be set via EDAMAM_APP_ID)
    pub app_id: Option<String>,
    /// Application key (can also be set via EDAMAM_APP_KEY)
    pub app_key: Option<String>,
    #[serde(default = "default_edamam_base_url")]
    pub base_url: String,
    /// Number of hits requested; only the first one is shown
    #[serde(default = "default_edamam_number")]
    pub number: u32,
}

impl Default for EdamamConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_key: None,
            base_url: default_edamam_base_url(),
            number: default_edamam_number(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImagesConfig {
    /// Image shown when a recipe image cannot be loaded
    #[serde(default = "default_fallback_url")]
    pub fallback_url: String,
    /// Thumbnail width; the selected API's default applies when unset
    pub width: Option<u32>,
    /// Thumbnail height; the selected API's default applies when unset
    pub height: Option<u32>,
    /// Gray border added around every thumbnail, in pixels
    #[serde(default = "default_border")]
    pub border: u32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            fallback_url: default_fallback_url(),
            width: None,
            height: None,
            border: default_border(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoadingConfig {
    /// Blink interval of the loading label in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// The two colors the loading label alternates between, as a list or
    /// as one comma-separated string (the form environment variables take)
    #[serde(default = "default_colors", deserialize_with = "color_list")]
    pub colors: Vec<String>,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            colors: default_colors(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorList {
    List(Vec<String>),
    Joined(String),
}

fn color_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ColorList::deserialize(deserializer)? {
        ColorList::List(colors) => colors,
        ColorList::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

// Default value functions
fn default_api() -> String {
    "spoonacular".to_string()
}

fn default_spoonacular_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_spoonacular_number() -> u32 {
    6
}

fn default_edamam_base_url() -> String {
    "https://api.edamam.com".to_string()
}

fn default_edamam_number() -> u32 {
    1
}

fn default_fallback_url() -> String {
    "https://www.mageworx.com/blog/wp-content/uploads/2012/06/Page-Not-Found-13.jpg".to_string()
}

fn default_border() -> u32 {
    10
}

fn default_interval_ms() -> u64 {
    500
}

fn default_colors() -> Vec<String> {
    vec!["#F11A7B".to_string(), "#3E001F".to_string()]
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. recipe-finder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__SPOONACULAR__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from("recipe-finder")
}

/// Same as [`load_config`] with a different optional config file
pub fn load_config_from(file: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file).required(false))
        // Use double underscore for nested: RECIPE_FINDER__EDAMAM__APP_ID
        // Values stay strings so numeric credentials keep leading zeros
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}
