use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text typed into the search field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        SearchQuery(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ingredient list sent to the ingredient-based API.
    ///
    /// Without splitting the whole text is a single ingredient, even when it
    /// is empty. With splitting, commas separate ingredients and blank
    /// entries are dropped.
    pub fn ingredients(&self, split: bool) -> Vec<String> {
        if !split {
            return vec![self.0.clone()];
        }

        self.0
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Top hit of the single-recipe API
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    #[serde(default, deserialize_with = "or_default")]
    pub label: String,
    #[serde(default, deserialize_with = "or_default")]
    pub image: String,
    #[serde(default, deserialize_with = "or_default")]
    pub url: String,
    #[serde(default, deserialize_with = "or_default")]
    pub ingredient_lines: Vec<String>,
}

/// One result of the ingredient-based API
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMatch {
    #[serde(default, deserialize_with = "or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "or_default")]
    pub image: String,
    #[serde(default, deserialize_with = "count_or_default")]
    pub missed_ingredient_count: u32,
    #[serde(default, deserialize_with = "or_default")]
    pub missed_ingredients: Vec<MissedIngredient>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MissedIngredient {
    #[serde(default, deserialize_with = "or_default")]
    pub name: String,
}

/// A record produced by one of the endpoint adapters
#[derive(Debug, Clone, PartialEq)]
pub enum Recipe {
    Summary(RecipeSummary),
    Match(RecipeMatch),
}

impl Recipe {
    pub fn title(&self) -> &str {
        match self {
            Recipe::Summary(summary) => &summary.label,
            Recipe::Match(found) => &found.title,
        }
    }

    pub fn image(&self) -> &str {
        match self {
            Recipe::Summary(summary) => &summary.image,
            Recipe::Match(found) => &found.image,
        }
    }
}

/// Result of one search attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// At least one recipe came back, in the order the API returned them
    Found(Vec<Recipe>),
    /// The API answered but matched nothing
    NotFound,
    /// The request failed; the message is only logged
    TransportError(String),
}

impl SearchOutcome {
    pub fn recipes(&self) -> &[Recipe] {
        match self {
            SearchOutcome::Found(recipes) => recipes,
            _ => &[],
        }
    }
}

/// Falls back to the default when the field is `null` or has the wrong type,
/// so one bad field never drops the whole record.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Like [`or_default`], but also takes whole floats such as `2.0`.
fn count_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        _ => None,
    };
    Ok(count.and_then(|c| u32::try_from(c).ok()).unwrap_or_default())
}
