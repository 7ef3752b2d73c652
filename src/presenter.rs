use crate::adapters::ResultLayout;
use crate::images::{ImageFetcher, Thumbnail};
use crate::model::{Recipe, RecipeMatch, RecipeSummary, SearchOutcome};
use log::info;
use std::fmt::Write as _;
use std::sync::Arc;

pub const WAITING_MESSAGE: &str = "Please wait, searching for recipes...";
pub const FOUND_MESSAGE: &str = "Recipes found";
pub const NOT_FOUND_MESSAGE: &str = "No recipes found.";
pub const NO_RECIPE_TEXT: &str = "No Recipe found for search criteria";

/// One rendered result
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub title: String,
    pub thumbnail: Thumbnail,
    /// "Missing Ingredients" block, only when something is missing
    pub missing: Option<String>,
    /// Ingredient list of a single-recipe result
    pub ingredients: Option<String>,
    /// External recipe link; `None` disables the link button
    pub link: Option<String>,
}

/// Everything the results area shows for one outcome
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub layout: ResultLayout,
    pub status: String,
    pub rows: Vec<ResultRow>,
}

impl ResultsView {
    /// Text content of the view, in display order
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.status);
        for row in &self.rows {
            let _ = writeln!(out);
            if !row.title.is_empty() {
                let _ = writeln!(out, "{}", row.title);
            }
            if let Some(missing) = &row.missing {
                out.push_str(missing);
            }
            if let Some(ingredients) = &row.ingredients {
                let _ = writeln!(out, "{}", ingredients);
            }
            if let Some(link) = &row.link {
                let _ = writeln!(out, "{}", link);
            }
        }
        out
    }
}

/// Turns search outcomes into [`ResultsView`]s.
///
/// Runs off the UI thread since it downloads the thumbnails; the finished view
/// is handed to the UI thread, which is the only place it gets displayed.
pub struct ResultPresenter {
    images: Arc<ImageFetcher>,
    layout: ResultLayout,
}

impl ResultPresenter {
    pub fn new(images: Arc<ImageFetcher>, layout: ResultLayout) -> Self {
        ResultPresenter { images, layout }
    }

    pub fn layout(&self) -> ResultLayout {
        self.layout
    }

    pub async fn prepare(&self, outcome: SearchOutcome) -> ResultsView {
        let recipes = match outcome {
            SearchOutcome::Found(recipes) if !recipes.is_empty() => recipes,
            _ => return self.not_found(),
        };

        let mut rows = Vec::with_capacity(recipes.len());
        for recipe in &recipes {
            let thumbnail = self.images.fetch_or_fallback(recipe.image()).await;
            rows.push(match recipe {
                Recipe::Match(found) => ResultRow {
                    title: found.title.clone(),
                    thumbnail,
                    missing: missing_ingredients_text(found),
                    ingredients: None,
                    link: None,
                },
                Recipe::Summary(summary) => ResultRow {
                    title: summary.label.clone(),
                    thumbnail,
                    missing: None,
                    ingredients: Some(ingredient_list_text(summary)),
                    link: Some(summary.url.clone()).filter(|url| !url.is_empty()),
                },
            });
        }
        info!("Rendered {} recipe rows", rows.len());

        ResultsView {
            layout: self.layout,
            status: FOUND_MESSAGE.to_string(),
            rows,
        }
    }

    fn not_found(&self) -> ResultsView {
        let rows = match self.layout {
            ResultLayout::SingleRecipe => vec![ResultRow {
                title: String::new(),
                thumbnail: self.images.fallback(),
                missing: None,
                ingredients: Some(NO_RECIPE_TEXT.to_string()),
                link: None,
            }],
            ResultLayout::RecipeList => Vec::new(),
        };

        ResultsView {
            layout: self.layout,
            status: NOT_FOUND_MESSAGE.to_string(),
            rows,
        }
    }
}

/// `None` when nothing is missing
pub fn missing_ingredients_text(found: &RecipeMatch) -> Option<String> {
    if found.missed_ingredient_count == 0 {
        return None;
    }

    let mut text = format!("Missing Ingredients: {}\n", found.missed_ingredient_count);
    for ingredient in &found.missed_ingredients {
        let _ = writeln!(text, "- {}", ingredient.name);
    }
    Some(text)
}

pub fn ingredient_list_text(summary: &RecipeSummary) -> String {
    let mut text = format!("{}\n", summary.label);
    for line in &summary.ingredient_lines {
        let _ = write!(text, "\n- {}", line);
    }
    text
}
