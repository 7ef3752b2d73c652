use crate::adapters::{EdamamAdapter, EndpointAdapter, SpoonacularAdapter};
use crate::config::AppConfig;
use crate::error::FinderError;

pub struct AdapterFactory;

impl AdapterFactory {
    /// Create the adapter selected by `config.api`
    pub fn create(config: &AppConfig) -> Result<Box<dyn EndpointAdapter>, FinderError> {
        match config.api.as_str() {
            "spoonacular" => Ok(Box::new(SpoonacularAdapter::new(&config.spoonacular)?)),
            "edamam" => Ok(Box::new(EdamamAdapter::new(&config.edamam)?)),
            other => Err(FinderError::UnknownApi(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ResultLayout;

    fn create_test_config(api: &str) -> AppConfig {
        let mut config = AppConfig {
            api: api.to_string(),
            ..Default::default()
        };
        config.spoonacular.api_key = Some("test-key".to_string());
        config.edamam.app_id = Some("test-id".to_string());
        config.edamam.app_key = Some("test-key".to_string());
        config
    }

    #[test]
    fn test_create_spoonacular_adapter() {
        let adapter = AdapterFactory::create(&create_test_config("spoonacular")).unwrap();
        assert_eq!(adapter.name(), "spoonacular");
        assert_eq!(adapter.layout(), ResultLayout::RecipeList);
        assert_eq!(adapter.thumbnail_size(), (150, 150));
    }

    #[test]
    fn test_create_edamam_adapter() {
        let adapter = AdapterFactory::create(&create_test_config("edamam")).unwrap();
        assert_eq!(adapter.name(), "edamam");
        assert_eq!(adapter.layout(), ResultLayout::SingleRecipe);
        assert_eq!(adapter.thumbnail_size(), (350, 300));
    }

    #[test]
    fn test_create_unknown_adapter() {
        let result = AdapterFactory::create(&create_test_config("allrecipes"));
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("Unknown recipe API"));
        }
    }
}
