use recipe_finder::config::load_config_from;
use recipe_finder::{AdapterFactory, AppConfig, FinderError, SearchQuery};
use reqwest::Client;
use std::env;
use std::sync::Mutex;
use uuid::Uuid;

// Tests in this file share the process environment
static ENV_LOCK: Mutex<()> = Mutex::new(());

const OVERRIDES: [(&str, &str); 5] = [
    ("RECIPE_FINDER__API", "edamam"),
    ("RECIPE_FINDER__TIMEOUT", "20"),
    ("RECIPE_FINDER__SPOONACULAR__SPLIT_INGREDIENTS", "true"),
    ("RECIPE_FINDER__LOADING__COLORS", "#000000,#FFFFFF"),
    ("RECIPE_FINDER__EDAMAM__APP_ID", "0042"),
];

fn query_value(config: &AppConfig, key: &str) -> Option<String> {
    let adapter = AdapterFactory::create(config).unwrap();
    let request = adapter
        .build_request(&Client::new(), &SearchQuery::new("egg"))
        .build()
        .unwrap();
    request
        .url()
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[test]
fn test_env_overrides_file_and_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let path = env::temp_dir().join(format!("recipe-finder-{}.toml", Uuid::new_v4()));
    std::fs::write(
        &path,
        r#"
        api = "spoonacular"
        timeout = 5

        [spoonacular]
        number = 3
        "#,
    )
    .unwrap();

    for (key, value) in OVERRIDES {
        env::set_var(key, value);
    }
    let result = load_config_from(path.to_str().unwrap());
    for (key, _) in OVERRIDES {
        env::remove_var(key);
    }
    std::fs::remove_file(&path).unwrap();

    let config = result.unwrap();
    assert_eq!(config.api, "edamam");
    assert_eq!(config.timeout, Some(20));
    assert!(config.spoonacular.split_ingredients);
    assert_eq!(config.loading.colors, vec!["#000000", "#FFFFFF"]);
    assert_eq!(config.edamam.app_id.as_deref(), Some("0042"));
    // Untouched by the environment
    assert_eq!(config.spoonacular.number, 3);
    assert_eq!(config.images.border, 10);
}

#[test]
fn test_missing_config_file_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let config = load_config_from("does-not-exist/recipe-finder").unwrap();
    assert_eq!(config.spoonacular.number, 6);
    assert_eq!(config.loading.interval_ms, 500);
}

#[test]
fn test_spoonacular_key_from_environment() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let config = AppConfig::default();

    env::remove_var("SPOONACULAR_API_KEY");
    assert!(matches!(
        AdapterFactory::create(&config),
        Err(FinderError::MissingCredential("SPOONACULAR_API_KEY"))
    ));

    env::set_var("SPOONACULAR_API_KEY", "env_key");
    let api_key = query_value(&config, "apiKey");
    env::remove_var("SPOONACULAR_API_KEY");

    assert_eq!(api_key.as_deref(), Some("env_key"));
}

#[test]
fn test_edamam_credentials_from_environment() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let config = AppConfig {
        api: "edamam".to_string(),
        ..Default::default()
    };

    env::set_var("EDAMAM_APP_ID", "0042");
    env::remove_var("EDAMAM_APP_KEY");
    assert!(matches!(
        AdapterFactory::create(&config),
        Err(FinderError::MissingCredential("EDAMAM_APP_KEY"))
    ));

    env::set_var("EDAMAM_APP_KEY", "env_app_key");
    let app_id = query_value(&config, "app_id");
    let app_key = query_value(&config, "app_key");
    env::remove_var("EDAMAM_APP_ID");
    env::remove_var("EDAMAM_APP_KEY");

    assert_eq!(app_id.as_deref(), Some("0042"));
    assert_eq!(app_key.as_deref(), Some("env_app_key"));
}
