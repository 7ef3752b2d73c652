use async_trait::async_trait;
use recipe_finder::presenter::{FOUND_MESSAGE, NOT_FOUND_MESSAGE, WAITING_MESSAGE};
use recipe_finder::{
    ImageFetcher, Recipe, RecipeMatch, RecipeSearch, ResultLayout, ResultPresenter,
    SearchController, SearchDispatcher, SearchOutcome, SearchQuery,
};
use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Answers "slow" after a delay with one recipe and anything else at once
/// with nothing
struct StubSearch;

#[async_trait]
impl RecipeSearch for StubSearch {
    async fn search(&self, query: &SearchQuery) -> SearchOutcome {
        if query.as_str() == "slow" {
            tokio::time::sleep(Duration::from_millis(300)).await;
            SearchOutcome::Found(vec![Recipe::Match(RecipeMatch {
                title: "Slow Roast".to_string(),
                ..Default::default()
            })])
        } else {
            SearchOutcome::NotFound
        }
    }
}

fn create_dispatcher(wakes: Arc<AtomicUsize>) -> SearchDispatcher {
    let images = ImageFetcher::new(Client::new(), (150, 150), 10);
    let presenter = ResultPresenter::new(Arc::new(images), ResultLayout::RecipeList);
    SearchDispatcher::new(
        Handle::current(),
        Arc::new(StubSearch),
        Arc::new(presenter),
        Arc::new(move || {
            wakes.fetch_add(1, Ordering::SeqCst);
        }),
    )
}

#[tokio::test(start_paused = true)]
async fn test_generations_increase() {
    let mut dispatcher = create_dispatcher(Arc::new(AtomicUsize::new(0)));
    assert_eq!(dispatcher.latest(), 0);
    assert_eq!(dispatcher.dispatch(SearchQuery::new("a")), 1);
    assert_eq!(dispatcher.dispatch(SearchQuery::new("b")), 2);
    assert_eq!(dispatcher.latest(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_both_searches_complete_and_wake_ui() {
    let wakes = Arc::new(AtomicUsize::new(0));
    let mut dispatcher = create_dispatcher(wakes.clone());
    dispatcher.dispatch(SearchQuery::new("slow"));
    dispatcher.dispatch(SearchQuery::new("fast"));

    let first = dispatcher.next().await.unwrap();
    let second = dispatcher.next().await.unwrap();
    assert_eq!((first.generation, second.generation), (2, 1));
    assert_eq!(second.view.rows[0].title, "Slow Roast");
    assert_eq!(wakes.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_superseded_search_is_not_shown() {
    let wakes = Arc::new(AtomicUsize::new(0));
    let mut controller =
        SearchController::new(create_dispatcher(wakes.clone()), Duration::from_millis(500));

    controller.state_mut().query = "slow".to_string();
    assert_eq!(controller.submit(), 1);
    controller.state_mut().query = "fast".to_string();
    assert_eq!(controller.submit(), 2);
    assert_eq!(controller.state().status(), WAITING_MESSAGE);
    assert!(controller.state().is_searching());

    controller.settle().await;
    assert!(!controller.state().is_searching());
    assert_eq!(controller.state().status(), NOT_FOUND_MESSAGE);

    // The slow search still finishes, but is fenced off
    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(!controller.poll());
    assert_eq!(controller.state().status(), NOT_FOUND_MESSAGE);
    assert!(controller.state().view().unwrap().rows.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_blinking_stops_when_search_completes() {
    let wakes = Arc::new(AtomicUsize::new(0));
    let mut controller =
        SearchController::new(create_dispatcher(wakes.clone()), Duration::from_millis(100));

    controller.state_mut().query = "slow".to_string();
    controller.submit();
    assert_eq!(controller.state().blink_phase(), Some(false));

    controller.settle().await;
    assert_eq!(controller.state().status(), FOUND_MESSAGE);
    assert_eq!(controller.state().blink_phase(), None);

    // Blinks plus the completion woke the UI while the search ran
    let after_search = wakes.load(Ordering::SeqCst);
    assert!(after_search >= 3);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(wakes.load(Ordering::SeqCst), after_search);
}
