use crate::client::RecipeSearch;
use crate::model::SearchQuery;
use crate::presenter::{ResultPresenter, ResultsView};
use log::debug;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Monotonically increasing search number
pub type Generation = u64;

/// Wakes the UI thread so it drains completions
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// A finished search, tagged with the generation it was dispatched as
#[derive(Debug)]
pub struct Completion {
    pub generation: Generation,
    pub view: ResultsView,
}

/// Runs each search as its own background task and queues the finished views
/// for the UI thread.
///
/// Tasks are never cancelled; the UI side discards completions whose
/// generation has been superseded.
pub struct SearchDispatcher {
    runtime: Handle,
    search: Arc<dyn RecipeSearch>,
    presenter: Arc<ResultPresenter>,
    issued: Generation,
    sender: UnboundedSender<Completion>,
    receiver: UnboundedReceiver<Completion>,
    waker: Waker,
}

impl SearchDispatcher {
    pub fn new(
        runtime: Handle,
        search: Arc<dyn RecipeSearch>,
        presenter: Arc<ResultPresenter>,
        waker: Waker,
    ) -> Self {
        let (sender, receiver) = unbounded_channel();
        SearchDispatcher {
            runtime,
            search,
            presenter,
            issued: 0,
            sender,
            receiver,
            waker,
        }
    }

    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }

    pub fn waker(&self) -> Waker {
        self.waker.clone()
    }

    /// Generation of the most recently dispatched search, 0 before the first
    pub fn latest(&self) -> Generation {
        self.issued
    }

    /// Start a search in the background and return its generation
    pub fn dispatch(&mut self, query: SearchQuery) -> Generation {
        self.issued += 1;
        let generation = self.issued;
        debug!("Dispatching search #{} for {:?}", generation, query.as_str());

        let search = self.search.clone();
        let presenter = self.presenter.clone();
        let sender = self.sender.clone();
        let waker = self.waker.clone();
        self.runtime.spawn(async move {
            let outcome = search.search(&query).await;
            let view = presenter.prepare(outcome).await;
            // The receiver only goes away with the dispatcher itself
            if sender.send(Completion { generation, view }).is_ok() {
                waker();
            }
        });

        generation
    }

    /// Next finished search, if any, without blocking
    pub fn try_next(&mut self) -> Option<Completion> {
        self.receiver.try_recv().ok()
    }

    /// Wait for the next finished search
    pub async fn next(&mut self) -> Option<Completion> {
        self.receiver.recv().await
    }
}
