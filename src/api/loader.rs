//! Background catalog fetching with message-channel delivery.
//!
//! The UI never blocks on the network: a worker thread drives the
//! request(s) for the resolved route and posts one terminal message back
//! over a channel. The event loop drains it with [`FetchState::poll`];
//! the headless export path blocks on [`FetchState::wait`].

use std::sync::mpsc::{channel, Receiver};
use std::thread;

use crate::api::CatalogClient;
use crate::constants::PER_ID_MAX;
use crate::models::Product;
use crate::routing::{ListScope, Route};
use crate::services::pick_featured;

/// How a list view acquires its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LoadStrategy {
    /// One collection request per view.
    #[default]
    Collection,
    /// Independent per-id requests for ids 0 through 10, joined in bulk;
    /// only the unscoped "all" listing uses this.
    PerId,
}

/// Fetch progress as seen by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Request(s) still in flight.
    Loading,
    /// Terminal message received, payload delivered.
    Loaded,
    /// Terminal message received, fetch failed.
    Failed,
}

/// Data delivered by a successful fetch.
#[derive(Debug, Clone)]
pub enum FetchPayload {
    /// Items for a list view.
    Listing(Vec<Product>),
    /// The single product of a detail view.
    Detail(Product),
    /// The homepage's featured perfume, when one matched.
    Featured(Option<Product>),
}

/// Terminal message sent from the worker thread to the UI.
#[derive(Debug, Clone)]
pub enum FetchMessage {
    /// The fetch succeeded.
    Loaded(FetchPayload),
    /// The fetch failed; the string is the underlying error for the log,
    /// not for display.
    Failed(String),
}

/// Tracks one background fetch.
pub struct FetchState {
    /// Current fetch status.
    pub status: FetchStatus,
    receiver: Option<Receiver<FetchMessage>>,
}

impl FetchState {
    /// Creates a tracker with no fetch attached; `poll` never yields.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            status: FetchStatus::Loading,
            receiver: None,
        }
    }

    /// Spawns the fetch for `route` and returns the tracking state.
    #[must_use]
    pub fn spawn(base_url: String, list_limit: u32, route: Route, strategy: LoadStrategy) -> Self {
        let (sender, receiver) = channel();

        thread::spawn(move || {
            let message = run_fetch(&base_url, list_limit, &route, strategy);
            // The UI may have exited already; a closed channel is fine.
            let _ = sender.send(message);
        });

        Self {
            status: FetchStatus::Loading,
            receiver: Some(receiver),
        }
    }

    /// Whether no terminal message has arrived yet.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    /// Polls the channel without blocking.
    ///
    /// Returns the terminal message once, when it arrives; the status is
    /// updated accordingly.
    pub fn poll(&mut self) -> Option<FetchMessage> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(message) => {
                self.note(&message);
                Some(message)
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => None,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.receiver = None;
                None
            }
        }
    }

    /// Blocks until the terminal message arrives (headless export path).
    pub fn wait(&mut self) -> Option<FetchMessage> {
        let receiver = self.receiver.take()?;
        let message = receiver.recv().ok()?;
        self.note(&message);
        Some(message)
    }

    fn note(&mut self, message: &FetchMessage) {
        self.status = match message {
            FetchMessage::Loaded(_) => FetchStatus::Loaded,
            FetchMessage::Failed(_) => FetchStatus::Failed,
        };
        self.receiver = None;
    }
}

/// Runs the route's request(s) on a thread-local runtime.
fn run_fetch(base_url: &str, list_limit: u32, route: &Route, strategy: LoadStrategy) -> FetchMessage {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            tracing::error!(%err, "failed to start fetch runtime");
            return FetchMessage::Failed(err.to_string());
        }
    };

    let client = CatalogClient::new(base_url);
    runtime.block_on(fetch_route(&client, list_limit, route, strategy))
}

async fn fetch_route(
    client: &CatalogClient,
    list_limit: u32,
    route: &Route,
    strategy: LoadStrategy,
) -> FetchMessage {
    match route {
        Route::Detail(id) => match client.product(id).await {
            Ok(product) => FetchMessage::Loaded(FetchPayload::Detail(product)),
            Err(err) => {
                tracing::error!(%err, %id, "detail fetch failed");
                FetchMessage::Failed(err.to_string())
            }
        },
        Route::List(scope) => fetch_listing(client, list_limit, *scope, strategy).await,
        Route::Home => match client.category_listing("fragrances").await {
            Ok(products) => {
                let featured = pick_featured(&products).cloned();
                FetchMessage::Loaded(FetchPayload::Featured(featured))
            }
            Err(err) => {
                tracing::error!(%err, "homepage fetch failed");
                FetchMessage::Failed(err.to_string())
            }
        },
    }
}

async fn fetch_listing(
    client: &CatalogClient,
    list_limit: u32,
    scope: ListScope,
    strategy: LoadStrategy,
) -> FetchMessage {
    let result = match (scope.category(), strategy) {
        // The per-id strategy only exists for the unscoped listing.
        (None, LoadStrategy::PerId) => {
            return FetchMessage::Loaded(FetchPayload::Listing(
                client.listing_by_ids(PER_ID_MAX).await,
            ));
        }
        (None, LoadStrategy::Collection) => client.capped_listing(list_limit).await,
        (Some(category), _) => client.category_listing(category).await,
    };

    match result {
        Ok(products) => FetchMessage::Loaded(FetchPayload::Listing(products)),
        Err(err) => {
            tracing::error!(%err, view = scope.view_value(), "listing fetch failed");
            FetchMessage::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_starts_loading() {
        // Nothing listens on the discard port, so the fetch fails fast,
        // but the state must report Loading until the message is drained.
        let state = FetchState::spawn(
            "http://127.0.0.1:9/products".to_string(),
            12,
            Route::Home,
            LoadStrategy::Collection,
        );
        assert!(state.is_loading());
    }

    #[test]
    fn test_unreachable_host_delivers_failed_message() {
        let mut state = FetchState::spawn(
            "http://127.0.0.1:9/products".to_string(),
            12,
            Route::List(ListScope::All),
            LoadStrategy::Collection,
        );
        match state.wait() {
            Some(FetchMessage::Failed(_)) => {}
            other => panic!("expected failure message, got {other:?}"),
        }
        assert_eq!(state.status, FetchStatus::Failed);
        // The channel is spent; further polls yield nothing.
        assert!(state.poll().is_none());
    }
}
