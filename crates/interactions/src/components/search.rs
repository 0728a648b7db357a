//! Debounced search suggestions.
//!
//! Per input the flow is `Idle -> Debouncing -> Querying -> {Displaying |
//! Empty | Failed}`. Every keystroke aborts any pending debounce timer, so
//! only the last keystroke inside the quiet period reaches the backend.
//! Responses carry an epoch: a response issued for a superseded query is
//! discarded instead of overwriting newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::AbortHandle;

use kenya_commerce_core::{CurrencyCode, ProductId};

use crate::api::{SearchApi, product_location};
use crate::config::SearchConfig;
use crate::format::format_currency;
use crate::page::{Navigator, SuggestionPanel, SuggestionRow};

/// Debounced suggestion dropdown for one search input.
///
/// Cheaply cloneable; clones share the debounce timer and epoch state.
#[derive(Clone)]
pub struct SearchSuggester {
    inner: Arc<SuggesterInner>,
}

struct PendingTimer {
    id: u64,
    handle: AbortHandle,
}

struct SuggesterInner {
    api: Arc<dyn SearchApi>,
    panel: Arc<dyn SuggestionPanel>,
    navigator: Arc<dyn Navigator>,
    currency: CurrencyCode,
    min_query_len: usize,
    debounce: Duration,
    limit: usize,
    /// The pending debounce timer, if any. A timer disarms itself once it
    /// fires: superseding input cancels pending timers, never an in-flight
    /// request.
    pending: Mutex<Option<PendingTimer>>,
    timer_seq: AtomicU64,
    /// Bumped when a query is dispatched and when the input drops below the
    /// threshold; responses from older epochs are discarded.
    epoch: AtomicU64,
}

impl SearchSuggester {
    /// Create a suggester for one search input.
    #[must_use]
    pub fn new(
        api: Arc<dyn SearchApi>,
        panel: Arc<dyn SuggestionPanel>,
        navigator: Arc<dyn Navigator>,
        currency: CurrencyCode,
        config: &SearchConfig,
    ) -> Self {
        Self {
            inner: Arc::new(SuggesterInner {
                api,
                panel,
                navigator,
                currency,
                min_query_len: config.min_query_len,
                debounce: config.debounce,
                limit: config.suggestion_limit,
                pending: Mutex::new(None),
                timer_seq: AtomicU64::new(0),
                epoch: AtomicU64::new(0),
            }),
        }
    }

    /// A keystroke arrived. Cancels any pending debounce timer; hides the
    /// panel when the trimmed query is below the length threshold, otherwise
    /// schedules a lookup after the quiet period.
    ///
    /// Must be called from within a Tokio runtime: the debounce timer is a
    /// spawned task.
    pub fn on_input(&self, text: &str) {
        let query = text.trim().to_string();

        if let Some(pending) = self.lock_pending().take() {
            pending.handle.abort();
        }

        if query.chars().count() < self.inner.min_query_len {
            // Also invalidates any in-flight request so its late response
            // cannot resurrect the panel.
            self.inner.epoch.fetch_add(1, Ordering::SeqCst);
            self.inner.panel.hide();
            return;
        }

        let id = self.inner.timer_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(inner.debounce).await;
            SuggesterInner::disarm(&inner, id);
            SuggesterInner::run_query(&inner, &query).await;
        });
        *self.lock_pending() = Some(PendingTimer {
            id,
            handle: handle.abort_handle(),
        });
    }

    /// A suggestion row was selected: navigate to the product detail page.
    pub fn on_suggestion_click(&self, product: ProductId) {
        self.inner.navigator.go_to(&product_location(product));
    }

    /// A pointer interaction landed outside the input and panel. Hides the
    /// panel; a pending debounce timer keeps running.
    pub fn on_click_outside(&self) {
        self.inner.panel.hide();
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, Option<PendingTimer>> {
        self.inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl SuggesterInner {
    /// Clear the stored timer once it fires, so later keystrokes cannot
    /// abort the request it is about to issue.
    fn disarm(inner: &Arc<Self>, id: u64) {
        let mut pending = inner.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if pending.as_ref().is_some_and(|timer| timer.id == id) {
            *pending = None;
        }
    }

    async fn run_query(inner: &Arc<Self>, query: &str) {
        let epoch = inner.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = inner.api.search(query, inner.limit).await;

        if inner.epoch.load(Ordering::SeqCst) != epoch {
            tracing::debug!(%query, "discarding stale search response");
            return;
        }

        match outcome {
            Ok(results) if results.is_empty() => inner.panel.show_empty(),
            Ok(results) => {
                let rows: Vec<SuggestionRow> = results
                    .into_iter()
                    .map(|product| SuggestionRow {
                        id: product.id,
                        name: product.name,
                        price: format_currency(product.price, inner.currency),
                        image: product.image,
                    })
                    .collect();
                inner.panel.show_results(&rows);
            }
            Err(error) => {
                tracing::warn!(%error, %query, "search request failed");
                inner.panel.show_failure();
            }
        }
    }
}
