//! Add-to-cart button with timed visual feedback.
//!
//! A click posts the add request and, independently, drives the button
//! through `Adding` (1 s) then `Added` (2 s) before returning to idle.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::AbortHandle;

use kenya_commerce_core::{CurrencyCode, ProductId};

use crate::api::CartApi;
use crate::cookies;
use crate::format::format_currency;
use crate::page::{CartTotals, CookieSource};
use crate::services::NotificationService;

const ADDING_DURATION: Duration = Duration::from_secs(1);
const ADDED_DURATION: Duration = Duration::from_secs(2);
const FALLBACK_ERROR: &str = "Failed to add to cart";

/// Visual feedback states of an add-to-cart button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Adding,
    Added,
}

/// The button element driven through the feedback states.
pub trait AddToCartButton: Send + Sync {
    fn set_state(&self, state: ButtonState);
}

/// Adds one product to the cart with visual feedback.
///
/// Cheaply cloneable; clones share the feedback timer.
#[derive(Clone)]
pub struct AddToCart {
    inner: Arc<AddToCartInner>,
}

struct AddToCartInner {
    product: ProductId,
    button: Arc<dyn AddToCartButton>,
    totals: Arc<dyn CartTotals>,
    cart: Arc<dyn CartApi>,
    notifier: NotificationService,
    cookies: Arc<dyn CookieSource>,
    csrf_cookie: String,
    currency: CurrencyCode,
    feedback: Mutex<Option<AbortHandle>>,
}

impl AddToCart {
    /// Create a component bound to one product's add button.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product: ProductId,
        button: Arc<dyn AddToCartButton>,
        totals: Arc<dyn CartTotals>,
        cart: Arc<dyn CartApi>,
        notifier: NotificationService,
        cookies: Arc<dyn CookieSource>,
        csrf_cookie: String,
        currency: CurrencyCode,
    ) -> Self {
        Self {
            inner: Arc::new(AddToCartInner {
                product,
                button,
                totals,
                cart,
                notifier,
                cookies,
                csrf_cookie,
                currency,
                feedback: Mutex::new(None),
            }),
        }
    }

    /// The button was clicked: start the feedback sequence and post the add
    /// request with the given quantity.
    ///
    /// Must be called from within a Tokio runtime: the feedback timers are a
    /// spawned task.
    pub async fn on_click(&self, quantity: u32) {
        self.start_feedback();

        let token = cookies::csrf_token(self.inner.cookies.as_ref(), &self.inner.csrf_cookie)
            .unwrap_or_default();

        match self
            .inner
            .cart
            .add_item(self.inner.product, quantity, &token)
            .await
        {
            Ok(update) if update.success => {
                if let Some(count) = update.cart_items_count {
                    self.inner.totals.set_item_count(count);
                }
                if let Some(amount) = update.cart_total {
                    self.inner
                        .totals
                        .set_cart_total(&format_currency(amount, self.inner.currency));
                }
                let message = update
                    .message
                    .unwrap_or_else(|| "Added to cart".to_string());
                self.inner.notifier.success(message);
            }
            Ok(update) => {
                let message = update
                    .message
                    .unwrap_or_else(|| FALLBACK_ERROR.to_string());
                self.inner.notifier.error(message);
            }
            Err(error) => {
                tracing::warn!(%error, product = %self.inner.product, "add to cart failed");
                self.inner.notifier.error(FALLBACK_ERROR);
            }
        }
    }

    /// Restart the `Adding -> Added -> Idle` sequence; a rapid second click
    /// replaces the running sequence.
    fn start_feedback(&self) {
        let mut feedback = self
            .inner
            .feedback
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = feedback.take() {
            previous.abort();
        }

        self.inner.button.set_state(ButtonState::Adding);
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(ADDING_DURATION).await;
            inner.button.set_state(ButtonState::Added);
            tokio::time::sleep(ADDED_DURATION).await;
            inner.button.set_state(ButtonState::Idle);
        });
        *feedback = Some(handle.abort_handle());
    }
}
