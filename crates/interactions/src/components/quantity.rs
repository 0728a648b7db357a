//! Cart quantity stepper with server synchronization.
//!
//! Keeps the displayed quantity and the server cart reconciled. Stepper
//! clicks enforce the quantity >= 1 invariant before anything is sent;
//! direct edits are forwarded verbatim and the backend decides.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use kenya_commerce_core::{CartItemId, CurrencyCode};

use crate::api::{CartApi, CartUpdate};
use crate::cookies;
use crate::format::format_currency;
use crate::page::{CartTotals, CookieSource, QuantityField};
use crate::services::NotificationService;

const FALLBACK_ERROR: &str = "Failed to update cart";

/// Synchronizes one quantity field with the server cart.
pub struct QuantityUpdater {
    item: CartItemId,
    field: Arc<dyn QuantityField>,
    totals: Arc<dyn CartTotals>,
    cart: Arc<dyn CartApi>,
    notifier: NotificationService,
    cookies: Arc<dyn CookieSource>,
    csrf_cookie: String,
    currency: CurrencyCode,
    /// Last quantity the server confirmed; transport failures roll the field
    /// back to this value.
    last_confirmed: AtomicU32,
}

impl QuantityUpdater {
    /// Create an updater bound to one quantity field.
    ///
    /// The initial confirmed quantity is read from the field; an unparseable
    /// initial value falls back to 1.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        item: CartItemId,
        field: Arc<dyn QuantityField>,
        totals: Arc<dyn CartTotals>,
        cart: Arc<dyn CartApi>,
        notifier: NotificationService,
        cookies: Arc<dyn CookieSource>,
        csrf_cookie: String,
        currency: CurrencyCode,
    ) -> Self {
        let initial = field.value().trim().parse::<u32>().unwrap_or(1);
        Self {
            item,
            field,
            totals,
            cart,
            notifier,
            cookies,
            csrf_cookie,
            currency,
            last_confirmed: AtomicU32::new(initial),
        }
    }

    /// Decrement stepper clicked. Quantity 1 is the floor: the click is
    /// silently ignored and no request is issued.
    pub async fn on_decrement(&self) {
        let current = self.current();
        if current > 1 {
            let next = current - 1;
            self.field.set_value(&next.to_string());
            self.synchronize(next.to_string()).await;
        }
    }

    /// Increment stepper clicked. Always increments and synchronizes.
    pub async fn on_increment(&self) {
        let next = self.current().saturating_add(1);
        self.field.set_value(&next.to_string());
        self.synchronize(next.to_string()).await;
    }

    /// The field was edited directly. The current text is sent verbatim;
    /// the backend parses the integer.
    pub async fn on_change(&self) {
        self.synchronize(self.field.value()).await;
    }

    /// The last server-confirmed quantity.
    #[must_use]
    pub fn confirmed_quantity(&self) -> u32 {
        self.last_confirmed.load(Ordering::SeqCst)
    }

    fn current(&self) -> u32 {
        self.field
            .value()
            .trim()
            .parse()
            .unwrap_or_else(|_| self.last_confirmed.load(Ordering::SeqCst))
    }

    async fn synchronize(&self, quantity: String) {
        let token =
            cookies::csrf_token(self.cookies.as_ref(), &self.csrf_cookie).unwrap_or_default();

        match self.cart.update_item(self.item, &quantity, &token).await {
            Ok(update) if update.success => {
                self.apply_totals(&update);
                if let Ok(confirmed) = quantity.trim().parse::<u32>() {
                    self.last_confirmed.store(confirmed, Ordering::SeqCst);
                }
                self.notifier.success("Cart updated successfully!");
            }
            Ok(update) => {
                let message = update
                    .message
                    .unwrap_or_else(|| FALLBACK_ERROR.to_string());
                self.notifier.error(message);

                let previous = update.previous_quantity.unwrap_or(1);
                self.field.set_value(&previous.to_string());
                self.last_confirmed.store(previous, Ordering::SeqCst);
            }
            Err(error) => {
                tracing::warn!(%error, item = %self.item, "cart quantity update failed");
                self.notifier.error(FALLBACK_ERROR);

                let previous = self.last_confirmed.load(Ordering::SeqCst);
                self.field.set_value(&previous.to_string());
            }
        }
    }

    fn apply_totals(&self, update: &CartUpdate) {
        if let Some(count) = update.cart_items_count {
            self.totals.set_item_count(count);
        }
        if let Some(amount) = update.cart_total {
            self.totals
                .set_cart_total(&format_currency(amount, self.currency));
        }
        if let Some(amount) = update.subtotal {
            self.totals
                .set_subtotal(&format_currency(amount, self.currency));
        }
        if let Some(amount) = update.total {
            self.totals
                .set_total(&format_currency(amount, self.currency));
        }
    }
}
