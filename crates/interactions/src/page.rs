//! Capability traits for the page surfaces the components drive.
//!
//! Components never reach into a concrete UI. Each flow declares the narrow
//! surface it needs (read a field, render a panel, navigate) and the
//! embedding application implements these traits over its real page. Tests
//! implement them with in-memory fakes.

use kenya_commerce_core::ProductId;

/// A quantity input field with its associated stepper controls.
pub trait QuantityField: Send + Sync {
    /// Current text of the field, verbatim.
    fn value(&self) -> String;
    /// Replace the field's text.
    fn set_value(&self, value: &str);
}

/// The cart summary elements updated after a successful cart change.
pub trait CartTotals: Send + Sync {
    fn set_item_count(&self, count: u32);
    fn set_cart_total(&self, rendered: &str);
    fn set_subtotal(&self, rendered: &str);
    fn set_total(&self, rendered: &str);
}

/// A rendered suggestion row.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRow {
    pub id: ProductId,
    pub name: String,
    /// Price rendered with the currency code prefix.
    pub price: String,
    pub image: Option<String>,
}

/// The dropdown panel attached to a search input.
pub trait SuggestionPanel: Send + Sync {
    /// Render clickable suggestion rows and show the panel.
    fn show_results(&self, rows: &[SuggestionRow]);
    /// Show the "no products found" placeholder.
    fn show_empty(&self);
    /// Show the generic failure placeholder.
    fn show_failure(&self);
    /// Hide the panel.
    fn hide(&self);
}

/// Browser-style navigation.
pub trait Navigator: Send + Sync {
    /// Set the current location.
    fn go_to(&self, location: &str);
}

/// Access to the page's cookie header (the `document.cookie` analogue).
pub trait CookieSource: Send + Sync {
    /// The raw cookie header: `;`-separated name=value pairs.
    fn cookie_header(&self) -> String;
}
