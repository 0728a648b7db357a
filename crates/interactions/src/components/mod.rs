//! Interactive components, one module per storefront behavior.

pub mod add_to_cart;
pub mod effects;
pub mod form;
pub mod menu;
pub mod quantity;
pub mod search;

pub use add_to_cart::{AddToCart, AddToCartButton, ButtonState};
pub use effects::{BackToTop, ImageZoom, LazyImages, ScrollReveal};
pub use form::{FieldKind, FormField, FormValidator};
pub use menu::MobileMenu;
pub use quantity::QuantityUpdater;
pub use search::SearchSuggester;
