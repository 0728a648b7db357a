//! Shared state wiring the components to one page.

use std::sync::Arc;

use kenya_commerce_core::{CartItemId, ProductId};

use crate::api::{CartApi, CommerceClient, SearchApi};
use crate::components::add_to_cart::{AddToCart, AddToCartButton};
use crate::components::effects::{BackToTop, BackToTopSurface};
use crate::components::form::{FieldErrors, FormValidator};
use crate::components::menu::{MenuSurface, MobileMenu, Viewport};
use crate::components::quantity::QuantityUpdater;
use crate::components::search::SearchSuggester;
use crate::config::UiConfig;
use crate::error::UiError;
use crate::page::{CartTotals, CookieSource, Navigator, QuantityField, SuggestionPanel};
use crate::services::notify::{NotificationArea, NotificationService};
use crate::services::storage::{KeyValueStore, MemoryStore};

/// Shared state for one page's interaction layer.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// backend client, the notification service, and factories for the
/// per-element components.
#[derive(Clone)]
pub struct StorefrontUi {
    inner: Arc<StorefrontUiInner>,
}

struct StorefrontUiInner {
    config: UiConfig,
    client: CommerceClient,
    notifier: NotificationService,
    cookies: Arc<dyn CookieSource>,
    storage: Arc<dyn KeyValueStore>,
}

impl StorefrontUi {
    /// Create the interaction layer for one page.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is invalid.
    pub fn new(
        config: UiConfig,
        cookies: Arc<dyn CookieSource>,
        notifications: Arc<dyn NotificationArea>,
    ) -> Result<Self, UiError> {
        let client = CommerceClient::new(&config)?;
        let notifier = NotificationService::new(notifications, config.notification_ttl);

        Ok(Self {
            inner: Arc::new(StorefrontUiInner {
                config,
                client,
                notifier,
                cookies,
                storage: Arc::new(MemoryStore::default()),
            }),
        })
    }

    /// Create the interaction layer from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env(
        cookies: Arc<dyn CookieSource>,
        notifications: Arc<dyn NotificationArea>,
    ) -> Result<Self, UiError> {
        Self::new(UiConfig::from_env()?, cookies, notifications)
    }

    /// Replace the key-value store backing (local/session storage in a
    /// browser embedding; the default is in-memory).
    #[must_use]
    pub fn with_storage(self, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            inner: Arc::new(StorefrontUiInner {
                config: self.inner.config.clone(),
                client: self.inner.client.clone(),
                notifier: self.inner.notifier.clone(),
                cookies: Arc::clone(&self.inner.cookies),
                storage,
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.inner.config
    }

    /// Get a reference to the backend client.
    #[must_use]
    pub fn client(&self) -> &CommerceClient {
        &self.inner.client
    }

    /// Get the notification service.
    #[must_use]
    pub fn notifier(&self) -> NotificationService {
        self.inner.notifier.clone()
    }

    /// Get the key-value store.
    #[must_use]
    pub fn storage(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.inner.storage)
    }

    // =========================================================================
    // Component Factories
    // =========================================================================

    /// Bind a quantity updater to one cart item's field and the cart totals.
    #[must_use]
    pub fn quantity_updater(
        &self,
        item: CartItemId,
        field: Arc<dyn QuantityField>,
        totals: Arc<dyn CartTotals>,
    ) -> QuantityUpdater {
        QuantityUpdater::new(
            item,
            field,
            totals,
            self.cart_api(),
            self.notifier(),
            Arc::clone(&self.inner.cookies),
            self.inner.config.csrf_cookie.clone(),
            self.inner.config.currency,
        )
    }

    /// Bind a search suggester to one search input's panel.
    #[must_use]
    pub fn search_suggester(
        &self,
        panel: Arc<dyn SuggestionPanel>,
        navigator: Arc<dyn Navigator>,
    ) -> SearchSuggester {
        SearchSuggester::new(
            self.search_api(),
            panel,
            navigator,
            self.inner.config.currency,
            &self.inner.config.search,
        )
    }

    /// Bind an add-to-cart component to one product's button.
    #[must_use]
    pub fn add_to_cart(
        &self,
        product: ProductId,
        button: Arc<dyn AddToCartButton>,
        totals: Arc<dyn CartTotals>,
    ) -> AddToCart {
        AddToCart::new(
            product,
            button,
            totals,
            self.cart_api(),
            self.notifier(),
            Arc::clone(&self.inner.cookies),
            self.inner.config.csrf_cookie.clone(),
            self.inner.config.currency,
        )
    }

    /// Bind a form validator to a form's inline error surface.
    #[must_use]
    pub fn form_validator(&self, errors: Arc<dyn FieldErrors>) -> FormValidator {
        FormValidator::new(errors)
    }

    /// Bind the mobile menu to the navigation bar.
    #[must_use]
    pub fn mobile_menu(
        &self,
        surface: Arc<dyn MenuSurface>,
        viewport: Arc<dyn Viewport>,
    ) -> MobileMenu {
        MobileMenu::new(surface, viewport)
    }

    /// Bind the back-to-top button.
    #[must_use]
    pub fn back_to_top(&self, surface: Arc<dyn BackToTopSurface>) -> BackToTop {
        BackToTop::new(surface)
    }

    fn cart_api(&self) -> Arc<dyn CartApi> {
        Arc::new(self.inner.client.clone())
    }

    fn search_api(&self) -> Arc<dyn SearchApi> {
        Arc::new(self.inner.client.clone())
    }
}
