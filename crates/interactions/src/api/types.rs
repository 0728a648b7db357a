//! Wire types for the storefront backend endpoints.

use serde::Deserialize;

use kenya_commerce_core::ProductId;

/// Response payload for the cart mutation endpoints.
///
/// The backend always answers `200 OK` and signals rejection through
/// `success: false`; every other field is optional and only applied when
/// present.
#[derive(Debug, Clone, Deserialize)]
pub struct CartUpdate {
    pub success: bool,
    pub message: Option<String>,
    /// Quantity to roll the field back to when the update was rejected.
    pub previous_quantity: Option<u32>,
    pub cart_items_count: Option<u32>,
    pub cart_total: Option<f64>,
    pub subtotal: Option<f64>,
    pub total: Option<f64>,
}

/// A product summary returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    /// Price in major currency units.
    pub price: f64,
    pub image: Option<String>,
}

/// Envelope of the search endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ProductSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_update_full_payload() {
        let update: CartUpdate = serde_json::from_str(
            r#"{"success": true, "message": "Cart updated successfully",
                "cart_items_count": 3, "cart_total": 1234.5,
                "subtotal": 1200.0, "total": 1234.5}"#,
        )
        .expect("parse");
        assert!(update.success);
        assert_eq!(update.cart_items_count, Some(3));
        assert_eq!(update.cart_total, Some(1234.5));
        assert_eq!(update.previous_quantity, None);
    }

    #[test]
    fn test_cart_update_rejection_payload() {
        let update: CartUpdate =
            serde_json::from_str(r#"{"success": false, "previous_quantity": 3}"#).expect("parse");
        assert!(!update.success);
        assert_eq!(update.previous_quantity, Some(3));
        assert_eq!(update.message, None);
    }

    #[test]
    fn test_search_response() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"results": [
                {"id": 7, "name": "Ceramic mug", "price": 450.0,
                 "image": "/media/products/mug.jpg"},
                {"id": 9, "name": "Tea towel", "price": 120.5, "image": null}
            ]}"#,
        )
        .expect("parse");
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].id, ProductId::new(7));
        assert_eq!(response.results[1].image, None);
    }
}
