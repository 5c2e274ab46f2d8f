//! Product records as returned by the catalog API.
//!
//! Listing, filtering and "featured/popular" selection belong to the
//! display layer. The cart only needs [`CartProduct`], the subset of a
//! product record that [`CartStore::add_item`](crate::cart::CartStore::add_item)
//! consumes.

use crate::ids::{CategoryId, ProductId};
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Description shown on the product card.
    #[serde(default)]
    pub description: Option<String>,
    /// Base (list) price.
    pub price: Price,
    /// Price after discount, when the API computed one.
    #[serde(default)]
    pub final_price: Option<Price>,
    /// Whether a discount is currently running.
    #[serde(default)]
    pub is_discount_active: bool,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Average customer rating (0.0 - 5.0).
    #[serde(default)]
    pub rating_average: f32,
    /// Number of ratings behind the average.
    #[serde(default)]
    pub rating_count: u32,
    /// Classification tag.
    #[serde(default)]
    pub category: Option<CategoryId>,
}

impl Product {
    /// Create a product with only the required fields set.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
            final_price: None,
            is_discount_active: false,
            thumbnail: None,
            rating_average: 0.0,
            rating_count: 0,
            category: None,
        }
    }

    /// The price a customer pays: `final_price` if present, else `price`.
    pub fn effective_price(&self) -> Price {
        self.final_price.unwrap_or(self.price)
    }

    /// Check if the product is sold below its base price.
    pub fn is_on_sale(&self) -> bool {
        self.is_discount_active && self.effective_price() < self.price
    }

    /// Discount relative to the base price, in percent.
    pub fn discount_percentage(&self) -> Option<f64> {
        if !self.is_on_sale() || self.price.is_zero() {
            return None;
        }
        let savings = self.price.amount() - self.effective_price().amount();
        Some(savings as f64 / self.price.amount() as f64 * 100.0)
    }
}

/// The product fields a cart line is built from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: Option<String>,
    pub category: Option<CategoryId>,
}

impl CartProduct {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: None,
            category: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl From<&Product> for CartProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.effective_price(),
            image: product.thumbnail.clone(),
            category: product.category.clone(),
        }
    }
}

impl From<Product> for CartProduct {
    fn from(product: Product) -> Self {
        let price = product.effective_price();
        Self {
            id: product.id,
            name: product.name,
            price,
            image: product.thumbnail,
            category: product.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_price_falls_back_to_base() {
        let product = Product::new("pho", "Phở", Price::new(50_000));
        assert_eq!(product.effective_price(), Price::new(50_000));
    }

    #[test]
    fn test_effective_price_prefers_final() {
        let mut product = Product::new("pho", "Phở", Price::new(50_000));
        product.final_price = Some(Price::new(45_000));
        assert_eq!(product.effective_price(), Price::new(45_000));
    }

    #[test]
    fn test_on_sale() {
        let mut product = Product::new("pho", "Phở", Price::new(50_000));
        product.final_price = Some(Price::new(40_000));
        assert!(!product.is_on_sale());

        product.is_discount_active = true;
        assert!(product.is_on_sale());
        let pct = product.discount_percentage().unwrap();
        assert!((pct - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_cart_product_from_product() {
        let mut product = Product::new("bun", "Bún chả", Price::new(60_000));
        product.final_price = Some(Price::new(55_000));
        product.thumbnail = Some("/img/bun.jpg".to_string());
        product.category = Some(CategoryId::new("noodles"));

        let cart_product = CartProduct::from(&product);
        assert_eq!(cart_product.id, ProductId::new("bun"));
        assert_eq!(cart_product.price, Price::new(55_000));
        assert_eq!(cart_product.image.as_deref(), Some("/img/bun.jpg"));
        assert_eq!(cart_product.category, Some(CategoryId::new("noodles")));
    }

    #[test]
    fn test_product_deserializes_with_missing_optionals() {
        let json = r#"{"id":"7","name":"Cơm tấm","price":45000,"final_price":null}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.effective_price(), Price::new(45_000));
        assert_eq!(product.rating_count, 0);
        assert!(product.thumbnail.is_none());
    }
}
