//! Cart line type.

use crate::catalog::CartProduct;
use crate::ids::{CategoryId, ProductId};
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// One row in the cart, keyed by product id.
///
/// This is also the persisted shape: the durable store holds a JSON array
/// of these with fields `id, name, price, quantity, image, note, category`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product identifier, unique within a cart.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Quantity, always at least 1 while the line is in a cart.
    pub quantity: u32,
    /// Image reference.
    #[serde(default)]
    pub image: Option<String>,
    /// Free-text note for the kitchen.
    #[serde(default)]
    pub note: String,
    /// Classification tag.
    #[serde(default)]
    pub category: Option<CategoryId>,
}

impl CartLine {
    /// Build a line from a product.
    pub fn new(product: CartProduct, quantity: u32, note: impl Into<String>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            quantity,
            image: product.image,
            note: note.into(),
            category: product.category,
        }
    }

    /// `price * quantity`.
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }

    /// Check if the line carries a note.
    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = CartLine::new(CartProduct::new("a", "Phở", Price::new(50_000)), 3, "");
        assert_eq!(line.line_total(), Price::new(150_000));
        assert!(!line.has_note());
    }

    #[test]
    fn test_serialized_field_names() {
        let line = CartLine::new(
            CartProduct::new("a", "Phở", Price::new(50_000)).with_image("/pho.jpg"),
            2,
            "no onions",
        );
        let value = serde_json::to_value(&line).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["category", "id", "image", "name", "note", "price", "quantity"]
        );
        assert_eq!(obj["price"], 50_000);
        assert_eq!(obj["category"], serde_json::Value::Null);
    }

    #[test]
    fn test_missing_note_defaults_to_empty() {
        let json = r#"{"id":"a","name":"Phở","price":50000,"quantity":1}"#;
        let line: CartLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.note, "");
        assert!(line.image.is_none());
        assert!(line.category.is_none());
    }
}
