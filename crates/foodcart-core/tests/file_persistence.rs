//! Cart persistence through a directory-backed store.

use foodcart_cache::Cache;
use foodcart_core::prelude::*;

fn open(dir: &std::path::Path) -> CartStore {
    CartStore::open(Cache::open_dir(dir).unwrap(), CartConfig::default()).with_notifier(NullNotifier)
}

#[test]
fn cart_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let mut cart = open(dir.path());
    let mut product = Product::new("a", "Phở", Price::new(50_000));
    product.final_price = Some(Price::new(45_000));
    product.thumbnail = Some("/img/pho.jpg".to_string());
    cart.add_item(&product, 2, "no onions");
    cart.add_item(CartProduct::new("b", "Trà đá", Price::new(5_000)), 1, "");
    let saved = cart.lines().to_vec();
    drop(cart);

    let cart = open(dir.path());
    assert_eq!(cart.lines(), saved.as_slice());
    assert_eq!(cart.subtotal(), Price::new(2 * 45_000 + 5_000));
    assert_eq!(cart.line("a").unwrap().image.as_deref(), Some("/img/pho.jpg"));
}

#[test]
fn corrupt_file_gives_empty_cart() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "not json at all").unwrap();

    let mut cart = open(dir.path());
    assert!(cart.is_empty());

    cart.add(CartProduct::new("a", "Phở", Price::new(50_000)));
    drop(cart);
    assert_eq!(open(dir.path()).total_items(), 1);
}

#[test]
fn cleared_cart_is_stored_as_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = open(dir.path());
    cart.add(CartProduct::new("a", "Phở", Price::new(50_000)));
    cart.clear();

    let contents = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
    assert_eq!(contents, "[]");
}
