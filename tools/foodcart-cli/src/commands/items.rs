//! Cart mutation commands.

use anyhow::{Context as _, Result};
use dialoguer::Confirm;
use foodcart_core::catalog::{CartProduct, Product};
use foodcart_core::{CartStore, Price};

use super::{AddArgs, ClearArgs, NoteArgs, RemoveArgs, SetQtyArgs};
use crate::context::Context;

/// Run the add command.
pub fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let product = product_from_args(&args)?;
    let mut cart = ctx.open_cart()?;

    let id = product.id.clone();
    let outcome = cart.add_item(product, args.quantity, &args.note);
    ctx.output.debug(&format!("add {}: {:?}", id, outcome));

    report(&cart, ctx);
    Ok(())
}

/// Run the set-qty command.
pub fn set_quantity(args: SetQtyArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    if !cart.update_quantity(&args.id, args.quantity) {
        ctx.output.warn(&format!("'{}' is not in the cart", args.id));
        return Ok(());
    }
    if args.quantity > 0 {
        ctx.output
            .success(&format!("Set quantity of '{}' to {}", args.id, args.quantity));
    }
    report(&cart, ctx);
    Ok(())
}

/// Run the remove command.
pub fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    if !cart.remove_item(&args.id) {
        ctx.output.warn(&format!("'{}' is not in the cart", args.id));
        return Ok(());
    }
    report(&cart, ctx);
    Ok(())
}

/// Run the note command.
pub fn note(args: NoteArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;
    if !cart.update_note(&args.id, args.note.as_str()) {
        ctx.output.warn(&format!("'{}' is not in the cart", args.id));
        return Ok(());
    }
    if args.note.is_empty() {
        ctx.output.success(&format!("Cleared note on '{}'", args.id));
    } else {
        ctx.output.success(&format!("Updated note on '{}'", args.id));
    }
    Ok(())
}

/// Run the clear command.
pub fn clear(args: ClearArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    // An empty cart still gets rewritten, which also replaces a corrupt payload.
    if !cart.is_empty() && !args.yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} items from the cart?", cart.total_items()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Clear cancelled");
            return Ok(());
        }
    }

    cart.clear();
    Ok(())
}

fn product_from_args(args: &AddArgs) -> Result<CartProduct> {
    if let Some(path) = &args.product {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read product file: {}", path))?;
        let product: Product = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse product record: {}", path))?;
        return Ok(CartProduct::from(product));
    }

    let (Some(id), Some(name), Some(price)) = (&args.id, &args.name, args.price) else {
        anyhow::bail!("--id, --name and --price are required without --product");
    };
    let mut product = CartProduct::new(id.as_str(), name.as_str(), Price::new(price));
    if let Some(image) = &args.image {
        product = product.with_image(image.as_str());
    }
    if let Some(category) = &args.category {
        product = product.with_category(category.as_str());
    }
    Ok(product)
}

fn report(cart: &CartStore, ctx: &Context) {
    if !cart.is_synced() {
        ctx.output
            .warn("The cart could not be saved; this change will be lost when the command exits");
    }
    ctx.output.info(&format!(
        "{} items, subtotal {}",
        cart.total_items(),
        ctx.price(cart.subtotal())
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;
    use foodcart_cache::Cache;
    use foodcart_core::cart::CartLine;
    use std::path::Path;

    fn context(dir: &Path) -> Context {
        Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
            data_dir: dir.to_path_buf(),
        }
    }

    fn add_args(id: &str, name: &str, price: i64, quantity: u32) -> AddArgs {
        AddArgs {
            product: None,
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            price: Some(price),
            quantity,
            note: String::new(),
            image: None,
            category: None,
        }
    }

    fn stored(dir: &Path) -> Vec<CartLine> {
        Cache::open_dir(dir)
            .unwrap()
            .get("cart")
            .unwrap()
            .unwrap_or_default()
    }

    #[test]
    fn test_add_from_flags() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());

        let mut args = add_args("a", "Phở", 50_000, 2);
        args.note = "no onions".to_string();
        args.image = Some("pho.jpg".to_string());
        args.category = Some("noodles".to_string());
        add(args, &ctx).unwrap();
        add(add_args("a", "Phở", 50_000, 1), &ctx).unwrap();

        let lines = stored(dir.path());
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line.id.as_str(), "a");
        assert_eq!(line.quantity, 3);
        assert_eq!(line.price, Price::new(50_000));
        assert_eq!(line.note, "no onions");
        assert_eq!(line.image.as_deref(), Some("pho.jpg"));
        assert_eq!(line.category.as_ref().map(|c| c.as_str()), Some("noodles"));
    }

    #[test]
    fn test_add_from_product_file_uses_final_price() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let product_path = dir.path().join("bun-cha.product");
        std::fs::write(
            &product_path,
            r#"{
                "id": "b",
                "name": "Bún chả",
                "price": 60000,
                "final_price": 45000,
                "is_discount_active": true,
                "thumbnail": "bun.jpg",
                "category": "grill"
            }"#,
        )
        .unwrap();

        let mut args = add_args("ignored", "ignored", 0, 2);
        args.product = Some(product_path.to_string_lossy().into_owned());
        args.id = None;
        args.name = None;
        args.price = None;
        add(args, &ctx).unwrap();

        let lines = stored(dir.path());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Bún chả");
        assert_eq!(lines[0].price, Price::new(45_000));
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[0].image.as_deref(), Some("bun.jpg"));
    }

    #[test]
    fn test_add_product_without_final_price_uses_base_price() {
        let dir = tempfile::tempdir().unwrap();
        let product_path = dir.path().join("pho.product");
        std::fs::write(&product_path, r#"{"id": "a", "name": "Phở", "price": 50000}"#).unwrap();

        let mut args = add_args("a", "Phở", 0, 1);
        args.product = Some(product_path.to_string_lossy().into_owned());
        let product = product_from_args(&args).unwrap();
        assert_eq!(product.price, Price::new(50_000));
    }

    #[test]
    fn test_add_requires_id_without_product() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());

        let mut args = add_args("a", "Phở", 50_000, 1);
        args.id = None;
        let err = add(args, &ctx).unwrap_err();
        assert!(err.to_string().contains("--id"));
        assert!(!dir.path().join("cart.json").exists());
    }

    #[test]
    fn test_add_bad_product_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let product_path = dir.path().join("broken.product");
        std::fs::write(&product_path, "{not json").unwrap();

        let mut args = add_args("a", "Phở", 0, 1);
        args.product = Some(product_path.to_string_lossy().into_owned());
        let err = add(args, &ctx).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse product record"));

        args = add_args("a", "Phở", 0, 1);
        args.product = Some(dir.path().join("missing").to_string_lossy().into_owned());
        assert!(add(args, &ctx).is_err());
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        add(add_args("a", "Phở", 50_000, 2), &ctx).unwrap();
        add(add_args("b", "Bún chả", 45_000, 1), &ctx).unwrap();

        let args = SetQtyArgs {
            id: "a".to_string(),
            quantity: 5,
        };
        set_quantity(args, &ctx).unwrap();
        assert_eq!(stored(dir.path())[0].quantity, 5);

        let args = SetQtyArgs {
            id: "a".to_string(),
            quantity: 0,
        };
        set_quantity(args, &ctx).unwrap();
        let ids: Vec<String> = stored(dir.path())
            .iter()
            .map(|l| l.id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn test_unknown_id_leaves_cart_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        add(add_args("a", "Phở", 50_000, 2), &ctx).unwrap();
        let before = std::fs::read(dir.path().join("cart.json")).unwrap();

        let args = SetQtyArgs {
            id: "zzz".to_string(),
            quantity: 3,
        };
        set_quantity(args, &ctx).unwrap();
        remove(RemoveArgs { id: "zzz".to_string() }, &ctx).unwrap();
        let args = NoteArgs {
            id: "zzz".to_string(),
            note: "x".to_string(),
        };
        note(args, &ctx).unwrap();

        assert_eq!(std::fs::read(dir.path().join("cart.json")).unwrap(), before);
    }

    #[test]
    fn test_note_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        add(add_args("a", "Phở", 50_000, 1), &ctx).unwrap();

        let args = NoteArgs {
            id: "a".to_string(),
            note: "extra herbs".to_string(),
        };
        note(args, &ctx).unwrap();
        assert_eq!(stored(dir.path())[0].note, "extra herbs");

        remove(RemoveArgs { id: "a".to_string() }, &ctx).unwrap();
        assert!(stored(dir.path()).is_empty());
    }

    #[test]
    fn test_clear_with_yes_empties_store() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        add(add_args("a", "Phở", 50_000, 2), &ctx).unwrap();

        clear(ClearArgs { yes: true }, &ctx).unwrap();
        let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
        assert_eq!(raw, "[]");
    }

    #[test]
    fn test_clear_overwrites_corrupt_payload() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        std::fs::write(dir.path().join("cart.json"), "{broken").unwrap();

        clear(ClearArgs { yes: false }, &ctx).unwrap();
        let raw = std::fs::read_to_string(dir.path().join("cart.json")).unwrap();
        assert_eq!(raw, "[]");
    }
}
