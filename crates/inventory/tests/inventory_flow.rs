//! End-to-end behavior of the inventory service against a real backing file.

use stockroom_inventory::Inventory;
use stockroom_products::Product;
use tempfile::tempdir;

#[test]
fn full_crud_cycle_against_one_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.txt");
    let mut inventory = Inventory::open(&path);
    assert!(inventory.is_empty());

    assert!(inventory.add_product(1, "Widget", 10, 2.5).unwrap());
    assert!(!inventory.add_product(1, "Other", 1, 1.0).unwrap());

    assert!(inventory.update(1, Some(5), None).unwrap());
    let product = inventory.find_by_id(1).unwrap();
    assert_eq!(product.quantity(), 5);
    assert_eq!(product.price(), 2.5);

    assert!(inventory.remove(1));
    assert!(inventory.find_by_id(1).is_none());

    let reloaded = Inventory::open(&path);
    assert!(reloaded.is_empty());
}

#[test]
fn fresh_instance_sees_the_state_after_every_mutation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.txt");

    let mut inventory = Inventory::open(&path);
    inventory.add_product(1, "Widget", 10, 2.5).unwrap();
    inventory.add_product(2, "USB|C cable", 4, 7.25).unwrap();
    inventory.update(2, None, Some(6.99)).unwrap();

    let reloaded = Inventory::open(&path);
    assert_eq!(reloaded.len(), inventory.len());
    for (stored, live) in reloaded.list().iter().zip(inventory.list()) {
        assert_eq!(stored.id(), live.id());
        assert_eq!(stored.quantity(), live.quantity());
        assert_eq!(stored.price(), live.price());
        // Separators in names come back substituted, per the file format;
        // every other field survives the reload bit-exact.
        assert_eq!(stored.name(), live.name().replace('|', "/"));
    }
    assert_eq!(reloaded.find_by_id(2).unwrap().name(), "USB/C cable");
}

#[test]
fn reload_equals_memory_when_names_are_separator_free() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.txt");

    let mut inventory = Inventory::open(&path);
    inventory.add_product(1, "Widget", 10, 2.5).unwrap();
    inventory.add_product(2, "Mouse", 2, 15.0).unwrap();
    inventory.remove(1);

    let reloaded = Inventory::open(&path);
    assert_eq!(reloaded.list(), inventory.list());
}

#[test]
fn corrupt_file_degrades_to_the_parseable_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.txt");
    std::fs::write(&path, "1|Widget|10|2.5\n2|only two\n").unwrap();

    let inventory = Inventory::open(&path);
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.find_by_id(1).unwrap().name(), "Widget");
}

#[test]
fn list_is_idempotent_between_mutations() {
    let dir = tempdir().unwrap();
    let mut inventory = Inventory::open(dir.path().join("inventory.txt"));
    inventory.add(Product::new(1, "Widget", 10, 2.5).unwrap());
    inventory.add(Product::new(2, "Mouse", 2, 15.0).unwrap());

    let first: Vec<Product> = inventory.list().to_vec();
    let second: Vec<Product> = inventory.list().to_vec();
    assert_eq!(first, second);
}
