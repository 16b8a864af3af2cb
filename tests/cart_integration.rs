//! End-to-end cart scenarios against the in-memory capability doubles.
//!
//! Requires the `mock` feature: `cargo test --features mock`.

use std::cell::RefCell;
use std::rc::Rc;

use addon_cart::config::CART_STORAGE_KEY;
use addon_cart::{CartStore, MemoryBus, MemoryStore};

fn record_counts(cart: &CartStore<MemoryStore, MemoryBus>) -> Rc<RefCell<Vec<usize>>> {
    let counts = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&counts);
    cart.on_change(move |count| seen.borrow_mut().push(count));
    counts
}

#[test]
fn test_first_add_reaches_subscriber() {
    let store = MemoryStore::new();
    let cart = CartStore::new(store.clone(), MemoryBus::new());
    let counts = record_counts(&cart);

    cart.add("a");

    assert_eq!(cart.items(), vec!["a"]);
    assert_eq!(cart.count(), 1);
    assert!(cart.contains("a"));
    assert_eq!(*counts.borrow(), vec![1]);
}

#[test]
fn test_duplicate_add_leaves_cart_and_subscribers_silent() {
    let store = MemoryStore::new();
    store.seed(CART_STORAGE_KEY, r#"["a","b"]"#);
    let cart = CartStore::new(store.clone(), MemoryBus::new());
    let counts = record_counts(&cart);

    cart.add("a");

    assert_eq!(cart.items(), vec!["a", "b"]);
    assert!(counts.borrow().is_empty());
}

#[test]
fn test_remove_broadcasts_new_count() {
    let store = MemoryStore::new();
    store.seed(CART_STORAGE_KEY, r#"["a","b"]"#);
    let cart = CartStore::new(store.clone(), MemoryBus::new());
    let counts = record_counts(&cart);

    cart.remove("a");

    assert_eq!(cart.items(), vec!["b"]);
    assert_eq!(*counts.borrow(), vec![1]);
}

#[test]
fn test_failed_write_notifies_but_next_load_sees_old_list() {
    let store = MemoryStore::new();
    store.seed(CART_STORAGE_KEY, r#"["a"]"#);
    let cart = CartStore::new(store.clone(), MemoryBus::new());
    let counts = record_counts(&cart);

    store.fail_writes(true);
    cart.add("c");

    // The session sees the new count...
    assert_eq!(*counts.borrow(), vec![2]);

    // ...but the mutation never reached the store: a fresh cart over the
    // same storage still reads the old list.
    let reloaded = CartStore::new(store.clone(), MemoryBus::new());
    assert_eq!(reloaded.items(), vec!["a"]);
}

#[test]
fn test_mutation_sequences_keep_ids_unique_and_ordered() {
    let store = MemoryStore::new();
    let cart = CartStore::new(store.clone(), MemoryBus::new());

    let ops: &[(&str, &str)] = &[
        ("add", "a"),
        ("add", "b"),
        ("add", "a"),
        ("remove", "c"),
        ("add", "c"),
        ("remove", "a"),
        ("add", "a"),
        ("add", "b"),
        ("remove", "b"),
        ("add", "d"),
    ];
    for (op, id) in ops {
        match *op {
            "add" => cart.add(id),
            _ => cart.remove(id),
        }
    }

    let items = cart.items();
    for id in &items {
        assert_eq!(items.iter().filter(|other| *other == id).count(), 1);
    }
    // First-insertion order of the ids still present.
    assert_eq!(items, vec!["c", "a", "d"]);
    assert_eq!(cart.count(), items.len());
}

#[test]
fn test_corrupt_store_reads_as_empty_cart() {
    for raw in ["not json", "{}", "[1,2,3]"] {
        let store = MemoryStore::new();
        store.seed(CART_STORAGE_KEY, raw);
        let cart = CartStore::new(store.clone(), MemoryBus::new());

        assert_eq!(cart.items(), Vec::<String>::new(), "raw = {raw:?}");
        assert_eq!(cart.count(), 0, "raw = {raw:?}");
        assert!(!cart.contains("a"), "raw = {raw:?}");
    }
}

#[test]
fn test_saved_list_round_trips() {
    let store = MemoryStore::new();
    let cart = CartStore::new(store.clone(), MemoryBus::new());

    cart.add("addon-zombie-king");
    cart.add("addon-diamond-sword");

    assert_eq!(
        store.raw(CART_STORAGE_KEY).as_deref(),
        Some(r#"["addon-zombie-king","addon-diamond-sword"]"#)
    );

    let reloaded = CartStore::new(store.clone(), MemoryBus::new());
    assert_eq!(
        reloaded.items(),
        vec!["addon-zombie-king", "addon-diamond-sword"]
    );
}
