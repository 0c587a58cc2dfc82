//! Integration tests for the persisted cart store.
//!
//! Covers: the total invariant over arbitrary action sequences, reload
//! round-trips through storage, and recovery from bad stored values.

use crockery_commerce::prelude::*;
use crockery_observability::{LogLevel, LogSink, MemoryLog, StructuredLogger};
use crockery_storage::{Cache, KeyValueStore, MemoryStore};
use proptest::prelude::*;

fn capture() -> (StructuredLogger, MemoryLog) {
    let memory = MemoryLog::new();
    let logger = StructuredLogger::new("cart-store")
        .with_min_level(LogLevel::Trace)
        .with_sink(LogSink::Memory(memory.clone()));
    (logger, memory)
}

fn item(id: &str, cents: i64) -> CartItem {
    CartItem::new(id, format!("Product {}", id), "", Money::usd(cents), "")
}

// ===========================================================================
// Total invariant
// ===========================================================================

fn action_strategy() -> impl Strategy<Value = CartAction> {
    let id = (1u8..=6).prop_map(|n| n.to_string());
    prop_oneof![
        6 => (id.clone(), 0i64..1_000_000).prop_map(|(id, cents)| CartAction::Add(item(&id, cents))),
        3 => id.prop_map(|id| CartAction::Remove(ProductId::new(id))),
        1 => Just(CartAction::Clear),
    ]
}

proptest! {
    #[test]
    fn total_always_equals_sum_of_prices(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let (logger, _) = capture();
        let store = CartStore::new(logger);

        for action in actions {
            let state = store.dispatch(action).unwrap();
            let expected: i64 = state.items().iter().map(|i| i.price.amount_cents).sum();
            prop_assert_eq!(state.total_amount().amount_cents, expected);
            prop_assert_eq!(store.state(), state);
        }
    }

    #[test]
    fn every_commit_is_persisted_once(actions in prop::collection::vec(action_strategy(), 0..30)) {
        let (logger, _) = capture();
        let backend = MemoryStore::new();
        let store = CartStore::restore(Cache::new(backend.clone()), "cart", logger);

        for action in &actions {
            store.dispatch(action.clone()).unwrap();
        }

        prop_assert_eq!(backend.write_count(), actions.len());
    }
}

#[test]
fn clear_from_any_state_is_empty() {
    let (logger, _) = capture();
    let store = CartStore::new(logger);
    let cart = store.handle();

    cart.add_item(item("1", 2499)).unwrap();
    cart.add_item(item("1", 2499)).unwrap();
    cart.add_item(item("4", 5999)).unwrap();
    let state = cart.clear_cart().unwrap();

    assert!(state.items().is_empty());
    assert_eq!(state.total_amount(), Money::usd(0));
}

// ===========================================================================
// Persistence round-trip
// ===========================================================================

#[test]
fn persisted_items_reload_with_total() {
    let (logger, _) = capture();
    let backend = MemoryStore::with_value("cart", r#"[{"id":"1","price":10},{"id":"2","price":5}]"#);

    let store = CartStore::restore(Cache::new(backend), "cart", logger);
    let state = store.state();

    let ids: Vec<&str> = state.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(state.items()[0].price, Money::usd(1000));
    assert_eq!(state.items()[1].price, Money::usd(500));
    assert_eq!(state.total_amount(), Money::usd(1500));
}

#[test]
fn session_survives_reload() {
    let backend = MemoryStore::new();
    {
        let (logger, _) = capture();
        let store = CartStore::restore(Cache::new(backend.clone()), "cart", logger);
        let cart = store.handle();
        for product in sample_catalog().iter().take(3) {
            cart.add_item(product.to_cart_item()).unwrap();
        }
        cart.remove_item(&ProductId::new("2")).unwrap();
    }

    let (logger, _) = capture();
    let reloaded = CartStore::restore(Cache::new(backend), "cart", logger);
    let state = reloaded.state();

    let names: Vec<&str> = state.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Ceramic Bowl", "Tea Cup"]);
    assert_eq!(state.total_amount(), Money::usd(2499 + 1299));
}

// ===========================================================================
// Bad stored values
// ===========================================================================

#[test]
fn malformed_value_starts_empty_and_logs() {
    let (logger, memory) = capture();
    let backend = MemoryStore::with_value("cart", "{not json");

    let store = CartStore::restore(Cache::new(backend), "cart", logger);

    assert_eq!(store.state(), CartState::empty());
    let errors = memory.at_level(LogLevel::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "failed to restore cart, starting empty");
    assert_eq!(errors[0].field("key"), Some(&serde_json::json!("cart")));
}

#[test]
fn negative_stored_price_starts_empty() {
    let (logger, memory) = capture();
    let backend = MemoryStore::with_value("cart", r#"[{"id":"1","price":-3}]"#);

    let store = CartStore::restore(Cache::new(backend), "cart", logger);

    assert!(store.state().is_empty());
    assert_eq!(memory.at_level(LogLevel::Error).len(), 1);
}

#[test]
fn sub_cent_price_is_not_rounded_into_the_cart() {
    let (logger, memory) = capture();
    let stored = r#"[{"id":"1","price":0.125},{"id":"2","price":0.125}]"#;
    let backend = MemoryStore::with_value("cart", stored);

    let store = CartStore::restore(Cache::new(backend.clone()), "cart", logger);

    assert!(store.state().is_empty());
    assert_eq!(memory.at_level(LogLevel::Error).len(), 1);
    // Nothing is written back until the shopper changes the cart.
    assert_eq!(backend.write_count(), 0);
    assert_eq!(backend.get_raw("cart").unwrap().as_deref(), Some(stored));
}

#[test]
fn store_keeps_working_after_bad_value() {
    let (logger, _) = capture();
    let backend = MemoryStore::with_value("cart", "null-ish");

    let store = CartStore::restore(Cache::new(backend.clone()), "cart", logger);
    store.handle().add_item(item("3", 1299)).unwrap();

    let raw = Cache::new(backend).get::<serde_json::Value>("cart").unwrap();
    assert_eq!(
        raw,
        Some(serde_json::json!([{"id":"3","name":"Product 3","description":"","price":12.99,"imageUrl":""}]))
    );
}
