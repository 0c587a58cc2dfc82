//! The cart store: owner of cart state for one browsing session.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crockery_observability::StructuredLogger;
use crockery_storage::{Cache, KeyValueStore};

use crate::cart::{CartAction, CartItem, CartState};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Observer run synchronously after every committed transition.
///
/// Hooks run once per transition, in registration order, after the new
/// state is in place. A hook must not dispatch back into the store.
pub trait CommitHook {
    fn on_commit(&mut self, state: &CartState);
}

impl<F: FnMut(&CartState)> CommitHook for F {
    fn on_commit(&mut self, state: &CartState) {
        self(state)
    }
}

struct StoreInner {
    state: CartState,
    hooks: Vec<Box<dyn CommitHook>>,
    logger: StructuredLogger,
}

/// Single source of truth for the cart.
///
/// The application root creates one store and keeps it alive for the
/// session. Views receive [`CartHandle`]s, which stop working once the
/// store is dropped.
///
/// # Example
///
/// ```
/// use crockery_commerce::prelude::*;
/// use crockery_observability::StructuredLogger;
/// use crockery_storage::{Cache, MemoryStore};
///
/// let store = CartStore::restore(Cache::new(MemoryStore::new()), "cart", StructuredLogger::new("cart-store"));
/// let cart = store.handle();
///
/// cart.add_item(CartItem::new("3", "Tea Cup", "", Money::usd(1299), "")).unwrap();
/// assert_eq!(cart.snapshot().total_amount(), Money::usd(1299));
/// ```
pub struct CartStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl CartStore {
    /// Create an empty store with no persistence.
    pub fn new(logger: StructuredLogger) -> Self {
        Self::with_state(CartState::empty(), logger)
    }

    /// Create a store seeded with `state`.
    pub fn with_state(state: CartState, logger: StructuredLogger) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                state,
                hooks: Vec::new(),
                logger,
            })),
        }
    }

    /// Rehydrate from `key` in `cache` and persist back to it after every commit.
    ///
    /// A missing value gives an empty cart. A value that cannot be read or
    /// parsed also gives an empty cart; the failure is logged, not returned.
    pub fn restore<S>(cache: Cache<S>, key: impl Into<String>, logger: StructuredLogger) -> Self
    where
        S: KeyValueStore + 'static,
    {
        let key = key.into();
        let state = load_state(&cache, &key, &logger);
        let store = Self::with_state(state, logger.clone());
        store.add_hook(PersistCart::new(cache, key, logger));
        store
    }

    /// Register a hook to run after each committed transition.
    pub fn add_hook(&self, hook: impl CommitHook + 'static) {
        self.inner.borrow_mut().hooks.push(Box::new(hook));
    }

    /// Apply an action and run the commit hooks.
    pub fn dispatch(&self, action: CartAction) -> Result<CartState, CommerceError> {
        dispatch(&self.inner, action)
    }

    /// Current state.
    pub fn state(&self) -> CartState {
        self.inner.borrow().state.clone()
    }

    /// A handle for views. It does not keep the store alive.
    pub fn handle(&self) -> CartHandle {
        CartHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// View-side access to a [`CartStore`].
#[derive(Clone)]
pub struct CartHandle {
    inner: Weak<RefCell<StoreInner>>,
}

impl CartHandle {
    /// Apply an action, failing with [`CommerceError::StoreUnavailable`] if
    /// the store has been dropped.
    pub fn try_dispatch(&self, action: CartAction) -> Result<CartState, CommerceError> {
        let inner = self.inner.upgrade().ok_or(CommerceError::StoreUnavailable)?;
        dispatch(&inner, action)
    }

    /// Current state, or [`CommerceError::StoreUnavailable`] if the store has
    /// been dropped.
    pub fn try_snapshot(&self) -> Result<CartState, CommerceError> {
        let inner = self.inner.upgrade().ok_or(CommerceError::StoreUnavailable)?;
        let state = inner.borrow().state.clone();
        Ok(state)
    }

    /// Whether the owning store is still alive.
    pub fn is_live(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Add a line for `item`.
    ///
    /// # Panics
    /// Panics if the owning store has been dropped, which means a view
    /// outlived the application root. Use `try_dispatch` to handle that case.
    ///
    /// # Errors
    /// Returns an error if the item's price is negative or the total overflows.
    #[track_caller]
    pub fn add_item(&self, item: CartItem) -> Result<CartState, CommerceError> {
        self.dispatch_or_panic(CartAction::Add(item))
    }

    /// Remove every line for `id`.
    ///
    /// # Panics
    /// Panics if the owning store has been dropped.
    #[track_caller]
    pub fn remove_item(&self, id: &ProductId) -> Result<CartState, CommerceError> {
        self.dispatch_or_panic(CartAction::Remove(id.clone()))
    }

    /// Empty the cart.
    ///
    /// # Panics
    /// Panics if the owning store has been dropped.
    #[track_caller]
    pub fn clear_cart(&self) -> Result<CartState, CommerceError> {
        self.dispatch_or_panic(CartAction::Clear)
    }

    /// Current state.
    ///
    /// # Panics
    /// Panics if the owning store has been dropped.
    #[track_caller]
    pub fn snapshot(&self) -> CartState {
        match self.try_snapshot() {
            Ok(state) => state,
            Err(e) => panic!("{}", e),
        }
    }

    #[track_caller]
    fn dispatch_or_panic(&self, action: CartAction) -> Result<CartState, CommerceError> {
        match self.try_dispatch(action) {
            Err(CommerceError::StoreUnavailable) => {
                panic!("{}", CommerceError::StoreUnavailable)
            }
            other => other,
        }
    }
}

impl std::fmt::Debug for CartHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartHandle")
            .field("live", &self.is_live())
            .finish()
    }
}

fn dispatch(inner: &Rc<RefCell<StoreInner>>, action: CartAction) -> Result<CartState, CommerceError> {
    let name = action.name();

    // Hooks are taken out so they may read the store through a handle.
    let (state, mut hooks, logger) = {
        let mut guard = inner.borrow_mut();
        let next = match guard.state.clone().reduce(action) {
            Ok(next) => next,
            Err(e) => {
                guard
                    .logger
                    .warn_builder("cart action rejected")
                    .field("action", name)
                    .field("error", e.to_string())
                    .emit();
                return Err(e);
            }
        };
        guard.state = next.clone();
        (next, std::mem::take(&mut guard.hooks), guard.logger.clone())
    };

    logger
        .debug_builder("cart action committed")
        .field("action", name)
        .field_i64("items", state.item_count() as i64)
        .field_i64("total_cents", state.total_amount().amount_cents)
        .emit();

    for hook in hooks.iter_mut() {
        hook.on_commit(&state);
    }

    let mut guard = inner.borrow_mut();
    hooks.append(&mut guard.hooks);
    guard.hooks = hooks;

    Ok(state)
}

fn load_state<S: KeyValueStore>(cache: &Cache<S>, key: &str, logger: &StructuredLogger) -> CartState {
    let restored = cache
        .get::<Vec<CartItem>>(key)
        .map_err(CommerceError::from)
        .and_then(|items| items.map(CartState::from_items).transpose());

    match restored {
        Ok(Some(state)) => {
            logger
                .info_builder("cart restored")
                .field("key", key)
                .field_i64("items", state.item_count() as i64)
                .emit();
            state
        }
        Ok(None) => {
            logger.debug("no saved cart, starting empty");
            CartState::empty()
        }
        Err(e) => {
            logger
                .error_builder("failed to restore cart, starting empty")
                .field("key", key)
                .field("error", e.to_string())
                .emit();
            CartState::empty()
        }
    }
}

/// Commit hook that writes the item sequence to storage.
pub struct PersistCart<S> {
    cache: Cache<S>,
    key: String,
    logger: StructuredLogger,
}

impl<S: KeyValueStore> PersistCart<S> {
    pub fn new(cache: Cache<S>, key: impl Into<String>, logger: StructuredLogger) -> Self {
        Self {
            cache,
            key: key.into(),
            logger,
        }
    }
}

impl<S: KeyValueStore> CommitHook for PersistCart<S> {
    fn on_commit(&mut self, state: &CartState) {
        if let Err(e) = self.cache.set(&self.key, state.items()) {
            self.logger
                .error_builder("failed to persist cart")
                .field("key", self.key.as_str())
                .field("error", e.to_string())
                .emit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crockery_observability::{LogLevel, LogSink, MemoryLog};
    use crockery_storage::MemoryStore;
    use std::cell::Cell;

    fn item(id: &str, cents: i64) -> CartItem {
        CartItem::new(id, format!("Product {}", id), "", Money::usd(cents), "")
    }

    fn logger() -> (StructuredLogger, MemoryLog) {
        let memory = MemoryLog::new();
        let logger = StructuredLogger::new("cart-store")
            .with_min_level(LogLevel::Trace)
            .with_sink(LogSink::Memory(memory.clone()));
        (logger, memory)
    }

    #[test]
    fn test_hooks_fire_once_per_commit_in_order() {
        let (logger, _) = logger();
        let store = CartStore::new(logger);
        let calls = Rc::new(RefCell::new(Vec::new()));

        let first = calls.clone();
        store.add_hook(move |s: &CartState| first.borrow_mut().push(("first", s.item_count())));
        let second = calls.clone();
        store.add_hook(move |s: &CartState| second.borrow_mut().push(("second", s.item_count())));

        store.dispatch(CartAction::Add(item("1", 100))).unwrap();
        store.dispatch(CartAction::Clear).unwrap();

        assert_eq!(
            *calls.borrow(),
            vec![("first", 1), ("second", 1), ("first", 0), ("second", 0)]
        );
    }

    #[test]
    fn test_rejected_action_skips_hooks() {
        let (logger, memory) = logger();
        let store = CartStore::new(logger);
        let count = Rc::new(Cell::new(0));
        let seen = count.clone();
        store.add_hook(move |_: &CartState| seen.set(seen.get() + 1));

        assert!(store.dispatch(CartAction::Add(item("1", -1))).is_err());
        assert_eq!(count.get(), 0);
        assert!(store.state().is_empty());
        assert_eq!(memory.at_level(LogLevel::Warn).len(), 1);
    }

    #[test]
    fn test_hook_may_read_through_handle() {
        let (logger, _) = logger();
        let store = CartStore::new(logger);
        let handle = store.handle();
        let observed = Rc::new(Cell::new(0));
        let sink = observed.clone();
        store.add_hook(move |_: &CartState| sink.set(handle.snapshot().item_count()));

        store.dispatch(CartAction::Add(item("1", 100))).unwrap();
        assert_eq!(observed.get(), 1);
    }

    #[test]
    fn test_handle_after_drop() {
        let (logger, _) = logger();
        let store = CartStore::new(logger);
        let handle = store.handle();
        assert!(handle.is_live());

        drop(store);
        assert!(!handle.is_live());
        assert!(matches!(
            handle.try_dispatch(CartAction::Clear),
            Err(CommerceError::StoreUnavailable)
        ));
        assert!(handle.try_snapshot().is_err());
    }

    #[test]
    #[should_panic(expected = "outside its lifetime")]
    fn test_add_item_after_drop_panics() {
        let (logger, _) = logger();
        let store = CartStore::new(logger);
        let handle = store.handle();
        drop(store);
        let _ = handle.add_item(item("1", 100));
    }

    #[test]
    fn test_persist_writes_items_array() {
        let (logger, _) = logger();
        let backend = MemoryStore::new();
        let store = CartStore::restore(Cache::new(backend.clone()), "cart", logger);

        store.dispatch(CartAction::Add(item("1", 1000))).unwrap();

        assert_eq!(backend.write_count(), 1);
        let raw = backend.get_raw("cart").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[0]["id"], "1");
        assert_eq!(json[0]["price"], 10.0);
    }

    #[test]
    fn test_persist_failure_is_logged_not_raised() {
        let (logger, memory) = logger();
        let backend = MemoryStore::new();
        let store = CartStore::restore(Cache::new(backend.clone()), "cart", logger);
        backend.fail_writes(true);

        let state = store.dispatch(CartAction::Add(item("1", 1000))).unwrap();

        assert_eq!(state.item_count(), 1);
        let errors = memory.at_level(LogLevel::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "failed to persist cart");
    }

    #[test]
    fn test_restore_read_failure_starts_empty() {
        let (logger, memory) = logger();
        let backend = MemoryStore::with_value("cart", r#"[{"id":"1","price":10}]"#);
        backend.fail_reads(true);

        let store = CartStore::restore(Cache::new(backend), "cart", logger);

        assert!(store.state().is_empty());
        assert_eq!(memory.at_level(LogLevel::Error).len(), 1);
    }

    #[test]
    fn test_restore_empty_value_starts_empty_quietly() {
        let (logger, memory) = logger();
        let backend = MemoryStore::with_value("cart", "");

        let store = CartStore::restore(Cache::new(backend), "cart", logger);

        assert!(store.state().is_empty());
        assert!(memory.at_level(LogLevel::Error).is_empty());
    }

    #[test]
    fn test_restore_missing_key_starts_empty_quietly() {
        let (logger, memory) = logger();
        let store = CartStore::restore(Cache::new(MemoryStore::new()), "cart", logger);

        assert!(store.state().is_empty());
        assert!(memory.at_level(LogLevel::Error).is_empty());
    }
}
