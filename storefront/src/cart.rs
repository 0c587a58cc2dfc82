//! Reactive bridge between views and the cart store.

use crockery_commerce::prelude::*;
use crockery_observability::StructuredLogger;
use leptos::prelude::*;

/// The cart as views see it.
///
/// The store is `Rc`-based and lives in the app root's local arena slot.
/// A commit hook mirrors every committed state into `state`, which is what
/// views subscribe to. Copy, so it can move into any number of closures.
#[derive(Clone, Copy)]
pub struct ShopCart {
    handle: StoredValue<CartHandle, LocalStorage>,
    state: RwSignal<CartState>,
    logger: StoredValue<StructuredLogger>,
}

impl ShopCart {
    /// Attach to `store`. Call once, from the component that owns the store.
    pub fn attach(store: &CartStore, logger: StructuredLogger) -> Self {
        let state = RwSignal::new(store.state());
        store.add_hook(move |next: &CartState| {
            // Disposed signal means the app is being torn down.
            let _ = state.try_set(next.clone());
        });

        Self {
            handle: StoredValue::new_local(store.handle()),
            state,
            logger: StoredValue::new(logger),
        }
    }

    /// Tracked read access to the cart.
    pub fn state(&self) -> ReadSignal<CartState> {
        self.state.read_only()
    }

    /// Tracked line count, for the header badge.
    pub fn item_count(&self) -> usize {
        self.state.with(|s| s.item_count())
    }

    /// Append a line for `item`.
    ///
    /// # Panics
    /// Panics if called after the app root has dropped the store.
    pub fn add_item(&self, item: CartItem) -> Result<(), CommerceError> {
        let result = self.handle.with_value(|h| h.add_item(item)).map(|_| ());
        if let Err(e) = &result {
            self.log_rejected("add_item", e);
        }
        result
    }

    /// Remove every line for `id`.
    ///
    /// # Panics
    /// Panics if called after the app root has dropped the store.
    pub fn remove_item(&self, id: &ProductId) {
        if let Err(e) = self.handle.with_value(|h| h.remove_item(id)) {
            self.log_rejected("remove_item", &e);
        }
    }

    /// Empty the cart.
    ///
    /// # Panics
    /// Panics if called after the app root has dropped the store.
    pub fn clear(&self) {
        if let Err(e) = self.handle.with_value(|h| h.clear_cart()) {
            self.log_rejected("clear_cart", &e);
        }
    }

    fn log_rejected(&self, action: &str, error: &CommerceError) {
        self.logger.with_value(|logger| {
            logger
                .error_builder("cart update failed")
                .field("action", action)
                .field("error", error.to_string())
                .emit()
        });
    }
}
