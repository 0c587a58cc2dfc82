//! Cart page: line items, order summary, removal and clearing.

use std::time::Duration;

use crockery_commerce::prelude::*;
use leptos::ev;
use leptos::prelude::*;

use crate::cart::ShopCart;

#[component]
pub fn CartPage(cart: ShopCart, pricing: PricingConfig, removal_delay: Duration) -> impl IntoView {
    let state = cart.state();

    view! {
        <Show
            when=move || state.with(|s| !s.is_empty())
            fallback=|| view! { <EmptyCart/> }
        >
            <CartContents cart=cart pricing=pricing.clone() removal_delay=removal_delay/>
        </Show>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <div class="header-logo">"\u{1f37d}\u{fe0f} CrockeryShop"</div>
            </div>
        </header>
        <div class="cart-container">
            <h1>"Shopping Cart"</h1>
            <div class="empty-cart">
                <div class="empty-icon">"\u{1f6d2}"</div>
                <p>"Your cart is empty"</p>
                <small>"Add some delicious crockery to get started!"</small>
                <a href="/" class="btn-continue-shopping">"Continue Shopping"</a>
            </div>
        </div>
    }
}

#[component]
fn CartContents(cart: ShopCart, pricing: PricingConfig, removal_delay: Duration) -> impl IntoView {
    let state = cart.state();
    let removing = RwSignal::new(None::<ProductId>);

    let subtitle = move || {
        let count = state.with(|s| s.item_count());
        format!("{} item{} in your cart", count, if count == 1 { "" } else { "s" })
    };

    let remove = move |id: ProductId| {
        removing.set(Some(id.clone()));
        set_timeout(move || commit_removal(cart, &id, removing), removal_delay);
    };

    let lines = move || {
        state.with(|s| s.items().iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <header class="header">
            <div class="header-content">
                <div class="header-logo">"\u{1f37d}\u{fe0f} CrockeryShop"</div>
                <a href="/" class="back-to-home">"\u{2190} Back to Home"</a>
            </div>
        </header>

        <div class="cart-container">
            <h1>"Shopping Cart \u{1f6d2}"</h1>
            <p class="cart-subtitle">{subtitle}</p>

            <div class="cart-content">
                <div class="cart-items-section">
                    <div class="cart-items">
                        // Lines may share a product id, so the position is part of the key.
                        <For
                            each=lines
                            key=|(index, item)| (*index, item.id.clone())
                            children=move |(index, item)| {
                                let id = item.id.clone();
                                let is_removing = {
                                    let id = id.clone();
                                    move || removing.with(|r| r.as_ref() == Some(&id))
                                };
                                view! {
                                    <div
                                        class="cart-item"
                                        class:removing=is_removing
                                        style=format!("animation-delay: {}ms", index * 50)
                                    >
                                        <div class="item-image-wrapper">
                                            <img src=item.image_url.clone() alt=item.name.clone()/>
                                        </div>
                                        <div class="item-details">
                                            <h3>{item.name.clone()}</h3>
                                            <p class="item-desc">{item.description.clone()}</p>
                                            <div class="item-meta">
                                                <span class="item-price">{item.price.display()}</span>
                                            </div>
                                        </div>
                                        <button
                                            class="btn-remove-item"
                                            title="Remove from cart"
                                            on:click=move |_| remove(id.clone())
                                        >
                                            "\u{2715}"
                                        </button>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>

                <div class="cart-sidebar">
                    <OrderSummaryPanel cart=cart pricing=pricing/>
                    <div class="promo-card">
                        <h3>"Got a promo code?"</h3>
                        <div class="promo-input-group">
                            <input type="text" placeholder="Enter code" class="promo-input"/>
                            <button class="btn-apply">"Apply"</button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Commit a delayed removal once the exit animation is over.
///
/// The store outlives the page, so the removal always applies. The page may
/// be gone by then, so `removing` is only cleared if it still exists.
fn commit_removal(cart: ShopCart, id: &ProductId, removing: RwSignal<Option<ProductId>>) {
    cart.remove_item(id);
    let _ = removing.try_set(None);
}

#[component]
fn OrderSummaryPanel(cart: ShopCart, pricing: PricingConfig) -> impl IntoView {
    let state = cart.state();
    let tax_label = format!("Tax ({}%)", pricing.tax_rate_percent);

    // An unpriceable cart (overflow) renders as zeros rather than failing the page.
    let summary = Memo::new(move |_| {
        state
            .with(|s| OrderSummary::for_cart(s, &pricing))
            .unwrap_or_default()
    });

    let clear = move |_: ev::MouseEvent| {
        let confirmed = window()
            .confirm_with_message("Are you sure you want to clear your cart?")
            .unwrap_or(false);
        if confirmed {
            cart.clear();
        }
    };

    view! {
        <div class="order-summary">
            <h2>"Order Summary"</h2>

            <div class="summary-row">
                <span class="label">"Subtotal"</span>
                <span class="value">{move || summary.get().subtotal.display()}</span>
            </div>

            <div class="summary-row">
                <span class="label">
                    "Shipping"
                    <small>{move || if summary.get().is_free_shipping() { "(Free!)" } else { "" }}</small>
                </span>
                <span class="value">{move || summary.get().shipping.display()}</span>
            </div>

            <div class="summary-row">
                <span class="label">{tax_label}</span>
                <span class="value">{move || summary.get().tax.display()}</span>
            </div>

            <div class="summary-divider"></div>

            <div class="summary-total">
                <span>"Total Amount"</span>
                <span class="total-price">{move || summary.get().total.display()}</span>
            </div>

            <button class="btn-checkout-primary">"Proceed to Checkout"</button>

            <a href="/" class="btn-continue-shopping-link">"Continue Shopping"</a>

            <button class="btn-clear-cart-link" on:click=clear>"Clear Cart"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crockery_observability::{LogSink, MemoryLog, StructuredLogger};
    use crockery_storage::{Cache, KeyValueStore, MemoryStore};
    use leptos::reactive::owner::Owner;

    fn quiet_logger() -> StructuredLogger {
        StructuredLogger::new("cart-page").with_sink(LogSink::Memory(MemoryLog::new()))
    }

    fn item(id: &str, cents: i64) -> CartItem {
        CartItem::new(id, format!("Product {}", id), "", Money::usd(cents), "")
    }

    #[test]
    fn test_removal_clears_flag_while_page_is_live() {
        let app = Owner::new();
        app.with(|| {
            let store = CartStore::new(quiet_logger());
            store.dispatch(CartAction::Add(item("1", 2499))).unwrap();
            let cart = ShopCart::attach(&store, quiet_logger());
            let removing = RwSignal::new(Some(ProductId::new("1")));

            commit_removal(cart, &ProductId::new("1"), removing);

            assert!(store.state().is_empty());
            assert_eq!(removing.get_untracked(), None);
        });
    }

    #[test]
    fn test_removal_after_page_teardown_still_commits() {
        let app = Owner::new();
        app.with(|| {
            let backend = MemoryStore::new();
            let store = CartStore::restore(Cache::new(backend.clone()), "cart", quiet_logger());
            store.dispatch(CartAction::Add(item("1", 2499))).unwrap();
            store.dispatch(CartAction::Add(item("3", 1299))).unwrap();
            let cart = ShopCart::attach(&store, quiet_logger());

            let page = Owner::new();
            let removing = page.with(|| RwSignal::new(Some(ProductId::new("1"))));
            page.cleanup();
            assert!(removing.try_get_untracked().is_none());

            // The timer fires after the page is gone.
            commit_removal(cart, &ProductId::new("1"), removing);

            let ids: Vec<String> = store.state().items().iter().map(|i| i.id.to_string()).collect();
            assert_eq!(ids, vec!["3"]);
            assert_eq!(cart.state().get_untracked().item_count(), 1);
            assert!(removing.try_get_untracked().is_none());

            let saved = backend.get_raw("cart").unwrap().unwrap_or_default();
            assert!(!saved.contains(r#""id":"1""#));
        });
    }
}
