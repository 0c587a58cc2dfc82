//! Application root: configuration, the cart store and routing.

use crockery_commerce::prelude::*;
use crockery_observability::StructuredLogger;
use crockery_storage::{Cache, MemoryStore};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::cart::ShopCart;
use crate::pages::{CartPage, CatalogPage};

const CONFIG: &str = include_str!("../Storefront.toml");

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let logger = StructuredLogger::new("storefront");
    let config = load_config(&logger);

    // The store lives as long as the app; pages only get handles.
    let store = open_cart_store(&config, &logger);
    let cart = ShopCart::attach(&store, logger.scoped("cart-view"));
    let _store = StoredValue::new_local(store);

    let handoff = StoredValue::new(MessageHandoff::from_config(&config.handoff));
    let autoplay = config.carousel.autoplay_interval();
    let removal_delay = config.cart_page.removal_delay();
    let pricing = config.pricing.clone();

    let catalog_logger = logger.scoped("catalog");
    let catalog = move || {
        view! {
            <CatalogPage
                cart=cart
                handoff=handoff
                autoplay=autoplay
                logger=catalog_logger.clone()
            />
        }
    };
    let cart_page = move || {
        view! { <CartPage cart=cart pricing=pricing.clone() removal_delay=removal_delay/> }
    };

    view! {
        <Meta name="description" content="CrockeryShop - premium handcrafted ceramic and porcelain crockery"/>
        <Title text="CrockeryShop"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=catalog/>
                    <Route path=path!("/cart") view=cart_page/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Parse the embedded config, falling back to defaults.
fn load_config(logger: &StructuredLogger) -> ShopConfig {
    match ShopConfig::from_toml_str(CONFIG) {
        Ok(config) => config,
        Err(e) => {
            logger
                .warn_builder("invalid Storefront.toml, using defaults")
                .field("error", e.to_string())
                .emit();
            ShopConfig::default()
        }
    }
}

/// Restore the cart from local storage, or from memory when the browser
/// denies storage access.
fn open_cart_store(config: &ShopConfig, logger: &StructuredLogger) -> CartStore {
    let store_logger = logger.scoped("cart-store");
    let key = config.storage.cart_key.clone();

    #[cfg(target_arch = "wasm32")]
    {
        match crockery_storage::LocalStore::open() {
            Ok(local) => return CartStore::restore(Cache::new(local), key, store_logger),
            Err(e) => {
                logger
                    .warn_builder("local storage unavailable, cart will not persist")
                    .field("error", e.to_string())
                    .emit();
            }
        }
    }

    CartStore::restore(Cache::new(MemoryStore::new()), key, store_logger)
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"\u{a9} CrockeryShop - handcrafted ceramic and porcelain"</p>
        </footer>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
