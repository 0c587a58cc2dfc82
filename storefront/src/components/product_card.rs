//! Product card with "Buy Now" and "Add to Cart".

use crockery_commerce::prelude::*;
use crockery_observability::StructuredLogger;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::Notice;
use crate::cart::ShopCart;

/// Opens links with `window.open` in a new context, without opener or referrer.
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<(), CommerceError> {
        // With noopener the browser returns no window even on success.
        window()
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map(|_| ())
            .map_err(|e| CommerceError::HandoffFailed(describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[component]
pub fn ProductCard(
    product: Product,
    cart: ShopCart,
    handoff: StoredValue<MessageHandoff>,
    notice: RwSignal<Option<Notice>>,
    logger: StructuredLogger,
) -> impl IntoView {
    let price = product.price_display();

    let buy = {
        let product = product.clone();
        move |_: ev::MouseEvent| {
            let result = handoff.with_value(|h| h.hand_off(&product, &BrowserOpener));
            if let Err(e) = result {
                logger
                    .error_builder("buy now handoff failed")
                    .field("product", product.id.as_str())
                    .field("error", e.to_string())
                    .emit();
                notice.set(Some(Notice::error("Unable to open WhatsApp. Please try again.")));
            }
        }
    };

    let add = {
        let product = product.clone();
        move |_: ev::MouseEvent| match cart.add_item(product.to_cart_item()) {
            Ok(()) => notice.set(Some(Notice::success(format!(
                "\u{2705} {} added to cart!",
                product.name
            )))),
            Err(_) => notice.set(Some(Notice::error(format!(
                "Could not add {} to the cart.",
                product.name
            )))),
        }
    };

    view! {
        <div class="product-card">
            <img src=product.image_url.clone() alt=product.name.clone()/>
            <h3>{product.name.clone()}</h3>
            <p>{product.description.clone()}</p>
            <div class="product-price">{price}</div>
            <div class="product-actions">
                <button class="btn-buy" on:click=buy>"Buy Now"</button>
                <button class="btn-cart" on:click=add>"Add to Cart"</button>
            </div>
        </div>
    }
}
