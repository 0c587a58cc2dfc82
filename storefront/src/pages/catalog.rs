//! Catalog page: header with search, banner carousel and product grid.

use std::time::Duration;

use crockery_commerce::prelude::*;
use crockery_observability::StructuredLogger;
use leptos::ev;
use leptos::prelude::*;

use crate::cart::ShopCart;
use crate::components::{Notice, NoticeBanner, ProductCard};

const MOBILE_MAX_WIDTH: f64 = 640.0;

#[component]
pub fn CatalogPage(
    cart: ShopCart,
    handoff: StoredValue<MessageHandoff>,
    autoplay: Duration,
    logger: StructuredLogger,
) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);
    let products = StoredValue::new(sample_catalog());

    let banner_logger = logger.clone();
    let visible = move || products.with_value(|all| search.with(|term| filter_products(all, term)));

    view! {
        <CatalogHeader cart=cart search=search/>
        <Banner autoplay=autoplay logger=banner_logger/>
        <NoticeBanner notice=notice/>

        <section class="products-section">
            <h2>"Our Premium Crockery Collection"</h2>
            <div class="products-grid">
                <For
                    each=visible
                    key=|product| product.id.clone()
                    children=move |product| {
                        view! {
                            <ProductCard
                                product=product
                                cart=cart
                                handoff=handoff
                                notice=notice
                                logger=logger.clone()
                            />
                        }
                    }
                />
            </div>
        </section>
    }
}

#[component]
fn CatalogHeader(cart: ShopCart, search: RwSignal<String>) -> impl IntoView {
    let count = move || cart.item_count();

    view! {
        <header class="header">
            <div class="header-content">
                <div class="header-logo">"\u{1f37d}\u{fe0f} CrockeryShop"</div>
                // Filtering is live; submitting only keeps the page in place.
                <form class="search-bar" on:submit=|e: ev::SubmitEvent| e.prevent_default()>
                    <input
                        type="text"
                        placeholder="Search products..."
                        prop:value=move || search.get()
                        on:input=move |e| search.set(event_target_value(&e))
                    />
                    <button type="submit">"Search"</button>
                </form>
                <nav class="header-nav">
                    <a href="#home">"Home"</a>
                    <a href="#products">"Products"</a>
                    <a href="/cart" class="cart-link">
                        "\u{1f6d2} Cart "
                        <Show when=move || { count() > 0 }>
                            <span class="cart-badge">{count}</span>
                        </Show>
                    </a>
                    <a href="#contact">"Contact"</a>
                </nav>
            </div>
        </header>
    }
}

/// Hero banner. Wide screens get the slideshow; small screens show the
/// active slide as the section background.
#[component]
fn Banner(autoplay: Duration, logger: StructuredLogger) -> impl IntoView {
    let slides = StoredValue::new(banner_slides());
    let carousel = RwSignal::new(Carousel::new(slides.with_value(|s| s.len())));
    let is_mobile = RwSignal::new(is_small_screen());

    match set_interval_with_handle(
        move || {
            let _ = carousel.try_update(|c| c.tick());
        },
        autoplay,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => logger
            .warn_builder("banner autoplay unavailable")
            .field("error", format!("{:?}", e))
            .emit(),
    }

    let resize = window_event_listener(ev::resize, move |_| is_mobile.set(is_small_screen()));
    on_cleanup(move || resize.remove());

    let background = move || {
        if !is_mobile.get() {
            return String::new();
        }
        let index = carousel.with(|c| c.index());
        slides.with_value(|s| {
            s.get(index)
                .map(|slide| {
                    format!(
                        "background-image: linear-gradient(rgba(30,64,175,0.6), rgba(37,99,235,0.6)), url({}); \
                         background-size: cover; background-position: center;",
                        slide.src
                    )
                })
                .unwrap_or_default()
        })
    };

    view! {
        <section class="banner" style=background>
            <div class="banner-content">
                <h2>"Premium Quality Crockery"</h2>
                <p>"Discover our exclusive collection of handcrafted ceramic and porcelain pieces"</p>
                <button class="banner-btn">"Shop Now"</button>
            </div>
            <Show when=move || !is_mobile.get()>
                <div class="banner-slideshow">
                    <div class="slideshow-container">
                        {slides.with_value(|all| {
                            all.iter()
                                .enumerate()
                                .map(|(index, slide)| {
                                    view! {
                                        <div class="slide" class:active=move || carousel.with(|c| c.is_active(index))>
                                            <img src=slide.src.clone() alt=slide.alt.clone()/>
                                        </div>
                                    }
                                })
                                .collect_view()
                        })}
                        <button class="slide-btn prev" on:click=move |_| carousel.update(|c| { c.prev(); })>
                            "\u{276e}"
                        </button>
                        <button class="slide-btn next" on:click=move |_| carousel.update(|c| { c.next(); })>
                            "\u{276f}"
                        </button>
                    </div>
                    <div class="slide-dots">
                        {(0..carousel.with_untracked(|c| c.len()))
                            .map(|index| {
                                view! {
                                    <button
                                        class="dot"
                                        class:active=move || carousel.with(|c| c.is_active(index))
                                        on:click=move |_| carousel.update(|c| { c.select(index); })
                                    ></button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </section>
    }
}

fn is_small_screen() -> bool {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map(|width| width <= MOBILE_MAX_WIDTH)
        .unwrap_or(false)
}
