//! Product detail page, the surface that hosts the magnification viewer.

use leptos::prelude::*;

use crate::components::magnifier_overlay::MagnifierOverlay;
use crate::components::preview_pane::PreviewPane;
use crate::components::product_gallery::ProductGallery;
use crate::state::product::demo_product;

/// Product detail page.
///
/// Renders the site chrome (hidden while the overlay is up), the gallery
/// with its hover preview, and mounts the magnification overlay on demand.
/// Catalog data is a fixed demo product; the real storefront feeds this
/// page from the commerce backend.
#[component]
pub fn ProductPage() -> impl IntoView {
    let images = StoredValue::new(demo_product());
    let selected = RwSignal::new(0_usize);
    let show_zoom = RwSignal::new(false);

    let current_src = move || {
        images.with_value(|list| {
            list.get(selected.get())
                .map(|img| img.src.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="product-page">
            <header class="site-chrome product-page__header">
                <a href="/" class="product-page__brand">"Vitrine"</a>
                <nav class="product-page__nav">
                    <a href="/">"New arrivals"</a>
                    <a href="/">"Watches"</a>
                    <a href="/">"Cart"</a>
                </nav>
            </header>
            <main class="product-page__body">
                <ProductGallery
                    images=images
                    selected=selected
                    on_zoom_request=Callback::new(move |()| show_zoom.set(true))
                />
                <aside class="product-page__details">
                    <h1 class="product-page__name">"Meridian Chronograph"</h1>
                    <p class="product-page__price">"$1,240"</p>
                    <p class="product-page__copy">
                        "Hand-finished guilloche dial, 41mm brushed case, box
                        sapphire. Hover the photo to aim the preview, then open
                        the zoom view to inspect the dial work up close."
                    </p>
                    <PreviewPane image_src=Signal::derive(current_src)/>
                </aside>
            </main>
            <Show when=move || show_zoom.get()>
                <MagnifierOverlay
                    image_src=current_src()
                    on_close=Callback::new(move |()| show_zoom.set(false))
                />
            </Show>
        </div>
    }
}
