//! Product photo gallery: main stage, thumbnail strip, hover focus.

use leptos::prelude::*;

use crate::state::product::ProductImage;
use crate::state::viewer::ViewerUiState;

#[cfg(feature = "hydrate")]
use magnifier::coords::CoordinateMapper;
#[cfg(feature = "hydrate")]
use magnifier::dom;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Gallery for one product's photos.
///
/// Hovering the main photo moves the shared focus point (feeding the
/// preview pane) before any zoom interaction starts; clicking it asks the
/// page to open the full magnification overlay.
#[component]
pub fn ProductGallery(
    /// All photos of the product.
    images: StoredValue<Vec<ProductImage>>,
    /// Index of the photo shown on the main stage.
    selected: RwSignal<usize>,
    /// Invoked when the shopper asks for the zoom view.
    #[prop(into)] on_zoom_request: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<ViewerUiState>>();
    let main_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let mapper = Rc::new(RefCell::new(CoordinateMapper::new()));
    #[cfg(not(feature = "hydrate"))]
    let _ = ui;

    let current_alt = move || {
        images.with_value(|list| {
            list.get(selected.get())
                .map(|img| img.alt.clone())
                .unwrap_or_default()
        })
    };
    let main_style = move || {
        images.with_value(|list| {
            list.get(selected.get())
                .map(|img| format!("background-image: url('{}')", img.src))
                .unwrap_or_default()
        })
    };

    let on_hover = {
        #[cfg(feature = "hydrate")]
        {
            let mapper = Rc::clone(&mapper);
            move |ev: leptos::ev::MouseEvent| {
                let Some(main) = main_ref.get() else {
                    return;
                };
                let rect = dom::rect_from_dom(&main.get_bounding_client_rect());
                let focus = mapper.borrow_mut().to_normalized(dom::mouse_point(&ev), rect);
                ui.update(|state| state.hover(focus));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <div class="product-gallery">
            <div
                class="product-gallery__main"
                node_ref=main_ref
                role="button"
                aria-label="Open zoom view"
                title=current_alt
                style=main_style
                on:mousemove=on_hover
                on:click=move |_| on_zoom_request.run(())
            ></div>
            <div class="product-gallery__thumbs">
                {move || {
                    images.with_value(|list| {
                        list.iter()
                            .enumerate()
                            .map(|(i, img)| {
                                let src = img.src.clone();
                                let alt = img.alt.clone();
                                view! {
                                    <button
                                        class="product-gallery__thumb"
                                        class=(
                                            "product-gallery__thumb--active",
                                            move || selected.get() == i,
                                        )
                                        on:click=move |_| selected.set(i)
                                    >
                                        <img src=src alt=alt loading="lazy"/>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
        </div>
    }
}
