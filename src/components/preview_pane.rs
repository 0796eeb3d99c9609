//! Persistent low-zoom preview of the focused crop.

use leptos::prelude::*;

use magnifier::consts::PREVIEW_ZOOM;

use crate::state::viewer::ViewerUiState;

/// Always-visible preview indicator next to the gallery.
///
/// Shows the last-focused crop at a fixed low zoom, tracking hover before
/// any drag is committed, so shoppers see what the full zoom view will
/// center on before opening it.
#[component]
pub fn PreviewPane(
    /// URL of the photo being previewed.
    #[prop(into)] image_src: Signal<String>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<ViewerUiState>>();

    view! {
        <div class="preview-pane">
            <div
                class="preview-pane__crop"
                style:background-image=move || format!("url('{}')", image_src.get())
                style:background-size=move || format!("{}%", ui.get().preview.background_size)
                style:background-position=move || {
                    let crop = ui.get().preview;
                    format!("{}% {}%", crop.x, crop.y)
                }
            ></div>
            <span class="preview-pane__hint">
                {format!("{PREVIEW_ZOOM:.0}x preview")}
            </span>
        </div>
    }
}
