//! Discrete zoom level buttons and the close control for the overlay HUD.

use leptos::prelude::*;

use magnifier::consts::{DESKTOP_ZOOM_MAX, DESKTOP_ZOOM_MIN};

/// On-screen twin of the numeric-key zoom surface: one button per discrete
/// desktop level plus a close button. Selection goes through the same
/// engine path as the keyboard.
#[component]
pub fn ZoomControls(
    /// Current zoom level, for highlighting the active button.
    #[prop(into)] level: Signal<f64>,
    /// Invoked with the chosen discrete level.
    #[prop(into)] on_select: Callback<f64>,
    /// Invoked when the close button is pressed.
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let mut levels = Vec::new();
    let mut l = DESKTOP_ZOOM_MIN;
    while l <= DESKTOP_ZOOM_MAX {
        levels.push(l);
        l += 1.0;
    }

    view! {
        <div class="zoom-controls">
            {levels
                .into_iter()
                .map(|option| {
                    view! {
                        <button
                            class="btn zoom-controls__level"
                            class=(
                                "zoom-controls__level--active",
                                move || (level.get() - option).abs() < f64::EPSILON,
                            )
                            on:click=move |_| on_select.run(option)
                        >
                            {format!("{option:.0}x")}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
            <button class="btn zoom-controls__close" on:click=move |_| on_close.run(()) title="Close zoom view">
                "Close"
            </button>
        </div>
    }
}
