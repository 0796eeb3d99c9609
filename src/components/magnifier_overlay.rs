//! Full-screen magnification overlay.
//!
//! ARCHITECTURE
//! ============
//! The `magnifier` crate owns all interaction state; this component wires
//! DOM events into [`ViewerCore`] and applies the returned actions: start
//! or cancel the animation-frame loop, lock or unlock the document scroll,
//! publish a fresh snapshot into [`ViewerUiState`], and forward engagement
//! events to the host page's callbacks.
//!
//! Teardown is defensive: `on_cleanup` cancels any pending frame and runs
//! `close()` unconditionally, so a forced unmount mid-drag still releases
//! the scroll lock exactly once and no stale frame callback can revive the
//! loop afterwards.

use leptos::prelude::*;

use magnifier::coords::FocusPercent;

use crate::components::zoom_controls::ZoomControls;
use crate::state::viewer::ViewerUiState;

#[cfg(feature = "hydrate")]
use crate::util::scroll_lock;
#[cfg(feature = "hydrate")]
use magnifier::dom;
#[cfg(feature = "hydrate")]
use magnifier::engine::{Action, ViewerCore};
#[cfg(feature = "hydrate")]
use magnifier::events::EventKind;
#[cfg(feature = "hydrate")]
use magnifier::gesture::Key;
#[cfg(feature = "hydrate")]
use magnifier::geometry::Size;
#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Everything the action-applying helpers need, cheap to clone into event
/// closures.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
struct OverlayCtx {
    core: Rc<RefCell<ViewerCore>>,
    raf_id: Rc<Cell<Option<i32>>>,
    ui: RwSignal<ViewerUiState>,
    overlay_ref: NodeRef<leptos::html::Div>,
    on_open: Option<Callback<()>>,
    on_close: Option<Callback<()>>,
    on_zoom_change: Option<Callback<f64>>,
}

/// Push the engine's current state into the reactive mirror.
#[cfg(feature = "hydrate")]
fn sync_viewer_state(ctx: &OverlayCtx) {
    let viewport = ctx
        .overlay_ref
        .get_untracked()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            Size::new(rect.width(), rect.height())
        })
        .unwrap_or_default();
    let core = ctx.core.borrow();
    ctx.ui.update(|state| state.sync(&core, viewport));
}

/// Cancel the pending animation frame, if any, before another callback
/// can fire.
#[cfg(feature = "hydrate")]
fn cancel_frame(raf_id: &Rc<Cell<Option<i32>>>) {
    if let Some(id) = raf_id.take() {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

/// Schedule the next smoothing tick. The loop re-arms itself only while a
/// gesture is in flight, so it winds down the moment dragging ends.
#[cfg(feature = "hydrate")]
fn schedule_frame(ctx: &OverlayCtx) {
    if ctx.raf_id.get().is_some() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };

    let ctx_for_cb = ctx.clone();
    let holder: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move || {
        ctx_for_cb.raf_id.set(None);
        let actions = ctx_for_cb.core.borrow_mut().tick();
        apply_actions(&ctx_for_cb, actions);
        if ctx_for_cb.core.borrow().is_interacting() {
            schedule_frame(&ctx_for_cb);
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut()>);

    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        ctx.raf_id.set(Some(id));
        *holder.borrow_mut() = Some(cb);
    }
}

/// Apply engine actions to the page, in order.
#[cfg(feature = "hydrate")]
fn apply_actions(ctx: &OverlayCtx, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::RenderNeeded => sync_viewer_state(ctx),
            Action::StartAnimation => schedule_frame(ctx),
            Action::StopAnimation => cancel_frame(&ctx.raf_id),
            Action::LockScroll => scroll_lock::lock(),
            Action::UnlockScroll => scroll_lock::unlock(),
            Action::Notify(event) => {
                match event.kind {
                    EventKind::Opened => {
                        if let Some(cb) = ctx.on_open {
                            cb.run(());
                        }
                    }
                    EventKind::Closed => {
                        if let Some(cb) = ctx.on_close {
                            cb.run(());
                        }
                    }
                    EventKind::ZoomChanged { level } => {
                        if let Some(cb) = ctx.on_zoom_change {
                            cb.run(level);
                        }
                    }
                    _ => {}
                }
                leptos::logging::log!("viewer event: {}", event.to_json());
                ctx.ui.update(|state| state.record(event));
            }
        }
    }
}

/// Full-screen zoom overlay for one product photo.
///
/// Mounting the component opens the viewer (locking the page scroll and
/// hiding chrome); unmounting closes it, however the unmount happens. Desktop
/// users drag to steer the lens and pick discrete levels via keys 5-9/0 or
/// the on-screen controls; touch users pinch for continuous zoom.
#[component]
pub fn MagnifierOverlay(
    /// URL of the photo to magnify.
    image_src: String,
    /// Starting focus point; defaults to the image center.
    #[prop(optional)] initial_focus: Option<FocusPercent>,
    /// Fired after the overlay has opened and locked the page.
    #[prop(optional, into)] on_open: Option<Callback<()>>,
    /// Fired after the overlay has closed and restored the page.
    #[prop(optional, into)] on_close: Option<Callback<()>>,
    /// Fired when a discrete zoom level is selected or a pinch settles.
    #[prop(optional, into)] on_zoom_change: Option<Callback<f64>>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<ViewerUiState>>();
    let overlay_ref = NodeRef::<leptos::html::Div>::new();
    let stage_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    let ctx = OverlayCtx {
        core: Rc::new(RefCell::new(ViewerCore::new())),
        raf_id: Rc::new(Cell::new(None)),
        ui,
        overlay_ref,
        on_open,
        on_close,
        on_zoom_change,
    };
    #[cfg(not(feature = "hydrate"))]
    let _ = (initial_focus, on_open, on_close, on_zoom_change);

    // Open on mount, once the stage element exists to take focus.
    #[cfg(feature = "hydrate")]
    {
        let ctx = ctx.clone();
        Effect::new(move || {
            if let Some(stage) = stage_ref.get() {
                let _ = stage.focus();
            }
            if ctx.core.borrow().is_open() {
                return;
            }
            let actions = ctx
                .core
                .borrow_mut()
                .open(dom::detect_platform(), initial_focus);
            apply_actions(&ctx, actions);
        });
    }

    // Defensive teardown: covers Escape, backdrop, close button, and a
    // forced unmount mid-gesture alike. The engine makes the redundant
    // paths no-ops.
    #[cfg(feature = "hydrate")]
    {
        let ctx = ctx.clone();
        on_cleanup(move || {
            cancel_frame(&ctx.raf_id);
            let actions = ctx.core.borrow_mut().close();
            apply_actions(&ctx, actions);
        });
    }

    let request_close = {
        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            move || {
                let actions = ctx.core.borrow_mut().close();
                apply_actions(&ctx, actions);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move || {}
        }
    };

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            move |ev: leptos::ev::PointerEvent| {
                if ev.pointer_type() == "touch" {
                    return;
                }
                ev.prevent_default();
                let Some(stage) = stage_ref.get() else {
                    return;
                };
                let _ = stage.focus();
                let _ = stage.set_pointer_capture(ev.pointer_id());
                let rect = dom::rect_from_dom(&stage.get_bounding_client_rect());
                let actions = ctx
                    .core
                    .borrow_mut()
                    .pointer_down(dom::pointer_point(&ev), rect);
                apply_actions(&ctx, actions);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            move |ev: leptos::ev::PointerEvent| {
                if ev.pointer_type() == "touch" {
                    return;
                }
                let actions = ctx.core.borrow_mut().pointer_move(dom::pointer_point(&ev));
                apply_actions(&ctx, actions);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            move |ev: leptos::ev::PointerEvent| {
                if ev.pointer_type() == "touch" {
                    return;
                }
                if let Some(stage) = stage_ref.get() {
                    let _ = stage.release_pointer_capture(ev.pointer_id());
                }
                let actions = ctx.core.borrow_mut().pointer_up();
                apply_actions(&ctx, actions);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_touch_start = {
        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            move |ev: leptos::ev::TouchEvent| {
                ev.prevent_default();
                let Some(stage) = stage_ref.get() else {
                    return;
                };
                let rect = dom::rect_from_dom(&stage.get_bounding_client_rect());
                let points = dom::touch_points(&ev.touches());
                let actions = ctx.core.borrow_mut().touch_start(&points, rect);
                apply_actions(&ctx, actions);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_move = {
        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            move |ev: leptos::ev::TouchEvent| {
                // The page behind is scroll-locked; never let the browser
                // pan or zoom it from this surface.
                ev.prevent_default();
                let points = dom::touch_points(&ev.touches());
                let actions = ctx.core.borrow_mut().touch_move(&points);
                apply_actions(&ctx, actions);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_end = {
        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            move |ev: leptos::ev::TouchEvent| {
                // `touches` holds the fingers still down after the lift.
                let remaining = dom::touch_points(&ev.touches());
                let actions = ctx.core.borrow_mut().touch_end(&remaining);
                apply_actions(&ctx, actions);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };
    let on_touch_cancel = on_touch_end.clone();

    let on_key_down = {
        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            move |ev: leptos::ev::KeyboardEvent| {
                let actions = ctx.core.borrow_mut().key_down(&Key(ev.key()));
                apply_actions(&ctx, actions);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    let on_zoom_select = {
        #[cfg(feature = "hydrate")]
        {
            let ctx = ctx.clone();
            Callback::new(move |level: f64| {
                let actions = ctx.core.borrow_mut().set_zoom(level);
                apply_actions(&ctx, actions);
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Callback::new(move |_level: f64| {})
        }
    };

    let on_backdrop_click = {
        let request_close = request_close.clone();
        move |_ev: leptos::ev::MouseEvent| request_close()
    };
    let on_close_request = Callback::new(move |()| request_close());

    let stage_bg = format!("url('{image_src}')");
    let lens_bg = stage_bg.clone();

    view! {
        // Keydown sits on the root so it still fires after focus moves to
        // the stage or a HUD button; both bubble up to here.
        <div class="magnifier-overlay" node_ref=overlay_ref tabindex="0" on:keydown=on_key_down>
            <div class="magnifier-overlay__backdrop" on:click=on_backdrop_click></div>
            <div
                class="magnifier-overlay__stage"
                node_ref=stage_ref
                tabindex="0"
                style:background-image=stage_bg
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
                on:touchcancel=on_touch_cancel
            ></div>
            {move || {
                let state = ui.get();
                state
                    .lens
                    .map(|placement| {
                        let crop = state.lens_crop;
                        view! {
                            <div
                                class="magnifier-overlay__lens"
                                style:left=format!("{}px", placement.left)
                                style:top=format!("{}px", placement.top)
                                style:width=format!("{}px", placement.size)
                                style:height=format!("{}px", placement.size)
                                style:background-image=lens_bg.clone()
                                style:background-size=format!("{}%", crop.background_size)
                                style:background-position=format!(
                                    "{}% {}%", crop.x, crop.y,
                                )
                            ></div>
                        }
                    })
            }}
            <div class="magnifier-overlay__hud">
                <span class="magnifier-overlay__hint">
                    "Drag to inspect. Keys 5-9 and 0 set zoom, Esc closes."
                </span>
                <ZoomControls
                    level=Signal::derive(move || ui.get().zoom_level)
                    on_select=on_zoom_select
                    on_close=on_close_request
                />
            </div>
        </div>
    }
}
