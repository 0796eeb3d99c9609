//! Document scroll lock for the full-screen overlay.
//!
//! Applies the pure `magnifier::scroll_lock::ScrollLockState` machine to
//! the real document: freeze the body in place, hide floating chrome (any
//! element carrying the `site-chrome` class), and on release restore the
//! body styling, chrome visibility, and the exact pre-lock scroll offset
//! without a visible scroll animation. Requires a browser environment.
//!
//! One `thread_local` state covers the whole document, so a second overlay
//! opening while one is up serializes through the same lock: the first
//! capture wins and only the matching release restores.

#[cfg(feature = "hydrate")]
use magnifier::scroll_lock::ScrollLockState;

/// Class marking chrome elements (header, nav) that must not float above
/// the overlay.
#[cfg(feature = "hydrate")]
const CHROME_SELECTOR: &str = ".site-chrome";

/// Modifier class applied to chrome elements while the lock is held.
#[cfg(feature = "hydrate")]
const CHROME_HIDDEN_CLASS: &str = "site-chrome--hidden";

#[cfg(feature = "hydrate")]
thread_local! {
    static LOCK: std::cell::RefCell<ScrollLockState> =
        std::cell::RefCell::new(ScrollLockState::new());
}

/// Acquire the document scroll lock. Idempotent: a nested call while the
/// lock is held changes nothing.
pub fn lock() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let offset = window.scroll_y().unwrap_or(0.0);
        let acquired = LOCK.with(|lock| lock.borrow_mut().lock(offset));
        if !acquired {
            return;
        }
        freeze_body(offset);
        set_chrome_hidden(true);
    }
}

/// Release the document scroll lock and restore the saved scroll offset.
/// Idempotent: releasing an unheld lock changes nothing. Safe to call
/// unconditionally from teardown paths.
pub fn unlock() {
    #[cfg(feature = "hydrate")]
    {
        let Some(offset) = LOCK.with(|lock| lock.borrow_mut().unlock()) else {
            return;
        };
        unfreeze_body();
        set_chrome_hidden(false);
        restore_scroll(offset);
    }
}

/// Pin the body where it is so the page behind the overlay cannot scroll.
/// The negative top offset keeps the page visually in place while fixed.
#[cfg(feature = "hydrate")]
fn freeze_body(offset: f64) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let style = body.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", &format!("-{offset}px"));
        let _ = style.set_property("left", "0");
        let _ = style.set_property("right", "0");
        let _ = style.set_property("overflow", "hidden");
    }
}

#[cfg(feature = "hydrate")]
fn unfreeze_body() {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let style = body.style();
        for property in ["position", "top", "left", "right", "overflow"] {
            let _ = style.remove_property(property);
        }
    }
}

#[cfg(feature = "hydrate")]
fn set_chrome_hidden(hidden: bool) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(CHROME_SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let class_list = element.class_list();
        if hidden {
            let _ = class_list.add_1(CHROME_HIDDEN_CLASS);
        } else {
            let _ = class_list.remove_1(CHROME_HIDDEN_CLASS);
        }
    }
}

/// Jump back to the saved offset with no smooth-scroll animation. If the
/// document shrank while the overlay was open the browser clamps the
/// target naturally; that is acceptable.
#[cfg(feature = "hydrate")]
fn restore_scroll(offset: f64) {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(offset);
        options.set_behavior(web_sys::ScrollBehavior::Instant);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
