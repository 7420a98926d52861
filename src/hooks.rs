use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::DESKTOP_QUERY;
use crate::layout::geometry;

/// Tracks whether the viewport is in the desktop class, following
/// breakpoint crossings.
#[hook]
pub fn use_is_desktop() -> bool {
    let is_desktop = use_state(geometry::is_desktop_viewport);

    {
        let is_desktop = is_desktop.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window()
                    .and_then(|w| w.match_media(DESKTOP_QUERY).ok().flatten())
                    .map(|mql| {
                        let query = mql.clone();
                        EventListener::new(&mql, "change", move |_| {
                            is_desktop.set(query.matches());
                        })
                    });
                move || drop(listener)
            },
            (),
        );
    }

    *is_desktop
}

/// Raised once the page has mounted and node refs point at real elements.
/// Scroll-driven effects stay dormant until then.
#[hook]
pub fn use_engine_ready() -> bool {
    let ready = use_state(|| false);

    {
        let ready = ready.clone();
        use_effect_with_deps(
            move |_| {
                ready.set(true);
                log::debug!("Scroll engine ready");
                || ()
            },
            (),
        );
    }

    *ready
}

/// True once the window has scrolled further than `threshold` px.
#[hook]
pub fn use_scroll_threshold(threshold: f64) -> bool {
    let (_, y) = use_window_scroll();
    y > threshold
}

struct SavedOverflow {
    element: HtmlElement,
    overflow: String,
    overscroll: String,
}

fn root_elements() -> Vec<HtmlElement> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let html = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    document.body().into_iter().chain(html).collect()
}

fn lock_scroll() -> Vec<SavedOverflow> {
    root_elements()
        .into_iter()
        .map(|element| {
            let style = element.style();
            let saved = SavedOverflow {
                overflow: style.get_property_value("overflow").unwrap_or_default(),
                overscroll: style
                    .get_property_value("overscroll-behavior")
                    .unwrap_or_default(),
                element: element.clone(),
            };
            let _ = style.set_property("overflow", "hidden");
            let _ = style.set_property("overscroll-behavior", "none");
            saved
        })
        .collect()
}

fn restore_scroll(saved: Vec<SavedOverflow>) {
    for entry in saved {
        let style = entry.element.style();
        let _ = style.set_property("overflow", &entry.overflow);
        let _ = style.set_property("overscroll-behavior", &entry.overscroll);
    }
}

/// Blocks page scrolling on `<html>` and `<body>` while `locked` is set.
#[hook]
pub fn use_scroll_lock(locked: bool) {
    use_effect_with_deps(
        move |locked| {
            let saved = if *locked { lock_scroll() } else { Vec::new() };
            move || restore_scroll(saved)
        },
        locked,
    );
}
