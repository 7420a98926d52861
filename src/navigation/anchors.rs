use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlAnchorElement, MouseEvent};
use yew::prelude::*;

use crate::layout::registry::PinRegistry;
use crate::navigation::resolver::{scroll_to_section, Behavior, BrowserNav, NavigateOptions, NavigationEnv};

/// Section id addressed by a location fragment such as `#manifiesto`.
pub fn section_from_hash(hash: &str) -> Option<String> {
    let raw = hash.trim().trim_start_matches('#').trim();
    if raw.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(raw)
        .map(|id| id.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    let id = decoded.trim();
    (!id.is_empty()).then(|| id.to_string())
}

/// The parts of a document click that decide whether it is an in-page jump.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnchorClick {
    pub default_prevented: bool,
    pub button: i16,
    pub modified: bool,
    pub href: Option<String>,
    pub opens_new_tab: bool,
    pub download: bool,
}

impl AnchorClick {
    fn from_event(event: &MouseEvent, anchor: &HtmlAnchorElement) -> Self {
        Self {
            default_prevented: event.default_prevented(),
            button: event.button(),
            modified: event.meta_key() || event.ctrl_key() || event.shift_key() || event.alt_key(),
            href: anchor.get_attribute("href"),
            opens_new_tab: anchor.target() == "_blank",
            download: anchor.has_attribute("download"),
        }
    }
}

/// Section id a click should be routed to, or `None` to let the browser
/// handle it.
pub fn intercepted_section(click: &AnchorClick) -> Option<String> {
    if click.default_prevented || click.button != 0 || click.modified {
        return None;
    }
    if click.opens_new_tab || click.download {
        return None;
    }
    let href = click.href.as_deref()?;
    if !href.starts_with('#') || href == "#" {
        return None;
    }
    section_from_hash(href)
}

fn location_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Follows `hashchange`: menus are closed and the new section is scrolled
/// to on the next frame without touching history again. A fragment present
/// once `ready` turns true is honoured immediately.
#[hook]
pub fn use_hash_navigation(registry: PinRegistry, ready: bool, on_navigate: Callback<()>) {
    {
        let registry = registry.clone();
        use_effect_with_deps(
            move |_| {
                // Dropping the handle cancels a frame that has not run yet
                let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
                let listener = window().map(|window| {
                    let pending = pending.clone();
                    EventListener::new(&window, "hashchange", move |_| {
                        on_navigate.emit(());
                        let Some(id) = section_from_hash(&location_hash()) else {
                            return;
                        };
                        let registry = registry.clone();
                        let frame = request_animation_frame(move |_| {
                            let options = NavigateOptions {
                                behavior: Behavior::Smooth,
                                record_in_history: false,
                            };
                            scroll_to_section(&BrowserNav, &registry, &id, options);
                        });
                        *pending.borrow_mut() = Some(frame);
                    })
                });
                move || {
                    drop(listener);
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    use_effect_with_deps(
        move |ready| {
            if *ready {
                if let Some(id) = section_from_hash(&location_hash()) {
                    let options = NavigateOptions {
                        behavior: Behavior::Instant,
                        record_in_history: false,
                    };
                    let found = scroll_to_section(&BrowserNav, &registry, &id, options);
                    log::info!("Initial fragment #{} resolved: {}", id, found);
                }
            }
            || ()
        },
        ready,
    );
}

/// Routes clicks on `href="#id"` links through the section resolver so panels
/// of the pinned strip are reachable.
#[hook]
pub fn use_anchor_interception(registry: PinRegistry, on_navigate: Callback<()>) {
    use_effect_with_deps(
        move |_| {
            let document = window().and_then(|w| w.document());
            let listener = document.map(|document| {
                EventListener::new(&document, "click", move |event| {
                    let Some(event) = event.dyn_ref::<MouseEvent>() else {
                        return;
                    };
                    let anchor = event
                        .target()
                        .and_then(|target| target.dyn_into::<Element>().ok())
                        .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
                        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok());
                    let Some(anchor) = anchor else {
                        return;
                    };
                    let Some(id) = intercepted_section(&AnchorClick::from_event(event, &anchor)) else {
                        return;
                    };
                    if !BrowserNav.has_element(&id) {
                        return;
                    }

                    event.prevent_default();
                    on_navigate.emit(());
                    scroll_to_section(&BrowserNav, &registry, &id, NavigateOptions::default());
                })
            });
            move || drop(listener)
        },
        (),
    );
}
