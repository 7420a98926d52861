//! Turns a section id into exactly one scroll action.
//!
//! Panels of the pinned horizontal strip have no vertical position of their
//! own, so for them the resolver maps the panel index onto the pinned scroll
//! range instead of asking the element where it is.

use log::debug;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{
    window, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

use crate::config::{ScrollTuning, HORIZONTAL_PIN_KEY};
use crate::layout::geometry::{self, PinnedRegion};
use crate::layout::registry::PinRegistry;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Behavior {
    #[default]
    Smooth,
    Instant,
}

impl Behavior {
    fn as_web(self) -> ScrollBehavior {
        match self {
            Behavior::Smooth => ScrollBehavior::Smooth,
            Behavior::Instant => ScrollBehavior::Instant,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigateOptions {
    pub behavior: Behavior,
    /// Replace the location fragment with `#id` (no new history entry).
    pub record_in_history: bool,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self {
            behavior: Behavior::Smooth,
            record_in_history: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScrollAction {
    ToOffset { top: f64, behavior: Behavior },
    IntoView { id: String, behavior: Behavior },
}

/// Position of a panel inside the horizontal strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelSlot {
    pub index: usize,
    pub count: usize,
}

impl PanelSlot {
    pub fn progress(&self) -> f64 {
        if self.count <= 1 {
            return 0.0;
        }
        self.index as f64 / (self.count - 1) as f64
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("no element with id `{0}`")]
    TargetNotFound(String),
}

/// What the resolver needs from the page it runs in.
pub trait NavigationEnv {
    fn has_element(&self, id: &str) -> bool;
    fn is_desktop(&self) -> bool;
    /// Slot of the strip panel navigated to by `id`, if it is one.
    fn panel_slot(&self, id: &str) -> Option<PanelSlot>;
    /// Pinned range estimated from current layout, for when no live region
    /// is registered.
    fn estimated_region(&self, id: &str) -> Option<PinnedRegion>;
    fn viewport_height(&self) -> f64;
    fn current_fragment(&self) -> String;
    fn replace_fragment(&self, fragment: &str);
    fn perform(&self, action: &ScrollAction);
}

/// Scroll offset that lands on `slot` inside `region`.
///
/// The first panel is entered slightly past the pin start so its entry
/// effects fire; the last one stops short of the hand-off zone behind the
/// pin end. The result always lies strictly inside the region.
pub fn target_offset(region: &PinnedRegion, slot: PanelSlot, viewport_height: f64, tuning: &ScrollTuning) -> f64 {
    let mut top = region.offset_at(slot.progress());

    if slot.is_first() {
        top += tuning.entry_buffer.resolve(viewport_height);
    }
    if slot.is_last() {
        top -= tuning.edge_buffer.resolve(viewport_height);
    }

    top.max(region.start + 1.0).min(region.end - 1.0)
}

pub fn resolve<E: NavigationEnv>(
    env: &E,
    registry: &PinRegistry,
    id: &str,
    behavior: Behavior,
) -> Result<ScrollAction, NavError> {
    if !env.has_element(id) {
        return Err(NavError::TargetNotFound(id.to_string()));
    }

    if env.is_desktop() {
        if let Some(slot) = env.panel_slot(id) {
            // A live region measured for another panel set is stale
            let region = registry
                .lookup(HORIZONTAL_PIN_KEY)
                .filter(|region| region.total_panels == slot.count)
                .or_else(|| env.estimated_region(id));
            match region {
                Some(region) if region.span() >= 2.0 => {
                    let top = target_offset(&region, slot, env.viewport_height(), &ScrollTuning::default());
                    return Ok(ScrollAction::ToOffset { top, behavior });
                }
                _ => debug!("No usable pinned range for {}, scrolling it into view", id),
            }
        }
    }

    Ok(ScrollAction::IntoView {
        id: id.to_string(),
        behavior,
    })
}

/// Scrolls to the section `id`. Returns whether it exists.
pub fn scroll_to_section<E: NavigationEnv>(
    env: &E,
    registry: &PinRegistry,
    id: &str,
    options: NavigateOptions,
) -> bool {
    let action = match resolve(env, registry, id, options.behavior) {
        Ok(action) => action,
        Err(err) => {
            debug!("Navigation skipped: {}", err);
            return false;
        }
    };
    env.perform(&action);

    let fragment = format!("#{}", id);
    if options.record_in_history && env.current_fragment() != fragment {
        env.replace_fragment(&fragment);
    }
    true
}

/// [`NavigationEnv`] over the live document.
pub struct BrowserNav;

impl BrowserNav {
    fn element(&self, id: &str) -> Option<Element> {
        window()?.document()?.get_element_by_id(id)
    }

    fn slide(&self, id: &str) -> Option<Element> {
        let selector = format!("[data-horizontal-slide=\"{}\"]", id);
        window()?.document()?.query_selector(&selector).ok().flatten()
    }
}

impl NavigationEnv for BrowserNav {
    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn is_desktop(&self) -> bool {
        geometry::is_desktop_viewport()
    }

    fn panel_slot(&self, id: &str) -> Option<PanelSlot> {
        let slide = self.slide(id)?;
        let strip = slide.parent_element()?;
        let siblings = strip.children();
        let count = siblings.length() as usize;
        let index = (0..siblings.length())
            .position(|i| siblings.item(i).as_ref() == Some(&slide))?;
        Some(PanelSlot { index, count })
    }

    fn estimated_region(&self, id: &str) -> Option<PinnedRegion> {
        let slide = self.slide(id)?;
        let strip = slide.parent_element()?;
        let pin = strip.closest(".hs-pin").ok().flatten()?;
        Some(PinnedRegion::new(
            geometry::document_top(&pin),
            geometry::horizontal_travel(&strip),
            strip.children().length() as usize,
        ))
    }

    fn viewport_height(&self) -> f64 {
        geometry::viewport_height()
    }

    fn current_fragment(&self) -> String {
        window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    fn replace_fragment(&self, fragment: &str) {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(fragment));
        }
    }

    fn perform(&self, action: &ScrollAction) {
        match action {
            ScrollAction::ToOffset { top, behavior } => {
                let Some(window) = window() else { return };
                let options = ScrollToOptions::new();
                options.set_top(*top);
                options.set_behavior(behavior.as_web());
                window.scroll_to_with_scroll_to_options(&options);
            }
            ScrollAction::IntoView { id, behavior } => {
                let Some(element) = self.element(id) else { return };
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(behavior.as_web());
                options.set_block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}
