use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ResizeObserver};
use yew::prelude::*;

use crate::config::{ScrollTuning, HORIZONTAL_PIN_KEY};
use crate::hooks::use_is_desktop;
use crate::layout::controller::HorizontalController;
use crate::layout::geometry::{self, PinnedRegion};
use crate::layout::label::{LabelStep, LabelStepKind};
use crate::layout::presenter::{DomPresenter, DomSurfaces};
use crate::layout::registry::{followed_region, PinBinding, PinRegistry};

type SharedController = Rc<RefCell<HorizontalController<DomPresenter>>>;
type TimerSlot = Rc<RefCell<Option<Timeout>>>;

#[derive(Clone, Default)]
struct SectionRefs {
    pin: NodeRef,
    strip: NodeRef,
    bar: NodeRef,
    dot: NodeRef,
    counter: NodeRef,
    label: NodeRef,
    overlay: NodeRef,
}

impl SectionRefs {
    fn surfaces(&self) -> Option<DomSurfaces> {
        Some(DomSurfaces {
            pin: self.pin.cast::<HtmlElement>()?,
            strip: self.strip.cast::<HtmlElement>()?,
            bar: self.bar.cast::<HtmlElement>(),
            dot: self.dot.cast::<HtmlElement>(),
            counter: self.counter.cast::<HtmlElement>(),
            label: self.label.cast::<HtmlElement>(),
            overlay: self.overlay.cast::<HtmlElement>(),
        })
    }
}

/// Times one label phase. Replacing the slot's content cancels the phase that
/// was pending before.
fn schedule_label(controller: &SharedController, slot: &TimerSlot, step: LabelStep, tuning: ScrollTuning) {
    let delay = match step.kind {
        LabelStepKind::Exit => tuning.label_exit_ms,
        LabelStepKind::Enter => tuning.label_enter_ms,
    };
    let ctl = controller.clone();
    let next_slot = slot.clone();
    let timeout = Timeout::new(delay, move || match step.kind {
        LabelStepKind::Exit => {
            let next = ctl.borrow_mut().label_exit_finished(step.generation);
            if let Some(next) = next {
                schedule_label(&ctl, &next_slot, next, tuning);
            }
        }
        LabelStepKind::Enter => ctl.borrow_mut().label_enter_finished(step.generation),
    });
    *slot.borrow_mut() = Some(timeout);
}

/// Calls back whenever the document body changes size, which covers reflow
/// that never reaches the window (late fonts, images above the strip).
struct BodyResizeWatch {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut()>,
}

impl BodyResizeWatch {
    fn new(on_resize: impl FnMut() + 'static) -> Option<Self> {
        let body = window()?.document()?.body()?;
        let callback = Closure::wrap(Box::new(on_resize) as Box<dyn FnMut()>);
        let observer = match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(_) => {
                warn!("ResizeObserver unavailable, re-measuring on window resize only");
                return None;
            }
        };
        observer.observe(&body);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for BodyResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Wires an activated controller to scroll, layout changes and the pin
/// registry. The returned closure undoes all of it.
fn run_desktop(
    mut controller: HorizontalController<DomPresenter>,
    pin: HtmlElement,
    strip: HtmlElement,
    registry: PinRegistry,
) -> Box<dyn FnOnce()> {
    let tuning = ScrollTuning::default();
    let panels = controller.panel_count();
    controller.activate(geometry::horizontal_travel(&strip));
    let controller: SharedController = Rc::new(RefCell::new(controller));
    let timer: TimerSlot = Rc::new(RefCell::new(None));

    let measure: Rc<dyn Fn() -> Option<PinnedRegion>> = {
        let strip = strip.clone();
        Rc::new(move || {
            Some(PinnedRegion::new(
                geometry::document_top(&pin),
                geometry::horizontal_travel(&strip),
                panels,
            ))
        })
    };

    let binding = {
        let measure = measure.clone();
        match registry.bind(HORIZONTAL_PIN_KEY, move || measure()) {
            Ok(binding) => Some(binding),
            Err(err) => {
                warn!("Horizontal strip runs without a registered region: {}", err);
                None
            }
        }
    };
    let binding: Rc<RefCell<Option<PinBinding>>> = Rc::new(RefCell::new(binding));
    registry.refresh();

    let tick: Rc<dyn Fn()> = {
        let controller = controller.clone();
        let timer = timer.clone();
        let binding = binding.clone();
        Rc::new(move || {
            let region = followed_region(binding.borrow().as_ref(), || measure());
            let Some(region) = region else {
                return;
            };
            let progress = region.progress_at(geometry::scroll_y());
            let step = controller.borrow_mut().apply(progress, region.span());
            if let Some(step) = step {
                schedule_label(&controller, &timer, step, tuning);
            }
        })
    };

    let remeasure: Rc<dyn Fn()> = {
        let tick = tick.clone();
        let controller = controller.clone();
        let registry = registry.clone();
        Rc::new(move || {
            controller
                .borrow()
                .relayout(geometry::horizontal_travel(&strip));
            registry.refresh();
            tick();
        })
    };

    let mut listeners = Vec::new();
    if let Some(window) = window() {
        let on_scroll = tick.clone();
        listeners.push(EventListener::new(&window, "scroll", move |_| on_scroll()));
        let on_resize = remeasure.clone();
        listeners.push(EventListener::new(&window, "resize", move |_| on_resize()));
    }
    let body_watch = {
        let remeasure = remeasure.clone();
        BodyResizeWatch::new(move || remeasure())
    };
    tick();
    info!("Horizontal strip pinned with {} panels", panels);

    Box::new(move || {
        drop(listeners);
        drop(body_watch);
        timer.borrow_mut().take();
        controller.borrow_mut().deactivate();
        if let Some(binding) = binding.borrow_mut().take() {
            binding.release();
        }
        registry.refresh();
        debug!("Horizontal strip torn down");
    })
}

#[derive(Properties, PartialEq)]
pub struct HorizontalScrollProps {
    /// Nothing is wired until this is set.
    pub ready: bool,
    /// HUD label per panel.
    #[prop_or_default]
    pub labels: Vec<String>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(HorizontalScrollSection)]
pub fn horizontal_scroll_section(props: &HorizontalScrollProps) -> Html {
    let registry = use_context::<PinRegistry>().unwrap_or_default();
    let is_desktop = use_is_desktop();
    let refs = use_memo(|_| SectionRefs::default(), ());
    let count = props.children.len();

    {
        let refs = (*refs).clone();
        use_effect_with_deps(
            move |(ready, is_desktop, _, labels)| {
                let surfaces = if *ready { refs.surfaces() } else { None };
                let teardown: Box<dyn FnOnce()> = match surfaces {
                    Some(surfaces) => {
                        let pin = surfaces.pin.clone();
                        let strip = surfaces.strip.clone();
                        let mut controller = HorizontalController::new(
                            DomPresenter::new(surfaces),
                            labels.clone(),
                            ScrollTuning::default(),
                        );
                        if *is_desktop {
                            run_desktop(controller, pin, strip, registry)
                        } else {
                            controller.strip_overrides();
                            registry.refresh();
                            debug!("Horizontal strip left in vertical flow");
                            Box::new(move || controller.strip_overrides())
                        }
                    }
                    None => Box::new(|| ()),
                };
                teardown
            },
            (props.ready, is_desktop, count, props.labels.clone()),
        );
    }

    let hidden = (!is_desktop).then_some("hs-hidden");
    let first_label = props.labels.first().cloned().unwrap_or_default();

    html! {
        <div class="hs-root">
            <style>
                {r#"
                    .hs-root { position: relative; }
                    .hs-hidden { display: none; }
                    .hs-viewport.desktop { position: sticky; top: 0; height: 100vh; overflow: hidden; }
                    .hs-strip.desktop { display: flex; height: 100%; }
                    .hs-strip.desktop > div {
                        flex: 0 0 100vw;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        overflow-y: auto;
                    }
                    .hs-strip.flow { display: flex; flex-direction: column; }
                    .hs-overlay {
                        position: absolute;
                        inset: 0;
                        z-index: 40;
                        pointer-events: none;
                        background: #FF4D30;
                        opacity: 0;
                    }
                    .hs-progress {
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 1.5px;
                        background: #e5e7eb;
                        z-index: 50;
                    }
                    .hs-progress-fill {
                        height: 100%;
                        background: #FF4D30;
                        transform-origin: left;
                        transform: scaleX(0);
                    }
                    .hs-progress-dot {
                        position: absolute;
                        top: -3px;
                        left: 0;
                        width: 100%;
                        transform: translateX(0%);
                        pointer-events: none;
                    }
                    .hs-progress-dot::before {
                        content: '';
                        position: absolute;
                        left: -3.5px;
                        width: 7px;
                        height: 7px;
                        border-radius: 50%;
                        background: #FF4D30;
                    }
                    .hs-hud {
                        position: absolute;
                        bottom: 1.75rem;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0 4rem;
                        pointer-events: none;
                    }
                    .hs-hud-label {
                        display: block;
                        font-size: 10px;
                        font-weight: 700;
                        letter-spacing: 0.25em;
                        text-transform: uppercase;
                        color: #9ca3af;
                    }
                    .hs-hud-counter { font-size: 1.5rem; font-family: serif; color: #111827; }
                    .hs-hud-total { font-size: 0.75rem; color: #d1d5db; margin-left: 0.25rem; }
                "#}
            </style>
            <div ref={refs.pin.clone()} class="hs-pin">
                <div class={classes!("hs-viewport", is_desktop.then_some("desktop"))}>
                    <div ref={refs.overlay.clone()} class={classes!("hs-overlay", hidden)}></div>
                    <div class={classes!("hs-progress", hidden)}>
                        <div ref={refs.bar.clone()} class="hs-progress-fill"></div>
                        <div ref={refs.dot.clone()} class="hs-progress-dot"></div>
                    </div>
                    <div class={classes!("hs-hud", hidden)}>
                        <div style="overflow: hidden;">
                            <span ref={refs.label.clone()} class="hs-hud-label">{first_label}</span>
                        </div>
                        <div>
                            <span ref={refs.counter.clone()} class="hs-hud-counter">{"01"}</span>
                            <span class="hs-hud-total">{format!("/{:02}", count)}</span>
                        </div>
                    </div>
                    <div
                        ref={refs.strip.clone()}
                        class={classes!("hs-strip", if is_desktop { "desktop" } else { "flow" })}
                    >
                        { for props.children.iter() }
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HorizontalPanelProps {
    /// Navigation identifier; the panel's `section` carries it as its id.
    pub id: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// One panel of the strip. Its content should be a single `section` with the
/// same id so both the controller and the navigation resolver can find it.
#[function_component(HorizontalPanel)]
pub fn horizontal_panel(props: &HorizontalPanelProps) -> Html {
    html! {
        <div data-horizontal-slide={props.id.clone()}>
            { for props.children.iter() }
        </div>
    }
}
