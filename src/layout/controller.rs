use log::debug;

use crate::config::ScrollTuning;
use crate::layout::label::{LabelStep, LabelTransition};
use crate::layout::panel_state::{counter_text, frame_for, PanelVisual};
use crate::layout::presenter::{Presenter, Surface};

/// Drives the pinned horizontal strip through a [`Presenter`].
///
/// The controller holds no DOM handles and no listeners; the owning component
/// feeds it progress values and label completions.
pub struct HorizontalController<P: Presenter> {
    presenter: P,
    labels: Vec<String>,
    tuning: ScrollTuning,
    label: LabelTransition,
    /// Panel the HUD counter currently shows.
    shown_index: Option<usize>,
    active: bool,
}

impl<P: Presenter> HorizontalController<P> {
    pub fn new(presenter: P, labels: Vec<String>, tuning: ScrollTuning) -> Self {
        let first = labels.first().cloned().unwrap_or_default();
        Self {
            presenter,
            labels,
            tuning,
            label: LabelTransition::new(first),
            shown_index: None,
            active: false,
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn panel_count(&self) -> usize {
        self.presenter.panel_count()
    }

    /// Puts every surface in its pre-scroll state: first panel revealed, the
    /// rest clipped away and de-emphasised.
    pub fn activate(&mut self, travel: f64) {
        self.strip_overrides();
        let p = &self.presenter;

        p.set_style(Surface::Strip, "will-change", "transform");
        p.set_style(Surface::Strip, "transform", "translate3d(0px, 0, 0)");
        for i in 0..p.panel_count() {
            let visual = if i == 0 {
                PanelVisual::revealed()
            } else {
                PanelVisual::concealed(&self.tuning)
            };
            write_panel(p, i, &visual);
        }

        p.set_style(Surface::ProgressBar, "transform", "scaleX(0)");
        p.set_style(Surface::ProgressDot, "transform", "translateX(0%)");
        p.set_style(Surface::Overlay, "opacity", "0");
        p.set_text(Surface::Counter, &counter_text(0));
        self.shown_index = Some(0);
        p.set_text(Surface::Label, self.label.shown());

        self.relayout(travel);
        self.active = true;
        debug!("Horizontal strip activated with {} panels", p.panel_count());
    }

    /// Resizes the pin wrapper for a new strip travel distance.
    pub fn relayout(&self, travel: f64) {
        self.presenter.set_style(
            Surface::Pin,
            "height",
            &format!("calc(100vh + {:.0}px)", travel.max(0.0)),
        );
    }

    /// Presents one scroll tick. Returns the label phase that has to be timed
    /// when the HUD label starts changing.
    pub fn apply(&mut self, progress: f64, travel: f64) -> Option<LabelStep> {
        if !self.active {
            return None;
        }
        let count = self.presenter.panel_count();
        let frame = frame_for(progress, count, &self.labels, travel, &self.tuning);
        let p = &self.presenter;

        p.set_style(Surface::ProgressBar, "transform", &format!("scaleX({})", frame.bar_fill));
        p.set_style(
            Surface::ProgressDot,
            "transform",
            &format!("translateX({}%)", frame.dot_percent),
        );
        p.set_style(
            Surface::Strip,
            "transform",
            &format!("translate3d({}px, 0, 0)", frame.strip_shift),
        );
        for (i, visual) in frame.panels.iter().enumerate() {
            write_panel(p, i, visual);
        }
        p.set_style(Surface::Overlay, "opacity", &frame.overlay_opacity.to_string());

        if self.shown_index != Some(frame.index) {
            p.set_text(Surface::Counter, &frame.counter);
            self.shown_index = Some(frame.index);
        }

        let step = self.label.request(frame.label.as_deref()?)?;
        let exit = self.tuning.label_exit_ms;
        p.set_style(
            Surface::Label,
            "transition",
            &format!("transform {exit}ms ease-in, opacity {exit}ms ease-in"),
        );
        p.set_style(Surface::Label, "transform", "translateY(-8px)");
        p.set_style(Surface::Label, "opacity", "0");
        Some(step)
    }

    pub fn label_exit_finished(&mut self, generation: u64) -> Option<LabelStep> {
        if !self.active {
            return None;
        }
        let (step, text) = self.label.exit_finished(generation)?;
        let p = &self.presenter;
        let enter = self.tuning.label_enter_ms;

        p.set_style(Surface::Label, "transition", "none");
        p.set_style(Surface::Label, "transform", "translateY(8px)");
        p.set_style(Surface::Label, "opacity", "0");
        p.set_text(Surface::Label, &text);
        p.flush(Surface::Label);
        p.set_style(
            Surface::Label,
            "transition",
            &format!("transform {enter}ms ease-out, opacity {enter}ms ease-out"),
        );
        p.set_style(Surface::Label, "transform", "translateY(0px)");
        p.set_style(Surface::Label, "opacity", "1");
        Some(step)
    }

    pub fn label_enter_finished(&mut self, generation: u64) {
        if self.label.enter_finished(generation) {
            self.presenter.set_style(Surface::Label, "transition", "none");
        }
    }

    #[cfg(test)]
    pub fn label(&self) -> &LabelTransition {
        &self.label
    }

    /// Returns every surface to its unstyled, in-flow state.
    pub fn deactivate(&mut self) {
        self.strip_overrides();
        self.shown_index = None;
        self.active = false;
        debug!("Horizontal strip deactivated");
    }

    /// Removes all inline overrides the controller may have written.
    pub fn strip_overrides(&mut self) {
        let first = self.labels.first().cloned().unwrap_or_default();
        self.label.reset(first);

        let p = &self.presenter;
        p.clear_styles(Surface::Strip);
        p.clear_styles(Surface::Pin);
        for i in 0..p.panel_count() {
            p.clear_styles(Surface::Panel(i));
            p.clear_styles(Surface::PanelContent(i));
        }
        p.clear_styles(Surface::ProgressBar);
        p.clear_styles(Surface::ProgressDot);
        p.clear_styles(Surface::Overlay);
        p.clear_styles(Surface::Label);
        p.set_text(Surface::Label, self.label.shown());
    }
}

fn write_panel<P: Presenter>(presenter: &P, index: usize, visual: &PanelVisual) {
    presenter.set_style(Surface::Panel(index), "clip-path", &visual.clip_path());
    let content = Surface::PanelContent(index);
    presenter.set_style(content, "transform", &visual.transform());
    presenter.set_style(content, "filter", &visual.filter());
    presenter.set_style(content, "opacity", &format!("{:.3}", visual.opacity));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::label::{LabelPhase, LabelStepKind};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, HashMap};

    #[derive(Default)]
    struct RecordingPresenter {
        panels: usize,
        styles: RefCell<HashMap<Surface, BTreeMap<String, String>>>,
        texts: RefCell<HashMap<Surface, String>>,
    }

    impl RecordingPresenter {
        fn with_panels(panels: usize) -> Self {
            Self { panels, ..Self::default() }
        }

        fn style(&self, surface: Surface, property: &str) -> Option<String> {
            self.styles
                .borrow()
                .get(&surface)
                .and_then(|props| props.get(property).cloned())
        }

        fn text(&self, surface: Surface) -> Option<String> {
            self.texts.borrow().get(&surface).cloned()
        }

        fn styled_surfaces(&self) -> Vec<Surface> {
            self.styles
                .borrow()
                .iter()
                .filter(|(_, props)| !props.is_empty())
                .map(|(surface, _)| *surface)
                .collect()
        }

        fn snapshot(&self) -> Vec<(String, BTreeMap<String, String>)> {
            let mut all: Vec<_> = self
                .styles
                .borrow()
                .iter()
                .map(|(surface, props)| (format!("{:?}", surface), props.clone()))
                .collect();
            all.sort();
            all
        }
    }

    impl Presenter for RecordingPresenter {
        fn panel_count(&self) -> usize {
            self.panels
        }

        fn set_style(&self, surface: Surface, property: &str, value: &str) {
            self.styles
                .borrow_mut()
                .entry(surface)
                .or_default()
                .insert(property.to_string(), value.to_string());
        }

        fn clear_styles(&self, surface: Surface) {
            self.styles.borrow_mut().remove(&surface);
        }

        fn set_text(&self, surface: Surface, text: &str) {
            self.texts.borrow_mut().insert(surface, text.to_string());
        }

        fn flush(&self, _surface: Surface) {}
    }

    fn labels() -> Vec<String> {
        vec!["Soluciones Ejecutivas".to_string(), "Manifiesto 2026".to_string()]
    }

    fn controller(panels: usize) -> HorizontalController<RecordingPresenter> {
        HorizontalController::new(
            RecordingPresenter::with_panels(panels),
            labels(),
            ScrollTuning::default(),
        )
    }

    #[test]
    fn activation_reveals_only_the_first_panel() {
        let mut ctl = controller(3);
        ctl.activate(2560.0);
        let p = &ctl.presenter;

        assert_eq!(p.style(Surface::Panel(0), "clip-path").as_deref(), Some("inset(0 0.0% 0 0)"));
        assert_eq!(p.style(Surface::Panel(1), "clip-path").as_deref(), Some("inset(0 100.0% 0 0)"));
        assert_eq!(p.style(Surface::Panel(2), "clip-path").as_deref(), Some("inset(0 100.0% 0 0)"));
        assert_eq!(p.style(Surface::PanelContent(2), "filter").as_deref(), Some("blur(8.0px)"));
        assert_eq!(p.style(Surface::PanelContent(2), "opacity").as_deref(), Some("0.200"));
        assert_eq!(p.style(Surface::Pin, "height").as_deref(), Some("calc(100vh + 2560px)"));
        assert_eq!(p.text(Surface::Counter).as_deref(), Some("01"));
        assert_eq!(p.text(Surface::Label).as_deref(), Some("Soluciones Ejecutivas"));
    }

    #[test]
    fn tick_updates_progress_counter_and_strip() {
        let mut ctl = controller(2);
        ctl.activate(1280.0);
        ctl.apply(1.0, 1280.0);
        let p = &ctl.presenter;

        assert_eq!(p.style(Surface::ProgressBar, "transform").as_deref(), Some("scaleX(1)"));
        assert_eq!(p.style(Surface::ProgressDot, "transform").as_deref(), Some("translateX(100%)"));
        assert_eq!(p.style(Surface::Strip, "transform").as_deref(), Some("translate3d(-1280px, 0, 0)"));
        assert_eq!(p.style(Surface::Panel(1), "clip-path").as_deref(), Some("inset(0 0.0% 0 0)"));
        assert_eq!(p.text(Surface::Counter).as_deref(), Some("02"));
    }

    #[test]
    fn counter_is_rewritten_only_when_the_panel_changes() {
        let mut ctl = controller(3);
        ctl.activate(2560.0);
        ctl.apply(0.5, 2560.0);
        assert_eq!(ctl.presenter.text(Surface::Counter).as_deref(), Some("02"));

        ctl.presenter.set_text(Surface::Counter, "untouched");
        ctl.apply(0.55, 2560.0);
        assert_eq!(ctl.presenter.text(Surface::Counter).as_deref(), Some("untouched"));

        ctl.apply(1.0, 2560.0);
        assert_eq!(ctl.presenter.text(Surface::Counter).as_deref(), Some("03"));
    }

    #[test]
    fn label_change_runs_exit_then_enter() {
        let mut ctl = controller(2);
        ctl.activate(1280.0);

        let exit = ctl.apply(0.9, 1280.0).expect("label starts exiting");
        assert_eq!(exit.kind, LabelStepKind::Exit);
        assert_eq!(ctl.presenter.style(Surface::Label, "opacity").as_deref(), Some("0"));
        assert_eq!(
            ctl.presenter.text(Surface::Label).as_deref(),
            Some("Soluciones Ejecutivas")
        );
        assert_eq!(ctl.apply(0.95, 1280.0), None);

        let enter = ctl.label_exit_finished(exit.generation).expect("text swapped");
        assert_eq!(enter.kind, LabelStepKind::Enter);
        assert_eq!(ctl.presenter.text(Surface::Label).as_deref(), Some("Manifiesto 2026"));
        assert_eq!(ctl.presenter.style(Surface::Label, "opacity").as_deref(), Some("1"));

        ctl.label_enter_finished(enter.generation);
        assert_eq!(ctl.label().phase(), &LabelPhase::Idle);
    }

    #[test]
    fn inactive_controller_ignores_ticks() {
        let mut ctl = controller(2);
        assert_eq!(ctl.apply(0.5, 100.0), None);
        assert!(ctl.presenter.styled_surfaces().is_empty());
    }

    #[test]
    fn deactivation_leaves_no_inline_overrides() {
        let mut ctl = controller(3);
        ctl.activate(2560.0);
        ctl.apply(0.6, 2560.0);
        ctl.deactivate();

        assert!(!ctl.is_active());
        assert_eq!(ctl.presenter.styled_surfaces(), Vec::<Surface>::new());
    }

    #[test]
    fn activation_round_trip_is_idempotent() {
        let mut ctl = controller(3);
        ctl.activate(2560.0);
        let first = ctl.presenter.snapshot();

        ctl.apply(0.4, 2560.0);
        ctl.deactivate();
        ctl.activate(2560.0);
        ctl.deactivate();
        ctl.activate(2560.0);

        assert_eq!(ctl.presenter.snapshot(), first);
    }

    #[test]
    fn stale_label_completion_after_deactivation_is_ignored() {
        let mut ctl = controller(2);
        ctl.activate(1280.0);
        let exit = ctl.apply(1.0, 1280.0).expect("label starts exiting");
        ctl.deactivate();

        assert_eq!(ctl.label_exit_finished(exit.generation), None);
        assert_eq!(
            ctl.presenter.text(Surface::Label).as_deref(),
            Some("Soluciones Ejecutivas")
        );
    }
}
