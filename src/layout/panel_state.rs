//! Progress-to-presentation mapping for the horizontal strip.
//!
//! Everything here is pure: a progress value and a panel count go in, the
//! complete visual state of one scroll tick comes out.

use crate::config::ScrollTuning;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelVisual {
    /// Share of the panel hidden from the right edge, in percent.
    pub clip_right: f64,
    pub scale: f64,
    pub blur: f64,
    pub opacity: f64,
}

impl PanelVisual {
    /// Panel 0 before the first tick.
    pub fn revealed() -> Self {
        Self { clip_right: 0.0, scale: 1.0, blur: 0.0, opacity: 1.0 }
    }

    /// Every other panel before the first tick.
    pub fn concealed(tuning: &ScrollTuning) -> Self {
        Self {
            clip_right: 100.0,
            scale: tuning.min_scale,
            blur: tuning.max_blur_px,
            opacity: tuning.min_opacity,
        }
    }

    pub fn clip_path(&self) -> String {
        format!("inset(0 {:.1}% 0 0)", self.clip_right)
    }

    pub fn transform(&self) -> String {
        format!("scale({:.4})", self.scale)
    }

    pub fn filter(&self) -> String {
        format!("blur({:.1}px)", self.blur)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameState {
    pub bar_fill: f64,
    pub dot_percent: f64,
    pub index: usize,
    pub counter: String,
    pub label: Option<String>,
    pub overlay_opacity: f64,
    /// Horizontal translation of the strip in px (zero or negative).
    pub strip_shift: f64,
    pub panels: Vec<PanelVisual>,
}

/// Index of the panel nearest to `progress`, always within `[0, count - 1]`.
pub fn current_index(progress: f64, count: usize) -> usize {
    if count <= 1 {
        return 0;
    }
    let last = count - 1;
    let raw = (progress.clamp(0.0, 1.0) * last as f64).round();
    (raw.max(0.0) as usize).min(last)
}

/// Progress value at which panel `index` is centred.
pub fn panel_center(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    index as f64 / (count - 1) as f64
}

pub fn panel_visual(progress: f64, index: usize, count: usize, tuning: &ScrollTuning) -> PanelVisual {
    let center = panel_center(index, count);
    let steps = count.saturating_sub(1) as f64;
    let distance = (progress - center).abs();
    let visible = (1.0 - distance * steps * tuning.falloff).max(0.0);
    let clip_right = if progress >= center {
        0.0
    } else {
        (100.0 - visible * 100.0).max(0.0)
    };

    PanelVisual {
        clip_right,
        scale: tuning.min_scale + (1.0 - tuning.min_scale) * visible,
        blur: tuning.max_blur_px * (1.0 - visible),
        opacity: tuning.min_opacity + (1.0 - tuning.min_opacity) * visible,
    }
}

/// HUD counter text: one-based and zero-padded to two digits.
pub fn counter_text(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub fn frame_for(
    progress: f64,
    count: usize,
    labels: &[String],
    travel: f64,
    tuning: &ScrollTuning,
) -> FrameState {
    let p = progress.clamp(0.0, 1.0);
    let index = current_index(p, count);

    FrameState {
        bar_fill: p,
        dot_percent: p * 100.0,
        index,
        counter: counter_text(index),
        label: labels.get(index).filter(|label| !label.is_empty()).cloned(),
        overlay_opacity: p * tuning.overlay_max_opacity,
        strip_shift: -(p * travel.max(0.0)),
        panels: (0..count).map(|i| panel_visual(p, i, count, tuning)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn assert_fully_revealed(visual: PanelVisual) {
        assert_eq!(visual.clip_right, 0.0);
        assert!(close(visual.scale, 1.0), "scale {}", visual.scale);
        assert!(close(visual.blur, 0.0), "blur {}", visual.blur);
        assert!(close(visual.opacity, 1.0), "opacity {}", visual.opacity);
    }

    #[test]
    fn index_stays_in_bounds_for_any_count() {
        for count in 1..=12 {
            for step in 0..=100 {
                let p = f64::from(step) / 100.0;
                assert!(current_index(p, count) < count, "count={} p={}", count, p);
            }
            assert_eq!(current_index(-0.5, count), 0);
            assert_eq!(current_index(1.5, count), count - 1);
        }
    }

    #[test]
    fn index_rounds_to_the_nearest_panel() {
        assert_eq!(current_index(0.24, 3), 0);
        assert_eq!(current_index(0.26, 3), 1);
        assert_eq!(current_index(0.8, 3), 2);
    }

    #[test]
    fn single_panel_is_always_fully_visible() {
        let tuning = ScrollTuning::default();
        for step in 0..=10 {
            let p = f64::from(step) / 10.0;
            assert_fully_revealed(panel_visual(p, 0, 1, &tuning));
        }
    }

    #[test]
    fn upcoming_panel_reveals_as_progress_approaches() {
        let tuning = ScrollTuning::default();
        let far = panel_visual(0.0, 1, 2, &tuning);
        let near = panel_visual(0.5, 1, 2, &tuning);
        let there = panel_visual(1.0, 1, 2, &tuning);

        assert_eq!(far.clip_right, 100.0);
        assert!(close(near.clip_right, 80.0));
        assert!(close(near.opacity, 0.2 + 0.8 * 0.2));
        assert_fully_revealed(there);
    }

    #[test]
    fn passed_panels_stay_unclipped_but_fade() {
        let tuning = ScrollTuning::default();
        let passed = panel_visual(1.0, 0, 2, &tuning);
        assert_eq!(passed.clip_right, 0.0);
        assert_eq!(passed.opacity, tuning.min_opacity);
        assert_eq!(passed.blur, tuning.max_blur_px);
    }

    #[test]
    fn bar_and_dot_follow_progress_monotonically() {
        let tuning = ScrollTuning::default();
        let labels: Vec<String> = Vec::new();
        let mut previous = frame_for(0.0, 4, &labels, 2400.0, &tuning);
        for step in 1..=50 {
            let frame = frame_for(f64::from(step) / 50.0, 4, &labels, 2400.0, &tuning);
            assert!(frame.bar_fill >= previous.bar_fill);
            assert!(frame.dot_percent >= previous.dot_percent);
            assert!(frame.strip_shift <= previous.strip_shift);
            previous = frame;
        }
        assert_eq!(previous.dot_percent, 100.0);
        assert_eq!(previous.strip_shift, -2400.0);
    }

    #[test]
    fn frame_reports_counter_label_and_overlay() {
        let tuning = ScrollTuning::default();
        let labels = vec!["Soluciones".to_string(), "Manifiesto".to_string()];
        let frame = frame_for(0.75, 2, &labels, 1280.0, &tuning);

        assert_eq!(frame.index, 1);
        assert_eq!(frame.counter, "02");
        assert_eq!(frame.label.as_deref(), Some("Manifiesto"));
        assert!(close(frame.overlay_opacity, 0.06));
        assert_eq!(frame.panels.len(), 2);
    }

    #[test]
    fn missing_labels_yield_none() {
        let tuning = ScrollTuning::default();
        let labels = vec!["Only first".to_string()];
        assert_eq!(frame_for(1.0, 3, &labels, 0.0, &tuning).label, None);
    }

    #[test]
    fn css_values_are_formatted_for_the_dom() {
        let visual = PanelVisual { clip_right: 42.345, scale: 0.975, blur: 3.26, opacity: 0.6 };
        assert_eq!(visual.clip_path(), "inset(0 42.3% 0 0)");
        assert_eq!(visual.transform(), "scale(0.9750)");
        assert_eq!(visual.filter(), "blur(3.3px)");
    }
}
