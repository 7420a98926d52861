use log::Level;

/// Narrowest viewport width (px) that gets the pinned horizontal strip.
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;
pub const DESKTOP_QUERY: &str = "(min-width: 768px)";

/// Registry key of the pinned horizontal section.
pub const HORIZONTAL_PIN_KEY: &str = "horizontal-sections";

/// Scroll distance after which the header switches to its compact look.
pub const HEADER_SCROLL_THRESHOLD: f64 = 30.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose lifecycle logging while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// A buffer expressed as a share of the viewport height, clamped to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBuffer {
    pub ratio: f64,
    pub min_px: f64,
    pub max_px: f64,
}

impl ViewportBuffer {
    pub fn resolve(&self, viewport_height: f64) -> f64 {
        (viewport_height * self.ratio).max(self.min_px).min(self.max_px)
    }
}

/// Presentation parameters of the horizontal section.
///
/// None of these carry semantic weight; `falloff` in particular only widens or
/// narrows the blending window between neighbouring panels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTuning {
    pub falloff: f64,
    pub min_scale: f64,
    pub max_blur_px: f64,
    pub min_opacity: f64,
    pub overlay_max_opacity: f64,
    pub entry_buffer: ViewportBuffer,
    pub edge_buffer: ViewportBuffer,
    pub label_exit_ms: u32,
    pub label_enter_ms: u32,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            falloff: 1.6,
            min_scale: 0.95,
            max_blur_px: 8.0,
            min_opacity: 0.2,
            overlay_max_opacity: 0.08,
            entry_buffer: ViewportBuffer { ratio: 0.12, min_px: 48.0, max_px: 120.0 },
            edge_buffer: ViewportBuffer { ratio: 0.08, min_px: 24.0, max_px: 64.0 },
            label_exit_ms: 180,
            label_enter_ms: 220,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_clamp_to_their_pixel_range() {
        let tuning = ScrollTuning::default();
        assert_eq!(tuning.entry_buffer.resolve(200.0), 48.0);
        assert_eq!(tuning.entry_buffer.resolve(2000.0), 120.0);
        assert!((tuning.edge_buffer.resolve(500.0) - 40.0).abs() < 1e-9);
        assert_eq!(tuning.edge_buffer.resolve(1000.0), 64.0);
    }
}
