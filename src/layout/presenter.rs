use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Presentation outputs the horizontal controller writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    Strip,
    /// Wrapper whose height provides the pinned scroll distance.
    Pin,
    Panel(usize),
    PanelContent(usize),
    ProgressBar,
    ProgressDot,
    Counter,
    Label,
    Overlay,
}

pub trait Presenter {
    fn panel_count(&self) -> usize;
    fn set_style(&self, surface: Surface, property: &str, value: &str);
    /// Removes every inline style from `surface`.
    fn clear_styles(&self, surface: Surface);
    fn set_text(&self, surface: Surface, text: &str);
    /// Commits pending style writes so the next write starts a transition.
    fn flush(&self, surface: Surface);
}

pub struct DomSurfaces {
    pub pin: HtmlElement,
    pub strip: HtmlElement,
    pub bar: Option<HtmlElement>,
    pub dot: Option<HtmlElement>,
    pub counter: Option<HtmlElement>,
    pub label: Option<HtmlElement>,
    pub overlay: Option<HtmlElement>,
}

struct DomPanel {
    frame: HtmlElement,
    content: Option<HtmlElement>,
}

/// Writes straight into inline styles of the rendered section.
pub struct DomPresenter {
    surfaces: DomSurfaces,
    panels: Vec<DomPanel>,
}

impl DomPresenter {
    /// Panels are the strip's direct children; each one's content is its first
    /// `section`.
    pub fn new(surfaces: DomSurfaces) -> Self {
        let children = surfaces.strip.children();
        let panels = (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
            .map(|frame| {
                let content = frame
                    .query_selector("section")
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                DomPanel { frame, content }
            })
            .collect();

        Self { surfaces, panels }
    }

    fn element(&self, surface: Surface) -> Option<&HtmlElement> {
        match surface {
            Surface::Strip => Some(&self.surfaces.strip),
            Surface::Pin => Some(&self.surfaces.pin),
            Surface::Panel(i) => self.panels.get(i).map(|p| &p.frame),
            Surface::PanelContent(i) => self.panels.get(i).and_then(|p| p.content.as_ref()),
            Surface::ProgressBar => self.surfaces.bar.as_ref(),
            Surface::ProgressDot => self.surfaces.dot.as_ref(),
            Surface::Counter => self.surfaces.counter.as_ref(),
            Surface::Label => self.surfaces.label.as_ref(),
            Surface::Overlay => self.surfaces.overlay.as_ref(),
        }
    }
}

impl Presenter for DomPresenter {
    fn panel_count(&self) -> usize {
        self.panels.len()
    }

    fn set_style(&self, surface: Surface, property: &str, value: &str) {
        if let Some(el) = self.element(surface) {
            let _ = el.style().set_property(property, value);
        }
    }

    fn clear_styles(&self, surface: Surface) {
        if let Some(el) = self.element(surface) {
            let _ = el.remove_attribute("style");
        }
    }

    fn set_text(&self, surface: Surface, text: &str) {
        if let Some(el) = self.element(surface) {
            el.set_text_content(Some(text));
        }
    }

    fn flush(&self, surface: Surface) {
        if let Some(el) = self.element(surface) {
            // Reading layout forces the browser to apply queued style changes.
            let _ = el.offset_height();
        }
    }
}
