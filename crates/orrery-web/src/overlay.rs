use orrery_engine::{BodyDescriptor, InfoOverlay, OrreryError, Result};
use wasm_bindgen::JsValue;
use web_sys::Element;

/// CSS class that makes the panel visible.
const VISIBLE_CLASS: &str = "visible";

/// The informational panel, an existing element in the page.
///
/// The Rust side only toggles visibility and publishes the body as data
/// attributes; markup and styling belong to the page.
pub struct DomOverlay {
    element: Element,
}

impl DomOverlay {
    pub fn find(element_id: &str) -> Result<Self> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .ok_or_else(|| OrreryError::MissingOverlay(element_id.to_string()))?;
        Ok(Self { element })
    }

    fn apply(&self, body: &BodyDescriptor) -> std::result::Result<(), JsValue> {
        let facts = serde_json::to_string(&body.facts).unwrap_or_else(|_| "[]".into());
        self.element.set_attribute("data-body", &body.name)?;
        self.element.set_attribute("data-kind", if body.is_star() { "star" } else { "planet" })?;
        self.element.set_attribute("data-facts", &facts)?;
        self.element.class_list().add_1(VISIBLE_CLASS)
    }

    fn clear(&self) -> std::result::Result<(), JsValue> {
        self.element.class_list().remove_1(VISIBLE_CLASS)?;
        self.element.remove_attribute("data-body")?;
        self.element.remove_attribute("data-kind")?;
        self.element.remove_attribute("data-facts")
    }
}

impl InfoOverlay for DomOverlay {
    fn show_info(&mut self, body: &BodyDescriptor) {
        if let Err(e) = self.apply(body) {
            log::warn!("overlay: failed to show {}: {:?}", body.name, e);
        }
    }

    fn hide_info(&mut self) {
        if let Err(e) = self.clear() {
            log::warn!("overlay: failed to hide: {:?}", e);
        }
    }
}
