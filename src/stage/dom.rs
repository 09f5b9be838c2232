//! DomStage - `Stage` over the live browser document

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::Stage;
use crate::error::GardenError;
use crate::primitives::Point;

pub struct DomStage {
    document: Document,
    body: HtmlElement,
}

impl DomStage {
    pub fn attach() -> Result<Self, GardenError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(GardenError::NoWindow)?;
        let body = document.body().ok_or(GardenError::MissingNode("body"))?;
        Ok(Self { document, body })
    }

    pub fn body(&self) -> &HtmlElement {
        &self.body
    }
}

impl Stage for DomStage {
    type Node = HtmlElement;

    fn has_style(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn insert_style(&mut self, id: &str, css: &str) {
        let Some(head) = self.document.head() else {
            return;
        };
        let Ok(style) = self.document.create_element("style") else {
            return;
        };
        style.set_id(id);
        style.set_text_content(Some(css));
        let _ = head.append_child(&style);
    }

    fn append(&mut self, css: &str) -> Option<HtmlElement> {
        let el = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        el.style().set_css_text(css);
        self.body.append_child(&el).ok()?;
        Some(el)
    }

    fn remove(&mut self, node: &HtmlElement) {
        if node.parent_node().is_some() {
            node.remove();
        }
    }

    fn query_all(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn center_of(&self, node: &HtmlElement) -> Option<Point> {
        let rect = node.get_bounding_client_rect();
        Some(Point::center_of(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ))
    }

    fn style(&self, node: &HtmlElement, prop: &str) -> String {
        node.style().get_property_value(prop).unwrap_or_default()
    }

    fn set_style(&mut self, node: &HtmlElement, prop: &str, value: &str) {
        let style = node.style();
        if value.is_empty() {
            let _ = style.remove_property(prop);
        } else {
            let _ = style.set_property(prop, value);
        }
    }

    fn add_root_class(&mut self, class: &str) {
        let _ = self.body.class_list().add_1(class);
    }

    fn remove_root_class(&mut self, class: &str) {
        let _ = self.body.class_list().remove_1(class);
    }

    fn has_root_class(&self, class: &str) -> bool {
        self.body.class_list().contains(class)
    }
}
