//! Stage - the boundary between the dispatcher and the host document
//!
//! The dispatcher never touches the DOM directly. Everything it does to
//! the page goes through this trait: append a styled element, remove it,
//! look up page elements by selector, and read or write inline style.
//! Lookups that find nothing return empty results; callers skip.

pub mod dom;
#[cfg(test)]
pub mod memory;

pub use dom::DomStage;
#[cfg(test)]
pub use memory::MemoryStage;

use crate::primitives::Point;

pub trait Stage {
    /// Handle to a live element
    type Node: Clone;

    /// Is a `<style>` element with this id already in the document?
    fn has_style(&self, id: &str) -> bool;

    /// Insert a `<style id=...>` element into the document head
    fn insert_style(&mut self, id: &str, css: &str);

    /// Create a `div` with the given inline style and append it to the body
    fn append(&mut self, css: &str) -> Option<Self::Node>;

    /// Detach an element from its parent; a detached element is left alone
    fn remove(&mut self, node: &Self::Node);

    /// All page elements matching a selector, in document order
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    fn query(&self, selector: &str) -> Option<Self::Node> {
        self.query_all(selector).into_iter().next()
    }

    /// Centre of the element's client rect
    fn center_of(&self, node: &Self::Node) -> Option<Point>;

    /// Inline style property value, empty if unset
    fn style(&self, node: &Self::Node, prop: &str) -> String;

    /// Set an inline style property; an empty value clears it
    fn set_style(&mut self, node: &Self::Node, prop: &str, value: &str);

    fn add_root_class(&mut self, class: &str);

    fn remove_root_class(&mut self, class: &str);

    fn has_root_class(&self, class: &str) -> bool;
}
