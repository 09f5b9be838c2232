//! MemoryStage - headless `Stage` that records every write
//!
//! Page elements are seeded per selector with `with_elements`; spawned
//! particles get fresh ids. Nothing is rendered.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::Stage;
use crate::primitives::{Keyframes, Point};

#[derive(Debug, Default)]
pub struct MemoryStage {
    next_id: usize,
    /// `<style>` ids in insertion order
    pub styles: Vec<String>,
    /// Spawned elements still attached
    pub live: BTreeMap<usize, String>,
    /// Inline style of every element ever appended, in order
    pub spawned: Vec<String>,
    pub removed: Vec<usize>,
    selectors: HashMap<String, Vec<usize>>,
    centers: HashMap<usize, Point>,
    props: HashMap<(usize, String), String>,
    pub root_classes: BTreeSet<String>,
}

impl MemoryStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `count` page elements matching `selector`
    pub fn with_elements(mut self, selector: &str, count: usize) -> Self {
        for i in 0..count {
            let id = self.fresh_id();
            self.centers.insert(id, Point::new(100.0 * (i + 1) as f32, 50.0));
            self.selectors.entry(selector.to_string()).or_default().push(id);
        }
        self
    }

    pub fn elements(&self, selector: &str) -> Vec<usize> {
        self.selectors.get(selector).cloned().unwrap_or_default()
    }

    fn fresh_id(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    /// How many elements of this kind were ever appended
    pub fn spawned_of(&self, kind: Keyframes) -> usize {
        let needle = format!("animation: {} ", kind.name());
        self.spawned.iter().filter(|css| css.contains(&needle)).count()
    }

    /// How many elements of this kind are still attached
    pub fn live_of(&self, kind: Keyframes) -> usize {
        let needle = format!("animation: {} ", kind.name());
        self.live.values().filter(|css| css.contains(&needle)).count()
    }

    pub fn style_count(&self, id: &str) -> usize {
        self.styles.iter().filter(|s| s.as_str() == id).count()
    }
}

impl Stage for MemoryStage {
    type Node = usize;

    fn has_style(&self, id: &str) -> bool {
        self.styles.iter().any(|s| s == id)
    }

    fn insert_style(&mut self, id: &str, _css: &str) {
        self.styles.push(id.to_string());
    }

    fn append(&mut self, css: &str) -> Option<usize> {
        let id = self.fresh_id();
        self.live.insert(id, css.to_string());
        self.spawned.push(css.to_string());
        Some(id)
    }

    fn remove(&mut self, node: &usize) {
        if self.live.remove(node).is_some() {
            self.removed.push(*node);
        }
    }

    fn query_all(&self, selector: &str) -> Vec<usize> {
        self.elements(selector)
    }

    fn center_of(&self, node: &usize) -> Option<Point> {
        self.centers.get(node).copied()
    }

    fn style(&self, node: &usize, prop: &str) -> String {
        self.props
            .get(&(*node, prop.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    fn set_style(&mut self, node: &usize, prop: &str, value: &str) {
        let key = (*node, prop.to_string());
        if value.is_empty() {
            self.props.remove(&key);
        } else {
            self.props.insert(key, value.to_string());
        }
    }

    fn add_root_class(&mut self, class: &str) {
        self.root_classes.insert(class.to_string());
    }

    fn remove_root_class(&mut self, class: &str) {
        self.root_classes.remove(class);
    }

    fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_elements_are_live_until_removed() {
        let mut stage = MemoryStage::new();
        let node = stage.append("animation: petalFall 4s ease-in forwards;").unwrap();
        assert_eq!(stage.live_of(Keyframes::PetalFall), 1);
        stage.remove(&node);
        stage.remove(&node);
        assert_eq!(stage.live_of(Keyframes::PetalFall), 0);
        assert_eq!(stage.removed, vec![node]);
        assert_eq!(stage.spawned_of(Keyframes::PetalFall), 1);
    }

    #[test]
    fn empty_value_clears_property() {
        let mut stage = MemoryStage::new().with_elements(".flower", 1);
        let flower = stage.query(".flower").unwrap();
        stage.set_style(&flower, "filter", "brightness(1.1)");
        assert_eq!(stage.style(&flower, "filter"), "brightness(1.1)");
        stage.set_style(&flower, "filter", "");
        assert_eq!(stage.style(&flower, "filter"), "");
    }

    #[test]
    fn unknown_selector_is_empty() {
        assert!(MemoryStage::new().query_all(".butterfly").is_empty());
    }
}
