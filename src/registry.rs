//! Style registry - keyframe rules are injected at most once per kind

use std::collections::HashSet;

use crate::primitives::Keyframes;
use crate::stage::Stage;

#[derive(Debug, Default)]
pub struct StyleRegistry {
    installed: HashSet<Keyframes>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure the rule for `kind` is in the document.
    /// Returns true only when this call inserted it.
    pub fn ensure<S: Stage>(&mut self, stage: &mut S, kind: Keyframes) -> bool {
        if self.installed.contains(&kind) {
            return false;
        }
        // The page may already carry the rule (e.g. after a hot reload)
        let inserted = !stage.has_style(kind.style_id());
        if inserted {
            stage.insert_style(kind.style_id(), kind.css());
        }
        self.installed.insert(kind);
        inserted
    }

    pub fn is_installed(&self, kind: Keyframes) -> bool {
        self.installed.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.installed.len()
    }
}
