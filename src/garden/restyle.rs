//! Temporary inline-style changes on page elements
//!
//! Transform changes are appended as a suffix and later stripped, so
//! whatever transform the page itself set survives the effect.

use super::{Garden, Job};
use crate::stage::Stage;

/// One step of undoing a temporary change
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Revert {
    /// Reset the property to empty
    Clear(&'static str),
    /// Put back the value captured before the change
    Restore(&'static str, String),
    /// Remove a transform suffix
    Strip(&'static str),
}

/// `current` with `suffix` appended as one more transform function
pub(crate) fn with_suffix(current: &str, suffix: &str) -> String {
    let current = current.trim();
    if current.is_empty() {
        suffix.to_string()
    } else {
        format!("{current} {suffix}")
    }
}

/// `current` with the last occurrence of `suffix` removed
pub(crate) fn without_suffix(current: &str, suffix: &str) -> String {
    match current.rfind(suffix) {
        Some(pos) => {
            let head = current[..pos].trim_end();
            let tail = current[pos + suffix.len()..].trim_start();
            match (head.is_empty(), tail.is_empty()) {
                (true, _) => tail.to_string(),
                (_, true) => head.to_string(),
                _ => format!("{head} {tail}"),
            }
        }
        None => current.to_string(),
    }
}

impl<S: Stage> Garden<S> {
    pub(super) fn push_transform(&mut self, node: &S::Node, suffix: &str) {
        let current = self.stage.style(node, "transform");
        self.stage.set_style(node, "transform", &with_suffix(&current, suffix));
    }

    pub(super) fn pop_transform(&mut self, node: &S::Node, suffix: &str) {
        let current = self.stage.style(node, "transform");
        self.stage.set_style(node, "transform", &without_suffix(&current, suffix));
    }

    /// Apply `props` and an optional transform suffix now; undo after `hold_ms`.
    /// Props are cleared on undo, not restored.
    pub(super) fn flash(
        &mut self,
        node: S::Node,
        props: &[(&'static str, &str)],
        suffix: Option<&'static str>,
        hold_ms: u64,
    ) {
        let mut edits = Vec::with_capacity(props.len() + 1);
        for &(prop, value) in props {
            self.stage.set_style(&node, prop, value);
            edits.push(Revert::Clear(prop));
        }
        if let Some(suffix) = suffix {
            self.push_transform(&node, suffix);
            edits.push(Revert::Strip(suffix));
        }
        self.timeline.after(hold_ms, Job::Revert { node, edits });
    }

    /// Like `flash` for a single property, but puts the previous value back
    pub(super) fn flash_restoring(&mut self, node: S::Node, prop: &'static str, value: &str, hold_ms: u64) {
        let previous = self.stage.style(&node, prop);
        self.stage.set_style(&node, prop, value);
        self.timeline.after(
            hold_ms,
            Job::Revert { node, edits: vec![Revert::Restore(prop, previous)] },
        );
    }

    pub(super) fn revert(&mut self, node: &S::Node, edits: &[Revert]) {
        for edit in edits {
            match edit {
                Revert::Clear(prop) => self.stage.set_style(node, prop, ""),
                Revert::Restore(prop, value) => self.stage.set_style(node, prop, value),
                Revert::Strip(suffix) => self.pop_transform(node, suffix),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_on_empty_transform() {
        assert_eq!(with_suffix("", "scale(1.1)"), "scale(1.1)");
        assert_eq!(without_suffix("scale(1.1)", "scale(1.1)"), "");
    }

    #[test]
    fn host_transform_survives() {
        let t = with_suffix("rotate(-8deg)", "scale(1.02)");
        assert_eq!(t, "rotate(-8deg) scale(1.02)");
        assert_eq!(without_suffix(&t, "scale(1.02)"), "rotate(-8deg)");
    }

    #[test]
    fn strips_only_the_last_copy() {
        let t = "scale(1.02) rotate(3deg) scale(1.02)";
        assert_eq!(without_suffix(t, "scale(1.02)"), "scale(1.02) rotate(3deg)");
    }

    #[test]
    fn interleaved_effects_unwind_cleanly() {
        let t = with_suffix(&with_suffix("", "scale(1.1)"), "translateY(20vmin) scale(0.8)");
        let t = without_suffix(&t, "scale(1.1)");
        assert_eq!(t, "translateY(20vmin) scale(0.8)");
        assert_eq!(without_suffix(&t, "translateY(20vmin) scale(0.8)"), "");
    }

    #[test]
    fn missing_suffix_is_left_alone() {
        assert_eq!(without_suffix("rotate(1deg)", "scale(2)"), "rotate(1deg)");
    }
}
