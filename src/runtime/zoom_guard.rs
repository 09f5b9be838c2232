//! Zoom guard - keeps pinch and double-tap from zooming the page on phones

use std::cell::Cell;

use web_sys::TouchEvent;
use wasm_bindgen::JsCast;

use super::listeners::listen;
use crate::error::GardenError;

/// Two touch ends closer than this count as a double tap
const DOUBLE_TAP_MS: f64 = 300.0;

#[derive(Debug, Default)]
pub struct TapGuard {
    last_end: Cell<Option<f64>>,
}

impl TapGuard {
    /// Record a touch end at `now`; true if it completes a double tap
    pub fn should_block(&self, now: f64) -> bool {
        let block = self
            .last_end
            .get()
            .is_some_and(|last| now - last <= DOUBLE_TAP_MS);
        self.last_end.set(Some(now));
        block
    }
}

pub(super) fn install() -> Result<(), GardenError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(GardenError::NoWindow)?;

    listen(&document, "gesturestart", false, |event| event.prevent_default())?;

    listen(&document, "touchstart", false, |event| {
        let multi = event
            .dyn_ref::<TouchEvent>()
            .is_some_and(|t| t.touches().length() > 1);
        if multi {
            event.prevent_default();
        }
    })?;

    let guard = TapGuard::default();
    listen(&document, "touchend", false, move |event| {
        if guard.should_block(js_sys::Date::now()) {
            event.prevent_default();
        }
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tap_passes() {
        assert!(!TapGuard::default().should_block(1_000.0));
    }

    #[test]
    fn quick_second_tap_is_blocked() {
        let guard = TapGuard::default();
        guard.should_block(1_000.0);
        assert!(guard.should_block(1_300.0));
        assert!(!guard.should_block(1_601.0));
    }
}
