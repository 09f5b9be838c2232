//! DOM event listeners feeding the garden

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget, MouseEvent, TouchEvent};

use super::{Clock, SharedGarden, with_garden};
use crate::config::selectors;
use crate::device::EnvSignals;
use crate::error::GardenError;
use crate::garden::Hover;
use crate::primitives::Point;
use crate::stage::Stage;

/// Attach a handler for the page's lifetime; the closure is leaked on purpose
pub(super) fn listen(
    target: &EventTarget,
    kind: &str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), GardenError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Client coordinates of a click, or of the first finger of a touch
fn pointer_point(event: &Event) -> Point {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Point::new(mouse.client_x() as f32, mouse.client_y() as f32);
    }
    event
        .dyn_ref::<TouchEvent>()
        .and_then(|t| t.touches().item(0))
        .map(|touch| Point::new(touch.client_x() as f32, touch.client_y() as f32))
        .unwrap_or(Point::ORIGIN)
}

pub(super) fn install(garden: &SharedGarden, clock: Clock, env: &EnvSignals) -> Result<(), GardenError> {
    let (body, mode) = {
        let g = garden.borrow();
        (g.stage().body().clone(), g.mode())
    };

    // one listener only: touch devices would otherwise see touch and click
    let shared = garden.clone();
    let touch = env.touch;
    listen(&body, env.interaction_event(), false, move |event| {
        if touch && mode.is_mobile() {
            event.prevent_default();
        }
        let at = pointer_point(&event);
        with_garden(&shared, clock, |g| g.interact(at));
    })?;

    let flowers = garden.borrow().stage().query_all(selectors::FLOWER);
    if mode.is_mobile() {
        for flower in flowers {
            let shared = garden.clone();
            let node = flower.clone();
            listen(&flower, "touchstart", false, move |event| {
                event.prevent_default();
                with_garden(&shared, clock, |g| g.touch_flower(&node));
            })?;
        }
        return Ok(());
    }

    for flower in flowers {
        for (kind, hover) in [("mouseenter", Hover::Enter), ("mouseleave", Hover::Leave)] {
            let shared = garden.clone();
            let node = flower.clone();
            listen(&flower, kind, true, move |_| {
                with_garden(&shared, clock, |g| g.hover_flower(&node, hover));
            })?;
        }
    }

    let butterflies = garden.borrow().stage().query_all(selectors::BUTTERFLY);
    for butterfly in butterflies {
        for (kind, hover) in [("mouseenter", Hover::Enter), ("mouseleave", Hover::Leave)] {
            let shared = garden.clone();
            let node = butterfly.clone();
            listen(&butterfly, kind, true, move |_| {
                with_garden(&shared, clock, |g| g.hover_butterfly(&node, hover));
            })?;
        }
    }
    Ok(())
}
