//! `window.garden` - manual effect triggers for the browser console
//!
//! ```text
//! garden.pauseAnimations()
//! garden.resumeAnimations()
//! garden.createSeasonalEffect("winter")   // spring | summer | winter
//! garden.createMagicalParticle()
//! garden.createButterflyDust()
//! garden.restartGarden()
//! garden.stop()
//! ```
//!
//! The same object is also published as `window.saraGarden`, the name
//! the page's earlier script used.

use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use tracing::warn;

use super::{Clock, SharedGarden, with_garden};
use crate::error::GardenError;
use crate::garden::{Garden, Season};
use crate::stage::DomStage;

/// Window properties the namespace is published under
pub(super) const NAMESPACES: &[&str] = &["garden", "saraGarden"];

fn action(
    garden: &SharedGarden,
    clock: Clock,
    f: impl Fn(&mut Garden<DomStage>) + 'static,
) -> JsValue {
    let shared = garden.clone();
    Closure::<dyn FnMut()>::new(move || {
        with_garden(&shared, clock, &f);
    })
    .into_js_value()
}

pub(super) fn expose(garden: &SharedGarden, clock: Clock) -> Result<(), GardenError> {
    let window = web_sys::window().ok_or(GardenError::NoWindow)?;
    let api = Object::new();

    let entries = [
        ("pauseAnimations", action(garden, clock, |g| {
            g.pause();
        })),
        ("resumeAnimations", action(garden, clock, |g| {
            g.resume();
        })),
        ("createMagicalParticle", action(garden, clock, |g| {
            g.sparkle();
        })),
        ("createButterflyDust", action(garden, clock, |g| {
            g.dust_all();
        })),
        ("restartGarden", action(garden, clock, |g| g.restart())),
        ("stop", action(garden, clock, |g| g.stop())),
    ];
    for (name, func) in &entries {
        Reflect::set(&api, &JsValue::from_str(name), func)?;
    }

    let shared = garden.clone();
    let seasonal = Closure::<dyn FnMut(JsValue)>::new(move |season: JsValue| {
        let name = season
            .as_string()
            .unwrap_or_else(|| Season::Spring.to_string());
        with_garden(&shared, clock, |g| {
            if let Err(err) = g.seasonal_named(&name) {
                warn!(%err, "seasonal effect ignored");
            }
        });
    });
    Reflect::set(&api, &JsValue::from_str("createSeasonalEffect"), &seasonal.into_js_value())?;

    for name in NAMESPACES {
        Reflect::set(&window, &JsValue::from_str(name), &api)?;
    }
    Ok(())
}
