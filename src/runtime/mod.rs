//! Runtime - wires a `Garden` into the live page
//!
//! Boot reads the environment once, builds the garden over the real
//! document, hooks up listeners and the console namespace, then hands
//! back a driver that advances the garden's timeline off a wall clock.

mod console;
mod listeners;
mod zoom_guard;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::config::GardenConfig;
use crate::device::{DeviceMode, EnvSignals};
use crate::error::GardenError;
use crate::garden::Garden;
use crate::stage::{DomStage, Stage};

/// Shortest and longest sleep of the clock loop
const MIN_TICK_MS: u64 = 16;
const MAX_TICK_MS: u64 = 100;

pub type SharedGarden = Rc<RefCell<Garden<DomStage>>>;

/// Milliseconds since boot, the garden's time base
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: f64,
}

impl Clock {
    pub fn start() -> Self {
        Self { origin: js_sys::Date::now() }
    }

    pub fn now(&self) -> u64 {
        (js_sys::Date::now() - self.origin).max(0.0) as u64
    }
}

pub fn fresh_rng() -> SmallRng {
    let mut seed = [0u8; 32];
    if getrandom::fill(&mut seed).is_err() {
        return SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
    }
    SmallRng::from_seed(seed)
}

/// Catch the garden up to now, run `f`, then run anything `f` made due.
/// Skips silently if the garden is already borrowed.
pub(crate) fn with_garden<T>(
    garden: &SharedGarden,
    clock: Clock,
    f: impl FnOnce(&mut Garden<DomStage>) -> T,
) -> Option<T> {
    let mut g = garden.try_borrow_mut().ok()?;
    let now = clock.now();
    g.advance_to(now);
    let out = f(&mut g);
    g.advance_to(now);
    Some(out)
}

pub struct Runtime {
    garden: SharedGarden,
    clock: Clock,
}

pub fn boot() -> Result<Runtime, GardenError> {
    let env = EnvSignals::read().ok_or(GardenError::NoWindow)?;
    let mode = DeviceMode::detect(&env);
    let stage = DomStage::attach()?;
    let clock = Clock::start();

    let mut garden = Garden::new(GardenConfig::for_mode(mode), stage, fresh_rng());
    // the page ships with the pause class so nothing moves before we are ready
    garden.resume();
    garden.start();
    let garden = Rc::new(RefCell::new(garden));

    listeners::install(&garden, clock, &env)?;
    if mode.is_mobile() {
        zoom_guard::install()?;
    }
    console::expose(&garden, clock)?;

    info!(
        %mode,
        touch = env.touch,
        namespaces = ?console::NAMESPACES,
        "garden is growing; try `garden` in the console"
    );
    Ok(Runtime { garden, clock })
}

/// Run everything due by `now`, then say how long to sleep.
/// A stopped, drained garden keeps getting polled at the slow rate:
/// console calls and touch reverts can still queue work on it.
fn step<S: Stage>(garden: &mut Garden<S>, now: u64) -> u64 {
    garden.advance_to(now);
    if garden.is_idle() {
        return MAX_TICK_MS;
    }
    garden
        .next_wake()
        .map_or(MAX_TICK_MS, |due| due.saturating_sub(now).clamp(MIN_TICK_MS, MAX_TICK_MS))
}

impl Runtime {
    /// Advance the garden for the life of the page
    pub async fn drive(self) {
        let mut idle = false;
        loop {
            let wait = match self.garden.try_borrow_mut() {
                Ok(mut garden) => {
                    let wait = step(&mut garden, self.clock.now());
                    if garden.is_idle() != idle {
                        idle = !idle;
                        debug!(idle, "garden clock");
                    }
                    wait
                }
                Err(_) => MIN_TICK_MS,
            };
            TimeoutFuture::new(wait as u32).await;
        }
    }
}
