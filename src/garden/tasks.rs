//! Recurring roster tasks
//!
//! Each tick re-arms itself first, then rolls and acts. Ticks never
//! wait on one another; a task that finds no targets just does nothing.

use tracing::debug;

use super::{Garden, Job};
use crate::config::{TaskKind, TaskSpec, selectors};
use crate::particle::Sampler;
use crate::primitives::{Chance, palette};
use crate::stage::Stage;

const DEW_SHADOW: &str = "inset 2px 2px 6px rgba(255, 255, 255, 0.8), \
                          2px 2px 12px rgba(135, 206, 235, 0.6), \
                          0 0 8px rgba(255, 255, 255, 0.4)";
const DEW_HOLD_MS: u64 = 2_500;

const GLOW_FILTER: &str = "brightness(1.4) drop-shadow(0 0 15px rgba(255, 215, 0, 0.8))";
const GLOW_HOLD_MS: u64 = 3_000;
const GLOW_LITE_HOLD_MS: u64 = 2_000;

const SHIMMER_FILTER: &str = "brightness(1.6) drop-shadow(0 0 20px rgba(255, 215, 0, 0.9))";
const SHIMMER_HOLD_MS: u64 = 2_500;
const SHIMMER_LITE_HOLD_MS: u64 = 2_000;

/// Degrees the sky hue phase advances per tick
const SKY_STEP: f32 = 0.5;
/// Peak hue rotation of the sky, in degrees
const SKY_SWING: f32 = 15.0;

impl<S: Stage> Garden<S> {
    pub(super) fn tick(&mut self, index: usize, generation: u32) {
        if !self.running || generation != self.generation {
            return;
        }
        let Some(spec) = self.config.roster.get(index).copied() else {
            return;
        };
        self.timeline.after(spec.interval_ms, Job::Tick { index, generation });

        if !spec.kind.rolls_per_target() && !self.roll(spec.threshold) {
            return;
        }
        self.run_task(spec);
    }

    fn roll(&mut self, threshold: Option<Chance>) -> bool {
        threshold.is_none_or(|t| t.roll(&mut self.rng))
    }

    fn run_task(&mut self, spec: TaskSpec) {
        match spec.kind {
            TaskKind::MagicalParticles => {
                let particle = Sampler::magical(&mut self.rng, palette::AMBIENT);
                self.spawn(particle);
            }
            TaskKind::MagicalParticlesLite => {
                let particle = Sampler::magical_lite(&mut self.rng);
                self.spawn(particle);
            }
            TaskKind::DewDrops => {
                for leaf in self.stage.query_all(selectors::LEAF) {
                    if self.roll(spec.threshold) {
                        self.flash_restoring(leaf, "box-shadow", DEW_SHADOW, DEW_HOLD_MS);
                    }
                }
            }
            TaskKind::FlowerGlow => {
                if let Some(flower) = self.pick(selectors::FLOWER_HEAD) {
                    self.flash(flower, &[("filter", GLOW_FILTER)], Some("scale(1.05)"), GLOW_HOLD_MS);
                }
            }
            TaskKind::FlowerGlowLite => {
                if let Some(flower) = self.pick(selectors::FLOWER_HEAD) {
                    self.flash(flower, &[("opacity", "1")], Some("scale(1.03)"), GLOW_LITE_HOLD_MS);
                }
            }
            TaskKind::SkyShift => self.shift_sky(),
            TaskKind::ButterflyShimmer => {
                if let Some(butterfly) = self.pick(selectors::BUTTERFLY) {
                    self.flash(butterfly, &[("filter", SHIMMER_FILTER)], Some("scale(1.1)"), SHIMMER_HOLD_MS);
                }
            }
            TaskKind::ButterflyShimmerLite => {
                if let Some(butterfly) = self.pick(selectors::BUTTERFLY) {
                    self.flash(butterfly, &[("opacity", "1")], Some("scale(1.05)"), SHIMMER_LITE_HOLD_MS);
                }
            }
            TaskKind::ButterflyDust => {
                let butterflies = self.stage.query_all(selectors::BUTTERFLY);
                for (index, butterfly) in butterflies.iter().enumerate() {
                    if self.roll(spec.threshold) {
                        self.butterfly_dust(butterfly, index);
                    }
                }
            }
        }
    }

    fn shift_sky(&mut self) {
        let Some(sky) = self.stage.query(selectors::SKY) else {
            return;
        };
        self.sky_hue = (self.sky_hue + SKY_STEP) % 360.0;
        let rotate = self.sky_hue.to_radians().sin() * SKY_SWING;
        let filter = format!("blur(0.1vmin) hue-rotate({rotate:.3}deg)");
        self.stage.set_style(&sky, "filter", &filter);
        debug!(hue = self.sky_hue, "sky shifted");
    }

    /// Puff of dust from one butterfly, coloured by its position in the page
    pub(super) fn butterfly_dust(&mut self, butterfly: &S::Node, index: usize) -> usize {
        let Some(center) = self.stage.center_of(butterfly) else {
            return 0;
        };
        let dust = Sampler::dust(&mut self.rng, center, palette::dust_for(index));
        self.spawn_all(dust)
    }
}
