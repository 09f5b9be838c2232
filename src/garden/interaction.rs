//! Interaction handler - pointer, hover and touch reactions
//!
//! Every pointer event counts. Desktop answers with a ring wave and a
//! radial burst, mobile with the wave alone. Every `reset_every`-th
//! event also sends a few flowers back into the ground and up again.

use rand::Rng;
use tracing::debug;

use super::{Garden, Job, restyle::Revert};
use crate::config::selectors;
use crate::particle::Sampler;
use crate::primitives::Point;
use crate::stage::Stage;

const RESET_SUFFIX: &str = "translateY(20vmin) scale(0.8)";
const RESET_TRANSITION: &str = "all 0.8s ease-out";
/// Flowers sent back per reset
const RESET_MIN: usize = 2;
const RESET_MAX: usize = 3;

const FLOWER_HOVER_SUFFIX: &str = "scale(1.02)";
const BUTTERFLY_HOVER_SUFFIX: &str = "scale(1.15)";
const FLOWER_TOUCH_HOLD_MS: u64 = 500;

/// What one pointer event set off
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    pub wave: bool,
    pub burst: bool,
    pub flower_reset: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hover {
    Enter,
    Leave,
}

impl<S: Stage> Garden<S> {
    /// Handle one click or touch at client coordinates
    pub fn interact(&mut self, at: Point) -> Reaction {
        if !self.running {
            return Reaction::default();
        }
        self.interactions = self.interactions.wrapping_add(1);
        let mut reaction = Reaction::default();

        reaction.wave = self.spawn(Sampler::click_wave(at));
        if reaction.wave {
            self.stats.waves += 1;
        }

        if !self.config.mode.is_mobile() {
            let burst = Sampler::burst(&mut self.rng, at);
            reaction.burst = self.spawn_all(burst) > 0;
            if reaction.burst {
                self.stats.bursts += 1;
            }
        }

        let every = self.config.reset_every;
        if every > 0 && self.interactions % every == 0 {
            self.reset_flowers();
            reaction.flower_reset = true;
        }

        debug!(count = self.interactions, x = at.x, y = at.y, "interaction");
        reaction
    }

    /// Pick 2-3 distinct flowers and stagger their reset. Returns how many.
    pub fn reset_flowers(&mut self) -> usize {
        self.stats.flower_resets += 1;
        let flowers = self.stage.query_all(selectors::FLOWER);
        if flowers.is_empty() {
            return 0;
        }
        let amount = self.rng.random_range(RESET_MIN..=RESET_MAX).min(flowers.len());
        let picks = rand::seq::index::sample(&mut self.rng, flowers.len(), amount);
        for (order, idx) in picks.iter().enumerate() {
            let delay = order as u64 * self.config.reset_stagger_ms;
            self.timeline.after(delay, Job::FlowerFade(flowers[idx].clone()));
        }
        amount
    }

    pub(super) fn flower_fade(&mut self, flower: S::Node) {
        self.stage.set_style(&flower, "transition", RESET_TRANSITION);
        self.stage.set_style(&flower, "opacity", "0");
        self.push_transform(&flower, RESET_SUFFIX);
        self.timeline.after(self.config.reset_phase_ms, Job::FlowerReturn(flower));
    }

    pub(super) fn flower_return(&mut self, flower: S::Node) {
        self.stage.set_style(&flower, "opacity", "1");
        self.pop_transform(&flower, RESET_SUFFIX);
        self.timeline.after(self.config.reset_phase_ms, Job::FlowerSettle(flower));
    }

    pub(super) fn flower_settle(&mut self, flower: &S::Node) {
        self.stage.set_style(flower, "transition", "");
    }

    /// Desktop flower hover: slight swell and brighten
    pub fn hover_flower(&mut self, flower: &S::Node, hover: Hover) {
        match hover {
            Hover::Enter => {
                self.push_transform(flower, FLOWER_HOVER_SUFFIX);
                self.stage.set_style(flower, "filter", "brightness(1.1)");
            }
            Hover::Leave => {
                self.pop_transform(flower, FLOWER_HOVER_SUFFIX);
                self.stage.set_style(flower, "filter", "");
            }
        }
    }

    /// Desktop butterfly hover: swell, saturate and throw a colourful burst
    pub fn hover_butterfly(&mut self, butterfly: &S::Node, hover: Hover) {
        match hover {
            Hover::Enter => {
                self.push_transform(butterfly, BUTTERFLY_HOVER_SUFFIX);
                self.stage.set_style(butterfly, "filter", "brightness(1.3) saturate(1.2)");
                if !self.running {
                    return;
                }
                if let Some(center) = self.stage.center_of(butterfly) {
                    let burst = Sampler::colorful_burst(&mut self.rng, center);
                    self.spawn_all(burst);
                }
            }
            Hover::Leave => {
                self.pop_transform(butterfly, BUTTERFLY_HOVER_SUFFIX);
                self.stage.set_style(butterfly, "filter", "");
            }
        }
    }

    /// Mobile flower touch: brief swell, undone by a scheduled revert
    pub fn touch_flower(&mut self, flower: &S::Node) {
        self.push_transform(flower, FLOWER_HOVER_SUFFIX);
        self.stage.set_style(flower, "opacity", "1");
        self.timeline.after(
            FLOWER_TOUCH_HOLD_MS,
            Job::Revert {
                node: flower.clone(),
                edits: vec![Revert::Strip(FLOWER_HOVER_SUFFIX), Revert::Clear("opacity")],
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::garden;
    use super::*;
    use crate::device::DeviceMode;
    use crate::primitives::Keyframes;
    use crate::stage::MemoryStage;

    fn tap(g: &mut Garden<MemoryStage>, times: u32) -> Vec<u32> {
        let mut resets = Vec::new();
        for _ in 0..times {
            let reaction = g.interact(Point::new(200.0, 150.0));
            if reaction.flower_reset {
                resets.push(g.interactions());
            }
        }
        resets
    }

    #[test]
    fn ten_desktop_clicks() {
        let mut g = garden(DeviceMode::Desktop, 21);
        let resets = tap(&mut g, 10);
        assert_eq!(resets, vec![3, 6, 9]);
        let stats = g.stats();
        assert_eq!(stats.flower_resets, 3);
        assert_eq!(stats.waves, 10);
        assert_eq!(stats.bursts, 10);
        assert_eq!(g.stage().spawned_of(Keyframes::ClickWave), 10);
        assert_eq!(g.stage().spawned_of(Keyframes::BurstParticle), 80);
    }

    #[test]
    fn mobile_taps_are_lighter_and_reset_every_fifth() {
        let mut g = garden(DeviceMode::Mobile, 21);
        let resets = tap(&mut g, 12);
        assert_eq!(resets, vec![5, 10]);
        assert_eq!(g.stats().bursts, 0);
        assert_eq!(g.stage().spawned_of(Keyframes::ClickWave), 12);
        assert_eq!(g.stage().spawned_of(Keyframes::BurstParticle), 0);
    }

    #[test]
    fn flower_reset_runs_its_phases() {
        let mut g = garden(DeviceMode::Desktop, 8);
        let flowers = g.stage().query_all(selectors::FLOWER);
        let chosen = g.reset_flowers();
        assert!((2..=3).contains(&chosen));

        // first flower fades straight away, the next one 400ms later
        g.advance_by(0);
        let hidden = |g: &Garden<MemoryStage>| {
            flowers.iter().filter(|f| g.stage().style(f, "opacity") == "0").count()
        };
        assert_eq!(hidden(&g), 1);
        g.advance_by(400);
        assert_eq!(hidden(&g), 2);

        let faded = flowers
            .iter()
            .find(|f| g.stage().style(f, "opacity") == "0")
            .copied()
            .unwrap();
        assert_eq!(g.stage().style(&faded, "transform"), RESET_SUFFIX);
        assert_eq!(g.stage().style(&faded, "transition"), RESET_TRANSITION);

        g.advance_by(3_000);
        for f in &flowers {
            assert_eq!(g.stage().style(f, "transform"), "");
            assert_eq!(g.stage().style(f, "transition"), "");
        }
        let restored = flowers.iter().filter(|f| g.stage().style(f, "opacity") == "1").count();
        assert_eq!(restored, chosen);
    }

    #[test]
    fn reset_without_flowers_is_silent() {
        use crate::config::GardenConfig;
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        let mut g = Garden::new(
            GardenConfig::for_mode(DeviceMode::Desktop),
            MemoryStage::new(),
            SmallRng::seed_from_u64(1),
        );
        assert_eq!(g.reset_flowers(), 0);
        assert_eq!(g.stats().flower_resets, 1);
    }

    #[test]
    fn stopped_garden_ignores_clicks() {
        let mut g = garden(DeviceMode::Desktop, 1);
        g.stop();
        assert_eq!(g.interact(Point::ORIGIN), Reaction::default());
        assert_eq!(g.interactions(), 0);
        assert!(g.stage().spawned.is_empty());
    }

    #[test]
    fn butterfly_hover_bursts_and_restores() {
        let mut g = garden(DeviceMode::Desktop, 4);
        let butterfly = g.stage().query(selectors::BUTTERFLY).unwrap();
        g.hover_butterfly(&butterfly, Hover::Enter);
        assert_eq!(g.stage().style(&butterfly, "transform"), "scale(1.15)");
        assert_eq!(g.stage().spawned_of(Keyframes::ColorfulBurst), 12);
        g.hover_butterfly(&butterfly, Hover::Leave);
        assert_eq!(g.stage().style(&butterfly, "transform"), "");
        assert_eq!(g.stage().style(&butterfly, "filter"), "");
    }

    #[test]
    fn flower_hover_round_trip() {
        let mut g = garden(DeviceMode::Desktop, 4);
        let flower = g.stage().query(selectors::FLOWER).unwrap();
        g.hover_flower(&flower, Hover::Enter);
        assert_eq!(g.stage().style(&flower, "filter"), "brightness(1.1)");
        g.hover_flower(&flower, Hover::Leave);
        assert_eq!(g.stage().style(&flower, "transform"), "");
    }

    #[test]
    fn touch_swell_wears_off() {
        let mut g = garden(DeviceMode::Mobile, 4);
        let flower = g.stage().query(selectors::FLOWER).unwrap();
        g.touch_flower(&flower);
        assert_eq!(g.stage().style(&flower, "transform"), "scale(1.02)");
        g.advance_by(FLOWER_TOUCH_HOLD_MS);
        assert_eq!(g.stage().style(&flower, "transform"), "");
        assert_eq!(g.stage().style(&flower, "opacity"), "");
    }
}
