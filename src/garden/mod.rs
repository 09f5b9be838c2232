//! Garden - the effect dispatcher
//!
//! A `Garden` owns its stage, its random source and a `Timeline` of
//! pending jobs. Recurring tasks, element removals, style reverts and
//! staggered spawns are all jobs; the owner drives them by advancing
//! time with `advance_to`. Nothing blocks and nothing is awaited.
//!
//! Structure:
//!   tasks       - the recurring roster
//!   interaction - pointer, hover and touch reactions, flower reset
//!   manual      - pause/resume, seasonal bursts, forced sparkles, restart
//!   restyle     - temporary inline-style changes on page elements

mod interaction;
mod manual;
mod restyle;
mod tasks;

pub use interaction::{Hover, Reaction};
pub use manual::Season;

use rand::Rng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::config::GardenConfig;
use crate::device::DeviceMode;
use crate::particle::{Particle, Sampler};
use crate::registry::StyleRegistry;
use crate::schedule::Timeline;
use crate::stage::Stage;
use restyle::Revert;

/// Seasonal element kinds spawned through the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Effect {
    Petal,
    Firefly,
    Snowflake,
}

enum Job<N> {
    /// Run roster entry `index`; stale generations are dropped
    Tick { index: usize, generation: u32 },
    Remove(N),
    Revert { node: N, edits: Vec<Revert> },
    Spawn(Effect),
    FlowerFade(N),
    FlowerReturn(N),
    FlowerSettle(N),
    Unpause,
}

/// Running totals, for logging and tests
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub spawned: u64,
    pub removed: u64,
    pub waves: u32,
    pub bursts: u32,
    pub flower_resets: u32,
}

pub struct Garden<S: Stage> {
    config: GardenConfig,
    stage: S,
    rng: SmallRng,
    registry: StyleRegistry,
    timeline: Timeline<Job<S::Node>>,
    interactions: u32,
    sky_hue: f32,
    running: bool,
    generation: u32,
    stats: Stats,
}

impl<S: Stage> Garden<S> {
    pub fn new(config: GardenConfig, stage: S, rng: SmallRng) -> Self {
        Self {
            config,
            stage,
            rng,
            registry: StyleRegistry::new(),
            timeline: Timeline::new(),
            interactions: 0,
            sky_hue: 0.0,
            running: false,
            generation: 0,
            stats: Stats::default(),
        }
    }

    pub fn mode(&self) -> DeviceMode {
        self.config.mode
    }

    pub fn config(&self) -> &GardenConfig {
        &self.config
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn interactions(&self) -> u32 {
        self.interactions
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current virtual time in ms
    pub fn now(&self) -> u64 {
        self.timeline.now()
    }

    /// When the next job is due, if any
    pub fn next_wake(&self) -> Option<u64> {
        self.timeline.next_due()
    }

    /// Arm every roster task at its start delay. No-op while running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.generation = self.generation.wrapping_add(1);
        for (index, spec) in self.config.roster.iter().enumerate() {
            self.timeline.after(
                spec.start_delay_ms,
                Job::Tick { index, generation: self.generation },
            );
        }
        info!(
            mode = %self.config.mode,
            tasks = self.config.roster.len(),
            "garden effects starting"
        );
    }

    /// Stop recurring tasks and refuse new effects. Elements already on
    /// the page still get removed as their jobs come due.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        info!(spawned = self.stats.spawned, "garden effects stopped");
    }

    /// Nothing left to do: stopped and every pending job has run
    pub fn is_idle(&self) -> bool {
        !self.running && self.timeline.is_empty()
    }

    /// Run every job due at or before `now`, in order
    pub fn advance_to(&mut self, now: u64) {
        while let Some(job) = self.timeline.pop_due(now) {
            self.run(job);
        }
        self.timeline.settle(now);
    }

    pub fn advance_by(&mut self, ms: u64) {
        self.advance_to(self.timeline.now().saturating_add(ms));
    }

    fn run(&mut self, job: Job<S::Node>) {
        match job {
            Job::Tick { index, generation } => self.tick(index, generation),
            Job::Remove(node) => {
                self.stage.remove(&node);
                self.stats.removed += 1;
            }
            Job::Revert { node, edits } => self.revert(&node, &edits),
            Job::Spawn(effect) => {
                if !self.running {
                    return;
                }
                let particle = match effect {
                    Effect::Petal => Sampler::petal(&mut self.rng),
                    Effect::Firefly => Sampler::firefly(&mut self.rng),
                    Effect::Snowflake => Sampler::snowflake(&mut self.rng),
                };
                self.spawn(particle);
            }
            Job::FlowerFade(node) => self.flower_fade(node),
            Job::FlowerReturn(node) => self.flower_return(node),
            Job::FlowerSettle(node) => self.flower_settle(&node),
            Job::Unpause => {
                self.resume();
            }
        }
    }

    /// Append one particle and schedule its removal
    fn spawn(&mut self, particle: Particle) -> bool {
        self.registry.ensure(&mut self.stage, particle.keyframes);
        let Some(node) = self.stage.append(&particle.to_css()) else {
            return false;
        };
        let ttl = particle.ttl_ms();
        self.timeline.after(ttl, Job::Remove(node));
        self.stats.spawned += 1;
        debug!(kind = %particle.keyframes, ttl_ms = ttl, "spawned");
        true
    }

    fn spawn_all(&mut self, particles: Vec<Particle>) -> usize {
        let mut spawned = 0;
        for particle in particles {
            if self.spawn(particle) {
                spawned += 1;
            }
        }
        spawned
    }

    /// Uniform pick from a selector's matches
    fn pick(&mut self, selector: &str) -> Option<S::Node> {
        let mut nodes = self.stage.query_all(selector);
        if nodes.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..nodes.len());
        Some(nodes.swap_remove(idx))
    }
}
