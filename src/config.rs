//! Garden configuration - rosters and tuning constants
//!
//! Intervals and thresholds are hand-tuned; they are kept here verbatim
//! so they can be adjusted without touching the dispatcher.

use crate::device::DeviceMode;
use crate::primitives::Chance;

/// Page selectors the effects look for
pub mod selectors {
    pub const FLOWER: &str = ".flower";
    pub const FLOWER_HEAD: &str = ".flower__leafs";
    pub const LEAF: &str = ".flower__line__leaf, .flower__g-front__leaf, .long-g .leaf";
    pub const BUTTERFLY: &str = ".butterfly";
    pub const SKY: &str = ".night";
}

/// Body class that suspends every CSS animation on the page
pub const PAUSE_CLASS: &str = "container";

/// Flower reset fires on every Nth interaction
pub const DESKTOP_RESET_EVERY: u32 = 3;
pub const MOBILE_RESET_EVERY: u32 = 5;

/// Delay between successive flowers in one reset
pub const RESET_STAGGER_MS: u64 = 400;
/// Fade-out and fade-in phases of a flower reset
pub const RESET_PHASE_MS: u64 = 800;

/// How long `restart` holds the pause class
pub const RESTART_HOLD_MS: u64 = 500;

/// Delay before each roster group starts
pub const PARTICLES_DELAY_MS: u64 = 6_000;
pub const GARDEN_DELAY_MS: u64 = 8_000;
pub const BUTTERFLY_DELAY_MS: u64 = 10_000;

/// The recurring effects a roster can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    MagicalParticles,
    MagicalParticlesLite,
    DewDrops,
    FlowerGlow,
    FlowerGlowLite,
    SkyShift,
    ButterflyShimmer,
    ButterflyShimmerLite,
    ButterflyDust,
}

impl TaskKind {
    /// Tasks that roll once per matching page element instead of once per tick
    pub fn rolls_per_target(&self) -> bool {
        matches!(self, Self::DewDrops | Self::ButterflyDust)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::MagicalParticles => "magical particles",
            Self::MagicalParticlesLite => "magical particles (lite)",
            Self::DewDrops => "dew drops",
            Self::FlowerGlow => "flower glow",
            Self::FlowerGlowLite => "flower glow (lite)",
            Self::SkyShift => "sky shift",
            Self::ButterflyShimmer => "butterfly shimmer",
            Self::ButterflyShimmerLite => "butterfly shimmer (lite)",
            Self::ButterflyDust => "butterfly dust",
        }
    }
}

/// One recurring effect: what, how often, from when, and how likely
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskSpec {
    pub kind: TaskKind,
    pub interval_ms: u64,
    pub start_delay_ms: u64,
    /// `None` fires on every tick
    pub threshold: Option<Chance>,
}

impl TaskSpec {
    pub const fn new(kind: TaskKind, interval_ms: u64, start_delay_ms: u64) -> Self {
        Self { kind, interval_ms, start_delay_ms, threshold: None }
    }

    pub const fn above(mut self, threshold: f32) -> Self {
        self.threshold = Some(Chance::new(threshold));
        self
    }
}

pub const DESKTOP_ROSTER: &[TaskSpec] = &[
    TaskSpec::new(TaskKind::MagicalParticles, 2_500, PARTICLES_DELAY_MS).above(0.7),
    TaskSpec::new(TaskKind::DewDrops, 4_000, GARDEN_DELAY_MS).above(0.85),
    TaskSpec::new(TaskKind::FlowerGlow, 5_000, GARDEN_DELAY_MS),
    TaskSpec::new(TaskKind::SkyShift, 50_000, GARDEN_DELAY_MS),
    TaskSpec::new(TaskKind::ButterflyShimmer, 6_000, BUTTERFLY_DELAY_MS),
    TaskSpec::new(TaskKind::ButterflyDust, 3_000, BUTTERFLY_DELAY_MS).above(0.8),
];

pub const MOBILE_ROSTER: &[TaskSpec] = &[
    TaskSpec::new(TaskKind::MagicalParticlesLite, 4_000, PARTICLES_DELAY_MS).above(0.8),
    TaskSpec::new(TaskKind::FlowerGlowLite, 8_000, GARDEN_DELAY_MS).above(0.8),
    TaskSpec::new(TaskKind::ButterflyShimmerLite, 8_000, BUTTERFLY_DELAY_MS).above(0.7),
];

#[derive(Debug, Clone, PartialEq)]
pub struct GardenConfig {
    pub mode: DeviceMode,
    pub roster: Vec<TaskSpec>,
    pub reset_every: u32,
    pub reset_stagger_ms: u64,
    pub reset_phase_ms: u64,
    pub restart_hold_ms: u64,
    pub pause_class: &'static str,
}

impl GardenConfig {
    pub fn for_mode(mode: DeviceMode) -> Self {
        let (roster, reset_every) = match mode {
            DeviceMode::Desktop => (DESKTOP_ROSTER, DESKTOP_RESET_EVERY),
            DeviceMode::Mobile => (MOBILE_ROSTER, MOBILE_RESET_EVERY),
        };
        Self {
            mode,
            roster: roster.to_vec(),
            reset_every,
            reset_stagger_ms: RESET_STAGGER_MS,
            reset_phase_ms: RESET_PHASE_MS,
            restart_hold_ms: RESTART_HOLD_MS,
            pause_class: PAUSE_CLASS,
        }
    }

    pub fn with_roster(mut self, roster: Vec<TaskSpec>) -> Self {
        self.roster = roster;
        self
    }
}
