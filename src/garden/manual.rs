//! Manual triggers - the console-facing surface
//!
//! Thin wrappers over the same spawn path the roster uses. Pause and
//! resume only toggle a body class; the page's own CSS does the rest.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use super::{Effect, Garden, Job};
use crate::config::selectors;
use crate::error::GardenError;
use crate::particle::Sampler;
use crate::primitives::palette;
use crate::stage::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// Falling petals
    Spring,
    /// Fireflies
    Summer,
    /// Snowflakes
    Winter,
}

impl Season {
    pub fn count(&self) -> usize {
        match self {
            Self::Spring => 15,
            Self::Summer => 10,
            Self::Winter => 20,
        }
    }

    /// Gap between successive spawns
    pub fn stagger_ms(&self) -> u64 {
        match self {
            Self::Spring => 200,
            Self::Summer => 300,
            Self::Winter => 150,
        }
    }

    fn effect(&self) -> Effect {
        match self {
            Self::Spring => Effect::Petal,
            Self::Summer => Effect::Firefly,
            Self::Winter => Effect::Snowflake,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Winter => "winter",
        })
    }
}

impl FromStr for Season {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "winter" => Ok(Self::Winter),
            _ => Err(GardenError::UnknownSeason(s.to_string())),
        }
    }
}

impl<S: Stage> Garden<S> {
    pub fn is_paused(&self) -> bool {
        self.stage.has_root_class(self.config.pause_class)
    }

    /// Freeze page animations. Returns false if already paused.
    pub fn pause(&mut self) -> bool {
        if self.is_paused() {
            return false;
        }
        self.stage.add_root_class(self.config.pause_class);
        info!("animations paused");
        true
    }

    /// Unfreeze page animations. Returns false if not paused.
    pub fn resume(&mut self) -> bool {
        if !self.is_paused() {
            return false;
        }
        self.stage.remove_root_class(self.config.pause_class);
        info!("animations resumed");
        true
    }

    /// Pause briefly so every CSS animation on the page starts over
    pub fn restart(&mut self) {
        self.pause();
        self.timeline.after(self.config.restart_hold_ms, Job::Unpause);
    }

    /// Queue a staggered seasonal shower. Returns how many elements were queued.
    pub fn seasonal(&mut self, season: Season) -> usize {
        if !self.running {
            return 0;
        }
        let count = season.count();
        for i in 0..count {
            self.timeline.after(i as u64 * season.stagger_ms(), Job::Spawn(season.effect()));
        }
        info!(%season, count, "seasonal effect");
        count
    }

    pub fn seasonal_named(&mut self, name: &str) -> Result<usize, GardenError> {
        let season = name.parse::<Season>()?;
        Ok(self.seasonal(season))
    }

    /// One golden sparkle right now
    pub fn sparkle(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let particle = Sampler::magical(&mut self.rng, palette::GOLD);
        self.spawn(particle)
    }

    /// Dust from every butterfly at once
    pub fn dust_all(&mut self) -> usize {
        if !self.running {
            return 0;
        }
        let butterflies = self.stage.query_all(selectors::BUTTERFLY);
        butterflies
            .iter()
            .enumerate()
            .map(|(index, b)| self.butterfly_dust(b, index))
            .sum()
    }
}
