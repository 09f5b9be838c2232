//! Chance - trigger threshold for probabilistic effects

use rand::Rng;

use super::bounded::bounded_f32;

bounded_f32!(Chance, 0.0, 1.0);

impl Chance {
    /// A roll passes only when strictly above the threshold
    pub fn passes(&self, roll: f32) -> bool {
        roll > self.0
    }

    /// Draw a uniform roll in [0, 1) and test it
    pub fn roll<R: Rng>(&self, rng: &mut R) -> bool {
        self.passes(rng.random::<f32>())
    }

    /// Long-run fraction of rolls that pass
    pub fn odds(&self) -> f32 {
        1.0 - self.0
    }
}
