//! Palette - fixed colour sets the samplers draw from

use rand::Rng;

/// Ambient sparkles on desktop; faded into transparency by a radial gradient
pub const AMBIENT: &[&str] = &[
    "rgba(255, 215, 0, 0.8)",
    "rgba(255, 105, 180, 0.8)",
    "rgba(147, 112, 219, 0.8)",
    "rgba(255, 255, 255, 0.9)",
    "rgba(50, 205, 50, 0.8)",
];

/// Ambient sparkles on mobile; flat fill, no gradients
pub const AMBIENT_FLAT: &[&str] = &["#ffd700", "#ff69b4", "#9370db", "#ffffff", "#32cd32"];

/// Click burst
pub const BURST: &[&str] = &["#ffd700", "#ff69b4", "#9370db", "#ffffff", "#32cd32"];

/// Butterfly hover burst
pub const COLORFUL: &[&str] = &["#ffd700", "#ff69b4", "#9370db", "#00bfff", "#32cd32", "#ff4500"];

/// Manually forced sparkle
pub const GOLD: &[&str] = &["rgba(255, 215, 0, 0.9)"];

/// Dust colours per butterfly, in document order:
/// monarch, morpho, sakura, mystic, emerald
pub const BUTTERFLY_DUST: &[[&str; 2]] = &[
    ["rgba(255, 140, 0, 0.8)", "rgba(255, 165, 0, 0.6)"],
    ["rgba(0, 191, 255, 0.8)", "rgba(30, 144, 255, 0.6)"],
    ["rgba(255, 182, 193, 0.8)", "rgba(255, 105, 180, 0.6)"],
    ["rgba(138, 43, 226, 0.8)", "rgba(147, 112, 219, 0.6)"],
    ["rgba(0, 255, 127, 0.8)", "rgba(46, 139, 87, 0.6)"],
];

pub const FIREFLY: &[&str] = &["rgba(255, 250, 140, 0.95)", "rgba(210, 255, 120, 0.9)"];

pub const SNOW: &[&str] = &["rgba(255, 255, 255, 0.95)", "rgba(225, 240, 255, 0.9)"];

pub const PETAL_GRADIENT: &str = "linear-gradient(45deg, #ffb6c1, #ff69b4)";

pub const WAVE_STROKE: &str = "rgba(255, 215, 0, 0.8)";

/// Dust pair for the butterfly at `index`; unknown indices reuse the first
pub fn dust_for(index: usize) -> &'static [&'static str] {
    BUTTERFLY_DUST
        .get(index)
        .unwrap_or(&BUTTERFLY_DUST[0])
        .as_slice()
}

/// Uniform pick; empty palettes fall back to white
pub fn pick<R: Rng>(rng: &mut R, colors: &[&'static str]) -> &'static str {
    if colors.is_empty() {
        return "#ffffff";
    }
    colors[rng.random_range(0..colors.len())]
}
