//! Particle - one transient visual element, described as data
//!
//! A `Particle` is rendered to an inline `style` string and appended to
//! the page as a bare `div`. Its lifetime comes from its keyframes kind,
//! so the element is gone once the animation has played out.

pub mod sampler;

pub use sampler::Sampler;

use crate::primitives::{Anchor, Keyframes};

/// How the element is painted
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(String),
    /// Radial gradient fading to transparent at the edge
    Glow(String),
    Gradient(&'static str),
    /// Hollow circle with a 2px stroke
    Ring(String),
}

impl Fill {
    fn to_css(&self) -> String {
        match self {
            Self::Solid(c) => format!("background: {c}"),
            Self::Glow(c) => format!("background: radial-gradient(circle, {c}, transparent)"),
            Self::Gradient(g) => format!("background: {g}"),
            Self::Ring(c) => format!("border: 2px solid {c}"),
        }
    }
}

/// Element box size
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    Vmin(f32, f32),
    Px(f32, f32),
}

impl Extent {
    pub fn square_vmin(size: f32) -> Self {
        Self::Vmin(size, size)
    }

    fn to_css(&self) -> String {
        match self {
            Self::Vmin(w, h) => format!("width: {w:.3}vmin; height: {h:.3}vmin"),
            Self::Px(w, h) => format!("width: {w}px; height: {h}px"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Shape {
    #[default]
    Round,
    Petal,
}

impl Shape {
    fn border_radius(&self) -> &'static str {
        match self {
            Self::Round => "50%",
            Self::Petal => "50% 50% 50% 50% / 60% 60% 40% 40%",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub anchor: Anchor,
    pub extent: Extent,
    pub fill: Fill,
    pub shape: Shape,
    pub keyframes: Keyframes,
    /// Animation duration; may be shorter than the element's TTL
    pub duration_ms: u64,
    pub easing: &'static str,
    pub layer: u8,
    pub blur_vmin: Option<f32>,
    pub opacity: Option<f32>,
    pub halo: Option<String>,
    /// CSS custom properties consumed by the keyframes (`--angle`, `--distance`)
    pub vars: Vec<(&'static str, String)>,
}

impl Particle {
    pub fn new(keyframes: Keyframes, anchor: Anchor, extent: Extent, fill: Fill) -> Self {
        Self {
            anchor,
            extent,
            fill,
            shape: Shape::Round,
            keyframes,
            duration_ms: keyframes.ttl_ms(),
            easing: "ease-out",
            layer: 15,
            blur_vmin: None,
            opacity: None,
            halo: None,
            vars: Vec::new(),
        }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_easing(mut self, easing: &'static str) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_layer(mut self, layer: u8) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_blur(mut self, vmin: f32) -> Self {
        self.blur_vmin = Some(vmin);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_halo(mut self, shadow: impl Into<String>) -> Self {
        self.halo = Some(shadow.into());
        self
    }

    pub fn with_var(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.vars.push((name, value.into()));
        self
    }

    /// Time until the element is removed from the page
    pub fn ttl_ms(&self) -> u64 {
        self.keyframes.ttl_ms().max(self.duration_ms)
    }

    /// Inline style for the element's `style` attribute
    pub fn to_css(&self) -> String {
        let mut parts = vec![
            "position: fixed".to_string(),
            self.anchor.to_css(),
            self.extent.to_css(),
            self.fill.to_css(),
            format!("border-radius: {}", self.shape.border_radius()),
            "pointer-events: none".to_string(),
            format!("z-index: {}", self.layer),
        ];

        if self.anchor.is_centered() {
            parts.push("transform: translate(-50%, -50%)".to_string());
        }
        if let Some(opacity) = self.opacity {
            parts.push(format!("opacity: {opacity}"));
        }
        if let Some(halo) = &self.halo {
            parts.push(format!("box-shadow: {halo}"));
        }
        if let Some(blur) = self.blur_vmin {
            parts.push(format!("filter: blur({blur}vmin)"));
        }

        parts.push(format!(
            "animation: {} {}s {} forwards",
            self.keyframes.name(),
            self.duration_ms as f64 / 1000.0,
            self.easing,
        ));

        for (name, value) in &self.vars {
            parts.push(format!("{name}: {value}"));
        }

        parts.join("; ") + ";"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point;

    fn wave() -> Particle {
        Particle::new(
            Keyframes::ClickWave,
            Anchor::Centered(Point::new(40.0, 60.0)),
            Extent::Px(20.0, 20.0),
            Fill::Ring("gold".into()),
        )
        .with_layer(20)
    }

    #[test]
    fn css_names_the_animation() {
        let css = wave().to_css();
        assert!(css.contains("animation: clickWaveExpand 1s ease-out forwards"));
        assert!(css.contains("border: 2px solid gold"));
        assert!(css.contains("transform: translate(-50%, -50%)"));
        assert!(css.contains("z-index: 20"));
        assert!(css.ends_with(';'));
    }

    #[test]
    fn custom_properties_follow_the_animation() {
        let css = wave().with_var("--angle", "45deg").to_css();
        assert!(css.contains("--angle: 45deg"));
    }

    #[test]
    fn ttl_covers_longer_animations() {
        let p = wave().with_duration(3_000);
        assert_eq!(p.ttl_ms(), 3_000);
        assert_eq!(wave().ttl_ms(), 1_000);
    }

    #[test]
    fn petal_shape() {
        let css = wave().with_shape(Shape::Petal).to_css();
        assert!(css.contains("border-radius: 50% 50% 50% 50% / 60% 60% 40% 40%"));
    }
}
