//! Sampler - randomized particle builders
//!
//! Every builder draws from the injected generator only, so a seeded
//! generator reproduces the same sequence of particles.

use rand::Rng;

use super::{Extent, Fill, Particle, Shape};
use crate::primitives::{Anchor, Keyframes, Point, palette};

/// Particles in one click burst
pub const BURST_COUNT: usize = 8;
/// Particles in one butterfly hover burst
pub const COLORFUL_COUNT: usize = 12;
/// Dust motes per butterfly
pub const DUST_COUNT: usize = 5;

pub struct Sampler;

impl Sampler {
    /// Desktop ambient sparkle rising from the lower part of the screen
    pub fn magical<R: Rng>(rng: &mut R, colors: &[&'static str]) -> Particle {
        let size = rng.random_range(0.8..2.3);
        let color = palette::pick(rng, colors);
        let anchor = Anchor::Rising {
            left_vw: rng.random_range(0.0..100.0),
            bottom_vh: rng.random_range(60.0..90.0),
        };

        Particle::new(
            Keyframes::MagicalFloat,
            anchor,
            Extent::square_vmin(size),
            Fill::Glow(color.to_string()),
        )
        .with_blur(0.2)
    }

    /// Mobile ambient sparkle: smaller, flat, no blur filter
    pub fn magical_lite<R: Rng>(rng: &mut R) -> Particle {
        let size = rng.random_range(0.6..1.8);
        let color = palette::pick(rng, palette::AMBIENT_FLAT);
        let anchor = Anchor::Rising {
            left_vw: rng.random_range(0.0..100.0),
            bottom_vh: rng.random_range(65.0..90.0),
        };

        Particle::new(
            Keyframes::MagicalFloatMobile,
            anchor,
            Extent::square_vmin(size),
            Fill::Solid(color.to_string()),
        )
        .with_opacity(0.8)
        .with_halo(format!("0 0 2px {color}"))
    }

    /// Expanding ring centred on the pointer
    pub fn click_wave(at: Point) -> Particle {
        Particle::new(
            Keyframes::ClickWave,
            Anchor::Centered(at),
            Extent::Px(20.0, 20.0),
            Fill::Ring(palette::WAVE_STROKE.to_string()),
        )
        .with_layer(20)
    }

    /// Evenly spaced radial burst around the pointer
    pub fn burst<R: Rng>(rng: &mut R, at: Point) -> Vec<Particle> {
        Self::radial(rng, at, BURST_COUNT, Keyframes::BurstParticle, palette::BURST, 50.0..150.0, 0.5..1.5)
            .into_iter()
            .map(|p| p.with_layer(15))
            .collect()
    }

    /// Larger, more colourful burst for butterfly hover
    pub fn colorful_burst<R: Rng>(rng: &mut R, at: Point) -> Vec<Particle> {
        Self::radial(rng, at, COLORFUL_COUNT, Keyframes::ColorfulBurst, palette::COLORFUL, 40.0..120.0, 0.4..1.2)
            .into_iter()
            .map(|p| p.with_layer(20))
            .collect()
    }

    fn radial<R: Rng>(
        rng: &mut R,
        at: Point,
        count: usize,
        keyframes: Keyframes,
        colors: &[&'static str],
        distance: std::ops::Range<f32>,
        size: std::ops::Range<f32>,
    ) -> Vec<Particle> {
        let step = 360.0 / count as f32;
        (0..count)
            .map(|i| {
                let distance = rng.random_range(distance.clone());
                let size = rng.random_range(size.clone());
                let color = palette::pick(rng, colors);
                Particle::new(
                    keyframes,
                    Anchor::Centered(at),
                    Extent::square_vmin(size),
                    Fill::Solid(color.to_string()),
                )
                .with_var("--angle", format!("{}deg", step * i as f32))
                .with_var("--distance", format!("{distance:.1}px"))
            })
            .collect()
    }

    /// Dust motes drifting up from a butterfly's centre
    pub fn dust<R: Rng>(rng: &mut R, from: Point, colors: &[&'static str]) -> Vec<Particle> {
        (0..DUST_COUNT)
            .map(|_| {
                let size = rng.random_range(0.3..1.1);
                let color = palette::pick(rng, colors);
                Particle::new(
                    Keyframes::ButterflyDust,
                    Anchor::Point(from),
                    Extent::square_vmin(size),
                    Fill::Glow(color.to_string()),
                )
                .with_layer(12)
                .with_blur(0.2)
            })
            .collect()
    }

    /// Pink petal falling from above the top edge
    pub fn petal<R: Rng>(rng: &mut R) -> Particle {
        let anchor = Anchor::Falling {
            left_vw: rng.random_range(0.0..100.0),
            top_vh: -5.0,
        };
        let width = rng.random_range(0.5..1.5);
        let height = rng.random_range(0.8..2.3);
        let fall_ms = rng.random_range(4_000..=7_000);

        Particle::new(
            Keyframes::PetalFall,
            anchor,
            Extent::Vmin(width, height),
            Fill::Gradient(palette::PETAL_GRADIENT),
        )
        .with_shape(Shape::Petal)
        .with_duration(fall_ms)
        .with_easing("ease-in")
        .with_layer(5)
    }

    /// Blinking firefly hovering low over the garden
    pub fn firefly<R: Rng>(rng: &mut R) -> Particle {
        let anchor = Anchor::Rising {
            left_vw: rng.random_range(0.0..100.0),
            bottom_vh: rng.random_range(10.0..50.0),
        };
        let size = rng.random_range(0.6..1.2);
        let color = palette::pick(rng, palette::FIREFLY);

        Particle::new(
            Keyframes::FireflyGlow,
            anchor,
            Extent::square_vmin(size),
            Fill::Glow(color.to_string()),
        )
        .with_easing("ease-in-out")
        .with_halo(format!("0 0 8px {color}"))
        .with_layer(12)
    }

    pub fn snowflake<R: Rng>(rng: &mut R) -> Particle {
        let anchor = Anchor::Falling {
            left_vw: rng.random_range(0.0..100.0),
            top_vh: -5.0,
        };
        let size = rng.random_range(0.4..1.0);
        let color = palette::pick(rng, palette::SNOW);
        let fall_ms = rng.random_range(6_000..=8_000);

        Particle::new(
            Keyframes::SnowDrift,
            anchor,
            Extent::square_vmin(size),
            Fill::Solid(color.to_string()),
        )
        .with_duration(fall_ms)
        .with_easing("linear")
        .with_opacity(0.9)
        .with_layer(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn magical_stays_in_documented_ranges() {
        let mut rng = rng();
        for _ in 0..100 {
            let p = Sampler::magical(&mut rng, palette::AMBIENT);
            let Extent::Vmin(w, h) = p.extent else { panic!("expected vmin extent") };
            assert!((0.8..2.3).contains(&w));
            assert_eq!(w, h);
            let Anchor::Rising { left_vw, bottom_vh } = p.anchor else { panic!("expected rising anchor") };
            assert!((0.0..100.0).contains(&left_vw));
            assert!((60.0..90.0).contains(&bottom_vh));
            assert_eq!(p.ttl_ms(), 8_000);
        }
    }

    #[test]
    fn burst_angles_are_evenly_spaced() {
        let burst = Sampler::burst(&mut rng(), Point::new(10.0, 10.0));
        assert_eq!(burst.len(), BURST_COUNT);
        let angles: Vec<&str> = burst.iter().map(|p| p.vars[0].1.as_str()).collect();
        assert_eq!(angles[0], "0deg");
        assert_eq!(angles[2], "90deg");
        assert_eq!(angles[7], "315deg");
    }

    #[test]
    fn colorful_burst_has_twelve() {
        let burst = Sampler::colorful_burst(&mut rng(), Point::ORIGIN);
        assert_eq!(burst.len(), COLORFUL_COUNT);
        assert!(burst.iter().all(|p| p.keyframes == Keyframes::ColorfulBurst));
    }

    #[test]
    fn dust_uses_given_palette() {
        let colors = palette::dust_for(1);
        for p in Sampler::dust(&mut rng(), Point::new(5.0, 5.0), colors) {
            let Fill::Glow(c) = &p.fill else { panic!("expected glow fill") };
            assert!(colors.contains(&c.as_str()));
        }
    }

    #[test]
    fn petal_outlives_its_fall() {
        let mut rng = rng();
        for _ in 0..50 {
            let p = Sampler::petal(&mut rng);
            assert!((4_000..=7_000).contains(&p.duration_ms));
            assert_eq!(p.ttl_ms(), 7_000);
        }
    }

    #[test]
    fn seeded_samplers_repeat() {
        let a = Sampler::snowflake(&mut rng()).to_css();
        let b = Sampler::snowflake(&mut rng()).to_css();
        assert_eq!(a, b);
    }
}
