//! Keyframes - the closed catalogue of injected CSS animations
//!
//! Every transient element runs exactly one of these. The `@keyframes`
//! block for a kind lives in its own `<style id=...>` element, inserted
//! the first time an element of that kind is spawned.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyframes {
    MagicalFloat,
    MagicalFloatMobile,
    ClickWave,
    BurstParticle,
    ColorfulBurst,
    ButterflyDust,
    PetalFall,
    FireflyGlow,
    SnowDrift,
}

impl Keyframes {
    pub const ALL: &[Self] = &[
        Self::MagicalFloat,
        Self::MagicalFloatMobile,
        Self::ClickWave,
        Self::BurstParticle,
        Self::ColorfulBurst,
        Self::ButterflyDust,
        Self::PetalFall,
        Self::FireflyGlow,
        Self::SnowDrift,
    ];

    /// `@keyframes` identifier, referenced from the element's `animation`
    pub fn name(&self) -> &'static str {
        match self {
            Self::MagicalFloat => "magicalFloat",
            Self::MagicalFloatMobile => "magicalFloatMobile",
            Self::ClickWave => "clickWaveExpand",
            Self::BurstParticle => "burstParticle",
            Self::ColorfulBurst => "colorfulBurst",
            Self::ButterflyDust => "butterflyDustFloat",
            Self::PetalFall => "petalFall",
            Self::FireflyGlow => "fireflyGlow",
            Self::SnowDrift => "snowDrift",
        }
    }

    /// `id` of the `<style>` element holding the definition
    pub fn style_id(&self) -> &'static str {
        match self {
            Self::MagicalFloat => "magicalFloatStyle",
            Self::MagicalFloatMobile => "magicalFloatMobileStyle",
            Self::ClickWave => "clickWaveStyle",
            Self::BurstParticle => "burstParticleStyle",
            Self::ColorfulBurst => "colorfulBurstStyle",
            Self::ButterflyDust => "butterflyDustStyle",
            Self::PetalFall => "petalFallStyle",
            Self::FireflyGlow => "fireflyGlowStyle",
            Self::SnowDrift => "snowDriftStyle",
        }
    }

    /// Element lifetime; the removal job is scheduled this far out.
    /// Never shorter than the longest animation of this kind.
    pub fn ttl_ms(&self) -> u64 {
        match self {
            Self::MagicalFloat => 8_000,
            Self::MagicalFloatMobile => 6_000,
            Self::ClickWave => 1_000,
            Self::BurstParticle => 1_500,
            Self::ColorfulBurst => 2_000,
            Self::ButterflyDust => 4_000,
            Self::PetalFall => 7_000,
            Self::FireflyGlow => 6_000,
            Self::SnowDrift => 8_000,
        }
    }

    /// Full `@keyframes` rule
    pub fn css(&self) -> &'static str {
        match self {
            Self::MagicalFloat => r#"
@keyframes magicalFloat {
  0%   { opacity: 0;   transform: translateY(0) translateX(0) scale(0.5) rotate(0deg); }
  15%  { opacity: 1;   transform: translateY(-15vh) translateX(-8vw) scale(1) rotate(45deg); }
  50%  { opacity: 0.9; transform: translateY(-35vh) translateX(12vw) scale(0.8) rotate(180deg); filter: blur(0.3vmin); }
  85%  { opacity: 0.4; transform: translateY(-55vh) translateX(-5vw) scale(0.6) rotate(270deg); filter: blur(0.5vmin); }
  100% { opacity: 0;   transform: translateY(-80vh) translateX(0vw) scale(0.2) rotate(360deg); filter: blur(1vmin); }
}
"#,
            Self::MagicalFloatMobile => r#"
@keyframes magicalFloatMobile {
  0%   { opacity: 0;   transform: translateY(0) translateX(0) scale(0.3); }
  20%  { opacity: 0.9; transform: translateY(-12vh) translateX(-5vw) scale(1); }
  50%  { opacity: 0.7; transform: translateY(-25vh) translateX(8vw) scale(0.8); }
  80%  { opacity: 0.3; transform: translateY(-40vh) translateX(-3vw) scale(0.5); }
  100% { opacity: 0;   transform: translateY(-60vh) translateX(0vw) scale(0.2); }
}
"#,
            Self::ClickWave => r#"
@keyframes clickWaveExpand {
  0%   { transform: translate(-50%, -50%) scale(1);  opacity: 0.8; }
  100% { transform: translate(-50%, -50%) scale(15); opacity: 0; }
}
"#,
            Self::BurstParticle => r#"
@keyframes burstParticle {
  0%   { opacity: 1; transform: translate(-50%, -50%) rotate(var(--angle)) translateY(0) scale(1); }
  100% { opacity: 0; transform: translate(-50%, -50%) rotate(var(--angle)) translateY(calc(var(--distance) * -1)) scale(0.3); }
}
"#,
            Self::ColorfulBurst => r#"
@keyframes colorfulBurst {
  0%   { opacity: 1; transform: translate(-50%, -50%) rotate(var(--angle)) translateY(0) scale(1); }
  100% { opacity: 0; transform: translate(-50%, -50%) rotate(var(--angle)) translateY(calc(var(--distance) * -1)) scale(0.2); }
}
"#,
            Self::ButterflyDust => r#"
@keyframes butterflyDustFloat {
  0%   { opacity: 0.8; transform: translateY(0) translateX(0) scale(1) rotate(0deg); }
  25%  { opacity: 0.9; transform: translateY(-10vh) translateX(-5vw) scale(0.8) rotate(90deg); }
  50%  { opacity: 0.6; transform: translateY(-18vh) translateX(8vw) scale(0.6) rotate(180deg); filter: blur(0.4vmin); }
  75%  { opacity: 0.3; transform: translateY(-25vh) translateX(-3vw) scale(0.4) rotate(270deg); filter: blur(0.6vmin); }
  100% { opacity: 0;   transform: translateY(-35vh) translateX(2vw) scale(0.2) rotate(360deg); filter: blur(1vmin); }
}
"#,
            Self::PetalFall => r#"
@keyframes petalFall {
  0%   { transform: translateY(0) rotate(0deg);      opacity: 1; }
  100% { transform: translateY(110vh) rotate(360deg); opacity: 0.3; }
}
"#,
            Self::FireflyGlow => r#"
@keyframes fireflyGlow {
  0%   { opacity: 0;   transform: translate(0, 0) scale(0.6); }
  20%  { opacity: 1;   transform: translate(3vw, -4vh) scale(1); }
  45%  { opacity: 0.3; transform: translate(-2vw, -9vh) scale(0.8); }
  70%  { opacity: 1;   transform: translate(4vw, -14vh) scale(1.1); }
  100% { opacity: 0;   transform: translate(1vw, -20vh) scale(0.5); }
}
"#,
            Self::SnowDrift => r#"
@keyframes snowDrift {
  0%   { transform: translateY(0) translateX(0) rotate(0deg);        opacity: 0.9; }
  50%  { transform: translateY(55vh) translateX(4vw) rotate(180deg); opacity: 0.8; }
  100% { transform: translateY(110vh) translateX(-2vw) rotate(360deg); opacity: 0.2; }
}
"#,
        }
    }
}

impl fmt::Display for Keyframes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_rule_defines_its_own_name() {
        for kf in Keyframes::ALL {
            assert!(
                kf.css().contains(&format!("@keyframes {} ", kf.name())),
                "{kf} rule is misnamed"
            );
        }
    }

    #[test]
    fn style_ids_are_unique() {
        let ids: HashSet<_> = Keyframes::ALL.iter().map(|k| k.style_id()).collect();
        assert_eq!(ids.len(), Keyframes::ALL.len());
    }

    #[test]
    fn burst_rules_read_custom_properties() {
        assert!(Keyframes::BurstParticle.css().contains("var(--angle)"));
        assert!(Keyframes::ColorfulBurst.css().contains("var(--distance)"));
    }
}
