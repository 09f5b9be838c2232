//! Device mode - coarse mobile/desktop split decided once at startup

use std::fmt;
use std::str::FromStr;

/// User-agent fragments that mark a handheld device (matched case-insensitively)
const MOBILE_AGENTS: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Viewports narrower than this are treated as mobile regardless of agent
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceMode {
    Mobile,
    Desktop,
}

impl DeviceMode {
    /// Same signals in, same mode out
    pub fn detect(env: &EnvSignals) -> Self {
        if let Some(mode) = env.forced {
            return mode;
        }
        let agent = env.user_agent.to_ascii_lowercase();
        let handheld = MOBILE_AGENTS.iter().any(|frag| agent.contains(frag));
        if handheld || env.viewport_width < MOBILE_MAX_WIDTH {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Self::Mobile)
    }
}

impl fmt::Display for DeviceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        })
    }
}

impl FromStr for DeviceMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" | "lite" => Ok(Self::Mobile),
            "desktop" | "full" => Ok(Self::Desktop),
            _ => Err(()),
        }
    }
}

/// Environment read once at load
#[derive(Debug, Clone, PartialEq)]
pub struct EnvSignals {
    pub user_agent: String,
    pub viewport_width: f64,
    pub touch: bool,
    /// `?effects=mobile|desktop` from the page URL
    pub forced: Option<DeviceMode>,
}

impl EnvSignals {
    /// Read from the browser window. `None` outside a browser.
    pub fn read() -> Option<Self> {
        let window = web_sys::window()?;
        let user_agent = window.navigator().user_agent().unwrap_or_default();
        let viewport_width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(MOBILE_MAX_WIDTH);
        let touch = js_sys::Reflect::has(&window, &"ontouchstart".into()).unwrap_or(false);
        let forced = window
            .location()
            .search()
            .ok()
            .and_then(|q| query_param(&q, "effects"))
            .and_then(|v| v.parse().ok());

        Some(Self { user_agent, viewport_width, touch, forced })
    }

    /// Event that counts as one interaction on this device
    pub fn interaction_event(&self) -> &'static str {
        if self.touch { "touchstart" } else { "click" }
    }
}

/// Value of `key` in a `?a=1&b=2` query string
fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(agent: &str, width: f64) -> EnvSignals {
        EnvSignals {
            user_agent: agent.into(),
            viewport_width: width,
            touch: false,
            forced: None,
        }
    }

    const CHROME_DESKTOP: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
    const IPHONE: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";

    #[test]
    fn wide_desktop_is_desktop() {
        assert_eq!(DeviceMode::detect(&env(CHROME_DESKTOP, 1440.0)), DeviceMode::Desktop);
    }

    #[test]
    fn handheld_agent_is_mobile_at_any_width() {
        assert_eq!(DeviceMode::detect(&env(IPHONE, 1440.0)), DeviceMode::Mobile);
        assert_eq!(DeviceMode::detect(&env("Opera Mini/36.2", 1200.0)), DeviceMode::Mobile);
    }

    #[test]
    fn narrow_viewport_is_mobile() {
        assert_eq!(DeviceMode::detect(&env(CHROME_DESKTOP, 767.0)), DeviceMode::Mobile);
        assert_eq!(DeviceMode::detect(&env(CHROME_DESKTOP, 768.0)), DeviceMode::Desktop);
    }

    #[test]
    fn detection_is_deterministic() {
        let signals = env(CHROME_DESKTOP, 1024.0);
        let first = DeviceMode::detect(&signals);
        assert!((0..10).all(|_| DeviceMode::detect(&signals) == first));
    }

    #[test]
    fn query_override_wins() {
        let mut signals = env(IPHONE, 400.0);
        signals.forced = Some(DeviceMode::Desktop);
        assert_eq!(DeviceMode::detect(&signals), DeviceMode::Desktop);
    }

    #[test]
    fn query_param_parsing() {
        assert_eq!(query_param("?debug=1&effects=mobile", "effects").as_deref(), Some("mobile"));
        assert_eq!(query_param("", "effects"), None);
        assert_eq!("Desktop".parse::<DeviceMode>(), Ok(DeviceMode::Desktop));
        assert!("tablet".parse::<DeviceMode>().is_err());
    }

    #[test]
    fn touch_devices_listen_for_touchstart() {
        let mut signals = env(IPHONE, 400.0);
        assert_eq!(signals.interaction_event(), "click");
        signals.touch = true;
        assert_eq!(signals.interaction_event(), "touchstart");
    }
}
