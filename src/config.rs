use serde::Deserialize;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

const DEFAULT_SCROLL_DURATION_MS: u32 = 800;
const DEFAULT_NAV_OFFSET_PX: u32 = 80;
const DEFAULT_SCROLLED_THRESHOLD_PX: u32 = 50;
const DEFAULT_MOBILE_BREAKPOINT_PX: u32 = 768;
const DEFAULT_SCROLL_THROTTLE_MS: u32 = 16;
const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;
const DEFAULT_INITIAL_JUMP_DELAY_MS: u32 = 100;
const DEFAULT_REVEAL_STAGGER_MS: u32 = 100;
const DEFAULT_HERO_STAGGER_MS: u32 = 200;
const DEFAULT_COUNTER_STEPS: u32 = 50;
const DEFAULT_COUNTER_INTERVAL_MS: u32 = 30;
const DEFAULT_TYPING_INTERVAL_MS: u32 = 100;
const DEFAULT_TYPING_DELAY_MS: u32 = 800;
const DEFAULT_RIPPLE_DURATION_MS: u32 = 600;
const DEFAULT_TILT_DIVISOR: u32 = 10;
const DEFAULT_STATUS_BANNER_MS: u32 = 3_000;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const LOW_CORE_COUNT: f64 = 4.0;
const DEFAULT_PRELOAD_RESOURCES: [&str; 2] = [
    "/css/styles.css",
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap",
];

const SCROLL_DURATION_MS_BOUNDS: (u32, u32) = (0, 5_000);
const NAV_OFFSET_PX_BOUNDS: (u32, u32) = (0, 400);
const SCROLLED_THRESHOLD_PX_BOUNDS: (u32, u32) = (0, 2_000);
const MOBILE_BREAKPOINT_PX_BOUNDS: (u32, u32) = (320, 4_096);
const SCROLL_THROTTLE_MS_BOUNDS: (u32, u32) = (1, 1_000);
const RESIZE_DEBOUNCE_MS_BOUNDS: (u32, u32) = (1, 2_000);
const INITIAL_JUMP_DELAY_MS_BOUNDS: (u32, u32) = (0, 5_000);
const STAGGER_MS_BOUNDS: (u32, u32) = (0, 2_000);
const COUNTER_STEPS_BOUNDS: (u32, u32) = (1, 1_000);
const INTERVAL_MS_BOUNDS: (u32, u32) = (1, 2_000);
const TYPING_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const RIPPLE_DURATION_MS_BOUNDS: (u32, u32) = (50, 5_000);
const TILT_DIVISOR_BOUNDS: (u32, u32) = (1, 100);
const STATUS_BANNER_MS_BOUNDS: (u32, u32) = (500, 30_000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    pub fn filter(self) -> log::LevelFilter {
        match self {
            Self::Debug => log::LevelFilter::Debug,
            Self::Info => log::LevelFilter::Info,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloadKind {
    Style,
    Font,
}

impl PreloadKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Style => "style",
            Self::Font => "font",
        }
    }

    /// Stylesheets are recognised by a `.css` path or a font-provider stylesheet URL;
    /// everything else is preloaded as a font.
    pub fn for_resource(href: &str) -> Self {
        let path = href.split(['?', '#']).next().unwrap_or(href);
        if path.ends_with(".css") || path.contains("fonts.googleapis.com/css") {
            Self::Style
        } else {
            Self::Font
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreloadHint {
    pub href: String,
    pub kind: PreloadKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub scroll_duration_ms: u32,
    pub nav_offset_px: u32,
    pub scrolled_threshold_px: u32,
    pub mobile_breakpoint_px: u32,
    pub scroll_throttle_ms: u32,
    pub resize_debounce_ms: u32,
    pub initial_jump_delay_ms: u32,
    pub reveal_stagger_ms: u32,
    pub hero_stagger_ms: u32,
    pub counter_steps: u32,
    pub counter_interval_ms: u32,
    pub typing_interval_ms: u32,
    pub typing_delay_ms: u32,
    pub ripple_duration_ms: u32,
    pub tilt_divisor: u32,
    pub status_banner_ms: u32,
    pub preload_resources: Vec<String>,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            nav_offset_px: DEFAULT_NAV_OFFSET_PX,
            scrolled_threshold_px: DEFAULT_SCROLLED_THRESHOLD_PX,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            initial_jump_delay_ms: DEFAULT_INITIAL_JUMP_DELAY_MS,
            reveal_stagger_ms: DEFAULT_REVEAL_STAGGER_MS,
            hero_stagger_ms: DEFAULT_HERO_STAGGER_MS,
            counter_steps: DEFAULT_COUNTER_STEPS,
            counter_interval_ms: DEFAULT_COUNTER_INTERVAL_MS,
            typing_interval_ms: DEFAULT_TYPING_INTERVAL_MS,
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            ripple_duration_ms: DEFAULT_RIPPLE_DURATION_MS,
            tilt_divisor: DEFAULT_TILT_DIVISOR,
            status_banner_ms: DEFAULT_STATUS_BANNER_MS,
            preload_resources: DEFAULT_PRELOAD_RESOURCES
                .iter()
                .map(ToString::to_string)
                .collect(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawSiteConfig {
    scroll_duration_ms: Option<u64>,
    nav_offset_px: Option<u64>,
    scrolled_threshold_px: Option<u64>,
    mobile_breakpoint_px: Option<u64>,
    scroll_throttle_ms: Option<u64>,
    resize_debounce_ms: Option<u64>,
    initial_jump_delay_ms: Option<u64>,
    reveal_stagger_ms: Option<u64>,
    hero_stagger_ms: Option<u64>,
    counter_steps: Option<u64>,
    counter_interval_ms: Option<u64>,
    typing_interval_ms: Option<u64>,
    typing_delay_ms: Option<u64>,
    ripple_duration_ms: Option<u64>,
    tilt_divisor: Option<u64>,
    status_banner_ms: Option<u64>,
    preload_resources: Option<Vec<String>>,
    log_level: Option<String>,
}

impl SiteConfig {
    /// Parses the JSON override block. Out-of-range values keep their default and
    /// produce a warning; malformed JSON yields the defaults and a single warning.
    pub fn from_json(source: &str) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let raw = if source.trim().is_empty() {
            RawSiteConfig::default()
        } else {
            match serde_json::from_str::<RawSiteConfig>(source) {
                Ok(raw) => raw,
                Err(error) => {
                    warnings.push(format!("ignoring malformed configuration: {error}"));
                    RawSiteConfig::default()
                }
            }
        };

        let mut bounded = |name: &str, value: Option<u64>, default: u32, bounds: (u32, u32)| {
            parse_with_bounds(name, value, default, bounds, &mut warnings)
        };

        let scroll_duration_ms = bounded(
            "scrollDurationMs",
            raw.scroll_duration_ms,
            DEFAULT_SCROLL_DURATION_MS,
            SCROLL_DURATION_MS_BOUNDS,
        );
        let nav_offset_px = bounded(
            "navOffsetPx",
            raw.nav_offset_px,
            DEFAULT_NAV_OFFSET_PX,
            NAV_OFFSET_PX_BOUNDS,
        );
        let scrolled_threshold_px = bounded(
            "scrolledThresholdPx",
            raw.scrolled_threshold_px,
            DEFAULT_SCROLLED_THRESHOLD_PX,
            SCROLLED_THRESHOLD_PX_BOUNDS,
        );
        let mobile_breakpoint_px = bounded(
            "mobileBreakpointPx",
            raw.mobile_breakpoint_px,
            DEFAULT_MOBILE_BREAKPOINT_PX,
            MOBILE_BREAKPOINT_PX_BOUNDS,
        );
        let scroll_throttle_ms = bounded(
            "scrollThrottleMs",
            raw.scroll_throttle_ms,
            DEFAULT_SCROLL_THROTTLE_MS,
            SCROLL_THROTTLE_MS_BOUNDS,
        );
        let resize_debounce_ms = bounded(
            "resizeDebounceMs",
            raw.resize_debounce_ms,
            DEFAULT_RESIZE_DEBOUNCE_MS,
            RESIZE_DEBOUNCE_MS_BOUNDS,
        );
        let initial_jump_delay_ms = bounded(
            "initialJumpDelayMs",
            raw.initial_jump_delay_ms,
            DEFAULT_INITIAL_JUMP_DELAY_MS,
            INITIAL_JUMP_DELAY_MS_BOUNDS,
        );
        let reveal_stagger_ms = bounded(
            "revealStaggerMs",
            raw.reveal_stagger_ms,
            DEFAULT_REVEAL_STAGGER_MS,
            STAGGER_MS_BOUNDS,
        );
        let hero_stagger_ms = bounded(
            "heroStaggerMs",
            raw.hero_stagger_ms,
            DEFAULT_HERO_STAGGER_MS,
            STAGGER_MS_BOUNDS,
        );
        let counter_steps = bounded(
            "counterSteps",
            raw.counter_steps,
            DEFAULT_COUNTER_STEPS,
            COUNTER_STEPS_BOUNDS,
        );
        let counter_interval_ms = bounded(
            "counterIntervalMs",
            raw.counter_interval_ms,
            DEFAULT_COUNTER_INTERVAL_MS,
            INTERVAL_MS_BOUNDS,
        );
        let typing_interval_ms = bounded(
            "typingIntervalMs",
            raw.typing_interval_ms,
            DEFAULT_TYPING_INTERVAL_MS,
            INTERVAL_MS_BOUNDS,
        );
        let typing_delay_ms = bounded(
            "typingDelayMs",
            raw.typing_delay_ms,
            DEFAULT_TYPING_DELAY_MS,
            TYPING_DELAY_MS_BOUNDS,
        );
        let ripple_duration_ms = bounded(
            "rippleDurationMs",
            raw.ripple_duration_ms,
            DEFAULT_RIPPLE_DURATION_MS,
            RIPPLE_DURATION_MS_BOUNDS,
        );
        let tilt_divisor = bounded(
            "tiltDivisor",
            raw.tilt_divisor,
            DEFAULT_TILT_DIVISOR,
            TILT_DIVISOR_BOUNDS,
        );
        let status_banner_ms = bounded(
            "statusBannerMs",
            raw.status_banner_ms,
            DEFAULT_STATUS_BANNER_MS,
            STATUS_BANNER_MS_BOUNDS,
        );

        let preload_resources = match raw.preload_resources {
            Some(resources) => resources
                .into_iter()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .collect(),
            None => Self::default().preload_resources,
        };

        let log_level = match raw.log_level.as_deref().map(str::trim) {
            None => DEFAULT_LOG_LEVEL,
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "debug" => LogLevel::Debug,
                "info" => LogLevel::Info,
                _ => {
                    warnings.push(format!(
                        "logLevel `{value}` is not supported, using `{}`",
                        DEFAULT_LOG_LEVEL.as_str()
                    ));
                    DEFAULT_LOG_LEVEL
                }
            },
        };

        let config = Self {
            scroll_duration_ms,
            nav_offset_px,
            scrolled_threshold_px,
            mobile_breakpoint_px,
            scroll_throttle_ms,
            resize_debounce_ms,
            initial_jump_delay_ms,
            reveal_stagger_ms,
            hero_stagger_ms,
            counter_steps,
            counter_interval_ms,
            typing_interval_ms,
            typing_delay_ms,
            ripple_duration_ms,
            tilt_divisor,
            status_banner_ms,
            preload_resources,
            log_level,
        };

        (config, warnings)
    }

    pub fn preload_hints(&self) -> Vec<PreloadHint> {
        self.preload_resources
            .iter()
            .map(|href| PreloadHint {
                href: href.clone(),
                kind: PreloadKind::for_resource(href),
            })
            .collect()
    }
}

/// An unreported core count (0) is not treated as a low-end device.
pub fn is_low_core_count(cores: f64) -> bool {
    cores > 0.0 && cores < LOW_CORE_COUNT
}

fn parse_with_bounds(
    name: &str,
    value: Option<u64>,
    default: u32,
    bounds: (u32, u32),
    warnings: &mut Vec<String>,
) -> u32 {
    let Some(value) = value else {
        return default;
    };

    match u32::try_from(value)
        .ok()
        .filter(|value| (bounds.0..=bounds.1).contains(value))
    {
        Some(accepted) => accepted,
        None => {
            warnings.push(format!(
                "{name}={value} is outside {}..={}, using {default}",
                bounds.0, bounds.1
            ));
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_yields_defaults_without_warnings() {
        let (config, warnings) = SiteConfig::from_json("  ");

        assert_eq!(config, SiteConfig::default());
        assert!(warnings.is_empty());
        assert_eq!(config.scroll_duration_ms, 800);
        assert_eq!(config.scrolled_threshold_px, 50);
        assert_eq!(config.mobile_breakpoint_px, 768);
    }

    #[test]
    fn overrides_within_bounds_are_applied() {
        let (config, warnings) = SiteConfig::from_json(
            r#"{"scrollDurationMs": 450, "revealStaggerMs": 60, "logLevel": "DEBUG"}"#,
        );

        assert!(warnings.is_empty());
        assert_eq!(config.scroll_duration_ms, 450);
        assert_eq!(config.reveal_stagger_ms, 60);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.typing_interval_ms, 100);
    }

    #[test]
    fn out_of_range_values_fall_back_with_a_warning() {
        let (config, warnings) =
            SiteConfig::from_json(r#"{"counterSteps": 0, "tiltDivisor": 99999999999}"#);

        assert_eq!(config.counter_steps, 50);
        assert_eq!(config.tilt_divisor, 10);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("counterSteps=0"));
    }

    #[test]
    fn malformed_json_keeps_every_default() {
        let (config, warnings) = SiteConfig::from_json("{not json");

        assert_eq!(config, SiteConfig::default());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn unknown_log_level_is_reported() {
        let (config, warnings) = SiteConfig::from_json(r#"{"logLevel": "trace"}"#);

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn preload_resources_can_be_replaced_and_blank_entries_dropped() {
        let (config, _) =
            SiteConfig::from_json(r#"{"preloadResources": ["/fonts/inter.woff2", "  "]}"#);

        assert_eq!(
            config.preload_hints(),
            vec![PreloadHint {
                href: "/fonts/inter.woff2".to_string(),
                kind: PreloadKind::Font,
            }]
        );
    }

    #[test]
    fn default_preload_hints_are_stylesheets() {
        let kinds = SiteConfig::default()
            .preload_hints()
            .into_iter()
            .map(|hint| hint.kind)
            .collect::<Vec<_>>();

        assert_eq!(kinds, vec![PreloadKind::Style, PreloadKind::Style]);
    }

    #[test]
    fn core_count_below_four_is_low_performance() {
        assert!(is_low_core_count(2.0));
        assert!(!is_low_core_count(4.0));
        assert!(!is_low_core_count(0.0));
    }

    #[test]
    fn preload_kind_ignores_query_strings() {
        assert_eq!(
            PreloadKind::for_resource("/theme.css?v=3"),
            PreloadKind::Style
        );
        assert_eq!(
            PreloadKind::for_resource("/fonts/inter.woff2#v2"),
            PreloadKind::Font
        );
    }
}
