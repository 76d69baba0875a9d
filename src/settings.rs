//! Startup settings
//!
//! Read once before the first frame: LocalStorage on the web, a JSON file
//! named by `PONG_WARS_SETTINGS` on native. Missing fields take defaults.

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::PaletteColor;

/// Hex colors for the four palette entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub light: String,
    pub dark: String,
    pub light_ball: String,
    pub dark_ball: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: "#e6e6e6".to_string(),
            dark: "#424244".to_string(),
            light_ball: "#e15f5f".to_string(),
            dark_ball: "#5fa4e1".to_string(),
        }
    }
}

impl Palette {
    /// Hex string configured for a palette entry
    pub fn hex(&self, color: PaletteColor) -> &str {
        match color {
            PaletteColor::Light => &self.light,
            PaletteColor::Dark => &self.dark,
            PaletteColor::LightBall => &self.light_ball,
            PaletteColor::DarkBall => &self.dark_ball,
        }
    }
}

/// Parse `#rrggbb` (leading `#` optional) into RGBA in 0..1
pub fn parse_hex_color(hex: &str) -> anyhow::Result<[f32; 4]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    ensure!(
        digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        "expected #rrggbb, got {:?}",
        hex
    );

    let channel = |i: usize| -> anyhow::Result<f32> {
        let byte = u8::from_str_radix(&digits[i..i + 2], 16)
            .with_context(|| format!("bad hex digits in {:?}", hex))?;
        Ok(byte as f32 / 255.0)
    };

    Ok([channel(0)?, channel(2)?, channel(4)?, 1.0])
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Surface ===
    /// Drawing surface width in simulation units
    pub surface_width: u32,
    /// Drawing surface height in simulation units
    pub surface_height: u32,
    /// Cell edge length; also the ball diameter
    pub cell_size: u32,

    // === Motion ===
    /// Per-axis speed ceiling (units/frame)
    pub speed_limit: f32,
    /// Per-axis speed floor (units/frame)
    pub min_speed: f32,
    /// Per-frame jitter amplitude
    pub jitter: f32,
    /// Initial per-axis speed of both balls
    pub start_speed: f32,
    /// RNG seed; clock-derived when absent
    pub seed: Option<u64>,

    // === Look ===
    pub palette: Palette,

    // === Native ===
    /// Frames simulated by the headless runner
    pub headless_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            cell_size: CELL_SIZE as u32,

            speed_limit: SPEED_LIMIT,
            min_speed: MIN_SPEED,
            jitter: JITTER_AMPLITUDE,
            start_speed: BALL_START_SPEED,
            seed: None,

            palette: Palette::default(),

            headless_frames: HEADLESS_FRAMES,
        }
    }
}

impl Settings {
    /// Check the settings can drive a simulation
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be positive");
        ensure!(
            self.surface_width >= self.cell_size.saturating_mul(2)
                && self.surface_height >= self.cell_size.saturating_mul(2),
            "surface {}x{} must be at least two cells ({}) on each side",
            self.surface_width,
            self.surface_height,
            self.cell_size
        );
        ensure!(
            self.min_speed > 0.0 && self.min_speed <= self.speed_limit,
            "need 0 < min_speed ({}) <= speed_limit ({})",
            self.min_speed,
            self.speed_limit
        );
        ensure!(
            self.jitter >= 0.0 && self.jitter.is_finite(),
            "jitter must be a non-negative number"
        );
        ensure!(
            self.start_speed.is_finite() && self.start_speed.abs() < self.cell_size as f32,
            "start_speed {} must be smaller than a cell",
            self.start_speed
        );
        // A wall bounce moves the ball back by one step, so the tiled span
        // left for the ball center must hold a step each way
        let tiled = |side: u32| (side / self.cell_size * self.cell_size) as f32;
        let span =
            tiled(self.surface_width).min(tiled(self.surface_height)) - self.cell_size as f32;
        let fastest = self.speed_limit.max(self.start_speed.abs());
        ensure!(
            2.0 * fastest <= span,
            "speed {} needs a span of twice that, arena only has {}",
            fastest,
            span
        );
        for color in PaletteColor::ALL {
            parse_hex_color(self.palette.hex(color))
                .with_context(|| format!("palette entry {:?}", color))?;
        }
        Ok(())
    }

    /// Parse settings from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid settings JSON")
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "pong_wars_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> anyhow::Result<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from LocalStorage");
                return Ok(settings);
            }
        }

        log::info!("Using default settings");
        Ok(Self::default())
    }

    /// Load settings from the file named by `PONG_WARS_SETTINGS`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var_os("PONG_WARS_SETTINGS") {
            Some(path) => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.to_string_lossy()))?;
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.to_string_lossy());
                Ok(settings)
            }
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.surface_width % settings.cell_size, 0);
        assert_eq!(settings.cell_size, 25);
        assert_eq!(settings.speed_limit, 10.0);
        assert_eq!(settings.min_speed, 5.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r##"{"cell_size": 20, "palette": {"dark": "#000000"}}"##).unwrap();
        assert_eq!(settings.cell_size, 20);
        assert_eq!(settings.surface_width, SURFACE_WIDTH);
        assert_eq!(settings.palette.dark, "#000000");
        assert_eq!(settings.palette.light, "#e6e6e6");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{"cell_size": -4}"#).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = [
            Settings {
                cell_size: 0,
                ..Default::default()
            },
            Settings {
                surface_width: 30,
                ..Default::default()
            },
            Settings {
                min_speed: 12.0,
                ..Default::default()
            },
            Settings {
                min_speed: 0.0,
                ..Default::default()
            },
            Settings {
                jitter: -0.1,
                ..Default::default()
            },
            Settings {
                start_speed: 40.0,
                ..Default::default()
            },
            Settings {
                cell_size: 10,
                surface_width: 20,
                surface_height: 20,
                ..Default::default()
            },
            Settings {
                min_speed: 400.0,
                speed_limit: 1000.0,
                ..Default::default()
            },
            Settings {
                speed_limit: f32::NAN,
                ..Default::default()
            },
            Settings {
                palette: Palette {
                    light_ball: "red".to_string(),
                    ..Default::default()
                },
                ..Default::default()
            },
        ];
        for settings in cases {
            assert!(settings.validate().is_err(), "accepted {:?}", settings);
        }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff0000").unwrap(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(parse_hex_color("000000").unwrap(), [0.0, 0.0, 0.0, 1.0]);
        let [r, g, b, a] = parse_hex_color("#424244").unwrap();
        assert!((r - 66.0 / 255.0).abs() < 1e-6);
        assert!((g - 66.0 / 255.0).abs() < 1e-6);
        assert!((b - 68.0 / 255.0).abs() < 1e-6);
        assert_eq!(a, 1.0);

        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
        assert!(parse_hex_color("#ééé").is_err());
        assert!(parse_hex_color("#+f+f+f").is_err());
        assert!(parse_hex_color("-1-1-1").is_err());
    }
}
