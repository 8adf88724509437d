use log::warn;

use crate::domain::Rgb;
use crate::error::ConfigError;

pub const SEED_VAR: &str = "COLORLIFE_SEED";
pub const MAX_UPS_VAR: &str = "COLORLIFE_MAX_UPS";

/// Paint colors offered in the toolbar
pub const DEFAULT_PALETTE: [Rgb; 6] = [
    Rgb::new(220, 50, 47),
    Rgb::new(38, 139, 210),
    Rgb::new(133, 153, 0),
    Rgb::new(181, 137, 0),
    Rgb::new(108, 113, 196),
    Rgb::new(42, 161, 152),
];

/// Settings for the interactive application
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub window_title: String,
    pub window_width: i32,
    pub window_height: i32,
    /// Shortest time between two generations, in seconds
    pub min_update_interval: f32,
    /// Index into the camera zoom table
    pub zoom_level: usize,
    /// Fixed seed for the simulation rng; `None` seeds from the OS
    pub seed: Option<u64>,
    pub palette: Vec<Rgb>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            window_title: "Colored Life".to_owned(),
            window_width: 1000,
            window_height: 800,
            min_update_interval: 0.016, // ~60 generations per second
            zoom_level: 3,
            seed: None,
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl SimConfig {
    /// Defaults overridden by `COLORLIFE_SEED` and `COLORLIFE_MAX_UPS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like `from_env`, but a bad variable is logged and the defaults are used
    pub fn from_env_or_default() -> Self {
        Self::from_lookup_or_default(|var| std::env::var(var).ok())
    }

    pub fn from_lookup_or_default<F>(lookup: F) -> Self
    where
        F: Fn(&'static str) -> Option<String>,
    {
        Self::from_lookup(lookup).unwrap_or_else(|err| {
            warn!("ignoring environment configuration: {err}");
            Self::default()
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            let seed = raw.trim().parse::<u64>().map_err(|_| ConfigError::Malformed {
                var: SEED_VAR,
                value: raw.clone(),
            })?;
            config.seed = Some(seed);
        }

        if let Some(raw) = lookup(MAX_UPS_VAR) {
            let ups = raw.trim().parse::<f32>().map_err(|_| ConfigError::Malformed {
                var: MAX_UPS_VAR,
                value: raw.clone(),
            })?;
            if !ups.is_finite() || ups <= 0.0 {
                return Err(ConfigError::OutOfRange { var: MAX_UPS_VAR, value: ups });
            }
            config.min_update_interval = 1.0 / ups;
        }

        Ok(config)
    }
}
