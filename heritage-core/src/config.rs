use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing knobs for the page controllers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeritageConfig {
    /// Delay (ms) before the first timeline item is activated on load.
    pub initial_activation_ms: u32,
    /// Delay (ms) between the centering scroll and the nav alignment check.
    pub nav_alignment_ms: u32,
    /// Period (ms) of the overlay language rotation.
    pub overlay_interval_ms: u32,
}

impl Default for HeritageConfig {
    fn default() -> Self {
        Self {
            initial_activation_ms: 500,
            nav_alignment_ms: 300,
            overlay_interval_ms: 3000,
        }
    }
}

impl HeritageConfig {
    pub fn initial_activation_delay(&self) -> Duration {
        Duration::from_millis(self.initial_activation_ms.into())
    }

    pub fn nav_alignment_delay(&self) -> Duration {
        Duration::from_millis(self.nav_alignment_ms.into())
    }

    pub fn overlay_interval(&self) -> Duration {
        Duration::from_millis(self.overlay_interval_ms.into())
    }
}

/// Partial configuration as supplied from JavaScript; unset fields keep the defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct HeritageConfigOverrides {
    #[serde(default)]
    pub initial_activation_ms: Option<u32>,
    #[serde(default)]
    pub nav_alignment_ms: Option<u32>,
    #[serde(default)]
    pub overlay_interval_ms: Option<u32>,
}

impl From<HeritageConfigOverrides> for HeritageConfig {
    fn from(cfg: HeritageConfigOverrides) -> Self {
        let mut base = HeritageConfig::default();
        if let Some(ms) = cfg.initial_activation_ms {
            base.initial_activation_ms = ms;
        }
        if let Some(ms) = cfg.nav_alignment_ms {
            base.nav_alignment_ms = ms;
        }
        // A zero period would spin the interval.
        if let Some(ms) = cfg.overlay_interval_ms.filter(|ms| *ms > 0) {
            base.overlay_interval_ms = ms;
        }
        base
    }
}
