mod chip;
mod parse;

pub use chip::{ChipConfig, Compute};

use std::path::{Path, PathBuf};

use serde_derive::{Deserialize, Serialize};

use crate::error::Result;

/// Location of the hwmon class directory on a Linux system.
pub const DEFAULT_HWMON_DIR: &str = "/sys/class/hwmon";

fn default_hwmon_dir() -> PathBuf {
    PathBuf::from(DEFAULT_HWMON_DIR)
}

/// Configuration consumed by the sensor source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Optional list of other configuration files to parse.
    /// The paths should be relative to the main configuration file's directory.
    #[serde(default)]
    pub(crate) include: Vec<PathBuf>,
    /// Directory in which hwmon chips are detected.
    #[serde(default = "default_hwmon_dir")]
    pub hwmon_dir: PathBuf,
    /// Per-chip statements, applied in order.
    #[serde(default)]
    pub chips: Vec<ChipConfig>,
}

impl Default for SensorConfig {
    fn default() -> Self {
        SensorConfig {
            include: vec![],
            hwmon_dir: default_hwmon_dir(),
            chips: vec![],
        }
    }
}

impl SensorConfig {
    /// Ensure every chip statement names the chips it applies to.
    fn validate(chips: &[ChipConfig]) -> Result<()> {
        for (i, chip) in chips.iter().enumerate() {
            if chip.name.trim().is_empty() {
                bail!("chips[{}] must have a non-empty name", i);
            }
        }

        Ok(())
    }

    /// Read the configuration from `path`, or from the default location if no path was given.
    pub fn read(path: Option<&Path>) -> Result<SensorConfig> {
        let cfg = parse::parse(path)?;
        Self::validate(&cfg.chips)?;
        Ok(cfg)
    }

    /// Whether the given feature of a chip was hidden by an `ignore` statement.
    pub fn is_ignored(&self, prefix: &str, feature: &str) -> bool {
        self.chips
            .iter()
            .filter(|c| c.matches(prefix))
            .any(|c| c.ignore.iter().any(|i| i == feature))
    }

    /// The last `compute` statement matching the given feature of a chip.
    pub fn compute(&self, prefix: &str, feature: &str) -> Option<&Compute> {
        self.chips
            .iter()
            .rev()
            .filter(|c| c.matches(prefix))
            .find_map(|c| c.compute.get(feature))
    }
}
