use indexmap::IndexMap;
use serde_derive::{Deserialize, Serialize};

/// Statements applying to every chip whose prefix matches `name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChipConfig {
    /// Either an exact chip prefix, a prefix followed by `*`, or `*` to match every chip.
    pub name: String,
    /// Features which should not be reported.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Linear corrections applied to every value of a feature, keyed by feature name.
    #[serde(default)]
    pub compute: IndexMap<String, Compute>,
}

impl ChipConfig {
    pub fn matches(&self, prefix: &str) -> bool {
        match self.name.strip_suffix('*') {
            Some(start) => prefix.starts_with(start),
            None => self.name == prefix,
        }
    }
}

fn one() -> f64 {
    1.0
}

/// Correction of the form `value * scale + offset`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compute {
    #[serde(default = "one")]
    pub scale: f64,
    #[serde(default)]
    pub offset: f64,
}

impl Compute {
    pub fn apply(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }
}
