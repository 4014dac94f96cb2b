mod hwmon;

pub use hwmon::HwmonSource;

use std::path::PathBuf;

use strum::{Display, EnumString};

use crate::error::Result;

/// The kind of a chip feature, taken from the prefix of its attribute files.
///
/// See: https://www.kernel.org/doc/html/latest/hwmon/sysfs-interface.html
#[derive(Debug, Display, EnumString, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum FeatureType {
    In,
    Fan,
    Temp,
    Power,
    Energy,
    Curr,
    Humidity,
    Intrusion,
    #[strum(serialize = "cpu")]
    Vid,
}

/// The kind of a single value belonging to a feature, taken from the suffix of its attribute file.
#[derive(Debug, Display, EnumString, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum SubfeatureType {
    Input,
    Min,
    Max,
    Lcrit,
    Crit,
    Emergency,
    MinHyst,
    MaxHyst,
    LcritHyst,
    CritHyst,
    EmergencyHyst,
    Lowest,
    Highest,
    Average,
    Offset,
    Type,
    Alarm,
    MinAlarm,
    MaxAlarm,
    LcritAlarm,
    CritAlarm,
    EmergencyAlarm,
    Fault,
    Beep,
    Div,
    Pulses,
    Vid,
    Enable,
}

/// A detected chip.
#[derive(Debug, Clone, PartialEq)]
pub struct Chip {
    /// Position of the chip in detection order.
    pub index: usize,
    /// Driver name of the chip, e.g. `coretemp` or `acpitz`.
    pub prefix: String,
    /// Directory containing the chip's attribute files.
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Attribute stem, e.g. `temp1`.
    pub name: String,
    pub kind: FeatureType,
    pub subfeatures: Vec<Subfeature>,
}

impl Feature {
    pub fn subfeature(&self, kind: SubfeatureType) -> Option<&Subfeature> {
        self.subfeatures.iter().find(|s| s.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subfeature {
    /// Attribute file name, e.g. `temp1_input`.
    pub name: String,
    pub kind: SubfeatureType,
}

/// Something that can enumerate chips and their features, and read values from them.
///
/// Enumeration is forward only: each call advances a cursor held by the source, and once a
/// source returns `None` from `next_chip` it stays exhausted. Features must be requested for the
/// chip most recently returned by `next_chip`.
pub trait SensorSource {
    fn next_chip(&mut self) -> Option<Chip>;

    fn next_feature(&mut self, chip: &Chip) -> Option<Feature>;

    /// Look up a subfeature of the given kind. Absence is normal and not an error.
    fn subfeature<'f>(
        &self,
        _chip: &Chip,
        feature: &'f Feature,
        kind: SubfeatureType,
    ) -> Option<&'f Subfeature> {
        feature.subfeature(kind)
    }

    /// Read the current value of a subfeature, already scaled to its natural unit.
    fn value(&self, chip: &Chip, feature: &Feature, subfeature: &Subfeature) -> Result<f64>;
}
