use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::SensorConfig;
use crate::error::Result;
use crate::sensors::{Chip, Feature, FeatureType, SensorSource, Subfeature, SubfeatureType};

/// Parse an attribute file name such as `temp1_crit_hyst` into its parts.
fn parse_attribute(file_name: &str) -> Option<(FeatureType, u32, SubfeatureType)> {
    let (stem, suffix) = file_name.split_once('_')?;
    let prefix = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    let number = stem[prefix.len()..].parse::<u32>().ok()?;
    let kind = FeatureType::from_str(prefix).ok()?;
    let sub = SubfeatureType::from_str(suffix).ok()?;
    Some((kind, number, sub))
}

/// Subfeatures which report a state rather than a measurement.
fn is_flag(sub: SubfeatureType) -> bool {
    use SubfeatureType::*;
    matches!(
        sub,
        Alarm
            | MinAlarm
            | MaxAlarm
            | LcritAlarm
            | CritAlarm
            | EmergencyAlarm
            | Fault
            | Beep
            | Type
            | Enable
            | Div
            | Pulses
    )
}

/// Divisor turning a raw sysfs value into its natural unit.
///
/// See: https://www.kernel.org/doc/html/latest/hwmon/sysfs-interface.html
fn scaling(kind: FeatureType, sub: SubfeatureType) -> f64 {
    if is_flag(sub) {
        return 1.0;
    }

    match kind {
        // millivolts, millidegrees Celsius, milliamperes, milli-percent
        FeatureType::In
        | FeatureType::Temp
        | FeatureType::Curr
        | FeatureType::Humidity
        | FeatureType::Vid => 1000.0,
        // microwatts, microjoules
        FeatureType::Power | FeatureType::Energy => 1_000_000.0,
        // RPM
        FeatureType::Fan | FeatureType::Intrusion => 1.0,
    }
}

/// Sort key for entries of the hwmon class directory, so `hwmon10` comes after `hwmon2`.
fn entry_key(path: &Path) -> (u32, String) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let number = name
        .strip_prefix("hwmon")
        .and_then(|n| n.parse::<u32>().ok())
        .unwrap_or(u32::MAX);

    (number, name)
}

/// Find the directory holding a chip's attributes. Older kernels put them in `device/`.
fn attribute_dir(entry: &Path) -> Option<PathBuf> {
    [entry.to_path_buf(), entry.join("device")]
        .into_iter()
        .find(|dir| dir.join("name").is_file())
}

fn read_features(dir: &Path) -> Result<Vec<Feature>> {
    let mut features = BTreeMap::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };

        let Some((kind, number, sub)) = parse_attribute(file_name) else {
            log::trace!("skipping attribute: {}", file_name);
            continue;
        };

        features
            .entry((kind, number))
            .or_insert_with(|| Feature {
                name: format!("{}{}", kind, number),
                kind,
                subfeatures: vec![],
            })
            .subfeatures
            .push(Subfeature {
                name: file_name.to_owned(),
                kind: sub,
            });
    }

    Ok(features
        .into_values()
        .map(|mut f| {
            f.subfeatures.sort_by(|a, b| a.name.cmp(&b.name));
            f
        })
        .collect())
}

struct HwmonChip {
    chip: Chip,
    features: Vec<Feature>,
}

/// Sensor source reading the Linux hwmon sysfs interface.
pub struct HwmonSource {
    config: SensorConfig,
    chips: Vec<HwmonChip>,
    chip_cursor: usize,
    /// Index of the chip being iterated and of its next feature.
    feature_cursor: (usize, usize),
}

impl HwmonSource {
    /// Detect all chips and their features.
    ///
    /// A missing hwmon directory is not an error: it simply means no chips were detected.
    pub fn init(config: SensorConfig) -> Result<HwmonSource> {
        let mut entries = match fs::read_dir(&config.hwmon_dir) {
            Ok(entries) => entries
                .map(|e| e.map(|e| e.path()))
                .collect::<Result<Vec<_>, _>>()?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} does not exist", config.hwmon_dir.display());
                vec![]
            }
            Err(e) => bail!("failed to read {}: {}", config.hwmon_dir.display(), e),
        };
        entries.sort_by_key(|p| entry_key(p));

        let mut chips = vec![];
        for entry in entries {
            let Some(path) = attribute_dir(&entry) else {
                log::debug!("no chip name found in {}", entry.display());
                continue;
            };

            let prefix = match fs::read_to_string(path.join("name")) {
                Ok(name) => name.trim().to_owned(),
                Err(e) => {
                    log::warn!("failed to read chip name in {}: {}", path.display(), e);
                    continue;
                }
            };

            let features = read_features(&path)?;
            if features.is_empty() {
                log::debug!("discarding chip without features: {}", prefix);
                continue;
            }

            let features = features
                .into_iter()
                .filter(|f| {
                    let ignored = config.is_ignored(&prefix, &f.name);
                    if ignored {
                        log::debug!("ignoring feature: {}/{}", prefix, f.name);
                    }
                    !ignored
                })
                .collect::<Vec<_>>();

            log::debug!(
                "detected chip: {} at {} ({} features)",
                prefix,
                path.display(),
                features.len()
            );

            chips.push(HwmonChip {
                chip: Chip {
                    index: chips.len(),
                    prefix,
                    path,
                },
                features,
            });
        }

        Ok(HwmonSource {
            config,
            chips,
            chip_cursor: 0,
            feature_cursor: (0, 0),
        })
    }
}

impl SensorSource for HwmonSource {
    fn next_chip(&mut self) -> Option<Chip> {
        let chip = self.chips.get(self.chip_cursor)?.chip.clone();
        self.chip_cursor += 1;
        Some(chip)
    }

    fn next_feature(&mut self, chip: &Chip) -> Option<Feature> {
        if self.feature_cursor.0 != chip.index {
            self.feature_cursor = (chip.index, 0);
        }

        let feature = self
            .chips
            .get(chip.index)?
            .features
            .get(self.feature_cursor.1)?
            .clone();
        self.feature_cursor.1 += 1;
        Some(feature)
    }

    fn value(&self, chip: &Chip, feature: &Feature, subfeature: &Subfeature) -> Result<f64> {
        let path = chip.path.join(&subfeature.name);
        let raw = fs::read_to_string(&path)
            .map_err(|e| format!("{}: {}", path.display(), e))?
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("{}: {}", path.display(), e))?;

        let value = raw / scaling(feature.kind, subfeature.kind);
        Ok(match self.config.compute(&chip.prefix, &feature.name) {
            Some(compute) if !is_flag(subfeature.kind) => compute.apply(value),
            _ => value,
        })
    }
}
