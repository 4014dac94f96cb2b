use crate::sensors::{Chip, Feature, SensorSource, SubfeatureType};

/// A single temperature feature read from a chip, in degrees Celsius.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading<'a> {
    pub chip_name: &'a str,
    pub feature_name: &'a str,
    pub input: Option<f64>,
    /// Input as a percentage of the `[min, max]` range, see `normalize`.
    pub normalized_input: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub critical: Option<f64>,
}

pub fn to_fahrenheit(c: f64) -> f64 {
    (c * (9.0 / 5.0)) + 32.0
}

/// Express `input` as a percentage of the span between `min` and `max`, where an absent `min`
/// counts as zero. Without both `input` and `max` there is nothing to normalize.
///
/// NOTE: the span isn't checked, so a zero span gives an infinite result and an inverted one gives
/// a negative result.
pub fn normalize(input: Option<f64>, min: Option<f64>, max: Option<f64>) -> Option<f64> {
    let min = min.unwrap_or(0.0);
    let max = max?;
    let input = input?;

    Some((input / (max - min)) * 100.0)
}

/// Read a single subfeature, treating absent and unreadable values alike.
fn lookup<S>(source: &S, chip: &Chip, feature: &Feature, kind: SubfeatureType) -> Option<f64>
where
    S: SensorSource + ?Sized,
{
    let subfeature = source.subfeature(chip, feature, kind)?;
    match source.value(chip, feature, subfeature) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!(
                "failed to read {} of {}/{}: {}",
                subfeature.name,
                chip.prefix,
                feature.name,
                e
            );
            None
        }
    }
}

/// Read the input, min, max and critical values of a temperature feature.
pub fn read_sensor<'a, S>(source: &S, chip: &'a Chip, feature: &'a Feature) -> SensorReading<'a>
where
    S: SensorSource + ?Sized,
{
    let input = lookup(source, chip, feature, SubfeatureType::Input);
    let min = lookup(source, chip, feature, SubfeatureType::Min);
    let max = lookup(source, chip, feature, SubfeatureType::Max);
    let critical = lookup(source, chip, feature, SubfeatureType::Crit);

    SensorReading {
        chip_name: &chip.prefix,
        feature_name: &feature.name,
        input,
        normalized_input: normalize(input, min, max),
        min,
        max,
        critical,
    }
}
