use std::io::{self, Write};

use crate::options::Options;
use crate::reading::{read_sensor, SensorReading};
use crate::sensors::{FeatureType, SensorSource};
use crate::util::{float_or_na, FloatFormat, NOT_AVAILABLE};

pub const HEADER: [&str; 8] = [
    "chip name",
    "feature name",
    "units",
    "input",
    "normalized input [%]",
    "min",
    "max",
    "critical",
];

fn write_row<W, S>(out: &mut W, delimiter: char, fields: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            write!(out, "{}", delimiter)?;
        }
        write!(out, "{}", field.as_ref())?;
    }

    writeln!(out)
}

pub fn print_reading<W: Write>(
    out: &mut W,
    options: &Options,
    reading: &SensorReading,
) -> io::Result<()> {
    let fmt = FloatFormat::default();
    write_row(
        out,
        options.delimiter,
        &[
            reading.chip_name.to_owned(),
            reading.feature_name.to_owned(),
            options.units().to_string(),
            float_or_na(options.temperature(reading.input), &fmt),
            // a percentage, so never converted
            float_or_na(reading.normalized_input, &fmt),
            float_or_na(options.temperature(reading.min), &fmt),
            float_or_na(options.temperature(reading.max), &fmt),
            float_or_na(options.temperature(reading.critical), &fmt),
        ],
    )
}

/// Print a header, then a line for every temperature feature of every chip in `source`.
///
/// If no chips were detected at all, a line of `N/A`s is printed instead and a hint is written to
/// `err`. Output always ends with an empty line.
pub fn print_sensors<S, O, E>(
    source: &mut S,
    options: &Options,
    out: &mut O,
    err: &mut E,
) -> io::Result<()>
where
    S: SensorSource + ?Sized,
    O: Write,
    E: Write,
{
    write_row(out, options.delimiter, &HEADER)?;

    let mut chip_count = 0;
    while let Some(chip) = source.next_chip() {
        while let Some(feature) = source.next_feature(&chip) {
            if feature.kind != FeatureType::Temp {
                continue;
            }

            let reading = read_sensor(&*source, &chip, &feature);
            print_reading(out, options, &reading)?;
        }

        chip_count += 1;
    }

    if chip_count == 0 {
        write_row(out, options.delimiter, &[NOT_AVAILABLE; 8])?;

        let exec_name = &options.exec_name;
        writeln!(err, "{}: No sensors found!", exec_name)?;
        writeln!(
            err,
            "{}: Make sure you loaded all the kernel drivers you need.",
            exec_name
        )?;
        writeln!(
            err,
            "{}: Try sensors-detect to find out which these are.",
            exec_name
        )?;
    }

    writeln!(out)?;
    out.flush()
}
