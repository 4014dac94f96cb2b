use std::env;
use std::path::{Path, PathBuf};

use clap::{ColorChoice, Parser};

const COPYRIGHT_YEAR: &str = "2015";
const COPYRIGHT_HOLDER: &str = "Ljubomir Kurij";

#[derive(Debug, Parser)]
#[clap(
    author,
    long_about,
    name = "tmpsnread",
    color = ColorChoice::Auto,
    disable_version_flag = true
)]
/// Print temperature sensors data as csv.
///
/// Reads temperature sensors data and prints it as delimiter separated values, one line per
/// temperature feature of every detected chip, in the following format:
///
///     CHIP;FEATURE;UNITS;INPUT;NORMALIZED;MIN;MAX;CRITICAL
///
/// Values which are not available are printed as "N/A".
pub struct Cli {
    /// Print version information and then exit.
    #[clap(short = 'V', long)]
    pub version: bool,
    /// Show temperatures in degrees Fahrenheit.
    #[clap(short, long)]
    pub fahrenheit: bool,
    /// Use DELIM instead of semicolon for field delimiter.
    #[clap(short, long, value_name = "DELIM")]
    pub delimiter: Option<String>,
    /// Specify a config file.
    #[clap(short, long, value_name = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,
}

/// Name under which this program was invoked, without the directory part.
pub fn exec_name() -> String {
    env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").into())
}

pub fn version_text() -> String {
    format!(
        "{} {} Copyright (C) {} {}.
License GPLv3+: GNU GPL version 3 or later <http://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.

",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        COPYRIGHT_YEAR,
        COPYRIGHT_HOLDER
    )
}
