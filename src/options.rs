use crate::cli::Cli;
use crate::error::Result;
use crate::reading::to_fahrenheit;

pub const DEFAULT_DELIMITER: char = ';';

/// Output options, built once from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Used to prefix diagnostics.
    pub exec_name: String,
    pub fahrenheit: bool,
    pub delimiter: char,
}

impl Options {
    pub fn new(cli: &Cli, exec_name: impl Into<String>) -> Result<Options> {
        let delimiter = match cli.delimiter.as_deref() {
            None => DEFAULT_DELIMITER,
            Some(delimiter) => {
                let mut chars = delimiter.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => bail!("the delimiter must be a single character"),
                }
            }
        };

        Ok(Options {
            exec_name: exec_name.into(),
            fahrenheit: cli.fahrenheit,
            delimiter,
        })
    }

    pub fn units(&self) -> char {
        if self.fahrenheit {
            'F'
        } else {
            'C'
        }
    }

    /// Convert a temperature in degrees Celsius into the displayed unit.
    pub fn temperature(&self, celsius: Option<f64>) -> Option<f64> {
        celsius.map(|c| if self.fahrenheit { to_fahrenheit(c) } else { c })
    }
}
