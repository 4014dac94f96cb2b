#[macro_use]
mod macros;

pub mod cli;
pub mod config;
pub mod error;
pub mod options;
pub mod print;
pub mod reading;
pub mod sensors;
pub mod util;

#[cfg(test)]
pub mod test_utils;
