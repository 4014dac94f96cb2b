use std::fs::File;
use std::io;
use std::process::ExitCode;

use clap::Parser;
use tmpsnread::cli::{exec_name, version_text, Cli};
use tmpsnread::config::SensorConfig;
use tmpsnread::options::Options;
use tmpsnread::print::print_sensors;
use tmpsnread::sensors::HwmonSource;

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = Cli::parse();
    let exec_name = exec_name();

    macro_rules! fail {
        ($($arg:tt)*) => {{
            eprintln!("{}: {}\n", exec_name, format!($($arg)*));
            return ExitCode::FAILURE;
        }};
    }

    if args.version {
        print!("{}", version_text());
        return ExitCode::SUCCESS;
    }

    let options = match Options::new(&args, &exec_name) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}: {}", exec_name, e);
            eprintln!("Try '{} --help' for more information.\n", exec_name);
            return ExitCode::FAILURE;
        }
    };

    // only check the file can be opened here, it's read when configuring the sensor source
    if let Some(path) = &args.config_file {
        if File::open(path).is_err() {
            fail!("cannot open file : {}", path.display());
        }
    }

    let mut source = match SensorConfig::read(args.config_file.as_deref())
        .and_then(HwmonSource::init)
    {
        Ok(source) => source,
        Err(e) => fail!("cannot initialize : {}", e),
    };

    let result = print_sensors(
        &mut source,
        &options,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    if let Err(e) = result {
        fail!("cannot write output : {}", e);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod test_utils;

#[cfg(test)]
crate::gen_manpage!(Cli);
