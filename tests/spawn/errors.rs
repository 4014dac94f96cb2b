use crate::util::{run, Test};

#[test]
fn version() {
    for flag in ["--version", "-V"] {
        let output = run(&[flag]);
        assert!(output.success());
        assert!(output.stdout.starts_with(&format!(
            "tmpsnread {} Copyright (C) 2015 Ljubomir Kurij.\n",
            env!("CARGO_PKG_VERSION")
        )));
        assert!(output.stdout.ends_with("\n\n"));
        assert_eq!(output.stderr, "");
    }
}

#[test]
fn version_does_not_touch_sensors() {
    let output = run(&["--version", "--config-file", "/this/file/does/not/exist"]);
    assert!(output.success());
    assert!(!output.stdout.contains("chip name"));
}

#[test]
fn help() {
    let output = run(&["--help"]);
    assert!(output.success());
    assert!(output.stdout.contains("--fahrenheit"));
    assert!(output.stdout.contains("--delimiter <DELIM>"));
    assert!(output.stdout.contains("--config-file <CONFIG_FILE>"));
}

#[test]
fn unknown_option() {
    let output = run(&["--kelvin"]);
    assert!(!output.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn delimiter_too_long() {
    // the delimiter is checked before the config file is even opened
    let output = run(&["-d", ";;", "-c", "/this/file/does/not/exist"]);
    assert_eq!(output.code, Some(1));
    assert_eq!(output.stdout, "");
    assert_eq!(
        output.stderr,
        "tmpsnread: the delimiter must be a single character\n\
         Try 'tmpsnread --help' for more information.\n\n"
    );
}

#[test]
fn delimiter_empty() {
    let test = Test::new("empty-delimiter");
    let output = test.run(&["--delimiter", ""]);
    assert_eq!(output.code, Some(1));
    assert!(output
        .stderr
        .contains("the delimiter must be a single character"));
}

#[test]
fn missing_config_file() {
    let output = run(&["-c", "/this/file/does/not/exist"]);
    assert_eq!(output.code, Some(1));
    assert_eq!(output.stdout, "");
    assert_eq!(
        output.stderr,
        "tmpsnread: cannot open file : /this/file/does/not/exist\n\n"
    );
}

#[test]
fn invalid_config_file() {
    let test = Test::new("invalid-config");
    test.config("[[chips]\nname = ");

    let output = test.run(&[]);
    assert_eq!(output.code, Some(1));
    assert_eq!(output.stdout, "");
    assert!(output.stderr.starts_with("tmpsnread: cannot initialize : "));
}

#[test]
fn unnamed_chip_statement() {
    let test = Test::new("unnamed-chip");
    test.config("[[chips]]\nname = \"\"\n");

    let output = test.run(&[]);
    assert_eq!(output.code, Some(1));
    assert!(output
        .stderr
        .contains("cannot initialize : chips[0] must have a non-empty name"));
}

#[test]
fn hwmon_dir_is_not_a_directory() {
    let test = Test::new("hwmon-file");
    std::fs::remove_dir(&test.hwmon_dir).unwrap();
    std::fs::write(&test.hwmon_dir, "").unwrap();

    let output = test.run(&[]);
    assert_eq!(output.code, Some(1));
    assert!(output.stderr.starts_with("tmpsnread: cannot initialize : failed to read"));
}
