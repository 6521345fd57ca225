use clap::error::ErrorKind;
use mas::cli::parse_args_from;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("mas")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_default_args() {
    let parsed = parse_args_from(make_args(&[])).unwrap();

    assert_eq!(parsed.dir, PathBuf::from("."));
    assert!(!parsed.force);
    assert!(!parsed.verbose);
}

#[test]
fn test_destination_dir() {
    let parsed = parse_args_from(make_args(&["./myapp"])).unwrap();
    assert_eq!(parsed.dir, PathBuf::from("./myapp"));
}

#[test]
fn test_all_flags() {
    let parsed = parse_args_from(make_args(&["--force", "--verbose", "out"])).unwrap();

    assert!(parsed.force);
    assert!(parsed.verbose);
    assert_eq!(parsed.dir, PathBuf::from("out"));
}

#[test]
fn test_short_flags() {
    let parsed = parse_args_from(make_args(&["-f", "-v"])).unwrap();

    assert!(parsed.force);
    assert!(parsed.verbose);
}

#[test]
fn test_unknown_option() {
    let err = parse_args_from(make_args(&["--interface"])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn test_too_many_args() {
    assert!(parse_args_from(make_args(&["one", "two"])).is_err());
}

#[test]
fn test_version_flag() {
    let err = parse_args_from(make_args(&["--version"])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}
