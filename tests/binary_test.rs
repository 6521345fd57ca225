use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_version_flag() {
    cargo::cargo_bin_cmd!("mas")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_option_shows_help() {
    cargo::cargo_bin_cmd!("mas")
        .arg("--interface")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("--interface"));
}

#[test]
fn test_new_project() {
    let temp = TempDir::new().unwrap();

    cargo::cargo_bin_cmd!("mas")
        .current_dir(temp.path())
        .arg("./myapp")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("package.json"));

    let project = temp.path().join("myapp");
    assert!(project.join("interface/myappapi").is_dir());
    assert!(project.join("interface/myappapi/demo").is_dir());
    let manifest = std::fs::read_to_string(project.join("package.json")).unwrap();
    assert!(manifest.contains(r#""name": "myapp""#));
}

#[test]
fn test_declined_current_directory() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("existing.txt"), "data").unwrap();

    cargo::cargo_bin_cmd!("mas")
        .current_dir(temp.path())
        .write_stdin("n\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("aborting"));

    let entries: Vec<_> = std::fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_confirmed_current_directory() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("my-shop");
    std::fs::create_dir(&project).unwrap();
    std::fs::write(project.join("existing.txt"), "data").unwrap();

    cargo::cargo_bin_cmd!("mas")
        .current_dir(&project)
        .write_stdin("Yes\n")
        .assert()
        .success();

    assert!(project.join("interface/my-shopapi/interface.xml").is_file());
    assert!(project.join("existing.txt").is_file());
}

#[test]
fn test_force_flag() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("existing.txt"), "data").unwrap();

    cargo::cargo_bin_cmd!("mas")
        .current_dir(temp.path())
        .args(["--force", "."])
        .assert()
        .success();

    assert!(temp.path().join("service.json").is_file());
}

#[test]
fn test_empty_destination_argument() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("blank");
    std::fs::create_dir(&project).unwrap();

    cargo::cargo_bin_cmd!("mas").current_dir(&project).arg("").assert().success();

    assert!(project.join("service.json").is_file());
    assert!(project.join("interface/blankapi/demo/if.js").is_file());
}
