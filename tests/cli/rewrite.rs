use assert_cmd::Command;
use predicates::prelude::*;
use pom_version_infra::xml::parse_document;

use crate::common::{FULL_POM, MINIMAL_POM, NO_VERSION_POM, PomWorkspace};

fn pom_version(ws: &PomWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pom_version"));
    cmd.current_dir(ws.path());
    cmd
}

fn version_of(xml: &str) -> String {
    let doc = parse_document(xml).unwrap();
    doc.root.child("version").and_then(|v| v.text()).unwrap().to_string()
}

#[test]
fn rewrites_pom_in_working_directory() {
    let ws = PomWorkspace::with_pom(MINIMAL_POM);

    pom_version(&ws)
        .arg("2.0.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("pom.xml: 1.0.0 -> 2.0.0"));

    let written = ws.read_pom();
    let expected = parse_document("<project><version>2.0.0</version></project>").unwrap();
    assert_eq!(parse_document(&written).unwrap().root, expected.root);
}

#[test]
fn keeps_everything_but_the_project_version() {
    let ws = PomWorkspace::with_pom(FULL_POM);

    pom_version(&ws).arg("1.4.0").assert().success();

    let before = parse_document(FULL_POM).unwrap();
    let after = parse_document(&ws.read_pom()).unwrap();
    assert_eq!(version_of(&ws.read_pom()), "1.4.0");
    let parent = after.root.child("parent").unwrap();
    assert_eq!(parent.child("version").and_then(|v| v.text()), Some("2.7.5"));
    assert_eq!(after.root.attributes, before.root.attributes);
    assert_eq!(after.root.child_elements().count(), before.root.child_elements().count());
    assert!(ws.read_pom().contains("<!-- bumped by the release pipeline -->"));
}

#[test]
fn second_run_with_same_version_changes_nothing() {
    let ws = PomWorkspace::with_pom(FULL_POM);

    pom_version(&ws).arg("1.4.0").assert().success();
    let once = ws.read_pom();
    pom_version(&ws)
        .arg("1.4.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.4.0 -> 1.4.0"));

    assert_eq!(ws.read_pom(), once);
}

#[test]
fn missing_argument_exits_2_and_leaves_file() {
    let ws = PomWorkspace::with_pom(MINIMAL_POM);

    pom_version(&ws)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing required argument <NEW_VERSION>"));

    assert_eq!(ws.read_pom(), MINIMAL_POM);
}

#[test]
fn empty_argument_exits_2() {
    let ws = PomWorkspace::with_pom(MINIMAL_POM);

    pom_version(&ws).arg("").assert().code(2);

    assert_eq!(ws.read_pom(), MINIMAL_POM);
}

#[test]
fn missing_file_exits_1_and_creates_nothing() {
    let ws = PomWorkspace::empty();

    pom_version(&ws)
        .arg("2.0.0")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read file 'pom.xml'"));

    assert!(!ws.pom_path().exists());
    assert_eq!(std::fs::read_dir(ws.path()).unwrap().count(), 0);
}

#[test]
fn missing_version_element_exits_1_and_leaves_file() {
    let ws = PomWorkspace::with_pom(NO_VERSION_POM);

    pom_version(&ws)
        .arg("3.0.0")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no <version> element under <project>"));

    assert_eq!(ws.read_pom(), NO_VERSION_POM);
}

#[test]
fn malformed_xml_exits_1_and_names_the_stage() {
    let ws = PomWorkspace::with_pom("<project><version>1.0</project>");

    pom_version(&ws)
        .arg("2.0")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parsing"));

    assert_eq!(ws.read_pom(), "<project><version>1.0</project>");
}

#[test]
fn file_flag_targets_another_pom() {
    let ws = PomWorkspace::with_pom(MINIMAL_POM);
    let module = ws.write_file("module/pom.xml", MINIMAL_POM);

    pom_version(&ws).args(["--file", "module/pom.xml", "5.0"]).assert().success();

    assert_eq!(version_of(&std::fs::read_to_string(module).unwrap()), "5.0");
    assert_eq!(ws.read_pom(), MINIMAL_POM);
}

#[test]
fn quiet_prints_nothing() {
    let ws = PomWorkspace::with_pom(MINIMAL_POM);

    pom_version(&ws).args(["-q", "2.0.0"]).assert().success().stdout(predicate::str::is_empty());

    assert_eq!(version_of(&ws.read_pom()), "2.0.0");
}

#[test]
fn indent_option_controls_layout() {
    let ws = PomWorkspace::with_pom(MINIMAL_POM);

    pom_version(&ws).args(["--indent", "4", "2.0.0"]).assert().success();

    assert!(ws.read_pom().contains("\n    <version>2.0.0</version>\n"));
}
