use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn writes_files_and_reports_dir() {
    let workdir = assert_fs::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("make_classpath");
    let output = cmd
        .env_remove("JAR_FIXTURES_CONFIG")
        .arg("--workdir")
        .arg(workdir.path())
        .arg("--target")
        .arg("src/java/foo:lib")
        .arg("Foo.class=cafebabe")
        .arg("META-INF/MANIFEST.MF=Manifest-Version: 1.0")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("classpath src.java.foo.lib default "))
        .get_output()
        .stdout
        .clone();

    let out = String::from_utf8_lossy(&output);
    let dir = out.trim().splitn(4, ' ').nth(3).expect("dir in output");
    let dir = std::path::PathBuf::from(dir);
    assert!(dir.starts_with(workdir.path().join("src.java.foo.lib")));

    let dir = assert_fs::fixture::ChildPath::new(dir);
    dir.child("Foo.class").assert("cafebabe");
    dir.child("META-INF/MANIFEST.MF")
        .assert(predicate::str::contains("Manifest-Version"));
}

#[test]
fn runtime_flag_and_conf_override() {
    let workdir = assert_fs::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("make_classpath");
    cmd.env_remove("JAR_FIXTURES_CONFIG")
        .arg("--workdir")
        .arg(workdir.path())
        .arg("--target")
        .arg(":t1")
        .arg("--runtime")
        .arg("--conf")
        .arg("test")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("classpath t1 test "));

    workdir.child("t1").assert(predicate::path::is_dir());
}

#[test]
fn malformed_file_arg_fails() {
    let workdir = assert_fs::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("make_classpath");
    cmd.env_remove("JAR_FIXTURES_CONFIG")
        .arg("--workdir")
        .arg(workdir.path())
        .arg("--target")
        .arg(":t1")
        .arg("no-equals-sign")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("expected REL=CONTENT"));

    workdir.child("t1").assert(predicate::path::missing());
}

#[test]
fn config_file_sets_log_filter_but_not_label() {
    let workdir = assert_fs::TempDir::new().unwrap();
    let cfg = workdir.child("fixtures.toml");
    cfg.write_str("log_filter = \"debug\"\ndefault_conf = \"scala\"\n")
        .unwrap();

    let mut cmd = cargo_bin_cmd!("make_classpath");
    cmd.env("JAR_FIXTURES_CONFIG", cfg.path())
        .env_remove("RUST_LOG")
        .arg("--workdir")
        .arg(workdir.path().join("out"))
        .arg("--target")
        .arg(":t1")
        .arg("a.txt=hello")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("classpath t1 default "))
        .stderr(predicate::str::contains("added default entry"));
}

#[test]
fn escaping_target_is_refused() {
    let workdir = assert_fs::TempDir::new().unwrap();
    let out = workdir.child("out");

    let mut cmd = cargo_bin_cmd!("make_classpath");
    cmd.env_remove("JAR_FIXTURES_CONFIG")
        .arg("--workdir")
        .arg(out.path())
        .arg("--target")
        .arg(":../escaped")
        .arg("a.txt=x")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("path separator"));

    workdir.child("escaped").assert(predicate::path::missing());
}
