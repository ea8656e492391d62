//! CLI contract tests for `homelab scaffold docker`.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

use homelab::services::scaffold_assets;

fn homelab_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("homelab").expect("homelab binary should build");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn static_scaffold_creates_both_files() {
    let dir = TempDir::new().expect("temp dir");

    homelab_in(&dir)
        .args(["scaffold", "docker", "--static"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copying template file to"))
        .stdout(predicate::str::contains("Static Docker scaffold generated successfully."));

    dir.child("Dockerfile").assert(predicate::path::is_file());
    dir.child("nginx.conf").assert(predicate::path::is_file());
}

#[test]
fn copies_are_byte_identical_to_bundled_templates() {
    let dir = TempDir::new().expect("temp dir");

    homelab_in(&dir).args(["scaffold", "docker", "--static"]).assert().success();

    for template in scaffold_assets::static_site_bundle() {
        let copied = std::fs::read(dir.child(template.name).path())
            .expect("copied file should be readable");
        assert_eq!(copied, template.content, "{} should match the bundle", template.name);
    }
}

#[test]
fn existing_dockerfile_aborts_without_writing_anything() {
    let dir = TempDir::new().expect("temp dir");
    dir.child("Dockerfile").write_str("user content").expect("seed file");

    homelab_in(&dir)
        .args(["scaffold", "docker", "--static"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("Dockerfile"));

    dir.child("Dockerfile").assert("user content");
    dir.child("nginx.conf").assert(predicate::path::missing());
}

#[test]
fn existing_nginx_conf_blocks_the_whole_bundle() {
    let dir = TempDir::new().expect("temp dir");
    dir.child("nginx.conf").write_str("user content").expect("seed file");

    homelab_in(&dir)
        .args(["scaffold", "docker", "--static"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nginx.conf"));

    dir.child("Dockerfile").assert(predicate::path::missing());
    dir.child("nginx.conf").assert("user content");
}

#[test]
fn docker_without_bundle_flag_fails_with_hint() {
    let dir = TempDir::new().expect("temp dir");

    homelab_in(&dir)
        .args(["scaffold", "docker"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No options provided."))
        .stderr(predicate::str::contains("scaffold docker --help"));

    dir.child("Dockerfile").assert(predicate::path::missing());
}

#[test]
fn rerun_after_success_conflicts() {
    let dir = TempDir::new().expect("temp dir");

    homelab_in(&dir).args(["scaffold", "docker", "--static"]).assert().success();
    homelab_in(&dir)
        .args(["scaffold", "docker", "--static"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
