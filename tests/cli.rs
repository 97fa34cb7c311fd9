//
//  github-product
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `ghp` command isolated from the user's config and environment.
fn ghp(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ghp").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("GH_HOST")
        .env_remove("GITHUB_API_URL")
        .env_remove("GH_TOKEN")
        .env_remove("GITHUB_TOKEN")
        .env_remove("GHP_DEBUG");
    cmd
}

fn meta_mock(server: &mut mockito::Server, version: &str) -> mockito::Mock {
    server
        .mock("GET", "/api/v3/meta")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"installed_version": "{}"}}"#, version))
        .create()
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    ghp(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ghp version "));
}

#[test]
fn test_detect_github_com_json() {
    let home = TempDir::new().unwrap();
    let output = ghp(&home)
        .args(["detect", "--json", "--api-url", "https://api.github.com"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["product"], "github.com");
    assert!(json["version"].is_null());
    assert_eq!(json["capabilities"][0]["capability"], "status-field-migration");
    assert_eq!(json["capabilities"][0]["supported"], true);
}

#[test]
fn test_detect_defaults_to_github_com() {
    let home = TempDir::new().unwrap();
    ghp(&home)
        .arg("detect")
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub.com"));
}

#[test]
fn test_detect_ghe_com_from_hostname() {
    let home = TempDir::new().unwrap();
    let output = ghp(&home)
        .args(["detect", "--json", "--hostname", "acme-corp.ghe.com"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["base_url"], "https://api.acme-corp.ghe.com");
    assert_eq!(json["product"], "ghe.com");
}

#[test]
fn test_check_old_server_exits_unavailable() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = meta_mock(&mut server, "3.14.0");

    let output = ghp(&home)
        .args(["check", "--json", "--api-url"])
        .arg(format!("{}/api/v3", server.url()))
        .output()
        .unwrap();

    mock.assert();
    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["product"], "ghes");
    assert_eq!(json["version"], "3.14.0");
    assert_eq!(json["min_version"], "3.17.0");
    assert_eq!(json["supported"], false);
}

#[test]
fn test_check_current_server_succeeds() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = meta_mock(&mut server, "3.17.0");

    ghp(&home)
        .args(["check", "--capability", "status-field-migration", "--api-url"])
        .arg(format!("{}/api/v3", server.url()))
        .assert()
        .success()
        .stdout(predicate::str::contains("3.17.0"));
}

#[test]
fn test_check_unreachable_server_fails() {
    let home = TempDir::new().unwrap();
    ghp(&home)
        .args(["check", "--api-url", "http://127.0.0.1:1/api/v3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to resolve GitHub product"));
}

#[test]
fn test_check_rejects_unknown_capability() {
    let home = TempDir::new().unwrap();
    ghp(&home)
        .args(["check", "--capability", "time-travel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown capability"));
}

#[cfg(unix)]
#[test]
fn test_configured_host_is_used() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = meta_mock(&mut server, "3.18.0");

    let config = format!(
        "default_host = \"github.acme.com\"\n\n\
         [hosts.\"github.acme.com\"]\n\
         host = \"github.acme.com\"\n\
         api_url = \"{}/api/v3\"\n",
        server.url()
    );
    let config_dir = if cfg!(target_os = "macos") {
        home.path().join("Library/Application Support/ghp")
    } else {
        home.path().join(".config/ghp")
    };
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), config).unwrap();

    let output = ghp(&home).args(["detect", "--json"]).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], "3.18.0");
}
