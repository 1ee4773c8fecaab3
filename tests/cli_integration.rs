//! Integration tests for the `folio` CLI.
//!
//! Each test creates a temp config directory, runs `folio` as a subprocess,
//! and verifies stdout, stderr and the exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Get the path to the built `folio` binary.
fn folio_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("folio");
    path
}

/// Run `folio -C <dir> <args>` and return the raw output.
fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(folio_bin())
        .arg("-C")
        .arg(dir)
        .args(["--log-level", "off"])
        .args(args)
        .output()
        .expect("failed to run folio")
}

/// Run and assert success, returning stdout.
fn run_ok(dir: &Path, args: &[&str]) -> String {
    let out = run(dir, args);
    assert!(
        out.status.success(),
        "folio {:?} failed:\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).unwrap()
}

fn titles(stdout: &str) -> Vec<String> {
    // "2024-01-12  frontend   Landing Page UI  [..]" -> "Landing Page UI"
    stdout
        .lines()
        .map(|line| {
            let rest = &line[23..];
            rest.split("  [").next().unwrap().trim().to_string()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

#[test]
fn projects_default_is_all_newest() {
    let tmp = TempDir::new().unwrap();
    let out = run_ok(tmp.path(), &["projects"]);
    assert_eq!(
        titles(&out),
        vec![
            "Node.js API Practice",
            "Weather Dashboard",
            "Portfolio Website",
            "JavaScript Mini Games",
            "Landing Page UI",
        ]
    );
}

#[test]
fn projects_filter_and_sort() {
    let tmp = TempDir::new().unwrap();
    let out = run_ok(tmp.path(), &["projects", "--filter", "frontend", "--sort", "az"]);
    assert_eq!(titles(&out), vec!["Landing Page UI", "Portfolio Website"]);
}

#[test]
fn projects_unknown_sort_keeps_catalog_order() {
    let tmp = TempDir::new().unwrap();
    let out = run_ok(tmp.path(), &["projects", "--sort", "sideways"]);
    assert_eq!(titles(&out)[0], "Landing Page UI");
    assert_eq!(titles(&out)[4], "JavaScript Mini Games");
}

#[test]
fn projects_use_saved_preferences() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("prefs.json"),
        r#"{"projectFilter": "practice", "projectSort": "oldest"}"#,
    )
    .unwrap();
    let out = run_ok(tmp.path(), &["projects"]);
    assert_eq!(
        titles(&out),
        vec!["JavaScript Mini Games", "Node.js API Practice"]
    );
}

#[test]
fn projects_search_matches_tags() {
    let tmp = TempDir::new().unwrap();
    let out = run_ok(tmp.path(), &["projects", "--search", "  JSON "]);
    assert_eq!(titles(&out), vec!["Weather Dashboard"]);
}

#[test]
fn projects_empty_result() {
    let tmp = TempDir::new().unwrap();
    let out = run_ok(tmp.path(), &["projects", "--search", "cobol"]);
    assert_eq!(out.trim(), "No projects match your filters.");
}

#[test]
fn projects_json() {
    let tmp = TempDir::new().unwrap();
    let out = run_ok(tmp.path(), &["--json", "projects", "--search", "css"]);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["filter"], "all");
    assert_eq!(v["search"], "css");
    let projects = v["projects"].as_array().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["title"], "Portfolio Website");
    assert_eq!(projects[0]["type"], "frontend");
    assert_eq!(projects[0]["date"], "2024-02-03");
}

#[test]
fn projects_bad_filter_fails() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["projects", "--filter", "mobile"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown filter 'mobile'"));
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_replaces_catalog() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        r#"
[[projects]]
id = 10
title = "Terminal Portfolio"
type = "fullstack"
level = "advanced"
date = "2025-06-01"
tags = ["Rust", "TUI"]
"#,
    )
    .unwrap();
    let out = run_ok(tmp.path(), &["projects", "--search", "rust"]);
    assert_eq!(titles(&out), vec!["Terminal Portfolio"]);
    // Skills were not overridden
    let skills = run_ok(tmp.path(), &["skills"]);
    assert!(skills.contains("Git and Workflow"));
}

#[test]
fn config_duplicate_ids_fail() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        r#"
[[projects]]
id = 1
title = "One"
type = "frontend"
level = "beginner"
date = "2024-01-01"

[[projects]]
id = 1
title = "Also one"
type = "practice"
level = "beginner"
date = "2024-01-02"
"#,
    )
    .unwrap();
    let out = run(tmp.path(), &["projects"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("duplicate project id"));
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

#[test]
fn skills_focus_and_min() {
    let tmp = TempDir::new().unwrap();
    let out = run_ok(tmp.path(), &["skills", "--focus", "backend", "--min", "4"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Showing strength 4+ (Focus pinned: backend)");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("APIs and JSON"));
}

#[test]
fn skills_min_is_clamped() {
    let tmp = TempDir::new().unwrap();
    let out = run_ok(tmp.path(), &["--json", "skills", "--min", "9"]);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["min_strength"], 5);
    assert_eq!(v["focus"], "all");
    let names: Vec<&str> = v["skills"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["HTML and CSS", "JavaScript (ESNext)", "Git and Workflow"]
    );
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

#[test]
fn contact_valid() {
    let tmp = TempDir::new().unwrap();
    let out = run_ok(
        tmp.path(),
        &[
            "contact",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--message",
            "I would love to collaborate on a project.",
        ],
    );
    assert_eq!(out.trim(), "Thank you! Your message has been (pretend) sent.");
}

#[test]
fn contact_invalid_lists_errors() {
    let tmp = TempDir::new().unwrap();
    let out = run(
        tmp.path(),
        &["contact", "--name", "  ", "--email", "a@b", "--message", "hi"],
    );
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "name: Name is required.",
            "email: Please enter a valid email address.",
            "message: Message should be at least 20 characters long.",
        ]
    );
    assert!(String::from_utf8_lossy(&out.stderr).contains("Please fix the highlighted errors"));
}

// ---------------------------------------------------------------------------
// repos
// ---------------------------------------------------------------------------

#[test]
fn repos_require_username() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["repos", "   "]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Please enter a GitHub username."));
}

mod repos_http {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn write_config(dir: &Path, base: &str) {
        fs::write(
            dir.join("config.toml"),
            format!("[github]\nusername = \"octocat\"\napi_base = \"{}\"\n", base),
        )
        .unwrap();
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn repos_from_config_username() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "name": "Hello-World",
                    "description": null,
                    "stargazers_count": 42,
                    "updated_at": "2024-05-01T12:00:00Z",
                    "html_url": "https://github.com/octocat/Hello-World"
                }
            ])))
            .mount(&server)
            .await;

        let tmp = TempDir::new().unwrap();
        write_config(tmp.path(), &server.uri());
        let dir = tmp.path().to_path_buf();
        let out = tokio::task::spawn_blocking(move || run_ok(&dir, &["repos"]))
            .await
            .unwrap();
        assert!(out.contains("Showing most recently updated repositories for @octocat."));
        assert!(out.contains("Hello-World"));
        assert!(out.contains("No description provided."));
        assert!(out.contains("Stars: 42 | Updated: May 1, 2024"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn repos_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let tmp = TempDir::new().unwrap();
        write_config(tmp.path(), &server.uri());
        let dir = tmp.path().to_path_buf();
        let out = tokio::task::spawn_blocking(move || run(&dir, &["repos", "ghost"]))
            .await
            .unwrap();
        assert_eq!(out.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&out.stderr).contains("GitHub user not found."));
    }
}
