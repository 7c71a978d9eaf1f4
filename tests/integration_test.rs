use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn geonotes_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_geonotes"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = geonotes_cmd()
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_examples_json() {
    let output = geonotes_cmd().args(["examples"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("{ \"notes\": [ {\n"));
    assert!(stdout.ends_with(" ] }\n"));
    assert!(stdout.contains("\"title\": \"Córdoba\""));
    assert!(stdout.contains("\"lat\": 36.529700,"));
    assert!(stdout.contains("\"lon\": -6.292700 },"));

    let p3 = stdout.find("\"id\": 3,").unwrap();
    let p1 = stdout.find("\"id\": 1,").unwrap();
    assert!(p3 < p1);
}

#[test]
fn test_examples_markdown() {
    let output = geonotes_cmd()
        .args(["examples", "--format", "markdown"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    let prefixes: Vec<&str> = lines.iter().map(|l| &l[..9]).collect();
    assert_eq!(prefixes, vec!["- [ID 3] ", "- [ID 2] ", "- [ID 1] "]);
    assert!(lines[1].starts_with("- [ID 2] \"Sevilla\" — (37.382600, -5.996300) — "));
    for line in &lines {
        // Date suffix is YYYY-MM-DD
        let date = line.rsplit(" — ").next().unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], "-");
    }
}

#[test]
fn test_examples_invalid_format_fails() {
    let output = geonotes_cmd()
        .args(["examples", "--format", "yaml"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_scripted_session() {
    let script = concat!(
        "1\nCádiz\nPlayita\n36.5297\n-6.2927\nphoto\nu\n2000\n1000\n",
        "1\nSevilla\nTriana\n37.3826\n-5.9963\naudio\na\n400\n",
        "1\nCórdoba\nMezquita\n37.8790\n-4.7794\nlink\nhttp://cordoba\n\n",
        "2\n",
        "8\n",
        "9\n",
    );
    let output = run_with_stdin(&[], script);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✅ Note 3 created."));
    assert!(stdout.contains("att=📷 High-definition photo (2000 x 1000)"));
    assert!(stdout.contains("att=🎵 Audio (6 min)"));
    assert!(stdout.contains("att=🔗 http://cordoba"));

    // Outline is newest first
    let md: Vec<&str> = stdout.lines().filter(|l| l.starts_with("- [ID ")).collect();
    assert_eq!(md.len(), 3);
    assert!(md[0].starts_with("- [ID 3] \"Córdoba\" — (37.879000, -4.779400) — "));
    assert!(md[1].starts_with("- [ID 2] \"Sevilla\""));
    assert!(md[2].starts_with("- [ID 1] \"Cádiz\""));
}

#[test]
fn test_session_recovers_from_bad_input() {
    let output = run_with_stdin(&["interactive"], "x\n1\nNorth\n-\n91\n0\n2\n9\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("please enter a number"));
    assert!(stdout.contains("Invalid latitude: 91"));
    assert!(stdout.contains("No notes yet."));
}

#[test]
fn test_session_ends_on_eof() {
    let output = run_with_stdin(&[], "2\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No notes yet."));
}

#[test]
fn test_config_latest_default() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("geonotes.json");
    std::fs::write(&path, r#"{ "latest_default": 1 }"#).unwrap();

    let script = concat!(
        "1\nOlder\n-\n1\n1\n\n",
        "1\nNewer\n-\n2\n2\n\n",
        "6\n\n",
        "9\n",
    );
    let output = run_with_stdin(&["--config", path.to_str().unwrap()], script);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let listed: Vec<&str> = stdout.lines().filter(|l| l.starts_with("ID: ")).collect();
    assert_eq!(listed.len(), 1);
}

#[test]
fn test_missing_config_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("missing.json");
    let output = run_with_stdin(&["--config", path.to_str().unwrap()], "9\n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config error"));
}
