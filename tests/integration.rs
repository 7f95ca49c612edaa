use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_by-example")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn build(dir: &TempDir, extra: &[&str]) -> assert_cmd::assert::Assert {
    cmd()
        .arg(fixture_path("examples"))
        .args(["-o", dir.path().to_str().unwrap()])
        .args(extra)
        .assert()
}

fn read(dir: &TempDir, name: &str) -> String {
    fs::read_to_string(dir.path().join(name)).unwrap()
}

// -- html --

#[test]
fn writes_pages_and_index() {
    let dir = TempDir::new().unwrap();

    build(&dir, &[])
        .success()
        .stdout(predicate::str::contains("wrote 2 example pages"))
        .stdout(predicate::str::contains("1 directories skipped"));

    assert!(dir.path().join("HelloWorld.html").exists());
    assert!(dir.path().join("Values.html").exists());
    assert!(!dir.path().join("Drafts.html").exists());

    let index = read(&dir, "index.html");
    assert!(index.contains("<title>C# by Example</title>"));
    assert!(index.contains(
        "  <li><a href=\"HelloWorld.html\">HelloWorld</a></li>\n  <li><a href=\"Values.html\">Values</a></li>\n"
    ));
    assert!(!index.contains("Drafts"));
}

#[test]
fn page_has_header_segments_and_script_table() {
    let dir = TempDir::new().unwrap();
    build(&dir, &[]).success();

    let page = read(&dir, "HelloWorld.html");
    assert!(page.contains("<div class=\"example\" id=\"helloworld\">"));
    assert!(page.contains(
        "<p class=\"intro\">Our first program prints the classic \"hello world\" message.</p>"
    ));
    assert!(page.contains("<p>`Main` is where execution starts.</p>"));
    assert!(page.contains("<code class=\"language-csharp\">using System;\n\nclass Program\n{</code>"));
    assert!(page.contains("Console.WriteLine(&quot;hello world&quot;);"));

    assert_eq!(page.matches("<table>").count(), 2);
    assert!(page.contains("<code class=\"language-bash\">$ dotnet run\nhello world</code>"));
    assert!(page.contains("<p>Build a binary with `dotnet build`.</p>"));
    assert!(page.contains("prism-bash.min.js"));
}

#[test]
fn page_navigation() {
    let dir = TempDir::new().unwrap();
    build(&dir, &[]).success();

    let first = read(&dir, "HelloWorld.html");
    assert!(first.contains("Next example: <a href=\"Values.html\">Values</a>."));
    assert!(first.contains("window.location.href = 'Values.html';"));

    let last = read(&dir, "Values.html");
    assert!(last.contains("<p class=\"next\"></p>"));
    assert!(last.contains("window.location.href = 'HelloWorld.html';"));
    assert!(last.contains("5 &gt; 3"));
    assert_eq!(last.matches("<table>").count(), 1);
}

#[test]
fn title_and_footer_options() {
    let dir = TempDir::new().unwrap();
    build(
        &dir,
        &[
            "-t",
            "Sharp Notes",
            "--source-url",
            "https://example.com/repo",
            "--license-url",
            "https://example.com/license",
        ],
    )
    .success();

    let page = read(&dir, "Values.html");
    assert!(page.contains("<title>Sharp Notes: Values</title>"));
    assert!(page.contains(
        "<p class=\"footer\"><a href=\"https://example.com/repo\">source</a> | <a href=\"https://example.com/license\">license</a></p>"
    ));
}

#[test]
fn only_filter() {
    let dir = TempDir::new().unwrap();
    build(&dir, &["--only", "Val*"])
        .success()
        .stdout(predicate::str::contains("wrote 1 example pages"));

    assert!(dir.path().join("Values.html").exists());
    assert!(!dir.path().join("HelloWorld.html").exists());
}

#[test]
fn stylesheet_is_copied() {
    let dir = TempDir::new().unwrap();
    let stylesheet = fixture_path("site.css");
    build(&dir, &["--stylesheet", stylesheet.as_str()]).success();

    assert_eq!(
        read(&dir, "site.css"),
        fs::read_to_string(fixture_path("site.css")).unwrap()
    );
}

#[test]
fn creates_nested_output_dir() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("public/site");

    cmd()
        .arg(fixture_path("examples"))
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    assert!(out.join("index.html").exists());
}

// -- json --

#[test]
fn json_format() {
    let dir = TempDir::new().unwrap();
    build(&dir, &["-f", "json"]).success();

    let page: serde_json::Value = serde_json::from_str(&read(&dir, "HelloWorld.json")).unwrap();
    assert_eq!(page["name"], "HelloWorld");
    assert_eq!(page["next"]["url"], "Values.json");
    assert_eq!(page["script"]["segments"][0]["add_blank_after"], true);
    assert_eq!(page["script"]["segments"][1]["code"], "$ dotnet build");

    let index: serde_json::Value = serde_json::from_str(&read(&dir, "index.json")).unwrap();
    assert_eq!(index["examples"].as_array().unwrap().len(), 2);
    assert!(!dir.path().join("index.html").exists());
}

// -- failures --

#[test]
fn invalid_format_fails() {
    let dir = TempDir::new().unwrap();
    build(&dir, &["-f", "pdf"])
        .failure()
        .stderr(predicate::str::contains("unknown format: pdf"));
}

#[test]
fn invalid_language_fails() {
    let dir = TempDir::new().unwrap();
    build(&dir, &["-l", "cobol"])
        .failure()
        .stderr(predicate::str::contains("unknown language: cobol"));
}

#[test]
fn missing_examples_dir_fails() {
    let dir = TempDir::new().unwrap();
    cmd()
        .arg(dir.path().join("missing").to_str().unwrap())
        .args(["-o", dir.path().join("site").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("examples directory not found"));

    assert!(!dir.path().join("site").exists());
}

#[test]
fn other_language_skips_everything() {
    let dir = TempDir::new().unwrap();
    build(&dir, &["-l", "rust"])
        .success()
        .stdout(predicate::str::contains("wrote 0 example pages"))
        .stdout(predicate::str::contains("3 directories skipped"));

    let index = read(&dir, "index.html");
    assert!(index.contains("<title>Rust by Example</title>"));
}
