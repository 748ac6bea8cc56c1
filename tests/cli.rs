use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

fn template_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("template")
}

fn create_site(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_create-site"))
        .current_dir(cwd)
        .args(args)
        .env_remove("CREATE_SITE_TRACE")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

#[test]
fn created_project_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();
    let root = template_root();

    let output = create_site(
        tmp.path(),
        &["site", "-t", "basic", "--template-root", root.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cd site"));
    assert!(stdout.contains("bun run dev"));
    assert!(tmp.path().join("site/package.json").is_file());
}

#[test]
fn unknown_template_exits_one() {
    let tmp = tempfile::tempdir().unwrap();
    let root = template_root();

    let output = create_site(
        tmp.path(),
        &["site", "-t", "docs", "--template-root", root.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown template `docs`"));
    assert!(!tmp.path().join("site").exists());
}

#[test]
fn missing_template_root_exits_one() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("no-templates");

    let output = create_site(
        tmp.path(),
        &["site", "-t", "blog", "--template-root", missing.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
    assert!(!tmp.path().join("site").exists());
}

#[test]
fn no_errors_hides_message_but_keeps_status() {
    let tmp = tempfile::tempdir().unwrap();
    let root = template_root();

    let output = create_site(
        tmp.path(),
        &[
            "site",
            "-t",
            "docs",
            "--no-errors",
            "--template-root",
            root.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.is_empty());
}

#[test]
fn overwrite_flag_reuses_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let root = template_root();
    fs::create_dir(tmp.path().join("site")).unwrap();
    fs::write(tmp.path().join("site/notes.txt"), "mine").unwrap();

    let output = create_site(
        tmp.path(),
        &[
            "site",
            "-t",
            "blog",
            "--overwrite",
            "--template-root",
            root.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(tmp.path().join("site/src/posts/first-post.md").is_file());
    assert_eq!(
        fs::read_to_string(tmp.path().join("site/notes.txt")).unwrap(),
        "mine"
    );
}

#[test]
fn list_exits_zero() {
    let tmp = tempfile::tempdir().unwrap();

    let output = create_site(tmp.path(), &["--list"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("basic"));
    assert!(stdout.contains("blog"));
}
