use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::path::Path;

pub const MANIFEST_FILE: &str = "package.json";

/// Returns `text` re-serialized with its `name` set to `name`.
///
/// Every other key keeps its value and position. Output uses two space
/// indentation.
///
/// # Errors
///
/// Returns an [`Err`] if `text` is not JSON or its top level is not an object.
pub fn with_name(text: &str, name: &str) -> Result<String> {
    let mut manifest: Value = serde_json::from_str(text)?;

    manifest
        .as_object_mut()
        .ok_or_else(|| anyhow!("Expected a JSON object at the top level"))?
        .insert("name".to_owned(), Value::String(name.to_owned()));

    Ok(serde_json::to_string_pretty(&manifest)?)
}

/// Rewrites `<root>/package.json` so its `name` is `name`.
///
/// # Errors
///
/// Returns an [`Err`] if the manifest can not be read, parsed or written.
pub fn patch_name(root: &Path, name: &str) -> Result<()> {
    let path = root.join(MANIFEST_FILE);

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let patched =
        with_name(&text, name).with_context(|| format!("Failed to parse {}", path.display()))?;

    std::fs::write(&path, patched).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_existing_name() {
        let out = with_name(r#"{"name": "template-basic", "private": true}"#, "my-site").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["name"], "my-site");
        assert_eq!(value["private"], true);
    }

    #[test]
    fn adds_missing_name() {
        let out = with_name(r#"{"version": "1.0.0"}"#, "fresh").unwrap();
        assert_eq!(out, "{\n  \"version\": \"1.0.0\",\n  \"name\": \"fresh\"\n}");
    }

    #[test]
    fn keeps_key_order_and_nested_values() {
        let source = r#"{
            "scripts": {"dev": "eleventy --serve", "build": "eleventy"},
            "name": "old",
            "devDependencies": {"@11ty/eleventy": "^3.0.0"}
        }"#;

        let out = with_name(source, "site").unwrap();

        assert_eq!(
            out,
            r#"{
  "scripts": {
    "dev": "eleventy --serve",
    "build": "eleventy"
  },
  "name": "site",
  "devDependencies": {
    "@11ty/eleventy": "^3.0.0"
  }
}"#
        );
    }

    #[test]
    fn name_is_taken_verbatim() {
        let out = with_name("{}", "nested/dir \"quoted\"").unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "nested/dir \"quoted\"");
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(with_name("{ name: ", "x").is_err());
    }

    #[test]
    fn rejects_non_object() {
        let err = with_name("[1, 2]", "x").unwrap_err();
        assert!(err.to_string().contains("object"));
    }

    #[test]
    fn patches_file_in_place() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join(MANIFEST_FILE),
            r#"{"name":"t","version":"0.1.0"}"#,
        )
        .unwrap();

        patch_name(tmp.path(), "blog-site").unwrap();

        let text = std::fs::read_to_string(tmp.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(text, "{\n  \"name\": \"blog-site\",\n  \"version\": \"0.1.0\"\n}");
    }

    #[test]
    fn missing_manifest_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = patch_name(tmp.path(), "x").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
