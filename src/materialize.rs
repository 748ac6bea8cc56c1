use anyhow::{ensure, Context, Result};
use fs_extra::file::CopyOptions;
use std::path::Path;
use walkdir::WalkDir;

use crate::trace;

/// Creates `root` and any missing parents. Existing content is left alone.
///
/// # Errors
///
/// Returns an [`Err`] if the directory can not be created.
pub fn create_destination(root: &Path) -> Result<()> {
    fs_extra::dir::create_all(root, false)
        .with_context(|| format!("Failed to create directory {}", root.display()))
}

/// Copies every file under `source` into `target`, keeping relative paths.
///
/// Directories are created before their contents and colliding files are
/// overwritten. Nothing is rolled back if a copy fails halfway. Returns the
/// number of files copied.
fn copy_tree(source: &Path, target: &Path) -> Result<usize> {
    let options = CopyOptions {
        overwrite: true,
        ..CopyOptions::new()
    };
    let mut files = 0;

    for entry in WalkDir::new(source)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to read {}", source.display()))?;
        let relative = entry.path().strip_prefix(source)?;
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&destination)
                .with_context(|| format!("Failed to create directory {}", destination.display()))?;
        } else {
            fs_extra::file::copy(entry.path(), &destination, &options).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    destination.display()
                )
            })?;
            files += 1;
        }
    }

    trace!(
        "Copied {files} files from {} to {}",
        source.display(),
        target.display()
    );

    Ok(files)
}

/// Makes `root` and fills it with the template tree at `template`.
///
/// The template is checked before anything is created, so a missing template
/// leaves the filesystem untouched.
///
/// # Errors
///
/// Returns an [`Err`] if the template is missing or any IO error occurs.
pub fn materialize(template: &Path, root: &Path) -> Result<usize> {
    ensure!(
        template.is_dir(),
        "Template directory {} does not exist",
        template.display()
    );

    create_destination(root)?;
    copy_tree(template, root)
}
