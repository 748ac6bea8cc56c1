//! The scaffolding run, one step after another:
//!
//! name resolved -> destination checked -> template chosen -> materialized
//! -> manifest patched.
//!
//! Declining the overwrite prompt (or aborting any prompt) ends the run as
//! [`Outcome::Cancelled`] before the filesystem is touched. Any other error
//! ends it as an [`Err`], leaving whatever was already written in place.

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::{
    config::Config,
    info, manifest, materialize,
    prompt::{Cancelled, Prompter},
    template::{Catalog, Template},
    trace, warn,
};

pub const DEFAULT_PROJECT_NAME: &str = "my-11ty-site";

/// What the caller already knows before any prompt is shown.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub project_name: Option<String>,
    pub template: Option<String>,
    /// Skip the overwrite confirmation.
    pub overwrite: bool,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub root: PathBuf,
    pub template: Template,
    pub files: usize,
}

#[derive(Debug)]
pub enum Outcome {
    Created(Project),
    Cancelled,
}

impl Outcome {
    /// Only a created project counts as success.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Created(_) => ExitCode::SUCCESS,
            Outcome::Cancelled => ExitCode::FAILURE,
        }
    }
}

/// Process status for a finished run: `0` when the project was created,
/// `1` when it was cancelled or failed.
#[must_use]
pub fn exit_code(result: &Result<Outcome>) -> ExitCode {
    result.as_ref().map_or(ExitCode::FAILURE, Outcome::exit_code)
}

/// Runs the whole workflow.
///
/// # Errors
///
/// Returns an [`Err`] on any filesystem, prompt or manifest failure.
pub fn run(config: &Config, prompter: &mut dyn Prompter, request: &Request) -> Result<Outcome> {
    match scaffold(config, prompter, request) {
        Ok(project) => Ok(Outcome::Created(project)),
        Err(e) if e.is::<Cancelled>() => Ok(Outcome::Cancelled),
        Err(e) => Err(e),
    }
}

fn scaffold(config: &Config, prompter: &mut dyn Prompter, request: &Request) -> Result<Project> {
    let name = resolve_name(prompter, request.project_name.as_deref())?;
    let root = config.dirs.project_dir(&name);
    trace!("Project {name} at {}", root.display());

    check_destination(prompter, &name, &root, request.overwrite)?;
    trace!("Destination {} checked", root.display());

    let template = choose_template(prompter, &config.catalog, request.template.as_deref())?;
    trace!("Template {} chosen", template.key);

    let files = materialize::materialize(&config.dirs.template_dir(&template.key), &root)?;
    manifest::patch_name(&root, &name)?;
    trace!("Manifest patched with name {name}");

    Ok(Project {
        name,
        root,
        template: template.clone(),
        files,
    })
}

/// Uses `given` unless it is missing or empty, in which case the user is asked.
///
/// # Errors
///
/// Returns an [`Err`] if the prompt fails or is aborted.
pub fn resolve_name(prompter: &mut dyn Prompter, given: Option<&str>) -> Result<String> {
    match given {
        Some(name) if !name.is_empty() => Ok(name.to_owned()),
        _ => {
            let name = prompter.text("Project name:", DEFAULT_PROJECT_NAME)?;
            Ok(if name.is_empty() {
                DEFAULT_PROJECT_NAME.to_owned()
            } else {
                name
            })
        }
    }
}

/// Asks before reusing an existing `root`. Never modifies anything.
///
/// # Errors
///
/// Returns [`Cancelled`] if the user declines.
pub fn check_destination(
    prompter: &mut dyn Prompter,
    name: &str,
    root: &Path,
    overwrite: bool,
) -> Result<()> {
    if !root.exists() {
        return Ok(());
    }

    if overwrite {
        warn!("Directory {name} already exists, colliding files will be overwritten");
        return Ok(());
    }

    let message = format!("Directory {name} already exists. Overwrite?");
    if prompter.confirm(&message, false)? {
        Ok(())
    } else {
        Err(Cancelled.into())
    }
}

/// Picks `preselected` from the catalog or lets the user choose.
///
/// # Errors
///
/// Returns an [`Err`] if `preselected` names no template in the catalog.
pub fn choose_template<'c>(
    prompter: &mut dyn Prompter,
    catalog: &'c Catalog,
    preselected: Option<&str>,
) -> Result<&'c Template> {
    match preselected {
        Some(key) => {
            let template = catalog.get(key).ok_or_else(|| {
                anyhow!(
                    "Unknown template `{key}`. Available templates: {}",
                    catalog.keys().collect::<Vec<_>>().join(", ")
                )
            })?;
            info!("Using the {} template", template.display);
            Ok(template)
        }
        None => prompter.select("Select a template:", catalog.templates()),
    }
}
