pub use clap::Parser;
use std::path::PathBuf;

use crate::{report::PackageManager, workflow::Request};

#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Args {
    /// Name of the project directory to create [default: asked interactively]
    pub project_name: Option<String>,

    /// Template to use instead of choosing one interactively
    #[clap(long, short)]
    pub template: Option<String>,

    /// Reuse an existing directory without asking, overwriting colliding files
    #[clap(long, short)]
    pub overwrite: bool,

    /// Package manager used in the printed next steps
    #[clap(long, short, value_enum, default_value_t = PackageManager::Bun)]
    pub package_manager: PackageManager,

    /// Directory holding the templates [default: <install dir>/../template]
    #[clap(long)]
    pub template_root: Option<PathBuf>,

    /// List the available templates and exit
    #[clap(long, short)]
    pub list: bool,

    /// Do not print errors
    #[clap(long)]
    pub no_errors: bool,
}

impl Args {
    #[must_use]
    pub fn no_errors(&self) -> bool {
        self.no_errors
    }

    #[must_use]
    pub fn request(&self) -> Request {
        Request {
            project_name: self.project_name.clone(),
            template: self.template.clone(),
            overwrite: self.overwrite,
        }
    }
}
