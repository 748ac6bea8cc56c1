use clap::ValueEnum;
use lazy_format::lazy_format;
use owo_colors::OwoColorize;
use std::fmt::{Display, Formatter};

use crate::{config::SiteDirs, template::Catalog, workflow::Project};

/// Package manager named in the follow-up commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PackageManager {
    #[default]
    Bun,
    Npm,
    Pnpm,
    Yarn,
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        };
        write!(f, "{name}")
    }
}

impl PackageManager {
    #[must_use]
    pub fn install_command(self) -> String {
        format!("{self} install")
    }

    #[must_use]
    pub fn dev_command(self) -> String {
        format!("{self} run dev")
    }
}

/// Shell commands to run once the project exists, in order.
#[must_use]
pub fn next_steps(project_name: &str, manager: PackageManager) -> Vec<String> {
    vec![
        format!("cd {project_name}"),
        manager.install_command(),
        manager.dev_command(),
    ]
}

pub fn print_success(project: &Project, dirs: &SiteDirs, manager: PackageManager) {
    println!(
        "\n{} Project created successfully!",
        "✔".if_supports_color(owo_colors::Stream::Stdout, |s| s.green())
    );
    println!(
        "  {} template, {} files in {}",
        project.template.display,
        project.files,
        dirs.display_path(&project.root)
    );

    println!("\nNext steps:");
    for step in next_steps(&project.name, manager) {
        let line = lazy_format!(
            "  {}",
            step.if_supports_color(owo_colors::Stream::Stdout, |s| s.blue())
        );
        println!("{line}");
    }
    println!();
}

pub fn print_cancelled() {
    println!(
        "{} Operation cancelled",
        "✖".if_supports_color(owo_colors::Stream::Stdout, |s| s.red())
    );
}

pub fn print_catalog(catalog: &Catalog) {
    println!("Available templates:");

    let width = catalog
        .keys()
        .map(str::len)
        .max()
        .unwrap_or_default();

    for template in catalog.templates() {
        let key = format!("{:width$}", template.key);
        println!(
            "    {}  {}",
            key.if_supports_color(owo_colors::Stream::Stdout, |s| s.bold()),
            template.description,
        );
    }
}
