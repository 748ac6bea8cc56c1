use anyhow::Result;
use clap::Parser;
use create_site::{
    args::Args,
    config::{Config, SiteDirs},
    error,
    prompt::Interactive,
    report,
    template::Catalog,
    trace,
    workflow::{self, Outcome},
};
use std::process::ExitCode;

fn app(args: &Args) -> Result<ExitCode> {
    let config = Config::new(
        Catalog::builtin(),
        SiteDirs::default_paths(args.template_root.as_deref())?,
    );

    trace!("Template root: {}", config.dirs.template_root().display());
    trace!("Working dir: {}", config.dirs.working_dir().display());

    if args.list {
        report::print_catalog(&config.catalog);
        return Ok(ExitCode::SUCCESS);
    }

    let result = workflow::run(&config, &mut Interactive, &args.request());

    match &result {
        Ok(Outcome::Created(project)) => {
            report::print_success(project, &config.dirs, args.package_manager);
        }
        Ok(Outcome::Cancelled) => report::print_cancelled(),
        Err(e) if !args.no_errors() => error!("{e:#}"),
        Err(_) => {}
    }

    Ok(workflow::exit_code(&result))
}

fn main() -> ExitCode {
    let args = Args::parse();

    match app(&args) {
        Ok(code) => code,
        Err(e) => {
            if !args.no_errors() {
                error!("{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
