use anyhow::{anyhow, Context};
use derive_builder::Builder;
use directories::UserDirs;
use std::path::{Component, Path, PathBuf};

use crate::template::Catalog;

/// Everything a run needs, built once in `main` and passed down.
pub struct Config {
    pub catalog: Catalog,
    pub dirs: SiteDirs,
}

impl Config {
    #[must_use]
    pub fn new(catalog: Catalog, dirs: SiteDirs) -> Self {
        Config { catalog, dirs }
    }
}

#[derive(Builder, Debug, Clone)]
#[builder(setter(into))]
pub struct SiteDirs {
    template_root: PathBuf,
    working_dir: PathBuf,
    #[builder(default)]
    user_home: Option<PathBuf>,
}

impl SiteDirs {
    /// Create a new [`SiteDirs`] builder
    #[must_use]
    pub fn builder() -> SiteDirsBuilder {
        SiteDirsBuilder::create_empty()
    }

    /// Attempt to create a new [`SiteDirs`] instance with the default
    /// locations, optionally replacing the template root.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the current directory or the location of the
    /// running executable can not be determined.
    pub fn default_paths(template_root: Option<&Path>) -> anyhow::Result<Self> {
        let template_root = match template_root {
            Some(root) => root.to_path_buf(),
            None => Self::get_install_template_root()?,
        };

        Ok(Self {
            template_root,
            working_dir: Self::get_current_dir()?,
            user_home: Self::get_user_home(),
        })
    }

    /// Returns the directory holding the bundled templates.
    ///
    /// Templates ship next to the program, at `<install dir>/../template`,
    /// where the install dir is the directory of the resolved executable.
    /// The caller's working directory plays no part.
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the path of the running executable is unknown.
    pub fn get_install_template_root() -> anyhow::Result<PathBuf> {
        let exe = std::env::current_exe().context("Failed to locate the running executable")?;
        let exe = std::fs::canonicalize(&exe).unwrap_or(exe);

        let install_dir = exe
            .parent()
            .ok_or_else(|| anyhow!("Executable {} has no parent directory", exe.display()))?;

        Ok(install_dir.join("..").join("template"))
    }

    /// Returns the current working directory as a [`PathBuf`]
    ///
    /// # Errors
    ///
    /// Returns an [`Err`] if the current working directory value is invalid.
    /// Possible cases:
    ///
    /// * Current directory does not exist.
    /// * There are insufficient permissions to access the current directory.
    pub fn get_current_dir() -> anyhow::Result<PathBuf> {
        std::env::current_dir().context("Failed to get current dir")
    }

    /// Returns the path for the user home `~/`, if there is one
    #[must_use]
    pub fn get_user_home() -> Option<PathBuf> {
        UserDirs::new().map(|dirs| dirs.home_dir().to_owned())
    }

    #[must_use]
    pub fn template_dir(&self, key: &str) -> PathBuf {
        self.template_root.join(key)
    }

    /// Where the project named `name` is created.
    ///
    /// Always inside the working dir: roots and prefixes are dropped, so
    /// `/x/y` lands in `<working dir>/x/y`, and `..` never climbs above it.
    #[must_use]
    pub fn project_dir(&self, name: &str) -> PathBuf {
        let mut parts = Vec::new();

        for component in Path::new(name).components() {
            match component {
                Component::Normal(part) => parts.push(part),
                Component::ParentDir => {
                    parts.pop();
                }
                Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            }
        }

        parts
            .into_iter()
            .fold(self.working_dir.clone(), |dir, part| dir.join(part))
    }

    /// Renders `path` for the console with the user home shown as `~`.
    #[must_use]
    pub fn display_path(&self, path: &Path) -> String {
        match self.user_home() {
            Some(home) if !home.as_os_str().is_empty() => match path.strip_prefix(home) {
                Ok(rest) if rest.as_os_str().is_empty() => "~".to_owned(),
                Ok(rest) => format!("~/{}", rest.display()),
                Err(_) => path.display().to_string(),
            },
            _ => path.display().to_string(),
        }
    }

    #[must_use]
    pub fn template_root(&self) -> &Path {
        self.template_root.as_path()
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        self.working_dir.as_path()
    }

    #[must_use]
    pub fn user_home(&self) -> Option<&Path> {
        self.user_home.as_deref()
    }
}
