use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};

use crate::LogSink;

use super::{error::MissingEnvironment, theme::ActiveTheme};

const CONFIG_DIR_NAME: &str = ".wallpaper";
const CONFIG_FILE_NAME: &str = "config.yml";

/// Name of the managed link inside the configuration directory.
pub(crate) const LINK_NAME: &str = "current";

/// The directory holding `config.yml` and the `current` link.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ConfigDir(PathBuf);

impl ConfigDir {
    /// Uses `path` when given, `~/.wallpaper` otherwise. Both the directory
    /// and its `config.yml` must exist.
    pub fn locate(path: Option<PathBuf>) -> Result<ConfigDir, MissingEnvironment> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };
        Self::from_path(path)
    }

    pub fn from_path<P>(path: P) -> Result<ConfigDir, MissingEnvironment>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(MissingEnvironment::Directory(path.to_path_buf()));
        }
        let config_dir = ConfigDir(path.to_path_buf());
        if !config_dir.config_file().is_file() {
            return Err(MissingEnvironment::File(config_dir.config_file()));
        }
        Ok(config_dir)
    }

    pub fn default_path() -> Result<PathBuf, MissingEnvironment> {
        let home = dirs::home_dir().ok_or(MissingEnvironment::Home)?;
        Ok(home.join(CONFIG_DIR_NAME))
    }

    pub fn config_file(&self) -> PathBuf {
        self.0.join(CONFIG_FILE_NAME)
    }

    pub fn read_config(&self) -> Result<String> {
        let path = self.config_file();
        std::fs::read_to_string(&path)
            .with_context(|| anyhow!("Failed to read config file at: {}", path.display()))
    }

    /// Makes this directory the working directory, relative theme
    /// directories and the link name resolve against it afterwards.
    pub fn enter(&self) -> Result<()> {
        std::env::set_current_dir(&self.0).with_context(|| {
            anyhow!(
                "Failed to change working directory to: {}",
                self.0.display()
            )
        })
    }
}

/// What [ThemeLink::sync] did to the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkChange {
    Created,
    Unchanged,
    Changed,
}

/// The symlink pointing at the active theme directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ThemeLink(PathBuf);

impl ThemeLink {
    pub fn new<P>(path: P) -> ThemeLink
    where
        P: AsRef<Path>,
    {
        ThemeLink(path.as_ref().to_path_buf())
    }

    /// The `current` link of the working directory.
    pub fn in_working_dir() -> ThemeLink {
        ThemeLink::new(LINK_NAME)
    }

    /// Where the link points, `None` if there is no link yet. A dangling link
    /// still reports its target.
    pub fn target(&self) -> Result<Option<PathBuf>> {
        if !self.0.is_symlink() {
            if self.0.exists() {
                bail!(
                    "The path '{}' already exists and is not a symlink",
                    self.0.display()
                )
            }
            return Ok(None);
        }
        let target = std::fs::read_link(&self.0)
            .with_context(|| anyhow!("Failed to read link at: {}", self.0.display()))?;
        Ok(Some(target))
    }

    /// Points the link at the theme directory, touching it only if needed.
    pub fn sync<S>(&self, theme: &ActiveTheme, sink: &S) -> Result<LinkChange>
    where
        S: LogSink + ?Sized,
    {
        match self.target()? {
            None => {
                self.link_from(theme.directory())?;
                sink.record(&format!("Create {}", self.0.display()));
                Ok(LinkChange::Created)
            }
            Some(target) if target == theme.directory() => Ok(LinkChange::Unchanged),
            Some(target) => {
                log::debug!(
                    "{} points at {}, expected {}",
                    self.0.display(),
                    target.display(),
                    theme.directory().display()
                );
                self.remove_link()?;
                self.link_from(theme.directory())?;
                sink.record(&format!("Change theme to {}", theme.name()));
                Ok(LinkChange::Changed)
            }
        }
    }

    fn link_from<P>(&self, original: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let original = original.as_ref();
        #[cfg(unix)]
        let linked = std::os::unix::fs::symlink(original, &self.0);
        #[cfg(windows)]
        let linked = std::os::windows::fs::symlink_dir(original, &self.0);
        linked.with_context(|| {
            anyhow!(
                "Failed to link {} to {}",
                self.0.display(),
                original.display()
            )
        })
    }

    fn remove_link(&self) -> Result<()> {
        if !self.0.is_symlink() {
            return Ok(());
        }
        // directory links on windows are removed like directories
        #[cfg(windows)]
        let removed = std::fs::remove_dir(&self.0);
        #[cfg(not(windows))]
        let removed = std::fs::remove_file(&self.0);
        removed.with_context(|| anyhow!("Failed to remove link at: {}", self.0.display()))
    }
}
