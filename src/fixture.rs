//! Task-test fixture that fakes compiled classpaths.
//!
//! A jar task test needs its targets to look already compiled: a directory
//! of class files per target, registered in the `compile_classpath`
//! product. `TaskTestFixture` owns a throwaway working directory for the
//! test and writes those directories into it.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use thiserror::Error;

use crate::config::{ConfigError, FixtureConfig};
use crate::context::Context;
use crate::fs_op::{safe_file_dump, safe_mkdir, safe_mkdtemp, FsOpError};
use crate::products::{ClasspathEntry, ProductError, ProductName};
use crate::target::{AddressError, Target};

/// Prefix of each generated classpath directory.
const CLASSPATH_DIR_PREFIX: &str = "tmp";

/// Configuration label for entries added by the compile/runtime helpers.
pub const DEFAULT_CONF: &str = "default";

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error(transparent)]
    Fs(#[from] FsOpError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Address(#[from] AddressError),
}

#[derive(Debug)]
enum Workdir {
    /// Removed when the fixture drops.
    Owned(TempDir),
    /// Left on disk.
    Kept(PathBuf),
}

impl Workdir {
    fn path(&self) -> &Path {
        match self {
            Workdir::Owned(td) => td.path(),
            Workdir::Kept(p) => p,
        }
    }
}

/// Per-test fixture. Create one at test setup; dropping it tears the
/// working directory down (unless `keep_workdir` is configured).
#[derive(Debug)]
pub struct TaskTestFixture {
    config: FixtureConfig,
    root: Workdir,
    test_workdir: PathBuf,
}

impl TaskTestFixture {
    /// Set up with configuration from `FixtureConfig::load`.
    pub fn setup() -> Result<Self, FixtureError> {
        Self::with_config(FixtureConfig::load()?)
    }

    /// Set up under a fresh directory in the system temp dir.
    pub fn with_config(config: FixtureConfig) -> Result<Self, FixtureError> {
        let td = tempfile::Builder::new()
            .prefix(&config.workdir_prefix)
            .tempdir()
            .map_err(FsOpError::from)?;
        let root = if config.keep_workdir {
            Workdir::Kept(td.keep())
        } else {
            Workdir::Owned(td)
        };
        Self::from_root(config, root)
    }

    /// Use `dir` itself as build root and working directory. The directory
    /// is created if needed and never removed by the fixture.
    pub fn in_dir(dir: impl Into<PathBuf>, config: FixtureConfig) -> Result<Self, FixtureError> {
        let dir = dir.into();
        safe_mkdir(&dir)?;
        let fixture = TaskTestFixture {
            config,
            test_workdir: dir.clone(),
            root: Workdir::Kept(dir),
        };
        Ok(fixture)
    }

    fn from_root(config: FixtureConfig, root: Workdir) -> Result<Self, FixtureError> {
        let test_workdir = root.path().join("workdir");
        safe_mkdir(&test_workdir)?;
        tracing::debug!("task test workdir at {}", test_workdir.display());
        Ok(TaskTestFixture {
            config,
            root,
            test_workdir,
        })
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    pub fn build_root(&self) -> &Path {
        self.root.path()
    }

    pub fn test_workdir(&self) -> &Path {
        &self.test_workdir
    }

    /// Parse `spec` into a target and add it to `context`.
    pub fn make_target(&self, context: &mut Context, spec: &str) -> Result<Target, FixtureError> {
        let target = Target::from_spec(spec)?;
        context.add_target(target.clone());
        Ok(target)
    }

    /// Write `files` into a fresh directory under this test's workdir and
    /// register that directory as a compile classpath entry for `target`.
    ///
    /// Returns the directory. Each call gets its own directory, so repeated
    /// calls for a target add distinct entries.
    pub fn add_to_compile_classpath<I, K, V>(
        &self,
        context: &mut Context,
        target: &Target,
        files: I,
    ) -> Result<PathBuf, FixtureError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<Path>,
        V: AsRef<str>,
    {
        self.add_to_classpath(context, ProductName::COMPILE_CLASSPATH, DEFAULT_CONF, target, files)
    }

    /// Like `add_to_compile_classpath`, for the runtime classpath product.
    pub fn add_to_runtime_classpath<I, K, V>(
        &self,
        context: &mut Context,
        target: &Target,
        files: I,
    ) -> Result<PathBuf, FixtureError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<Path>,
        V: AsRef<str>,
    {
        self.add_to_classpath(context, ProductName::RUNTIME_CLASSPATH, DEFAULT_CONF, target, files)
    }

    /// Materialize `files` under `<workdir>/<target id>/<unique dir>` and
    /// append `(conf, <unique dir>)` to `target` in the `product` store.
    ///
    /// Relative paths are joined as given; escaping the directory with `..`
    /// is not checked. Files written before a failure are left in place.
    pub fn add_to_classpath<I, K, V>(
        &self,
        context: &mut Context,
        product: ProductName,
        conf: &str,
        target: &Target,
        files: I,
    ) -> Result<PathBuf, FixtureError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<Path>,
        V: AsRef<str>,
    {
        let classpath = context.products_mut().classpath(product)?;

        let target_dir = self.test_workdir.join(target.id());
        safe_mkdir(&target_dir)?;
        let classpath_dir = safe_mkdtemp(&target_dir, CLASSPATH_DIR_PREFIX)?;
        for (rel_path, content) in files {
            safe_file_dump(classpath_dir.join(rel_path), content.as_ref())?;
        }

        classpath.add_for_target(target, [ClasspathEntry::new(conf, classpath_dir.clone())]);
        tracing::debug!(
            "added {} entry {} for {} to {}",
            conf,
            classpath_dir.display(),
            target,
            product
        );
        Ok(classpath_dir)
    }
}
