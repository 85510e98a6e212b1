use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::DistRootError;
use crate::module_location::ModuleLocation;
use crate::normalize::ancestor;
use crate::normalize::normalize_path;
use crate::options::DistRootOptions;

/// Absolute location of a package's build output directory.
///
/// Resolved once from the location of the module doing the lookup, so it does
/// not depend on the working directory of the process or on how the package
/// was installed. The directory is not required to exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistRoot {
  package_root: PathBuf,
  dist_root: PathBuf,
}

impl DistRoot {
  pub fn resolve(
    location: &ModuleLocation,
    options: &DistRootOptions,
  ) -> Result<Self, DistRootError> {
    options.validate()?;

    let package_root = ancestor(location.directory(), options.ancestor_levels);
    let dist_root = dunce::simplified(&normalize_path(&package_root.join(&options.dist_dir)))
      .to_path_buf();

    tracing::debug!(
      module = ?location.path(),
      package_root = ?package_root,
      dist_root = ?dist_root,
      "Resolved dist root"
    );

    Ok(Self {
      package_root,
      dist_root,
    })
  }

  /// Resolves relative to the running executable.
  pub fn from_current_exe(options: &DistRootOptions) -> Result<Self, DistRootError> {
    Self::resolve(&ModuleLocation::current_exe()?, options)
  }

  pub fn package_root(&self) -> &Path {
    &self.package_root
  }

  pub fn path(&self) -> &Path {
    &self.dist_root
  }

  /// Path of a bundled asset inside the dist directory.
  pub fn join<P: AsRef<Path>>(&self, asset: P) -> PathBuf {
    self.dist_root.join(asset)
  }

  pub fn into_path_buf(self) -> PathBuf {
    self.dist_root
  }
}

impl AsRef<Path> for DistRoot {
  fn as_ref(&self) -> &Path {
    &self.dist_root
  }
}

impl fmt::Display for DistRoot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.dist_root.display())
  }
}

/// Resolves the dist directory for the module at `current_module_path` using
/// the default layout (`<module dir>/../../dist`).
///
/// `current_module_path` may be a native absolute path or a `file:` URL.
pub fn compute_dist_root<L>(current_module_path: L) -> Result<PathBuf, DistRootError>
where
  L: TryInto<ModuleLocation, Error = DistRootError>,
{
  let location = current_module_path.try_into()?;
  let dist_root = DistRoot::resolve(&location, &DistRootOptions::default())?;
  Ok(dist_root.into_path_buf())
}
