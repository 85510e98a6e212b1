//! Locates a package's build output (`dist`) directory from the location of
//! the code doing the lookup.
//!
//! The package root is assumed to sit a fixed number of directories above the
//! directory that contains the resolving module (two by default, matching a
//! `<package>/src/<area>/<module>` layout) and the dist directory is a child of
//! that root. Nothing here touches the filesystem: the resolved directory may
//! not exist yet.
//!
//! ```
//! use std::path::PathBuf;
//!
//! # #[cfg(unix)]
//! # fn main() -> Result<(), dist_root::DistRootError> {
//! let dist = dist_root::compute_dist_root("file:///repo/packages/browser/src/node/constants.js")?;
//! assert_eq!(dist, PathBuf::from("/repo/packages/browser/dist"));
//! # Ok(())
//! # }
//! # #[cfg(not(unix))]
//! # fn main() {}
//! ```
//!
//! Hosts that want an explicit value should call [`DistRoot::resolve`] at
//! startup and pass the result around. [`current`] is available for code that
//! needs the process-wide value computed from the running executable.
use once_cell::sync::OnceCell;

pub use dist_root::compute_dist_root;
pub use dist_root::DistRoot;
pub use error::DistRootError;
pub use module_location::ModuleLocation;
pub use normalize::normalize_path;
pub use options::DistRootOptions;
pub use options::DEFAULT_ANCESTOR_LEVELS;
pub use options::DEFAULT_DIST_DIR;

mod dist_root;
mod error;
mod module_location;
mod normalize;
mod options;

static CURRENT: OnceCell<Result<DistRoot, DistRootError>> = OnceCell::new();

/// Dist root of the running executable, resolved with the default options.
///
/// Computed on first use and never recomputed; later calls observe the same
/// value or the same error.
pub fn current() -> Result<&'static DistRoot, DistRootError> {
  CURRENT
    .get_or_init(|| DistRoot::from_current_exe(&DistRootOptions::default()))
    .as_ref()
    .map_err(Clone::clone)
}
