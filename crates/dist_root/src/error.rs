use std::path::PathBuf;

/// Failure to determine where the dist directory lives.
///
/// There is no fallback path: any of these means the caller cannot locate
/// its bundled assets and should abort initialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DistRootError {
  #[error("module location is empty")]
  EmptyModuleLocation,

  #[error("cannot determine the location of the running module: {reason}")]
  ModuleLocationUnavailable { reason: String },

  #[error("failed to parse module url {url:?}: {reason}")]
  MalformedModuleUrl { url: String, reason: String },

  #[error("module url {url:?} cannot be converted to a file path")]
  UnsupportedModuleUrl { url: String },

  #[error("module location {path:?} is not an absolute path")]
  RelativeModulePath { path: PathBuf },

  #[error("dist directory {path:?} must be a non-empty relative path without parent segments")]
  InvalidDistDir { path: PathBuf },
}
