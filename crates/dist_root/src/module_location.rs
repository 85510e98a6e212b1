use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use url::Url;

use crate::error::DistRootError;
use crate::normalize::normalize_path;

/// Absolute, normalized location of the module that resolves the dist root.
///
/// Construct it from whatever the host reports about the running code: a
/// native path, a `file:` URL or [`ModuleLocation::current_exe`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleLocation {
  path: PathBuf,
}

impl ModuleLocation {
  pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DistRootError> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
      return Err(DistRootError::EmptyModuleLocation);
    }

    if !path.is_absolute() {
      return Err(DistRootError::RelativeModulePath {
        path: path.to_path_buf(),
      });
    }

    Ok(Self {
      path: normalize_path(dunce::simplified(path)),
    })
  }

  pub fn from_url(url: &Url) -> Result<Self, DistRootError> {
    if has_encoded_separator(url) {
      return Err(DistRootError::UnsupportedModuleUrl {
        url: url.to_string(),
      });
    }

    let Ok(path) = url.to_file_path() else {
      return Err(DistRootError::UnsupportedModuleUrl {
        url: url.to_string(),
      });
    };

    Self::from_path(path)
  }

  /// Accepts either a URL (only `file:` URLs resolve) or a native path.
  pub fn parse(value: &str) -> Result<Self, DistRootError> {
    if value.is_empty() {
      return Err(DistRootError::EmptyModuleLocation);
    }

    let trimmed = value.trim();
    if !has_file_scheme(trimmed) && !has_url_scheme(trimmed) {
      return Self::from_path(value);
    }

    let url = Url::parse(trimmed).map_err(|err| DistRootError::MalformedModuleUrl {
      url: trimmed.to_string(),
      reason: err.to_string(),
    })?;

    Self::from_url(&url)
  }

  /// Location of the running executable, as reported by the host.
  pub fn current_exe() -> Result<Self, DistRootError> {
    Self::from_exe_result(std::env::current_exe())
  }

  pub(crate) fn from_exe_result(
    exe_path: std::io::Result<PathBuf>,
  ) -> Result<Self, DistRootError> {
    let exe_path = exe_path.map_err(|err| DistRootError::ModuleLocationUnavailable {
      reason: err.to_string(),
    })?;

    tracing::trace!(exe_path = ?exe_path, "Resolved current executable");

    Self::from_path(exe_path)
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Directory that contains the module file.
  pub fn directory(&self) -> &Path {
    self.path.parent().unwrap_or(&self.path)
  }
}

impl FromStr for ModuleLocation {
  type Err = DistRootError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl TryFrom<&str> for ModuleLocation {
  type Error = DistRootError;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    Self::parse(value)
  }
}

impl TryFrom<&Path> for ModuleLocation {
  type Error = DistRootError;

  fn try_from(value: &Path) -> Result<Self, Self::Error> {
    Self::from_path(value)
  }
}

impl TryFrom<PathBuf> for ModuleLocation {
  type Error = DistRootError;

  fn try_from(value: PathBuf) -> Result<Self, Self::Error> {
    Self::from_path(value)
  }
}

impl TryFrom<&Url> for ModuleLocation {
  type Error = DistRootError;

  fn try_from(value: &Url) -> Result<Self, Self::Error> {
    Self::from_url(value)
  }
}

fn has_file_scheme(value: &str) -> bool {
  value
    .get(..5)
    .is_some_and(|scheme| scheme.eq_ignore_ascii_case("file:"))
}

/// `scheme://...` with a scheme longer than one character, so Windows drive
/// letters stay paths.
fn has_url_scheme(value: &str) -> bool {
  let Some((scheme, _)) = value.split_once("://") else {
    return false;
  };

  let mut chars = scheme.chars();
  scheme.len() > 1
    && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
    && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Percent-encoded separators would decode into extra path segments.
fn has_encoded_separator(url: &Url) -> bool {
  let Some(segments) = url.path_segments() else {
    return false;
  };

  segments.map(|segment| segment.to_ascii_lowercase()).any(|segment| {
    segment.contains("%2f") || (cfg!(windows) && segment.contains("%5c"))
  })
}
