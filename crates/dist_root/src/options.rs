use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::error::DistRootError;

/// Number of directories between the module's directory and the package root
/// when the resolver lives at `<package>/src/<area>/`.
pub const DEFAULT_ANCESTOR_LEVELS: usize = 2;

pub const DEFAULT_DIST_DIR: &str = "dist";

/// Describes where the dist directory sits relative to the resolving module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistRootOptions {
  /// Directories to walk up from the module's directory to reach the package root
  pub ancestor_levels: usize,
  /// Build output directory, relative to the package root
  pub dist_dir: PathBuf,
}

impl Default for DistRootOptions {
  fn default() -> Self {
    Self {
      ancestor_levels: DEFAULT_ANCESTOR_LEVELS,
      dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
    }
  }
}

impl DistRootOptions {
  pub fn with_ancestor_levels(mut self, ancestor_levels: usize) -> Self {
    self.ancestor_levels = ancestor_levels;
    self
  }

  pub fn with_dist_dir<P: AsRef<Path>>(mut self, dist_dir: P) -> Self {
    self.dist_dir = dist_dir.as_ref().to_path_buf();
    self
  }

  pub(crate) fn validate(&self) -> Result<(), DistRootError> {
    let mut has_segment = false;

    for component in self.dist_dir.components() {
      match component {
        Component::Normal(_) => has_segment = true,
        Component::CurDir => {}
        Component::Prefix(_) | Component::RootDir | Component::ParentDir => {
          return Err(self.invalid_dist_dir());
        }
      }
    }

    if !has_segment {
      return Err(self.invalid_dist_dir());
    }

    Ok(())
  }

  fn invalid_dist_dir(&self) -> DistRootError {
    DistRootError::InvalidDistDir {
      path: self.dist_dir.clone(),
    }
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn defaults_to_two_levels_and_dist() {
    let options = DistRootOptions::default();

    assert_eq!(options.ancestor_levels, 2);
    assert_eq!(options.dist_dir, PathBuf::from("dist"));
  }

  #[test]
  fn deserializes_camel_case_with_defaults() {
    let options: DistRootOptions = serde_json::from_str(r#"{ "ancestorLevels": 3 }"#).unwrap();

    assert_eq!(
      options,
      DistRootOptions {
        ancestor_levels: 3,
        dist_dir: PathBuf::from("dist"),
      }
    );
  }

  #[test]
  fn deserializes_empty_object_to_defaults() {
    let options: DistRootOptions = serde_json::from_str("{}").unwrap();

    assert_eq!(options, DistRootOptions::default());
  }

  #[test]
  fn serializes_camel_case_and_round_trips() {
    let options = DistRootOptions::default()
      .with_ancestor_levels(3)
      .with_dist_dir("build");

    let value = serde_json::to_value(&options).unwrap();

    assert_eq!(
      value,
      serde_json::json!({ "ancestorLevels": 3, "distDir": "build" })
    );
    assert_eq!(
      serde_json::from_value::<DistRootOptions>(value).unwrap(),
      options
    );
  }

  mod validate {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accepts_nested_relative_dirs() {
      let options = DistRootOptions::default().with_dist_dir("dist/client");

      assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_dist_dir() {
      let options = DistRootOptions::default().with_dist_dir("");

      assert_eq!(
        options.validate(),
        Err(DistRootError::InvalidDistDir {
          path: PathBuf::new()
        })
      );
    }

    #[test]
    fn rejects_current_dir_only() {
      let options = DistRootOptions::default().with_dist_dir(".");

      assert!(options.validate().is_err());
    }

    #[test]
    fn rejects_parent_segments() {
      let options = DistRootOptions::default().with_dist_dir("../dist");

      assert_eq!(
        options.validate(),
        Err(DistRootError::InvalidDistDir {
          path: PathBuf::from("../dist")
        })
      );
    }

    #[cfg(unix)]
    #[test]
    fn rejects_absolute_dirs() {
      let options = DistRootOptions::default().with_dist_dir("/dist");

      assert!(options.validate().is_err());
    }
  }
}
