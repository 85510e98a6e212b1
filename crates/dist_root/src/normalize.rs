use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Lexically normalizes `path`, dropping `.` and resolving `..` without
/// touching the filesystem.
///
/// `..` never climbs above the root (or prefix) of an absolute path, which
/// mirrors how Node's `path.resolve` treats `/..`. Leading `..` segments of
/// a relative path are kept.
pub fn normalize_path(path: &Path) -> PathBuf {
  let mut result: Vec<Component<'_>> = vec![];

  for component in path.components() {
    match component {
      Component::Prefix(prefix) => {
        result = vec![Component::Prefix(prefix)];
      }
      Component::RootDir => {
        result.retain(|c| matches!(c, Component::Prefix(_)));
        result.push(Component::RootDir);
      }
      Component::CurDir => {}
      Component::ParentDir => match result.last() {
        Some(Component::Normal(_)) => {
          result.pop();
        }
        Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
        _ => result.push(Component::ParentDir),
      },
      Component::Normal(segment) => {
        result.push(Component::Normal(segment));
      }
    }
  }

  PathBuf::from_iter(result)
}

/// Removes up to `levels` trailing normal components, stopping at the root.
pub(crate) fn ancestor(path: &Path, levels: usize) -> PathBuf {
  let mut current = path.to_path_buf();
  for _ in 0..levels {
    match current.components().next_back() {
      Some(Component::Normal(_)) => {
        current.pop();
      }
      _ => break,
    }
  }
  current
}
