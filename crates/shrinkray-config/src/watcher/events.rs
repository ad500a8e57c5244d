//! Event filtering: which notifications concern the watched file.

use notify::event::ModifyKind;
use notify::{Event, EventKind};
use std::path::{Component, Path, PathBuf};

/// Coarse operation kind of a filesystem notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Write,
    Create,
    Rename,
    Remove,
    Metadata,
    Access,
    Other,
}

impl ChangeKind {
    pub fn from_event_kind(kind: &EventKind) -> Self {
        match kind {
            EventKind::Create(_) => Self::Create,
            EventKind::Modify(ModifyKind::Name(_)) => Self::Rename,
            EventKind::Modify(ModifyKind::Metadata(_)) => Self::Metadata,
            EventKind::Modify(_) => Self::Write,
            EventKind::Remove(_) => Self::Remove,
            EventKind::Access(_) => Self::Access,
            EventKind::Any | EventKind::Other => Self::Other,
        }
    }

    /// Editors save through write, create or rename; nothing else can
    /// change what a reload would read.
    pub fn triggers_reload(self) -> bool {
        matches!(self, Self::Write | Self::Create | Self::Rename)
    }
}

/// The watched config file, normalized once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    file: PathBuf,
    dir: PathBuf,
}

impl WatchTarget {
    pub fn new(path: &Path) -> Self {
        let file = absolutize(path);
        let dir = file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| file.clone());
        Self { file, dir }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Directory to subscribe to. Watching the directory instead of the
    /// file survives editors that replace the file by rename.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn matches(&self, path: &Path) -> bool {
        absolutize(path) == self.file
    }

    /// True if `event` has a reload-worthy kind and names the watched file.
    pub fn is_relevant(&self, event: &Event) -> bool {
        ChangeKind::from_event_kind(&event.kind).triggers_reload()
            && event.paths.iter().any(|p| self.matches(p))
    }
}

/// Absolute, lexically cleaned form of `path`.
///
/// Relative paths are joined onto the current directory. If that is
/// unavailable the path is returned unchanged. Symlinks are not resolved.
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => return path.to_path_buf(),
        }
    };

    let mut cleaned = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}
