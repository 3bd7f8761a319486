//! Separator-independent paths for placeholder arithmetic

use std::fmt;
use std::path::{Path, PathBuf};

/// A path stored with `/` between components, whatever the host used.
///
/// Editor hosts hand out paths in their platform's native form. Every
/// path-derived placeholder is computed on this normalized form and rendered
/// back with the context's separator only when it is substituted, so the
/// component arithmetic never depends on which separator the host used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// `/`-separated form, no trailing separator except at a root
    inner: String,
}

impl NormalizedPath {
    /// Normalize a host path.
    ///
    /// Converts backslashes to forward slashes and drops a trailing
    /// separator (except for a bare root such as `/` or `C:/`).
    pub fn new(path: impl AsRef<Path>) -> Self {
        let mut normalized = path.as_ref().to_string_lossy().replace('\\', "/");
        while normalized.len() > 1 && normalized.ends_with('/') && !is_drive_root(&normalized) {
            normalized.pop();
        }
        Self { inner: normalized }
    }

    /// The `/`-separated form.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// True for the empty path produced by relating a folder to itself.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Path for filesystem access on this platform.
    pub fn to_native(&self) -> PathBuf {
        self.inner.clone().into()
    }

    /// Render the path using `separator` between components.
    pub fn render(&self, separator: char) -> String {
        if separator == '/' {
            self.inner.clone()
        } else {
            self.inner.replace('/', &separator.to_string())
        }
    }

    /// Append `segment`, which may use either separator.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        match self.inner.as_str() {
            "" => Self::new(segment),
            base if base.ends_with('/') => Self::new(base.to_string() + &segment),
            base => Self::new([base, segment.as_str()].join("/")),
        }
    }

    /// Containing directory, or `None` for a bare name.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            Some(idx) => {
                let head = &trimmed[..idx];
                // `C:/a.ts` has the drive root as its parent, not `C:`
                let inner = if head.ends_with(':') && !head.contains('/') {
                    format!("{}/", head)
                } else {
                    head.to_string()
                };
                Some(Self { inner })
            }
            None => None,
        }
    }

    /// Last component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Text after the last `.` of the file name.
    ///
    /// Dotfiles such as `.env` have no extension.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(idx) if idx > 0 => Some(&name[idx + 1..]),
            _ => None,
        }
    }

    /// File name minus its last extension.
    pub fn file_stem(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(idx) if idx > 0 => Some(&name[..idx]),
            _ => Some(name),
        }
    }

    /// Check whether `base` is this path or one of its ancestors.
    ///
    /// Comparison is per component: `/home/u/proj` does not contain
    /// `/home/u/proj2/a.ts`.
    pub fn starts_with(&self, base: &NormalizedPath) -> bool {
        self.strip_prefix(base).is_some()
    }

    /// Express this path relative to `base`.
    ///
    /// Returns an empty path when both are equal and `None` when `base` is
    /// not an ancestor.
    pub fn strip_prefix(&self, base: &NormalizedPath) -> Option<Self> {
        let base = base.inner.trim_end_matches('/');
        if base.is_empty() {
            // `/` trims to nothing; every absolute path sits under it
            return self.inner.strip_prefix('/').map(|rest| Self {
                inner: rest.to_string(),
            });
        }
        let rest = self.inner.strip_prefix(base)?;
        if rest.is_empty() {
            return Some(Self {
                inner: String::new(),
            });
        }
        rest.strip_prefix('/').map(|rest| Self {
            inner: rest.to_string(),
        })
    }
}

fn is_drive_root(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'/'
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

macro_rules! normalized_from {
    ($($source:ty),*) => {
        $(
            impl From<$source> for NormalizedPath {
                fn from(path: $source) -> Self {
                    Self::new(path)
                }
            }
        )*
    };
}

normalized_from!(&str, String, &String, PathBuf, &Path);
