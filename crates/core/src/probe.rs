//! Ordered filesystem probes
//!
//! A [`ProbeList`] is an ordered set of candidate locations for something
//! installed on the machine (a JDK, the Android SDK, the project template).
//! The first candidate that exists wins; candidates are never merged.

use std::path::{Path, PathBuf};

/// Ordered list of candidate paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeList {
    name: String,
    candidates: Vec<PathBuf>,
}

impl ProbeList {
    /// Create an empty probe list; `name` is used in log messages
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            candidates: Vec::new(),
        }
    }

    /// Append candidates, keeping their order
    pub fn with_candidates<I, P>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.candidates.extend(candidates.into_iter().map(Into::into));
        self
    }

    /// Insert candidates ahead of the existing ones, keeping their order
    pub fn prepend<I, P>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut front: Vec<PathBuf> = candidates.into_iter().map(Into::into).collect();
        front.append(&mut self.candidates);
        self.candidates = front;
        self
    }

    /// Name of the probed thing
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Candidates in probe order
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// First candidate that exists on the real filesystem
    pub fn resolve(&self) -> Option<PathBuf> {
        self.resolve_with(|p| p.exists())
    }

    /// First candidate accepted by `exists`
    pub fn resolve_with<F>(&self, mut exists: F) -> Option<PathBuf>
    where
        F: FnMut(&Path) -> bool,
    {
        let found = self.candidates.iter().find(|c| exists(c.as_path())).cloned();
        match &found {
            Some(path) => tracing::debug!(probe = %self.name, path = %path.display(), "Probe matched"),
            None => tracing::debug!(
                probe = %self.name,
                candidates = self.candidates.len(),
                "No probe candidate exists"
            ),
        }
        found
    }
}

/// Name of the current OS user, used in per-user install locations
pub fn current_username() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|u| !u.is_empty())
        .or_else(|| {
            dirs::home_dir()
                .and_then(|h| h.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn list() -> ProbeList {
        ProbeList::new("jdk").with_candidates(["/opt/a", "/opt/b", "/opt/c"])
    }

    #[test]
    fn test_first_existing_wins() {
        let present: HashSet<PathBuf> = ["/opt/b", "/opt/c"].iter().map(PathBuf::from).collect();
        let found = list().resolve_with(|p| present.contains(p));
        assert_eq!(found, Some(PathBuf::from("/opt/b")));
    }

    #[test]
    fn test_none_found() {
        assert_eq!(list().resolve_with(|_| false), None);
    }

    #[test]
    fn test_prepend_keeps_order() {
        let probes = list().prepend(["/env/x", "/env/y"]);
        let names: Vec<_> = probes.candidates().iter().map(|p| p.to_string_lossy().into_owned()).collect();
        assert_eq!(names, vec!["/env/x", "/env/y", "/opt/a", "/opt/b", "/opt/c"]);
    }

    #[test]
    fn test_stops_at_first_match() {
        let mut checked = Vec::new();
        let found = list().resolve_with(|p| {
            checked.push(p.to_path_buf());
            p == Path::new("/opt/a")
        });
        assert_eq!(found, Some(PathBuf::from("/opt/a")));
        assert_eq!(checked.len(), 1);
    }

    #[test]
    fn test_resolve_real_filesystem() {
        let dir = tempfile::TempDir::new().unwrap();
        let probes = ProbeList::new("tmp")
            .with_candidates([dir.path().join("missing"), dir.path().to_path_buf()]);
        assert_eq!(probes.resolve(), Some(dir.path().to_path_buf()));
    }
}
