use crate::ports::outbound::PomRepository;
use crate::shared::error::ResolveError;
use crate::shared::security::validate_directory;
use crate::shared::Result;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// LocalPomRepository adapter discovering POM files below a root directory
///
/// Collects `*.pom` files (repository layout) and `pom.xml` files (source
/// checkouts). Symbolic links are neither followed nor returned, and the
/// result is sorted so the index is built in the same order on every run.
pub struct LocalPomRepository {
    root: PathBuf,
}

impl LocalPomRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_pom(path: &Path) -> bool {
        path.extension() == Some(OsStr::new("pom")) || path.file_name() == Some(OsStr::new("pom.xml"))
    }
}

impl PomRepository for LocalPomRepository {
    fn discover_pom_files(&self) -> Result<Vec<PathBuf>> {
        validate_directory(&self.root, "POM root").map_err(|e| ResolveError::InvalidRepositoryPath {
            path: self.root.clone(),
            reason: e.to_string(),
        })?;

        let mut pom_files: Vec<PathBuf> = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file() && Self::is_pom(entry.path()))
            .map(|entry| entry.into_path())
            .collect();
        pom_files.sort();

        Ok(pom_files)
    }
}
