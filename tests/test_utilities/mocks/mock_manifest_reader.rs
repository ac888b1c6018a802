use pom_resolve::prelude::*;
use std::path::Path;

/// Mock ProjectManifestReader returning a fixed manifest
pub struct MockManifestReader {
    pub manifest: ProjectManifest,
    pub should_fail: bool,
}

impl MockManifestReader {
    pub fn new(manifest: ProjectManifest) -> Self {
        Self {
            manifest,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            manifest: ProjectManifest::default(),
            should_fail: true,
        }
    }
}

impl ProjectManifestReader for MockManifestReader {
    fn read_manifest(&self, _project_path: &Path) -> Result<ProjectManifest> {
        if self.should_fail {
            anyhow::bail!("Mock manifest read failure");
        }
        Ok(self.manifest.clone())
    }
}
