use crate::ports::outbound::ArtifactVerifier;
use crate::resolution::domain::Coordinate;
use std::path::{Path, PathBuf};

/// LocalArtifactVerifier adapter checking that an artifact's binary is on disk
///
/// Looks for `artifact-version.<ext>` next to the POM, then in the repository
/// layout under the artifact root, then for a flat `artifact.jar` directly in
/// the artifact root.
pub struct LocalArtifactVerifier {
    artifact_root: Option<PathBuf>,
}

impl LocalArtifactVerifier {
    pub fn new(artifact_root: Option<PathBuf>) -> Self {
        Self { artifact_root }
    }

    /// File extension of the binary a packaging produces
    fn extension(packaging: &str) -> &str {
        match packaging {
            "jar" | "bundle" | "maven-plugin" | "eclipse-plugin" | "ejb" => "jar",
            other => other,
        }
    }

    fn candidates(&self, coordinate: &Coordinate) -> Vec<PathBuf> {
        let file_name = format!(
            "{}-{}.{}",
            coordinate.artifact_id(),
            coordinate.version(),
            Self::extension(coordinate.packaging())
        );

        let mut candidates = Vec::new();
        if let Some(dir) = coordinate.pom_path().and_then(Path::parent) {
            candidates.push(dir.join(&file_name));
        }
        if let Some(root) = self.artifact_root.as_deref() {
            candidates.push(
                root.join(coordinate.group_id().replace('.', "/"))
                    .join(coordinate.artifact_id())
                    .join(coordinate.version())
                    .join(&file_name),
            );
            candidates.push(root.join(format!("{}.jar", coordinate.artifact_id())));
        }
        candidates
    }
}

impl ArtifactVerifier for LocalArtifactVerifier {
    fn exists(&self, coordinate: &Coordinate) -> bool {
        if coordinate.is_bom() {
            return true;
        }
        self.candidates(coordinate).iter().any(|path| path.is_file())
    }
}
