use crate::resolution::domain::Coordinate;

/// ArtifactVerifier port for checking that a binary is installed
pub trait ArtifactVerifier {
    /// Whether the binary for `coordinate` exists. BOM coordinates always exist.
    fn exists(&self, coordinate: &Coordinate) -> bool;
}
