/// Mock implementations for testing
mod mock_artifact_verifier;
mod mock_manifest_reader;
mod mock_pom_store;
mod mock_progress_reporter;

pub use mock_artifact_verifier::MockArtifactVerifier;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_pom_store::MockPomStore;
pub use mock_progress_reporter::MockProgressReporter;
