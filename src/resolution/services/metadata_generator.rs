use crate::resolution::domain::ResolutionMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator stamps a resolution run with a timestamp and run id
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current time and a fresh `urn:uuid` run id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ResolutionMetadata {
        ResolutionMetadata::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }

    /// Metadata naming this crate and its compile-time version
    pub fn generate_default_metadata() -> ResolutionMetadata {
        Self::generate_metadata(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
