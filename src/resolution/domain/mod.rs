pub mod bom_result;
pub mod bucket;
pub mod coordinate;
pub mod pom_failure;
pub mod reconciliation;
pub mod resolution_metadata;
pub mod scope;
pub mod transitive_result;
pub mod version;

pub use bom_result::BomResult;
pub use bucket::{Bucket, BucketNames, DeclaredType};
pub use coordinate::{Coordinate, DependencyKey, DEFAULT_PACKAGING, POM_PACKAGING};
pub use pom_failure::PomFailure;
pub use reconciliation::{Reconciliation, VersionDecision, UNSPECIFIED_VERSION};
pub use resolution_metadata::ResolutionMetadata;
pub use scope::{Scope, ScopeMap};
pub use transitive_result::{ResolvedArtifacts, TransitiveResult};
pub use version::{compare_versions, max_version, ComparableVersion};
