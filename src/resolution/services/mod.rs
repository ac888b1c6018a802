mod artifact_index;
mod bom_expander;
mod bucket_classifier;
mod dependency_filter;
mod metadata_generator;
mod plugin_resolver;
mod scope_merger;
mod transitive_resolver;
mod version_reconciler;

pub use artifact_index::ArtifactIndex;
pub use bom_expander::BomExpander;
pub use bucket_classifier::{
    BucketAssignment, BucketClassifier, Classification, ClassificationContext, SkipReason,
};
pub use dependency_filter::DependencyFilter;
pub use metadata_generator::MetadataGenerator;
pub use plugin_resolver::{PluginResolution, PluginResolver};
pub use scope_merger::ScopeMerger;
pub use transitive_resolver::TransitiveResolver;
pub use version_reconciler::VersionReconciler;
