use crate::ports::outbound::{ArtifactLookup, ArtifactVerifier, PluginRequest};
use crate::resolution::domain::Coordinate;

const MARKER_SUFFIX: &str = ".gradle.plugin";

/// Result of resolving one plugin id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginResolution {
    pub id: String,
    pub resolved: Option<Coordinate>,
    /// `group:artifact` candidates tried, in order
    pub attempted: Vec<String>,
}

impl PluginResolution {
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }
}

/// PluginResolver maps a plugin id onto an installed artifact
///
/// Plugin ids do not name their artifact directly, so a fixed list of naming
/// variants is tried and the first one that is both indexed and verified on
/// disk wins. No match is reported as unresolved, never as an error.
pub struct PluginResolver;

impl PluginResolver {
    /// Candidate `(groupId, artifactId)` pairs for a plugin id, in priority order
    pub fn candidates(id: &str) -> Vec<(String, String)> {
        let id = id.trim();
        let mut candidates = vec![(id.to_string(), format!("{}{}", id, MARKER_SUFFIX))];

        match id.rsplit_once('.') {
            Some((parent, last)) if !parent.is_empty() && !last.is_empty() => {
                candidates.push((id.to_string(), last.to_string()));
                candidates.push((parent.to_string(), last.to_string()));
                candidates.push((parent.to_string(), format!("{}-gradle-plugin", last)));
                candidates.push((parent.to_string(), format!("{}-plugin", last)));
            }
            _ => candidates.push((id.to_string(), id.to_string())),
        }

        candidates.dedup();
        candidates
    }

    pub fn resolve<L, V>(request: &PluginRequest, lookup: &L, verifier: &V) -> PluginResolution
    where
        L: ArtifactLookup + ?Sized,
        V: ArtifactVerifier + ?Sized,
    {
        let mut attempted = Vec::new();

        for (group, artifact) in Self::candidates(&request.id) {
            attempted.push(format!("{}:{}", group, artifact));
            if let Some(found) = lookup.find(&group, &artifact) {
                if verifier.exists(found) {
                    return PluginResolution {
                        id: request.id.clone(),
                        resolved: Some(found.clone()),
                        attempted,
                    };
                }
            }
        }

        // Marker artifacts published under the id as group
        let marker = lookup
            .find_all_for_group(request.id.trim())
            .iter()
            .filter(|c| c.artifact_id().ends_with(MARKER_SUFFIX))
            .find(|c| verifier.exists(c));
        if let Some(found) = marker {
            attempted.push(format!("{}:*{}", request.id.trim(), MARKER_SUFFIX));
            return PluginResolution {
                id: request.id.clone(),
                resolved: Some(found.clone()),
                attempted,
            };
        }

        PluginResolution {
            id: request.id.clone(),
            resolved: None,
            attempted,
        }
    }

    pub fn resolve_all<L, V>(
        requests: &[PluginRequest],
        lookup: &L,
        verifier: &V,
    ) -> Vec<PluginResolution>
    where
        L: ArtifactLookup + ?Sized,
        V: ArtifactVerifier + ?Sized,
    {
        requests
            .iter()
            .map(|request| Self::resolve(request, lookup, verifier))
            .collect()
    }
}
