use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::application::resolution_log::ResolutionLog;
use crate::ports::outbound::{
    ArtifactLookup, ArtifactVerifier, DeclaredDependency, PomParser, PomRepository,
    ProgressReporter, ProjectManifest, ProjectManifestReader,
};
use crate::resolution::domain::{
    max_version, BomResult, Bucket, BucketNames, Coordinate, DependencyKey, PomFailure, Reconciliation, ResolvedArtifacts,
    Scope, ScopeMap, TransitiveResult, VersionDecision,
};
use crate::resolution::services::{
    ArtifactIndex, BomExpander, BucketAssignment, BucketClassifier, ClassificationContext,
    DependencyFilter, MetadataGenerator, PluginResolver, ScopeMerger, TransitiveResolver,
    VersionReconciler,
};
use crate::shared::Result;
use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;


/// Number of rejected POM files listed individually before summarising
const MAX_LISTED_FAILURES: usize = 10;

/// ResolveDependenciesUseCase - Core use case for resolving a build unit
///
/// Orchestrates one resolution run: index the local repository, expand BOMs,
/// walk the transitive graph, verify binaries, reconcile versions and
/// classify every artifact into the consuming build's buckets.
///
/// # Type Parameters
/// * `MR` - ProjectManifestReader implementation
/// * `REPO` - PomRepository implementation
/// * `P` - PomParser implementation
/// * `V` - ArtifactVerifier implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<MR, REPO, P, V, PR> {
    manifest_reader: MR,
    pom_repository: REPO,
    pom_parser: P,
    artifact_verifier: V,
    progress_reporter: PR,
    log: Arc<ResolutionLog>,
}

impl<MR, REPO, P, V, PR> ResolveDependenciesUseCase<MR, REPO, P, V, PR>
where
    MR: ProjectManifestReader,
    REPO: PomRepository,
    P: PomParser,
    V: ArtifactVerifier,
    PR: ProgressReporter,
{
    /// Creates a new use case with injected dependencies and a fresh log
    pub fn new(
        manifest_reader: MR,
        pom_repository: REPO,
        pom_parser: P,
        artifact_verifier: V,
        progress_reporter: PR,
    ) -> Self {
        Self {
            manifest_reader,
            pom_repository,
            pom_parser,
            artifact_verifier,
            progress_reporter,
            log: Arc::new(ResolutionLog::new()),
        }
    }

    /// Records into a log shared with other use case instances
    pub fn with_log(mut self, log: Arc<ResolutionLog>) -> Self {
        self.log = log;
        self
    }

    pub fn log(&self) -> &Arc<ResolutionLog> {
        &self.log
    }

    /// Executes one resolution run
    ///
    /// # Arguments
    /// * `request` - Project location, exclusions and bucket names
    ///
    /// # Returns
    /// ResolveResponse with assignments, decisions and everything left behind
    ///
    /// # Errors
    /// Returns an error if the manifest cannot be read, an exclusion pattern
    /// is invalid, or the POM repository cannot be listed. Missing artifacts
    /// and unreadable POM files are reported in the response instead.
    pub fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        // Step 1: Read the manifest and drop excluded declarations
        let manifest = self.read_manifest(&request)?;
        let filter = DependencyFilter::new(request.exclude_patterns.clone())?;
        let (declared, mut excluded) = self.apply_exclusion_filter(&manifest, &filter)?;

        // Step 2: Index the local repository
        let index = self.build_index()?;
        let mut failures: Vec<PomFailure> = index.rejected().to_vec();

        // Step 3: Expand BOMs reachable from the declarations
        let seeds: IndexSet<DependencyKey> = declared.iter().map(|d| d.key()).collect();
        let bom_result = BomExpander::process(seeds.iter(), &index, &self.pom_parser);
        self.report_boms(bom_result.processed_boms().len(), bom_result.failures());
        failures.extend(bom_result.failures().iter().cloned());

        // Step 4: Seed the roots
        let mut scopes = ScopeMap::new();
        let mut not_found = BTreeSet::new();
        let mut resolved = Self::seed_roots(
            &declared,
            &request.bucket_names,
            &index,
            &mut scopes,
            &mut not_found,
        );

        // Step 5: Walk the transitive graph
        self.progress_reporter
            .report("🔗 Resolving transitive dependencies...");
        let walk =
            TransitiveResolver::resolve(&mut resolved, &mut scopes, &index, &self.pom_parser);
        failures.extend(walk.failures().iter().cloned());

        // Step 6: Verify binaries and apply exclusions to the final set
        if request.verify_artifacts {
            self.verify_artifacts(&mut resolved, &mut not_found);
        }
        excluded.extend(filter.filter_resolved(&mut resolved));
        self.warn_unmatched_patterns(&filter);

        // Declared roots already reported as not found are not skipped twice
        let skipped: BTreeSet<DependencyKey> = walk
            .skipped_dependencies()
            .difference(&not_found)
            .cloned()
            .collect();
        let transitive_result =
            TransitiveResult::from_resolved(&resolved, skipped, walk.failures().to_vec());
        self.report_transitive(&transitive_result, &not_found);

        // Step 7: Reconcile versions
        let reconciliations = self.reconcile_versions(&declared, &resolved, &bom_result);

        // Step 8: Classify into buckets
        let context = Self::build_classification_context(
            &manifest,
            &declared,
            &request.bucket_names,
            scopes,
        );
        let (assignments, skipped_assignments) =
            BucketClassifier::classify_all(&resolved, &context);
        for assignment in &assignments {
            for bucket in &assignment.buckets {
                self.log.record_assignment(
                    request.bucket_names.name_of(bucket),
                    assignment.notation.clone(),
                );
            }
        }
        for (key, reason) in &skipped_assignments {
            self.progress_reporter
                .report(&format!("⏭️  Skipping {} ({})", key, reason));
        }

        // Step 9: Resolve plugins
        let plugins =
            PluginResolver::resolve_all(&manifest.plugins, &index, &self.artifact_verifier);
        for plugin in plugins.iter().filter(|p| !p.is_resolved()) {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Plugin '{}' could not be resolved (tried {})",
                plugin.id,
                plugin.attempted.join(", ")
            ));
        }

        // Step 10: Build the response
        self.report_bucket_summary(&assignments, &request.bucket_names);

        Ok(ResolveResponse {
            unit: manifest.unit,
            resolved,
            assignments,
            skipped_assignments,
            reconciliations,
            bom_result,
            transitive_result,
            not_found,
            excluded: excluded.into_iter().collect(),
            plugins,
            failures,
            bucket_names: request.bucket_names,
            metadata: MetadataGenerator::generate_default_metadata(),
        })
    }

    fn read_manifest(&self, request: &ResolveRequest) -> Result<ProjectManifest> {
        self.progress_reporter.report(&format!(
            "📖 Loading project manifest from: {}",
            request.project_path.display()
        ));

        let manifest = self.manifest_reader.read_manifest(&request.project_path)?;

        self.progress_reporter.report(&format!(
            "✅ Build unit {}:{} declares {} dependenc{} and {} plugin(s)",
            manifest.unit.group,
            manifest.unit.name,
            manifest.dependencies.len(),
            if manifest.dependencies.len() == 1 { "y" } else { "ies" },
            manifest.plugins.len()
        ));

        Ok(manifest)
    }

    /// Removes excluded declarations
    ///
    /// # Returns
    /// Tuple of (kept declarations, excluded keys)
    ///
    /// # Errors
    /// Returns an error if every declaration was excluded
    fn apply_exclusion_filter(
        &self,
        manifest: &ProjectManifest,
        filter: &DependencyFilter,
    ) -> Result<(Vec<DeclaredDependency>, IndexSet<DependencyKey>)> {
        if filter.is_empty() {
            return Ok((manifest.dependencies.clone(), IndexSet::new()));
        }

        let mut excluded: IndexSet<DependencyKey> = IndexSet::new();
        let kept: Vec<DeclaredDependency> = manifest
            .dependencies
            .iter()
            .filter(|d| {
                let key = d.key();
                if filter.is_excluded(&key) {
                    excluded.insert(key);
                    false
                } else {
                    true
                }
            })
            .cloned()
            .collect();

        if !excluded.is_empty() {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} declared dependenc{} based on filters",
                excluded.len(),
                if excluded.len() == 1 { "y" } else { "ies" }
            ));
        }

        if kept.is_empty() && !manifest.dependencies.is_empty() {
            anyhow::bail!(
                "All {} declared dependencies were excluded by the provided filters. \
                 Nothing would be resolved. Please adjust your exclusion patterns.",
                manifest.dependencies.len()
            );
        }

        Ok((kept, excluded))
    }

    fn build_index(&self) -> Result<ArtifactIndex> {
        self.progress_reporter
            .report("🔍 Scanning local repository for POM files...");
        let pom_files = self.pom_repository.discover_pom_files()?;
        self.progress_reporter
            .report(&format!("✅ Found {} POM file(s)", pom_files.len()));

        let index =
            ArtifactIndex::build_with_progress(&pom_files, &self.pom_parser, |done, total| {
                self.progress_reporter
                    .report_progress(done, total, Some("indexing"))
            });

        self.progress_reporter.report(&format!(
            "📦 Indexed {} artifact(s) across {} group(s)",
            index.len(),
            index.group_count()
        ));
        self.report_failures("POM file(s) rejected while indexing", index.rejected());

        Ok(index)
    }

    fn report_boms(&self, processed: usize, failures: &[PomFailure]) {
        if processed > 0 {
            self.progress_reporter
                .report(&format!("📑 Expanded {} BOM(s)", processed));
        }
        self.report_failures("BOM file(s) could not be read", failures);
    }

    fn report_failures(&self, what: &str, failures: &[PomFailure]) {
        if failures.is_empty() {
            return;
        }
        self.progress_reporter.report_error(&format!(
            "⚠️  Warning: {} {}",
            failures.len(),
            what
        ));
        for failure in failures.iter().take(MAX_LISTED_FAILURES) {
            self.progress_reporter
                .report_error(&format!("   - {}", failure));
        }
        if failures.len() > MAX_LISTED_FAILURES {
            self.progress_reporter.report_error(&format!(
                "   ... and {} more",
                failures.len() - MAX_LISTED_FAILURES
            ));
        }
    }

    /// Looks up every declared key and stamps its root scope and test context
    ///
    /// Keys missing from the index go to `not_found`.
    fn seed_roots(
        declared: &[DeclaredDependency],
        names: &BucketNames,
        index: &ArtifactIndex,
        scopes: &mut ScopeMap,
        not_found: &mut BTreeSet<DependencyKey>,
    ) -> ResolvedArtifacts {
        let mut by_key: IndexMap<DependencyKey, Vec<&DeclaredDependency>> = IndexMap::new();
        for declaration in declared {
            by_key.entry(declaration.key()).or_default().push(declaration);
        }

        let mut resolved = ResolvedArtifacts::new();
        for (key, declarations) in by_key {
            for declaration in &declarations {
                let scope = Self::root_scope(declaration, names);
                ScopeMerger::update_scope(scopes, &key, Some(scope));
            }

            let Some(found) = index.find_key(&key) else {
                not_found.insert(key);
                continue;
            };

            let coordinate = found
                .clone()
                .with_test_context(Self::is_test_only(&declarations))
                .with_scope(Some(ScopeMerger::get_scope(scopes, &key)));
            resolved.insert(key, coordinate);
        }
        resolved
    }

    /// Explicit scope, else test for test declarations, else the first bucket
    fn root_scope(declaration: &DeclaredDependency, names: &BucketNames) -> Scope {
        if let Some(scope) = declaration.scope {
            return scope;
        }
        if declaration.test {
            return Scope::Test;
        }
        match declaration.buckets.first().map(|b| names.parse(b)) {
            Some(Bucket::CompileOnly) => Scope::Provided,
            Some(Bucket::RuntimeOnly) => Scope::Runtime,
            Some(Bucket::Test) => Scope::Test,
            _ => Scope::Compile,
        }
    }

    /// A key counts as test-designated only when no production declaration exists
    fn is_test_only(declarations: &[&DeclaredDependency]) -> bool {
        declarations.iter().all(|d| d.test)
    }

    fn verify_artifacts(
        &self,
        resolved: &mut ResolvedArtifacts,
        not_found: &mut BTreeSet<DependencyKey>,
    ) {
        self.progress_reporter
            .report("🔎 Verifying artifact binaries...");

        let verifier = &self.artifact_verifier;
        resolved.retain(|key, coordinate| {
            let exists = verifier.exists(coordinate);
            if !exists {
                not_found.insert(key.clone());
            }
            exists
        });
    }

    fn warn_unmatched_patterns(&self, filter: &DependencyFilter) {
        for pattern in filter.get_unmatched_patterns() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any dependencies.",
                pattern
            ));
        }
    }

    fn report_transitive(&self, result: &TransitiveResult, not_found: &BTreeSet<DependencyKey>) {
        self.progress_reporter.report(&format!(
            "✅ Resolved {} artifact(s): {} main, {} test",
            result.resolved_count(),
            result.main_dependencies().len(),
            result.test_dependencies().len()
        ));

        for key in result.skipped_dependencies() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} is not in the local repository and was skipped",
                key
            ));
        }
        for key in not_found {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {} was not found", key));
        }
    }

    /// Reconciles every declared or resolved key and records the decisions
    ///
    /// # Returns
    /// Decisions sorted by key
    fn reconcile_versions(
        &self,
        declared: &[DeclaredDependency],
        resolved: &ResolvedArtifacts,
        bom_result: &BomResult,
    ) -> Vec<Reconciliation> {
        let mut requested: IndexMap<DependencyKey, Vec<&str>> = IndexMap::new();
        for declaration in declared {
            requested
                .entry(declaration.key())
                .or_default()
                .push(declaration.coordinate.version());
        }
        for key in resolved.keys() {
            requested.entry(key.clone()).or_default();
        }

        let mut reconciliations: Vec<Reconciliation> = requested
            .iter()
            .map(|(key, versions)| {
                VersionReconciler::reconcile(
                    key,
                    versions.iter().copied(),
                    Self::system_resolved(versions, resolved.get(key)),
                    bom_result.managed_version(key),
                )
            })
            .collect();
        reconciliations.sort_by(|a, b| a.key.cmp(&b.key));

        let mut changed = 0;
        for reconciliation in &reconciliations {
            if reconciliation.decision != VersionDecision::NoChange {
                changed += 1;
            }
            self.log.record_decision(reconciliation.clone());
        }
        self.progress_reporter.report(&format!(
            "⚖️  Reconciled {} version(s), {} changed",
            reconciliations.len(),
            changed
        ));

        reconciliations
    }

    /// The installed coordinate counts as system-resolved only when it replaces
    /// the request: no version was declared, the key was reached transitively,
    /// or the installed version differs from the highest requested one.
    fn system_resolved<'a>(
        requested: &[&str],
        installed: Option<&'a Coordinate>,
    ) -> Option<&'a Coordinate> {
        let installed = installed?;
        let highest = max_version(requested.iter().copied().filter(|v| !v.trim().is_empty()));
        match highest {
            Some(version) if version == installed.version() => None,
            _ => Some(installed),
        }
    }

    fn build_classification_context(
        manifest: &ProjectManifest,
        declared: &[DeclaredDependency],
        names: &BucketNames,
        scopes: ScopeMap,
    ) -> ClassificationContext {
        let mut explicit_buckets: HashMap<DependencyKey, Vec<Bucket>> = HashMap::new();
        let mut production_keys: HashSet<DependencyKey> = HashSet::new();
        let mut test_keys: HashSet<DependencyKey> = HashSet::new();

        for declaration in declared {
            let key = declaration.key();
            let buckets = explicit_buckets.entry(key.clone()).or_default();
            for bucket in declaration.buckets.iter().map(|b| names.parse(b)) {
                if !buckets.contains(&bucket) {
                    buckets.push(bucket);
                }
            }
            if declaration.test {
                test_keys.insert(key);
            } else {
                production_keys.insert(key);
            }
        }
        explicit_buckets.retain(|_, buckets| !buckets.is_empty());

        ClassificationContext {
            explicit_buckets,
            test_context_keys: test_keys.difference(&production_keys).cloned().collect(),
            declared_types: manifest.declared_types.clone(),
            scopes,
            self_keys: manifest.unit.self_keys().into_iter().collect(),
        }
    }

    fn report_bucket_summary(
        &self,
        assignments: &[BucketAssignment],
        names: &BucketNames,
    ) {
        let mut counts: IndexMap<String, usize> = names
            .all()
            .iter()
            .map(|name| (name.to_string(), 0))
            .collect();
        for assignment in assignments {
            for bucket in &assignment.buckets {
                *counts.entry(names.name_of(bucket).to_string()).or_default() += 1;
            }
        }

        let summary: Vec<String> = counts
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(name, count)| format!("{} {}", count, name))
            .collect();

        self.progress_reporter.report_completion(&format!(
            "Success: {} artifact(s) assigned{}",
            assignments.len(),
            if summary.is_empty() {
                String::new()
            } else {
                format!(" ({})", summary.join(", "))
            }
        ));
    }
}
