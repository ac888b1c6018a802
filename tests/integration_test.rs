/// Integration tests for the resolution engine and the application layer
mod test_utilities;

use pom_resolve::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use test_utilities::mocks::*;

fn key(notation: &str) -> DependencyKey {
    notation.parse().unwrap()
}

fn unit(group: &str, name: &str) -> BuildUnit {
    BuildUnit {
        group: group.to_string(),
        name: name.to_string(),
        aliases: vec![],
    }
}

fn declare(notation: &str) -> DeclaredDependency {
    DeclaredDependency::new(Coordinate::parse_notation(notation).unwrap())
}

fn index_of(store: &MockPomStore) -> ArtifactIndex {
    ArtifactIndex::build(&store.discover_pom_files().unwrap(), store)
}

#[test]
fn test_bom_scenario_through_services() {
    let store = MockPomStore::new()
        .bom("g:a:1.0", &["g:b:2.0"])
        .artifact("g:b:1.5", &[]);
    let index = index_of(&store);

    let seeds = [key("g:a"), key("g:b")];
    let bom_result = BomExpander::process(seeds.iter(), &index, &store);
    assert_eq!(bom_result.managed_version(&key("g:b")), Some("2.0"));
    assert!(bom_result.is_processed(&key("g:a")));

    let reconciliation = VersionReconciler::reconcile(
        &key("g:b"),
        ["1.5"],
        None,
        bom_result.managed_version(&key("g:b")),
    );
    assert_eq!(
        reconciliation.decision,
        VersionDecision::ApplyManaged {
            to: "2.0".to_string()
        }
    );
    assert_eq!(reconciliation.final_version(), "2.0");

    let coordinate = index.find_key(&key("g:b")).unwrap().clone();
    let mut resolved = ResolvedArtifacts::new();
    resolved.insert(coordinate.key(), coordinate);
    let (assignments, skipped) =
        BucketClassifier::classify_all(&resolved, &ClassificationContext::default());

    assert!(skipped.is_empty());
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].buckets, vec![Bucket::Implementation]);
}

#[test]
fn test_self_dependency_scenario_through_services() {
    let store = MockPomStore::new()
        .artifact("g:lib:1.0", &[("g:app:1.0", Some(Scope::Compile))])
        .artifact("g:app:1.0", &[]);
    let index = index_of(&store);

    let mut resolved = ResolvedArtifacts::new();
    let root = index.find_key(&key("g:lib")).unwrap().clone();
    resolved.insert(root.key(), root);
    let mut scopes = ScopeMap::new();
    let transitive = TransitiveResolver::resolve(&mut resolved, &mut scopes, &index, &store);
    assert!(transitive.main_dependencies().contains(&key("g:app")));

    let context = ClassificationContext {
        self_keys: [key("g:app")].into_iter().collect(),
        scopes,
        ..ClassificationContext::default()
    };
    let (assignments, skipped) = BucketClassifier::classify_all(&resolved, &context);

    assert!(assignments.iter().all(|a| a.key != key("g:app")));
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].0, key("g:app"));
}

#[test]
fn test_use_case_happy_path() {
    let store = MockPomStore::new()
        .artifact(
            "com.google.guava:guava:31.1-jre",
            &[("com.google.guava:failureaccess:1.0.1", None)],
        )
        .artifact("com.google.guava:failureaccess:1.0.1", &[])
        .artifact("junit:junit:4.13.2", &[("org.hamcrest:hamcrest-core:1.3", None)])
        .artifact("org.hamcrest:hamcrest-core:1.3", &[]);

    let mut junit = declare("junit:junit:4.13.2");
    junit.test = true;
    let manifest = ProjectManifest {
        unit: unit("com.example", "app"),
        dependencies: vec![declare("com.google.guava:guava:30.0-jre"), junit],
        ..ProjectManifest::default()
    };

    let reporter = MockProgressReporter::new();
    let use_case = ResolveDependenciesUseCase::new(
        MockManifestReader::new(manifest),
        store.clone(),
        store,
        MockArtifactVerifier::new(),
        reporter.clone(),
    );

    let response = use_case
        .execute(ResolveRequest::for_project("/project"))
        .unwrap();

    assert_eq!(response.resolved.len(), 4);
    assert!(!response.has_unresolved());

    let buckets: HashMap<String, Vec<Bucket>> = response
        .assignments
        .iter()
        .map(|a| (a.key.to_string(), a.buckets.clone()))
        .collect();
    assert_eq!(buckets["com.google.guava:guava"], vec![Bucket::Implementation]);
    assert_eq!(
        buckets["com.google.guava:failureaccess"],
        vec![Bucket::Implementation]
    );
    assert_eq!(buckets["junit:junit"], vec![Bucket::Test]);
    assert_eq!(buckets["org.hamcrest:hamcrest-core"], vec![Bucket::Test]);

    let guava = response
        .reconciliations
        .iter()
        .find(|r| r.key == key("com.google.guava:guava"))
        .unwrap();
    assert_eq!(
        guava.decision,
        VersionDecision::Override {
            to: "31.1-jre".to_string()
        }
    );

    assert!(reporter.contains("Progress: 4/4 - indexing"));
}

#[test]
fn test_use_case_applies_managed_version_for_missing_artifact() {
    let store = MockPomStore::new().bom("org.acme:acme-bom:1.0", &["org.acme:widget:2.0"]);

    let mut bom = declare("org.acme:acme-bom:1.0");
    bom.coordinate = bom.coordinate.with_packaging("pom");
    let manifest = ProjectManifest {
        unit: unit("com.example", "app"),
        dependencies: vec![bom, declare("org.acme:widget:1.0")],
        ..ProjectManifest::default()
    };

    let use_case = ResolveDependenciesUseCase::new(
        MockManifestReader::new(manifest),
        store.clone(),
        store,
        MockArtifactVerifier::new(),
        MockProgressReporter::new(),
    );
    let response = use_case
        .execute(ResolveRequest::for_project("/project"))
        .unwrap();

    assert!(response.not_found.contains(&key("org.acme:widget")));
    assert!(response.has_unresolved());

    let widget = response
        .reconciliations
        .iter()
        .find(|r| r.key == key("org.acme:widget"))
        .unwrap();
    assert_eq!(widget.final_version(), "2.0");

    let report = ResolutionReportBuilder::build(&response);
    assert_eq!(report.summary.boms, 1);
    assert_eq!(report.boms[0].managed, vec!["org.acme:widget:2.0"]);
    assert!(report.buckets.is_empty());
}

#[test]
fn test_use_case_bom_scenario_with_installed_binary() {
    let store = MockPomStore::new()
        .bom("g:a:1.0", &["g:b:2.0"])
        .artifact("g:b:1.5", &[]);
    let manifest = ProjectManifest {
        unit: unit("com.example", "app"),
        dependencies: vec![declare("g:a:1.0"), declare("g:b:1.5")],
        ..ProjectManifest::default()
    };

    let use_case = ResolveDependenciesUseCase::new(
        MockManifestReader::new(manifest),
        store.clone(),
        store,
        MockArtifactVerifier::new(),
        MockProgressReporter::new(),
    );
    let response = use_case
        .execute(ResolveRequest::for_project("/project"))
        .unwrap();

    let reconciliation = response
        .reconciliations
        .iter()
        .find(|r| r.key == key("g:b"))
        .unwrap();
    assert_eq!(
        reconciliation.decision,
        VersionDecision::ApplyManaged {
            to: "2.0".to_string()
        }
    );

    let assignment = response
        .assignments
        .iter()
        .find(|a| a.key == key("g:b"))
        .unwrap();
    assert_eq!(assignment.buckets, vec![Bucket::Implementation]);
    assert!(response.assignments.iter().all(|a| a.key != key("g:a")));
    assert!(!response.has_unresolved());
}

#[test]
fn test_use_case_manifest_read_failure() {
    let store = MockPomStore::new();
    let use_case = ResolveDependenciesUseCase::new(
        MockManifestReader::with_failure(),
        store.clone(),
        store,
        MockArtifactVerifier::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(ResolveRequest::for_project("/project"))
        .unwrap_err();
    assert!(err.to_string().contains("Mock manifest read failure"));
}

#[test]
fn test_use_case_missing_binary_moves_to_not_found() {
    let store = MockPomStore::new()
        .artifact("org.slf4j:slf4j-api:2.0.9", &[])
        .artifact("org.slf4j:slf4j-simple:2.0.9", &[]);
    let manifest = ProjectManifest {
        unit: unit("com.example", "app"),
        dependencies: vec![
            declare("org.slf4j:slf4j-api:2.0.9"),
            declare("org.slf4j:slf4j-simple:2.0.9"),
        ],
        ..ProjectManifest::default()
    };

    let use_case = ResolveDependenciesUseCase::new(
        MockManifestReader::new(manifest),
        store.clone(),
        store,
        MockArtifactVerifier::with_missing(&["org.slf4j:slf4j-simple"]),
        MockProgressReporter::new(),
    );
    let response = use_case
        .execute(ResolveRequest::for_project("/project"))
        .unwrap();

    assert!(response.not_found.contains(&key("org.slf4j:slf4j-simple")));
    assert_eq!(response.assignments.len(), 1);
    assert_eq!(response.assignments[0].key, key("org.slf4j:slf4j-api"));
}

#[test]
fn test_use_case_exclusion_with_wildcard() {
    let store = MockPomStore::new()
        .artifact("org.slf4j:slf4j-api:2.0.9", &[])
        .artifact("org.junit.jupiter:junit-jupiter-api:5.10.0", &[]);
    let manifest = ProjectManifest {
        unit: unit("com.example", "app"),
        dependencies: vec![
            declare("org.slf4j:slf4j-api:2.0.9"),
            declare("org.junit.jupiter:junit-jupiter-api:5.10.0"),
        ],
        ..ProjectManifest::default()
    };

    let use_case = ResolveDependenciesUseCase::new(
        MockManifestReader::new(manifest),
        store.clone(),
        store,
        MockArtifactVerifier::new(),
        MockProgressReporter::new(),
    );
    let request = ResolveRequest::new(
        "/project".into(),
        vec!["org.junit*:*".to_string()],
        true,
        BucketNames::default(),
    );
    let response = use_case.execute(request).unwrap();

    assert_eq!(
        response.excluded,
        vec![key("org.junit.jupiter:junit-jupiter-api")]
    );
    assert!(!response
        .resolved
        .contains_key(&key("org.junit.jupiter:junit-jupiter-api")));
}

#[test]
fn test_units_share_one_resolution_log() {
    let store = MockPomStore::new()
        .artifact("g:shared:1.0", &[])
        .artifact("g:only-b:1.0", &[]);
    let log = Arc::new(ResolutionLog::new());

    let manifests = [
        ProjectManifest {
            unit: unit("com.example", "a"),
            dependencies: vec![declare("g:shared:1.0")],
            ..ProjectManifest::default()
        },
        ProjectManifest {
            unit: unit("com.example", "b"),
            dependencies: vec![declare("g:shared:1.0"), declare("g:only-b:1.0")],
            ..ProjectManifest::default()
        },
    ];

    std::thread::scope(|s| {
        for manifest in manifests {
            let store = store.clone();
            let log = Arc::clone(&log);
            s.spawn(move || {
                let use_case = ResolveDependenciesUseCase::new(
                    MockManifestReader::new(manifest),
                    store.clone(),
                    store,
                    MockArtifactVerifier::new(),
                    MockProgressReporter::new(),
                )
                .with_log(log);
                use_case
                    .execute(ResolveRequest::for_project("/project"))
                    .unwrap();
            });
        }
    });

    assert_eq!(log.decision_count(), 2);

    let mut assigned = log.assignments_for("implementation");
    assigned.sort();
    assert_eq!(assigned, vec!["g:only-b:1.0", "g:shared:1.0"]);
}
