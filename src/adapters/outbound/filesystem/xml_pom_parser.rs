use crate::ports::outbound::PomParser;
use crate::resolution::domain::{Coordinate, Scope, DEFAULT_PACKAGING, POM_PACKAGING};
use crate::shared::error::ResolveError;
use crate::shared::security::read_guarded;
use crate::shared::Result;
use indexmap::IndexMap;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Parent chains deeper than this are cut off
const MAX_PARENT_DEPTH: usize = 16;

/// XmlPomParser adapter reading POM files with roxmltree
///
/// Produces an effective model: groupId and version are inherited from the
/// parent chain, parent properties are merged, `${...}` placeholders are
/// substituted and dependency versions missing from `<dependencies>` are
/// taken from the effective `<dependencyManagement>`.
///
/// Parents are located through `<relativePath>`, the sibling `../pom.xml`,
/// then the repository layout under the configured root.
pub struct XmlPomParser {
    repository_root: Option<PathBuf>,
}

impl XmlPomParser {
    pub fn new() -> Self {
        Self {
            repository_root: None,
        }
    }

    /// Also look for parent POMs in `group/path/artifact/version/` below `root`
    pub fn with_repository_root(root: impl Into<PathBuf>) -> Self {
        Self {
            repository_root: Some(root.into()),
        }
    }

    fn load_effective(&self, path: &Path) -> Result<EffectivePom> {
        self.load_effective_at_depth(path, 0)
    }

    fn load_effective_at_depth(&self, path: &Path, depth: usize) -> Result<EffectivePom> {
        let raw = parse_raw_pom(path)?;

        let parent = match raw.parent.as_ref() {
            Some(parent_ref) if depth < MAX_PARENT_DEPTH => self
                .locate_parent(path, parent_ref)
                .and_then(|parent_path| {
                    // An unreadable parent only costs inheritance, not the child
                    self.load_effective_at_depth(&parent_path, depth + 1).ok()
                }),
            _ => None,
        };

        Ok(EffectivePom::from_raw(&raw, parent.as_ref()))
    }

    fn locate_parent(&self, child: &Path, parent: &ParentRef) -> Option<PathBuf> {
        let child_dir = child.parent().unwrap_or_else(|| Path::new("."));
        let mut candidates = Vec::new();

        match parent.relative_path.as_deref() {
            Some("") => {}
            Some(relative) => {
                let target = child_dir.join(relative);
                if target.is_dir() {
                    candidates.push(target.join("pom.xml"));
                } else {
                    candidates.push(target);
                }
            }
            None => candidates.push(child_dir.join("..").join("pom.xml")),
        }

        if let (Some(root), Some(group), Some(version)) = (
            self.repository_root.as_deref(),
            parent.group_id.as_deref(),
            parent.version.as_deref(),
        ) {
            candidates.push(
                root.join(group.replace('.', "/"))
                    .join(&parent.artifact_id)
                    .join(version)
                    .join(format!("{}-{}.pom", parent.artifact_id, version)),
            );
        }

        candidates.into_iter().find(|candidate| {
            candidate.is_file() && !same_file(candidate, child) && parent.matches(candidate)
        })
    }
}

impl Default for XmlPomParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PomParser for XmlPomParser {
    fn parse_coordinate(&self, pom_path: &Path) -> Result<Coordinate> {
        let pom = self.load_effective(pom_path)?;
        Ok(Coordinate::new(
            pom.group_id.unwrap_or_default(),
            pom.artifact_id.unwrap_or_default(),
            pom.version.unwrap_or_default(),
        )
        .with_packaging(pom.packaging)
        .with_pom_path(pom_path))
    }

    /// Optional dependencies are left out; they never reach consumers.
    fn parse_dependencies(&self, pom_path: &Path) -> Result<Vec<Coordinate>> {
        let pom = self.load_effective(pom_path)?;
        Ok(pom
            .dependencies
            .iter()
            .filter(|dep| !dep.optional)
            .map(|dep| dep.to_coordinate(Some(Scope::Compile)))
            .collect())
    }

    fn parse_dependency_management(&self, pom_path: &Path) -> Result<Vec<Coordinate>> {
        let pom = self.load_effective(pom_path)?;
        Ok(pom
            .dependency_management
            .values()
            .map(|dep| dep.to_coordinate(None))
            .collect())
    }
}

#[derive(Debug, Clone, Default)]
struct RawPom {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    packaging: Option<String>,
    parent: Option<ParentRef>,
    properties: BTreeMap<String, String>,
    dependencies: Vec<PomDependency>,
    dependency_management: Vec<PomDependency>,
}

#[derive(Debug, Clone)]
struct ParentRef {
    group_id: Option<String>,
    artifact_id: String,
    version: Option<String>,
    relative_path: Option<String>,
}

impl ParentRef {
    /// A candidate file is only accepted when it really is the referenced parent
    fn matches(&self, candidate: &Path) -> bool {
        let Ok(raw) = parse_raw_pom(candidate) else {
            return false;
        };
        let group = raw
            .group_id
            .or_else(|| raw.parent.as_ref().and_then(|p| p.group_id.clone()));
        raw.artifact_id.as_deref() == Some(self.artifact_id.as_str())
            && (self.group_id.is_none() || group == self.group_id)
    }
}

#[derive(Debug, Clone)]
struct PomDependency {
    group_id: String,
    artifact_id: String,
    version: Option<String>,
    scope: Option<String>,
    type_: Option<String>,
    optional: bool,
}

impl PomDependency {
    /// `missing_scope` is used when no `<scope>` was written
    fn to_coordinate(&self, missing_scope: Option<Scope>) -> Coordinate {
        let scope = match self.scope.as_deref() {
            Some(value) => Scope::parse(value),
            None => missing_scope,
        };
        let packaging = match self.type_.as_deref() {
            Some(t) if t.eq_ignore_ascii_case(POM_PACKAGING) => POM_PACKAGING,
            _ => DEFAULT_PACKAGING,
        };
        Coordinate::new(
            self.group_id.clone(),
            self.artifact_id.clone(),
            self.version.clone().unwrap_or_default(),
        )
        .with_packaging(packaging)
        .with_scope(scope)
    }

    fn interpolate(&self, properties: &BTreeMap<String, String>) -> Self {
        let resolve = |value: &str| resolve_placeholders(value, properties);
        Self {
            group_id: resolve(&self.group_id),
            artifact_id: resolve(&self.artifact_id),
            version: self.version.as_deref().map(resolve),
            scope: self.scope.as_deref().map(resolve),
            type_: self.type_.as_deref().map(resolve),
            optional: self.optional,
        }
    }

    fn key(&self) -> (String, String) {
        (self.group_id.clone(), self.artifact_id.clone())
    }
}

#[derive(Debug, Clone)]
struct EffectivePom {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    packaging: String,
    properties: BTreeMap<String, String>,
    dependency_management: IndexMap<(String, String), PomDependency>,
    dependencies: Vec<PomDependency>,
}

impl EffectivePom {
    fn from_raw(raw: &RawPom, parent: Option<&EffectivePom>) -> Self {
        let parent_ref = raw.parent.as_ref();
        let group_id = raw
            .group_id
            .clone()
            .or_else(|| parent_ref.and_then(|p| p.group_id.clone()))
            .or_else(|| parent.and_then(|p| p.group_id.clone()));
        let artifact_id = raw.artifact_id.clone();
        let version = raw
            .version
            .clone()
            .or_else(|| parent_ref.and_then(|p| p.version.clone()))
            .or_else(|| parent.and_then(|p| p.version.clone()));

        let mut properties = parent.map(|p| p.properties.clone()).unwrap_or_default();
        properties.extend(raw.properties.clone());
        for (name, value) in [
            ("groupId", group_id.as_ref()),
            ("artifactId", artifact_id.as_ref()),
            ("version", version.as_ref()),
        ] {
            if let Some(value) = value {
                properties.insert(format!("project.{}", name), value.clone());
                properties.insert(format!("pom.{}", name), value.clone());
            }
        }
        if let Some(parent_version) = parent_ref.and_then(|p| p.version.clone()) {
            properties.insert("project.parent.version".to_string(), parent_version);
        }

        let group_id = group_id.map(|g| resolve_placeholders(&g, &properties));
        let version = version.map(|v| resolve_placeholders(&v, &properties));

        let mut dependency_management = parent
            .map(|p| p.dependency_management.clone())
            .unwrap_or_default();
        for dep in &raw.dependency_management {
            let dep = dep.interpolate(&properties);
            dependency_management.insert(dep.key(), dep);
        }

        let dependencies = raw
            .dependencies
            .iter()
            .map(|dep| {
                let mut dep = dep.interpolate(&properties);
                if let Some(managed) = dependency_management.get(&dep.key()) {
                    if dep.version.is_none() {
                        dep.version = managed.version.clone();
                    }
                    if dep.scope.is_none() {
                        dep.scope = managed.scope.clone();
                    }
                }
                dep
            })
            .collect();

        Self {
            group_id,
            artifact_id,
            version,
            packaging: raw
                .packaging
                .clone()
                .unwrap_or_else(|| DEFAULT_PACKAGING.to_string()),
            properties,
            dependency_management,
            dependencies,
        }
    }
}

fn parse_raw_pom(path: &Path) -> Result<RawPom> {
    let contents = read_guarded(path, "POM file")?;

    let doc = roxmltree::Document::parse(&contents).map_err(|e| ResolveError::PomParseError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let project = doc.root_element();
    if project.tag_name().name() != "project" {
        return Err(ResolveError::PomParseError {
            path: path.to_path_buf(),
            details: format!(
                "expected <project> as root element, found <{}>",
                project.tag_name().name()
            ),
        }
        .into());
    }

    let mut pom = RawPom {
        group_id: child_text(&project, "groupId"),
        artifact_id: child_text(&project, "artifactId"),
        version: child_text(&project, "version"),
        packaging: child_text(&project, "packaging"),
        ..RawPom::default()
    };

    if let Some(parent_node) = child_element(&project, "parent") {
        if let Some(artifact_id) = child_text(&parent_node, "artifactId") {
            pom.parent = Some(ParentRef {
                group_id: child_text(&parent_node, "groupId"),
                artifact_id,
                version: child_text(&parent_node, "version"),
                // An empty <relativePath/> disables the filesystem lookup
                relative_path: child_element(&parent_node, "relativePath")
                    .map(|n| n.text().map(str::trim).unwrap_or_default().to_string()),
            });
        }
    }

    if let Some(props_node) = child_element(&project, "properties") {
        for child in props_node.children().filter(|n| n.is_element()) {
            if let Some(value) = child.text().map(str::trim).filter(|t| !t.is_empty()) {
                pom.properties
                    .insert(child.tag_name().name().to_string(), value.to_string());
            }
        }
    }

    if let Some(deps_node) = child_element(&project, "dependencies") {
        pom.dependencies = parse_dependency_list(&deps_node);
    }

    if let Some(management) = child_element(&project, "dependencyManagement") {
        if let Some(deps_node) = child_element(&management, "dependencies") {
            pom.dependency_management = parse_dependency_list(&deps_node);
        }
    }

    Ok(pom)
}

fn parse_dependency_list(deps_node: &roxmltree::Node<'_, '_>) -> Vec<PomDependency> {
    deps_node
        .children()
        .filter(|n| n.is_element() && n.has_tag_name("dependency"))
        .filter_map(|dep_node| {
            Some(PomDependency {
                group_id: child_text(&dep_node, "groupId")?,
                artifact_id: child_text(&dep_node, "artifactId")?,
                version: child_text(&dep_node, "version"),
                scope: child_text(&dep_node, "scope"),
                type_: child_text(&dep_node, "type"),
                optional: child_text(&dep_node, "optional")
                    .is_some_and(|v| v.eq_ignore_ascii_case("true")),
            })
        })
        .collect()
}

fn child_element<'a>(
    node: &roxmltree::Node<'a, 'a>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'a>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn child_text(node: &roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    child_element(node, name)
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Substitutes `${name}` from `properties`, leaving unknown names untouched
fn resolve_placeholders(text: &str, properties: &BTreeMap<String, String>) -> String {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let Some(re) = RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").ok()) else {
        return text.to_string();
    };

    re.replace_all(text, |caps: &regex::Captures<'_>| {
        properties
            .get(&caps[1])
            .cloned()
            .unwrap_or_else(|| caps[0].to_string())
    })
    .into_owned()
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, contents: &str) -> PathBuf {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_parse_coordinate() {
        let dir = TempDir::new().unwrap();
        let pom = write(
            dir.path(),
            "lib-1.0.pom",
            r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
                 <groupId>org.example</groupId>
                 <artifactId>lib</artifactId>
                 <version>1.0</version>
               </project>"#,
        );

        let coordinate = XmlPomParser::new().parse_coordinate(&pom).unwrap();
        assert_eq!(coordinate.notation(), "org.example:lib:1.0");
        assert_eq!(coordinate.packaging(), "jar");
        assert_eq!(coordinate.pom_path(), Some(pom.as_path()));
    }

    #[test]
    fn test_bom_packaging() {
        let dir = TempDir::new().unwrap();
        let pom = write(
            dir.path(),
            "bom.pom",
            r#"<project><groupId>g</groupId><artifactId>bom</artifactId>
               <version>2.0</version><packaging>pom</packaging></project>"#,
        );
        assert!(XmlPomParser::new().parse_coordinate(&pom).unwrap().is_bom());
    }

    #[test]
    fn test_rejects_non_project_document() {
        let dir = TempDir::new().unwrap();
        let pom = write(dir.path(), "settings.pom", "<settings><x/></settings>");
        let err = XmlPomParser::new().parse_coordinate(&pom).unwrap_err();
        assert!(err.to_string().contains("<project>"));

        let broken = write(dir.path(), "broken.pom", "<project><groupId>");
        assert!(XmlPomParser::new().parse_coordinate(&broken).is_err());
    }

    #[test]
    fn test_dependencies_scopes_and_properties() {
        let dir = TempDir::new().unwrap();
        let pom = write(
            dir.path(),
            "app.pom",
            r#"<project>
                 <groupId>g</groupId><artifactId>app</artifactId><version>1.0</version>
                 <properties><guava.version>31.1-jre</guava.version></properties>
                 <dependencies>
                   <dependency><groupId>com.google.guava</groupId><artifactId>guava</artifactId>
                     <version>${guava.version}</version></dependency>
                   <dependency><groupId>junit</groupId><artifactId>junit</artifactId>
                     <version>4.13</version><scope>test</scope></dependency>
                   <dependency><groupId>g</groupId><artifactId>sys</artifactId>
                     <version>1</version><scope>system</scope></dependency>
                   <dependency><groupId>g</groupId><artifactId>opt</artifactId>
                     <version>1</version><optional>true</optional></dependency>
                   <dependency><groupId>${project.groupId}</groupId><artifactId>core</artifactId>
                     <version>${project.version}</version><scope>runtime</scope></dependency>
                 </dependencies>
               </project>"#,
        );

        let deps = XmlPomParser::new().parse_dependencies(&pom).unwrap();
        let rendered: Vec<(String, Option<Scope>)> =
            deps.iter().map(|d| (d.notation(), d.scope())).collect();
        assert_eq!(
            rendered,
            vec![
                ("com.google.guava:guava:31.1-jre".to_string(), Some(Scope::Compile)),
                ("junit:junit:4.13".to_string(), Some(Scope::Test)),
                ("g:sys:1".to_string(), None),
                ("g:core:1.0".to_string(), Some(Scope::Runtime)),
            ]
        );
    }

    #[test]
    fn test_dependency_management_fills_missing_versions() {
        let dir = TempDir::new().unwrap();
        let pom = write(
            dir.path(),
            "app.pom",
            r#"<project>
                 <groupId>g</groupId><artifactId>app</artifactId><version>1.0</version>
                 <dependencyManagement><dependencies>
                   <dependency><groupId>g</groupId><artifactId>lib</artifactId><version>2.5</version></dependency>
                   <dependency><groupId>g</groupId><artifactId>other-bom</artifactId><version>1.0</version>
                     <type>pom</type><scope>import</scope></dependency>
                 </dependencies></dependencyManagement>
                 <dependencies>
                   <dependency><groupId>g</groupId><artifactId>lib</artifactId></dependency>
                 </dependencies>
               </project>"#,
        );

        let parser = XmlPomParser::new();
        let deps = parser.parse_dependencies(&pom).unwrap();
        assert_eq!(deps[0].version(), "2.5");

        let managed = parser.parse_dependency_management(&pom).unwrap();
        assert_eq!(managed.len(), 2);
        assert!(!managed[0].is_bom());
        assert!(managed[1].is_bom());
        assert_eq!(managed[1].scope(), None);
    }

    #[test]
    fn test_parent_inheritance_from_sibling_pom() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "pom.xml",
            r#"<project><groupId>org.parent</groupId><artifactId>parent</artifactId>
                 <version>3.1</version><packaging>pom</packaging>
                 <properties><slf4j.version>2.0.9</slf4j.version></properties>
               </project>"#,
        );
        let child = write(
            dir.path(),
            "child/pom.xml",
            r#"<project>
                 <parent><groupId>org.parent</groupId><artifactId>parent</artifactId><version>3.1</version></parent>
                 <artifactId>child</artifactId>
                 <dependencies>
                   <dependency><groupId>org.slf4j</groupId><artifactId>slf4j-api</artifactId>
                     <version>${slf4j.version}</version></dependency>
                 </dependencies>
               </project>"#,
        );

        let parser = XmlPomParser::new();
        let coordinate = parser.parse_coordinate(&child).unwrap();
        assert_eq!(coordinate.notation(), "org.parent:child:3.1");
        assert_eq!(coordinate.packaging(), "jar");

        let deps = parser.parse_dependencies(&child).unwrap();
        assert_eq!(deps[0].version(), "2.0.9");
    }

    #[test]
    fn test_parent_from_repository_layout() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "org/acme/acme-parent/5/acme-parent-5.pom",
            r#"<project><groupId>org.acme</groupId><artifactId>acme-parent</artifactId>
                 <version>5</version><packaging>pom</packaging>
                 <dependencyManagement><dependencies>
                   <dependency><groupId>org.acme</groupId><artifactId>util</artifactId><version>5.2</version></dependency>
                 </dependencies></dependencyManagement>
               </project>"#,
        );
        let child = write(
            dir.path(),
            "org/acme/widget/1.0/widget-1.0.pom",
            r#"<project>
                 <parent><groupId>org.acme</groupId><artifactId>acme-parent</artifactId>
                   <version>5</version><relativePath/></parent>
                 <artifactId>widget</artifactId><version>1.0</version>
                 <dependencies>
                   <dependency><groupId>org.acme</groupId><artifactId>util</artifactId></dependency>
                 </dependencies>
               </project>"#,
        );

        let parser = XmlPomParser::with_repository_root(dir.path());
        assert_eq!(
            parser.parse_coordinate(&child).unwrap().notation(),
            "org.acme:widget:1.0"
        );
        assert_eq!(parser.parse_dependencies(&child).unwrap()[0].version(), "5.2");

        // Without the root the managed version is unknown
        let bare = XmlPomParser::new();
        assert_eq!(bare.parse_dependencies(&child).unwrap()[0].version(), "");
    }

    #[test]
    fn test_missing_parent_falls_back_to_parent_reference() {
        let dir = TempDir::new().unwrap();
        let child = write(
            dir.path(),
            "orphan.pom",
            r#"<project>
                 <parent><groupId>org.gone</groupId><artifactId>gone</artifactId><version>9</version>
                   <relativePath/></parent>
                 <artifactId>orphan</artifactId>
               </project>"#,
        );
        let coordinate = XmlPomParser::new().parse_coordinate(&child).unwrap();
        assert_eq!(coordinate.notation(), "org.gone:orphan:9");
    }

    #[test]
    fn test_unknown_placeholder_left_untouched() {
        let props = BTreeMap::new();
        assert_eq!(resolve_placeholders("${revision}", &props), "${revision}");
    }
}
