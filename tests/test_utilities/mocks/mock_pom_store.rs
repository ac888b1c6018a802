use pom_resolve::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Default, Clone)]
struct StoredPom {
    coordinate: Option<Coordinate>,
    dependencies: Vec<Coordinate>,
    managed: Vec<Coordinate>,
}

/// In-memory POM repository and parser
///
/// Each artifact lives at its repository-layout path below `/repo`.
/// Paths registered with `broken` fail to parse.
#[derive(Default, Clone)]
pub struct MockPomStore {
    poms: HashMap<PathBuf, StoredPom>,
}

impl MockPomStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path_of(coordinate: &Coordinate) -> PathBuf {
        PathBuf::from(format!(
            "/repo/{}/{}/{}/{}-{}.pom",
            coordinate.group_id().replace('.', "/"),
            coordinate.artifact_id(),
            coordinate.version(),
            coordinate.artifact_id(),
            coordinate.version()
        ))
    }

    /// Adds a jar artifact with `(notation, scope)` dependencies
    pub fn artifact(self, notation: &str, dependencies: &[(&str, Option<Scope>)]) -> Self {
        let dependencies = dependencies
            .iter()
            .map(|(n, scope)| Coordinate::parse_notation(n).unwrap().with_scope(*scope))
            .collect();
        self.insert(Coordinate::parse_notation(notation).unwrap(), dependencies, vec![])
    }

    /// Adds a BOM managing the given `group:artifact:version` entries
    pub fn bom(self, notation: &str, managed: &[&str]) -> Self {
        let coordinate = Coordinate::parse_notation(notation)
            .unwrap()
            .with_packaging("pom");
        let managed = managed
            .iter()
            .map(|n| Coordinate::parse_notation(n).unwrap())
            .collect();
        self.insert(coordinate, vec![], managed)
    }

    pub fn broken(mut self, path: &str) -> Self {
        self.poms.insert(PathBuf::from(path), StoredPom::default());
        self
    }

    fn insert(
        mut self,
        coordinate: Coordinate,
        dependencies: Vec<Coordinate>,
        managed: Vec<Coordinate>,
    ) -> Self {
        let path = Self::path_of(&coordinate);
        self.poms.insert(
            path.clone(),
            StoredPom {
                coordinate: Some(coordinate.with_pom_path(path)),
                dependencies,
                managed,
            },
        );
        self
    }

    fn get(&self, path: &Path) -> Result<&StoredPom> {
        match self.poms.get(path) {
            Some(pom) if pom.coordinate.is_some() => Ok(pom),
            _ => anyhow::bail!("Mock POM parse failure: {}", path.display()),
        }
    }
}

impl PomRepository for MockPomStore {
    fn discover_pom_files(&self) -> Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = self.poms.keys().cloned().collect();
        files.sort();
        Ok(files)
    }
}

impl PomParser for MockPomStore {
    fn parse_coordinate(&self, pom_path: &Path) -> Result<Coordinate> {
        self.get(pom_path)?
            .coordinate
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Mock POM has no coordinate"))
    }

    fn parse_dependencies(&self, pom_path: &Path) -> Result<Vec<Coordinate>> {
        Ok(self.get(pom_path)?.dependencies.clone())
    }

    fn parse_dependency_management(&self, pom_path: &Path) -> Result<Vec<Coordinate>> {
        Ok(self.get(pom_path)?.managed.clone())
    }
}
