use serde::Deserialize;
use std::fmt;

/// Target classification of a resolved dependency in the consuming build
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    Api,
    Implementation,
    RuntimeOnly,
    CompileOnly,
    Test,
    /// A bucket the consuming build declares that the engine has no rule for
    Custom(String),
}

/// Declaration kind recorded for a dependency elsewhere in the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    Api,
    Implementation,
    Runtime,
    CompileOnly,
    TestImplementation,
    TestRuntime,
    TestCompileOnly,
}

impl DeclaredType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "api" => Some(DeclaredType::Api),
            "implementation" | "compile" => Some(DeclaredType::Implementation),
            "runtime" | "runtimeOnly" => Some(DeclaredType::Runtime),
            "compileOnly" | "provided" => Some(DeclaredType::CompileOnly),
            "testImplementation" | "testCompile" => Some(DeclaredType::TestImplementation),
            "testRuntime" | "testRuntimeOnly" => Some(DeclaredType::TestRuntime),
            "testCompileOnly" => Some(DeclaredType::TestCompileOnly),
            _ => None,
        }
    }

    pub fn is_test(self) -> bool {
        matches!(
            self,
            DeclaredType::TestImplementation
                | DeclaredType::TestRuntime
                | DeclaredType::TestCompileOnly
        )
    }

    /// Bucket for a production declaration; test declarations have none
    pub fn bucket(self) -> Option<Bucket> {
        match self {
            DeclaredType::Api => Some(Bucket::Api),
            DeclaredType::Implementation => Some(Bucket::Implementation),
            DeclaredType::Runtime => Some(Bucket::RuntimeOnly),
            DeclaredType::CompileOnly => Some(Bucket::CompileOnly),
            DeclaredType::TestImplementation
            | DeclaredType::TestRuntime
            | DeclaredType::TestCompileOnly => None,
        }
    }
}

/// Names the consuming build system uses for each bucket
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BucketNames {
    pub api: String,
    pub implementation: String,
    pub runtime_only: String,
    pub compile_only: String,
    pub test: String,
}

impl Default for BucketNames {
    fn default() -> Self {
        Self {
            api: "api".to_string(),
            implementation: "implementation".to_string(),
            runtime_only: "runtimeOnly".to_string(),
            compile_only: "compileOnly".to_string(),
            test: "testImplementation".to_string(),
        }
    }
}

impl BucketNames {
    pub fn name_of<'a>(&'a self, bucket: &'a Bucket) -> &'a str {
        match bucket {
            Bucket::Api => &self.api,
            Bucket::Implementation => &self.implementation,
            Bucket::RuntimeOnly => &self.runtime_only,
            Bucket::CompileOnly => &self.compile_only,
            Bucket::Test => &self.test,
            Bucket::Custom(name) => name,
        }
    }

    /// Maps a configured name back to its bucket. Unknown names become
    /// `Bucket::Custom` so explicit declarations are never lost.
    pub fn parse(&self, name: &str) -> Bucket {
        let name = name.trim();
        if name == self.api {
            Bucket::Api
        } else if name == self.implementation {
            Bucket::Implementation
        } else if name == self.runtime_only {
            Bucket::RuntimeOnly
        } else if name == self.compile_only {
            Bucket::CompileOnly
        } else if name == self.test {
            Bucket::Test
        } else {
            Bucket::Custom(name.to_string())
        }
    }

    pub fn all(&self) -> [&str; 5] {
        [
            &self.api,
            &self.implementation,
            &self.runtime_only,
            &self.compile_only,
            &self.test,
        ]
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(BucketNames::default().name_of(self))
    }
}
