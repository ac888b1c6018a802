/// Filesystem adapters: POM discovery and parsing, artifact checks, manifest and report I/O
mod artifact_verifier;
mod file_reader;
mod file_writer;
mod pom_repository;
mod xml_pom_parser;

pub use artifact_verifier::LocalArtifactVerifier;
pub use file_reader::{FileSystemReader, MANIFEST_FILENAME};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use pom_repository::LocalPomRepository;
pub use xml_pom_parser::XmlPomParser;
