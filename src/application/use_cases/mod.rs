mod resolve_dependencies;

pub use resolve_dependencies::ResolveDependenciesUseCase;
