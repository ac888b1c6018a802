/// Resolution engine: value types and the pure algorithms over them
pub mod domain;
pub mod services;
