mod formatter_factory;
mod presenter_factory;

pub use formatter_factory::{FormatterFactory};
pub use presenter_factory::{PresenterFactory, PresenterType};
