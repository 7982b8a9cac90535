mod presenter_factory;
mod scanner_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
pub use scanner_factory::ScannerFactory;
