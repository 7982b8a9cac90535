use crate::adapters::outbound::scanner::{NativeImportScanner, PipreqsScanner};
use crate::application::dto::ScannerKind;
use crate::ports::outbound::ImportScanner;

/// Factory for creating import scanners
pub struct ScannerFactory;

impl ScannerFactory {
    /// Creates a scanner instance for the specified kind
    ///
    /// # Examples
    /// ```
    /// use env2reqs::application::dto::ScannerKind;
    /// use env2reqs::application::factories::ScannerFactory;
    /// use env2reqs::ports::outbound::ImportScanner;
    ///
    /// let scanner = ScannerFactory::create(ScannerKind::Native);
    /// assert_eq!(scanner.name(), "native");
    /// ```
    pub fn create(kind: ScannerKind) -> Box<dyn ImportScanner> {
        match kind {
            ScannerKind::Native => Box::new(NativeImportScanner::new()),
            ScannerKind::Pipreqs => Box::new(PipreqsScanner::new()),
        }
    }
}
