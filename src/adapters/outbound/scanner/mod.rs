/// Import scanner adapters
mod native_scanner;
mod pipreqs_scanner;

pub use native_scanner::NativeImportScanner;
pub use pipreqs_scanner::PipreqsScanner;
