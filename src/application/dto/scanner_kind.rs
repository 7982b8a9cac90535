/// Import scanner selection
///
/// Both the CLI (inbound) and the scanner factory need to agree on the
/// available scanners, so the enum lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScannerKind {
    /// Built-in scanner for `.py` files and notebooks (default)
    #[default]
    Native,
    /// External `pipreqs` tool
    Pipreqs,
}

impl std::str::FromStr for ScannerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(ScannerKind::Native),
            "pipreqs" => Ok(ScannerKind::Pipreqs),
            _ => Err(format!(
                "Invalid scanner: {}. Please specify 'native' or 'pipreqs'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ScannerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScannerKind::Native => write!(f, "native"),
            ScannerKind::Pipreqs => write!(f, "pipreqs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_scanner_kind_from_str() {
        assert_eq!(ScannerKind::from_str("native").unwrap(), ScannerKind::Native);
        assert_eq!(ScannerKind::from_str("pipreqs").unwrap(), ScannerKind::Pipreqs);
    }

    #[test]
    fn test_scanner_kind_from_str_case_insensitive() {
        assert_eq!(ScannerKind::from_str("PIPREQS").unwrap(), ScannerKind::Pipreqs);
        assert_eq!(ScannerKind::from_str("Native").unwrap(), ScannerKind::Native);
    }

    #[test]
    fn test_scanner_kind_from_str_invalid() {
        let error = ScannerKind::from_str("pyflakes").unwrap_err();
        assert!(error.contains("Invalid scanner"));
        assert!(error.contains("native"));
        assert!(error.contains("pipreqs"));
    }

    #[test]
    fn test_scanner_kind_display() {
        assert_eq!(ScannerKind::Native.to_string(), "native");
        assert_eq!(ScannerKind::Pipreqs.to_string(), "pipreqs");
        assert_eq!(ScannerKind::default(), ScannerKind::Native);
    }
}
