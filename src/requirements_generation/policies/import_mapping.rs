/// Import names whose PyPI distribution is published under a different name
///
/// Sorted by import name; looked up with binary search.
const IMPORT_TO_DISTRIBUTION: &[(&str, &str)] = &[
    ("Bio", "biopython"),
    ("Crypto", "pycryptodome"),
    ("OpenSSL", "pyOpenSSL"),
    ("PIL", "Pillow"),
    ("attr", "attrs"),
    ("bs4", "beautifulsoup4"),
    ("cv2", "opencv-python"),
    ("dateutil", "python-dateutil"),
    ("docx", "python-docx"),
    ("dotenv", "python-dotenv"),
    ("fitz", "PyMuPDF"),
    ("git", "GitPython"),
    ("jose", "python-jose"),
    ("jwt", "PyJWT"),
    ("magic", "python-magic"),
    ("mpl_toolkits", "matplotlib"),
    ("multipart", "python-multipart"),
    ("pptx", "python-pptx"),
    ("psycopg2", "psycopg2-binary"),
    ("serial", "pyserial"),
    ("skimage", "scikit-image"),
    ("sklearn", "scikit-learn"),
    ("slugify", "python-slugify"),
    ("tensorflow_hub", "tensorflow-hub"),
    ("usb", "pyusb"),
    ("win32api", "pywin32"),
    ("yaml", "PyYAML"),
    ("zmq", "pyzmq"),
];

/// Maps a top-level import name to the distribution that provides it
///
/// Names without a known mapping are assumed to be published under the
/// import name itself.
pub fn distribution_for_import(import_name: &str) -> &str {
    IMPORT_TO_DISTRIBUTION
        .binary_search_by(|(import, _)| (*import).cmp(import_name))
        .map(|index| IMPORT_TO_DISTRIBUTION[index].1)
        .unwrap_or(import_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted() {
        let imports: Vec<&str> = IMPORT_TO_DISTRIBUTION.iter().map(|(i, _)| *i).collect();
        let mut sorted = imports.clone();
        sorted.sort_unstable();
        assert_eq!(imports, sorted);
    }

    #[test]
    fn test_known_mappings() {
        assert_eq!(distribution_for_import("sklearn"), "scikit-learn");
        assert_eq!(distribution_for_import("yaml"), "PyYAML");
        assert_eq!(distribution_for_import("cv2"), "opencv-python");
        assert_eq!(distribution_for_import("PIL"), "Pillow");
    }

    #[test]
    fn test_unknown_import_maps_to_itself() {
        assert_eq!(distribution_for_import("numpy"), "numpy");
        assert_eq!(distribution_for_import("pandas"), "pandas");
    }
}
