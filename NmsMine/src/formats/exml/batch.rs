//! Discovery of exml files in unpacked data directories

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension of exml documents, matched case-insensitively.
pub const EXML_EXTENSION: &str = "exml";

/// Find all exml files under `dir`, recursively, sorted by path.
///
/// # Errors
/// Returns an error if the directory cannot be walked.
pub fn find_exml_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(EXML_EXTENSION))
        {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;

    #[test]
    fn test_find_exml_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("LANGUAGE")).unwrap();
        fs::write(dir.path().join("LANGUAGE/B.EXML"), "<Data />").unwrap();
        fs::write(dir.path().join("a.exml"), "<Data />").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let files = find_exml_files(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("LANGUAGE/B.EXML"), dir.path().join("a.exml")]
        );
    }

    #[test]
    fn test_missing_dir() {
        assert!(matches!(
            find_exml_files("/nonexistent/data"),
            Err(Error::WalkDirError(_))
        ));
    }
}
