//! Document file IO
//!
//! Thin synchronous helpers run inside spawned background tasks by
//! [`crate::actions::handle_action`]. Parsing and applying the loaded
//! document happens back on the update thread so the all-or-nothing apply
//! in `pagegrid-core` stays atomic.

use std::path::Path;

use pagegrid_core::prelude::*;

/// Write the exported JSON next to the target, then rename into place so a
/// crash mid-write never truncates an existing document.
pub fn save_document(path: &Path, json: &str) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json).map_err(|e| Error::document_save(e.to_string()))?;
    std::fs::rename(&tmp, path).map_err(|e| Error::document_save(e.to_string()))?;
    info!("saved page document to {}", path.display());
    Ok(())
}

/// Read a document's raw text.
pub fn load_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::DocumentNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");

        save_document(&path, "{\"x\":1}").unwrap();
        assert_eq!(load_document(&path).unwrap(), "{\"x\":1}");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_save_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        save_document(&path, "old").unwrap();
        save_document(&path, "new").unwrap();
        assert_eq!(load_document(&path).unwrap(), "new");
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::DocumentNotFound { .. }));
    }
}
