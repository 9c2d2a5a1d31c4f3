//! Upload policy: size cap, extension allow-lists, stored-name generation.
//!
//! Stored filenames are server-generated and never derived from the
//! user-supplied name; the original name is kept as metadata only.

use uuid::Uuid;

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum accepted upload size (5 MiB), enforced before any filesystem write.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Extensions accepted for case documents.
pub const DOCUMENT_EXTENSIONS: &[&str] =
    &["pdf", "doc", "docx", "txt", "xls", "xlsx", "jpg", "jpeg", "png"];

/// Extensions accepted for profile pictures.
pub const PICTURE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Extract the lowercased extension from a client-supplied filename.
pub fn file_extension(filename: &str) -> Option<String> {
    let ext = filename.rsplit_once('.')?.1;
    if ext.is_empty() || ext.contains(['/', '\\']) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Validate a filename against an extension allow-list, returning the
/// normalized extension.
pub fn validate_extension(filename: &str, allowed: &[&str]) -> Result<String, CoreError> {
    let ext = file_extension(filename).ok_or_else(|| {
        CoreError::Validation(format!("{filename:?} has no file extension"))
    })?;
    if !allowed.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "file type .{ext} is not allowed (accepted: {})",
            allowed.join(", ")
        )));
    }
    Ok(ext)
}

/// Enforce the upload size cap.
pub fn validate_size(size_bytes: usize) -> Result<(), CoreError> {
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "file exceeds the maximum upload size of {} bytes",
            MAX_UPLOAD_BYTES
        )));
    }
    Ok(())
}

/// Collision-resistant stored filename for a case document.
pub fn stored_document_name(ext: &str) -> String {
    format!("{}.{ext}", Uuid::new_v4())
}

/// Stored filename for a profile picture, keyed by owner so each owner has at
/// most one current file.
pub fn profile_picture_name(owner_id: DbId, ext: &str) -> String {
    format!("{owner_id}.{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file_extension("Brief.PDF").as_deref(), Some("pdf"));
        assert_eq!(file_extension("archive.tar.gz").as_deref(), Some("gz"));
    }

    #[test]
    fn missing_or_bogus_extension() {
        assert_eq!(file_extension("noext"), None);
        assert_eq!(file_extension("trailing."), None);
        assert_eq!(file_extension("odd.na/me"), None);
    }

    #[test]
    fn allow_list_is_enforced() {
        assert_eq!(
            validate_extension("motion.pdf", DOCUMENT_EXTENSIONS).unwrap(),
            "pdf"
        );
        assert!(validate_extension("payload.exe", DOCUMENT_EXTENSIONS).is_err());
        assert!(validate_extension("noext", DOCUMENT_EXTENSIONS).is_err());
        assert!(validate_extension("avatar.webp", PICTURE_EXTENSIONS).is_ok());
        assert!(validate_extension("avatar.webp", DOCUMENT_EXTENSIONS).is_err());
    }

    #[test]
    fn size_cap_is_exactly_five_mib() {
        assert!(validate_size(MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_size(MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn stored_document_names_do_not_collide() {
        let a = stored_document_name("pdf");
        let b = stored_document_name("pdf");
        assert_ne!(a, b);
        assert!(a.ends_with(".pdf"));
    }

    #[test]
    fn profile_picture_name_is_keyed_by_owner() {
        assert_eq!(profile_picture_name(7, "png"), "7.png");
    }
}
