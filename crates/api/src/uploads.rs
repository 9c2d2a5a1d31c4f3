//! Filesystem side of file uploads.
//!
//! Policy (size cap, extension allow-lists, stored-name generation) lives in
//! `lexcase_core::uploads`; this module applies it and touches disk. Both
//! entry points validate before any write, so a rejected upload leaves no
//! file behind.

use tokio::fs;

use lexcase_core::error::CoreError;
use lexcase_core::hashing::sha256_hex;
use lexcase_core::types::DbId;
use lexcase_core::uploads::{
    profile_picture_name, stored_document_name, validate_extension, validate_size,
    DOCUMENT_EXTENSIONS, PICTURE_EXTENSIONS,
};

use crate::config::UploadConfig;
use crate::error::AppError;

/// Result of persisting an uploaded document.
pub struct StoredFile {
    pub stored_path: String,
    pub size_bytes: i64,
    pub sha256: String,
}

/// Validate and persist a case document under the documents directory.
///
/// The stored filename is a fresh UUID; the user-supplied name is only kept
/// by the caller as metadata.
pub async fn save_document(
    config: &UploadConfig,
    original_filename: &str,
    data: &[u8],
) -> Result<StoredFile, AppError> {
    let ext = validate_extension(original_filename, DOCUMENT_EXTENSIONS).map_err(AppError::Core)?;
    validate_size(data.len()).map_err(AppError::Core)?;

    let dir = config.documents_dir();
    fs::create_dir_all(&dir).await.map_err(io_error)?;

    let path = dir.join(stored_document_name(&ext));
    fs::write(&path, data).await.map_err(io_error)?;

    Ok(StoredFile {
        stored_path: path.to_string_lossy().into_owned(),
        size_bytes: data.len() as i64,
        sha256: sha256_hex(data),
    })
}

/// Validate and persist a profile picture, keyed by owner id.
///
/// Any previously stored file for the same owner (under any allowed
/// extension) is removed first, so each owner has exactly one current file
/// afterwards. Returns the stored path.
pub async fn save_profile_picture(
    config: &UploadConfig,
    owner_id: DbId,
    original_filename: &str,
    data: &[u8],
) -> Result<String, AppError> {
    let ext = validate_extension(original_filename, PICTURE_EXTENSIONS).map_err(AppError::Core)?;
    validate_size(data.len()).map_err(AppError::Core)?;

    let dir = config.profile_pictures_dir();
    fs::create_dir_all(&dir).await.map_err(io_error)?;

    for old_ext in PICTURE_EXTENSIONS {
        // The same-extension file is replaced by the write below.
        if *old_ext == ext {
            continue;
        }
        let old = dir.join(profile_picture_name(owner_id, old_ext));
        match fs::remove_file(&old).await {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(io_error(err)),
        }
    }

    let path = dir.join(profile_picture_name(owner_id, &ext));
    fs::write(&path, data).await.map_err(io_error)?;

    Ok(path.to_string_lossy().into_owned())
}

/// Remove a stored file after its metadata row is gone. Best-effort: a
/// missing file is not an error, anything else is only logged.
pub async fn remove_stored_file(path: &str) {
    match fs::remove_file(path).await {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => tracing::warn!(error = %err, path, "Failed to remove stored file"),
    }
}

/// Pull the one mandatory `file` part (filename, content type, bytes) out of
/// a multipart body.
pub async fn read_file_field(
    multipart: &mut axum::extract::Multipart,
    wanted: &str,
) -> Result<Option<(String, Option<String>, Vec<u8>)>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::Core(CoreError::Validation(err.to_string())))?
    {
        if field.name() != Some(wanted) {
            continue;
        }
        let filename = field
            .file_name()
            .ok_or_else(|| {
                AppError::Core(CoreError::Validation(format!(
                    "{wanted} part must carry a filename"
                )))
            })?
            .to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|err| AppError::Core(CoreError::Validation(err.to_string())))?;
        return Ok(Some((filename, content_type, data.to_vec())));
    }
    Ok(None)
}

fn io_error(err: std::io::Error) -> AppError {
    AppError::Internal(format!("Filesystem error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UploadConfig;

    fn test_upload_config(root: &std::path::Path) -> UploadConfig {
        UploadConfig {
            root: root.to_path_buf(),
        }
    }

    #[tokio::test]
    async fn rejected_document_leaves_no_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_upload_config(tmp.path());

        // Disallowed extension: rejected before any write.
        let result = save_document(&config, "malware.exe", b"MZ").await;
        assert!(result.is_err());
        assert!(!config.documents_dir().exists());

        // Oversized payload: rejected before any write.
        let big = vec![0u8; lexcase_core::uploads::MAX_UPLOAD_BYTES + 1];
        let result = save_document(&config, "brief.pdf", &big).await;
        assert!(result.is_err());
        assert!(!config.documents_dir().exists());
    }

    #[tokio::test]
    async fn document_is_stored_with_generated_name() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_upload_config(tmp.path());

        let stored = save_document(&config, "Signed Retainer.PDF", b"%PDF-1.7")
            .await
            .expect("valid upload should be stored");

        assert!(stored.stored_path.ends_with(".pdf"));
        assert!(
            !stored.stored_path.contains("Retainer"),
            "stored name must not derive from the user-supplied name"
        );
        assert_eq!(stored.size_bytes, 8);
        assert_eq!(stored.sha256.len(), 64);
        assert_eq!(
            tokio::fs::read(&stored.stored_path).await.unwrap(),
            b"%PDF-1.7"
        );
    }

    #[tokio::test]
    async fn profile_picture_replaces_previous_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_upload_config(tmp.path());

        save_profile_picture(&config, 7, "me.png", b"png-bytes")
            .await
            .expect("first upload should succeed");
        save_profile_picture(&config, 7, "me.jpg", b"jpg-bytes")
            .await
            .expect("second upload should succeed");

        // Exactly one file remains for owner 7.
        let mut entries = tokio::fs::read_dir(config.profile_pictures_dir()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().into_string().unwrap());
        }
        assert_eq!(names, vec!["7.jpg".to_string()]);
    }

    #[tokio::test]
    async fn profile_pictures_of_other_owners_are_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_upload_config(tmp.path());

        save_profile_picture(&config, 1, "a.png", b"one").await.unwrap();
        save_profile_picture(&config, 2, "b.png", b"two").await.unwrap();
        save_profile_picture(&config, 1, "c.webp", b"three").await.unwrap();

        let dir = config.profile_pictures_dir();
        assert!(!dir.join("1.png").exists());
        assert!(dir.join("1.webp").exists());
        assert!(dir.join("2.png").exists());
    }
}
