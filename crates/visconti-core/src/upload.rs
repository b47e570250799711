//! Files selected in the browser before they are uploaded

use crate::{Error, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;

/// Largest accepted gallery image: 5 MiB
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// A file read from a file input, held locally until submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// Name reported by the browser
    pub file_name: String,
    /// MIME type; guessed from the extension when the browser reports none
    pub content_type: String,
    /// File contents
    pub bytes: Bytes,
}

impl PendingFile {
    /// Build a pending file, guessing the content type if it is empty
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        let file_name = file_name.into();
        let mut content_type = content_type.into();
        if content_type.trim().is_empty() {
            content_type = mime_guess::from_path(&file_name)
                .first_or_octet_stream()
                .essence_str()
                .to_string();
        }

        Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        }
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Whether the content type is an image type
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    /// Inline preview for `<img src>`
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            STANDARD.encode(&self.bytes)
        )
    }

    /// Check the file is an image no larger than `max_bytes`
    ///
    /// The type is checked before the size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedMediaType`] or [`Error::FileSizeExceeded`].
    pub fn validate_image(&self, max_bytes: u64) -> Result<()> {
        if !self.is_image() {
            return Err(Error::unsupported_media_type(&self.content_type));
        }
        if self.size() > max_bytes {
            return Err(Error::file_size_exceeded(self.size(), max_bytes));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("menu.png", "image/png")]
    #[case("menu.JPG", "image/jpeg")]
    #[case("notes.txt", "text/plain")]
    #[case("blob", "application/octet-stream")]
    fn test_content_type_guessed_from_name(#[case] name: &str, #[case] expected: &str) {
        let file = PendingFile::new(name, "", vec![1_u8]);
        assert_eq!(file.content_type, expected);
    }

    #[test]
    fn test_reported_content_type_is_kept() {
        let file = PendingFile::new("menu.png", "image/webp", vec![1_u8]);
        assert_eq!(file.content_type, "image/webp");
    }

    #[test]
    fn test_data_url() {
        let file = PendingFile::new("dot.gif", "image/gif", b"GIF89a".to_vec());
        assert_eq!(file.to_data_url(), "data:image/gif;base64,R0lGODlh");
    }

    #[test]
    fn test_non_image_rejected_before_size() {
        let file = PendingFile::new("big.pdf", "application/pdf", vec![0_u8; 64]);
        let err = file.validate_image(8).unwrap_err();
        assert!(matches!(err, Error::UnsupportedMediaType { .. }));
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let at_limit = PendingFile::new("a.png", "image/png", vec![0_u8; 16]);
        assert!(at_limit.validate_image(16).is_ok());

        let over = PendingFile::new("a.png", "image/png", vec![0_u8; 17]);
        assert!(matches!(
            over.validate_image(16).unwrap_err(),
            Error::FileSizeExceeded {
                size: 17,
                max_size: 16
            }
        ));
    }

    proptest! {
        #[test]
        fn prop_images_within_limit_accepted(len in 0_usize..2048) {
            let file = PendingFile::new("photo.jpg", "image/jpeg", vec![7_u8; len]);
            prop_assert!(file.validate_image(2048).is_ok());
            prop_assert!(file.to_data_url().starts_with("data:image/jpeg;base64,"));
        }
    }
}
