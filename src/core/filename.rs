use std::path::{Path, PathBuf};

use crate::models::media::ParsedReference;

/// Where the hand-off copy of a video lands inside `output_dir`.
///
/// The suggested name is kept verbatim unless it carries characters the
/// filesystem can't store.
pub fn output_path(output_dir: &Path, reference: &ParsedReference) -> PathBuf {
    output_dir.join(sanitize_filename::sanitize(reference.filename()))
}

/// `1234567` -> `1,234,567`.
pub fn format_byte_count(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_handle_kept_verbatim() {
        let reference = ParsedReference::new("jane", "1234567890");
        let path = output_path(Path::new("/downloads"), &reference);
        assert_eq!(path, PathBuf::from("/downloads/jane_1234567890.mp4"));
    }

    #[test]
    fn forbidden_chars_stripped_from_disk_name() {
        let reference = ParsedReference::new("ja:ne*", "42");
        let path = output_path(Path::new("out"), &reference);
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(!name.contains(':'));
        assert!(!name.contains('*'));
        assert!(name.ends_with("_42.mp4"));
    }

    #[test]
    fn byte_count_grouping() {
        assert_eq!(format_byte_count(0), "0");
        assert_eq!(format_byte_count(999), "999");
        assert_eq!(format_byte_count(1000), "1,000");
        assert_eq!(format_byte_count(1234567), "1,234,567");
        assert_eq!(format_byte_count(123456789012), "123,456,789,012");
    }
}
