//! Content validation
//!
//! Pure checks applied before any publish attempt. Rules run in order
//! and the first failure wins. Length is measured in characters, not
//! bytes, so multi-byte emoji and CJK text count the same way the
//! provider counts them.

/// Minimum viable post length after trimming
const MIN_CONTENT_CHARS: usize = 10;

/// Validate content before posting
///
/// Returns `Ok(())` when the content is publishable, or the rejection
/// reason. Callers fold the reason into a failed `PublishOutcome`
/// rather than treating it as a process error.
pub fn validate_content(content: &str, max_length: usize) -> Result<(), String> {
    let length = content.chars().count();
    if length > max_length {
        return Err(format!(
            "Content too long ({} > {} characters)",
            length, max_length
        ));
    }

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err("Content is empty".to_string());
    }

    if trimmed.chars().count() < MIN_CONTENT_CHARS {
        return Err(format!(
            "Content is too short (minimum {} characters)",
            MIN_CONTENT_CHARS
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_content_passes() {
        assert!(validate_content("This is a perfectly fine post", 280).is_ok());
    }

    #[test]
    fn test_too_long_rejected_with_counts() {
        let content = "x".repeat(300);
        let reason = validate_content(&content, 280).unwrap_err();
        assert_eq!(reason, "Content too long (300 > 280 characters)");
    }

    #[test]
    fn test_length_check_runs_before_emptiness() {
        // 300 spaces: over-length wins over the emptiness rule
        let content = " ".repeat(300);
        let reason = validate_content(&content, 280).unwrap_err();
        assert!(reason.starts_with("Content too long"));
    }

    #[test]
    fn test_empty_rejected() {
        let reason = validate_content("", 280).unwrap_err();
        assert_eq!(reason, "Content is empty");
    }

    #[test]
    fn test_whitespace_only_rejected() {
        let reason = validate_content("   ", 280).unwrap_err();
        assert_eq!(reason, "Content is empty");
    }

    #[test]
    fn test_too_short_rejected() {
        let reason = validate_content("short", 280).unwrap_err();
        assert_eq!(reason, "Content is too short (minimum 10 characters)");
    }

    #[test]
    fn test_trimmed_length_boundary() {
        // Exactly 10 chars after trimming is accepted
        assert!(validate_content("  abcdefghij  ", 280).is_ok());
        // 9 chars after trimming is rejected
        assert!(validate_content("  abcdefghi  ", 280).is_err());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 13 CJK chars are 39 bytes but well under a 280 char limit
        let content = "高性能计算最新进展速递文章";
        assert!(validate_content(content, 280).is_ok());
        // And a char limit of 10 rejects the same 13-char string
        let reason = validate_content(content, 10).unwrap_err();
        assert_eq!(reason, "Content too long (13 > 10 characters)");
    }
}
