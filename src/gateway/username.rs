// GitHub username validation.

pub const MAX_USERNAME_LEN: usize = 39;

/// Check `name` against GitHub's username rules.
///
/// Non-blank, at most 39 characters of `[A-Za-z0-9-]`, no leading or
/// trailing hyphen, and no two hyphens in a row.
pub fn is_valid_username(name: &str) -> bool {
    if name.trim().is_empty() || name.len() > MAX_USERNAME_LEN {
        return false;
    }

    name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        for name in ["octocat", "john-doe", "user123", "a", "A", "a-b-c", "0"] {
            assert!(is_valid_username(name), "{name} should be valid");
        }
        assert!(is_valid_username(&"a".repeat(39)));
    }

    #[test]
    fn test_blank_usernames() {
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("   "));
        assert!(!is_valid_username("\t"));
    }

    #[test]
    fn test_hyphen_placement() {
        assert!(!is_valid_username("-invalid"));
        assert!(!is_valid_username("invalid-"));
        assert!(!is_valid_username("in--valid"));
        assert!(!is_valid_username("-"));
    }

    #[test]
    fn test_length_limit() {
        assert!(!is_valid_username(&"a".repeat(40)));
    }

    #[test]
    fn test_special_characters() {
        for name in ["user@name", "user name", "user_name", "user.name", "ünïcode", "a/b"] {
            assert!(!is_valid_username(name), "{name} should be invalid");
        }
    }
}
