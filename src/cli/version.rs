//! Version command for smart-todo.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Text printed by `--version`.
pub fn version_string() -> String {
    format!("smart-todo {}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_string() {
        assert!(version_string().starts_with("smart-todo "));
        assert!(version_string().ends_with(VERSION));
    }
}
