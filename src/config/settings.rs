pub const DEFAULT_RECORD_TYPE: &str = "post";
pub const DEFAULT_STATUS: &str = "publish";
pub const DEFAULT_ORDER_BY: &str = "post_date";
pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const DEFAULT_DATABASE_PATH: &str = "content_sweep.db";

/// Status sentinel that disables the status predicate entirely.
pub const ANY_STATUS: &str = "any";

pub struct DatabaseSettings {
    pub path: String,
}

impl DatabaseSettings {
    /// Resolves the database path: CLI flag, then the DATABASE_PATH
    /// environment variable, then the built-in default.
    pub fn resolve(flag: Option<&str>) -> Self {
        let path = flag
            .map(str::to_string)
            .or_else(|| std::env::var("DATABASE_PATH").ok())
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

        Self { path }
    }
}

// Prefer passing settings explicitly (Dependency Injection) rather than
// reading the environment from deep inside the engine.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_default() {
        let settings = DatabaseSettings::resolve(Some("custom.db"));
        assert_eq!(settings.path, "custom.db");
    }

    #[test]
    fn test_default_path_without_flag_or_env() {
        // DATABASE_PATH is not set in the test environment unless a test
        // sets it; resolve with no flag falls through to the default.
        if std::env::var("DATABASE_PATH").is_err() {
            let settings = DatabaseSettings::resolve(None);
            assert_eq!(settings.path, DEFAULT_DATABASE_PATH);
        }
    }
}
