use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "./db/etf.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub catalog_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = lookup("DATABASE_URL")
            .map(|url| strip_sqlite_scheme(&url))
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let catalog_path = lookup("ETF_SEED_CATALOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        let log_format = match lookup("ETF_LOG_FORMAT") {
            Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Self {
            db_path,
            catalog_path,
            log_format,
        }
    }
}

/// Accepts a bare file path as well as `sqlite:` style URLs
/// (`sqlite:///relative.db`, `sqlite:////abs/path.db`, `sqlite://file.db`).
fn strip_sqlite_scheme(url: &str) -> String {
    let trimmed = url.trim();
    trimmed
        .strip_prefix("sqlite:///")
        .or_else(|| trimmed.strip_prefix("sqlite://"))
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
        assert!(config.catalog_path.is_none());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_database_url_accepts_plain_path_and_sqlite_url() {
        assert_eq!(
            config_from(&[("DATABASE_URL", "/data/etf.db")]).db_path,
            "/data/etf.db"
        );
        assert_eq!(
            config_from(&[("DATABASE_URL", "sqlite:///./etf.db")]).db_path,
            "./etf.db"
        );
        assert_eq!(
            config_from(&[("DATABASE_URL", "sqlite:////var/lib/etf.db")]).db_path,
            "/var/lib/etf.db"
        );
        assert_eq!(
            config_from(&[("DATABASE_URL", "sqlite:etf.db")]).db_path,
            "etf.db"
        );
    }

    #[test]
    fn test_catalog_override_and_json_logs() {
        let config = config_from(&[
            ("ETF_SEED_CATALOG", " ./catalog.json "),
            ("ETF_LOG_FORMAT", "JSON"),
        ]);
        assert_eq!(config.catalog_path, Some(PathBuf::from("./catalog.json")));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = config_from(&[("DATABASE_URL", "  "), ("ETF_SEED_CATALOG", "")]);
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
        assert!(config.catalog_path.is_none());
    }
}
