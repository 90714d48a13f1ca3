#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;
    use tempfile::tempdir;

    use crate::{api::fixer::BASE_URL, config::Args};

    #[test]
    fn defaults_match_refresh_policy() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("nested/settings.db");
        let logs = dir.path().join("logs");

        let config = Args::try_parse_from([
            "currency-converter-tui",
            "--db",
            db.to_str().unwrap(),
            "--log-dir",
            logs.to_str().unwrap(),
        ])
        .unwrap()
        .into_config()
        .unwrap();

        assert_eq!(config.refresh_interval, Duration::from_secs(600));
        assert_eq!(config.debounce, Duration::from_millis(500));
        assert_eq!(config.base_url, BASE_URL);
        assert!(db.parent().unwrap().is_dir());
        assert!(logs.is_dir());
    }

    #[test]
    fn blank_api_key_is_ignored() {
        let dir = tempdir().unwrap();
        let db = dir.path().join("settings.db");

        let config = Args::try_parse_from([
            "currency-converter-tui",
            "--db",
            db.to_str().unwrap(),
            "--log-dir",
            dir.path().to_str().unwrap(),
            "--api-key",
            "   ",
        ])
        .unwrap()
        .into_config()
        .unwrap();

        assert_eq!(config.api_key, None);
    }
}
