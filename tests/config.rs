#[cfg(test)]
mod tests {
    use taskmig::libs::config::{fallback_namespace_for, Config, CONFIG_FILE_NAME};
    use taskmig::libs::data_storage::{DataStorage, DATA_DIR_ENV};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide, so tests touching it run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a fresh temporary home for each test.
    struct ConfigTestContext {
        temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(DATA_DIR_ENV);
            ConfigTestContext {
                temp_dir,
                _guard: guard,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_name, "wunderlist");
        assert_eq!(config.fallback_namespace(), "Migrated from wunderlist");
        assert_eq!(config.fetch_concurrency, 4);
        assert_eq!(config.fetch_timeout(), None);
    }

    #[test]
    fn test_fallback_label_follows_source_name() {
        let config = Config {
            source_name: "todoist".to_string(),
            ..Config::default()
        };
        assert_eq!(config.fallback_namespace(), fallback_namespace_for("todoist"));
        assert_eq!(config.fallback_namespace(), "Migrated from todoist");

        let config = Config {
            fallback_namespace: Some("Inbox".to_string()),
            ..config
        };
        assert_eq!(config.fallback_namespace(), "Inbox");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            source_name: "trello".to_string(),
            fallback_namespace: Some("Loose boards".to_string()),
            fetch_concurrency: 16,
            fetch_timeout_secs: Some(30),
        };
        config.save().unwrap();

        let read = Config::read().unwrap();
        assert_eq!(read, config);
        assert_eq!(read.fetch_timeout(), Some(std::time::Duration::from_secs(30)));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{ "source_name": "asana" }"#).unwrap();

        let config = Config::read().unwrap();
        assert_eq!(config.source_name, "asana");
        assert_eq!(config.fetch_concurrency, 4);
        assert_eq!(config.fallback_namespace(), "Migrated from asana");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Config::read().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        Config::default().save().unwrap();
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert!(path.exists());

        Config::delete().unwrap();
        assert!(!path.exists());
        // Deleting twice is fine.
        Config::delete().unwrap();
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config: Config = serde_json::from_str(r#"{ "fetch_timeout_secs": 0 }"#).unwrap();
        assert_eq!(config.fetch_timeout_secs, Some(0));
        assert_eq!(config.fetch_timeout(), None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_dir_override(ctx: &mut ConfigTestContext) {
        let custom = ctx.temp_dir.path().join("custom");
        std::env::set_var(DATA_DIR_ENV, &custom);

        Config::default().save().unwrap();

        assert_eq!(DataStorage::new().base_path(), &custom);
        assert!(custom.join(CONFIG_FILE_NAME).exists());
        std::env::remove_var(DATA_DIR_ENV);
    }
}
