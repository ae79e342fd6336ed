#[cfg(test)]
mod tests {
    use clap::{Args, Command, FromArgMatches};
    use std::time::Duration;
    use taskmig::commands::convert::{write_hierarchy, ConvertArgs};
    use taskmig::libs::config::Config;
    use taskmig::libs::hierarchy::{List, Namespace};
    use taskmig::libs::task::Task;

    fn convert_args(argv: &[&str]) -> ConvertArgs {
        let command = ConvertArgs::augment_args(Command::new("convert"));
        let matches = command
            .try_get_matches_from(std::iter::once("convert").chain(argv.iter().copied()))
            .unwrap();
        ConvertArgs::from_arg_matches(&matches).unwrap()
    }

    fn sample_hierarchy() -> Vec<Namespace> {
        vec![Namespace {
            name: "Lorem Ipsum".to_string(),
            created: 1377851386,
            updated: 1377851773,
            lists: vec![List {
                title: "Lorem1".to_string(),
                created: 1377851386,
                tasks: vec![Task {
                    text: "Ipsum1".to_string(),
                    created: 1377851386,
                    ..Default::default()
                }],
            }],
        }]
    }

    #[test]
    fn test_zero_timeout_flag_disables_timeout() {
        let config = Config {
            fetch_timeout_secs: Some(30),
            ..Config::default()
        };

        let config = convert_args(&["export.json", "--timeout", "0"]).apply(config);

        assert_eq!(config.fetch_timeout_secs, None);
        assert_eq!(config.fetch_timeout(), None);
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            fallback_namespace: Some("Inbox".to_string()),
            ..Config::default()
        };

        let config = convert_args(&["export.json", "--source-name", "todoist", "-c", "0", "-t", "15"]).apply(config);

        assert_eq!(config.fallback_namespace(), "Migrated from todoist");
        assert_eq!(config.fetch_concurrency, 1);
        assert_eq!(config.fetch_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_write_hierarchy_creates_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("hierarchy.json");
        let hierarchy = sample_hierarchy();

        write_hierarchy(&output, &hierarchy).unwrap();

        let written: Vec<Namespace> = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written, hierarchy);
    }

    #[test]
    fn test_write_hierarchy_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("hierarchy.json");

        let err = write_hierarchy(&output, &sample_hierarchy()).unwrap_err();

        assert!(err.to_string().contains(&output.display().to_string()));
        assert!(!output.exists());
    }
}
