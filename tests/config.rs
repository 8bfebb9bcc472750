#[cfg(test)]
mod tests {
    use chorelog::libs::config::Config;
    use chorelog::libs::context::{load_seed_list, seed_issues, AppContext};
    use chorelog::libs::manager::SeedReport;
    use chorelog::libs::data_storage::DataStorage;
    use chorelog::libs::export::ExportFormat;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Each test gets its own data directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn storage(&self) -> DataStorage {
            DataStorage::at(self.temp_dir.path())
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_in(ctx.storage()).unwrap();

        assert_eq!(config.database, None);
        assert_eq!(config.export_format, ExportFormat::Csv);
        assert!(config.color);
        assert_eq!(config.database_path().unwrap(), ctx.temp_dir.path().join("chorelog.db"));
        assert_eq!(config.seed_file_path().unwrap(), ctx.temp_dir.path().join("tasks.toml"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let mut config = Config::read_in(ctx.storage()).unwrap();
        config.export_format = ExportFormat::Json;
        config.export_path = Some(PathBuf::from("history.json"));
        config.color = false;
        config.save().unwrap();

        let loaded = Config::read_in(ctx.storage()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(ctx: &mut ConfigTestContext) {
        fs::write(ctx.temp_dir.path().join("config.json"), r#"{ "export_format": "json" }"#).unwrap();

        let config = Config::read_in(ctx.storage()).unwrap();
        assert_eq!(config.export_format, ExportFormat::Json);
        assert!(config.color);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_in(ctx.storage()).unwrap();
        assert!(!config.delete().unwrap());

        config.save().unwrap();
        assert!(config.delete().unwrap());
        assert!(!ctx.temp_dir.path().join("config.json").exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_exporter_overrides(ctx: &mut ConfigTestContext) {
        let mut config = Config::read_in(ctx.storage()).unwrap();
        config.export_path = Some(PathBuf::from("history.csv"));

        let exporter = config.exporter(None, None);
        assert_eq!(exporter.format(), ExportFormat::Csv);
        assert_eq!(exporter.output_path(), PathBuf::from("history.csv").as_path());

        // A configured path with another extension does not leak into JSON exports
        let exporter = config.exporter(Some(ExportFormat::Json), None);
        assert_eq!(exporter.output_path(), PathBuf::from("task_logs.json").as_path());

        let exporter = config.exporter(Some(ExportFormat::Json), Some(PathBuf::from("out.json")));
        assert_eq!(exporter.output_path(), PathBuf::from("out.json").as_path());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_context_seeds_empty_database(ctx: &mut ConfigTestContext) {
        fs::write(
            ctx.temp_dir.path().join("tasks.toml"),
            "[[tasks]]\nname = \"Pay rent\"\nrecurrence = \"monthly\"\n\n[[tasks]]\nname = \"Broken\"\nstart_date = \"soon\"\n",
        )
        .unwrap();
        let config = Config::read_in(ctx.storage()).unwrap();

        assert_eq!(load_seed_list(&config).unwrap().rejected.len(), 1);

        let app = AppContext::new(config.clone()).unwrap();
        assert_eq!(app.manager.store().conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get::<_, i64>(0)).unwrap(), 1);
        drop(app);

        // A second start does not seed again
        let app = AppContext::new(config).unwrap();
        assert_eq!(app.manager.store().conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get::<_, i64>(0)).unwrap(), 1);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_seed_issues_only_reported_when_seeding(ctx: &mut ConfigTestContext) {
        fs::write(
            ctx.temp_dir.path().join("tasks.toml"),
            "[[tasks]]\nname = \"Water plants\"\nrecurrence = \"weekly\"\n\n[[tasks]]\nname = \"Broken\"\nrecurrence = \"yearly\"\n",
        )
        .unwrap();
        let config = Config::read_in(ctx.storage()).unwrap();
        let seeds = load_seed_list(&config).unwrap();

        let issues = seed_issues(&seeds, &SeedReport::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].0, "Broken");

        let app = AppContext::new(config.clone()).unwrap();
        assert!(!app.manager.is_empty().unwrap());
        drop(app);

        // Later starts skip the seed file entirely, so a broken one goes unnoticed
        fs::write(ctx.temp_dir.path().join("tasks.toml"), "not = [valid").unwrap();
        let app = AppContext::new(config).unwrap();
        assert_eq!(app.manager.store().conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get::<_, i64>(0)).unwrap(), 1);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_seed_file_is_ignored(ctx: &mut ConfigTestContext) {
        fs::write(ctx.temp_dir.path().join("tasks.toml"), "not = [valid").unwrap();
        let config = Config::read_in(ctx.storage()).unwrap();

        assert!(load_seed_list(&config).unwrap().tasks.is_empty());
        assert!(AppContext::new(config).is_ok());
    }
}
