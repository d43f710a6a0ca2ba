//! Tests for the run module.

use super::*;
use resize_notify::config::{Cli, TomlConfig};

fn make_config(args: &[&str], scenario: &str) -> ValidatedConfig {
    let mut full_args = vec!["resize-replay"];
    full_args.extend(args);
    let cli = Cli::parse_from_iter(full_args);
    let toml = TomlConfig::parse(scenario).unwrap();
    ValidatedConfig::from_raw(&cli, Some(&toml)).unwrap()
}

const SCENARIO: &str = r#"
    [host]
    width = 200
    height = 100

    [[elements]]
    name = "panel"
    width = 320
    height = 240

    [[steps]]
    action = "mount"

    [[steps]]
    action = "resize"
    element = "host"
    width = 300
    height = 100
"#;

mod run_error {
    use super::*;

    #[test]
    fn replay_error_displays_source() {
        let error = RunError::from(ReplayError::UnknownElement {
            name: "panel".to_string(),
            context: "step 1".to_string(),
        });
        let message = error.to_string();
        assert!(message.contains("Replay failed"));
        assert!(message.contains("panel"));
    }

    #[test]
    fn output_error_displays_source() {
        let error = RunError::Output(io::Error::other("closed"));
        assert!(error.to_string().contains("Failed to write notifications"));
    }

    #[test]
    fn debug_format_works() {
        let error = RunError::Output(io::Error::other("closed"));
        let debug_str = format!("{error:?}");
        assert!(debug_str.contains("Output"));
    }
}

mod execute {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn writes_text_lines() {
        let config = make_config(&[], SCENARIO);
        let mut out = Vec::new();

        let report = execute(config, &mut out).await.unwrap();

        assert_eq!(report.notifications.len(), 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "step 1 (mount): 200x100\nstep 2 (resize): 300x100\n"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn writes_json_lines() {
        let config = make_config(&["--format", "json"], SCENARIO);
        let mut out = Vec::new();

        execute(config, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(first["step"], 1);
        assert_eq!(first["width"], 200.0);
    }

    #[tokio::test(start_paused = true)]
    async fn skip_initial_drops_mount_line() {
        let config = make_config(&["--skip-initial"], SCENARIO);
        let mut out = Vec::new();

        execute(config, &mut out).await.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "step 2 (resize): 300x100\n");
    }

    #[tokio::test(start_paused = true)]
    async fn ignoring_both_axes_reports_nothing() {
        let config = make_config(&["--ignore-width", "--ignore-height"], SCENARIO);
        let mut out = Vec::new();

        let report = execute(config, &mut out).await.unwrap();

        assert!(report.notifications.is_empty());
        assert_eq!(report.steps, 2);
        assert!(out.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn layout_errors_fail_the_run() {
        let scenario = r#"
            [[steps]]
            action = "resize"
            element = "host"
            width = 1
            height = 1
        "#;
        let config = make_config(&[], scenario);
        let mut out = Vec::new();

        let result = execute(config, &mut out).await;

        assert!(matches!(result, Err(RunError::Replay(_))));
        assert!(out.is_empty());
    }
}
