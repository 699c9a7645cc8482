//! Configuration contracts (CONFIG-001 through CONFIG-002)
//!
//! Priority: CLI flags > env vars > --config / project config > user config > defaults

use crate::common::*;

const NODES: &str = r#"[{"id": 1, "pid": 0, "name": "a"}, {"id": 2, "pid": 1, "name": "b"}]"#;

/// CONTRACT CONFIG-001: Priority Order
mod config_priority {
    use super::*;

    #[test]
    fn contract_cli_flag_overrides_env_and_project_config() {
        let env = TestEnv::new();
        env.write("nodes.json", NODES);
        env.write("arbor.toml", "[tree]\npadding = \"P\"\n");

        let result = env.run_with_env(
            &["list", "nodes.json", "--padding", "C", "-t", "@spacer@name;"],
            &[("ARBOR_PADDING", "E")],
        );

        assert!(result.success, "list failed:\n{}", result.combined_output());
        assert_eq!(result.stdout.trim_end(), "a;C└b;");
    }

    #[test]
    fn contract_env_overrides_project_config() {
        let env = TestEnv::new();
        env.write("nodes.json", NODES);
        env.write("arbor.toml", "[tree]\npadding = \"P\"\n");

        let result = env.run_with_env(
            &["list", "nodes.json", "-t", "@spacer@name;"],
            &[("ARBOR_PADDING", "E")],
        );

        assert_eq!(result.stdout.trim_end(), "a;E└b;");
    }

    #[test]
    fn contract_explicit_config_replaces_project_config() {
        let env = TestEnv::new();
        env.write("nodes.json", NODES);
        env.write("arbor.toml", "[tree]\npadding = \"P\"\n");
        env.write("custom.toml", "[tree]\npadding = \"X\"\n");

        let result = env.run(&["--config", "custom.toml", "list", "nodes.json", "-t", "@spacer@name;"]);

        assert_eq!(result.stdout.trim_end(), "a;X└b;");
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn contract_user_config_applies_without_project_config() {
        let env = TestEnv::new();
        env.write("nodes.json", NODES);
        env.write(".config/arbor/config.toml", "[tree]\npadding = \"U\"\n");

        let result = env.run(&["list", "nodes.json", "-t", "@spacer@name;"]);

        assert_eq!(result.stdout.trim_end(), "a;U└b;");
    }

    #[test]
    fn contract_defaults_without_any_config() {
        let env = TestEnv::new();
        env.write("nodes.json", NODES);

        let result = env.run(&["list", "nodes.json", "-t", "@spacer@name;"]);

        assert_eq!(result.stdout.trim_end(), "a;&nbsp;└b;");
    }
}

/// CONTRACT CONFIG-002: a broken explicit config is an error, not a silent default
mod config_errors {
    use super::*;

    #[test]
    fn contract_invalid_explicit_config_fails() {
        let env = TestEnv::new();
        env.write("nodes.json", NODES);
        env.write("broken.toml", "[tree\npadding = ");

        let result = env.run(&["--config", "broken.toml", "list", "nodes.json"]);

        assert!(!result.success);
        assert!(
            result.stderr.contains("invalid configuration in broken.toml"),
            "unexpected stderr:\n{}",
            result.stderr
        );
    }
}
