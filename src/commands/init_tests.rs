use tempfile::TempDir;

use super::*;
use crate::config::ToolConfig;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[test]
fn generate_config_template_lists_every_setting() {
    let template = generate_config_template();
    assert!(template.contains("[paths]"));
    assert!(template.contains("log_file_name = \"mongod.log\""));
    assert!(template.contains("create_dirs = true"));
    assert!(template.contains("[format]"));
    assert!(template.contains("indent = \"  \""));
}

#[test]
fn generate_config_template_matches_defaults() {
    let config: ToolConfig = toml::from_str(&generate_config_template()).unwrap();
    assert_eq!(config, ToolConfig::default());
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".cfgpatch.toml");

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    assert!(run_init_impl(&args).is_ok());
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[paths]"));
}

#[test]
fn run_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".cfgpatch.toml");
    std::fs::write(&config_path, "# mine\n").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "# mine\n");
}

#[test]
fn run_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".cfgpatch.toml");
    std::fs::write(&config_path, "# mine\n").unwrap();

    let args = InitArgs {
        output: config_path.clone(),
        force: true,
    };

    assert_eq!(run_init(&args), EXIT_SUCCESS);
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("log_file_name"));
}
