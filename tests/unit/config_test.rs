//! Unit tests for config module

use arnold_logs::Config;
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.labels.peers_per_processor, 2);
    assert_eq!(config.experiment.application, "Arnold");
    assert_eq!(config.experiment.cluster, "VU");
    assert_eq!(config.experiment.leecher_runtime, 1000);
    assert_eq!(config.experiment.runtime_multiplier, 4);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_sections_fall_back_to_defaults() {
    let toml_str = r#"
[experiment]
cluster = "DAS3"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.experiment.cluster, "DAS3");
    assert_eq!(config.experiment.application, "Arnold");
    assert_eq!(config.labels.peers_per_processor, 2);
}

#[test]
fn missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_reads_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[labels]\npeers_per_processor = 4\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.labels.peers_per_processor, 4);
}

#[test]
fn load_from_rejects_zero_peers_per_processor() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[labels]\npeers_per_processor = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("peers_per_processor"));
}

#[test]
fn load_from_reports_parse_errors() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[labels\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn load_from_rejects_overflowing_runtime() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(
        &path,
        "[experiment]\nleecher_runtime = 4000000000\nruntime_multiplier = 2\n",
    )
    .unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("runtime_multiplier"));
}
