use somno::config::load_from_path;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_valid() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let config_content = r#"
        [defaults]
        cycles = 6
        time = "06:30"
    "#;
    temp_file.write_all(config_content.as_bytes()).unwrap();

    let config = load_from_path(temp_file.path()).expect("Failed to load valid config");

    assert_eq!(config.defaults.cycles, 6);
    assert_eq!(config.defaults.time, "06:30");
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_config_empty_uses_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"").unwrap();

    let config = load_from_path(temp_file.path()).expect("Empty config should load defaults");

    assert_eq!(config.defaults.cycles, 5);
    assert_eq!(config.defaults.time, "07:00");
}

#[test]
fn test_load_config_partial_section() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[defaults]\ncycles = 4\n").unwrap();

    let config = load_from_path(temp_file.path()).unwrap();

    assert_eq!(config.defaults.cycles, 4);
    // Unspecified keys keep their defaults
    assert_eq!(config.defaults.time, "07:00");
}

#[test]
fn test_load_config_rejects_bad_toml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"defaults = not toml").unwrap();

    assert!(load_from_path(temp_file.path()).is_err());
}

#[test]
fn test_validation_rejects_out_of_set_cycles() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[defaults]\ncycles = 3\n").unwrap();

    let config = load_from_path(temp_file.path()).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_rejects_malformed_default_time() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[defaults]\ntime = \"around eight\"\n")
        .unwrap();

    let config = load_from_path(temp_file.path()).unwrap();
    assert!(config.validate().is_err());
}
