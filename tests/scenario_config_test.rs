use tempfile::TempDir;
use zapper::utils::validation::Validate;
use zapper::{
    Command, Device, DeviceKind, Radio, RemoteKind, ScenarioConfig, Session, Tv, ZapperError,
};

fn write_scenario(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn scenario_file_loads_and_runs_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(
        &dir,
        "evening.toml",
        r#"
[scenario]
name = "evening-radio"

device = "radio"
remote = "advanced"
commands = ["toggle-power", "mute"]
"#,
    );

    let scenario = ScenarioConfig::from_file(&path).unwrap();
    scenario.validate().unwrap();

    assert_eq!(scenario.device, DeviceKind::Radio);
    assert_eq!(scenario.remote, RemoteKind::Advanced);

    let mut session = Session::new(Radio::new(), scenario.remote);
    session.run(&scenario.commands).unwrap();
    assert!(session.device().is_enabled());
    assert_eq!(session.device().volume(), 0);
    assert_eq!(session.device().channel(), 100);
}

#[test]
fn missing_scenario_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ScenarioConfig::from_file(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ZapperError::IoError(_)));
}

#[test]
fn malformed_scenario_file_is_a_toml_error() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(&dir, "broken.toml", "device = \"toaster\"\n");
    let err = ScenarioConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, ZapperError::TomlError(_)));
}

#[test]
fn basic_scenario_with_mute_fails_validation_before_running() {
    let dir = TempDir::new().unwrap();
    let path = write_scenario(
        &dir,
        "bad.toml",
        r#"
[scenario]
name = "bad"

device = "tv"
remote = "basic"
commands = ["mute"]
"#,
    );

    let scenario = ScenarioConfig::from_file(&path).unwrap();
    let err = scenario.validate().unwrap_err();
    assert!(matches!(err, ZapperError::InvalidConfigValue { .. }));

    // The runtime guard catches it too if validation is skipped.
    let mut session = Session::new(Tv::new(), scenario.remote);
    let err = session.run(&[Command::Mute]).unwrap_err();
    assert!(matches!(err, ZapperError::UnsupportedCommand { .. }));
}
