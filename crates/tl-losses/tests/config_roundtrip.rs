use tl_losses::*;

fn nameplate() -> InputParameters {
    InputParameters {
        primary_voltage: 11_000.0,
        secondary_voltage: 433.0,
        rated_power: 250.0,
        frequency: 50.0,
        winding_resistance: 0.8,
        core_type: CoreType::Nanocrystalline,
        core_size: 120.0,
        temperature: 75.0,
        load_level_percent: 80,
    }
}

#[test]
fn roundtrip_yaml() {
    let path = std::env::temp_dir().join("tl_losses_roundtrip.yaml");
    save_yaml(&path, &nameplate()).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(loaded, nameplate());
}

#[test]
fn roundtrip_json() {
    let path = std::env::temp_dir().join("tl_losses_roundtrip.json");
    save_json(&path, &nameplate()).unwrap();
    let loaded = load_json(&path).unwrap();
    assert_eq!(loaded, nameplate());
}

#[test]
fn partial_yaml_uses_defaults() {
    let yaml = "rated_power: 40.0\ncore_type: Nano-crystalline\n";
    let params: InputParameters = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(params.rated_power, 40.0);
    assert_eq!(params.core_type, CoreType::Nanocrystalline);
    assert_eq!(params.primary_voltage, InputParameters::default().primary_voltage);
}

#[test]
fn core_type_serializes_with_nameplate_spelling() {
    let yaml = serde_yaml::to_string(&nameplate()).unwrap();
    assert!(yaml.contains("core_type: Nanocrystalline"));
    let crgo = serde_yaml::to_string(&CoreType::Crgo).unwrap();
    assert_eq!(crgo.trim(), "CRGO");
}

#[test]
fn invalid_file_is_rejected() {
    let path = std::env::temp_dir().join("tl_losses_invalid.yaml");
    std::fs::write(&path, "rated_power: 0.0\n").unwrap();
    let err = load_yaml(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn save_refuses_invalid_params() {
    let mut params = nameplate();
    params.frequency = -1.0;
    let path = std::env::temp_dir().join("tl_losses_never_written.yaml");
    assert!(save_yaml(&path, &params).is_err());
}
