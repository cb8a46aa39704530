use bundlecfg::config::{ColdboxOptions, Config, PluginActivation};
use pretty_assertions::assert_eq;

#[test]
fn canonical_has_three_plugins() {
    let json: serde_json::Value =
        serde_json::from_str(&Config::canonical().to_json_string().unwrap()).unwrap();

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["plugins"].as_array().unwrap().len(), 3);
}

#[test]
fn bridge_options_match_literal() {
    let config = Config::canonical();
    let expected = ColdboxOptions {
        input: vec![
            "resources/assets/css/app.css".to_string(),
            "resources/assets/js/app.js".to_string(),
        ],
        refresh: true,
        public_directory: "public/includes".to_string(),
    };

    assert_eq!(config.plugins()[2], PluginActivation::Coldbox(expected));
}

#[test]
fn first_two_plugins_carry_no_options() {
    let config = Config::canonical();
    assert_eq!(config.plugins()[0], PluginActivation::Vue);
    assert_eq!(config.plugins()[1], PluginActivation::Tailwindcss);

    let json: serde_json::Value =
        serde_json::from_str(&config.to_json_string().unwrap()).unwrap();
    assert!(json["plugins"][0].get("options").is_none());
    assert!(json["plugins"][1].get("options").is_none());
}

#[test]
fn toml_round_trip() {
    let config = Config::canonical();
    let parsed = Config::from_toml_str(&config.to_toml_string().unwrap()).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn json_round_trip() {
    let config = Config::canonical().with_refresh(false);
    let parsed = Config::from_json_str(&config.to_json_string().unwrap()).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn disabling_refresh_changes_one_line() {
    let on = Config::canonical().to_json_string().unwrap();
    let off = Config::canonical().with_refresh(false).to_json_string().unwrap();

    let changed: Vec<_> = on
        .lines()
        .zip(off.lines())
        .filter(|(a, b)| a != b)
        .collect();

    assert_eq!(on.lines().count(), off.lines().count());
    assert_eq!(changed.len(), 1);
    assert_eq!(changed[0].0.trim(), "\"refresh\": true,");
    assert_eq!(changed[0].1.trim(), "\"refresh\": false,");
}

#[test]
fn parses_hand_written_toml() {
    let raw = r#"
[[plugins]]
name = "vue"

[[plugins]]
name = "tailwindcss"

[[plugins]]
name = "coldbox"

[plugins.options]
input = ["resources/assets/css/app.css", "resources/assets/js/app.js"]
refresh = true
publicDirectory = "public/includes"
"#;
    assert_eq!(Config::from_toml_str(raw).unwrap(), Config::canonical());
}

#[test]
fn declaration_order_is_preserved() {
    let raw = r#"
[[plugins]]
name = "tailwindcss"

[[plugins]]
name = "vue"
"#;
    let config = Config::from_toml_str(raw).unwrap();
    let names: Vec<_> = config.plugins().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["tailwindcss", "vue"]);
}

#[test]
fn missing_bridge_field_is_rejected() {
    let raw = r#"
[[plugins]]
name = "coldbox"

[plugins.options]
input = ["resources/assets/js/app.js"]
refresh = true
"#;
    assert!(Config::from_toml_str(raw).is_err());
}
