use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_point_at_local_service() {
    let settings = Settings::default();
    assert_eq!(settings.server_url, "http://localhost:8000");
    assert_eq!(settings.upload_path, "upload_pdf");
    assert_eq!(settings.ask_path, "ask_question");
    assert_eq!(
        settings.server_base_url().expect("url").as_str(),
        "http://localhost:8000/"
    );
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    let settings = parse_settings(
        r#"
server_url = "https://qa.example.com/api"
log_filter = "debug,reqwest=warn"
"#,
    )
    .expect("parse");
    assert_eq!(settings.server_url, "https://qa.example.com/api");
    assert_eq!(settings.log_filter, "debug,reqwest=warn");
    assert_eq!(settings.ask_path, "ask_question");
}

#[test]
fn env_overrides_file_values() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        lookup_from(&[
            ("DOCQA_SERVER_URL", "http://first:1"),
            ("APP__SERVER_URL", "http://second:2"),
            ("DOCQA_ASK_PATH", "v2/ask"),
        ]),
    );
    assert_eq!(settings.server_url, "http://second:2");
    assert_eq!(settings.ask_path, "v2/ask");
    assert_eq!(settings.upload_path, "upload_pdf");
}

#[test]
fn rejects_non_http_server_url() {
    let settings = Settings {
        server_url: "ftp://files.example.com".into(),
        ..Settings::default()
    };
    let err = settings.server_base_url().expect_err("must fail");
    assert!(err.to_string().contains("http or https"), "{err}");

    let settings = Settings {
        server_url: "not a url".into(),
        ..Settings::default()
    };
    assert!(settings.server_base_url().is_err());
}

#[test]
fn explicit_config_path_must_exist() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let missing = env::temp_dir().join(format!("docqa_missing_{suffix}.toml"));

    let err = load_settings(Some(missing.as_path())).expect_err("must fail");
    assert!(err.to_string().contains("failed to read config file"), "{err}");
}

#[test]
fn loads_settings_from_explicit_file() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("docqa_config_{suffix}.toml"));
    fs::write(&path, "upload_path = \"documents\"\n").expect("write config");

    let settings = load_settings(Some(path.as_path())).expect("load");
    assert_eq!(settings.upload_path, "documents");

    fs::remove_file(path).expect("cleanup");
}
