use std::collections::HashMap;
use std::fs;
use summary_relay::Config;

fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
    vars.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("relay.toml");
    fs::write(
        &path,
        r#"
[server]
port = 8080

[llm]
model = "llama-3.3-70b-versatile"

[smtp]
host = "mail.internal"
port = 465
secure = true
"#,
    )
    .unwrap();

    let vars = env(&[]);
    let cfg = Config::load_with(path.to_str().unwrap(), |k| vars.get(k).cloned()).unwrap();

    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.bind, "0.0.0.0");
    assert_eq!(cfg.llm.model, "llama-3.3-70b-versatile");
    assert_eq!(cfg.smtp.host, "mail.internal");
    assert_eq!(cfg.smtp.port, 465);
    assert!(cfg.smtp.secure);
}

#[test]
fn test_environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("relay.toml");
    fs::write(&path, "[server]\nport = 8080\n\n[smtp]\nsecure = true\n").unwrap();

    let vars = env(&[
        ("PORT", "9000"),
        ("GROQ_API_KEY", "gsk_test"),
        ("GROQ_MODEL", "mixtral-8x7b-32768"),
        ("SMTP_HOST", "smtp.example.com"),
        ("SMTP_PORT", "2525"),
        ("SMTP_SECURE", "false"),
        ("SMTP_USER", "bot@example.com"),
        ("SMTP_PASS", "secret"),
        ("FROM_EMAIL", "Notes <notes@example.com>"),
    ]);
    let cfg = Config::load_with(path.to_str().unwrap(), |k| vars.get(k).cloned()).unwrap();

    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.server.address(), "0.0.0.0:9000");
    assert_eq!(cfg.llm.api_key.as_deref(), Some("gsk_test"));
    assert_eq!(cfg.llm.model, "mixtral-8x7b-32768");
    assert_eq!(cfg.smtp.host, "smtp.example.com");
    assert_eq!(cfg.smtp.port, 2525);
    assert!(!cfg.smtp.secure);
    assert_eq!(cfg.smtp.password.as_deref(), Some("secret"));
    assert_eq!(cfg.smtp.sender(), Some("Notes <notes@example.com>"));
}

#[test]
fn test_invalid_port_is_an_error() {
    let vars = env(&[("PORT", "not-a-port")]);
    assert!(Config::load_with("missing/relay", |k| vars.get(k).cloned()).is_err());
}
