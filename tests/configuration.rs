//! Configuration loading and override precedence.

use kodenox::config::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert!(config.server.port > 0);
    assert_eq!(
        config.relay.endpoint,
        "https://api.emailjs.com/api/v1.0/email/send"
    );
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_environment_overrides_file_overrides_defaults() {
    let path = std::env::temp_dir().join("kodenox-config-precedence.toml");
    std::fs::write(&path, "[server]\nhost = \"0.0.0.0\"\nport = 8080\n")
        .expect("Failed to write config file");
    let path = path.to_str().expect("temp path is not utf-8").to_string();

    // without a file the built-in defaults apply
    let config = Config::load(Some("does-not-exist.toml".to_string())).unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);

    // the file wins over the built-in defaults
    let config = Config::load(Some(path.clone())).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);

    // environment wins over the file, including the relay dashboard's
    // legacy variable names
    unsafe {
        std::env::set_var("KODENOX__SERVER__PORT", "9090");
        std::env::set_var("EMAILJS_SERVICE_ID", "service_from_env");
    }
    let config = Config::load(Some(path));
    unsafe {
        std::env::remove_var("KODENOX__SERVER__PORT");
        std::env::remove_var("EMAILJS_SERVICE_ID");
    }
    let config = config.unwrap();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.relay.service_id, "service_from_env");
}
