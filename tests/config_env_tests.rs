//! Tests for environment variable overrides on the server configuration.

mod support;

use fieldops::config::ServerConfig;
use support::with_scoped_env;

#[test]
fn test_env_overrides_replace_defaults() {
    with_scoped_env(
        &[
            ("HOST", Some("127.0.0.1")),
            ("PORT", Some("9191")),
            ("SEED_DEMO_DATA", Some("true")),
        ],
        || {
            let mut config = ServerConfig::default();
            config.apply_env_overrides();

            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.server.port, 9191);
            assert!(config.server.seed_demo_data);
            assert_eq!(config.bind_address(), "127.0.0.1:9191");
        },
    );
}

#[test]
fn test_unset_env_keeps_config_values() {
    with_scoped_env(
        &[
            ("HOST", None),
            ("PORT", None),
            ("SEED_DEMO_DATA", None),
        ],
        || {
            let mut config = ServerConfig::default();
            config.server.host = "10.1.2.3".to_string();
            config.server.port = 3000;
            config.apply_env_overrides();

            assert_eq!(config.server.host, "10.1.2.3");
            assert_eq!(config.server.port, 3000);
            assert!(!config.server.seed_demo_data);
        },
    );
}

#[test]
fn test_unparseable_env_values_are_ignored() {
    with_scoped_env(
        &[
            ("HOST", Some("")),
            ("PORT", Some("not-a-port")),
            ("SEED_DEMO_DATA", Some("maybe")),
        ],
        || {
            let mut config = ServerConfig::default();
            config.apply_env_overrides();

            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.port, 8080);
            assert!(!config.server.seed_demo_data);
        },
    );
}

#[test]
fn test_seed_flag_accepts_numeric_forms() {
    with_scoped_env(&[("SEED_DEMO_DATA", Some("1"))], || {
        let mut config = ServerConfig::default();
        config.apply_env_overrides();
        assert!(config.server.seed_demo_data);
    });

    with_scoped_env(&[("SEED_DEMO_DATA", Some("0"))], || {
        let mut config = ServerConfig::default();
        config.server.seed_demo_data = true;
        config.apply_env_overrides();
        assert!(!config.server.seed_demo_data);
    });
}
