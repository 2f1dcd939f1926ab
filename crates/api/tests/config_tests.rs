use std::env;

use league_api::ServerConfig;

// Environment variables are process-wide, so every case lives in one test.
#[test]
fn default_interval_days_is_range_checked() {
    env::remove_var("PORT");
    env::remove_var("DATABASE_MAX_CONNECTIONS");

    env::remove_var("DEFAULT_INTERVAL_DAYS");
    assert_eq!(ServerConfig::from_env().unwrap().default_interval_days, 7);

    env::set_var("DEFAULT_INTERVAL_DAYS", "14");
    assert_eq!(ServerConfig::from_env().unwrap().default_interval_days, 14);

    for bad in ["0", "366", "-3", "weekly"] {
        env::set_var("DEFAULT_INTERVAL_DAYS", bad);
        let err = ServerConfig::from_env().unwrap_err();
        assert!(
            err.to_string().contains("DEFAULT_INTERVAL_DAYS"),
            "unexpected error for {bad}: {err}"
        );
    }

    env::remove_var("DEFAULT_INTERVAL_DAYS");
}
