use luasync_admin::Config;

#[test]
fn from_env_falls_back_to_defaults() {
    // No WLADMIN_* variables are set in the test environment, so every
    // field comes from its default.
    let cfg = Config::from_env().expect("config extraction failed");
    assert_eq!(cfg.database_url, "sqlite:whitelist.sqlite");
    assert_eq!(cfg.store_key, "whitelistData");
    assert_eq!(cfg.loglevel, "info");
}
