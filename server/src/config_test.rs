use std::collections::HashMap;

use super::*;

fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    let cfg = config(&[]).expect("defaults");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_upstream, None);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
}

#[test]
fn port_parses_and_rejects_garbage() {
    assert_eq!(config(&[("PORT", " 8080 ")]).expect("port").port, 8080);
    assert_eq!(config(&[("PORT", "eighty")]), Err(ConfigError::InvalidPort("eighty".into())));
    assert_eq!(config(&[("PORT", "70000")]), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = config(&[("PORT", "  "), ("HRDESK_API_UPSTREAM", "")]).expect("blank");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_upstream, None);
}

#[test]
fn upstream_trims_trailing_slashes() {
    let cfg = config(&[("HRDESK_API_UPSTREAM", "http://localhost:5000/api//")]).expect("upstream");
    assert_eq!(cfg.api_upstream.as_deref(), Some("http://localhost:5000/api"));
}

#[test]
fn upstream_requires_http_scheme_and_host() {
    for bad in ["localhost:5000", "ftp://host", "http://", "https:///"] {
        assert_eq!(
            config(&[("HRDESK_API_UPSTREAM", bad)]),
            Err(ConfigError::InvalidUpstream(bad.into())),
            "{bad}"
        );
    }
}

#[test]
fn timeout_falls_back_on_bad_or_zero() {
    assert_eq!(
        config(&[("HRDESK_PROXY_TIMEOUT_SECS", "5")]).expect("timeout").proxy_timeout,
        Duration::from_secs(5)
    );
    for bad in ["0", "soon", "-1"] {
        let cfg = config(&[("HRDESK_PROXY_TIMEOUT_SECS", bad)]).expect("fallback");
        assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS), "{bad}");
    }
}

#[test]
fn errors_name_the_variable() {
    let err = config(&[("PORT", "x")]).expect_err("bad port");
    assert!(err.to_string().contains("PORT"));
}
