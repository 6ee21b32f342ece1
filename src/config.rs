//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! A WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled and fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::controller::TransportFailurePolicy;

pub const DEFAULT_API_BASE_URL: &str = "https://backengine-dlfl.fly.dev";
pub const DEFAULT_SESSION_KEY: &str = "accessToken";
pub const DEFAULT_NOTIFY_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_key: String,
    pub notify_ms: u32,
    pub transport_failures: TransportFailurePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            session_key: DEFAULT_SESSION_KEY.to_owned(),
            notify_ms: DEFAULT_NOTIFY_MS,
            transport_failures: TransportFailurePolicy::Notify,
        }
    }
}

impl AppConfig {
    /// Build config from variables present when the crate was compiled.
    ///
    /// Optional:
    /// - `KHETI_API_BASE_URL`: auth service base URL
    /// - `KHETI_SESSION_KEY`: `localStorage` key holding the token
    /// - `KHETI_NOTIFY_MS`: notification lifetime, default 3000
    /// - `KHETI_TRANSPORT_ERRORS`: `notify` (default) or `log`
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("KHETI_API_BASE_URL"),
            option_env!("KHETI_SESSION_KEY"),
            option_env!("KHETI_NOTIFY_MS"),
            option_env!("KHETI_TRANSPORT_ERRORS"),
        )
    }

    /// Build config from raw optional values. Blank or unparseable values
    /// keep their default.
    pub fn from_values(
        api_base_url: Option<&str>,
        session_key: Option<&str>,
        notify_ms: Option<&str>,
        transport_failures: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: non_blank(api_base_url)
                .map_or(defaults.api_base_url, normalize_base_url),
            session_key: non_blank(session_key).map_or(defaults.session_key, str::to_owned),
            notify_ms: non_blank(notify_ms).map_or(defaults.notify_ms, parse_notify_ms),
            transport_failures: non_blank(transport_failures)
                .map_or(defaults.transport_failures, parse_transport_policy),
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}

fn parse_notify_ms(raw: &str) -> u32 {
    raw.parse::<u32>().unwrap_or_else(|_| {
        log::warn!("ignoring KHETI_NOTIFY_MS={raw:?}; using {DEFAULT_NOTIFY_MS}");
        DEFAULT_NOTIFY_MS
    })
}

fn parse_transport_policy(raw: &str) -> TransportFailurePolicy {
    match raw.to_ascii_lowercase().as_str() {
        "notify" => TransportFailurePolicy::Notify,
        "log" => TransportFailurePolicy::LogOnly,
        other => {
            log::warn!("unknown KHETI_TRANSPORT_ERRORS={other:?}; expected 'notify' or 'log'");
            TransportFailurePolicy::Notify
        }
    }
}
