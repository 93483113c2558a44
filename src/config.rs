use log::Level;

const DEFAULT_BASE_PATH: &str = "/o2-shop";

fn resolve_base_path(explicit: Option<&'static str>, public_url: Option<&'static str>) -> &'static str {
    explicit
        .or_else(|| public_url.map(|url| url.trim_end_matches('/')))
        .unwrap_or(DEFAULT_BASE_PATH)
}

/// Path prefix the site is deployed under. `O2_BASE_PATH` overrides it at
/// build time; otherwise Trunk's `TRUNK_BUILD_PUBLIC_URL` is used, so one
/// variable moves both the bundle and the router. An empty value serves the
/// site from the root.
pub fn get_base_path() -> &'static str {
    resolve_base_path(option_env!("O2_BASE_PATH"), option_env!("TRUNK_BUILD_PUBLIC_URL"))
}

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug // Development builds run under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
