use crate::config;

/// Rewrites a root-relative asset reference so it resolves under the
/// configured deployment base path.
pub fn asset_path(path: &str) -> String {
    with_base(config::get_base_path(), path)
}

pub fn with_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() || !path.starts_with('/') || path.starts_with("//") {
        return path.to_string();
    }

    // Already resolved
    if path == base || path.strip_prefix(base).map_or(false, |rest| rest.starts_with('/')) {
        return path.to_string();
    }

    format!("{}{}", base, path)
}
