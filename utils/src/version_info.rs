//! Version information for the application, populated at build time.
//!
//! Display format: `v{package version} ({short commit})`, e.g. `v0.1.0 (3f9c2ab)`.
//! The commit falls back to `unknown` when the build happens outside a git
//! checkout (release tarballs).

/// Get the build date in RFC3339 format
pub fn build_date() -> &'static str {
    env!("BUILD_DATE")
}

/// Build date cut down to its `YYYY-MM-DD` part for display.
pub fn build_date_short() -> &'static str {
    let date = build_date();
    // BUILD_DATE is RFC3339 formatted (e.g., "2026-01-03T12:00:00+00:00") which is ASCII
    if date.len() >= 10 && date.is_ascii() {
        &date[..10]
    } else {
        date
    }
}

/// Get the git commit hash (short)
pub fn build_commit() -> &'static str {
    env!("BUILD_COMMIT")
}

/// Get the package version
pub fn build_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Format the version and commit as the display string shown in the UI.
pub fn format_app_version() -> String {
    format!("v{} ({})", build_version(), build_commit())
}
