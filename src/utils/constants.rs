/// Backend REST API base URL.
/// Configured at compile time:
/// - Development: http://localhost:3000 (default)
/// - Production: via BACKEND_URL env var (see build.rs / .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// localStorage key for the persisted session blob.
pub const SESSION_STORAGE_KEY: &str = "medibook_session";

/// How long a transient toast stays on screen before auto-dismissing.
pub const TOAST_DURATION_MS: u32 = 3_000;
