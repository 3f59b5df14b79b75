pub mod time;

/// Debug logging is enabled when the build targets a backend on this machine.
pub fn is_dev_mode() -> bool {
    option_env!("BACKEND_URL").is_some_and(is_local_backend)
}

fn is_local_backend(url: &str) -> bool {
    let host = url
        .split("://")
        .nth(1)
        .unwrap_or(url)
        .split(['/', ':'])
        .next()
        .unwrap_or_default();
    matches!(host, "localhost" | "127.0.0.1")
}
