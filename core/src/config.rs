//! Backend selection from the environment.

/// Base URL used when [`BASE_URL_ENV`] is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that selects the backend base URL.
pub const BASE_URL_ENV: &str = "TODO_API_URL";

/// Resolve the backend base URL from the environment, falling back to
/// [`DEFAULT_BASE_URL`].
pub fn base_url_from_env() -> String {
    std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_when_unset() {
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(base_url_from_env(), DEFAULT_BASE_URL);
    }
}
