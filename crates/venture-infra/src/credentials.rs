//! Environment credential resolution.
//!
//! The only credential the simulator needs is the completion-service API
//! key, read from the environment. Read-only by design: users set it via
//! shell config, not through the application. Absence is a fatal
//! configuration error raised before any network call is attempted.

use secrecy::SecretString;

use venture_types::error::ConfigError;

/// Environment variable holding the completion-service API key.
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Resolve the API key from the environment.
///
/// The value is wrapped in [`SecretString`] immediately so it never
/// appears in Debug output or logs.
pub fn resolve_api_key() -> Result<SecretString, ConfigError> {
    match std::env::var(API_KEY_VAR) {
        Ok(val) if !val.trim().is_empty() => Ok(SecretString::from(val)),
        Ok(_) => Err(ConfigError::MissingCredential(API_KEY_VAR.to_string())),
        Err(std::env::VarError::NotPresent) => {
            Err(ConfigError::MissingCredential(API_KEY_VAR.to_string()))
        }
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::Invalid(format!(
            "{API_KEY_VAR} contains invalid unicode"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use secrecy::ExposeSecret;

    /// Serializes tests that mutate the process environment. Cargo runs
    /// tests on parallel threads and `set_var` is process-wide.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_resolve_api_key_roundtrip() {
        let _guard = ENV_LOCK.lock().unwrap();
        // SAFETY: ENV_LOCK serializes every mutation of this variable and
        // the test restores it before releasing the guard.
        unsafe {
            std::env::set_var(API_KEY_VAR, "sk-test-not-real");
        }
        let key = resolve_api_key().unwrap();
        assert_eq!(key.expose_secret(), "sk-test-not-real");
        unsafe {
            std::env::remove_var(API_KEY_VAR);
        }
        assert!(matches!(
            resolve_api_key(),
            Err(ConfigError::MissingCredential(_))
        ));
    }
}
