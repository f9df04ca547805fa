use std::env;

use super::ReadEnv;

/// Zero-sized, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    /// Non-Unicode values are converted lossily and still count as present.
    #[inline]
    fn read_raw(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_env_delegation() {
        let std_result = env::var("PATH");
        assert_eq!(std_result.ok(), SystemEnv.read_raw("PATH"));
    }

    #[test]
    fn test_system_env_missing_key() {
        assert!(SystemEnv
            .read_raw("ENVGUARD_SYSTEM_ENV_MISSING_KEY_7f3a")
            .is_none());
    }
}
