#[cfg(any(test, feature = "test-support"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;

#[cfg(any(test, feature = "test-support"))]
use super::ReadEnv;

/// Won't touch the global process environment.
///
/// All methods take `&self`; the table lives in a `RefCell`, so the type is
/// not `Sync`.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }

    pub fn clear(&self) {
        self.vars.borrow_mut().clear();
    }
}

#[cfg(any(test, feature = "test-support"))]
impl<K, V> FromIterator<(K, V)> for InMemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: RefCell::new(vars),
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadEnv for InMemoryEnv {
    fn read_raw(&self, key: &str) -> Option<String> {
        self.vars.borrow().get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_env_set_and_get() {
        let env = InMemoryEnv::new();
        env.set("TEST_VAR", "test_value");
        assert_eq!(env.read_raw("TEST_VAR").as_deref(), Some("test_value"));
    }

    #[test]
    fn test_in_memory_env_empty_value_is_present() {
        let env = InMemoryEnv::new();
        env.set("TEST_VAR", "");
        assert_eq!(env.read_raw("TEST_VAR").as_deref(), Some(""));
        assert!(env.read_raw("OTHER").is_none());
    }

    #[test]
    fn test_in_memory_env_remove_and_clear() {
        let env: InMemoryEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        env.remove("A");
        assert!(!env.contains("A"));
        assert!(env.contains("B"));

        env.clear();
        assert!(!env.contains("B"));
    }

    #[test]
    fn test_in_memory_env_overwrite() {
        let env = InMemoryEnv::new();
        env.set("KEY", "v1");
        env.set("KEY", "v2");
        assert_eq!(env.read_raw("KEY").as_deref(), Some("v2"));
    }
}
