//! Where variables are read from.
//!
//! Lookups go through [`ReadEnv`] so tests can swap the process table for an
//! [`InMemoryEnv`] without touching global state.

mod in_memory;
mod system;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use system::SystemEnv;

/// Single-key, read-only access to an environment table.
///
/// `None` means the variable is absent. `Some(String::new())` is a variable
/// that is set to the empty string.
pub trait ReadEnv {
    fn read_raw(&self, key: &str) -> Option<String>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn read_raw(&self, key: &str) -> Option<String> {
        (**self).read_raw(key)
    }
}
