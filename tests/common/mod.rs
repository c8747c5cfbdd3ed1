#![allow(dead_code)]
//! Shared test utilities for integration tests.
//!
//! Tests in one binary run on parallel threads and share the process
//! environment, so every test that touches it uses its own variable names
//! and restores them through [`ScopedVar`].

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber, honouring `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Sets a process environment variable and removes it again on drop.
pub struct ScopedVar {
    name: String,
}

impl ScopedVar {
    pub fn set(name: &str, value: &str) -> Self {
        std::env::set_var(name, value);
        Self {
            name: name.to_string(),
        }
    }
}

impl Drop for ScopedVar {
    fn drop(&mut self) {
        std::env::remove_var(&self.name);
    }
}
