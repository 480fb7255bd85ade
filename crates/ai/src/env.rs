//! Environment abstraction for the generation client.
//!
//! The client never reads process state directly. Credentials are looked up
//! through `AiEnvironment` on every call, so a missing key only fails the
//! generation that needs it and a key set later is picked up without restart.

/// Environment abstraction for the generation client.
pub trait AiEnvironment: Send + Sync {
    /// Look up a secret (e.g. an API key) by variable name.
    fn secret(&self, key: &str) -> Option<String>;
}

/// Reads secrets from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl AiEnvironment for ProcessEnvironment {
    fn secret(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[cfg(test)]
pub mod test_env {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// Mock environment backed by an in-memory map.
    #[derive(Default)]
    pub struct MockEnvironment {
        secrets: RwLock<HashMap<String, String>>,
    }

    impl MockEnvironment {
        pub fn with_secret(key: &str, value: &str) -> Self {
            let env = Self::default();
            env.set_secret(key, value);
            env
        }

        pub fn set_secret(&self, key: &str, value: &str) {
            self.secrets
                .write()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }
    }

    impl AiEnvironment for MockEnvironment {
        fn secret(&self, key: &str) -> Option<String> {
            self.secrets.read().unwrap().get(key).cloned()
        }
    }
}
