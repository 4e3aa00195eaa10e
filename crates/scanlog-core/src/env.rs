use std::collections::HashMap;

/// Environment lookup as an injected capability, so the CI derivation is
/// testable without mutating the real process environment.
pub trait Env {
    fn var(&self, name: &str) -> Option<String>;
}

/// Process-backed lookup used by the CLI.
pub struct SystemEnv;

impl Env for SystemEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory lookup for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl Env for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Case-insensitive comparison against "true"; absent is false.
fn is_true(value: Option<String>) -> bool {
    value.map(|v| v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

/// Upload timing derivation: upload in the background unless running
/// under CI (`CI` variable parses as boolean true).
pub fn upload_in_background(env: &dyn Env) -> bool {
    !is_true(env.var("CI"))
}

/// Resolution with the explicit settings override: when present the
/// override wins, otherwise the `CI` derivation applies.
pub fn effective_upload_in_background(explicit: Option<bool>, env: &dyn Env) -> bool {
    explicit.unwrap_or_else(|| upload_in_background(env))
}
