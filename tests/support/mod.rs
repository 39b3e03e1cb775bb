use std::sync::{Mutex, MutexGuard};

/// The environment variables the config layer reads.
const CONFIG_VARS: [&str; 3] = ["HOST", "PORT", "DATA_PATH"];

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Pins the dashboard's config environment for the duration of one test.
///
/// Env vars are process-global and cargo runs tests in parallel, so the
/// guard holds a lock while it is alive. On construction it clears all
/// three config variables and applies the requested overrides; dropping
/// it restores whatever was set before, including on panic.
pub struct ConfigEnv {
    _lock: MutexGuard<'static, ()>,
    saved: Vec<(&'static str, Option<String>)>,
}

impl ConfigEnv {
    /// Clear `HOST`, `PORT` and `DATA_PATH`.
    pub fn clear() -> Self {
        Self::with(&[])
    }

    /// Clear the config vars, then set the given overrides.
    pub fn with(overrides: &[(&str, &str)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved = CONFIG_VARS
            .iter()
            .map(|&var| (var, std::env::var(var).ok()))
            .collect();

        for var in CONFIG_VARS {
            std::env::remove_var(var);
        }
        for (var, value) in overrides {
            assert!(
                CONFIG_VARS.contains(var),
                "'{}' is not a config variable",
                var
            );
            std::env::set_var(var, value);
        }

        ConfigEnv { _lock: lock, saved }
    }
}

impl Drop for ConfigEnv {
    fn drop(&mut self) {
        for (var, value) in self.saved.drain(..) {
            match value {
                Some(v) => std::env::set_var(var, v),
                None => std::env::remove_var(var),
            }
        }
    }
}
