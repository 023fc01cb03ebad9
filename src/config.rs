//! Backing-file path resolution.

use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = "data/tasks.json";
pub const STORE_PATH_ENV: &str = "TICK_FILE";

/// Resolve the backing file path: explicit `--file` flag first, then the
/// `TICK_FILE` env var, then the default.
pub fn resolve_store_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Some(path) = std::env::var_os(STORE_PATH_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_STORE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env-var tests must not run concurrently.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn flag_takes_precedence() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe { std::env::set_var(STORE_PATH_ENV, "/tmp/env.json") };
        assert_eq!(
            resolve_store_path(Some(PathBuf::from("/tmp/flag.json"))),
            PathBuf::from("/tmp/flag.json")
        );
        unsafe { std::env::remove_var(STORE_PATH_ENV) };
    }

    #[test]
    fn env_var_overrides_default() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe { std::env::set_var(STORE_PATH_ENV, "/tmp/env.json") };
        assert_eq!(resolve_store_path(None), PathBuf::from("/tmp/env.json"));

        // Empty value is ignored
        unsafe { std::env::set_var(STORE_PATH_ENV, "") };
        assert_eq!(resolve_store_path(None), PathBuf::from(DEFAULT_STORE_PATH));

        unsafe { std::env::remove_var(STORE_PATH_ENV) };
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe { std::env::remove_var(STORE_PATH_ENV) };
        assert_eq!(resolve_store_path(None), PathBuf::from(DEFAULT_STORE_PATH));
    }
}
