use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_encore_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("ENCORE_CONFIG_PATH", "/tmp/encore-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/encore-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("encore")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("encore")
            .join("config.toml")
    );
}

#[test]
fn defaults_are_sane_and_valid() {
    let settings = Settings::default();
    assert_eq!(settings.playback.volume, 0.8);
    assert!(!settings.playback.muted);
    assert!(!settings.playback.looping);
    assert_eq!(settings.playback.seek_seconds, 5);
    assert!(settings.ui.show_descriptions);
    assert_eq!(
        settings.content.path,
        std::path::PathBuf::from("content.toml")
    );
    assert!(settings.validate().is_ok());
}

#[test]
fn validate_rejects_out_of_range_volume() {
    let mut settings = Settings::default();
    settings.playback.volume = 1.5;
    assert!(settings.validate().is_err());

    settings.playback.volume = -0.1;
    assert!(settings.validate().is_err());
}

#[test]
fn validate_rejects_zero_seek_seconds() {
    let mut settings = Settings::default();
    settings.playback.seek_seconds = 0;
    assert!(settings.validate().is_err());
}

#[test]
fn env_overrides_take_precedence() {
    let _lock = env_lock();
    // Point at a non-existent file so only env + defaults apply.
    let _g1 = EnvGuard::set("ENCORE_CONFIG_PATH", "/tmp/encore-no-such-config.toml");
    let _g2 = EnvGuard::set("ENCORE__PLAYBACK__VOLUME", "0.25");
    let _g3 = EnvGuard::set("ENCORE__PLAYBACK__LOOPING", "true");

    let settings = Settings::load().unwrap();
    assert_eq!(settings.playback.volume, 0.25);
    assert!(settings.playback.looping);
    // Untouched fields keep their defaults.
    assert_eq!(settings.playback.seek_seconds, 5);
}
