use serde::{Deserialize, Serialize};
use std::{fmt, time::Duration};

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TRANSLATE_DELAY_MS: u64 = 500;
pub const ENV_LANGUAGE: &str = "EASYAID_LANGUAGE";
pub const ENV_TRANSLATE_DELAY_MS: &str = "EASYAID_TRANSLATE_DELAY_MS";

/// Short locale identifier such as `"hi"` or `"ta"`.
///
/// Any string is accepted by [`From`]; codes outside the supported list
/// simply translate as no-ops. [`LanguageCode::new`] is the checked
/// constructor used for configuration input.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LanguageCode(pub String);

impl LanguageCode {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ConfigError> {
        let v = value.into();
        if v.trim().is_empty() {
            return Err(ConfigError::EmptyLanguage);
        }
        Ok(Self(v))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_english(&self) -> bool {
        self.0 == DEFAULT_LANGUAGE
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_owned())
    }
}

impl From<&str> for LanguageCode {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Artificial latency applied before a translation resolves. Zero is valid.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslateDelay {
    pub millis: u64,
}

impl TranslateDelay {
    pub fn new(millis: u64) -> Self {
        Self { millis }
    }

    pub fn none() -> Self {
        Self { millis: 0 }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.millis)
    }
}

impl Default for TranslateDelay {
    fn default() -> Self {
        Self {
            millis: DEFAULT_TRANSLATE_DELAY_MS,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub language: LanguageCode,
    pub translate_delay: TranslateDelay,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("language code must not be empty")]
    EmptyLanguage,
    #[error("invalid translate delay: {0}")]
    InvalidDelay(String),
}

/// Source of settings that were not given on the command line.
pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Clone, Debug, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed key/value settings, for embedding callers and tests.
#[derive(Clone, Debug, Default)]
pub struct FixedEnv {
    vars: std::collections::BTreeMap<String, String>,
}

impl<'a> FromIterator<(&'a str, &'a str)> for FixedEnv {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(pairs: I) -> Self {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        }
    }
}

impl Env for FixedEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl std::str::FromStr for TranslateDelay {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u64>()
            .map(Self::new)
            .map_err(|_| ConfigError::InvalidDelay(raw.to_owned()))
    }
}

/// Takes the explicit value if present, otherwise parses `env_key`, otherwise
/// falls back to `T::default()`.
pub fn resolve_setting<T: Default>(
    explicit: Option<T>,
    env_key: &str,
    env: &impl Env,
    parse: impl FnOnce(String) -> Result<T, ConfigError>,
) -> Result<T, ConfigError> {
    match explicit {
        Some(value) => Ok(value),
        None => env.var(env_key).map_or_else(|| Ok(T::default()), parse),
    }
}

/// Builds the application config with CLI values taking precedence over
/// the environment, and the environment over built-in defaults.
pub fn resolve_app_config(
    cli_language: Option<String>,
    cli_delay_ms: Option<u64>,
    env: &impl Env,
) -> Result<AppConfig, ConfigError> {
    let language = resolve_setting(
        cli_language.map(LanguageCode::new).transpose()?,
        ENV_LANGUAGE,
        env,
        LanguageCode::new,
    )?;
    let translate_delay = resolve_setting(
        cli_delay_ms.map(TranslateDelay::new),
        ENV_TRANSLATE_DELAY_MS,
        env,
        |raw| raw.parse(),
    )?;
    Ok(AppConfig {
        language,
        translate_delay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&'static str, &'static str)]) -> FixedEnv {
        pairs.iter().copied().collect()
    }

    #[test]
    fn language_cli_takes_precedence_over_env() {
        let env = env(&[(ENV_LANGUAGE, "ta")]);
        let cfg = resolve_app_config(Some("hi".to_owned()), None, &env).expect("valid config");
        assert_eq!(cfg.language.as_str(), "hi");
    }

    #[test]
    fn language_env_used_when_cli_missing() {
        let env = env(&[(ENV_LANGUAGE, "kn")]);
        let cfg = resolve_app_config(None, None, &env).expect("valid config");
        assert_eq!(cfg.language.as_str(), "kn");
    }

    #[test]
    fn defaults_used_when_both_missing() {
        let cfg = resolve_app_config(None, None, &FixedEnv::default()).expect("valid config");
        assert_eq!(cfg, AppConfig::default());
        assert!(cfg.language.is_english());
        assert_eq!(cfg.translate_delay.millis, DEFAULT_TRANSLATE_DELAY_MS);
    }

    #[test]
    fn blank_language_rejected_from_cli_and_env() {
        let err = resolve_app_config(Some("  ".to_owned()), None, &FixedEnv::default())
            .expect_err("blank code");
        assert_eq!(err, ConfigError::EmptyLanguage);

        let err = resolve_app_config(None, None, &env(&[(ENV_LANGUAGE, "")]))
            .expect_err("blank code");
        assert_eq!(err, ConfigError::EmptyLanguage);
    }

    #[test]
    fn delay_from_env_and_zero_allowed() {
        let cfg = resolve_app_config(None, None, &env(&[(ENV_TRANSLATE_DELAY_MS, " 0 ")]))
            .expect("parses");
        assert_eq!(cfg.translate_delay, TranslateDelay::none());
        assert_eq!(cfg.translate_delay.duration(), Duration::ZERO);
    }

    #[test]
    fn delay_cli_takes_precedence_over_env() {
        let env = env(&[(ENV_TRANSLATE_DELAY_MS, "900")]);
        let cfg = resolve_app_config(None, Some(25), &env).expect("parses");
        assert_eq!(cfg.translate_delay.millis, 25);
    }

    #[test]
    fn malformed_delay_env_is_an_error() {
        let env = env(&[(ENV_TRANSLATE_DELAY_MS, "soon")]);
        let err = resolve_app_config(None, None, &env).expect_err("not a number");
        assert_eq!(err, ConfigError::InvalidDelay("soon".to_owned()));
    }

    #[test]
    fn unset_setting_falls_back_to_default() {
        let delay: TranslateDelay =
            resolve_setting(None, "UNSET_KEY", &FixedEnv::default(), |raw| raw.parse())
                .expect("default");
        assert_eq!(delay, TranslateDelay::default());
    }

    #[test]
    fn unchecked_code_accepts_anything() {
        let code = LanguageCode::from("xx");
        assert_eq!(code.to_string(), "xx");
        assert!(!code.is_english());
    }
}
