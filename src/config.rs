use std::{fmt, time::Duration};

use serde::Deserialize;

use crate::api::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.optimizely.com/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Settings for a [`Client`](crate::Client).
///
/// Deserializable so it can live in the embedding application's own
/// configuration, e.g. `{"token": "...", "timeout_ms": 10000}`.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Personal access token.
    pub token: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Config {
            token: token.into(),
            base_url: None,
            timeout_ms: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Rounds up to whole milliseconds.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let millis = (timeout.as_nanos() + 999_999) / 1_000_000;
        self.timeout_ms = Some(u64::try_from(millis).unwrap_or(u64::MAX));
        self
    }

    /// The configured base URL, or the public v2 API when unset or empty.
    pub fn base_url(&self) -> &str {
        match self.base_url.as_deref() {
            Some(base_url) if !base_url.is_empty() => base_url,
            _ => DEFAULT_BASE_URL,
        }
    }

    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        match self.timeout_ms {
            None => Ok(DEFAULT_TIMEOUT),
            Some(0) => Err(ConfigError::ZeroTimeout),
            Some(ms) => Ok(Duration::from_millis(ms)),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"***")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

/// A validated bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

impl Token {
    /// Trims surrounding whitespace and one layer of quotes, then rejects
    /// empty tokens and tokens with whitespace inside.
    pub fn parse(raw: &str) -> Result<Token, ConfigError> {
        if raw.is_empty() {
            return Err(ConfigError::MissingToken);
        }
        let token = raw.trim();
        let token = token.strip_prefix(is_quote).unwrap_or(token);
        let token = token.strip_suffix(is_quote).unwrap_or(token);
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        if token.chars().any(char::is_whitespace) {
            return Err(ConfigError::MalformedToken);
        }
        Ok(Token(token.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Token, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
    use crate::api::error::ConfigError;
    use std::time::Duration;

    #[test]
    fn rejects_missing_and_blank_tokens() {
        assert_eq!(Token::parse(""), Err(ConfigError::MissingToken));
        assert_eq!(Token::parse("   "), Err(ConfigError::EmptyToken));
        assert_eq!(Token::parse(" \t\n"), Err(ConfigError::EmptyToken));
        assert_eq!(Token::parse("\"\""), Err(ConfigError::EmptyToken));
        assert_eq!(Token::parse(" '' "), Err(ConfigError::EmptyToken));
    }

    #[test]
    fn rejects_inner_whitespace() {
        assert_eq!(Token::parse("2:abc def"), Err(ConfigError::MalformedToken));
        assert_eq!(Token::parse("\"2:abc def\""), Err(ConfigError::MalformedToken));
        assert_eq!(Token::parse("2:abc\tdef"), Err(ConfigError::MalformedToken));
    }

    #[test]
    fn trims_whitespace_and_quotes() {
        assert_eq!(Token::parse("  2:abcdef  ").unwrap().as_str(), "2:abcdef");
        assert_eq!(Token::parse("\"2:abcdef\"").unwrap().as_str(), "2:abcdef");
        assert_eq!(Token::parse(" '2:abcdef'\n").unwrap().as_str(), "2:abcdef");
    }

    #[test]
    fn only_one_layer_of_quotes_is_removed() {
        assert_eq!(Token::parse("\"'2:abc'\"").unwrap().as_str(), "'2:abc'");
    }

    #[test]
    fn defaults() {
        let config = Config::new("token");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Ok(DEFAULT_TIMEOUT));
        assert_eq!(Config::new("token").with_base_url("").base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn overrides() {
        let config = Config::new("token")
            .with_base_url("http://127.0.0.1:8080")
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
        assert_eq!(config.timeout(), Ok(Duration::from_millis(250)));
    }

    #[test]
    fn sub_millisecond_timeouts_round_up() {
        let config = Config::new("token").with_timeout(Duration::from_micros(300));
        assert_eq!(config.timeout(), Ok(Duration::from_millis(1)));
        let config = Config::new("token").with_timeout(Duration::from_micros(1_500));
        assert_eq!(config.timeout(), Ok(Duration::from_millis(2)));
        let config = Config::new("token").with_timeout(Duration::MAX);
        assert_eq!(config.timeout_ms, Some(u64::MAX));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = Config::new("token").with_timeout(Duration::from_millis(0));
        assert_eq!(config.timeout(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn deserializes_from_json() {
        let config: Config =
            serde_json::from_str(r#"{"token": "abc", "timeout_ms": 5000}"#).unwrap();
        assert_eq!(config.token, "abc");
        assert_eq!(config.base_url, None);
        assert_eq!(config.timeout(), Ok(Duration::from_secs(5)));
    }

    #[test]
    fn debug_output_hides_the_token() {
        assert!(!format!("{:?}", Config::new("2:secret")).contains("secret"));
        assert!(!format!("{:?}", Token::parse("2:secret").unwrap()).contains("secret"));
    }
}
