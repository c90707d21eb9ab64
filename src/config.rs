use anyhow::Context;
use serde::Deserialize;

/// Cookie flags differ between local development and deployed builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentMode {
    Development,
    Production,
}

impl DeploymentMode {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("development") {
            DeploymentMode::Development
        } else {
            DeploymentMode::Production
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// When set, tokens carry an `exp` claim and verification requires it.
    pub ttl_minutes: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub cookie_minutes: i64,
    pub mode: DeploymentMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub cors_origin: String,
    pub jwt: JwtConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            ttl_minutes: parse_minutes("JWT_TTL_MINUTES", std::env::var("JWT_TTL_MINUTES").ok())?,
        };
        let session = SessionConfig {
            cookie_minutes: parse_minutes(
                "SESSION_COOKIE_MINUTES",
                std::env::var("SESSION_COOKIE_MINUTES").ok(),
            )?
            .unwrap_or(15),
            mode: std::env::var("APP_ENV")
                .map(|v| DeploymentMode::parse(&v))
                .unwrap_or(DeploymentMode::Production),
        };
        let cors_origin =
            std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".into());
        Ok(Self {
            database_url,
            cors_origin,
            jwt,
            session,
        })
    }
}

/// Unset is `None`; a value that is set but not a positive integer is an error.
fn parse_minutes(name: &str, raw: Option<String>) -> anyhow::Result<Option<i64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let minutes = raw
        .trim()
        .parse::<i64>()
        .with_context(|| format!("{name} must be a number of minutes, got {raw:?}"))?;
    anyhow::ensure!(minutes > 0, "{name} must be positive, got {minutes}");
    Ok(Some(minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_mode_only_development_is_relaxed() {
        assert_eq!(DeploymentMode::parse("Development"), DeploymentMode::Development);
        assert_eq!(DeploymentMode::parse(" development "), DeploymentMode::Development);
        assert_eq!(DeploymentMode::parse("production"), DeploymentMode::Production);
        assert_eq!(DeploymentMode::parse("staging"), DeploymentMode::Production);
        assert_eq!(DeploymentMode::parse(""), DeploymentMode::Production);
    }

    #[test]
    fn minutes_unset_is_none_and_valid_values_parse() {
        assert_eq!(parse_minutes("JWT_TTL_MINUTES", None).unwrap(), None);
        assert_eq!(parse_minutes("JWT_TTL_MINUTES", Some("30".into())).unwrap(), Some(30));
        assert_eq!(parse_minutes("JWT_TTL_MINUTES", Some(" 5 ".into())).unwrap(), Some(5));
    }

    #[test]
    fn minutes_that_do_not_parse_are_rejected() {
        let err = parse_minutes("JWT_TTL_MINUTES", Some("15m".into())).unwrap_err();
        assert!(err.to_string().contains("JWT_TTL_MINUTES"));
        assert!(parse_minutes("SESSION_COOKIE_MINUTES", Some("".into())).is_err());
        assert!(parse_minutes("SESSION_COOKIE_MINUTES", Some("0".into())).is_err());
    }
}
