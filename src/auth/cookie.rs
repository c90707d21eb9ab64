use axum_extra::extract::cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

use crate::config::{DeploymentMode, SessionConfig};

pub const SESSION_COOKIE: &str = "token";

fn base(value: String, cfg: &SessionConfig) -> Cookie<'static> {
    let (secure, same_site) = match cfg.mode {
        DeploymentMode::Development => (false, SameSite::Lax),
        DeploymentMode::Production => (true, SameSite::None),
    };
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(same_site)
        .build()
}

pub fn session_cookie(token: String, cfg: &SessionConfig) -> Cookie<'static> {
    let mut cookie = base(token, cfg);
    cookie.set_max_age(Duration::minutes(cfg.cookie_minutes));
    cookie
}

/// Replaces the session cookie with an empty one that has already expired.
pub fn expired_cookie(cfg: &SessionConfig) -> Cookie<'static> {
    let mut cookie = base(String::new(), cfg);
    cookie.set_expires(OffsetDateTime::UNIX_EPOCH);
    cookie
}
