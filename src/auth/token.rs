use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::config::JwtConfig;

/// Session token payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid, // user ID
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Signs and verifies session tokens with the server secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    ttl: Option<TimeDuration>,
}

impl TokenService {
    pub fn new(cfg: &JwtConfig) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(cfg.secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(cfg.secret.as_bytes())),
            ttl: cfg.ttl_minutes.map(TimeDuration::minutes),
        }
    }

    pub fn issue(&self, user_id: Uuid) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let claims = Claims {
            sub: user_id,
            iat: now.unix_timestamp(),
            exp: self.ttl.map(|ttl| (now + ttl).unix_timestamp()),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        debug!(user_id = %user_id, expiring = claims.exp.is_some(), "session token issued");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> Result<Uuid, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Without a configured ttl the token never expires; only the cookie does.
        if self.ttl.is_some() {
            validation.set_required_spec_claims(&["exp"]);
            validation.validate_exp = true;
            validation.leeway = 0;
        } else {
            validation.required_spec_claims.clear();
            validation.validate_exp = false;
        }
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.sub, "session token verified");
        Ok(data.claims.sub)
    }
}
