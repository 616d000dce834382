use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use kernel::model::{auth::AccessToken, id::Enrollment};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

// 有効期限の上限は 1 年
const MAX_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    enrollment: String,
    iat: i64,
    exp: i64,
}

/// HS256 で学籍番号入りのトークンを発行・検証する
#[derive(Clone)]
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtCodec {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs.min(MAX_TTL_SECS) as i64),
        }
    }

    pub fn issue(&self, enrollment: &Enrollment) -> AppResult<AccessToken> {
        self.issue_at(enrollment, Utc::now())
    }

    pub fn issue_at(&self, enrollment: &Enrollment, issued_at: DateTime<Utc>) -> AppResult<AccessToken> {
        let claims = Claims {
            enrollment: enrollment.as_str().to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map(AccessToken)
            .map_err(|e| AppError::TokenIssueError(e.to_string()))
    }

    pub fn verify(&self, token: &AccessToken) -> AppResult<Enrollment> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token.as_str(), &self.decoding_key, &validation)
            .map(|data| Enrollment::new(data.claims.enrollment))
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::ExpiredToken,
                _ => AppError::InvalidToken,
            })
    }
}
