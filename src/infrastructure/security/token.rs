// src/infrastructure/security/token.rs
use crate::application::ports::security::{TokenCodec, TokenError};
use crate::domain::user::UserId;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

/// Fixed not-before anchor embedded in every token:
/// 2015-10-10T12:00:00Z as a unix timestamp.
const NOT_BEFORE_ANCHOR: i64 = 1_444_478_400;

/// The viewer id travels as a fixed-width unsigned integer. Codecs that
/// decode numeric claims as floats lose precision past 2^53; pinning the
/// claim type avoids that.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    uid: u64,
    nbf: i64,
}

/// HS256-signed identity tokens over a shared symmetric secret.
pub struct HmacTokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl HmacTokenCodec {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry no expiry; only the signature and algorithm matter.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenCodec for HmacTokenCodec {
    fn issue(&self, viewer: UserId) -> String {
        let claims = Claims {
            uid: u64::try_from(i64::from(viewer)).expect("user ids are positive"),
            nbf: NOT_BEFORE_ANCHOR,
        };
        // HMAC signing over an in-memory key is deterministic and cannot
        // fail at runtime; a failure here is a configuration bug.
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .expect("HMAC token signing failed")
    }

    fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|err| {
            match err.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidAlgorithm => TokenError::WrongAlgorithm,
                _ => TokenError::Malformed,
            }
        })?;

        let id = i64::try_from(data.claims.uid).map_err(|_| TokenError::Malformed)?;
        UserId::new(id).map_err(|_| TokenError::Malformed)
    }
}
