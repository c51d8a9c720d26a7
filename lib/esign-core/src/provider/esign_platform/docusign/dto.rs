use serde::{Deserialize, Serialize};

pub(super) const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

#[derive(Debug, Serialize)]
pub(super) struct JwtBearerGrantForm {
    pub grant_type: &'static str,
    pub assertion: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(super) struct JwtGrantClaims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
    pub scope: String,
}
