use jsonwebtoken::{Algorithm, EncodingKey, Header};
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};
use url::Url;

use super::dto::JwtGrantClaims;
use crate::provider::esign_platform::error::EsignPlatformError;
use crate::provider::esign_platform::model::{
    ApiSession, JwtGrantRequest, ListStatusChangesOptions,
};

pub(super) fn create_jwt_assertion(
    request: &JwtGrantRequest,
    now: OffsetDateTime,
) -> Result<String, EsignPlatformError> {
    let expires_at = now
        .checked_add(Duration::hours(request.expires_in_hours.into()))
        .ok_or_else(|| {
            EsignPlatformError::MappingError(format!(
                "JWT lifetime of {} hours is out of range",
                request.expires_in_hours
            ))
        })?;

    let claims = JwtGrantClaims {
        iss: request.client_id.to_owned(),
        sub: request.user_id.to_owned(),
        aud: authority(&request.oauth_base_path)?,
        iat: now.unix_timestamp(),
        exp: expires_at.unix_timestamp(),
        scope: request.scopes.join(" "),
    };

    let key = EncodingKey::from_rsa_pem(&request.private_key)?;

    Ok(jsonwebtoken::encode(
        &Header::new(Algorithm::RS256),
        &claims,
        &key,
    )?)
}

/// Host (and non-default port) of the identity provider, used as JWT audience.
pub(super) fn authority(url: &Url) -> Result<String, EsignPlatformError> {
    let host = url
        .host_str()
        .ok_or_else(|| EsignPlatformError::MappingError(format!("missing host in `{url}`")))?;

    Ok(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    })
}

/// `{oauth_base_path}/oauth/{endpoint}`, keeping any path of the base.
pub(super) fn oauth_url(
    oauth_base_path: &Url,
    endpoint: &str,
) -> Result<Url, EsignPlatformError> {
    let mut url = oauth_base_path.to_owned();
    url.path_segments_mut()
        .map_err(|_| {
            EsignPlatformError::MappingError(format!(
                "OAuth base path `{oauth_base_path}` cannot be a base"
            ))
        })?
        .pop_if_empty()
        .extend(["oauth", endpoint]);

    Ok(url)
}

/// `{base_path}/v2.1/accounts/{account_id}/envelopes[/{segments}...]`
pub(super) fn envelopes_url(
    session: &ApiSession,
    segments: &[&str],
) -> Result<Url, EsignPlatformError> {
    let mut url = Url::parse(&session.base_path)?;
    url.path_segments_mut()
        .map_err(|_| {
            EsignPlatformError::MappingError(format!(
                "base path `{}` cannot be a base",
                session.base_path
            ))
        })?
        .pop_if_empty()
        .extend(["v2.1", "accounts", session.account_id.as_str(), "envelopes"])
        .extend(segments);

    Ok(url)
}

pub(super) fn status_changes_url(
    session: &ApiSession,
    options: &ListStatusChangesOptions,
) -> Result<Url, EsignPlatformError> {
    let from_date = options
        .from_date
        .format(&Rfc3339)
        .map_err(|e| EsignPlatformError::MappingError(e.to_string()))?;

    let mut url = envelopes_url(session, &[])?;
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("from_date", &from_date)
            .append_pair("status", &options.status);
        if let Some(start_position) = options.start_position {
            query.append_pair("start_position", &start_position.to_string());
        }
    }

    Ok(url)
}
