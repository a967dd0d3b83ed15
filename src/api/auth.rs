use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Client;
use tracing::{debug, info, warn};

use super::SCOPE_GRAPH;
use crate::config::AuthConfig;
use crate::error::{GraphError, Result};
use crate::types::{AccessToken, TokenResponse};

pub(crate) fn get_epoch_s() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn ensure_present(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GraphError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Acquire an app-only Graph token with the client-credentials grant.
///
/// Fails with [`GraphError::Authentication`] whenever the identity platform
/// does not hand back an `access_token`, whatever the HTTP status.
pub async fn get_access_token(http: &Client, auth: &AuthConfig) -> Result<AccessToken> {
    ensure_present("tenant id", &auth.tenant_id)?;
    ensure_present("client id", &auth.client_id)?;
    ensure_present("client secret", &auth.client_secret)?;
    ensure_present("authority", &auth.authority)?;

    let url = auth.token_url();
    debug!(%url, client_id = %auth.client_id, "requesting client-credentials token");

    let params = [
        ("client_id", auth.client_id.as_str()),
        ("client_secret", auth.client_secret.as_str()),
        ("grant_type", "client_credentials"),
        ("scope", SCOPE_GRAPH),
    ];

    let res = http
        .post(&url)
        .form(&params)
        .send()
        .await
        .map_err(|e| GraphError::Authentication(format!("token request failed: {}", e)))?;
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| GraphError::Authentication(format!("token response unreadable: {}", e)))?;

    let token_data: TokenResponse = match serde_json::from_str(&body) {
        Ok(data) => data,
        Err(_) => {
            warn!(%status, "token endpoint returned a non-JSON body");
            return Err(GraphError::Authentication(format!("{} - {}", status, body)));
        }
    };

    let value = match token_data.access_token {
        Some(value) if !value.is_empty() => value,
        _ => {
            let reason = match (token_data.error, token_data.error_description) {
                (Some(err), Some(desc)) => format!("{}: {}", err, desc),
                (Some(err), None) => err,
                (None, Some(desc)) => desc,
                (None, None) => format!("no access_token in response ({})", status),
            };
            warn!(%status, "token acquisition failed");
            return Err(GraphError::Authentication(reason));
        }
    };

    let expires_in = token_data.expires_in.unwrap_or(3600);
    info!(expires_in, "acquired Graph access token");

    Ok(AccessToken {
        value,
        expires: get_epoch_s() + expires_in,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthConfig {
        AuthConfig {
            tenant_id: "tenant".into(),
            client_id: "client".into(),
            client_secret: "secret".into(),
            authority: "http://127.0.0.1:9/tenant".into(),
        }
    }

    #[tokio::test]
    async fn empty_secret_is_rejected_before_any_request() {
        let mut auth = auth();
        auth.client_secret = String::new();

        let err = get_access_token(&Client::new(), &auth).await.unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput(ref m) if m.contains("client secret")));
    }

    #[tokio::test]
    async fn unreachable_provider_is_an_authentication_error() {
        let err = get_access_token(&Client::new(), &auth()).await.unwrap_err();
        assert!(
            matches!(err, GraphError::Authentication(ref m) if m.starts_with("token request failed")),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn empty_authority_is_rejected() {
        let mut auth = auth();
        auth.authority = " ".into();

        let err = get_access_token(&Client::new(), &auth).await.unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput(_)));
    }
}
