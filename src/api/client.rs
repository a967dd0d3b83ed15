use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use tracing::{debug, info, warn};

use super::auth::get_access_token;
use crate::config::{AuthConfig, Config};
use crate::error::{GraphError, Result};
use crate::types::{AccessToken, Collection, Message, SendMailRequest};

/// Microsoft Graph client for app-only mail and chat access.
///
/// Holds no token: every call takes the bearer string explicitly, and the
/// target user is always a parameter rather than ambient configuration.
pub struct GraphClient {
    http: Client,
    base_url: String,
    auth: AuthConfig,
}

impl GraphClient {
    /// Create a new Graph client
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .timeout(Duration::from_secs(config.api.timeout))
                .build()?,
            base_url: config.api.graph_base_url.trim_end_matches('/').to_string(),
            auth: config.auth.clone(),
        })
    }

    /// Exchange the configured client credentials for an access token
    pub async fn get_access_token(&self) -> Result<AccessToken> {
        get_access_token(&self.http, &self.auth).await
    }

    fn user_url(&self, user: &str, resource: &str) -> String {
        format!("{}/users/{}/{}", self.base_url, user, resource)
    }

    fn auth_headers(token: &str) -> Result<HeaderMap> {
        if token.trim().is_empty() {
            return Err(GraphError::InvalidInput("access token must not be empty".into()));
        }
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                GraphError::InvalidInput("access token is not a valid header value".into())
            })?,
        );
        Ok(headers)
    }

    async fn api_error(res: Response) -> GraphError {
        let status = res.status();
        let body = match res.text().await {
            Ok(body) => body,
            Err(e) => format!("<failed to read response body: {}>", e),
        };
        warn!(%status, "Graph request failed");
        GraphError::ApiRequest {
            status: status.as_u16(),
            body,
        }
    }

    /// GET a collection and return the entries under `value`, in server order
    async fn get_collection(&self, token: &str, url: &str) -> Result<Vec<Message>> {
        let headers = Self::auth_headers(token)?;
        debug!(%url, "GET");

        let res = self.http.get(url).headers(headers).send().await?;

        if res.status().is_success() {
            let body = res.text().await?;
            let collection: Collection = serde_json::from_str(&body)?;
            Ok(collection.value)
        } else {
            Err(Self::api_error(res).await)
        }
    }

    // ==================== OUTLOOK MAIL ====================

    /// List a mailbox's messages
    pub async fn get_outlook_emails(&self, token: &str, user: &str) -> Result<Vec<Message>> {
        let url = self.user_url(user, "messages");
        self.get_collection(token, &url).await
    }

    /// Send a plain-text email as `sender`. Never retried.
    pub async fn send_outlook_email<S: AsRef<str>>(
        &self,
        token: &str,
        sender: &str,
        subject: &str,
        body: &str,
        recipients: &[S],
    ) -> Result<()> {
        if recipients.is_empty() {
            return Err(GraphError::InvalidInput(
                "at least one recipient is required".into(),
            ));
        }
        if recipients.iter().any(|r| r.as_ref().trim().is_empty()) {
            return Err(GraphError::InvalidInput(
                "recipient addresses must not be empty".into(),
            ));
        }

        let mut headers = Self::auth_headers(token)?;
        headers.insert(
            HeaderName::from_static("content-type"),
            HeaderValue::from_static("application/json"),
        );

        let url = self.user_url(sender, "sendMail");
        let request = SendMailRequest::text(subject, body, recipients);
        debug!(%url, recipients = recipients.len(), "POST");

        let res = self
            .http
            .post(&url)
            .headers(headers)
            .body(serde_json::to_string(&request)?)
            .send()
            .await?;

        if res.status().is_success() {
            info!(status = %res.status(), "mail accepted");
            Ok(())
        } else {
            Err(Self::api_error(res).await)
        }
    }

    // ==================== TEAMS CHATS ====================

    /// List a user's chats
    pub async fn get_teams_messages(&self, token: &str, user: &str) -> Result<Vec<Message>> {
        let url = self.user_url(user, "chats");
        self.get_collection(token, &url).await
    }
}
