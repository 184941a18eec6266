//! Twilio messaging transport.

use crate::config::TwilioConfig;
use async_trait::async_trait;
use pony_express_outbound::{Transport, TransportError};
use serde::Deserialize;

/// Sends message bodies through the Twilio Messages API.
pub struct TwilioTransport {
    http: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from: String,
    to: String,
}

impl TwilioTransport {
    #[must_use]
    pub fn new(http: reqwest::Client, config: &TwilioConfig) -> Self {
        Self {
            http,
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from: config.from.clone(),
            to: config.to.clone(),
        }
    }
}

#[derive(Deserialize)]
struct MessageResource {
    sid: String,
}

#[async_trait]
impl Transport for TwilioTransport {
    async fn send(&self, body: &str) -> Result<String, TransportError> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        );

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("From", self.from.as_str()),
                ("To", self.to.as_str()),
                ("Body", body),
            ])
            .send()
            .await
            .map_err(|e| TransportError::SendFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TransportError::SendFailed {
                reason: format!("status {status}: {detail}"),
            });
        }

        let resource: MessageResource =
            response
                .json()
                .await
                .map_err(|e| TransportError::SendFailed {
                    reason: format!("malformed provider response: {e}"),
                })?;

        Ok(resource.sid)
    }
}
