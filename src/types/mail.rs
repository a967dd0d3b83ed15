use serde::{Deserialize, Serialize};

/// Email address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddress {
    pub address: String,
}

/// Recipient wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub email_address: EmailAddress,
}

impl Recipient {
    pub fn new(address: &str) -> Self {
        Self {
            email_address: EmailAddress {
                address: address.to_string(),
            },
        }
    }
}

/// Email body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    pub content_type: String,
    pub content: String,
}

/// `sendMail` action payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMailRequest {
    pub message: SendMailMessage,
}

/// Message content for sending
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMailMessage {
    pub subject: String,
    pub body: ItemBody,
    pub to_recipients: Vec<Recipient>,
}

impl SendMailRequest {
    /// Plain-text message to the given addresses
    pub fn text<S: AsRef<str>>(subject: &str, body: &str, recipients: &[S]) -> Self {
        Self {
            message: SendMailMessage {
                subject: subject.to_string(),
                body: ItemBody {
                    content_type: "Text".to_string(),
                    content: body.to_string(),
                },
                to_recipients: recipients
                    .iter()
                    .map(|r| Recipient::new(r.as_ref()))
                    .collect(),
            },
        }
    }
}
