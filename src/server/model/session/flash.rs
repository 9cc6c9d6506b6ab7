use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{model::api::FlashDto, server::error::Error};

pub const SESSION_FLASH_KEY: &str = "coursehub:flash";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashSeverity {
    Success,
    Warning,
    Danger,
}

impl FlashSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashSeverity::Success => "success",
            FlashSeverity::Warning => "warning",
            FlashSeverity::Danger => "danger",
        }
    }
}

/// A short-lived notice queued in the session by a write path and drained by
/// the next rendered view.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FlashMessage {
    pub severity: FlashSeverity,
    pub message: String,
}

impl FlashMessage {
    /// Append a notice to the session's pending flash messages
    pub async fn push(
        session: &Session,
        severity: FlashSeverity,
        message: impl Into<String>,
    ) -> Result<(), Error> {
        let mut messages: Vec<FlashMessage> = session
            .get(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default();

        messages.push(FlashMessage {
            severity,
            message: message.into(),
        });

        session.insert(SESSION_FLASH_KEY, messages).await?;

        Ok(())
    }

    /// Drain all pending notices; a second take returns an empty list
    pub async fn take(session: &Session) -> Result<Vec<FlashMessage>, Error> {
        Ok(session
            .remove::<Vec<FlashMessage>>(SESSION_FLASH_KEY)
            .await?
            .unwrap_or_default())
    }

    pub fn to_dto(&self) -> FlashDto {
        FlashDto {
            severity: self.severity.as_str().to_string(),
            message: self.message.clone(),
        }
    }
}
