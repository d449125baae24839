use std::collections::HashMap;

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// JSON body of a Pub/Sub push delivery.
/// ---
/// The subscription wraps the published message in an envelope;
/// only `message.data` carries the submission payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PushEnvelope {
    pub message: PubsubMessage,
    pub subscription: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PubsubMessage {
    /// Base64-encoded (standard alphabet) UTF-8 JSON document.
    pub data: String,

    #[serde(rename = "messageId")]
    pub message_id: Option<String>,

    #[serde(rename = "publishTime")]
    pub publish_time: Option<DateTime<Utc>>,

    pub attributes: Option<HashMap<String, String>>,
}

impl PubsubMessage {
    /// Decodes `data` from base64, then validates it as UTF-8.
    /// Either failure is an [`Error::Decode`].
    pub fn decode_data(&self) -> Result<String, Error> {
        let bytes = STANDARD
            .decode(&self.data)
            .map_err(|e| Error::Decode(format!("Message data is not valid base64: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| Error::Decode(format!("Message data is not valid UTF-8: {}", e)))
    }
}
