use crate::domain::model::DomainKind;
use crate::domain::ports::SheetTransport;
use crate::utils::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

/// Acknowledgement returned by the deployed script endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WriteAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Write path of the sync layer: pushes formatted rows to the deployed
/// script endpoint, which clears all data rows below the header of the
/// target sheet and writes these rows verbatim. Full-replace semantics,
/// not an upsert.
pub struct SheetWriter {
    transport: Arc<dyn SheetTransport>,
}

impl SheetWriter {
    pub fn new(transport: Arc<dyn SheetTransport>) -> Self {
        Self { transport }
    }

    pub async fn write(
        &self,
        kind: DomainKind,
        rows: Vec<Vec<Value>>,
        endpoint_url: &str,
        spreadsheet_id: &str,
    ) -> Result<WriteAck> {
        let payload = json!({
            "sheetType": kind.as_str(),
            "data": rows,
            "spreadsheetId": spreadsheet_id,
        });

        tracing::debug!(
            "Pushing {} row(s) of {} to endpoint",
            payload["data"].as_array().map(|a| a.len()).unwrap_or(0),
            kind
        );

        let response = self.transport.post_json(endpoint_url, &payload).await?;
        let ack: WriteAck = serde_json::from_value(response)?;

        if !ack.success {
            let message = ack
                .error
                .or(ack.message)
                .unwrap_or_else(|| "endpoint reported failure".to_string());
            return Err(SyncError::Remote { message });
        }

        Ok(ack)
    }
}
