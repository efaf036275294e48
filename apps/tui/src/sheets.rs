use menu_core::sheets::{sheet_url, SheetError, SheetSource};
use menu_core::MenuConfig;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Sheet access over HTTP. No timeout and no retries: a failure is
/// reported to the caller as soon as it happens.
#[derive(Debug, Clone)]
pub struct HttpSheets {
    client: Client,
    config: MenuConfig,
}

impl HttpSheets {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub async fn get(&self, sheet: &str) -> Result<Value, SheetError> {
        let url = sheet_url(&self.config, sheet);
        debug!(%url, "fetching sheet");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SheetError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::NotFound {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SheetError::Body(e.to_string()))
    }
}

impl SheetSource for HttpSheets {
    async fn fetch_sheet(&self, sheet: &str) -> Result<Value, SheetError> {
        self.get(sheet).await
    }
}
