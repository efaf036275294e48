use menu_core::sheets::{sheet_url, SheetError, SheetSource};
use menu_core::MenuConfig;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Sheet access through the browser's `fetch`.
pub struct BrowserSheets {
    config: MenuConfig,
}

impl BrowserSheets {
    pub const fn new(config: MenuConfig) -> Self {
        Self { config }
    }
}

impl SheetSource for BrowserSheets {
    async fn fetch_sheet(&self, sheet: &str) -> Result<Value, SheetError> {
        let window =
            web_sys::window().ok_or_else(|| SheetError::Transport("no window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let url = sheet_url(&self.config, sheet);
        let request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|err| SheetError::Transport(format!("{err:?}")))?;

        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| SheetError::Transport(format!("{err:?}")))?;

        let response = response_value
            .dyn_into::<Response>()
            .map_err(|_| SheetError::Transport("Failed to read response".to_string()))?;

        if !response.ok() {
            return Err(SheetError::NotFound {
                status: response.status(),
            });
        }

        let body = response
            .json()
            .map_err(|err| SheetError::Body(format!("{err:?}")))?;
        let json = JsFuture::from(body)
            .await
            .map_err(|err| SheetError::Body(format!("{err:?}")))?;

        serde_wasm_bindgen::from_value::<Value>(json)
            .map_err(|err| SheetError::Body(err.to_string()))
    }
}
