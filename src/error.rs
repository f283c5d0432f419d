use thiserror::Error;

/// Reasons a controller could not attach itself to the page.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("browser API `{0}` is unavailable")]
    MissingApi(&'static str),
    #[error("required element `{0}` was not found")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SetupError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(
            SetupError::MissingElement("#navbar").to_string(),
            "required element `#navbar` was not found"
        );
        assert_eq!(
            SetupError::MissingApi("document").to_string(),
            "browser API `document` is unavailable"
        );
    }
}
