//! Error type for the browser widget.

use cropbox_core::CropError;
use thiserror::Error;

/// Errors raised while wiring the widget into a page.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// A browser API call failed
    #[error("DOM error: {0}")]
    Dom(String),

    /// A required page object is unavailable
    #[error("Missing {0}")]
    Missing(&'static str),

    /// Options or crop geometry were rejected by the core
    #[error(transparent)]
    Crop(#[from] CropError),
}

impl WidgetError {
    /// Create a DOM error with a message.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WidgetError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WidgetError> for wasm_bindgen::JsValue {
    fn from(error: WidgetError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(WidgetError::dom("boom").to_string(), "DOM error: boom");
        assert_eq!(
            WidgetError::Missing("document body").to_string(),
            "Missing document body"
        );

        let crop: WidgetError = CropError::invalid_option("minWidth", -3.0).into();
        assert_eq!(
            crop.to_string(),
            "Invalid option 'minWidth': -3 (expected a positive distance)"
        );
    }
}
