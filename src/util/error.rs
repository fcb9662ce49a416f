use wasm_bindgen::JsValue;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
	#[error("no element matches {0:?}")]
	MissingElement(String),
	#[error("document has no body")]
	MissingBody,
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for Error {
	fn from(value: JsValue) -> Self {
		match value.as_string() {
			Some(message) => Self::Js(message),
			None => Self::Js(format!("{value:?}")),
		}
	}
}

impl From<Error> for JsValue {
	fn from(value: Error) -> Self {
		JsValue::from_str(&value.to_string())
	}
}
