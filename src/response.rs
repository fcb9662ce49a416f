use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

/// A request whose json body decodes into `T`.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub async fn send(self) -> anyhow::Result<T> {
		let response: reqwest::Response = self.builder.send().await?;
		let status = response.status();
		let text = response.text().await?;
		if !status.is_success() {
			return Err(RequestFailed {
				status: status.as_u16(),
				body: text,
			})?;
		}
		Ok(decode(text)?)
	}
}

pub fn decode<T: DeserializeOwned>(text: String) -> Result<T, InvalidJson> {
	match serde_json::from_str(&text) {
		Ok(data) => Ok(data),
		Err(err) => Err(InvalidJson(text, err)),
	}
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("Request failed with status {status}: {body:?}")]
pub struct RequestFailed {
	pub status: u16,
	pub body: String,
}
