pub mod error;
pub mod web_ext;

pub fn spawn_local<F, E>(target: &'static str, future: F)
where
	F: futures_util::Future<Output = Result<(), E>> + 'static,
	E: std::fmt::Debug + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = future.await {
			log::error!(target: target, "{err:?}");
		}
	});
}

/// Finds the first element under `parent` matching `selector`.
pub fn query(parent: &web_sys::Document, selector: &str) -> Result<web_sys::Element, error::Error> {
	match parent.query_selector(selector)? {
		Some(element) => Ok(element),
		None => Err(error::Error::MissingElement(selector.to_owned())),
	}
}
