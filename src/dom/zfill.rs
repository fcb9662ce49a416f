use std::fmt::Display;

/// Renders `value` left-padded with zeros so it is at least `count` characters long.
///
/// Values that are already long enough are returned unchanged: `zfill(123, 2) == "123"`.
pub fn zfill(value: impl Display, count: usize) -> String {
	let text = value.to_string();
	let width = text.chars().count();
	if width >= count {
		return text;
	}
	let mut padded = "0".repeat(count - width);
	padded.push_str(&text);
	padded
}
