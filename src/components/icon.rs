use crate::dom::icon_classes;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct IconProps {
	/// Variant class, e.g. `ui-icon-person`.
	pub name: AttrValue,
	#[prop_or_default]
	pub large: bool,
}

#[function_component]
pub fn Icon(IconProps { name, large }: &IconProps) -> Html {
	let class = icon_classes(name, *large).join(" ");
	html! { <span {class} /> }
}
