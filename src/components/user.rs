use super::Icon;
use crate::session::{SessionDisplay, SIGN_OUT_CLASS, SIGN_OUT_ICON, SIGN_OUT_LABEL};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Default, Properties)]
pub struct UserViewProps {
	pub display: SessionDisplay,
}

/// Name of the signed-in user followed by a sign-out link; empty when nobody is signed in.
#[function_component]
pub fn UserView(UserViewProps { display }: &UserViewProps) -> Html {
	let Some(user) = &display.user else {
		return html!();
	};
	html! {<>
		<span class="user-name">{user.name.clone()}</span>
		<a class={SIGN_OUT_CLASS} href={user.sign_out_href.clone()}>
			<Icon name={SIGN_OUT_ICON} />
			{SIGN_OUT_LABEL}
		</a>
	</>}
}
