#![cfg(target_family = "wasm")]

use anyhow::anyhow;
use gloo_timers::future::TimeoutFuture;
use mealplanner_ui::{
	app::LOADING_CLASS,
	bindings,
	config::AppConfig,
	dom::{
		self, Attributes, AutoHide, AutoHideOptions, Combo, ComboOptions, HoverCard, HoverViewOptions, Menu,
		MenuOptions, MenuState, TextInput, TextInputOptions,
	},
	session::{FetchStatus, User, UserList},
	util::web_ext::ElementExt,
	App,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn body() -> HtmlElement {
	gloo_utils::document().body().unwrap()
}

fn div() -> Element {
	let element = gloo_utils::document().create_element("div").unwrap();
	body().append_child(&element).unwrap();
	element
}

fn dispatch(target: &Element, name: &str) {
	let event = web_sys::Event::new(name).unwrap();
	target.dispatch_event(&event).unwrap();
}

fn click(target: &Element) {
	target.unchecked_ref::<HtmlElement>().click();
}

fn input() -> HtmlInputElement {
	let element = gloo_utils::document().create_element("input").unwrap();
	body().append_child(&element).unwrap();
	element.unchecked_into()
}

fn by_id(id: &str) -> Option<Element> {
	gloo_utils::document().get_element_by_id(id)
}

async fn next_frame() {
	TimeoutFuture::new(0).await;
}

#[wasm_bindgen_test]
fn make_with_attributes_and_content() {
	let attributes = Attributes::from([("href", "#about"), ("class", "section")]);
	let link = dom::make("a", Some(&attributes), Some("About")).unwrap();
	assert_eq!(link.tag_name(), "A");
	assert_eq!(link.get_attribute("href").as_deref(), Some("#about"));
	assert_eq!(link.class_name(), "section");
	assert_eq!(link.inner_html(), "About");
}

#[wasm_bindgen_test]
fn make_with_html_string() {
	let head = dom::make("div", Some(&Attributes::from("Libraries")), None).unwrap();
	assert_eq!(head.inner_html(), "Libraries");
}

#[wasm_bindgen_test]
fn append_new_appends() {
	let parent = div();
	let child = dom::append_new(&parent, "br", None, None).unwrap();
	assert_eq!(parent.last_element_child(), Some(child));
}

#[wasm_bindgen_test]
fn exported_append_new_returns_parent() {
	let parent = div();
	let returned = bindings::append_new(&parent, "span", JsValue::UNDEFINED, Some("x".into())).unwrap();
	assert_eq!(returned, parent);
	assert_eq!(parent.last_element_child().unwrap().tag_name(), "SPAN");
}

#[wasm_bindgen_test]
fn exported_zfill_takes_numbers_and_strings() {
	assert_eq!(bindings::zfill(JsValue::from(5), 3), "005");
	assert_eq!(bindings::zfill(JsValue::from(9996), 4), "9996");
	assert_eq!(bindings::zfill(JsValue::from_str("7"), 2), "07");
}

#[wasm_bindgen_test]
fn icons() {
	let icon = dom::make_icon("ui-icon-help", true).unwrap();
	assert_eq!(icon.tag_name(), "SPAN");
	assert_eq!(icon.class_name(), "ui-icon inline ui-icon-help large");
	let remove = dom::make_remove_icon().unwrap();
	assert_eq!(remove.class_name(), "remove ui-icon ui-icon-close");
}

#[wasm_bindgen_test]
fn auto_hide_follows_hover() {
	let handle = div();
	let target = div();
	let behavior = AutoHide::attach(
		&target,
		&AutoHideOptions {
			handle: Some(handle.clone()),
		},
	)
	.unwrap();
	assert!(target.is_hidden());
	dispatch(&handle, "mouseenter");
	assert!(!target.is_hidden());
	dispatch(&handle, "mouseleave");
	assert!(target.is_hidden());
	drop(behavior);
}

#[wasm_bindgen_test]
fn auto_hide_without_handle_is_noop() {
	let target = div();
	assert!(AutoHide::attach(&target, &AutoHideOptions::default()).is_none());
	assert!(!target.is_hidden());
}

#[wasm_bindgen_test]
fn menu_toggles_on_click() {
	let handle = div();
	handle.set_text_content(Some("Alice"));
	let container = div();
	let panel = dom::append_new(&container, "div", None, Some("items")).unwrap();
	let menu = Menu::attach(
		&panel,
		&MenuOptions {
			handle: Some(handle.clone()),
		},
	)
	.unwrap()
	.unwrap();

	assert_eq!(panel.parent_element(), Some(body().into()));
	assert!(panel.has_class("menu"));
	assert!(panel.is_hidden());
	let icon = handle.first_element_child().unwrap();
	assert!(icon.has_class(dom::COLLAPSED_ICON));

	click(&handle);
	assert!(menu.state().is_shown());
	assert!(!panel.is_hidden());
	assert!(icon.has_class(dom::EXPANDED_ICON));
	assert!(!icon.has_class(dom::COLLAPSED_ICON));

	click(&handle);
	assert_eq!(menu.state(), MenuState::Hidden);
	assert!(panel.is_hidden());
	assert!(icon.has_class(dom::COLLAPSED_ICON));
}

#[wasm_bindgen_test]
fn menu_opens_under_handle_content() {
	let handle = div();
	handle
		.set_attribute("style", "height: 20px; padding: 5px; border: 2px solid black")
		.unwrap();
	assert_eq!(handle.content_height(), 20.0);
	assert_eq!(handle.outer_height(), 34.0);

	let panel = div();
	let menu = Menu::attach(
		&panel,
		&MenuOptions {
			handle: Some(handle.clone()),
		},
	)
	.unwrap()
	.unwrap();
	click(&handle);
	let offset = handle.offset();
	assert_eq!(
		menu.state(),
		MenuState::Shown {
			top: offset.top + 20.0,
			left: offset.left,
		}
	);
}

#[wasm_bindgen_test]
fn hover_view_styles() {
	let card = div();
	let options = HoverViewOptions {
		left: Some(150.0),
		right: Some(400.0),
		top: Some(20.0),
	};
	dom::hover_view(&card, &options);
	let style = card.unchecked_ref::<HtmlElement>().style();
	assert!(card.has_class("hover-view"));
	assert_eq!(style.get_property_value("left").unwrap(), "150px");
	assert_eq!(style.get_property_value("right").unwrap(), "");
	assert_eq!(style.get_property_value("top").unwrap(), "20px");
}

fn alice() -> UserList {
	UserList::new(vec![User {
		name: "Alice".into(),
		logout_url: "/logout".into(),
	}])
}

#[wasm_bindgen_test]
async fn session_render_replaces_region() {
	let container = div();
	let region = div();
	region.set_inner_html("<em>stale</em>");
	let app = App::new(AppConfig::default(), container, region.clone());
	next_frame().await;
	assert_eq!(region.text_content().unwrap_or_default(), "");

	app.replace_users(alice());
	app.render();
	next_frame().await;
	let links = region.query_selector_all("a.sign-out").unwrap();
	assert_eq!(links.length(), 1);
	let link = region.query_selector("a.sign-out").unwrap().unwrap();
	assert_eq!(link.get_attribute("href").as_deref(), Some("/logout"));
	assert!(region.text_content().unwrap().starts_with("Alice"));
	let rendered = region.inner_html();

	app.render();
	next_frame().await;
	assert_eq!(region.inner_html(), rendered);

	app.replace_users(UserList::default());
	next_frame().await;
	assert_eq!(region.query_selector("a.sign-out").unwrap(), None);
	assert_eq!(region.text_content().unwrap_or_default(), "");
}

#[wasm_bindgen_test]
async fn text_input_selects_on_focus() {
	let field = input();
	field.set_value("Spaghetti");
	let behavior = TextInput::attach(&field, &TextInputOptions::default());
	assert!(field.has_class("ui-widget"));
	assert_eq!(field.get_attribute("size").as_deref(), Some("20"));

	field.focus().unwrap();
	dispatch(&field, "focus");
	TimeoutFuture::new(50).await;
	assert_eq!(field.selection_start().unwrap(), Some(0));
	assert_eq!(field.selection_end().unwrap(), Some(9));
	drop(behavior);
}

fn meal_types() -> ComboOptions {
	ComboOptions {
		source: ["Entree", "Side", "Dessert"].map(String::from).to_vec(),
		min_length: 3,
	}
}

#[wasm_bindgen_test]
fn combo_button_lists_everything_and_mousedown_picks() {
	let field = input();
	let combo = Combo::attach(&field, &meal_types()).unwrap();
	assert_eq!(field.next_element_sibling().as_ref(), Some(combo.button()));
	assert!(!combo.autocomplete().is_open());

	click(combo.button());
	assert!(combo.autocomplete().is_open());
	let items = combo.autocomplete().list().query_selector_all("li").unwrap();
	assert_eq!(items.length(), 3);

	let dessert: Element = items.get(2).unwrap().unchecked_into();
	let init = web_sys::EventInit::new();
	init.set_bubbles(true);
	let event = web_sys::Event::new_with_event_init_dict("mousedown", &init).unwrap();
	dessert.dispatch_event(&event).unwrap();
	assert_eq!(field.value(), "Dessert");
	assert!(!combo.autocomplete().is_open());
}

#[wasm_bindgen_test]
fn combo_closes_on_blur_and_cleans_up_on_drop() {
	let field = input();
	let combo = Combo::attach(&field, &meal_types()).unwrap();
	click(combo.button());
	assert!(combo.autocomplete().is_open());
	dispatch(&field, "blur");
	assert!(!combo.autocomplete().is_open());

	let list = combo.autocomplete().list().clone();
	assert!(list.parent_node().is_some());
	drop(combo);
	assert!(list.parent_node().is_none());
}

fn card_trigger() -> Element {
	let trigger = div();
	trigger
		.set_attribute("style", "position: absolute; top: 100px; left: 30px; width: 80px; height: 16px")
		.unwrap();
	trigger
}

fn card_with_id(id: &'static str) -> impl Fn(&Element) -> Result<(), mealplanner_ui::util::error::Error> {
	move |card| {
		card.set_id(id);
		card.set_text_content(Some("Lasagna"));
		Ok(())
	}
}

#[wasm_bindgen_test]
async fn hover_card_appears_under_trigger_and_dismisses_on_click() {
	let trigger = card_trigger();
	let hover = HoverCard::attach(&trigger, card_with_id("card-click"));
	dispatch(&trigger, "mouseenter");
	TimeoutFuture::new(100).await;
	assert!(by_id("card-click").is_none());

	TimeoutFuture::new(1000).await;
	let card = by_id("card-click").unwrap();
	assert!(card.has_class("hover-view"));
	let style = card.unchecked_ref::<HtmlElement>().style();
	assert_eq!(style.get_property_value("top").unwrap(), "118px");
	assert_eq!(style.get_property_value("left").unwrap(), "30px");
	assert!(!card.is_hidden());

	click(&card);
	assert!(by_id("card-click").is_none());
	drop(hover);
}

#[wasm_bindgen_test]
async fn hover_card_needs_the_full_delay() {
	let trigger = card_trigger();
	let hover = HoverCard::attach(&trigger, card_with_id("card-leave"));
	dispatch(&trigger, "mouseenter");
	TimeoutFuture::new(100).await;
	dispatch(&trigger, "mouseleave");
	TimeoutFuture::new(1100).await;
	assert!(by_id("card-leave").is_none());
	drop(hover);
}

#[wasm_bindgen_test]
async fn dropped_hover_card_never_shows() {
	let trigger = card_trigger();
	let hover = HoverCard::attach(&trigger, card_with_id("card-drop"));
	dispatch(&trigger, "mouseenter");
	drop(hover);
	TimeoutFuture::new(1100).await;
	assert!(by_id("card-drop").is_none());
}

fn bob() -> UserList {
	UserList::new(vec![User {
		name: "Bob".into(),
		logout_url: "/bye".into(),
	}])
}

fn shown_name(region: &Element) -> String {
	region.text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
async fn newest_fetch_wins_over_late_response() {
	let container = div();
	let region = div();
	let app = App::new(AppConfig::default(), container.clone(), region.clone());
	app.load_with(async {
		TimeoutFuture::new(50).await;
		Ok(alice())
	});
	app.load_with(async { Ok(bob()) });
	assert_eq!(app.status(), FetchStatus::InFlight);
	assert!(container.has_class(LOADING_CLASS));

	next_frame().await;
	assert_eq!(app.status(), FetchStatus::Fetched);
	assert!(!container.has_class(LOADING_CLASS));

	TimeoutFuture::new(100).await;
	assert_eq!(app.users(), bob());
	assert!(shown_name(&region).starts_with("Bob"));
}

#[wasm_bindgen_test]
async fn loading_lasts_until_newest_fetch_settles() {
	let container = div();
	let region = div();
	let app = App::new(AppConfig::default(), container.clone(), region.clone());
	app.load_with(async { Ok(alice()) });
	app.load_with(async {
		TimeoutFuture::new(50).await;
		Ok(bob())
	});

	next_frame().await;
	assert_eq!(app.status(), FetchStatus::InFlight);
	assert!(container.has_class(LOADING_CLASS));
	assert_eq!(app.users(), UserList::default());

	TimeoutFuture::new(100).await;
	assert_eq!(app.status(), FetchStatus::Fetched);
	assert!(!container.has_class(LOADING_CLASS));
	assert!(shown_name(&region).starts_with("Bob"));
}

#[wasm_bindgen_test]
async fn failed_fetch_keeps_display() {
	let container = div();
	let region = div();
	let app = App::new(AppConfig::default(), container.clone(), region.clone());
	app.replace_users(alice());
	next_frame().await;

	app.load_with(async { Err(anyhow!("offline")) });
	assert!(container.has_class(LOADING_CLASS));
	next_frame().await;
	assert_eq!(app.status(), FetchStatus::Failed);
	assert!(!container.has_class(LOADING_CLASS));
	assert_eq!(app.users(), alice());
	assert!(region.query_selector("a.sign-out").unwrap().is_some());
}

#[wasm_bindgen_test]
async fn load_once_skips_after_first_fetch() {
	let app = App::new(AppConfig::default(), div(), div());
	assert_eq!(app.status(), FetchStatus::NotCalled);
	app.load_with(async { Ok(alice()) });
	let latest = app.fetch_tracker().latest();
	app.load_current_user_once();
	assert_eq!(app.fetch_tracker().latest(), latest);

	next_frame().await;
	app.load_current_user_once();
	assert_eq!(app.fetch_tracker().latest(), latest);
	assert_eq!(app.status(), FetchStatus::Fetched);
}

#[wasm_bindgen_test]
fn refresh_button_starts_a_fetch() {
	let container = div();
	container.set_inner_html(r#"<button class="refresh">Refresh</button>"#);
	let app = App::new(AppConfig::default(), container.clone(), div());
	assert_eq!(app.fetch_tracker().latest(), 0);

	let button = container.query_selector(".refresh").unwrap().unwrap();
	click(&button);
	assert_eq!(app.fetch_tracker().latest(), 1);
	assert_eq!(app.status(), FetchStatus::InFlight);
	assert!(container.has_class(LOADING_CLASS));
}
