//! Log output: the browser console when running as wasm, stderr otherwise.

/// Text written for a record, prefixed by its target or module path.
fn format_line(record: &log::Record<'_>, prefer_target: bool) -> String {
	let origin = match (prefer_target, record.module_path()) {
		(false, Some(module)) => module,
		_ => record.target(),
	};
	format!("[{}] {origin}: {}", record.level(), record.args())
}

pub mod wasm {
	use log::{Level, LevelFilter, Log, Metadata, Record};
	use wasm_bindgen::JsValue;

	#[derive(Debug, Clone)]
	pub struct Config {
		level: LevelFilter,
		prefer_target: bool,
	}

	impl Default for Config {
		fn default() -> Self {
			Self {
				level: LevelFilter::Trace,
				prefer_target: false,
			}
		}
	}

	impl Config {
		/// Most verbose level this logger writes; `log::set_max_level` may narrow it further.
		pub fn with_level(mut self, level: LevelFilter) -> Self {
			self.level = level;
			self
		}

		/// Label lines with the `target:` given at the log call instead of the module path.
		pub fn prefer_target(mut self) -> Self {
			self.prefer_target = true;
			self
		}
	}

	struct ConsoleLogger(Config);

	impl Log for ConsoleLogger {
		fn enabled(&self, metadata: &Metadata<'_>) -> bool {
			metadata.level() <= self.0.level
		}

		fn log(&self, record: &Record<'_>) {
			if !self.enabled(record.metadata()) {
				return;
			}
			let line = JsValue::from_str(&super::format_line(record, self.0.prefer_target));
			match record.level() {
				Level::Error => web_sys::console::error_1(&line),
				Level::Warn => web_sys::console::warn_1(&line),
				Level::Info => web_sys::console::info_1(&line),
				Level::Debug => web_sys::console::log_1(&line),
				Level::Trace => web_sys::console::debug_1(&line),
			}
		}

		fn flush(&self) {}
	}

	pub fn init(config: Config) {
		let level = config.level;
		if log::set_boxed_logger(Box::new(ConsoleLogger(config))).is_ok() {
			log::set_max_level(level);
		}
	}
}

pub mod native {
	use log::LevelFilter;

	pub fn init(level: LevelFilter) {
		let _ = simplelog::SimpleLogger::init(level, simplelog::Config::default());
	}
}
