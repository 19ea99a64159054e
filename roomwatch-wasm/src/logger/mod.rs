use wasm_bindgen::JsValue;
use web_sys::console;

pub struct Logger;

impl Logger {
    fn log_msg(level: &str, msg: &str) -> String {
        format!("[ROOMWATCH] [{}] {}", level, msg)
    }

    pub fn info(msg: &str) {
        console::log_1(&Self::log_msg("INFO", msg).into());
    }

    pub fn warn(msg: &str) {
        console::warn_1(&Self::log_msg("WARN", msg).into());
    }

    pub fn error(context: &str, err: &JsValue) {
        console::error_2(&Self::log_msg("ERROR", context).into(), err);
    }

    pub fn debug(msg: &str) {
        console::debug_1(&Self::log_msg("DEBUG", msg).into());
    }
}
