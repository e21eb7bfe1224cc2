//! Version command implementation

use crate::ui::json;

pub fn cmd_version(json_mode: bool) {
    if json_mode {
        let _ = json::emit(serde_json::json!({
            "event": "version",
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        }));
    } else {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    }
}
