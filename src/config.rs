use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

/// `<meta name="activity-board:api-base" content="https://...">` overrides the API origin.
pub const API_BASE_META: &str = "activity-board:api-base";

/// How long a status message stays visible.
pub const MESSAGE_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix for every endpoint; empty means same origin.
    pub api_base: String,
    pub message_timeout_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_timeout_ms: MESSAGE_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Defaults, with the API base taken from the page's meta tag when present.
    pub fn from_document() -> Self {
        let mut cfg = Self::default();
        if let Some(base) = read_meta(API_BASE_META) {
            cfg.api_base = normalize_base(&base);
        }
        cfg
    }
}

fn read_meta(name: &str) -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let el = doc
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()?;
    let meta = el.dyn_into::<HtmlMetaElement>().ok()?;
    let content = meta.content();
    if content.trim().is_empty() {
        None
    } else {
        Some(content)
    }
}

pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
