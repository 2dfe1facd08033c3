//! Runtime Configuration
//!
//! Resolved once at startup from `<meta>` tags in the host page, then
//! compile-time environment, then defaults.

use log::LevelFilter;
use wasm_bindgen::JsCast;

const DEFAULT_API_BASE: &str = "/api";
const API_BASE_META: &str = "todo-api-base";
const LOG_LEVEL_META: &str = "todo-log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every REST path, without trailing slash; empty means site root
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Read configuration from the current document
    pub fn from_document() -> Self {
        Self::resolve(read_meta(API_BASE_META), read_meta(LOG_LEVEL_META))
    }

    fn resolve(api_base: Option<String>, log_level: Option<String>) -> Self {
        let api_base = api_base
            .or_else(|| option_env!("TODO_API_BASE").map(str::to_string))
            .map(|b| normalize_base(&b))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let log_level = log_level
            .and_then(|l| l.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);
        Self { api_base, log_level }
    }

    /// `{base}/todos`
    pub fn todos_url(&self) -> String {
        format!("{}/todos", self.api_base)
    }

    /// `{base}/todos/{id}`
    pub fn todo_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.api_base, id)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    let content = meta.content();
    if content.trim().is_empty() {
        None
    } else {
        Some(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_overrides_default() {
        let config = AppConfig::resolve(Some("https://example.com/v1/".into()), Some("debug".into()));
        assert_eq!(config.api_base, "https://example.com/v1");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.todos_url(), "https://example.com/v1/todos");
        assert_eq!(config.todo_url(42), "https://example.com/v1/todos/42");
    }

    #[test]
    fn test_bad_log_level_falls_back_to_info() {
        let config = AppConfig::resolve(Some("/api".into()), Some("chatty".into()));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_resolve_without_meta_uses_build_env_or_default() {
        let config = AppConfig::resolve(None, None);
        let expected = option_env!("TODO_API_BASE")
            .map(normalize_base)
            .unwrap_or_else(|| "/api".to_string());
        assert_eq!(config.api_base, expected);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_root_base_serves_todos_from_site_root() {
        let config = AppConfig::resolve(Some("/".into()), None);
        assert_eq!(config.api_base, "");
        assert_eq!(config.todos_url(), "/todos");
        assert_eq!(config.todo_url(5), "/todos/5");
    }

    #[test]
    fn test_default_urls() {
        let config = AppConfig::default();
        assert_eq!(config.todos_url(), "/api/todos");
        assert_eq!(config.todo_url(3), "/api/todos/3");
    }
}
