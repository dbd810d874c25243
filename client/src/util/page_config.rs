//! Planner configuration embedded in the host page.
//!
//! The page may carry `<script type="application/json" id="planner-config">`.
//! Missing or blank means defaults. Anything that fails to parse or validate
//! is logged and replaced by defaults; the planner always mounts.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use canvas::config::PlannerConfig;

/// DOM id of the embedded config element.
pub const CONFIG_ELEMENT_ID: &str = "planner-config";

/// Resolve raw config text into a usable config.
pub fn parse_config(raw: Option<&str>) -> PlannerConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return PlannerConfig::default();
    };
    match PlannerConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring planner config: {err}");
            PlannerConfig::default()
        }
    }
}

/// Read the embedded config from the current document.
#[cfg(feature = "csr")]
pub fn read_page_config() -> PlannerConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    parse_config(raw.as_deref())
}
