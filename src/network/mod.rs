pub mod config;
pub mod email_client;

pub use config::EmailConfig;
pub use email_client::{DeliveryError, EmailClient};

use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref EMAIL_CONFIG: RwLock<Option<EmailConfig>> = RwLock::new(None);
}

fn store(config: EmailConfig) {
    let mut guard = EMAIL_CONFIG.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Some(config);
}

/// Install the compile-time configuration. Called once from `start()`.
pub fn init_email_config() {
    store(EmailConfig::new());
}

/// Override the delivery settings at runtime, e.g. from the page's bootstrap
/// script: `init_email_config_js({ serviceId, templateId, publicKey, apiBase })`.
#[wasm_bindgen]
pub fn init_email_config_js(config: JsValue) -> Result<(), JsValue> {
    let config: EmailConfig = serde_wasm_bindgen::from_value(config)?;
    crate::debug_log!("Initializing email config from JS: service {}", config.service_id);
    store(config);
    Ok(())
}

/// Active configuration; compile-time defaults if nothing was installed.
pub fn email_config() -> EmailConfig {
    let guard = EMAIL_CONFIG.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone().unwrap_or_else(EmailConfig::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninstalled_config_falls_back_to_compile_time_values() {
        *EMAIL_CONFIG.write().unwrap() = None;
        assert_eq!(email_config(), EmailConfig::new());
    }
}
