use serde::Deserialize;

const DEFAULT_SERVICE_ID: &str = "service_sy5pu2n";
const DEFAULT_TEMPLATE_ID: &str = "template_ygoa3xe";
const DEFAULT_PUBLIC_KEY: &str = "v5x6oxzGe8agpTANr";
const DEFAULT_API_BASE: &str = "https://api.emailjs.com";

/// Message-delivery (EmailJS) account settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service_id: DEFAULT_SERVICE_ID.to_string(),
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            public_key: DEFAULT_PUBLIC_KEY.to_string(),
            api_base: default_api_base(),
        }
    }
}

impl EmailConfig {
    /// Build from the `EMAILJS_*` variables baked in at compile time, falling
    /// back to the published site's account for anything unset.
    pub fn new() -> Self {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
            option_env!("EMAILJS_API_BASE"),
        )
    }

    fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
        api_base: Option<&str>,
    ) -> Self {
        let pick = |value: Option<&str>, fallback: &str| {
            value.filter(|v| !v.trim().is_empty()).unwrap_or(fallback).to_string()
        };
        Self {
            service_id: pick(service_id, DEFAULT_SERVICE_ID),
            template_id: pick(template_id, DEFAULT_TEMPLATE_ID),
            public_key: pick(public_key, DEFAULT_PUBLIC_KEY),
            api_base: pick(api_base, DEFAULT_API_BASE).trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint for a single templated send.
    pub fn send_url(&self) -> String {
        format!("{}/api/v1.0/email/send", self.api_base.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_values_fall_back_to_the_site_account() {
        let cfg = EmailConfig::from_parts(None, Some(""), Some("pk_live"), None);
        assert_eq!(cfg.service_id, DEFAULT_SERVICE_ID);
        assert_eq!(cfg.template_id, DEFAULT_TEMPLATE_ID);
        assert_eq!(cfg.public_key, "pk_live");
        assert_eq!(cfg.send_url(), "https://api.emailjs.com/api/v1.0/email/send");
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let cfg = EmailConfig::from_parts(None, None, None, Some("http://localhost:9000/"));
        assert_eq!(cfg.send_url(), "http://localhost:9000/api/v1.0/email/send");
    }

    #[test]
    fn runtime_config_uses_camel_case_and_defaults_the_base() {
        let cfg: EmailConfig =
            serde_json::from_str(r#"{"serviceId":"s","templateId":"t","publicKey":"k"}"#).unwrap();
        assert_eq!(cfg.service_id, "s");
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    }
}
