//! Client for the EmailJS REST send endpoint.

use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::config::EmailConfig;
use crate::contact_form::ContactPayload;

/// Body the service acknowledges a delivered message with.
const ACCEPTED_BODY: &str = "OK";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("delivery service answered {status}: {text}")]
    Status { status: u16, text: String },

    #[error("delivery service did not accept the message: {0}")]
    Rejected(String),

    #[error("could not encode request: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for DeliveryError {
    fn from(e: serde_json::Error) -> Self {
        DeliveryError::Encode(e.to_string())
    }
}

impl From<JsValue> for DeliveryError {
    fn from(e: JsValue) -> Self {
        DeliveryError::Request(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    }
}

/// JSON body of `POST /api/v1.0/email/send`.
#[derive(Serialize, Debug)]
pub struct EmailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactPayload,
}

impl<'a> EmailRequest<'a> {
    pub fn new(config: &'a EmailConfig, payload: &'a ContactPayload) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: payload,
        }
    }

    pub fn to_json(&self) -> Result<String, DeliveryError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Decide whether a response means the message went out.
pub fn interpret_response(status: u16, status_text: &str, body: &str) -> Result<(), DeliveryError> {
    if !(200..300).contains(&status) {
        let text = if body.trim().is_empty() { status_text } else { body.trim() };
        return Err(DeliveryError::Status { status, text: text.to_string() });
    }
    if body.trim() == ACCEPTED_BODY {
        Ok(())
    } else {
        Err(DeliveryError::Rejected(body.trim().to_string()))
    }
}

pub struct EmailClient;

impl EmailClient {
    pub async fn send(config: &EmailConfig, payload: &ContactPayload) -> Result<(), DeliveryError> {
        let body = EmailRequest::new(config, payload).to_json()?;
        let (status, status_text, text) = Self::post_json(&config.send_url(), &body).await?;
        interpret_response(status, &status_text, &text)
    }

    async fn post_json(url: &str, body: &str) -> Result<(u16, String, String), JsValue> {
        use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        headers.append("Content-Type", "application/json")?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(body));

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        // Body text is read whatever the status; error bodies carry the reason.
        let text = JsFuture::from(resp.text()?).await?;
        Ok((resp.status(), resp.status_text(), text.as_string().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ContactPayload {
        ContactPayload {
            from_name: "Ada".into(),
            from_email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Line one\nLine \"two\"".into(),
        }
    }

    #[test]
    fn request_matches_the_send_endpoint_shape() {
        let config = EmailConfig::default();
        let payload = payload();
        let json: serde_json::Value =
            serde_json::from_str(&EmailRequest::new(&config, &payload).to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "service_sy5pu2n",
                "template_id": "template_ygoa3xe",
                "user_id": "v5x6oxzGe8agpTANr",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "subject": "Hi",
                    "message": "Line one\nLine \"two\"",
                }
            })
        );
    }

    #[test]
    fn only_ok_bodies_count_as_delivered() {
        assert_eq!(interpret_response(200, "OK", "OK"), Ok(()));
        assert_eq!(interpret_response(200, "OK", "OK\n"), Ok(()));
        assert!(matches!(interpret_response(200, "OK", "queued"), Err(DeliveryError::Rejected(_))));
    }

    #[test]
    fn error_status_prefers_the_body_text() {
        assert_eq!(
            interpret_response(400, "Bad Request", "The Public Key is invalid"),
            Err(DeliveryError::Status { status: 400, text: "The Public Key is invalid".into() })
        );
        assert_eq!(
            interpret_response(503, "Service Unavailable", " "),
            Err(DeliveryError::Status { status: 503, text: "Service Unavailable".into() })
        );
    }
}
