//! Remote email delivery
//!
//! `DeliveryClient` is the seam the submission controller talks to.
//! `EmailJsClient` posts to the EmailJS REST API from the browser.

use std::future::Future;

use serde::Serialize;

use super::config::ContactConfig;
use super::form::TemplateParams;

/// Delivery failure reasons
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("Email delivery is not available")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Sends a templated email
pub trait DeliveryClient {
    /// Resolves with `Ok(())` once the service accepted the message
    fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> impl Future<Output = Result<(), DeliveryError>>;
}

/// Client for the EmailJS REST API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsClient {
    public_key: String,
    endpoint: String,
}

#[cfg_attr(feature = "ssr", allow(dead_code))]
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

impl EmailJsClient {
    /// Initialize with the account's public key
    pub fn init(public_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Returns `None` unless key, service and template are all configured
    pub fn from_config(config: &ContactConfig) -> Option<Self> {
        if !config.is_delivery_configured() {
            return None;
        }
        let public_key = config.public_key.as_deref()?;
        Some(Self::init(public_key, config.endpoint.as_str()))
    }

    #[cfg_attr(feature = "ssr", allow(dead_code))]
    fn request_body<'a>(
        &'a self,
        service_id: &'a str,
        template_id: &'a str,
        params: &'a TemplateParams,
    ) -> SendRequest<'a> {
        SendRequest {
            service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        }
    }
}

impl DeliveryClient for EmailJsClient {
    #[cfg(not(feature = "ssr"))]
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<(), DeliveryError> {
        use gloo_net::http::Request;

        let body = self.request_body(service_id, template_id, params);

        let response = Request::post(&self.endpoint)
            .json(&body)
            .map_err(|e| DeliveryError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| DeliveryError::Request(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(DeliveryError::Rejected {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }

    #[cfg(feature = "ssr")]
    async fn send(
        &self,
        _service_id: &str,
        _template_id: &str,
        _params: &TemplateParams,
    ) -> Result<(), DeliveryError> {
        Err(DeliveryError::Unavailable)
    }
}
