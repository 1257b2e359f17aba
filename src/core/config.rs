//! Contact delivery configuration.
//!
//! Values are captured at compile time with `ContactConfig::from_build_env()`
//! so the WASM bundle carries them. Set `EMAILJS_PUBLIC_KEY`,
//! `EMAILJS_SERVICE_ID` and `EMAILJS_TEMPLATE_ID` when running `cargo leptos`.

/// EmailJS REST endpoint for sending a templated email
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Address the fallback `mailto:` link is sent to
pub const DEFAULT_OPERATOR_ADDRESS: &str = "redshiftwebsolutions@gmail.com";

/// Contact form delivery configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    /// EmailJS public key (safe to ship to the browser)
    pub public_key: Option<String>,

    /// EmailJS service identifier
    pub service_id: Option<String>,

    /// EmailJS template identifier
    pub template_id: Option<String>,

    /// Recipient of the fallback mail link
    pub operator_address: String,

    /// Send endpoint, overridable for staging proxies
    pub endpoint: String,
}

impl ContactConfig {
    /// Build from variables captured when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("EMAILJS_PUBLIC_KEY"),
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("CONTACT_OPERATOR_ADDRESS"),
            option_env!("EMAILJS_ENDPOINT"),
        )
    }

    fn from_parts(
        public_key: Option<&str>,
        service_id: Option<&str>,
        template_id: Option<&str>,
        operator_address: Option<&str>,
        endpoint: Option<&str>,
    ) -> Self {
        let non_blank = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Self {
            public_key: non_blank(public_key),
            service_id: non_blank(service_id),
            template_id: non_blank(template_id),
            operator_address: non_blank(operator_address)
                .unwrap_or_else(|| DEFAULT_OPERATOR_ADDRESS.to_string()),
            endpoint: non_blank(endpoint).unwrap_or_else(|| EMAILJS_SEND_URL.to_string()),
        }
    }

    /// Check if the public key is configured
    pub fn has_public_key(&self) -> bool {
        self.public_key.is_some()
    }

    /// Whether remote delivery can be attempted at all
    pub fn is_delivery_configured(&self) -> bool {
        self.public_key.is_some() && self.service_id.is_some() && self.template_id.is_some()
    }

    /// Service and template ids, when both are present
    pub fn template_ref(&self) -> Option<(&str, &str)> {
        Some((self.service_id.as_deref()?, self.template_id.as_deref()?))
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self::from_parts(None, None, None, None, None)
    }
}
