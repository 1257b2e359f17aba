//! Fallback `mailto:` link composition
//!
//! Used when remote delivery is unavailable or rejected: the visitor's own mail
//! client is opened with the message prefilled.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::form::SubmissionRequest;

/// Characters left untouched, matching ECMAScript `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single query component
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn fallback_subject(request: &SubmissionRequest) -> String {
    format!("Contact Form: Message from {}", request.name())
}

pub fn fallback_body(request: &SubmissionRequest) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        request.name(),
        request.email(),
        request.message()
    )
}

/// Builds the `mailto:` link addressed to the site operator
pub fn compose_mailto(recipient: &str, request: &SubmissionRequest) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        encode_component(&fallback_subject(request)),
        encode_component(&fallback_body(request))
    )
}
