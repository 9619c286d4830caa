//! Response envelopes and `status` normalization.
//!
//! Every v1 response is a JSON object. A failing call carries a `status` other than
//! `"OK"` together with a human readable `description` (or `error_message`); a
//! successful one carries the payload under an endpoint specific field name.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// `status` value signalling success.
pub const SUCCESS_STATUS: &str = "OK";

/// Response fields consulted, in order, for a provider error message.
pub const MESSAGE_FIELDS: [&str; 2] = ["description", "error_message"];

/// JavaScript-style truthiness of a JSON value.
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including empty
/// arrays and objects, is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => match n.as_f64() {
            Some(f) => f != 0.0 && !f.is_nan(),
            None => true,
        },
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope(Value);

impl Envelope {
    /// The empty object `{}`.
    #[must_use]
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Wrap a decoded body, substituting `{}` when it is absent or falsy.
    #[must_use]
    pub fn from_body(body: Option<Value>) -> Self {
        match body {
            Some(value) if is_truthy(&value) => Self(value),
            _ => Self::empty(),
        }
    }

    /// The raw `status` field.
    #[must_use]
    pub fn status(&self) -> Option<&Value> {
        self.0.get("status")
    }

    /// True unless the body carries a truthy `status` other than `"OK"`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self.status() {
            Some(status) if is_truthy(status) => status.as_str() == Some(SUCCESS_STATUS),
            _ => true,
        }
    }

    /// Message the provider attached to a failure; empty when it sent none.
    #[must_use]
    pub fn failure_message(&self) -> String {
        MESSAGE_FIELDS
            .iter()
            .filter_map(|name| self.0.get(*name))
            .find(|value| is_truthy(value))
            .map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_default()
    }

    /// The error this envelope signals, if any.
    #[must_use]
    pub fn provider_error(&self) -> Option<Error> {
        if self.is_success() {
            None
        } else {
            Some(Error::provider(self.failure_message(), self.0.clone()))
        }
    }

    /// Borrow a top-level field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Remove and return a top-level field.
    pub fn take_field(&mut self, name: &str) -> Option<Value> {
        self.0.as_object_mut().and_then(|map| map.remove(name))
    }

    /// Borrow the underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the envelope, returning the underlying JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::empty()
    }
}

/// Outcome of one dispatched request: an optional error paired with an envelope.
///
/// Transport failures pair with the empty envelope. Provider failures pair with the
/// body that reported them.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// Transport or provider error, `None` on success
    pub error: Option<Error>,
    /// Decoded body, `{}` when none was available
    pub envelope: Envelope,
}

impl Reply {
    /// Normalize a decoded body into a reply.
    #[must_use]
    pub fn from_body(body: Option<Value>) -> Self {
        let envelope = Envelope::from_body(body);
        Self {
            error: envelope.provider_error(),
            envelope,
        }
    }

    /// A reply for a request that never produced a body.
    #[must_use]
    pub fn failed(error: Error) -> Self {
        Self {
            error: Some(error),
            envelope: Envelope::empty(),
        }
    }

    /// True when no error was recorded.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a `Result`, dropping the envelope on error.
    ///
    /// # Errors
    ///
    /// Returns the recorded transport or provider error.
    pub fn into_result(self) -> Result<Envelope> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.envelope),
        }
    }

    /// Extract one top-level field of a successful reply, untouched.
    ///
    /// A missing or `null` field yields `Ok(None)`. The field's shape is never
    /// checked, so a successful reply cannot fail here.
    ///
    /// # Errors
    ///
    /// Returns the recorded transport or provider error.
    pub fn extract(self, field: &str) -> Result<Option<Value>> {
        let mut envelope = self.into_result()?;
        Ok(envelope.take_field(field).filter(|value| !value.is_null()))
    }
}
