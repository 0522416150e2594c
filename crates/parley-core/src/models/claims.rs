//! Caller identity asserted by the API Gateway authorizer.
//!
//! Claims are only ever read for logging. API Gateway has already
//! verified the token by the time a request reaches the function, and
//! nothing here re-validates or rejects on them.

use std::collections::BTreeMap;

use serde_json::Value;

/// Claim keys tried, in order, when naming the caller in logs.
const IDENTITY_KEYS: [&str; 4] = ["email", "cognito:username", "username", "sub"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerClaims(BTreeMap<String, String>);

impl CallerClaims {
    /// Read claims out of a serialized API Gateway request context.
    ///
    /// REST APIs with a Cognito authorizer put them under
    /// `authorizer.claims`; HTTP APIs with a JWT authorizer under
    /// `authorizer.jwt.claims`. Returns `None` when neither is present
    /// or the claims object is empty.
    pub fn from_request_context(context: &Value) -> Option<Self> {
        let claims = context
            .pointer("/authorizer/claims")
            .or_else(|| context.pointer("/authorizer/jwt/claims"))?
            .as_object()?;

        let map: BTreeMap<String, String> = claims
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect();

        if map.is_empty() {
            None
        } else {
            Some(Self(map))
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Best human-readable name for the caller, if any claim carries one.
    pub fn identity(&self) -> Option<&str> {
        IDENTITY_KEYS
            .iter()
            .filter_map(|key| self.get(key))
            .find(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

