//! Preauthorize-device form: a public key plus identity attributes, gated by
//! the organization's device limit.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Accepted devices against the organization's limit. A limit of 0 means the
/// organization has no limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceLimitGate {
    pub accepted: usize,
    pub limit: usize,
}

impl DeviceLimitGate {
    pub fn new(accepted: usize, limit: usize) -> Self {
        Self { accepted, limit }
    }

    pub fn is_maxed(&self) -> bool {
        self.limit > 0 && self.accepted >= self.limit
    }

    pub fn warning(&self) -> Option<String> {
        self.is_maxed().then(|| {
            format!(
                "You have reached your limit of authorized devices: {} of {}",
                self.accepted, self.limit
            )
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityAttribute {
    pub key: String,
    pub value: String,
}

impl IdentityAttribute {
    pub fn is_complete(&self) -> bool {
        !self.key.trim().is_empty() && !self.value.trim().is_empty()
    }
}

/// Body of a preauthorization request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreauthRequest {
    pub pubkey: String,
    pub identity_data: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreauthError {
    #[error("You have reached your limit of authorized devices: {accepted} of {limit}")]
    LimitReached { accepted: usize, limit: usize },
    #[error("A public key is required")]
    MissingKey,
    #[error("At least one identity attribute is required")]
    MissingIdentity,
    #[error("Identity attribute {0} is set more than once")]
    DuplicateAttribute(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreauthForm {
    pub key_file_name: Option<String>,
    pub public_key: String,
    /// Always holds at least one, possibly empty, row.
    pub attributes: Vec<IdentityAttribute>,
    pub error: Option<String>,
    pub gate: DeviceLimitGate,
}

impl Default for PreauthForm {
    fn default() -> Self {
        Self {
            key_file_name: None,
            public_key: String::new(),
            attributes: vec![IdentityAttribute::default()],
            error: None,
            gate: DeviceLimitGate::default(),
        }
    }
}

impl PreauthForm {
    pub fn set_public_key(&mut self, file_name: impl Into<String>, contents: impl Into<String>) {
        self.key_file_name = Some(file_name.into());
        self.public_key = contents.into();
        self.error = None;
    }

    /// Edits row `index`; indices past the end are ignored.
    pub fn set_attribute(&mut self, index: usize, key: &str, value: &str) {
        if let Some(attribute) = self.attributes.get_mut(index) {
            attribute.key = key.to_string();
            attribute.value = value.to_string();
            self.error = None;
        }
    }

    /// A new row can be added once every existing row is filled in.
    pub fn can_add_attribute(&self) -> bool {
        self.attributes.iter().all(IdentityAttribute::is_complete)
    }

    pub fn add_attribute(&mut self) -> bool {
        if !self.can_add_attribute() {
            return false;
        }
        self.attributes.push(IdentityAttribute::default());
        true
    }

    pub fn remove_attribute(&mut self, index: usize) {
        if index < self.attributes.len() {
            self.attributes.remove(index);
        }
        if self.attributes.is_empty() {
            self.attributes.push(IdentityAttribute::default());
        }
    }

    pub fn limit_maxed(&self) -> bool {
        self.gate.is_maxed()
    }

    pub fn can_save(&self) -> bool {
        self.submission().is_ok()
    }

    /// Validates the form into a request. Incomplete rows are left out.
    pub fn submission(&self) -> Result<PreauthRequest, PreauthError> {
        if self.gate.is_maxed() {
            return Err(PreauthError::LimitReached {
                accepted: self.gate.accepted,
                limit: self.gate.limit,
            });
        }
        let pubkey = self.public_key.trim();
        if pubkey.is_empty() {
            return Err(PreauthError::MissingKey);
        }

        let mut identity_data = BTreeMap::new();
        for attribute in self.attributes.iter().filter(|a| a.is_complete()) {
            let key = attribute.key.trim().to_string();
            if identity_data.contains_key(&key) {
                return Err(PreauthError::DuplicateAttribute(key));
            }
            identity_data.insert(key, attribute.value.trim().to_string());
        }
        if identity_data.is_empty() {
            return Err(PreauthError::MissingIdentity);
        }

        Ok(PreauthRequest {
            pubkey: pubkey.to_string(),
            identity_data,
        })
    }

    /// Clears the inputs for the next device; the limit gate is kept.
    pub fn reset(&mut self) {
        *self = Self {
            gate: self.gate,
            ..Self::default()
        };
    }
}
