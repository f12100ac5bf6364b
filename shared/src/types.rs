use serde::{Deserialize, Serialize};

/// A stored user record, keyed by email.
///
/// Every field is populated at creation time; updates may overwrite the five
/// non-key fields but never clear them or change the email.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserRecord {
    pub email: String,
    pub name: String,
    pub dob: String,
    pub gender: String,
    pub weight: f64,
    pub height: f64,
}

/// Partial update of a user record: every mutable field optional, the key
/// carried separately. This is the store-agnostic update instruction; only
/// the store adapter knows how to turn it into native update syntax.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct UserPatch {
    pub name: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.dob.is_none()
            && self.gender.is_none()
            && self.weight.is_none()
            && self.height.is_none()
    }
}
