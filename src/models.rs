//! Batch input / output records.
//!
//! Input is jsonlines, one request per line:
//! `{"count": 2, "singular": "item", "plural": "items"}`
//!
//! With `--json`, every request is answered by one `Pluralized` object.

use serde::{Deserialize, Serialize};

use crate::count::Quantity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Singular,
    Plural,
}

impl Form {
    /// Pick the text matching this form.
    pub const fn pick<'a>(self, singular: &'a str, plural: &'a str) -> &'a str {
        match self {
            Self::Singular => singular,
            Self::Plural => plural,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Request {
    pub count: Quantity,
    pub singular: String,
    pub plural: String,
}

#[derive(Debug, Serialize)]
pub struct Pluralized {
    pub count: Quantity,
    pub form: Form,
    pub text: String,
}
