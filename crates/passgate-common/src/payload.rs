//! The credential payload embedded inside an encrypted credential blob.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::FromStrVisitor;

/// The kind of holder a credential was issued for.
///
/// Tags other than the builtin ones are carried through as opaque strings.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum CredentialType {
    /// A credential for an employee.
    Employee,

    /// A credential for a visitor.
    Visitor,

    /// A caller-defined credential tag.
    Other(String),
}

impl CredentialType {
    /// The wire representation of the type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Employee => "employee",
            Self::Visitor => "visitor",
            Self::Other(tag) => tag,
        }
    }
}

impl Display for CredentialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CredentialType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("empty credential type"),
            "employee" => Ok(Self::Employee),
            "visitor" => Ok(Self::Visitor),
            other => Ok(Self::Other(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for CredentialType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(FromStrVisitor::new("credential type"))
    }
}

impl Serialize for CredentialType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// The plaintext of an access credential.
///
/// A payload is built fresh for every issued credential and only ever exists
/// in cleartext on its way into, or out of, the cipher.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CredentialPayload {
    /// The user owning the credential.
    pub user_id: u64,

    /// The kind of holder.
    pub credential_type: CredentialType,

    /// Issue instant, in epoch milliseconds.
    pub issued_at: i64,

    /// Expiry instant, in epoch milliseconds.
    ///
    /// The engine does not require this to be after [Self::issued_at].
    pub expiry_time: i64,

    /// Opaque permission labels, in issue order.
    #[serde(default)]
    pub permissions: Vec<String>,

    /// Random hex token making every payload unique.
    pub nonce: String,
}

impl CredentialPayload {
    /// Whether the payload grants the given permission label.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Whether the credential is still usable at `now_ms`.
    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        crate::expiry::is_valid(self.expiry_time, now_ms)
    }
}
