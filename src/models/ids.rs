//! Strongly-typed ID wrappers for all ledger entities
//!
//! Every entity gets its own newtype over a random UUID, so a client id can
//! never be passed where a bank id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Common behaviour of the entity id newtypes
pub trait EntityId: Copy + Eq + fmt::Display {
    fn uuid(&self) -> &Uuid;

    /// Whether a user-typed reference names this id
    ///
    /// Accepts the full UUID, the short display form (`rec-1a2b3c4d`) or a
    /// UUID prefix of at least 8 characters.
    fn matches_ref(&self, reference: &str) -> bool {
        let reference = reference.trim().to_lowercase();
        let full = self.uuid().to_string();
        reference == full
            || reference == self.to_string()
            || (reference.len() >= 8 && full.starts_with(&reference))
    }
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl EntityId for $name {
            fn uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(ClientId, "cli-");
define_id!(EmployeeId, "emp-");
define_id!(SupplierId, "sup-");
define_id!(BankId, "bnk-");
define_id!(CostCenterId, "cc-");
define_id!(ReceivableId, "rec-");
define_id!(PayableId, "pay-");
define_id!(PayrollEntryId, "fol-");
