use std::hash::{Hash, Hasher};

use common::CustomerId;
use serde::Serialize;

/// A customer who places orders.
///
/// Equality and hashing only look at the identifier, so two copies of the
/// same customer land in the same group regardless of where they came from.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    tier: u32,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>, tier: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier,
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Loyalty rank; higher is better.
    pub fn tier(&self) -> u32 {
        self.tier
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{}, tier {})", self.name, self.id, self.tier)
    }
}
