//! Request payloads and decoded records exchanged with the catalogue service.
//!
//! Seeds are what this crate sends; `Created*` records are what the service
//! hands back once it has assigned an identifier.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Identifier assigned by the catalogue service.
pub type RecordId = i64;

/// Literal user record submitted to `POST /users`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UserSeed {
    /// Full display name.
    pub name: &'static str,
    /// Login email, unique per service.
    pub email: &'static str,
    /// Plain-text password accepted by the create endpoint.
    pub password: &'static str,
}

/// Literal category record submitted to `POST /categories`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySeed {
    /// Category name.
    pub name: &'static str,
    /// Short human-readable description.
    pub description: &'static str,
}

/// User record returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUser {
    /// Service-assigned identifier.
    pub id: RecordId,
    /// Name echoed back by the service, when present.
    #[serde(default)]
    pub name: Option<String>,
    /// Email echoed back by the service, when present.
    #[serde(default)]
    pub email: Option<String>,
}

/// Category record returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedCategory {
    /// Service-assigned identifier.
    pub id: RecordId,
    /// Name echoed back by the service, when present.
    #[serde(default)]
    pub name: Option<String>,
    /// Description echoed back by the service, when present.
    #[serde(default)]
    pub description: Option<String>,
}

/// Product price held as whole cents.
///
/// Serialised as a JSON number with at most two decimal places, e.g.
/// `1234.5` for 123 450 cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    cents: u32,
}

impl Price {
    /// Lowest price a generated product may carry (10.00).
    pub const MIN: Self = Self::from_cents(1_000);
    /// Highest price a generated product may carry (5000.00).
    pub const MAX: Self = Self::from_cents(500_000);

    /// Build a price from a whole number of cents.
    #[must_use]
    pub const fn from_cents(cents: u32) -> Self {
        Self { cents }
    }

    /// Return the price in whole cents.
    #[must_use]
    pub const fn cents(self) -> u32 {
        self.cents
    }

    /// Return the price as a floating-point amount for JSON encoding.
    #[expect(
        clippy::float_arithmetic,
        reason = "the API expects prices as JSON numbers; division is exact to two places"
    )]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.cents) / 100.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.cents.div_euclid(100);
        let fraction = self.cents.rem_euclid(100);
        write!(f, "{whole}.{fraction:02}")
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Generated product payload submitted to `POST /products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSeed {
    /// `"{prefix} {adjective} {sequence}"`.
    pub name: String,
    /// Price between [`Price::MIN`] and [`Price::MAX`].
    pub price: Price,
    /// Templated marketing description.
    pub description: String,
    /// Owning user.
    pub user_id: RecordId,
    /// Two or three distinct category identifiers.
    pub category_ids: Vec<RecordId>,
}

/// Point-in-time record counts reported by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// Number of users.
    pub users: usize,
    /// Number of categories.
    pub categories: usize,
    /// Number of products.
    pub products: usize,
}

/// Outcome of the product creation loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductTally {
    /// Products the loop was asked to create.
    pub requested: usize,
    /// Products accepted with status 200 or 201.
    pub created: usize,
    /// Products rejected or lost to transport errors.
    pub failed: usize,
}
