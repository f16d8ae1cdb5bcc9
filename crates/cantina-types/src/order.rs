//! Order line items.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::InvalidInputError;

/// Opaque identifier of a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new item identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single line of an order: one menu item ordered `quantity` times.
///
/// Line items are validated on construction, so a value of this type always
/// carries a non-negative quantity and a finite, non-negative prep time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLineItem")]
pub struct OrderLineItem {
    item_id: ItemId,
    quantity: u32,
    base_prep_time_minutes: f64,
}

impl OrderLineItem {
    /// Creates a validated line item.
    ///
    /// # Errors
    ///
    /// Returns an error if the prep time is negative or not finite.
    pub fn new(
        item_id: impl Into<ItemId>,
        quantity: u32,
        base_prep_time_minutes: f64,
    ) -> Result<Self, InvalidInputError> {
        let item_id = item_id.into();
        if !base_prep_time_minutes.is_finite() {
            return Err(InvalidInputError::NonFinitePrepTime {
                item_id: item_id.to_string(),
            });
        }
        if base_prep_time_minutes < 0.0 {
            return Err(InvalidInputError::NegativePrepTime {
                item_id: item_id.to_string(),
                minutes: base_prep_time_minutes,
            });
        }
        Ok(Self {
            item_id,
            quantity,
            base_prep_time_minutes,
        })
    }

    /// Creates a line item from a signed quantity as it arrives off the wire.
    ///
    /// # Errors
    ///
    /// Returns an error if the quantity is negative or too large, or if the
    /// prep time is negative or not finite.
    pub fn from_signed(
        item_id: impl Into<ItemId>,
        quantity: i64,
        base_prep_time_minutes: f64,
    ) -> Result<Self, InvalidInputError> {
        let item_id = item_id.into();
        if quantity < 0 {
            return Err(InvalidInputError::NegativeQuantity {
                item_id: item_id.to_string(),
                quantity,
            });
        }
        let quantity = u32::try_from(quantity).map_err(|_| InvalidInputError::QuantityOverflow {
            item_id: item_id.to_string(),
            quantity,
        })?;
        Self::new(item_id, quantity, base_prep_time_minutes)
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Returns the ordered quantity.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the per-unit preparation time in minutes.
    #[must_use]
    pub const fn base_prep_time_minutes(&self) -> f64 {
        self.base_prep_time_minutes
    }

    /// Returns the unadjusted preparation time for the whole line.
    #[must_use]
    pub fn total_prep_time_minutes(&self) -> f64 {
        self.base_prep_time_minutes * f64::from(self.quantity)
    }
}

/// Unvalidated line item used for deserialization.
#[derive(Debug, Deserialize)]
struct RawLineItem {
    item_id: String,
    quantity: i64,
    base_prep_time_minutes: f64,
}

impl TryFrom<RawLineItem> for OrderLineItem {
    type Error = InvalidInputError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        Self::from_signed(raw.item_id, raw.quantity, raw.base_prep_time_minutes)
    }
}

impl FromStr for OrderLineItem {
    type Err = InvalidInputError;

    /// Parses `<id>:<quantity>:<minutes>`. The id may itself contain colons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidInputError::MalformedLineItem(s.to_string());

        let mut parts = s.rsplitn(3, ':');
        let minutes = parts.next().ok_or_else(malformed)?;
        let quantity = parts.next().ok_or_else(malformed)?;
        let id = parts.next().filter(|id| !id.is_empty()).ok_or_else(malformed)?;

        let quantity: i64 = quantity.trim().parse().map_err(|_| malformed())?;
        let minutes: f64 = minutes.trim().parse().map_err(|_| malformed())?;
        Self::from_signed(id, quantity, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_new() {
        let item = OrderLineItem::new("burger", 2, 10.0).unwrap();
        assert_eq!(item.item_id().as_str(), "burger");
        assert_eq!(item.quantity(), 2);
        assert!((item.total_prep_time_minutes() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_negative_prep_time_rejected() {
        let err = OrderLineItem::new("fries", 1, -3.0).unwrap_err();
        assert!(matches!(err, InvalidInputError::NegativePrepTime { .. }));
    }

    #[test]
    fn test_non_finite_prep_time_rejected() {
        assert!(OrderLineItem::new("fries", 1, f64::NAN).is_err());
        assert!(OrderLineItem::new("fries", 1, f64::INFINITY).is_err());
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let err = OrderLineItem::from_signed("tea", -1, 2.0).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::NegativeQuantity {
                item_id: "tea".to_string(),
                quantity: -1,
            }
        );
    }

    #[test]
    fn test_zero_quantity_allowed() {
        let item = OrderLineItem::from_signed("tea", 0, 2.0).unwrap();
        assert_eq!(item.total_prep_time_minutes(), 0.0);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: OrderLineItem = serde_json::from_str(
            r#"{"item_id": "dosa", "quantity": 3, "base_prep_time_minutes": 4.5}"#,
        )
        .unwrap();
        assert_eq!(ok.quantity(), 3);

        let bad = serde_json::from_str::<OrderLineItem>(
            r#"{"item_id": "dosa", "quantity": -3, "base_prep_time_minutes": 4.5}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_parse_line_item() {
        let item: OrderLineItem = "veg:wrap:2:7.5".parse().unwrap();
        assert_eq!(item.item_id().as_str(), "veg:wrap");
        assert_eq!(item.quantity(), 2);
        assert!((item.base_prep_time_minutes() - 7.5).abs() < 1e-10);

        assert!("wrap:2".parse::<OrderLineItem>().is_err());
        assert!(":2:7".parse::<OrderLineItem>().is_err());
        assert!("wrap:two:7".parse::<OrderLineItem>().is_err());
        assert!("wrap:-2:7".parse::<OrderLineItem>().is_err());
    }
}
