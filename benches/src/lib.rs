//! Benchmark fixtures for cantina.

use cantina_lib::OrderLineItem;
use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

/// Shape of a synthetic order used in benchmarks.
#[derive(Debug, Clone, Copy)]
pub struct OrderShape {
    /// Number of distinct line items.
    pub lines: usize,
    /// Units per line.
    pub quantity: u32,
}

impl OrderShape {
    /// Creates an order shape.
    pub const fn new(lines: usize, quantity: u32) -> Self {
        Self { lines, quantity }
    }

    /// Builds a deterministic order with this shape.
    pub fn build(&self) -> Vec<OrderLineItem> {
        (0..self.lines)
            .filter_map(|i| {
                let minutes = 2.0 + (i % 9) as f64 * 1.5;
                OrderLineItem::new(format!("item-{i}"), self.quantity, minutes).ok()
            })
            .collect()
    }
}

/// Returns one reference time per hour of a day, in UTC.
pub fn reference_times() -> Vec<DateTime<FixedOffset>> {
    let midnight = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap();
    (0..24)
        .map(|hour| (midnight + Duration::hours(hour)).fixed_offset())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_order() {
        let order = OrderShape::new(4, 3).build();
        assert_eq!(order.len(), 4);
        assert!(order.iter().all(|item| item.quantity() == 3));
    }

    #[test]
    fn test_reference_times() {
        assert_eq!(reference_times().len(), 24);
    }
}
