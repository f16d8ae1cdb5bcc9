//! Individual estimate factors.
//!
//! Each calculator is a pure function of the order, the queue or the clock
//! hour, so they can be tested and tuned in isolation before the
//! [`Estimator`](crate::Estimator) combines them.

use std::num::NonZeroU32;

use cantina_types::OrderLineItem;

use crate::config::PeakWindow;

/// Most a complex order can stretch the estimate.
pub const MAX_COMPLEXITY_FACTOR: f64 = 1.5;

/// Returns the preparation time of an order before contextual adjustment.
///
/// Orders with more than one line are discounted by `parallel_efficiency`
/// since separate stations can work on them at once. An empty order takes
/// no time.
#[must_use]
pub fn base_time_minutes(items: &[OrderLineItem], parallel_efficiency: f64) -> f64 {
    let raw: f64 = items.iter().map(OrderLineItem::total_prep_time_minutes).sum();
    if items.len() > 1 {
        raw * parallel_efficiency
    } else {
        raw
    }
}

/// Returns the queue backlog multiplier for a vendor.
///
/// The curve is piecewise linear in utilization (`queue_length / capacity`),
/// continuous and steeper the closer the vendor is to capacity. It is not
/// clamped: queues longer than capacity keep extrapolating.
#[must_use]
pub fn load_factor(queue_length: u32, capacity: NonZeroU32) -> f64 {
    if queue_length == 0 {
        return 1.0;
    }

    let utilization = f64::from(queue_length) / f64::from(capacity.get());

    if utilization <= 0.3 {
        1.0
    } else if utilization <= 0.6 {
        1.2 + (utilization - 0.3) * 0.5
    } else if utilization <= 0.9 {
        1.35 + (utilization - 0.6) * 1.0
    } else {
        1.65 + (utilization - 0.9) * 2.0
    }
}

/// Returns the busy-window multiplier for an hour of the day.
///
/// Inside a window the factor peaks at 2.0 on the middle hour and drops by
/// 0.25 per hour away from it. The first window containing `hour` wins.
#[must_use]
pub fn peak_factor(hour: u32, windows: &[PeakWindow]) -> f64 {
    windows
        .iter()
        .find(|window| window.contains(hour))
        .map_or(1.0, |window| {
            let distance = f64::from(hour.abs_diff(window.middle_hour()));
            1.5 + 0.5 * (1.0 - distance / 2.0)
        })
}

/// Returns the coordination overhead multiplier for an order.
///
/// Volume and variety each add up to 0.25, and the total is capped at
/// [`MAX_COMPLEXITY_FACTOR`].
#[must_use]
pub fn complexity_factor(items: &[OrderLineItem]) -> f64 {
    let total_quantity: u64 = items.iter().map(|item| u64::from(item.quantity())).sum();
    let unique_items = items.len();

    let mut complexity = 1.0;

    if total_quantity > 5 {
        complexity += 0.1;
    }
    if total_quantity > 10 {
        complexity += 0.15;
    }

    // Different items usually mean different stations.
    if unique_items > 3 {
        complexity += 0.1;
    }
    if unique_items > 5 {
        complexity += 0.15;
    }

    f64::min(complexity, MAX_COMPLEXITY_FACTOR)
}

/// Returns the confidence attached to an estimate made behind `queue_length`
/// other orders.
#[must_use]
pub const fn confidence(queue_length: u32) -> f64 {
    match queue_length {
        0 => 0.95,
        1..=5 => 0.90,
        6..=10 => 0.85,
        11..=15 => 0.75,
        _ => 0.65,
    }
}

/// Rounds minutes to the nearest half minute, ties to the even half.
#[must_use]
pub fn round_to_half_minute(minutes: f64) -> f64 {
    (minutes * 2.0).round_ties_even() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn item(id: &str, quantity: u32, minutes: f64) -> OrderLineItem {
        OrderLineItem::new(id, quantity, minutes).unwrap()
    }

    fn capacity(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_base_time_single_item() {
        let items = [item("burger", 2, 10.0)];
        assert_relative_eq!(base_time_minutes(&items, 0.7), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_base_time_parallel_discount() {
        let items = [item("samosa", 3, 5.0), item("chai", 4, 5.0)];
        assert_relative_eq!(base_time_minutes(&items, 0.7), 24.5, epsilon = 1e-12);
    }

    #[test]
    fn test_base_time_empty_order() {
        assert_eq!(base_time_minutes(&[], 0.7), 0.0);
    }

    #[test]
    fn test_load_factor_breakpoints() {
        let cap = capacity(15);
        assert_eq!(load_factor(0, cap), 1.0);
        // 4/15 = 0.267
        assert_relative_eq!(load_factor(4, cap), 1.0, epsilon = 1e-12);
        // 6/15 = 0.4
        assert_relative_eq!(load_factor(6, cap), 1.25, epsilon = 1e-12);
        // 9/15 = 0.6
        assert_relative_eq!(load_factor(9, cap), 1.35, epsilon = 1e-12);
        // 12/15 = 0.8
        assert_relative_eq!(load_factor(12, cap), 1.55, epsilon = 1e-12);
        // 20/15 = 1.333
        assert_relative_eq!(load_factor(20, cap), 1.65 + (20.0 / 15.0 - 0.9) * 2.0, epsilon = 1e-12);
        assert_relative_eq!(load_factor(20, cap), 2.5167, epsilon = 1e-4);
    }

    #[test]
    fn test_load_factor_non_decreasing() {
        for cap in [1, 7, 15, 40] {
            let cap = capacity(cap);
            let mut previous = load_factor(0, cap);
            for queue in 1..200 {
                let current = load_factor(queue, cap);
                assert!(
                    current >= previous,
                    "load factor dropped at queue {queue}, capacity {cap}"
                );
                previous = current;
            }
        }
    }

    #[test]
    fn test_peak_factor_default_windows() {
        let windows = [PeakWindow::LUNCH, PeakWindow::EVENING];

        assert_relative_eq!(peak_factor(11, &windows), 1.75, epsilon = 1e-12);
        assert_relative_eq!(peak_factor(12, &windows), 2.0, epsilon = 1e-12);
        assert_relative_eq!(peak_factor(13, &windows), 1.75, epsilon = 1e-12);
        assert_relative_eq!(peak_factor(17, &windows), 2.0, epsilon = 1e-12);

        for hour in (0..11).chain(14..16).chain(19..24) {
            assert_eq!(peak_factor(hour, &windows), 1.0, "hour {hour}");
        }
    }

    #[test]
    fn test_peak_factor_bounded_for_every_window() {
        for start in 0..24 {
            for end in start..24 {
                let Ok(window) = PeakWindow::new(start, end) else {
                    continue;
                };
                for hour in start..=end {
                    let factor = peak_factor(hour, &[window]);
                    assert!(
                        (1.5..=2.0).contains(&factor),
                        "window {window} hour {hour} gave {factor}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_peak_factor_no_windows() {
        assert_eq!(peak_factor(12, &[]), 1.0);
    }

    #[test]
    fn test_peak_factor_first_match_wins() {
        let windows = [PeakWindow::new(10, 11).unwrap(), PeakWindow::new(8, 12).unwrap()];
        // middle of 10..=11 is 11, so hour 10 is one hour away
        assert_relative_eq!(peak_factor(10, &windows), 1.75, epsilon = 1e-12);
    }

    #[test]
    fn test_complexity_thresholds() {
        assert_eq!(complexity_factor(&[]), 1.0);
        assert_eq!(complexity_factor(&[item("a", 5, 1.0)]), 1.0);
        assert_relative_eq!(complexity_factor(&[item("a", 6, 1.0)]), 1.1, epsilon = 1e-12);
        assert_relative_eq!(complexity_factor(&[item("a", 11, 1.0)]), 1.25, epsilon = 1e-12);

        let four: Vec<_> = ["a", "b", "c", "d"].iter().map(|id| item(id, 1, 1.0)).collect();
        assert_relative_eq!(complexity_factor(&four), 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_complexity_capped() {
        let many: Vec<_> = (0..8).map(|i| item(&format!("dish-{i}"), 2, 1.0)).collect();
        // 16 units and 8 lines would be 1.5 exactly; still never above the cap
        assert_relative_eq!(complexity_factor(&many), MAX_COMPLEXITY_FACTOR, epsilon = 1e-12);

        for lines in 0..12 {
            for quantity in 0..15 {
                let items: Vec<_> = (0..lines)
                    .map(|i| item(&format!("x{i}"), quantity, 1.0))
                    .collect();
                let factor = complexity_factor(&items);
                assert!((1.0..=MAX_COMPLEXITY_FACTOR).contains(&factor));
            }
        }
    }

    #[test]
    fn test_confidence_steps() {
        assert_eq!(confidence(0), 0.95);
        assert_eq!(confidence(1), 0.90);
        assert_eq!(confidence(5), 0.90);
        assert_eq!(confidence(6), 0.85);
        assert_eq!(confidence(10), 0.85);
        assert_eq!(confidence(11), 0.75);
        assert_eq!(confidence(15), 0.75);
        assert_eq!(confidence(16), 0.65);
        assert_eq!(confidence(u32::MAX), 0.65);

        let mut previous = confidence(0);
        for queue in 1..100 {
            assert!(confidence(queue) <= previous);
            previous = confidence(queue);
        }
    }

    #[test]
    fn test_round_to_half_minute() {
        assert_eq!(round_to_half_minute(22.0), 22.0);
        assert_eq!(round_to_half_minute(26.5), 26.5);
        assert_eq!(round_to_half_minute(26.74), 26.5);
        assert_eq!(round_to_half_minute(26.76), 27.0);
        // exact quarter ties go to the even number of half minutes
        assert_eq!(round_to_half_minute(26.25), 26.0);
        assert_eq!(round_to_half_minute(26.75), 27.0);
        assert_eq!(round_to_half_minute(0.25), 0.0);
        assert_eq!(round_to_half_minute(0.75), 1.0);
    }
}
