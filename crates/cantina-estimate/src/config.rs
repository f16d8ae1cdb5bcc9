//! Engine configuration.

use std::num::NonZeroU32;

use cantina_types::ConfigError;
use serde::{Deserialize, Serialize};

/// Orders a vendor can work through before it counts as fully loaded.
pub const DEFAULT_CAPACITY: u32 = 15;

/// Multiplier applied to multi-item orders to model parallel stations.
pub const DEFAULT_PARALLEL_EFFICIENCY: f64 = 0.7;

/// Minutes a vendor needs to notice and accept a new order.
pub const DEFAULT_ACCEPTANCE_BUFFER_MINUTES: f64 = 2.0;

/// Longest peak window, in hours. The factor reaches 1.5 at the edges of a
/// window this long and would drop below it beyond.
pub const MAX_PEAK_WINDOW_HOURS: u32 = 5;

/// A contiguous, inclusive range of busy hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPeakWindow")]
pub struct PeakWindow {
    start_hour: u32,
    end_hour: u32,
}

impl PeakWindow {
    /// Late-morning lunch rush, 11:00 to 13:59.
    pub const LUNCH: Self = Self {
        start_hour: 11,
        end_hour: 13,
    };

    /// Early-evening snack rush, 16:00 to 18:59.
    pub const EVENING: Self = Self {
        start_hour: 16,
        end_hour: 18,
    };

    /// Creates a window covering `start_hour..=end_hour`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start_hour > end_hour`, `end_hour > 23`, or the
    /// window spans more than [`MAX_PEAK_WINDOW_HOURS`].
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self, ConfigError> {
        if start_hour > end_hour
            || end_hour > 23
            || end_hour - start_hour >= MAX_PEAK_WINDOW_HOURS
        {
            return Err(ConfigError::PeakWindow {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// Returns the first hour of the window.
    #[must_use]
    pub const fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// Returns the last hour of the window.
    #[must_use]
    pub const fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Returns the number of hours covered.
    #[must_use]
    pub const fn len_hours(&self) -> u32 {
        self.end_hour - self.start_hour + 1
    }

    /// Returns the busiest hour of the window.
    ///
    /// For windows with an even number of hours this is the later of the two
    /// central hours.
    #[must_use]
    pub const fn middle_hour(&self) -> u32 {
        self.start_hour + self.len_hours() / 2
    }

    /// Returns true if `hour` falls inside the window.
    #[must_use]
    pub const fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour <= self.end_hour
    }

    const fn overlaps(&self, other: &Self) -> bool {
        self.start_hour <= other.end_hour && other.start_hour <= self.end_hour
    }
}

#[derive(Debug, Deserialize)]
struct RawPeakWindow {
    start_hour: u32,
    end_hour: u32,
}

impl TryFrom<RawPeakWindow> for PeakWindow {
    type Error = ConfigError;

    fn try_from(raw: RawPeakWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start_hour, raw.end_hour)
    }
}

impl std::fmt::Display for PeakWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00-{:02}:59", self.start_hour, self.end_hour)
    }
}

/// Immutable parameters of the estimation engine.
///
/// The default configuration describes a generic campus vendor. Per-vendor
/// overrides are loaded through [`VendorProfiles`](crate::VendorProfiles).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEngineConfig")]
pub struct EngineConfig {
    capacity: NonZeroU32,
    parallel_efficiency: f64,
    acceptance_buffer_minutes: f64,
    peak_windows: Vec<PeakWindow>,
}

impl EngineConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity is zero, the parallel efficiency is
    /// outside `(0, 1]`, the buffer is negative or not finite, a peak window
    /// is malformed or too long, or any two peak windows overlap.
    pub fn new(
        capacity: u32,
        parallel_efficiency: f64,
        acceptance_buffer_minutes: f64,
        peak_windows: Vec<PeakWindow>,
    ) -> Result<Self, ConfigError> {
        let capacity = NonZeroU32::new(capacity).ok_or(ConfigError::ZeroCapacity)?;

        if !(parallel_efficiency > 0.0 && parallel_efficiency <= 1.0) {
            return Err(ConfigError::ParallelEfficiency(parallel_efficiency));
        }
        if !acceptance_buffer_minutes.is_finite() || acceptance_buffer_minutes < 0.0 {
            return Err(ConfigError::AcceptanceBuffer(acceptance_buffer_minutes));
        }

        for (i, first) in peak_windows.iter().enumerate() {
            PeakWindow::new(first.start_hour, first.end_hour)?;
            if let Some(second) = peak_windows[i + 1..].iter().find(|w| first.overlaps(w)) {
                return Err(ConfigError::OverlappingPeakWindows {
                    first: first.to_string(),
                    second: second.to_string(),
                });
            }
        }

        Ok(Self {
            capacity,
            parallel_efficiency,
            acceptance_buffer_minutes,
            peak_windows,
        })
    }

    /// Returns a copy of this configuration with a different capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` is zero.
    pub fn with_capacity(mut self, capacity: u32) -> Result<Self, ConfigError> {
        self.capacity = NonZeroU32::new(capacity).ok_or(ConfigError::ZeroCapacity)?;
        Ok(self)
    }

    /// Returns the vendor capacity in orders.
    #[must_use]
    pub const fn capacity(&self) -> NonZeroU32 {
        self.capacity
    }

    /// Returns the multi-item parallel preparation multiplier.
    #[must_use]
    pub const fn parallel_efficiency(&self) -> f64 {
        self.parallel_efficiency
    }

    /// Returns the fixed acceptance buffer in minutes.
    #[must_use]
    pub const fn acceptance_buffer_minutes(&self) -> f64 {
        self.acceptance_buffer_minutes
    }

    /// Returns the configured peak windows, in lookup order.
    #[must_use]
    pub fn peak_windows(&self) -> &[PeakWindow] {
        &self.peak_windows
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: NonZeroU32::new(DEFAULT_CAPACITY).unwrap_or(NonZeroU32::MIN),
            parallel_efficiency: DEFAULT_PARALLEL_EFFICIENCY,
            acceptance_buffer_minutes: DEFAULT_ACCEPTANCE_BUFFER_MINUTES,
            peak_windows: default_peak_windows(),
        }
    }
}

/// Unvalidated configuration. Absent fields take the built-in defaults.
#[derive(Debug, Deserialize)]
struct RawEngineConfig {
    #[serde(default = "default_capacity")]
    capacity: u32,
    #[serde(default = "default_parallel_efficiency")]
    parallel_efficiency: f64,
    #[serde(default = "default_acceptance_buffer")]
    acceptance_buffer_minutes: f64,
    #[serde(default = "default_peak_windows")]
    peak_windows: Vec<PeakWindow>,
}

const fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

const fn default_parallel_efficiency() -> f64 {
    DEFAULT_PARALLEL_EFFICIENCY
}

const fn default_acceptance_buffer() -> f64 {
    DEFAULT_ACCEPTANCE_BUFFER_MINUTES
}

fn default_peak_windows() -> Vec<PeakWindow> {
    vec![PeakWindow::LUNCH, PeakWindow::EVENING]
}

impl TryFrom<RawEngineConfig> for EngineConfig {
    type Error = ConfigError;

    fn try_from(raw: RawEngineConfig) -> Result<Self, Self::Error> {
        Self::new(
            raw.capacity,
            raw.parallel_efficiency,
            raw.acceptance_buffer_minutes,
            raw.peak_windows,
        )
    }
}
