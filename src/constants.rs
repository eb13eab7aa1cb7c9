//! Application-wide constants.

use std::time::Duration;

/// Target interval between UI refreshes.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Capacity of the fetch event channel.
pub const FETCH_EVENT_CAPACITY: usize = 16;

/// Lines jumped by a page scroll.
pub const PAGE_SCROLL_LINES: u16 = 10;

/// Maximum characters of a hash shown in narrow places.
pub const HASH_DISPLAY_LEN: usize = 20;
