//! Bluetooth Low Energy subsystem.
//!
//! This module drives the Nordic SoftDevice S140 in **Peripheral** role:
//!
//! 1. **Advertiser** - broadcasts connectable advertisements while no
//!    central is connected.
//! 2. **GATT server** - exposes the telemetry service with one
//!    notify-only characteristic and its CCCD.
//! 3. **Link tracker** - the pure connection/subscription state machine,
//!    wrapped in a blocking mutex so SoftDevice event callbacks and the
//!    peripheral loop never race, and mirrored into an atomic for the
//!    telemetry task's fast path.
//!
//! Averaged samples arrive from the telemetry task via a bounded
//! channel defined here.

pub mod adv_data;
pub mod advertiser;
pub mod dispatcher;
pub mod gatt;
pub mod link;
pub mod peripheral;

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::channel::Channel;

use crate::sensor::sampler::Sample;
use link::{LinkEffect, LinkEvent, LinkTracker};

/// Shared link tracker. Mutated only under the lock.
static LINK: Mutex<CriticalSectionRawMutex, RefCell<LinkTracker>> =
    Mutex::new(RefCell::new(LinkTracker::new()));

/// Connection mirror for the telemetry task.
pub static CONNECTED: AtomicBool = AtomicBool::new(false);

/// Averaged samples from the telemetry task to the peripheral loop.
/// Capacity 1 with `try_send`: a sample that finds the slot occupied is
/// dropped, never queued.
pub static SAMPLES: Channel<CriticalSectionRawMutex, Sample, 1> = Channel::new();

/// Apply one link-layer event under the lock and refresh the mirror.
pub fn apply_link_event(event: LinkEvent) -> Option<LinkEffect> {
    LINK.lock(|cell| {
        let mut tracker = cell.borrow_mut();
        let effect = tracker.apply(event);
        CONNECTED.store(tracker.is_connected(), Ordering::Relaxed);
        effect
    })
}

pub fn is_subscribed() -> bool {
    LINK.lock(|cell| cell.borrow().is_subscribed())
}
