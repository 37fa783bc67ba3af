//! Connection and subscription tracking.
//!
//! The tracker is a pure state machine: link-layer events go in,
//! advertising effects come out. It owns the single peer slot and the
//! notification opt-in flag; everything else reads it through queries.
//! The firmware wraps one instance in a blocking mutex and applies
//! SoftDevice events under the lock (see `ble::apply_link_event`).

/// Opaque peer address copied from the link layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeerAddr(pub [u8; 6]);

/// Peer link state. Single-peripheral topology: one slot, no
/// connecting/reconnecting sub-states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    Disconnected,
    Connected(PeerAddr),
}

/// Link-layer events fed into the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// A central established a connection.
    PeerConnected(PeerAddr),
    /// The connection was lost or closed.
    PeerDisconnected,
    /// The peer wrote the telemetry characteristic's CCCD.
    SubscriptionWrite(bool),
}

/// Side effect the caller must carry out after applying an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEffect {
    StartAdvertising,
    StopAdvertising,
}

/// Connection + subscription state machine.
pub struct LinkTracker {
    state: LinkState,
    subscribed: bool,
}

impl LinkTracker {
    pub const fn new() -> Self {
        Self {
            state: LinkState::Disconnected,
            subscribed: false,
        }
    }

    /// Apply one link-layer event, returning the advertising action the
    /// caller must perform, if any.
    pub fn apply(&mut self, event: LinkEvent) -> Option<LinkEffect> {
        match event {
            LinkEvent::PeerConnected(peer) => match self.state {
                LinkState::Disconnected => {
                    self.state = LinkState::Connected(peer);
                    // Connectable advertising is meaningless with the
                    // single peer slot occupied.
                    Some(LinkEffect::StopAdvertising)
                }
                // A second connect while the slot is occupied is a
                // protocol violation from the link layer: keep the
                // existing peer, never replace it.
                LinkState::Connected(_) => None,
            },
            LinkEvent::PeerDisconnected => match self.state {
                LinkState::Connected(_) => {
                    self.state = LinkState::Disconnected;
                    // CCCD state is per-connection: the next peer must
                    // opt in again.
                    self.subscribed = false;
                    Some(LinkEffect::StartAdvertising)
                }
                LinkState::Disconnected => None,
            },
            LinkEvent::SubscriptionWrite(enabled) => {
                self.subscribed = enabled;
                None
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.state, LinkState::Connected(_))
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub fn peer(&self) -> Option<PeerAddr> {
        match self.state {
            LinkState::Connected(peer) => Some(peer),
            LinkState::Disconnected => None,
        }
    }
}

impl Default for LinkTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Broadcast state mirror, driven solely by tracker effects. Invariant:
/// advertising is active precisely while no peer is connected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdvertisingState {
    Advertising,
    Stopped,
}

impl AdvertisingState {
    pub fn apply(&mut self, effect: LinkEffect) {
        *self = match effect {
            LinkEffect::StartAdvertising => AdvertisingState::Advertising,
            LinkEffect::StopAdvertising => AdvertisingState::Stopped,
        };
    }

    pub fn is_active(&self) -> bool {
        matches!(self, AdvertisingState::Advertising)
    }
}
