//! Notification dispatch - decides whether a sample may be sent and
//! performs exactly one transmission attempt.
//!
//! Notifying a peer that has not written its CCCD is a protocol error
//! under GATT, not merely wasted airtime, so the subscription gate is
//! mandatory. The payload is the reading rendered as decimal text,
//! returned by value: no scratch buffer outlives a single dispatch
//! call, and nothing is buffered between calls.

use core::fmt::Write;

use heapless::String;

use crate::config::MAX_PAYLOAD_LEN;
use crate::error::{DispatchError, TransportError};
use crate::sensor::sampler::Sample;

/// Decimal text form of one reading.
pub type Payload = String<MAX_PAYLOAD_LEN>;

/// Narrow seam to the transport's notify primitive.
///
/// The firmware implements this over the GATT server's generated notify
/// helper; host tests use a recording mock.
pub trait NotifySink {
    fn notify(&mut self, payload: &[u8]) -> Result<(), TransportError>;
}

/// Render a reading as bounded decimal text.
pub fn encode_value(value: u32) -> Payload {
    let mut s = Payload::new();
    // u32::MAX is 10 digits and the bound is 12, so this cannot fail.
    let _ = write!(&mut s, "{}", value);
    s
}

/// Attempt to deliver one sample to the connected peer.
///
/// Exactly one transmission attempt; the sample is consumed either way.
/// The caller logs the outcome and moves on to the next cycle - no
/// retry, no queueing of the unsent sample.
pub fn dispatch<S: NotifySink>(
    subscribed: bool,
    sample: Sample,
    sink: &mut S,
) -> Result<(), DispatchError> {
    if !subscribed {
        return Err(DispatchError::NotSubscribed);
    }

    let payload = encode_value(sample.value);
    sink.notify(payload.as_bytes())
        .map_err(DispatchError::Transport)
}
