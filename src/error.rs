//! Unified error type for adc2ble.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! These types are shared with the host test build, so `defmt::Format`
//! is derived only when the `defmt` feature is enabled.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A raw analog acquisition failed mid-window.
    Read(ReadError),

    /// A notification could not be delivered.
    Dispatch(DispatchError),

    /// Advertising could not be started or ended abnormally.
    Adv(AdvError),
}

/// A raw analog acquisition failed. The whole sampling window is
/// discarded; no partial average is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError {
    /// The ADC driver rejected or failed the conversion.
    Hardware(i32),
}

/// Outcome of a single notification attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchError {
    /// The peer has not enabled notifications. This is the expected
    /// steady state while unsubscribed, not a fault.
    NotSubscribed,

    /// The transport refused the notification.
    Transport(TransportError),
}

/// Failure reported by the transport's notify primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// The link dropped between the subscription check and the send.
    LinkLost,

    /// The payload exceeds the characteristic's value size.
    PayloadTooLarge,

    /// GATT / SoftDevice raw error code.
    Stack(u32),
}

/// Advertising failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdvError {
    /// Advertising timed out without a connection.
    Timeout,

    /// No free connection slot for an incoming central.
    Busy,

    /// GAP raw error code from the SoftDevice.
    Raw(u32),
}

// Convenience conversions

impl From<ReadError> for Error {
    fn from(e: ReadError) -> Self {
        Error::Read(e)
    }
}

impl From<DispatchError> for Error {
    fn from(e: DispatchError) -> Self {
        Error::Dispatch(e)
    }
}

impl From<AdvError> for Error {
    fn from(e: AdvError) -> Self {
        Error::Adv(e)
    }
}
