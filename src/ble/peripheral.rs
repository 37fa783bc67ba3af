//! Peripheral connection loop.
//!
//! Owns the single connection slot: advertise, feed the link tracker,
//! service GATT events and incoming samples until the central
//! disconnects, then start over. This is the only place the transport's
//! notify primitive is touched.

use core::pin::pin;

use defmt::{debug, info, warn};
use embassy_futures::select::{select, Either};
use nrf_softdevice::ble::gatt_server::{self, NotifyValueError};
use nrf_softdevice::ble::Connection;
use nrf_softdevice::Softdevice;

use crate::ble::dispatcher::{self, NotifySink};
use crate::ble::gatt::{Server, ServerEvent, TelemetryServiceEvent};
use crate::ble::link::{LinkEvent, PeerAddr};
use crate::ble::{advertiser, SAMPLES};
use crate::error::{DispatchError, TransportError};

/// `NotifySink` over the GATT server's generated notify helper.
///
/// Scoped to one dispatch call: constructed, used once, dropped.
struct GattNotifier<'a> {
    server: &'a Server,
    conn: &'a Connection,
}

impl NotifySink for GattNotifier<'_> {
    fn notify(&mut self, payload: &[u8]) -> Result<(), TransportError> {
        let value =
            heapless::Vec::from_slice(payload).map_err(|_| TransportError::PayloadTooLarge)?;
        self.server
            .telemetry
            .reading_notify(self.conn, &value)
            .map_err(|e| match e {
                NotifyValueError::Disconnected => TransportError::LinkLost,
                NotifyValueError::Raw(err) => TransportError::Stack(err as u32),
            })
    }
}

#[embassy_executor::task]
pub async fn peripheral_task(sd: &'static Softdevice, server: &'static Server) -> ! {
    loop {
        let conn = match advertiser::advertise(sd).await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("advertising failed: {:?}", e);
                continue;
            }
        };

        let peer = PeerAddr(conn.peer_address().bytes());
        if crate::ble::apply_link_event(LinkEvent::PeerConnected(peer)).is_none() {
            // The tracker refused the event: the single peer slot was
            // already occupied, which the link layer must not produce.
            warn!("connect event with peer slot occupied, dropping link");
            let _ = conn.disconnect();
            continue;
        }
        info!("connected: {}", peer);

        run_connection(server, &conn).await;

        crate::ble::apply_link_event(LinkEvent::PeerDisconnected);
        info!("disconnected");
        // The loop restarts advertising, completing the
        // StartAdvertising effect.
    }
}

/// Service one connection until it drops.
///
/// GATT events (CCCD writes) and incoming samples race in a select; the
/// GATT future completing means the central is gone. A disconnect that
/// lands between the subscription check and the notify call surfaces as
/// a transport failure on that one attempt, nothing more.
async fn run_connection(server: &Server, conn: &Connection) {
    let mut sent: u32 = 0;

    let mut gatt_fut = pin!(gatt_server::run(conn, server, |e| match e {
        ServerEvent::Telemetry(TelemetryServiceEvent::ReadingCccdWrite { notifications }) => {
            info!(
                "notifications {}",
                if notifications { "enabled" } else { "disabled" }
            );
            crate::ble::apply_link_event(LinkEvent::SubscriptionWrite(notifications));
        }
    }));

    loop {
        match select(gatt_fut.as_mut(), SAMPLES.receive()).await {
            Either::First(_disconnected) => {
                info!("gatt loop ended after {} notifications", sent);
                break;
            }
            Either::Second(sample) => {
                let mut sink = GattNotifier { server, conn };
                match dispatcher::dispatch(crate::ble::is_subscribed(), sample, &mut sink) {
                    Ok(()) => {
                        sent += 1;
                        debug!("notified value={} (#{})", sample.value, sent);
                    }
                    Err(DispatchError::NotSubscribed) => {
                        debug!("peer not subscribed, skipping value={}", sample.value);
                    }
                    Err(DispatchError::Transport(e)) => {
                        warn!("notify failed: {:?}", e);
                    }
                }
            }
        }
    }
}
