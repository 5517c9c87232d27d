//! # Parlor Kiosk
//!
//! Thin orchestration binary over parlor-core and parlor-gateway.
//!
//! ## Startup Sequence
//! ```text
//! 1. Initialize logging (tracing-subscriber, RUST_LOG aware)
//! 2. Seed the table and menu catalogs
//! 3. Construct the session state (one flow per session)
//! 4. Drive a booking end to end and print the confirmed record
//! 5. If PARLOR_API_URL is set, submit over the gateway; otherwise the
//!    confirmed booking is only logged locally
//! ```

mod seed;
mod state;

use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

use parlor_core::{ConfirmedBooking, Money, TimeSlot};
use parlor_gateway::{AuthClient, BookingClient, GatewayConfig, SubmitBookingRequest};
use state::SessionState;

#[tokio::main]
async fn main() {
    init_tracing();

    info!("Starting Parlor kiosk");

    let session = match build_session() {
        Ok(session) => session,
        Err(err) => {
            error!(%err, "seed catalog rejected");
            std::process::exit(1);
        }
    };

    let booking = match run_demo_booking(&session) {
        Ok(booking) => booking,
        Err(err) => {
            error!(%err, "booking flow failed");
            std::process::exit(1);
        }
    };

    info!(
        booking_id = %booking.id,
        table = %booking.table_id,
        date = %booking.date,
        slot = %booking.time_slot,
        hours = booking.duration_hours,
        total = %Money::from_minor(booking.grand_total_minor),
        "booking confirmed"
    );

    submit_if_configured(&booking).await;
}

/// Builds a fresh session over the validated seed catalogs.
fn build_session() -> parlor_core::validation::ValidationResult<SessionState> {
    Ok(SessionState::new(seed::tables()?, seed::menu()?))
}

/// Walks one session through the full flow: table, slot, menu, summary,
/// confirmation.
fn run_demo_booking(session: &SessionState) -> parlor_core::CoreResult<ConfirmedBooking> {
    session.with_flow_mut(|flow| {
        // An occupied table is rejected with a warning; pick another
        if let Err(err) = flow.select_table("B2") {
            warn!(%err, "table rejected, choosing another");
            flow.select_table("B1")?;
        }

        flow.select_date(parlor_core::validation::validate_booking_date("2026-09-05")?);
        flow.select_time(TimeSlot::T1800);
        flow.set_duration(2)?;

        flow.enter_menu()?;
        flow.add_menu_item("m1", 2)?;
        flow.add_menu_item("m6", 1)?;

        flow.review()?;
        let summary = flow.summary()?;
        info!(
            table = %summary.table_name,
            table_subtotal = %Money::from_minor(summary.table_subtotal_minor),
            cart_subtotal = %Money::from_minor(summary.cart_subtotal_minor),
            grand_total = %Money::from_minor(summary.grand_total_minor),
            "summary ready"
        );

        flow.confirm()
    })
}

/// Submits the booking when a backend is configured; otherwise logs only,
/// matching the standalone behavior of the kiosk.
async fn submit_if_configured(booking: &ConfirmedBooking) {
    if std::env::var("PARLOR_API_URL").is_err() {
        info!("PARLOR_API_URL not set; booking kept local");
        return;
    }

    let config = match GatewayConfig::load() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid gateway configuration");
            return;
        }
    };

    let email = std::env::var("PARLOR_EMAIL").unwrap_or_else(|_| "demo@parlor.example".to_string());
    let password = std::env::var("PARLOR_PASSWORD").unwrap_or_else(|_| "demo".to_string());

    let result = async {
        let auth = AuthClient::new(config.clone())?;
        let session = auth.login(&email, &password).await?;
        let bookings = BookingClient::new(config, &session)?;
        bookings.submit(&SubmitBookingRequest::from(booking)).await
    }
    .await;

    match result {
        Ok(resp) => info!(booking_id = %resp.booking_id, status = ?resp.status, "booking accepted"),
        // No retry: surface the failure and leave the record local
        Err(err) => error!(%err, "submission failed"),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - `RUST_LOG=parlor=trace` - trace for parlor crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,parlor=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
