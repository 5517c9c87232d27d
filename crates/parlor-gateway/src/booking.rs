//! # Booking Submission Client
//!
//! Submits a confirmed booking to the backend and lists booking history.
//!
//! ## Endpoints
//! ```text
//! POST /bookings  {tableId, date, timeSlot, durationHours, cartItems[]}
//!                 -> {bookingId, status}
//! GET  /bookings  -> [BookingRecord]
//! ```
//!
//! Submission is a single attempt with no retry policy: the flow has already
//! cleared its local state by the time this is called, and a failure is
//! shown to the user as a generic message.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use parlor_core::cart::CartLineItem;
use parlor_core::types::{BookingStatus, ConfirmedBooking, TimeSlot};

use crate::auth::AuthSession;
use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};

// =============================================================================
// Wire DTOs
// =============================================================================

/// The `POST /bookings` request body, built from a [`ConfirmedBooking`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBookingRequest {
    /// Client-generated booking id, so a resubmission after a lost response
    /// can be deduplicated server-side.
    pub client_booking_id: String,
    pub table_id: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub duration_hours: i64,
    pub cart_items: Vec<CartLineItem>,
    pub grand_total_minor: i64,
}

impl From<&ConfirmedBooking> for SubmitBookingRequest {
    fn from(booking: &ConfirmedBooking) -> Self {
        SubmitBookingRequest {
            client_booking_id: booking.id.clone(),
            table_id: booking.table_id.clone(),
            date: booking.date,
            time_slot: booking.time_slot,
            duration_hours: booking.duration_hours,
            cart_items: booking.lines.clone(),
            grand_total_minor: booking.grand_total_minor,
        }
    }
}

/// The `POST /bookings` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBookingResponse {
    pub booking_id: String,
    pub status: BookingStatus,
}

/// One row of the read-only booking history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub booking_id: String,
    pub table_id: String,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub duration_hours: i64,
    pub grand_total_minor: i64,
    pub status: BookingStatus,
}

// =============================================================================
// Booking Client
// =============================================================================

/// Client for booking submission and history.
///
/// Requires an authenticated session; the bearer token rides along on every
/// request.
#[derive(Debug, Clone)]
pub struct BookingClient {
    http: reqwest::Client,
    config: GatewayConfig,
    authorization: String,
}

impl BookingClient {
    /// Creates a client bound to an authenticated session.
    pub fn new(config: GatewayConfig, session: &AuthSession) -> GatewayResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(BookingClient {
            http,
            config,
            authorization: session.authorization_header(),
        })
    }

    /// Submits a confirmed booking. Single attempt, no retry.
    pub async fn submit(
        &self,
        request: &SubmitBookingRequest,
    ) -> GatewayResult<SubmitBookingResponse> {
        debug!(table_id = %request.table_id, date = %request.date, "submitting booking");

        let response = self
            .http
            .post(self.config.endpoint("/bookings"))
            .header(reqwest::header::AUTHORIZATION, self.authorization.as_str())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::from_status(status, body));
        }

        let resp: SubmitBookingResponse = response.json().await?;
        info!(booking_id = %resp.booking_id, status = ?resp.status, "booking submitted");
        Ok(resp)
    }

    /// Lists the user's past bookings, newest first as the server returns
    /// them. Read-only; presentation decides how to render it.
    pub async fn history(&self) -> GatewayResult<Vec<BookingRecord>> {
        debug!("fetching booking history");

        let response = self
            .http
            .get(self.config.endpoint("/bookings"))
            .header(reqwest::header::AUTHORIZATION, self.authorization.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::from_status(status, body));
        }

        Ok(response.json().await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
