//! # parlor-gateway: Remote Collaborator Clients
//!
//! HTTP/JSON clients for the remote services the booking core consumes but
//! does not design:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Gateway Surface                                      │
//! │                                                                         │
//! │  AuthClient                         BookingClient                      │
//! │  ──────────                         ─────────────                      │
//! │  POST /auth/login                   POST /bookings                     │
//! │  POST /auth/register                GET  /bookings (history)           │
//! │  POST /auth/admin/login                                                │
//! │                                                                         │
//! │  All calls: single attempt, no retry, no token refresh. A failure is   │
//! │  surfaced as a generic error; the session simply stays where it was.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Attaching the bearer token to requests is a configuration concern of the
//! client ([`AuthClient::with_token`] / [`BookingClient::new`] with a session),
//! never of the booking core.

pub mod auth;
pub mod booking;
pub mod config;
pub mod error;

pub use auth::{AuthClient, AuthResponse, AuthSession, UserProfile};
pub use booking::{BookingClient, BookingRecord, SubmitBookingRequest, SubmitBookingResponse};
pub use config::{ConfigError, GatewayConfig};
pub use error::{GatewayError, GatewayResult};
