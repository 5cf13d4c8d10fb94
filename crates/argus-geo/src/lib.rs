//! Async reverse-geocoding client for the Argus board.
//!
//! Two layers:
//!
//! - **[`GeocodeClient`]** — a thin `reqwest` wrapper for the Nominatim
//!   `reverse` endpoint (`format=jsonv2`). Returns typed errors; never
//!   panics.
//! - **[`ReverseLookup`]** — the supersede-on-new-request handle the UI
//!   drives while a pin is dragged around a map: each new request
//!   cancels the in-flight one, the latest result wins, and any failure
//!   degrades to a formatted `"lat, lon"` label instead of an error.
//!
//! Address resolution is cosmetic — a failed lookup must never affect
//! whatever mutation triggered it, which is why the lookup surface is
//! total (always produces *some* label).

pub mod client;
pub mod error;
pub mod lookup;

pub use client::{GeocodeClient, GeocodeConfig, fallback_label};
pub use error::Error;
pub use lookup::{ResolvedAddress, ReverseLookup};
