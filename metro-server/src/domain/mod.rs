//! Domain types for the metro arrivals engine.
//!
//! This module contains the core model types representing validated
//! network and feed data. Types enforce their invariants at
//! construction time, so code that receives them can trust validity.

mod arrival;
mod line;
mod station;

pub use arrival::{Countdown, NormalizedArrival, RawArrival, RawCountdown, TripId};
pub use line::{Direction, InvalidLineId, LineId};
pub use station::{InvalidStationName, StationName};
