//! Real-time arrival and route resolution.
//!
//! This module answers the two core queries: "all arrivals at station
//! S" and "next N arrivals from A toward B". It is pure and stateless:
//! every call works from the immutable topology and a caller-supplied
//! feed snapshot, so concurrent queries need no synchronization.

mod arrivals;
mod direction;
mod error;

pub use arrivals::{arrivals_at, next_arrivals, next_arrivals_on};
pub use direction::{RouteSelection, resolve_direction, resolve_route, resolve_route_on};
pub use error::ResolveError;
