//! Flight operations domain model for Wingman.
//!
//! This crate provides:
//! - The five item kinds: [`Pilot`], [`Crew`], [`Plane`], [`Flight`], [`Location`]
//! - Flight roles ([`FlightPilotType`], [`FlightCrewType`], [`FlightLocationType`])
//!   that name relations and bound how many items may fill them
//! - [`Model`] - The stores and link registries, with every link operation
//!
//! Deleting an item only removes it from its store. Links that still point at
//! it are pruned the next time they are read.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod crew;
pub mod flight;
pub mod location;
pub mod model;
pub mod pilot;
pub mod plane;
pub mod role;

pub use crew::{Crew, CrewRank, FlightCrewType};
pub use flight::Flight;
pub use location::{FlightLocationType, Location};
pub use model::Model;
pub use pilot::{FlightPilotType, Pilot, PilotRank};
pub use plane::Plane;
pub use role::Role;
