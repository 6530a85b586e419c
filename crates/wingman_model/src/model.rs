//! The model: item stores plus the registries linking them.

use wingman_foundation::{Item, ItemId, Result};
use wingman_storage::{BiLinkManager, ItemStore, LinkParam, ReadOnlyItemStore, SingleLink};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::crew::{Crew, FlightCrewType};
use crate::flight::Flight;
use crate::location::{FlightLocationType, Location};
use crate::pilot::{FlightPilotType, Pilot};
use crate::plane::Plane;
use crate::role::Role;

/// Location-side relation of stationed crew.
const STATIONED_CREW: &str = "crew";
/// Location-side relation of stationed pilots.
const STATIONED_PILOTS: &str = "pilots";
/// Person-side relation of the location they are stationed at.
const STATION: &str = "station";

/// All items and the links between them.
///
/// Flights are the source side of every flight registry; locations are the
/// source side of the station registries. Every add registers the new item
/// with the registries it takes part in. Deletes only touch the store.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Model {
    pilots: ItemStore<Pilot>,
    crew: ItemStore<Crew>,
    planes: ItemStore<Plane>,
    flights: ItemStore<Flight>,
    locations: ItemStore<Location>,
    flight_pilots: BiLinkManager<Flight, Pilot>,
    flight_crew: BiLinkManager<Flight, Crew>,
    flight_locations: BiLinkManager<Flight, Location>,
    location_crew: BiLinkManager<Location, Crew>,
    location_pilots: BiLinkManager<Location, Pilot>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates an empty model with every relation declared.
    #[must_use]
    pub fn new() -> Self {
        let mut model = Self {
            pilots: ItemStore::new(),
            crew: ItemStore::new(),
            planes: ItemStore::new(),
            flights: ItemStore::new(),
            locations: ItemStore::new(),
            flight_pilots: BiLinkManager::new(),
            flight_crew: BiLinkManager::new(),
            flight_locations: BiLinkManager::new(),
            location_crew: BiLinkManager::new(),
            location_pilots: BiLinkManager::new(),
        };
        declare_roles::<FlightPilotType, _>(&mut model.flight_pilots);
        declare_roles::<FlightCrewType, _>(&mut model.flight_crew);
        declare_roles::<FlightLocationType, _>(&mut model.flight_locations);
        model.location_crew.create_link(
            LinkParam::unbounded(STATIONED_CREW),
            LinkParam::single(STATION),
        );
        model.location_pilots.create_link(
            LinkParam::unbounded(STATIONED_PILOTS),
            LinkParam::single(STATION),
        );
        model
    }

    // =========================================================================
    // Stores
    // =========================================================================

    /// Returns the pilot store.
    #[must_use]
    pub fn pilots(&self) -> &ItemStore<Pilot> {
        &self.pilots
    }

    /// Returns the crew store.
    #[must_use]
    pub fn crew(&self) -> &ItemStore<Crew> {
        &self.crew
    }

    /// Returns the plane store.
    #[must_use]
    pub fn planes(&self) -> &ItemStore<Plane> {
        &self.planes
    }

    /// Returns the flight store.
    #[must_use]
    pub fn flights(&self) -> &ItemStore<Flight> {
        &self.flights
    }

    /// Returns the location store.
    #[must_use]
    pub fn locations(&self) -> &ItemStore<Location> {
        &self.locations
    }

    // =========================================================================
    // Add / Delete
    // =========================================================================

    /// Adds a pilot.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateItem` if the id is taken.
    pub fn add_pilot(&mut self, pilot: Pilot) -> Result<ItemId> {
        let id = pilot.id().clone();
        self.pilots.insert(pilot)?;
        self.flight_pilots.register_target(id.clone());
        self.location_pilots.register_target(id.clone());
        Ok(id)
    }

    /// Adds a crew member.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateItem` if the id is taken.
    pub fn add_crew(&mut self, crew: Crew) -> Result<ItemId> {
        let id = crew.id().clone();
        self.crew.insert(crew)?;
        self.flight_crew.register_target(id.clone());
        self.location_crew.register_target(id.clone());
        Ok(id)
    }

    /// Adds a plane.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateItem` if the id is taken.
    pub fn add_plane(&mut self, plane: Plane) -> Result<ItemId> {
        let id = plane.id().clone();
        self.planes.insert(plane)?;
        Ok(id)
    }

    /// Adds a flight.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateItem` if the id is taken.
    pub fn add_flight(&mut self, flight: Flight) -> Result<ItemId> {
        let id = flight.id().clone();
        self.flights.insert(flight)?;
        self.flight_pilots.register_source(id.clone());
        self.flight_crew.register_source(id.clone());
        self.flight_locations.register_source(id.clone());
        Ok(id)
    }

    /// Adds a location.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateItem` if the id is taken.
    pub fn add_location(&mut self, location: Location) -> Result<ItemId> {
        let id = location.id().clone();
        self.locations.insert(location)?;
        self.flight_locations.register_target(id.clone());
        self.location_crew.register_source(id.clone());
        self.location_pilots.register_source(id.clone());
        Ok(id)
    }

    /// Deletes a pilot. Links to it are pruned when next read.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if there is no such pilot.
    pub fn delete_pilot(&mut self, id: &ItemId) -> Result<Pilot> {
        self.pilots.remove(id)
    }

    /// Deletes a crew member. Links to it are pruned when next read.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if there is no such crew member.
    pub fn delete_crew(&mut self, id: &ItemId) -> Result<Crew> {
        self.crew.remove(id)
    }

    /// Deletes a plane. Links to it are pruned when next read.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if there is no such plane.
    pub fn delete_plane(&mut self, id: &ItemId) -> Result<Plane> {
        self.planes.remove(id)
    }

    /// Deletes a flight. Links to it are pruned when next read.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if there is no such flight.
    pub fn delete_flight(&mut self, id: &ItemId) -> Result<Flight> {
        self.flights.remove(id)
    }

    /// Deletes a location. Links to it are pruned when next read.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if there is no such location.
    pub fn delete_location(&mut self, id: &ItemId) -> Result<Location> {
        self.locations.remove(id)
    }

    // =========================================================================
    // Pilots on Flights
    // =========================================================================

    /// Puts a pilot on a flight in a role and marks the pilot unavailable.
    ///
    /// Ids of deleted pilots are pruned from the seat first, so they never
    /// hold it.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if either item is missing, `LinkFull` if the
    /// seat is taken.
    pub fn link_pilot(&mut self, flight: &ItemId, role: FlightPilotType, pilot: &ItemId) -> Result<()> {
        self.flights.get(flight)?;
        self.pilots.get(pilot)?;
        link_role(&mut self.flight_pilots, &self.pilots, flight, role, pilot)?;
        self.pilots.get_mut(pilot)?.set_available(false);
        Ok(())
    }

    /// Takes a pilot off a flight role. The pilot is available again once
    /// they serve on no flight in any role.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if either item is missing.
    pub fn unlink_pilot(&mut self, flight: &ItemId, role: FlightPilotType, pilot: &ItemId) -> Result<()> {
        self.flights.get(flight)?;
        self.pilots.get(pilot)?;
        if !self.flight_pilots.unlink(flight, role.relation(), pilot)? {
            return Ok(());
        }
        if !serves_any_flight::<FlightPilotType, _>(&mut self.flight_pilots, &self.flights, pilot)? {
            self.pilots.get_mut(pilot)?.set_available(true);
        }
        Ok(())
    }

    /// Returns the pilots of a flight in a role.
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the flight was never added.
    pub fn flight_pilots(&mut self, flight: &ItemId, role: FlightPilotType) -> Result<Vec<&Pilot>> {
        self.flight_pilots
            .linked_targets(flight, role.relation(), &self.pilots)
    }

    /// Returns the flights a pilot serves in a role.
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the pilot was never added.
    pub fn pilot_flights(&mut self, pilot: &ItemId, role: FlightPilotType) -> Result<Vec<&Flight>> {
        self.flight_pilots
            .linked_sources(pilot, role.reverse(), &self.flights)
    }

    // =========================================================================
    // Crew on Flights
    // =========================================================================

    /// Puts a crew member on a flight in a role and marks them unavailable.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if either item is missing, `LinkFull` if the
    /// role is filled.
    pub fn link_crew(&mut self, flight: &ItemId, role: FlightCrewType, crew: &ItemId) -> Result<()> {
        self.flights.get(flight)?;
        self.crew.get(crew)?;
        link_role(&mut self.flight_crew, &self.crew, flight, role, crew)?;
        self.crew.get_mut(crew)?.set_available(false);
        Ok(())
    }

    /// Takes a crew member off a flight role. They are available again once
    /// they serve on no flight in any role.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if either item is missing.
    pub fn unlink_crew(&mut self, flight: &ItemId, role: FlightCrewType, crew: &ItemId) -> Result<()> {
        self.flights.get(flight)?;
        self.crew.get(crew)?;
        if !self.flight_crew.unlink(flight, role.relation(), crew)? {
            return Ok(());
        }
        if !serves_any_flight::<FlightCrewType, _>(&mut self.flight_crew, &self.flights, crew)? {
            self.crew.get_mut(crew)?.set_available(true);
        }
        Ok(())
    }

    /// Returns the crew of a flight in a role.
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the flight was never added.
    pub fn flight_crew(&mut self, flight: &ItemId, role: FlightCrewType) -> Result<Vec<&Crew>> {
        self.flight_crew
            .linked_targets(flight, role.relation(), &self.crew)
    }

    /// Returns the flights a crew member serves in a role.
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the crew member was never added.
    pub fn crew_flights(&mut self, crew: &ItemId, role: FlightCrewType) -> Result<Vec<&Flight>> {
        self.flight_crew
            .linked_sources(crew, role.reverse(), &self.flights)
    }

    // =========================================================================
    // Flight Locations
    // =========================================================================

    /// Sets a flight's departure or arrival location.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if either item is missing, `LinkFull` if the
    /// flight already has a location in that role.
    pub fn link_location(
        &mut self,
        flight: &ItemId,
        role: FlightLocationType,
        location: &ItemId,
    ) -> Result<()> {
        self.flights.get(flight)?;
        self.locations.get(location)?;
        link_role(&mut self.flight_locations, &self.locations, flight, role, location)
    }

    /// Clears a flight's departure or arrival location.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if either item is missing.
    pub fn unlink_location(
        &mut self,
        flight: &ItemId,
        role: FlightLocationType,
        location: &ItemId,
    ) -> Result<()> {
        self.flights.get(flight)?;
        self.locations.get(location)?;
        self.flight_locations
            .unlink(flight, role.relation(), location)?;
        Ok(())
    }

    /// Returns a flight's departure or arrival location.
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the flight was never added.
    pub fn flight_location(
        &mut self,
        flight: &ItemId,
        role: FlightLocationType,
    ) -> Result<Option<&Location>> {
        let locations = self
            .flight_locations
            .linked_targets(flight, role.relation(), &self.locations)?;
        Ok(locations.into_iter().next())
    }

    /// Returns the flights leaving from or arriving at a location.
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the location was never added.
    pub fn location_flights(
        &mut self,
        location: &ItemId,
        role: FlightLocationType,
    ) -> Result<Vec<&Flight>> {
        self.flight_locations
            .linked_sources(location, role.reverse(), &self.flights)
    }

    // =========================================================================
    // Stations
    // =========================================================================

    /// Stations a crew member at a location.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if either item is missing, `LinkFull` if the
    /// crew member is stationed elsewhere.
    pub fn station_crew(&mut self, location: &ItemId, crew: &ItemId) -> Result<()> {
        self.locations.get(location)?;
        self.crew.get(crew)?;
        station(
            &mut self.location_crew,
            &self.locations,
            STATIONED_CREW,
            location,
            crew,
        )
    }

    /// Removes a crew member from a location.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if either item is missing.
    pub fn unstation_crew(&mut self, location: &ItemId, crew: &ItemId) -> Result<()> {
        self.locations.get(location)?;
        self.crew.get(crew)?;
        self.location_crew.unlink(location, STATIONED_CREW, crew)?;
        Ok(())
    }

    /// Returns the crew stationed at a location.
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the location was never added.
    pub fn location_crew(&mut self, location: &ItemId) -> Result<Vec<&Crew>> {
        self.location_crew
            .linked_targets(location, STATIONED_CREW, &self.crew)
    }

    /// Returns where a crew member is stationed.
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the crew member was never added.
    pub fn crew_station(&mut self, crew: &ItemId) -> Result<Option<&Location>> {
        let locations = self
            .location_crew
            .linked_sources(crew, STATION, &self.locations)?;
        Ok(locations.into_iter().next())
    }

    /// Stations a pilot at a location.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if either item is missing, `LinkFull` if the
    /// pilot is stationed elsewhere.
    pub fn station_pilot(&mut self, location: &ItemId, pilot: &ItemId) -> Result<()> {
        self.locations.get(location)?;
        self.pilots.get(pilot)?;
        station(
            &mut self.location_pilots,
            &self.locations,
            STATIONED_PILOTS,
            location,
            pilot,
        )
    }

    /// Removes a pilot from a location.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if either item is missing.
    pub fn unstation_pilot(&mut self, location: &ItemId, pilot: &ItemId) -> Result<()> {
        self.locations.get(location)?;
        self.pilots.get(pilot)?;
        self.location_pilots.unlink(location, STATIONED_PILOTS, pilot)?;
        Ok(())
    }

    /// Returns the pilots stationed at a location.
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the location was never added.
    pub fn location_pilots(&mut self, location: &ItemId) -> Result<Vec<&Pilot>> {
        self.location_pilots
            .linked_targets(location, STATIONED_PILOTS, &self.pilots)
    }

    /// Returns where a pilot is stationed.
    ///
    /// # Errors
    ///
    /// Returns `LinkNotFound` if the pilot was never added.
    pub fn pilot_station(&mut self, pilot: &ItemId) -> Result<Option<&Location>> {
        let locations = self
            .location_pilots
            .linked_sources(pilot, STATION, &self.locations)?;
        Ok(locations.into_iter().next())
    }

    // =========================================================================
    // Planes
    // =========================================================================

    /// Assigns a plane to a flight and marks the plane unavailable.
    ///
    /// A flight has one plane; a plane it had before loses the flight and
    /// is available again if that was its last one. Nothing changes when
    /// either item is missing.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if either item is missing.
    pub fn assign_plane(&mut self, plane: &ItemId, flight: &ItemId) -> Result<()> {
        self.planes.get(plane)?;
        let previous = self.flight_plane(flight)?.map(|p| p.id().clone());

        let target = self.flights.get(flight)?;
        let owner = self.planes.get_mut(plane)?;
        owner.flights_mut().link(target, None)?;
        owner.set_available(false);

        if let Some(previous) = previous.filter(|previous| previous != plane) {
            self.release_plane(&previous, flight)?;
        }

        let link = SingleLink::to(self.planes.get(plane)?, &self.planes)?;
        self.flights.get_mut(flight)?.set_plane(Some(link));

        tracing::debug!(target: "wingman::model", plane = %plane, flight = %flight, "Assigned plane");
        Ok(())
    }

    /// Takes a plane off a flight. The plane is available again once it has
    /// no flights left.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if the plane is missing.
    pub fn unassign_plane(&mut self, plane: &ItemId, flight: &ItemId) -> Result<()> {
        self.release_plane(plane, flight)?;

        if let Ok(target) = self.flights.get_mut(flight) {
            if target.plane().is_some_and(|link| link.target_id() == plane) {
                target.set_plane(None);
            }
        }

        tracing::debug!(target: "wingman::model", plane = %plane, flight = %flight, "Unassigned plane");
        Ok(())
    }

    /// Drops a flight from a plane, freeing the plane when none are left.
    fn release_plane(&mut self, plane: &ItemId, flight: &ItemId) -> Result<()> {
        let owner = self.planes.get_mut(plane)?;
        owner.flights_mut().unlink_id(flight);
        if owner.flights().edge().is_empty() {
            owner.set_available(true);
        }
        Ok(())
    }

    /// Returns the plane assigned to a flight.
    ///
    /// A link to a deleted plane is cleared.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if the flight is missing.
    pub fn flight_plane(&mut self, flight: &ItemId) -> Result<Option<&Plane>> {
        let target = self.flights.get_mut(flight)?;
        let Some(link) = target.plane() else {
            return Ok(None);
        };
        let plane_id = link.target_id().clone();
        match link.get_optional(&self.planes) {
            Some(plane) => Ok(Some(plane)),
            None => {
                tracing::warn!(
                    target: "wingman::model",
                    flight = %flight,
                    plane = %plane_id,
                    "Clearing link to deleted plane"
                );
                target.set_plane(None);
                Ok(None)
            }
        }
    }

    /// Returns the flights a plane is assigned to.
    ///
    /// With `remove_invalid`, ids of deleted flights are dropped from the
    /// plane.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if the plane is missing.
    pub fn plane_flights(&mut self, plane: &ItemId, remove_invalid: bool) -> Result<Vec<&Flight>> {
        let flights = &self.flights;
        let owner = self.planes.get_mut(plane)?;
        Ok(owner.flights_mut().items(flights, None, remove_invalid))
    }
}

fn declare_roles<R: Role, T: Item>(registry: &mut BiLinkManager<Flight, T>) {
    for role in R::ALL {
        let (flight_side, other_side) = role.params();
        registry.create_link(flight_side, other_side);
    }
}

fn link_role<R: Role, T: Item>(
    registry: &mut BiLinkManager<Flight, T>,
    store: &ItemStore<T>,
    flight: &ItemId,
    role: R,
    target: &ItemId,
) -> Result<()> {
    registry.linked_targets(flight, role.relation(), store)?;
    registry.link(flight, role.relation(), target)
}

/// Whether a person still holds any role of kind `R` on a live flight.
fn serves_any_flight<R: Role, T: Item>(
    registry: &mut BiLinkManager<Flight, T>,
    flights: &ItemStore<Flight>,
    person: &ItemId,
) -> Result<bool> {
    for role in R::ALL {
        if !registry.linked_sources(person, role.reverse(), flights)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

fn station<T: Item>(
    registry: &mut BiLinkManager<Location, T>,
    locations: &ItemStore<Location>,
    relation: &str,
    location: &ItemId,
    person: &ItemId,
) -> Result<()> {
    registry.linked_sources(person, STATION, locations)?;
    registry.link(location, relation, person)
}
