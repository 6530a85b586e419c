//! Session state: the model plus the configuration it is run with.

use std::fmt;
use std::fmt::Write as _;

use wingman_foundation::{Error, ErrorKind, Item, ItemId, Result};
use wingman_model::{
    Crew, Flight, FlightCrewType, FlightLocationType, FlightPilotType, Location, Model, Pilot,
    Plane, Role,
};
use wingman_storage::{ItemStore, ReadOnlyItemStore};

use crate::command::{self, Command, ItemKind, LinkTarget};
use crate::config::SessionConfig;
use crate::serialize;

/// Text printed by `help`.
pub const HELP: &str = "\
Commands (positions are the numbers shown by `list`):
  add pilot <name> <rank> <age> <hours>
  add crew <name> <rank>
  add plane <model> <age>
  add flight <code>
  add location <name>
  list <kind>                 kinds: pilot crew plane flight location
  show <kind> <n>
  delete <kind> <n>
  link|unlink pilot <n> flight <m> as flying|monitoring
  link|unlink crew <n> flight <m> as <crew role>
  link|unlink location <n> flight <m> as departure|arrival
  link|unlink plane <n> flight <m>
  link|unlink crew|pilot <n> location <m>
  save
  help
  exit
Pilot ranks: trainee second-officer first-officer captain senior-captain
Crew ranks and roles: cabin-service-director senior-flight-attendant
  flight-attendant trainee-flight-attendant
Quote names containing spaces: add location \"New York\"";

/// Result of running one command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Text to show the user. May be empty.
    pub message: String,
    /// The user asked to leave.
    pub exit: bool,
}

impl Outcome {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit: false,
        }
    }

    fn exit() -> Self {
        Self {
            message: String::new(),
            exit: true,
        }
    }
}

/// A running session.
#[derive(Debug)]
pub struct Session {
    model: Model,
    config: SessionConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::ephemeral())
    }
}

impl Session {
    /// Creates a session with an empty model.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_model(Model::new(), config)
    }

    /// Creates a session around an existing model.
    #[must_use]
    pub fn with_model(model: Model, config: SessionConfig) -> Self {
        Self { model, config }
    }

    /// Opens a session, loading the data file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file exists but cannot be read or decoded.
    pub fn open(config: SessionConfig) -> Result<Self> {
        let model = match &config.data_path {
            Some(path) if path.exists() => serialize::load_from_file(path)?,
            Some(path) => {
                tracing::info!(
                    target: "wingman::session",
                    path = %path.display(),
                    "No data file yet, starting empty"
                );
                Model::new()
            }
            None => Model::new(),
        };
        Ok(Self::with_model(model, config))
    }

    /// Returns the model.
    #[must_use]
    pub const fn model(&self) -> &Model {
        &self.model
    }

    /// Returns the model for changes.
    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Parses and runs one line.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for malformed input, otherwise whatever
    /// [`execute`](Self::execute) returns.
    pub fn eval(&mut self, line: &str) -> Result<Outcome> {
        let command = command::parse(line)?;
        self.execute(command)
    }

    /// Runs a command, saving afterwards if it changed the model and
    /// auto-save is on.
    ///
    /// # Errors
    ///
    /// Returns `CommandFailed` for link failures and bad positions, or the
    /// IO error of a failed save.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let mutating = command.is_mutating();
        let outcome = match command {
            Command::AddPilot {
                name,
                rank,
                age,
                flight_hours,
            } => {
                let pilot = Pilot::new(name, rank, age, flight_hours);
                let label = pilot.to_string();
                self.model.add_pilot(pilot)?;
                Outcome::message(format!("Added pilot {label}."))
            }
            Command::AddCrew { name, rank } => {
                let crew = Crew::new(name, rank);
                let label = crew.to_string();
                self.model.add_crew(crew)?;
                Outcome::message(format!("Added crew {label}."))
            }
            Command::AddPlane { model, age } => {
                let plane = Plane::new(model, age);
                let label = plane.to_string();
                self.model.add_plane(plane)?;
                Outcome::message(format!("Added plane {label}."))
            }
            Command::AddFlight { code } => {
                self.model.add_flight(Flight::new(code.clone()))?;
                Outcome::message(format!("Added flight {code}."))
            }
            Command::AddLocation { name } => {
                self.model.add_location(Location::new(name.clone()))?;
                Outcome::message(format!("Added location {name}."))
            }
            Command::Delete { kind, index } => self.delete(kind, index)?,
            Command::List { kind } => Outcome::message(self.list(kind)),
            Command::Show { kind, index } => self.show(kind, index)?,
            Command::Link(target) => self.link(target)?,
            Command::Unlink(target) => self.unlink(target)?,
            Command::Save => {
                let path = self.save()?;
                Outcome::message(format!("Saved to {path}."))
            }
            Command::Help => Outcome::message(HELP),
            Command::Exit => Outcome::exit(),
        };

        if mutating && self.config.auto_save && self.config.data_path.is_some() {
            self.save()?;
        }
        Ok(outcome)
    }

    /// Saves the model to the data file and returns the path written.
    ///
    /// # Errors
    ///
    /// Returns `CommandFailed` if no data file is configured, or the IO
    /// error of the write.
    pub fn save(&self) -> Result<String> {
        let path = self
            .config
            .data_path
            .as_ref()
            .ok_or_else(|| Error::command_failed("no data file configured"))?;
        serialize::save_to_file(&self.model, path)?;
        Ok(path.display().to_string())
    }

    // =========================================================================
    // Listing
    // =========================================================================

    fn list(&self, kind: ItemKind) -> String {
        match kind {
            ItemKind::Pilot => listing(self.model.pilots(), kind),
            ItemKind::Crew => listing(self.model.crew(), kind),
            ItemKind::Plane => listing(self.model.planes(), kind),
            ItemKind::Flight => listing(self.model.flights(), kind),
            ItemKind::Location => listing(self.model.locations(), kind),
        }
    }

    fn delete(&mut self, kind: ItemKind, index: usize) -> Result<Outcome> {
        let (id, label) = self.resolve(kind, index)?;
        match kind {
            ItemKind::Pilot => {
                self.model.delete_pilot(&id)?;
            }
            ItemKind::Crew => {
                self.model.delete_crew(&id)?;
            }
            ItemKind::Plane => {
                self.model.delete_plane(&id)?;
            }
            ItemKind::Flight => {
                self.model.delete_flight(&id)?;
            }
            ItemKind::Location => {
                self.model.delete_location(&id)?;
            }
        }
        Ok(Outcome::message(format!("Deleted {kind} {label}.")))
    }

    fn show(&mut self, kind: ItemKind, index: usize) -> Result<Outcome> {
        let (id, _) = self.resolve(kind, index)?;
        let lines = match kind {
            ItemKind::Pilot => self.show_pilot(&id),
            ItemKind::Crew => self.show_crew(&id),
            ItemKind::Plane => self.show_plane(&id),
            ItemKind::Flight => self.show_flight(&id),
            ItemKind::Location => self.show_location(&id),
        }
        .map_err(|e| link_failure("show", e))?;
        Ok(Outcome::message(lines.join("\n")))
    }

    fn show_pilot(&mut self, id: &ItemId) -> Result<Vec<String>> {
        let mut lines = self.model.pilots().get(id)?.display_list();
        for &role in FlightPilotType::ALL {
            let flights = names(&self.model.pilot_flights(id, role)?);
            lines.push(format!("Flights as {role}: {flights}"));
        }
        let station = optional(self.model.pilot_station(id)?);
        lines.push(format!("Station: {station}"));
        Ok(lines)
    }

    fn show_crew(&mut self, id: &ItemId) -> Result<Vec<String>> {
        let mut lines = self.model.crew().get(id)?.display_list();
        for &role in FlightCrewType::ALL {
            let flights = self.model.crew_flights(id, role)?;
            if !flights.is_empty() {
                lines.push(format!("Flights as {role}: {}", names(&flights)));
            }
        }
        let station = optional(self.model.crew_station(id)?);
        lines.push(format!("Station: {station}"));
        Ok(lines)
    }

    fn show_plane(&mut self, id: &ItemId) -> Result<Vec<String>> {
        let mut lines = self.model.planes().get(id)?.display_list();
        let flights = names(&self.model.plane_flights(id, true)?);
        lines.push(format!("Flights: {flights}"));
        Ok(lines)
    }

    fn show_flight(&mut self, id: &ItemId) -> Result<Vec<String>> {
        let mut lines = self.model.flights().get(id)?.display_list();
        let plane = optional(self.model.flight_plane(id)?);
        lines.push(format!("Plane: {plane}"));
        for &role in FlightLocationType::ALL {
            let location = optional(self.model.flight_location(id, role)?);
            lines.push(format!("{role}: {location}"));
        }
        for &role in FlightPilotType::ALL {
            let pilots = names(&self.model.flight_pilots(id, role)?);
            lines.push(format!("{role}: {pilots}"));
        }
        for &role in FlightCrewType::ALL {
            let crew = names(&self.model.flight_crew(id, role)?);
            lines.push(format!("{role}: {crew}"));
        }
        Ok(lines)
    }

    fn show_location(&mut self, id: &ItemId) -> Result<Vec<String>> {
        let mut lines = self.model.locations().get(id)?.display_list();
        let departing = names(&self.model.location_flights(id, FlightLocationType::Departure)?);
        lines.push(format!("Departing flights: {departing}"));
        let arriving = names(&self.model.location_flights(id, FlightLocationType::Arrival)?);
        lines.push(format!("Arriving flights: {arriving}"));
        let pilots = names(&self.model.location_pilots(id)?);
        lines.push(format!("Stationed pilots: {pilots}"));
        let crew = names(&self.model.location_crew(id)?);
        lines.push(format!("Stationed crew: {crew}"));
        Ok(lines)
    }

    // =========================================================================
    // Linking
    // =========================================================================

    fn link(&mut self, target: LinkTarget) -> Result<Outcome> {
        let (from, from_label, to, to_label, role) = self.resolve_link(target)?;
        let result = match target {
            LinkTarget::PilotFlight { role, .. } => self.model.link_pilot(&to, role, &from),
            LinkTarget::CrewFlight { role, .. } => self.model.link_crew(&to, role, &from),
            LinkTarget::LocationFlight { role, .. } => {
                self.model.link_location(&to, role, &from)
            }
            LinkTarget::PlaneFlight { .. } => self.model.assign_plane(&from, &to),
            LinkTarget::CrewLocation { .. } => self.model.station_crew(&to, &from),
            LinkTarget::PilotLocation { .. } => self.model.station_pilot(&to, &from),
        };
        result.map_err(|e| link_failure("link", e))?;

        let mut message = format!("Linked {from_label} to {to_label}");
        if let Some(role) = role {
            let _ = write!(message, " as {role}");
        }
        message.push('.');
        Ok(Outcome::message(message))
    }

    fn unlink(&mut self, target: LinkTarget) -> Result<Outcome> {
        let (from, from_label, to, to_label, role) = self.resolve_link(target)?;
        let result = match target {
            LinkTarget::PilotFlight { role, .. } => self.model.unlink_pilot(&to, role, &from),
            LinkTarget::CrewFlight { role, .. } => self.model.unlink_crew(&to, role, &from),
            LinkTarget::LocationFlight { role, .. } => {
                self.model.unlink_location(&to, role, &from)
            }
            LinkTarget::PlaneFlight { .. } => self.model.unassign_plane(&from, &to),
            LinkTarget::CrewLocation { .. } => self.model.unstation_crew(&to, &from),
            LinkTarget::PilotLocation { .. } => self.model.unstation_pilot(&to, &from),
        };
        result.map_err(|e| link_failure("unlink", e))?;

        let mut message = format!("Unlinked {from_label} from {to_label}");
        if let Some(role) = role {
            let _ = write!(message, " as {role}");
        }
        message.push('.');
        Ok(Outcome::message(message))
    }

    /// Resolves both ends of a link command to ids and labels, plus the role
    /// name when there is one.
    #[allow(clippy::type_complexity)]
    fn resolve_link(
        &self,
        target: LinkTarget,
    ) -> Result<(ItemId, String, ItemId, String, Option<String>)> {
        let (from_kind, from_index, to_kind, to_index, role) = match target {
            LinkTarget::PilotFlight {
                pilot,
                flight,
                role,
            } => (ItemKind::Pilot, pilot, ItemKind::Flight, flight, Some(role.to_string())),
            LinkTarget::CrewFlight { crew, flight, role } => {
                (ItemKind::Crew, crew, ItemKind::Flight, flight, Some(role.to_string()))
            }
            LinkTarget::LocationFlight {
                location,
                flight,
                role,
            } => (
                ItemKind::Location,
                location,
                ItemKind::Flight,
                flight,
                Some(role.to_string()),
            ),
            LinkTarget::PlaneFlight { plane, flight } => {
                (ItemKind::Plane, plane, ItemKind::Flight, flight, None)
            }
            LinkTarget::CrewLocation { crew, location } => {
                (ItemKind::Crew, crew, ItemKind::Location, location, None)
            }
            LinkTarget::PilotLocation { pilot, location } => {
                (ItemKind::Pilot, pilot, ItemKind::Location, location, None)
            }
        };
        let (from, from_label) = self.resolve(from_kind, from_index)?;
        let (to, to_label) = self.resolve(to_kind, to_index)?;
        Ok((
            from,
            format!("{from_kind} {from_label}"),
            to,
            format!("{to_kind} {to_label}"),
            role,
        ))
    }

    /// Looks up the item at a listing position.
    fn resolve(&self, kind: ItemKind, index: usize) -> Result<(ItemId, String)> {
        match kind {
            ItemKind::Pilot => pick(self.model.pilots(), kind, index),
            ItemKind::Crew => pick(self.model.crew(), kind, index),
            ItemKind::Plane => pick(self.model.planes(), kind, index),
            ItemKind::Flight => pick(self.model.flights(), kind, index),
            ItemKind::Location => pick(self.model.locations(), kind, index),
        }
    }
}

/// Turns a link error into a message for the user. Other errors pass through.
fn link_failure(action: &str, error: Error) -> Error {
    if !error.is_link_error() {
        return error;
    }
    if matches!(error.kind, ErrorKind::LinkNotFound(_)) {
        tracing::error!(
            target: "wingman::session",
            action,
            error = %error,
            "Relation missing from registry"
        );
    }
    Error::command_failed(format!("cannot {action}: {error}"))
}

fn pick<T: Item + fmt::Display>(
    store: &ItemStore<T>,
    kind: ItemKind,
    index: usize,
) -> Result<(ItemId, String)> {
    store
        .get_by_index(index)
        .map(|item| (item.id().clone(), item.to_string()))
        .map_err(|_| {
            Error::command_failed(format!(
                "there is no {kind} {} ({} listed)",
                index + 1,
                store.len()
            ))
        })
}

fn listing<T: Item>(store: &ItemStore<T>, kind: ItemKind) -> String {
    if store.is_empty() {
        return format!("No {}.", kind.plural());
    }
    store
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.display_list().join(" | ")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn names<T: fmt::Display>(items: &[&T]) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn optional<T: fmt::Display>(item: Option<&T>) -> String {
    item.map_or_else(|| "none".to_string(), ToString::to_string)
}
