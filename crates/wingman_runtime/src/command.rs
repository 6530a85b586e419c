//! Command parsing.
//!
//! One command per line, whitespace separated. Items are referred to by
//! their 1-based position in `list` output. Arguments containing spaces can
//! be wrapped in double quotes.

use std::fmt;

use wingman_foundation::{Error, Result};
use wingman_model::{CrewRank, FlightCrewType, FlightLocationType, FlightPilotType, PilotRank, Role};

/// The kinds of item a command can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Pilots.
    Pilot,
    /// Cabin crew.
    Crew,
    /// Planes.
    Plane,
    /// Flights.
    Flight,
    /// Locations.
    Location,
}

impl ItemKind {
    /// Every kind, in the order they are listed in help.
    pub const ALL: &'static [Self] = &[
        Self::Pilot,
        Self::Crew,
        Self::Plane,
        Self::Flight,
        Self::Location,
    ];

    /// Word used for the kind in commands.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Pilot => "pilot",
            Self::Crew => "crew",
            Self::Plane => "plane",
            Self::Flight => "flight",
            Self::Location => "location",
        }
    }

    /// Plural used in listings.
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Pilot => "pilots",
            Self::Crew => "crew",
            Self::Plane => "planes",
            Self::Flight => "flights",
            Self::Location => "locations",
        }
    }

    fn parse(word: &str) -> Result<Self> {
        let word = word.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.keyword() == word || kind.plural() == word)
            .ok_or_else(|| Error::parse(format!("unknown item kind '{word}'")))
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// What a `link` or `unlink` command connects. Positions are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// A pilot on a flight.
    PilotFlight {
        /// Pilot position.
        pilot: usize,
        /// Flight position.
        flight: usize,
        /// Seat on the flight.
        role: FlightPilotType,
    },
    /// A crew member on a flight.
    CrewFlight {
        /// Crew position.
        crew: usize,
        /// Flight position.
        flight: usize,
        /// Role on the flight.
        role: FlightCrewType,
    },
    /// A flight's departure or arrival.
    LocationFlight {
        /// Location position.
        location: usize,
        /// Flight position.
        flight: usize,
        /// Which end of the flight.
        role: FlightLocationType,
    },
    /// A plane flying a flight.
    PlaneFlight {
        /// Plane position.
        plane: usize,
        /// Flight position.
        flight: usize,
    },
    /// A crew member's station.
    CrewLocation {
        /// Crew position.
        crew: usize,
        /// Location position.
        location: usize,
    },
    /// A pilot's station.
    PilotLocation {
        /// Pilot position.
        pilot: usize,
        /// Location position.
        location: usize,
    },
}

/// A parsed command. Positions are 0-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `add pilot <name> <rank> <age> <hours>`
    AddPilot {
        /// Name.
        name: String,
        /// Rank.
        rank: PilotRank,
        /// Age in years.
        age: u32,
        /// Logged flight hours.
        flight_hours: u32,
    },
    /// `add crew <name> <rank>`
    AddCrew {
        /// Name.
        name: String,
        /// Rank.
        rank: CrewRank,
    },
    /// `add plane <model> <age>`
    AddPlane {
        /// Model name.
        model: String,
        /// Age in years.
        age: u32,
    },
    /// `add flight <code>`
    AddFlight {
        /// Flight code.
        code: String,
    },
    /// `add location <name>`
    AddLocation {
        /// Name.
        name: String,
    },
    /// `delete <kind> <index>`
    Delete {
        /// Kind of item.
        kind: ItemKind,
        /// Position in the listing.
        index: usize,
    },
    /// `list <kind>`
    List {
        /// Kind of item.
        kind: ItemKind,
    },
    /// `show <kind> <index>`
    Show {
        /// Kind of item.
        kind: ItemKind,
        /// Position in the listing.
        index: usize,
    },
    /// `link ...`
    Link(LinkTarget),
    /// `unlink ...`
    Unlink(LinkTarget),
    /// `save`
    Save,
    /// `help`
    Help,
    /// `exit`
    Exit,
}

impl Command {
    /// Returns true if running the command changes the model.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::AddPilot { .. }
                | Self::AddCrew { .. }
                | Self::AddPlane { .. }
                | Self::AddFlight { .. }
                | Self::AddLocation { .. }
                | Self::Delete { .. }
                | Self::Link(_)
                | Self::Unlink(_)
        )
    }
}

/// First words of every command.
pub const COMMAND_WORDS: &[&str] = &[
    "add", "delete", "list", "show", "link", "unlink", "save", "help", "exit",
];

/// Parses one line into a command.
///
/// # Errors
///
/// Returns `ParseError` if the line is empty or malformed.
pub fn parse(line: &str) -> Result<Command> {
    let tokens = tokenize(line)?;
    let mut args = Args::new(&tokens);
    let word = args.next("command")?.to_ascii_lowercase();

    let command = match word.as_str() {
        "add" => parse_add(&mut args)?,
        "delete" => Command::Delete {
            kind: ItemKind::parse(args.next("item kind")?)?,
            index: args.index()?,
        },
        "list" => Command::List {
            kind: ItemKind::parse(args.next("item kind")?)?,
        },
        "show" => Command::Show {
            kind: ItemKind::parse(args.next("item kind")?)?,
            index: args.index()?,
        },
        "link" => Command::Link(parse_link(&mut args)?),
        "unlink" => Command::Unlink(parse_link(&mut args)?),
        "save" => Command::Save,
        "help" => Command::Help,
        "exit" | "quit" => Command::Exit,
        other => {
            return Err(Error::parse(format!(
                "unknown command '{other}', type 'help' for a list"
            )));
        }
    };
    args.finish()?;
    Ok(command)
}

fn parse_add(args: &mut Args<'_>) -> Result<Command> {
    let kind = ItemKind::parse(args.next("item kind")?)?;
    let command = match kind {
        ItemKind::Pilot => Command::AddPilot {
            name: args.next("name")?.to_string(),
            rank: args.next("rank")?.parse()?,
            age: args.number("age")?,
            flight_hours: args.number("flight hours")?,
        },
        ItemKind::Crew => Command::AddCrew {
            name: args.next("name")?.to_string(),
            rank: args.next("rank")?.parse()?,
        },
        ItemKind::Plane => Command::AddPlane {
            model: args.next("model")?.to_string(),
            age: args.number("age")?,
        },
        ItemKind::Flight => Command::AddFlight {
            code: args.next("code")?.to_string(),
        },
        ItemKind::Location => Command::AddLocation {
            name: args.next("name")?.to_string(),
        },
    };
    Ok(command)
}

fn parse_link(args: &mut Args<'_>) -> Result<LinkTarget> {
    let from = ItemKind::parse(args.next("item kind")?)?;
    let from_index = args.index()?;
    let to = ItemKind::parse(args.next("item kind")?)?;
    let to_index = args.index()?;

    let target = match (from, to) {
        (ItemKind::Pilot, ItemKind::Flight) => LinkTarget::PilotFlight {
            pilot: from_index,
            flight: to_index,
            role: args.role()?,
        },
        (ItemKind::Crew, ItemKind::Flight) => LinkTarget::CrewFlight {
            crew: from_index,
            flight: to_index,
            role: args.role()?,
        },
        (ItemKind::Location, ItemKind::Flight) => LinkTarget::LocationFlight {
            location: from_index,
            flight: to_index,
            role: args.role()?,
        },
        (ItemKind::Plane, ItemKind::Flight) => LinkTarget::PlaneFlight {
            plane: from_index,
            flight: to_index,
        },
        (ItemKind::Crew, ItemKind::Location) => LinkTarget::CrewLocation {
            crew: from_index,
            location: to_index,
        },
        (ItemKind::Pilot, ItemKind::Location) => LinkTarget::PilotLocation {
            pilot: from_index,
            location: to_index,
        },
        (from, to) => {
            return Err(Error::parse(format!("cannot link {from} to {to}")));
        }
    };
    Ok(target)
}

/// Splits a line on whitespace, keeping double-quoted runs together.
fn tokenize(line: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(Error::parse("unterminated quote"));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Cursor over command arguments.
struct Args<'a> {
    tokens: &'a [String],
    position: usize,
}

impl<'a> Args<'a> {
    fn new(tokens: &'a [String]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn next(&mut self, what: &str) -> Result<&'a str> {
        let token = self
            .tokens
            .get(self.position)
            .ok_or_else(|| Error::parse(format!("missing {what}")))?;
        self.position += 1;
        Ok(token)
    }

    fn number(&mut self, what: &str) -> Result<u32> {
        let token = self.next(what)?;
        token
            .parse()
            .map_err(|_| Error::parse(format!("{what} must be a whole number, got '{token}'")))
    }

    /// Reads a 1-based index and returns it 0-based.
    fn index(&mut self) -> Result<usize> {
        let token = self.next("index")?;
        match token.parse::<usize>() {
            Ok(index) if index > 0 => Ok(index - 1),
            _ => Err(Error::parse(format!(
                "index must be a positive number, got '{token}'"
            ))),
        }
    }

    /// Reads `as <role>`.
    fn role<R: Role>(&mut self) -> Result<R> {
        let word = self.next("'as'")?;
        if !word.eq_ignore_ascii_case("as") {
            return Err(Error::parse(format!("expected 'as', got '{word}'")));
        }
        R::parse(self.next("role")?)
    }

    fn finish(&self) -> Result<()> {
        match self.tokens.get(self.position) {
            Some(extra) => Err(Error::parse(format!("unexpected argument '{extra}'"))),
            None => Ok(()),
        }
    }
}
