//! Available subcommands.

use std::path::PathBuf;

use clap::Subcommand;
use wayfinder_core::LocationField;

/// Available commands for the navigation assistant.
#[derive(Subcommand)]
pub enum Commands {
    /// List rooms, optionally filtered the way the location inputs suggest them
    Rooms {
        /// Only rooms whose name contains this text (any case)
        #[arg(short, long)]
        filter: Option<String>,
        /// Floor tab to show; only floor 1 is mapped
        #[arg(long, default_value_t = 1)]
        floor: u8,
    },

    /// Find and draw a route between two rooms
    Route {
        /// Current location
        #[arg(long)]
        from: String,
        /// Destination
        #[arg(long)]
        to: String,
        /// Write the drawn floor plan overlay to this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Fill a location by voice, using typed transcripts in place of a microphone
    Listen {
        /// Which input to fill: current (from) or destination (to)
        #[arg(long, default_value = "destination")]
        field: LocationField,
        /// A recognized alternative, most likely first; repeat for more
        #[arg(long = "heard")]
        heard: Vec<String>,
        /// Act as if microphone access was refused
        #[arg(long, conflicts_with = "heard")]
        deny_microphone: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::parser::Cli;

    #[test]
    fn test_route_args() {
        let cli = Cli::parse_from([
            "wayfinder", "route", "--from", "Library", "--to", "Gym", "--svg", "out.svg",
        ]);
        match cli.command {
            Commands::Route { from, to, svg } => {
                assert_eq!(from, "Library");
                assert_eq!(to, "Gym");
                assert_eq!(svg, Some(PathBuf::from("out.svg")));
            }
            _ => panic!("expected route"),
        }
    }

    #[test]
    fn test_listen_defaults_to_destination() {
        let cli = Cli::parse_from(["wayfinder", "listen", "--heard", "the gym"]);
        match cli.command {
            Commands::Listen { field, heard, deny_microphone } => {
                assert_eq!(field, LocationField::Destination);
                assert_eq!(heard, ["the gym"]);
                assert!(!deny_microphone);
            }
            _ => panic!("expected listen"),
        }
    }

    #[test]
    fn test_listen_field_aliases() {
        let cli = Cli::parse_from(["wayfinder", "listen", "--field", "from"]);
        assert!(matches!(
            cli.command,
            Commands::Listen { field: LocationField::Current, .. }
        ));
    }

    #[test]
    fn test_rooms_floor_default() {
        let cli = Cli::parse_from(["wayfinder", "rooms"]);
        assert!(matches!(cli.command, Commands::Rooms { floor: 1, filter: None }));
    }

    #[test]
    fn test_deny_microphone_conflicts_with_heard() {
        let result = Cli::try_parse_from([
            "wayfinder", "listen", "--heard", "gym", "--deny-microphone",
        ]);
        assert!(result.is_err());
    }
}
