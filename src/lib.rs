//! Transverse Mercator, UTM and fixed-zone national grid conversions.
//!
//! Forward and inverse mappings use closed-form series (meridian arc, footpoint
//! latitude, 8th-order TM expansion). Grid results pass a round-trip accuracy
//! gate before they reach the collaborators in [`survey`].

pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod proj;
pub mod survey;

pub use config::Config;
pub use coord::{GeographicCoordinate, GridCoordinate, Hemisphere, PlanarCoordinate, Zone};
pub use error::{CollaboratorError, ConfigError, GridError, ProjError};
pub use grid::{NationalGrid, RoundTripValidator};
pub use proj::utm::{geographic_to_utm, utm_to_geographic};
