//! Casting framework for the U-Engine ecosystem.
//!
//! Ranks voice talent against role requirements and checks booked talent
//! for date conflicts. Both engines are pure functions over in-memory
//! snapshots of roles and actors; persistence, UI and live updates belong
//! to the host application.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Role`, `Actor`, `Availability`,
//!   `DateRange`, `ScheduleVerdict`, `CastingSelections`
//! - **`matching`**: Candidate ranking: gender wall, client-request winner,
//!   weighted scoring rules, `MatchEngine`
//! - **`scheduler`**: Conflict checks per candidate date and availability
//!   summaries
//! - **`dates`**: Lenient calendar-date parsing and `M/D/YYYY` display
//! - **`config`**: Match weight table
//! - **`validation`**: Roster and selection integrity checks (duplicate IDs,
//!   malformed bookouts, dangling selections)
//!
//! # Architecture
//!
//! The matcher and the conflict checker never call each other; they share
//! only the entity shapes in `models`. The host ranks candidates first,
//! stores the chosen primary/backup actors in `CastingSelections`, then
//! checks each selected actor against the production's candidate dates.
//!
//! Both engines are total: missing roles, empty rosters and unreadable
//! dates degrade to empty results or `UNKNOWN` verdicts instead of errors.

pub mod config;
pub mod dates;
pub mod error;
pub mod matching;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{CastingError, CastingResult};
