//! Casting domain models.
//!
//! Provides the entity shapes shared by the matcher and the conflict
//! checker, plus the casting-selection map the host persists.
//!
//! # Domain Mappings
//!
//! | u-casting | Audiobook studio | Theatre | Agency |
//! |-----------|------------------|---------|--------|
//! | Role | Character slot | Part | Brief |
//! | Actor | Narrator / voice talent | Performer | Model |
//! | Availability | Bookouts, next-available | Conflicts calendar | Holds |
//! | CastingSelections | Primary/backup per role | Cast + understudy | Shortlist |
//!
//! All free-text fields are plain `String`s that default to empty, so
//! partially populated datastore rows deserialize without error.

mod actor;
mod calendar;
mod fields;
mod role;
mod selection;
mod verdict;

pub use actor::{find_actor_by_name, Actor, ActorStatus};
pub use calendar::{bookout_entries, malformed_bookouts, Availability, DateRange};
pub use role::{Role, CLIENT_REQUEST_MARKER};
pub use selection::{CastingSelection, CastingSelections, SelectionSlot, SELECTIONS_KEY};
pub use verdict::{ScheduleStatus, ScheduleVerdict};
