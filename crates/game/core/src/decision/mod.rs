//! Decision primitives the behavior nodes are built from.
//!
//! Everything here is a pure function of its inputs plus the per-actor state
//! passed in by the caller: no clocks, no global randomness, no logging.
//!
//! - [`PerceptionState`]: recency-windowed "last seen" bookkeeping
//! - [`has_line_of_sight`]: ray query that ignores chosen bodies and grazing hits
//! - [`CoverSearch`]: ring sampling plus path-cost scoring
//! - [`TargetAcquisition`]: enemy choice with a refresh cooldown

pub mod acquisition;
pub mod cover;
pub mod line_of_sight;
pub mod perception;

pub use acquisition::TargetAcquisition;
pub use cover::{CoverCandidate, CoverOutcome, CoverQuery, CoverSearch};
pub use line_of_sight::has_line_of_sight;
pub use perception::PerceptionState;
