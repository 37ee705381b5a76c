//! Value objects - Immutable objects defined by their attributes

mod activity;
mod affection;
mod ending;
mod ids;
mod interaction;
mod scene;
mod stats;

pub use activity::{Activity, ActivityEffect, MIN_ACTIVITY_STAMINA};
pub use affection::{Affection, AFFECTION_MAX};
pub use ending::{EndingKind, CAMPAIGN_DAYS, FRIENDSHIP_THRESHOLD, ROMANCE_THRESHOLD};
pub use ids::*;
pub use interaction::InteractionKind;
pub use scene::{Location, TimeOfDay};
pub use stats::{apply_floored, StatKind, Stats};
