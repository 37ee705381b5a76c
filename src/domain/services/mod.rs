//! Domain services - the game progression engine
//!
//! Every function here is a pure transformation: it borrows the current
//! `PlayerState`, never mutates it, and returns a new value. Randomness is
//! only used by event selection and always comes from the caller.

mod activity;
mod choice_resolution;
mod ending;
mod event_selection;
mod interaction;
mod outcome;
mod shop;

pub use activity::{advance_time, apply_activity, move_to};
pub use choice_resolution::resolve_choice;
pub use ending::determine_ending;
pub use event_selection::select_event;
pub use interaction::interact;
pub use outcome::{ActionOutcome, ActivityOutcome, InteractionOutcome, RejectedAction};
pub use shop::purchase_item;
