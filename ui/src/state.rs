//! Plain state machines behind the page. Nothing in here touches the DOM,
//! the components own the signals and feed events in.

pub mod dates;
pub mod focus_trap;
pub mod guests;
pub mod media;
pub mod scroll_lock;
pub mod search;
pub mod visibility;
