//! State store
//!
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//! - Store: holds the current state and notifies subscribers
//! - Dispatcher: the five fetch operations that feed actions into the store

pub mod actions;
pub mod dispatcher;
pub mod handle;
pub mod reducer;
pub mod state;

pub use actions::{Action, RequestKind};
pub use dispatcher::{Dispatcher, Outcome};
pub use handle::{Store, Ticket};
pub use reducer::reduce;
pub use state::AppState;
