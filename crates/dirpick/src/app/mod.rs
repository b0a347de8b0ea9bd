//! Picker core: filtering, selection, list sync, navigation, and the
//! session state machine.
//!
//! Everything here is host-agnostic; the terminal front end lives in
//! [`crate::runtime`] and talks to the core through [`PickerHost`] and
//! [`crate::domain::PickerEvent`].

mod controller;
mod filter;
mod host;
mod navigation;
mod selection;
mod service;
mod sync;
mod view;

pub use controller::{PickerState, SessionController, Transition};
pub use filter::FuzzyFilterAdapter;
pub use host::PickerHost;
pub use navigation::{NavigationController, NavigationOutcome};
pub use selection::SelectionController;
pub use service::PickerService;
pub use sync::{ListSyncEngine, SyncOutcome};
pub use view::ListView;
