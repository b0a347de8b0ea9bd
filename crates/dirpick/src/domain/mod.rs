//! Plain data shared by the picker core and its host.

pub mod entry;
pub mod error;
pub mod event;
pub mod input;
pub mod session;

pub use entry::{DIRECTORY_MARKER, Entry, GO_UP_NAME};
pub use error::{ErrorKind, PickerError};
pub use event::{PickerEvent, SelectionMove};
pub use input::InputState;
pub use session::{ContextHandle, Session};
