//! Intent-, Command- und Notification-Enums für den Selektions-Datenfluss.

mod command;
mod intent;
mod notification;

pub use command::SelectionCommand;
pub use intent::SelectionIntent;
pub use notification::SelectionEvent;
