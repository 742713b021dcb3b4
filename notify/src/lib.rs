//! Client for the `org.freedesktop.Notifications` desktop notification service.
//!
//! ```no_run
//! # async fn run() -> fdo_notify::Result<()> {
//! use fdo_notify::{Notification, Sender, Urgency};
//!
//! let sender = Sender::session().await?;
//! let id = sender
//!     .send(&Notification::new("MyApp", "Hello", "World").urgency(Urgency::Low))
//!     .await?;
//! sender
//!     .send(&Notification::new("MyApp", "Hello", "again").replaces_id(id))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod blocking;
mod dbus;
mod error;
mod hint;
mod notification;
mod sender;

pub use dbus::{CloseReason, Outcome, ServerInformation, PATH, SERVICE};
pub use error::{Error, MarshalingError, Result};
pub use hint::{Hint, Urgency};
pub use notification::{Notification, WireArgs};
pub use sender::{notify, Sender};
