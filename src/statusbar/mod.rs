pub mod types;
pub mod error;
pub mod applet;
pub mod descriptor;
pub mod registry;
pub mod bar;
pub mod protocol;

pub use types::{Header, Message, Segment};
pub use error::StatusbarError;
pub use applet::{with_icon, Applet};
pub use descriptor::{AppletDescriptor, Options};
pub use registry::{AppletFactory, AppletRegistry};
pub use bar::Statusbar;
