#[derive(Debug, thiserror::Error)]
pub enum StatusbarError {
    #[error("Applet '{0}' does not exist")]
    UnknownApplet(String),
    #[error("Invalid applet descriptor: {0}")]
    InvalidDescriptor(String),
    #[error("{applet}: unknown option '{key}'")]
    UnknownOption { applet: String, key: String },
    #[error("{applet}.{key}: invalid value '{value}'")]
    InvalidOption { applet: String, key: String, value: String },
    #[error("{applet}: initialization failed: {reason}")]
    Init { applet: String, reason: String },
    #[error("No applets configured")]
    Empty,
}
