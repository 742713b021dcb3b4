pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("bus connection failed: {0}")]
    Connection(#[source] zbus::Error),

    #[error("notification service error: {0}")]
    RemoteService(#[source] zbus::Error),

    #[error(transparent)]
    Marshaling(#[from] MarshalingError),
}

#[derive(Debug, thiserror::Error)]
pub enum MarshalingError {
    #[error("hint `{key}` has unsupported type `{signature}`")]
    UnsupportedHint { key: String, signature: String },

    #[error("{arg} contains a NUL byte")]
    InteriorNul { arg: &'static str },

    #[error("failed to encode arguments: {0}")]
    Variant(#[source] zbus::zvariant::Error),
}

impl Error {
    /// Anything that goes wrong while opening the bus connection.
    pub(crate) fn connect(e: zbus::Error) -> Self {
        Self::Connection(e)
    }
}

impl From<zbus::Error> for Error {
    fn from(e: zbus::Error) -> Self {
        match e {
            zbus::Error::InputOutput(_) | zbus::Error::Handshake(_) | zbus::Error::Address(_) => {
                Self::Connection(e)
            }
            zbus::Error::Variant(e) => Self::Marshaling(MarshalingError::Variant(e)),
            e => Self::RemoteService(e),
        }
    }
}

impl From<zbus::fdo::Error> for Error {
    fn from(e: zbus::fdo::Error) -> Self {
        zbus::Error::from(e).into()
    }
}
