use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouterErrorKind {
    /// Route is split, or its single leg does not carry the whole volume.
    InvalidRouteShape,
    MalformedIdentifier,
    /// A hop names an exchange missing from the adapter set.
    UnsupportedExchange,
    InvalidInput,
    Encoding,
}

impl RouterErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouterErrorKind::InvalidRouteShape => "invalid_route_shape",
            RouterErrorKind::MalformedIdentifier => "malformed_identifier",
            RouterErrorKind::UnsupportedExchange => "unsupported_exchange",
            RouterErrorKind::InvalidInput => "invalid_input",
            RouterErrorKind::Encoding => "encoding",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouterError {
    kind: RouterErrorKind,
    message: String,
}

impl RouterError {
    pub fn invalid_route_shape<T: Into<String>>(message: T) -> Self {
        Self {
            kind: RouterErrorKind::InvalidRouteShape,
            message: message.into(),
        }
    }

    pub fn malformed_identifier<T: Into<String>>(message: T) -> Self {
        Self {
            kind: RouterErrorKind::MalformedIdentifier,
            message: message.into(),
        }
    }

    pub fn unsupported_exchange<T: Into<String>>(message: T) -> Self {
        Self {
            kind: RouterErrorKind::UnsupportedExchange,
            message: message.into(),
        }
    }

    pub fn invalid<T: Into<String>>(message: T) -> Self {
        Self {
            kind: RouterErrorKind::InvalidInput,
            message: message.into(),
        }
    }

    pub fn encoding<T: Into<String>>(message: T) -> Self {
        Self {
            kind: RouterErrorKind::Encoding,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> RouterErrorKind {
        self.kind
    }
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for RouterError {}
