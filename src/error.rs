//! Error types for routing and session operations.
//!
//! None of these are fatal: callers log them and leave the map as it was.

use std::fmt;

#[derive(Debug)]
pub enum RouteError {
    /// Transport failure or non-success HTTP status.
    Http(reqwest::Error),
    /// The backend answered but had no route between the points.
    NoRoute(String),
    /// The route geometry could not be decoded.
    InvalidGeometry,
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Http(err) => write!(f, "route request failed: {}", err),
            RouteError::NoRoute(code) => write!(f, "no route available ({})", code),
            RouteError::InvalidGeometry => write!(f, "route geometry is malformed"),
        }
    }
}

impl std::error::Error for RouteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouteError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RouteError {
    fn from(err: reqwest::Error) -> Self {
        RouteError::Http(err)
    }
}

#[derive(Debug)]
pub enum SessionError {
    /// The location provider has not produced a fix yet.
    PositionUnavailable,
    /// No point has been tapped, so there is nowhere to route to.
    NoDestination,
    Route(RouteError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::PositionUnavailable => write!(f, "user position is not known yet"),
            SessionError::NoDestination => write!(f, "no destination has been selected"),
            SessionError::Route(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Route(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RouteError> for SessionError {
    fn from(err: RouteError) -> Self {
        SessionError::Route(err)
    }
}
