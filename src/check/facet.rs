//! Facet definitions for classified results
//!
//! A facet names the error class a result was reported under.

use std::fmt;

/// The error class of a reported result
///
/// Exactly one facet is selected per reported result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    /// No HTTP response was obtained, or a watched 4xx status was observed
    Connect,

    /// Reserved for a distinct client-error class; never selected by `classify`
    Client,

    /// A watched 5xx status was observed
    Server,

    /// A watched 3xx status was observed
    Redirect,
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "connect"),
            Self::Client => write!(f, "client"),
            Self::Server => write!(f, "server"),
            Self::Redirect => write!(f, "redirect"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Facet::Connect.to_string(), "connect");
        assert_eq!(Facet::Server.to_string(), "server");
        assert_eq!(Facet::Redirect.to_string(), "redirect");
    }
}
