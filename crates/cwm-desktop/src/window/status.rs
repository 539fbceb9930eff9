//! Status codes returned by registry mutations

use serde::Serialize;

/// Outcome of a targeted registry mutation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "u16")]
pub enum Status {
    /// An entry matched the predicate
    Ok,
    /// No entry matched
    NotFound,
}

impl Status {
    /// Numeric status code (200 or 404)
    #[inline]
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::NotFound => 404,
        }
    }

    #[inline]
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> u16 {
        status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(Status::Ok.code(), 200);
        assert_eq!(Status::NotFound.code(), 404);
        assert!(Status::Ok.is_ok());
        assert!(!Status::NotFound.is_ok());
    }

    #[test]
    fn test_status_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Status::NotFound).unwrap(), "404");
    }
}
