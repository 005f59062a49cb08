//! # Topics that subscribers register for.
//!
//! [`Subject`] is a closed enumeration: adding a topic means adding a variant,
//! not passing an arbitrary string. Each variant has a stable string value used
//! in logs and accepted by [`FromStr`](std::str::FromStr).
//!
//! ## Example
//! ```rust
//! use newsvisor::Subject;
//!
//! let s: Subject = "politics".parse().unwrap();
//! assert_eq!(s, Subject::Politics);
//! assert_eq!(Subject::Sports.to_string(), "sports");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ParseSubjectError;

/// Topic identifier used as the publisher's lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Subject {
    /// Sports news.
    Sports,
    /// Political news.
    Politics,
}

impl Subject {
    /// Every subject, in declaration order.
    pub const ALL: [Subject; 2] = [Subject::Sports, Subject::Politics];

    /// Returns the stable string value of this subject.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Sports => "sports",
            Subject::Politics => "politics",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = ParseSubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| ParseSubjectError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_subjects() {
        for subject in Subject::ALL {
            assert_eq!(subject.as_str().parse::<Subject>(), Ok(subject));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Sports".parse::<Subject>().unwrap_err();
        assert_eq!(err.to_string(), "unknown subject \"Sports\"");
    }
}
