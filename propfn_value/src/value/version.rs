//! Dotted version numbers (`major.minor[.build[.revision]]`).

use std::fmt;

use crate::errors::DispatchError;

/// A version number with up to four components. `build` and `revision` use
/// `-1` as the "unset" sentinel.
///
/// `major` and `minor` are always set (>= 0) once a `Version` exists;
/// `Parse` rejects anything with fewer than two components.
///
/// Deriving `Ord` on the field tuple gives exactly the comparison rule this
/// type needs: lexicographic over `(major, minor, build, revision)` with
/// unset (`-1`) sorting below every non-negative value, since `-1 < n` holds
/// for every `n >= 0` already.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Version {
    pub major: i32,
    pub minor: i32,
    pub build: i32,
    pub revision: i32,
}

impl Version {
    pub const UNSET: i32 = -1;

    #[inline]
    pub const fn new(major: i32, minor: i32, build: i32, revision: i32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Number of components actually set (2, 3, or 4).
    pub fn field_count(&self) -> usize {
        if self.revision != Self::UNSET {
            4
        } else if self.build != Self::UNSET {
            3
        } else {
            2
        }
    }

    /// Format with exactly `fields` components (1-4), truncating or
    /// reporting unset components as the underlying operation failure they
    /// would be on the real platform.
    pub fn to_string_fields(&self, fields: usize) -> Result<String, DispatchError> {
        if fields == 0 || fields > 4 {
            return Err(DispatchError::new(format!(
                "field count {fields} is not a valid version field count (1-4)"
            )));
        }
        if fields >= 3 && self.build == Self::UNSET {
            return Err(DispatchError::new(
                "version does not have a build number to format",
            ));
        }
        if fields == 4 && self.revision == Self::UNSET {
            return Err(DispatchError::new(
                "version does not have a revision number to format",
            ));
        }
        let parts = [self.major, self.minor, self.build, self.revision];
        Ok(parts[..fields]
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join("."))
    }

    /// Parse a version string of 2 to 4 dot-separated non-negative
    /// components, e.g. `"1.2"`, `"1.2.3"`, `"1.2.3.4"`.
    pub fn parse(s: &str) -> Result<Self, DispatchError> {
        let parts: Vec<&str> = s.split('.').collect();
        if !(2..=4).contains(&parts.len()) {
            return Err(DispatchError::new(format!(
                "'{s}' is not a valid version (expected 2 to 4 dot-separated components)"
            )));
        }
        let mut fields = [Self::UNSET; 4];
        for (i, part) in parts.iter().enumerate() {
            let n: i32 = part
                .parse()
                .map_err(|_| DispatchError::new(format!("'{s}' is not a valid version")))?;
            if n < 0 {
                return Err(DispatchError::new(format!(
                    "'{s}' is not a valid version (components must be non-negative)"
                )));
            }
            fields[i] = n;
        }
        Ok(Self::new(fields[0], fields[1], fields[2], fields[3]))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.build != Self::UNSET {
            write!(f, ".{}", self.build)?;
        }
        if self.revision != Self::UNSET {
            write!(f, ".{}", self.revision)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_two_components() {
        let v = Version::parse("1.2").unwrap();
        assert_eq!(v, Version::new(1, 2, -1, -1));
    }

    #[test]
    fn parse_four_components() {
        let v = Version::parse("1.2.3.4").unwrap();
        assert_eq!(v, Version::new(1, 2, 3, 4));
    }

    #[test]
    fn parse_rejects_single_component() {
        assert!(Version::parse("1").is_err());
    }

    #[test]
    fn parse_rejects_negative_component() {
        assert!(Version::parse("1.-2").is_err());
    }

    #[test]
    fn ordering_unset_sorts_below_set() {
        let a = Version::new(1, 0, -1, -1);
        let b = Version::new(1, 0, 0, -1);
        assert!(a < b);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Version::new(1, 9, 0, 0) < Version::new(2, 0, 0, 0));
        assert!(Version::new(1, 2, 3, 4) == Version::new(1, 2, 3, 4));
    }

    #[test]
    fn to_string_fields_two() {
        let v = Version::new(1, 2, 3, 4);
        assert_eq!(v.to_string_fields(2).unwrap(), "1.2");
    }

    #[test]
    fn to_string_fields_rejects_unset_component() {
        let v = Version::new(1, 2, -1, -1);
        assert!(v.to_string_fields(3).is_err());
    }

    #[test]
    fn display_omits_unset_trailing_components() {
        assert_eq!(Version::new(1, 2, -1, -1).to_string(), "1.2");
        assert_eq!(Version::new(1, 2, 3, -1).to_string(), "1.2.3");
    }
}
