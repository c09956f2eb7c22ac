//! GUID (128-bit globally unique identifier) values.

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::DispatchError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Guid(pub [u8; 16]);

impl Guid {
    /// Generate a new GUID. Entropy comes from `RandomState`'s OS-seeded
    /// keys combined with the current time and a process-wide counter, so
    /// no dependency on a dedicated RNG crate is needed for what is, here,
    /// an identifier generator rather than a cryptographic primitive.
    pub fn new_guid() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);

        let mut bytes = [0u8; 16];
        for (half, salt) in [(0..8, 0u64), (8..16, 1u64)] {
            let state = std::collections::hash_map::RandomState::new();
            let mut hasher = state.build_hasher();
            nanos.hash(&mut hasher);
            seq.hash(&mut hasher);
            salt.hash(&mut hasher);
            bytes[half].copy_from_slice(&hasher.finish().to_le_bytes());
        }
        Guid(bytes)
    }

    pub fn parse(s: &str) -> Result<Self, DispatchError> {
        let hex: String = s
            .chars()
            .filter(|c| !matches!(c, '{' | '}' | '(' | ')' | '-'))
            .collect();
        if hex.len() != 32 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DispatchError::new(format!("'{s}' is not a valid GUID")));
        }
        let mut bytes = [0u8; 16];
        for i in 0..16 {
            bytes[i] = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| DispatchError::new(format!("'{s}' is not a valid GUID")))?;
        }
        Ok(Guid(bytes))
    }

    /// Format per a subset of .NET's GUID format specifiers: `N` (32 hex
    /// digits), `D` (dashed, the default), `B` (braces), `P` (parens).
    pub fn to_string_format(&self, format: &str) -> Result<String, DispatchError> {
        let hex = self.hex();
        match format {
            "N" => Ok(hex),
            "D" | "" => Ok(Self::dashed(&hex)),
            "B" => Ok(format!("{{{}}}", Self::dashed(&hex))),
            "P" => Ok(format!("({})", Self::dashed(&hex))),
            other => Err(DispatchError::new(format!(
                "'{other}' is not a supported GUID format"
            ))),
        }
    }

    fn hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    fn dashed(hex: &str) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        )
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::dashed(&self.hex()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_dashed_round_trips() {
        let s = "01234567-89ab-cdef-0123-456789abcdef";
        let g = Guid::parse(s).unwrap();
        assert_eq!(g.to_string(), s);
    }

    #[test]
    fn parse_braces_and_parens_and_bare_hex() {
        let dashed = "01234567-89ab-cdef-0123-456789abcdef";
        let a = Guid::parse("{01234567-89ab-cdef-0123-456789abcdef}").unwrap();
        let b = Guid::parse("(01234567-89ab-cdef-0123-456789abcdef)").unwrap();
        let c = Guid::parse("0123456789abcdef0123456789abcdef").unwrap();
        assert_eq!(a.to_string(), dashed);
        assert_eq!(b.to_string(), dashed);
        assert_eq!(c.to_string(), dashed);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(Guid::parse("not-a-guid").is_err());
    }

    #[test]
    fn new_guid_generates_distinct_values() {
        let a = Guid::new_guid();
        let b = Guid::new_guid();
        assert_ne!(a, b);
    }

    #[test]
    fn to_string_format_n_has_no_dashes() {
        let g = Guid::parse("01234567-89ab-cdef-0123-456789abcdef").unwrap();
        assert_eq!(g.to_string_format("N").unwrap(), "0123456789abcdef0123456789abcdef");
    }

    #[test]
    fn to_string_format_rejects_unknown_format() {
        let g = Guid::new_guid();
        assert!(g.to_string_format("X").is_err());
    }
}
