//! Enumeration types accepted as string-coerced arguments, plus the
//! `to_enum` machinery shared by every one of them.

/// A fixed, named set of values that `to_enum` can parse a `Str` argument
/// into.
///
/// `NAMESPACE`/`TYPE_NAME` back the fully-qualified prefix stripping of
/// `to_enum` (e.g. accepting both `"OrdinalIgnoreCase"` and
/// `"System.StringComparison.OrdinalIgnoreCase"`); `MEMBERS` is matched
/// ordinally (case-sensitive) once any such prefix has been stripped.
pub trait EnumValue: Sized + Copy + 'static {
    const NAMESPACE: &'static str;
    const TYPE_NAME: &'static str;
    const MEMBERS: &'static [(&'static str, Self)];
}

/// String-comparison mode accepted by `EndsWith`, `IndexOf`, `LastIndexOf`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StringComparison {
    Ordinal,
    OrdinalIgnoreCase,
    CurrentCulture,
    CurrentCultureIgnoreCase,
    InvariantCulture,
    InvariantCultureIgnoreCase,
}

impl StringComparison {
    pub fn is_ignore_case(self) -> bool {
        matches!(
            self,
            StringComparison::OrdinalIgnoreCase
                | StringComparison::CurrentCultureIgnoreCase
                | StringComparison::InvariantCultureIgnoreCase
        )
    }
}

impl EnumValue for StringComparison {
    const NAMESPACE: &'static str = "System";
    const TYPE_NAME: &'static str = "StringComparison";
    const MEMBERS: &'static [(&'static str, Self)] = &[
        ("Ordinal", StringComparison::Ordinal),
        ("OrdinalIgnoreCase", StringComparison::OrdinalIgnoreCase),
        ("CurrentCulture", StringComparison::CurrentCulture),
        (
            "CurrentCultureIgnoreCase",
            StringComparison::CurrentCultureIgnoreCase,
        ),
        ("InvariantCulture", StringComparison::InvariantCulture),
        (
            "InvariantCultureIgnoreCase",
            StringComparison::InvariantCultureIgnoreCase,
        ),
    ];
}

/// Hash algorithm selector for `Intrinsic.StableStringHash`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HashAlgo {
    /// The hash used before the "17.10" feature wave.
    Legacy,
    /// The modern, FNV-1a-based hash.
    Fnv1a,
}

impl EnumValue for HashAlgo {
    const NAMESPACE: &'static str = "Microsoft.Build.Evaluation";
    const TYPE_NAME: &'static str = "HashAlgo";
    const MEMBERS: &'static [(&'static str, Self)] = &[
        ("Legacy", HashAlgo::Legacy),
        ("Fnv1a", HashAlgo::Fnv1a),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_comparison_ignore_case() {
        assert!(StringComparison::OrdinalIgnoreCase.is_ignore_case());
        assert!(!StringComparison::Ordinal.is_ignore_case());
    }
}
