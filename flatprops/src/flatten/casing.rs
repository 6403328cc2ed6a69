//! Key casing applied to fully joined key paths.

use std::{fmt, str::FromStr};

/// Transform applied to every emitted key.
///
/// Casing runs on the whole joined path, so a delimiter-containing segment is
/// cased together with its neighbours. Every variant is idempotent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Casing {
    #[default]
    Unchanged,
    UpperCase,
    LowerCase,
}

impl Casing {
    pub fn apply(self, key: &str) -> String {
        match self {
            Casing::Unchanged => key.to_string(),
            Casing::UpperCase => key.to_uppercase(),
            Casing::LowerCase => key.to_lowercase(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Casing::Unchanged => "unchanged",
            Casing::UpperCase => "uppercase",
            Casing::LowerCase => "lowercase",
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a casing name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown casing `{0}`; expected `unchanged`, `uppercase` or `lowercase`")]
pub struct ParseCasingError(String);

impl FromStr for Casing {
    type Err = ParseCasingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "unchanged" | "none" => Ok(Casing::Unchanged),
            "uppercase" | "upper" => Ok(Casing::UpperCase),
            "lowercase" | "lower" => Ok(Casing::LowerCase),
            _ => Err(ParseCasingError(value.to_string())),
        }
    }
}

impl TryFrom<String> for Casing {
    type Error = ParseCasingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Casing> for String {
    fn from(casing: Casing) -> Self {
        casing.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Casing; 3] = [Casing::Unchanged, Casing::UpperCase, Casing::LowerCase];

    #[test]
    fn applies_to_the_whole_path() {
        assert_eq!(Casing::UpperCase.apply("PropD:PropF[0]"), "PROPD:PROPF[0]");
        assert_eq!(Casing::LowerCase.apply("PropD.PropE"), "propd.prope");
        assert_eq!(Casing::Unchanged.apply("PropD:PropE"), "PropD:PropE");
    }

    #[test]
    fn casing_is_idempotent() {
        for casing in ALL {
            for key in ["Prop", "ProP:Ünïcode[1]", "straße", ""] {
                let once = casing.apply(key);
                assert_eq!(casing.apply(&once), once, "{casing} on {key}");
            }
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("UPPER".parse::<Casing>().unwrap(), Casing::UpperCase);
        assert_eq!("LowerCase".parse::<Casing>().unwrap(), Casing::LowerCase);
        assert_eq!("unchanged".parse::<Casing>().unwrap(), Casing::Unchanged);
        for casing in ALL {
            assert_eq!(casing.as_str().parse::<Casing>().unwrap(), casing);
        }
    }

    #[test]
    fn unknown_casing_is_rejected() {
        let err = "snake".parse::<Casing>().unwrap_err();
        assert!(err.to_string().contains("unknown casing `snake`"));
    }
}
