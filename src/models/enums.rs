use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string form doubles as the serialized form.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Frequency {
    OnceDaily => "Once daily",
    TwiceDaily => "Twice daily",
    ThreeTimesDaily => "Three times daily",
    FourTimesDaily => "Four times daily",
    AsNeeded => "As needed",
    EveryOtherDay => "Every other day",
    OnceWeekly => "Once weekly",
    BedtimeOnly => "Bedtime only",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn frequency_round_trip() {
        for (variant, s) in [
            (Frequency::OnceDaily, "Once daily"),
            (Frequency::TwiceDaily, "Twice daily"),
            (Frequency::ThreeTimesDaily, "Three times daily"),
            (Frequency::FourTimesDaily, "Four times daily"),
            (Frequency::AsNeeded, "As needed"),
            (Frequency::EveryOtherDay, "Every other day"),
            (Frequency::OnceWeekly, "Once weekly"),
            (Frequency::BedtimeOnly, "Bedtime only"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Frequency::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn all_lists_every_schedule_in_order() {
        assert_eq!(Frequency::ALL.len(), 8);
        assert_eq!(Frequency::ALL[0], Frequency::OnceDaily);
        assert_eq!(Frequency::ALL[7], Frequency::BedtimeOnly);
    }

    #[test]
    fn frequency_serializes_as_label() {
        let json = serde_json::to_string(&Frequency::EveryOtherDay).unwrap();
        assert_eq!(json, "\"Every other day\"");
        let parsed: Frequency = serde_json::from_str("\"As needed\"").unwrap();
        assert_eq!(parsed, Frequency::AsNeeded);
    }

    #[test]
    fn invalid_enum_returns_error() {
        assert!(Frequency::from_str("").is_err());
        assert!(Frequency::from_str("once daily").is_err());
        assert_eq!(
            Frequency::from_str("Hourly").unwrap_err(),
            ModelError::InvalidEnum {
                field: "Frequency".into(),
                value: "Hourly".into(),
            }
        );
    }
}
