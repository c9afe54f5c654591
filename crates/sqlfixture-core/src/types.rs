use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Declares a closed label vocabulary rendered as quoted SQL strings.
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal { $($variant:ident => $label:tt),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every label in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($label => Ok($name::$variant),)+
                    _ => Err(Error::UnknownLabel {
                        kind: $kind,
                        label: value.to_string(),
                    }),
                }
            }
        }
    };
}

label_enum! {
    /// Trading account a position is booked on.
    Account, "account" {
        One => "one",
        Two => "two",
        Three => "three",
    }
}

label_enum! {
    /// Direction of a position.
    PositionType, "position_type" {
        Long => "LONG",
        Short => "SHORT",
    }
}

label_enum! {
    /// Lifecycle status of the order behind a position.
    PositionStatus, "order_status" {
        Pending => "PENDING",
        Settled => "SETTLED",
        Filled => "FILLED",
    }
}

label_enum! {
    OrderType, "order_type" {
        Limit => "LIMIT",
        Market => "MARKET",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back_to_variants() {
        for account in Account::ALL {
            assert_eq!(account.label().parse::<Account>(), Ok(*account));
        }
        for status in PositionStatus::ALL {
            assert_eq!(status.to_string().parse::<PositionStatus>(), Ok(*status));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "long".parse::<PositionType>().unwrap_err();
        assert_eq!(
            err,
            Error::UnknownLabel {
                kind: "position_type",
                label: "long".to_string(),
            }
        );
        assert!("STOP".parse::<OrderType>().is_err());
    }
}
