//! Hemispheres of the coordinates and the (latitude, longitude) pair

pub use self::point::Coordinates;

mod point;

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum associated with the boolean type
/// and with a single character representation
macro_rules! bool_enum {
    ($(#[$meta:meta])* $name:ident: $truthy:ident and $falsy:ident; parse from $true_ch:literal:$false_ch:literal with $parse_err:ident) => {
        pub use self::$name::{$falsy, $truthy};

        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
        pub enum $name {
            #[doc = concat!("Represented with the `", $true_ch, "` character")]
            $truthy,
            #[doc = concat!("Represented with the `", $false_ch, "` character")]
            $falsy,
        }

        impl $name {
            /// The single character representation
            pub const fn symbol(self) -> char {
                match self {
                    $truthy => $true_ch,
                    $falsy => $false_ch,
                }
            }
        }

        impl ::std::ops::Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self {
                    $falsy => $truthy,
                    $truthy => $falsy,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    $truthy
                } else {
                    $falsy
                }
            }
        }

        impl From<$name> for bool {
            fn from(val: $name) -> Self {
                val == $truthy
            }
        }

        #[derive(Debug, Clone, PartialEq, Eq)]
        #[doc = concat!("Failed to recognize the `", stringify!($name), "` symbol")]
        pub struct $parse_err {
            failed: char,
        }

        impl ::std::fmt::Display for $parse_err {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(
                    f,
                    "Cannot parse {} from {:?}",
                    stringify!($name),
                    self.failed
                )
            }
        }

        impl ::std::error::Error for $parse_err {}

        impl TryFrom<char> for $name {
            type Error = $parse_err;

            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c {
                    $true_ch => Ok($truthy),
                    $false_ch => Ok($falsy),
                    _ => Err($parse_err { failed: c }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.symbol())
            }
        }
    };
}

bool_enum!(
    /// Hemisphere of a latitude relative to the equator
    Pole: North and South; parse from 'N':'S' with ParsePoleError
);

bool_enum!(
    /// Hemisphere of a longitude relative to the prime meridian
    RotationalDirection: East and West; parse from 'E':'W' with ParseRotationalDirectionError
);
