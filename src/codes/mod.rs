//! The three closed code enumerations returned by the backend schema.
//!
//! Wire names are SCREAMING_SNAKE_CASE for parity with the server; every
//! enum is exhaustive over the codes its table covers, so table lookups are
//! total `match`es rather than fallible map gets.

/// Defines a code enum with serde wire names, an `ALL` slice, `as_str`,
/// `Display`, and `FromStr` (mapping unknown codes to the given error
/// variant). Keeps the variant/wire-name pairing in one place.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $err:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $code)] $variant, )+
        }

        impl $name {
            /// Every code, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Wire name of the code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self { $( Self::$variant => $code, )+ }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::errors::CopyError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    $( $code => Ok(Self::$variant), )+
                    _ => Err($crate::core::errors::CopyError::$err {
                        code: s.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use code_enum;

pub mod inappropriate;
pub mod reason;
pub mod subreason;
