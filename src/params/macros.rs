//! Macros making implementing the parameter types easier.

/// Creates a closed parameter type over an integer contract.
///
/// This builds an enum with explicit discriminants and adds impls for
/// `From`, `TryFrom`, and the integer and mnemonic conversion methods.
/// A variant can be marked `@if "feature"` to tie its existence to a
/// cargo feature.
///
/// For `FromStr`, `Display`, and serde, see [`param_enum_str!`].
macro_rules! param_enum {
    ( $(#[$attr:meta])* =>
      $paramtype:ident, $inttype:ident;
      $( $(#[$variant_attr:meta])*
         $( @if $cfgfeat:literal )?
         ( $variant:ident => $value:literal, $mnemonic:literal ) )* ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[repr($inttype)]
        pub enum $paramtype {
            $(
                $(#[$variant_attr])*
                $( #[cfg(feature = $cfgfeat)] )?
                $variant = $value,
            )*
        }

        impl $paramtype {
            /// Returns a value from its raw integer value.
            ///
            /// Returns `None` if the native API does not define the
            /// value.
            #[must_use]
            pub const fn from_int(value: $inttype) -> Option<Self> {
                match value {
                    $(
                        $( #[cfg(feature = $cfgfeat)] )?
                        $value => Some($paramtype::$variant),
                    )*
                    _ => None,
                }
            }

            /// Returns the raw integer value for a value.
            #[must_use]
            pub const fn to_int(self) -> $inttype {
                self as $inttype
            }

            /// Returns a value from its mnemonic, ignoring ASCII case.
            #[must_use]
            pub fn from_mnemonic(m: &[u8]) -> Option<Self> {
                $(
                    $( #[cfg(feature = $cfgfeat)] )?
                    {
                        if m.eq_ignore_ascii_case($mnemonic.as_bytes()) {
                            return Some($paramtype::$variant)
                        }
                    }
                )*
                None
            }

            /// Returns the mnemonic for this value.
            #[must_use]
            pub const fn to_mnemonic(self) -> &'static str {
                match self {
                    $(
                        $( #[cfg(feature = $cfgfeat)] )?
                        $paramtype::$variant => $mnemonic,
                    )*
                }
            }
        }

        //--- From and TryFrom

        impl From<$paramtype> for $inttype {
            fn from(value: $paramtype) -> Self {
                value.to_int()
            }
        }

        impl<'a> From<&'a $paramtype> for $inttype {
            fn from(value: &'a $paramtype) -> Self {
                value.to_int()
            }
        }

        impl core::convert::TryFrom<$inttype> for $paramtype {
            type Error = UnknownValueError;

            fn try_from(value: $inttype) -> Result<Self, Self::Error> {
                $paramtype::from_int(value).ok_or(UnknownValueError(value))
            }
        }

        //--- UnknownValueError

        /// An integer value the native API does not define.
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub struct UnknownValueError($inttype);

        impl UnknownValueError {
            /// Returns the rejected raw value.
            #[must_use]
            pub fn value(self) -> $inttype {
                self.0
            }
        }

        impl core::fmt::Display for UnknownValueError {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(
                    f,
                    concat!("unknown ", stringify!($paramtype), " value {}"),
                    self.0
                )
            }
        }

        #[cfg(feature = "std")]
        impl std::error::Error for UnknownValueError {}
    }
}

/// Adds impls for `FromStr` and `Display` to the type given as first
/// argument.
///
/// For `FromStr`, recognizes all mnemonics case-insensitively as well as
/// a decimal number naming a defined value.
///
/// For `Display`, it will display the mnemonic. Since the types are
/// closed, every value has one.
///
/// If the `serde` feature is enabled, also adds implementations for
/// `Serialize` and `Deserialize`. Values will be serialized using the
/// mnemonic for human readable formats and the integer value for compact
/// formats. Both mnemonics and integer values can be deserialized.
macro_rules! param_enum_str {
    ($paramtype:ident, $inttype:ident, $error:expr) => {
        impl $paramtype {
            #[must_use]
            pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
                $paramtype::from_mnemonic(bytes).or_else(|| {
                    core::str::from_utf8(bytes)
                        .ok()
                        .and_then(|r| r.parse().ok())
                        .and_then($paramtype::from_int)
                })
            }
        }

        impl core::str::FromStr for $paramtype {
            type Err = FromStrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // We assume all mnemonics are always ASCII, so using
                // the bytes representation of `s` is safe.
                match $paramtype::from_mnemonic(s.as_bytes()) {
                    Some(res) => Ok(res),
                    None => s
                        .parse()
                        .ok()
                        .and_then($paramtype::from_int)
                        .ok_or(FromStrError(())),
                }
            }
        }

        impl core::fmt::Display for $paramtype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str(self.to_mnemonic())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $paramtype {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                if serializer.is_human_readable() {
                    serializer.serialize_str(self.to_mnemonic())
                } else {
                    self.to_int().serialize(serializer)
                }
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $paramtype {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                struct ParamVisitor;

                impl<'de> serde::de::Visitor<'de> for ParamVisitor {
                    type Value = $paramtype;

                    fn expecting(
                        &self,
                        f: &mut core::fmt::Formatter,
                    ) -> core::fmt::Result {
                        f.write_str(concat!(
                            "a ",
                            stringify!($paramtype),
                            " mnemonic or raw value"
                        ))
                    }

                    fn visit_str<E: serde::de::Error>(
                        self,
                        v: &str,
                    ) -> Result<Self::Value, E> {
                        v.parse().map_err(E::custom)
                    }

                    fn visit_u64<E: serde::de::Error>(
                        self,
                        v: u64,
                    ) -> Result<Self::Value, E> {
                        $inttype::try_from(v)
                            .ok()
                            .and_then($paramtype::from_int)
                            .ok_or_else(|| E::custom($error))
                    }

                    fn visit_i64<E: serde::de::Error>(
                        self,
                        v: i64,
                    ) -> Result<Self::Value, E> {
                        $inttype::try_from(v)
                            .ok()
                            .and_then($paramtype::from_int)
                            .ok_or_else(|| E::custom($error))
                    }
                }

                if deserializer.is_human_readable() {
                    deserializer.deserialize_any(ParamVisitor)
                } else {
                    let value =
                        <$inttype as serde::Deserialize>::deserialize(
                            deserializer,
                        )?;
                    $paramtype::from_int(value).ok_or_else(|| {
                        <D::Error as serde::de::Error>::custom($error)
                    })
                }
            }
        }

        from_str_error!($error);
    };
}

macro_rules! from_str_error {
    ($description:expr) => {
        /// An error returned when parsing from a string failed.
        #[derive(Clone, Debug)]
        pub struct FromStrError(());

        #[cfg(feature = "std")]
        impl std::error::Error for FromStrError {}

        impl core::fmt::Display for FromStrError {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                $description.fmt(f)
            }
        }
    };
}
