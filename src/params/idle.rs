//! Idle-disconnect timeouts.

//------------ IdleDisconnectTimeout -----------------------------------------

/// The raw value selecting the system-wide default timeout.
const DEFAULT: u32 = 0;

/// The raw value disabling idle disconnection, `i32::MAX` as the native
/// API defines it.
const DISABLED: u32 = 0x7FFF_FFFF;

/// Idle-disconnect timeouts.
///
/// A connection can be hung up automatically after it has been idle for
/// a number of seconds. The native API overloads that seconds count with
/// two sentinels: 0 selects the system-wide default and `i32::MAX`
/// disables idle disconnection altogether. This type keeps the three
/// cases apart instead of overloading the integer domain.
///
/// [`from_secs`][Self::from_secs] and the `From` impls canonicalise the
/// sentinel integers into their named variants, so converting a raw
/// value back and forth is exact. Comparison and hashing go through the
/// raw value, so a `Seconds` variant built directly with a sentinel
/// count still compares equal to the named variant.
#[derive(Clone, Copy, Debug)]
pub enum IdleDisconnectTimeout {
    /// Use the system-wide default timeout (0).
    Default,

    /// Never disconnect an idle connection (2147483647).
    Disabled,

    /// Disconnect after this many seconds of idle time.
    Seconds(u32),
}

impl IdleDisconnectTimeout {
    /// Creates a timeout from a seconds count.
    ///
    /// The sentinel counts are turned into their named variants.
    #[must_use]
    pub const fn from_secs(secs: u32) -> Self {
        match secs {
            DEFAULT => IdleDisconnectTimeout::Default,
            DISABLED => IdleDisconnectTimeout::Disabled,
            secs => IdleDisconnectTimeout::Seconds(secs),
        }
    }

    /// Returns the raw seconds count for a timeout.
    #[must_use]
    pub const fn to_secs(self) -> u32 {
        match self {
            IdleDisconnectTimeout::Default => DEFAULT,
            IdleDisconnectTimeout::Disabled => DISABLED,
            IdleDisconnectTimeout::Seconds(secs) => secs,
        }
    }

    /// Returns a timeout from its raw integer value.
    ///
    /// Unlike the closed parameter types, every integer is meaningful
    /// here, so this cannot fail.
    #[must_use]
    pub const fn from_int(value: u32) -> Self {
        Self::from_secs(value)
    }

    /// Returns the raw integer value for a timeout.
    #[must_use]
    pub const fn to_int(self) -> u32 {
        self.to_secs()
    }
}

//--- Default

impl Default for IdleDisconnectTimeout {
    fn default() -> Self {
        IdleDisconnectTimeout::Default
    }
}

//--- From

impl From<u32> for IdleDisconnectTimeout {
    fn from(value: u32) -> Self {
        IdleDisconnectTimeout::from_secs(value)
    }
}

impl From<IdleDisconnectTimeout> for u32 {
    fn from(value: IdleDisconnectTimeout) -> Self {
        value.to_secs()
    }
}

impl<'a> From<&'a IdleDisconnectTimeout> for u32 {
    fn from(value: &'a IdleDisconnectTimeout) -> Self {
        value.to_secs()
    }
}

//--- PartialEq and Eq

impl PartialEq for IdleDisconnectTimeout {
    fn eq(&self, other: &Self) -> bool {
        self.to_secs() == other.to_secs()
    }
}

impl PartialEq<u32> for IdleDisconnectTimeout {
    fn eq(&self, other: &u32) -> bool {
        self.to_secs() == *other
    }
}

impl PartialEq<IdleDisconnectTimeout> for u32 {
    fn eq(&self, other: &IdleDisconnectTimeout) -> bool {
        *self == other.to_secs()
    }
}

impl Eq for IdleDisconnectTimeout {}

//--- PartialOrd and Ord

impl PartialOrd for IdleDisconnectTimeout {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IdleDisconnectTimeout {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.to_secs().cmp(&other.to_secs())
    }
}

//--- Hash

impl core::hash::Hash for IdleDisconnectTimeout {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.to_secs().hash(state)
    }
}

//--- FromStr and Display

impl core::str::FromStr for IdleDisconnectTimeout {
    type Err = FromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("default") {
            Ok(IdleDisconnectTimeout::Default)
        } else if s.eq_ignore_ascii_case("disabled") {
            Ok(IdleDisconnectTimeout::Disabled)
        } else {
            s.parse()
                .map(IdleDisconnectTimeout::from_secs)
                .map_err(|_| FromStrError(()))
        }
    }
}

impl core::fmt::Display for IdleDisconnectTimeout {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            IdleDisconnectTimeout::Default => f.write_str("default"),
            IdleDisconnectTimeout::Disabled => f.write_str("disabled"),
            IdleDisconnectTimeout::Seconds(secs) => {
                write!(f, "{}", secs)
            }
        }
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for IdleDisconnectTimeout {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(&format_args!("{}", self))
        } else {
            self.to_secs().serialize(serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IdleDisconnectTimeout {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        struct TimeoutVisitor;

        impl<'de> serde::de::Visitor<'de> for TimeoutVisitor {
            type Value = IdleDisconnectTimeout;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("an idle-disconnect timeout")
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
                u32::try_from(v)
                    .map(IdleDisconnectTimeout::from_secs)
                    .map_err(E::custom)
            }

            fn visit_i64<E: serde::de::Error>(
                self,
                v: i64,
            ) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .map(IdleDisconnectTimeout::from_secs)
                    .map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(TimeoutVisitor)
        } else {
            u32::deserialize(deserializer)
                .map(IdleDisconnectTimeout::from_secs)
        }
    }
}

from_str_error!("illegal idle-disconnect timeout");

//============ Tests =========================================================
