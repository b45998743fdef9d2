//! Native RAS parameter definitions.
//!
//! This module contains types for the constant groups the native RAS API
//! uses to configure connections and phone-book entries.
//!
//! Most types defined hereunder follow the same basic structure. They
//! are enums with all values the native API defines as variants. Unlike
//! an open registry, these groups are frozen contracts of the operating
//! system, so the enums are closed: an integer outside the group cannot
//! be turned into a value, which is checked when converting via
//! `from_int()` or `TryFrom`.
//!
//! There are two methods `from_int()` and `to_int()` to convert from and
//! to raw integer values as well as implementations of the `From` and
//! `TryFrom` traits for these. `FromStr` and `Display` are implemented
//! to convert from the symbolic names to the values and back.
//!
//! The idle-disconnect timeout is the odd one out: its integer domain is
//! an ordinary seconds count with two reserved sentinel values, so it is
//! a tagged type rather than a closed enum. See [`IdleDisconnectTimeout`].
//!
//! While each parameter type has a module of its own, they are all
//! re-exported here. This is mostly so we can have associated types like
//! `FromStrError` without having to resort to devilishly long names.

pub use self::autodial::AutoDialParameter;
pub use self::compression::CompressionType;
pub use self::credential::CredentialUpdateTarget;
pub use self::dialmode::DialMode;
pub use self::encryption::EncryptionType;
pub use self::idle::IdleDisconnectTimeout;
pub use self::lcpauth::LcpAuthType;
pub use self::phonebook::PhoneBookType;

#[macro_use]
mod macros;

pub mod autodial;
pub mod compression;
pub mod credential;
pub mod dialmode;
pub mod encryption;
pub mod idle;
pub mod lcpauth;
pub mod phonebook;
