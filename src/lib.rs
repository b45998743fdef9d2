//! Typed Windows Remote Access Service (RAS) parameters.
//!
//! The native RAS API configures dial-up and VPN connections through a
//! number of small constant groups: how multilink subentries are dialed,
//! which compression and encryption to negotiate, where a phone-book
//! entry lives, and so on. This crate gives each of those groups a typed
//! Rust representation that carries exactly the integer value the
//! operating system defines, so values can be marshalled into native
//! calls without loss and mapped back to symbolic names for diagnostics.
//!
//! All parameter types live in the [params] module and are re-exported
//! from there. The crate contains no connection management of its own;
//! it is the vocabulary a RAS client builds on.
//!
//! # Reference of Feature Flags
//!
//! * `std`: support for the standard library. Enabled by default and
//!   currently only gates the `std::error::Error` impls of the error
//!   types; the crate itself is `no_std`.
//! * `serde`: serialization and deserialization of all parameter types
//!   via the [serde](https://serde.rs/) crate. Human-readable formats
//!   use the symbolic name, compact formats the raw integer value.
//! * `default-creds`: enables
#![cfg_attr(feature = "default-creds", doc = "   [`CredentialUpdateTarget::AllUsers`][params::CredentialUpdateTarget::AllUsers],")]
#![cfg_attr(not(feature = "default-creds"), doc = "   `CredentialUpdateTarget::AllUsers`,")]
//!   the per-machine credential update target. The underlying native
//!   capability only exists on Windows editions that can store default
//!   credentials for all users, so the variant is kept out of the type
//!   entirely on builds that target anything else.
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "std")]
#[allow(unused_imports)] // Import macros even if unused.
#[macro_use]
extern crate std;

pub mod params;
