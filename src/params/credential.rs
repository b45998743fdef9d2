//! Credential update targets.

//------------ CredentialUpdateTarget ----------------------------------------

param_enum! {
    /// Credential update targets.
    ///
    /// When the credentials stored for a phone-book entry change, the
    /// update names where the new credentials should be persisted: for
    /// the current user or, where the platform can store default
    /// credentials, for all users of the machine.
    ///
    /// The all-users target maps to the `RASCM_DefaultCreds` capability
    /// of the native API, which only exists on Windows editions that
    /// support per-machine default dial-up credentials. It is therefore
    /// only part of this type when the `default-creds` feature is
    /// enabled; builds without the capability cannot construct or match
    /// the value at all.
    =>
    CredentialUpdateTarget, u32;

    /// Credentials are not persisted (0).
    (None => 0, "None")

    /// Credentials are stored for the current user (1).
    (User => 1, "User")

    /// Credentials are stored as the machine-wide defaults (2).
    #[cfg_attr(docsrs, doc(cfg(feature = "default-creds")))]
    @if "default-creds"
    (AllUsers => 2, "AllUsers")
}

param_enum_str!(CredentialUpdateTarget, u32, "unknown credential target");

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::CredentialUpdateTarget;

    #[test]
    fn values() {
        assert_eq!(CredentialUpdateTarget::None.to_int(), 0);
        assert_eq!(CredentialUpdateTarget::User.to_int(), 1);
        #[cfg(feature = "default-creds")]
        assert_eq!(CredentialUpdateTarget::AllUsers.to_int(), 2);
    }

    #[test]
    fn gated_value() {
        #[cfg(feature = "default-creds")]
        assert_eq!(
            CredentialUpdateTarget::from_int(2),
            Some(CredentialUpdateTarget::AllUsers)
        );
        #[cfg(not(feature = "default-creds"))]
        assert_eq!(CredentialUpdateTarget::from_int(2), None);
    }

    #[test]
    fn gated_mnemonic() {
        #[cfg(feature = "default-creds")]
        assert_eq!(
            CredentialUpdateTarget::from_mnemonic(b"AllUsers"),
            Some(CredentialUpdateTarget::AllUsers)
        );
        #[cfg(not(feature = "default-creds"))]
        assert_eq!(CredentialUpdateTarget::from_mnemonic(b"AllUsers"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Configure, Token};

        assert_tokens(
            &CredentialUpdateTarget::User.readable(),
            &[Token::Str("User")],
        );
        assert_tokens(
            &CredentialUpdateTarget::User.compact(),
            &[Token::U32(1)],
        );
    }
}
