//! Encryption requirements.

//------------ EncryptionType ------------------------------------------------

param_enum! {
    /// Encryption requirements.
    ///
    /// Specifies how strongly a connection insists on link encryption:
    /// none at all, required, required at maximum strength, or used
    /// opportunistically when the server offers it. These mirror the
    /// `ET_` constants of the native API.
    =>
    EncryptionType, u32;

    /// No encryption is used (0).
    (None => 0, "None")

    /// Encryption is required (1).
    ///
    /// The connection is dropped if the server cannot negotiate it.
    (Require => 1, "Require")

    /// Maximum-strength encryption is required (2).
    (RequireMax => 2, "RequireMax")

    /// Encryption is used if available but not required (3).
    (Optional => 3, "Optional")
}

param_enum_str!(EncryptionType, u32, "unknown encryption type");

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::EncryptionType;

    #[test]
    fn values() {
        assert_eq!(EncryptionType::None.to_int(), 0);
        assert_eq!(EncryptionType::Require.to_int(), 1);
        assert_eq!(EncryptionType::RequireMax.to_int(), 2);
        assert_eq!(EncryptionType::Optional.to_int(), 3);
    }

    #[test]
    fn try_from() {
        use core::convert::TryFrom;

        assert_eq!(
            EncryptionType::try_from(2),
            Ok(EncryptionType::RequireMax)
        );
        assert_eq!(EncryptionType::try_from(4).unwrap_err().value(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Configure, Token};

        assert_tokens(
            &EncryptionType::Require.readable(),
            &[Token::Str("Require")],
        );
        assert_tokens(&EncryptionType::Require.compact(), &[Token::U32(1)]);
    }
}
