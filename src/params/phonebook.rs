//! Phone-book scopes.

//------------ PhoneBookType -------------------------------------------------

param_enum! {
    /// Phone-book scopes.
    ///
    /// A phone book is a persisted collection of RAS connection entries.
    /// The scope identifies where a phone book lives and who sees it:
    /// the per-user file, the per-machine file visible to all users, or
    /// a custom file at a caller-supplied path. The custom scope is
    /// signalled with a value outside the range the operating system
    /// uses for its own phone-book locations, hence the -1.
    =>
    PhoneBookType, i32;

    /// A custom phone-book file at a caller-supplied path (-1).
    (Custom => -1, "Custom")

    /// The phone book of the current user (0).
    (User => 0, "User")

    /// The per-machine phone book shared by all users (1).
    (AllUsers => 1, "AllUsers")
}

param_enum_str!(PhoneBookType, i32, "unknown phone book type");

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::PhoneBookType;

    #[test]
    fn values() {
        assert_eq!(PhoneBookType::Custom.to_int(), -1);
        assert_eq!(PhoneBookType::User.to_int(), 0);
        assert_eq!(PhoneBookType::AllUsers.to_int(), 1);
    }

    #[test]
    fn round_trip() {
        for pb in [
            PhoneBookType::Custom,
            PhoneBookType::User,
            PhoneBookType::AllUsers,
        ] {
            assert_eq!(PhoneBookType::from_int(pb.to_int()), Some(pb));
        }
        assert_eq!(PhoneBookType::from_int(2), None);
        assert_eq!(PhoneBookType::from_int(-2), None);
    }

    #[test]
    fn from_str() {
        assert_eq!(
            "-1".parse::<PhoneBookType>().ok(),
            Some(PhoneBookType::Custom)
        );
        assert_eq!(
            "allusers".parse::<PhoneBookType>().ok(),
            Some(PhoneBookType::AllUsers)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Configure, Token};

        assert_tokens(
            &PhoneBookType::Custom.readable(),
            &[Token::Str("Custom")],
        );
        assert_tokens(&PhoneBookType::Custom.compact(), &[Token::I32(-1)]);
    }
}
