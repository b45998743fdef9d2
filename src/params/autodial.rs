//! AutoDial parameters.

//------------ AutoDialParameter ---------------------------------------------

param_enum! {
    /// AutoDial parameters.
    ///
    /// AutoDial automatically establishes a RAS connection when an
    /// application tries to reach a remote address. Its behavior is
    /// controlled by a handful of numeric tunables, and a get or set
    /// operation names the tunable it targets with one of these values.
    ///
    /// These correspond to the `RASADP_` constants of the native API; see
    /// the [RasGetAutodialParam documentation] for their semantics.
    ///
    /// [RasGetAutodialParam documentation]: https://learn.microsoft.com/en-us/windows/win32/api/ras/nf-ras-rasgetautodialparama
    =>
    AutoDialParameter, u32;

    /// Whether the AutoDial connection query dialog is suppressed (0).
    ///
    /// When set, AutoDial dials without first asking the user whether it
    /// should.
    (DisableConnectionQuery => 0, "DisableConnectionQuery")

    /// Whether AutoDial is disabled for the current logon session (1).
    (LogOnSessionDisable => 1, "LogOnSessionDisable")

    /// The maximum number of addresses AutoDial stores (2).
    ///
    /// Once the limit is reached, AutoDial disables itself rather than
    /// keep growing the address list.
    (SavedAddressesLimit => 2, "SavedAddressesLimit")

    /// The timeout after a failed connection attempt (3).
    ///
    /// During this interval, an AutoDial attempt to the same address
    /// fails immediately instead of redialing.
    (FailedConnectionTimeout => 3, "FailedConnectionTimeout")

    /// The timeout for the connection query dialog (4).
    ///
    /// If the user does not answer the query within this many seconds,
    /// the attempt is abandoned.
    (ConnectionQueryTimeout => 4, "ConnectionQueryTimeout")
}

param_enum_str!(AutoDialParameter, u32, "unknown AutoDial parameter");

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::AutoDialParameter;

    #[test]
    fn values() {
        assert_eq!(AutoDialParameter::DisableConnectionQuery.to_int(), 0);
        assert_eq!(AutoDialParameter::LogOnSessionDisable.to_int(), 1);
        assert_eq!(AutoDialParameter::SavedAddressesLimit.to_int(), 2);
        assert_eq!(AutoDialParameter::FailedConnectionTimeout.to_int(), 3);
        assert_eq!(AutoDialParameter::ConnectionQueryTimeout.to_int(), 4);
    }

    #[test]
    fn from_int() {
        assert_eq!(
            AutoDialParameter::from_int(3),
            Some(AutoDialParameter::FailedConnectionTimeout)
        );
        assert_eq!(AutoDialParameter::from_int(5), None);
    }

    #[test]
    fn from_str() {
        assert_eq!(
            "savedaddresseslimit".parse::<AutoDialParameter>().ok(),
            Some(AutoDialParameter::SavedAddressesLimit)
        );
        assert_eq!(
            "4".parse::<AutoDialParameter>().ok(),
            Some(AutoDialParameter::ConnectionQueryTimeout)
        );
        assert!("7".parse::<AutoDialParameter>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Configure, Token};

        assert_tokens(
            &AutoDialParameter::LogOnSessionDisable.readable(),
            &[Token::Str("LogOnSessionDisable")],
        );
        assert_tokens(
            &AutoDialParameter::LogOnSessionDisable.compact(),
            &[Token::U32(1)],
        );
    }
}
