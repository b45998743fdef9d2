//! LCP authentication data types.

//------------ LcpAuthType ---------------------------------------------------

param_enum! {
    /// LCP authentication data types.
    ///
    /// During PPP link negotiation, the Link Control Protocol agrees on
    /// an authentication protocol, and where CHAP is chosen, on the
    /// algorithm used with it. The connection's PPP projection reports
    /// that choice as one of these values, the `RASLCPAD_` constants of
    /// the native API. The non-zero values are the CHAP algorithm
    /// numbers from the [PPP authentication registry].
    ///
    /// [PPP authentication registry]: https://www.iana.org/assignments/ppp-numbers/ppp-numbers.xhtml#ppp-numbers-9
    =>
    LcpAuthType, u32;

    /// No authentication data is in use (0).
    (None => 0, "NONE")

    /// CHAP with MD5 (0x05).
    ///
    /// Defined in [RFC 1994].
    ///
    /// [RFC 1994]: https://tools.ietf.org/html/rfc1994
    (Md5Chap => 0x05, "MD5-CHAP")

    /// Microsoft CHAP (0x80).
    ///
    /// Defined in [RFC 2433].
    ///
    /// [RFC 2433]: https://tools.ietf.org/html/rfc2433
    (MsChap => 0x80, "MS-CHAP")

    /// Microsoft CHAP version 2 (0x81).
    ///
    /// Defined in [RFC 2759].
    ///
    /// [RFC 2759]: https://tools.ietf.org/html/rfc2759
    (MsChap2 => 0x81, "MS-CHAP-V2")
}

param_enum_str!(LcpAuthType, u32, "unknown LCP authentication data type");

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::LcpAuthType;

    #[test]
    fn values() {
        assert_eq!(LcpAuthType::None.to_int(), 0);
        assert_eq!(LcpAuthType::Md5Chap.to_int(), 0x05);
        assert_eq!(LcpAuthType::MsChap.to_int(), 0x80);
        assert_eq!(LcpAuthType::MsChap2.to_int(), 0x81);
    }

    #[test]
    fn from_int() {
        assert_eq!(LcpAuthType::from_int(0x81), Some(LcpAuthType::MsChap2));
        // SHA-1 CHAP has an algorithm number but no native constant.
        assert_eq!(LcpAuthType::from_int(0x06), None);
    }

    #[test]
    fn from_str() {
        assert_eq!(
            "ms-chap-v2".parse::<LcpAuthType>().ok(),
            Some(LcpAuthType::MsChap2)
        );
        assert_eq!(
            "128".parse::<LcpAuthType>().ok(),
            Some(LcpAuthType::MsChap)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn ser_de() {
        use serde_test::{assert_tokens, Configure, Token};

        assert_tokens(
            &LcpAuthType::Md5Chap.readable(),
            &[Token::Str("MD5-CHAP")],
        );
        assert_tokens(&LcpAuthType::Md5Chap.compact(), &[Token::U32(5)]);
    }
}
