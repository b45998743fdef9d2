//! Link compression algorithms.

//------------ CompressionType -----------------------------------------------

param_enum! {
    /// Link compression algorithms.
    ///
    /// Identifies the compression scheme negotiated for a connection
    /// through the Compression Control Protocol. The values are the
    /// `RASCCPCA_` constants of the native API and appear in the
    /// connection's PPP projection information.
    =>
    CompressionType, u32;

    /// No compression is in use (0).
    (None => 0x0, "NONE")

    /// STAC LZS compression, option 4 (0x5).
    ///
    /// Defined in [RFC 1974].
    ///
    /// [RFC 1974]: https://tools.ietf.org/html/rfc1974
    (Stac => 0x5, "STAC")

    /// Microsoft Point-to-Point Compression (0x6).
    ///
    /// Defined in [RFC 2118].
    ///
    /// [RFC 2118]: https://tools.ietf.org/html/rfc2118
    (Mppc => 0x6, "MPPC")
}

param_enum_str!(CompressionType, u32, "unknown compression type");

//============ Tests =========================================================
