//! Multilink dial modes.

//------------ DialMode ------------------------------------------------------

param_enum! {
    /// Multilink dial modes.
    ///
    /// A phone-book entry can bundle several subentries into one
    /// multilink connection. The dial mode governs how those subentries
    /// are dialed: not at all beyond the first, all at once, or on
    /// demand as bandwidth requires. The values are the `RASEDM_`
    /// constants of the native API, with 0 standing in for an entry
    /// without multilink dialing.
    =>
    DialMode, u32;

    /// Only the primary subentry is dialed (0).
    (None => 0, "None")

    /// All subentries are dialed when the connection is established (1).
    (DialAll => 1, "DialAll")

    /// Subentries are dialed and hung up as bandwidth demands (2).
    ///
    /// The thresholds and sample intervals steering this are configured
    /// separately on the phone-book entry.
    (DialAsNeeded => 2, "DialAsNeeded")
}

param_enum_str!(DialMode, u32, "unknown dial mode");

//============ Tests =========================================================
