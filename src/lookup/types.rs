use serde::{Deserialize, Serialize};

/// Response body of the public-IP identification service.
#[derive(Debug, Deserialize)]
pub(crate) struct IpResponse {
    pub ip: String,
}

/// Approximate position resolved from an IP address, degrees.
///
/// Extra fields in the geolocation body are ignored; the values are trusted
/// as-is, no range validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One predicted overhead pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    /// Start of the pass, seconds since the Unix epoch
    pub risetime: i64,
    /// Length of the pass in seconds
    pub duration: i64,
}

/// Envelope of the flyover prediction service; passes arrive chronological
/// and stay in service order.
#[derive(Debug, Deserialize)]
pub(crate) struct PassResponse {
    pub response: Vec<Pass>,
}
