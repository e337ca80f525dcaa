use serde::Deserialize;

/// Carrier record as returned by the remote catalog.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Carrier {
    /// Display name of the carrier.
    pub name: String,
    /// Short codes registered for the carrier, primary first.
    pub scac_codes: Vec<String>,
}

/// Selectable entry in the carrier selector.
#[derive(Clone, Debug, PartialEq)]
pub struct CarrierOption {
    pub name: String,
    pub code: String,
}

impl CarrierOption {
    /// Maps a catalog record to a selectable option using its first short
    /// code. Records without any code have nothing to submit and yield no
    /// option.
    #[must_use]
    pub fn from_record(record: &Carrier) -> Option<Self> {
        record.scac_codes.first().map(|code| Self {
            name: record.name.clone(),
            code: code.clone(),
        })
    }
}
