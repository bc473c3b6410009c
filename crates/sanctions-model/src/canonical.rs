//! The canonical output schema.
//!
//! Every run projects onto these eleven columns, in this order. Columns
//! absent from the source survive only as schema-gap diagnostics; they are
//! never fabricated.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the eleven canonical output columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalColumn {
    FullName,
    Dob,
    TownOfBirth,
    AssociatedCountries,
    PassportNumber,
    NationalId,
    Position,
    FullAddress,
    OtherInformation,
    GroupType,
    GroupId,
}

impl CanonicalColumn {
    /// All canonical columns in fixed output order.
    pub const ALL: [CanonicalColumn; 11] = [
        CanonicalColumn::FullName,
        CanonicalColumn::Dob,
        CanonicalColumn::TownOfBirth,
        CanonicalColumn::AssociatedCountries,
        CanonicalColumn::PassportNumber,
        CanonicalColumn::NationalId,
        CanonicalColumn::Position,
        CanonicalColumn::FullAddress,
        CanonicalColumn::OtherInformation,
        CanonicalColumn::GroupType,
        CanonicalColumn::GroupId,
    ];

    /// The column label as it appears in source and output headers.
    pub fn label(self) -> &'static str {
        match self {
            CanonicalColumn::FullName => "Full Name",
            CanonicalColumn::Dob => "DOB",
            CanonicalColumn::TownOfBirth => "Town of Birth",
            CanonicalColumn::AssociatedCountries => "Associated Countries",
            CanonicalColumn::PassportNumber => "Passport Number",
            CanonicalColumn::NationalId => "National Identification Number",
            CanonicalColumn::Position => "Position",
            CanonicalColumn::FullAddress => "Full Address",
            CanonicalColumn::OtherInformation => "Other Information",
            CanonicalColumn::GroupType => "Group Type",
            CanonicalColumn::GroupId => "Group ID",
        }
    }
}

impl fmt::Display for CanonicalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
