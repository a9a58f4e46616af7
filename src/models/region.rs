//! New Zealand regions.
//!
//! Region codes are the join between regional holidays and anything that
//! renders or groups by region, so they are stable string identifiers.

use serde::{Deserialize, Serialize};

/// One of the 16 New Zealand administrative regions, plus the Chatham Islands.
///
/// Variants are declared north to south; that order is also the sort order
/// used when regions are collected into ordered sets.
///
/// # Example
///
/// ```
/// use nz_holiday_engine::models::RegionId;
///
/// assert_eq!(RegionId::BayOfPlenty.code(), "bop");
/// assert_eq!(RegionId::BayOfPlenty.name(), "Bay of Plenty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegionId {
    /// Northland.
    #[serde(rename = "northland")]
    Northland,
    /// Auckland.
    #[serde(rename = "auckland")]
    Auckland,
    /// Waikato.
    #[serde(rename = "waikato")]
    Waikato,
    /// Bay of Plenty.
    #[serde(rename = "bop")]
    BayOfPlenty,
    /// Gisborne.
    #[serde(rename = "gisborne")]
    Gisborne,
    /// Hawke's Bay.
    #[serde(rename = "hawkes_bay")]
    HawkesBay,
    /// Taranaki.
    #[serde(rename = "taranaki")]
    Taranaki,
    /// Manawatū-Whanganui.
    #[serde(rename = "manawatu")]
    ManawatuWhanganui,
    /// Wellington.
    #[serde(rename = "wellington")]
    Wellington,
    /// Tasman.
    #[serde(rename = "tasman")]
    Tasman,
    /// Nelson.
    #[serde(rename = "nelson")]
    Nelson,
    /// Marlborough.
    #[serde(rename = "marlborough")]
    Marlborough,
    /// West Coast.
    #[serde(rename = "west_coast")]
    WestCoast,
    /// Canterbury.
    #[serde(rename = "canterbury")]
    Canterbury,
    /// Otago.
    #[serde(rename = "otago")]
    Otago,
    /// Southland.
    #[serde(rename = "southland")]
    Southland,
    /// Chatham Islands. Off the mainland map but still a valid region.
    #[serde(rename = "chatham")]
    ChathamIslands,
}

impl RegionId {
    /// Every region, in declaration order.
    pub const ALL: [RegionId; 17] = [
        RegionId::Northland,
        RegionId::Auckland,
        RegionId::Waikato,
        RegionId::BayOfPlenty,
        RegionId::Gisborne,
        RegionId::HawkesBay,
        RegionId::Taranaki,
        RegionId::ManawatuWhanganui,
        RegionId::Wellington,
        RegionId::Tasman,
        RegionId::Nelson,
        RegionId::Marlborough,
        RegionId::WestCoast,
        RegionId::Canterbury,
        RegionId::Otago,
        RegionId::Southland,
        RegionId::ChathamIslands,
    ];

    /// Returns the stable string code for this region.
    pub fn code(self) -> &'static str {
        match self {
            RegionId::Northland => "northland",
            RegionId::Auckland => "auckland",
            RegionId::Waikato => "waikato",
            RegionId::BayOfPlenty => "bop",
            RegionId::Gisborne => "gisborne",
            RegionId::HawkesBay => "hawkes_bay",
            RegionId::Taranaki => "taranaki",
            RegionId::ManawatuWhanganui => "manawatu",
            RegionId::Wellington => "wellington",
            RegionId::Tasman => "tasman",
            RegionId::Nelson => "nelson",
            RegionId::Marlborough => "marlborough",
            RegionId::WestCoast => "west_coast",
            RegionId::Canterbury => "canterbury",
            RegionId::Otago => "otago",
            RegionId::Southland => "southland",
            RegionId::ChathamIslands => "chatham",
        }
    }

    /// Returns the human-readable region name.
    pub fn name(self) -> &'static str {
        match self {
            RegionId::Northland => "Northland",
            RegionId::Auckland => "Auckland",
            RegionId::Waikato => "Waikato",
            RegionId::BayOfPlenty => "Bay of Plenty",
            RegionId::Gisborne => "Gisborne",
            RegionId::HawkesBay => "Hawke's Bay",
            RegionId::Taranaki => "Taranaki",
            RegionId::ManawatuWhanganui => "Manawatū-Whanganui",
            RegionId::Wellington => "Wellington",
            RegionId::Tasman => "Tasman",
            RegionId::Nelson => "Nelson",
            RegionId::Marlborough => "Marlborough",
            RegionId::WestCoast => "West Coast",
            RegionId::Canterbury => "Canterbury",
            RegionId::Otago => "Otago",
            RegionId::Southland => "Southland",
            RegionId::ChathamIslands => "Chatham Islands",
        }
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seventeen_regions() {
        assert_eq!(RegionId::ALL.len(), 17);
        let unique: HashSet<_> = RegionId::ALL.iter().collect();
        assert_eq!(unique.len(), 17);
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = RegionId::ALL.iter().map(|r| r.code()).collect();
        assert_eq!(codes.len(), 17);
    }

    #[test]
    fn test_serialization_matches_code() {
        for region in RegionId::ALL {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.code()));

            let back: RegionId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, region);
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(RegionId::HawkesBay.to_string(), "Hawke's Bay");
        assert_eq!(RegionId::WestCoast.to_string(), "West Coast");
    }

    #[test]
    fn test_ordering_follows_declaration() {
        assert!(RegionId::Northland < RegionId::Auckland);
        assert!(RegionId::Southland < RegionId::ChathamIslands);
        let mut sorted = RegionId::ALL;
        sorted.sort();
        assert_eq!(sorted, RegionId::ALL);
    }
}
