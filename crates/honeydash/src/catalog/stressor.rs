//! The fixed catalog of colony stressors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HoneyError;

/// A recognized cause of colony loss, one column of the colony dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stressor {
    VarroaMites,
    OtherPests,
    Other,
    Pesticides,
    Unknown,
    Diseases,
    LostPerc,
}

/// Stressors traced by the multi-line chart. `other` and `unknown` are left
/// out to keep the chart readable.
pub const LINE_CHART_STRESSORS: [Stressor; 5] = [
    Stressor::VarroaMites,
    Stressor::OtherPests,
    Stressor::Pesticides,
    Stressor::Diseases,
    Stressor::LostPerc,
];

/// Stressors offered by the map's dropdown, in menu order. `lost_perc` is
/// charted on the line chart only.
pub const DROPDOWN_STRESSORS: [Stressor; 6] = [
    Stressor::VarroaMites,
    Stressor::Pesticides,
    Stressor::OtherPests,
    Stressor::Unknown,
    Stressor::Diseases,
    Stressor::Other,
];

impl Stressor {
    /// Every stressor, in column order.
    pub const ALL: [Stressor; 7] = [
        Stressor::VarroaMites,
        Stressor::OtherPests,
        Stressor::Other,
        Stressor::Pesticides,
        Stressor::Unknown,
        Stressor::Diseases,
        Stressor::LostPerc,
    ];

    /// Column name and wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Stressor::VarroaMites => "varroa_mites",
            Stressor::OtherPests => "other_pests",
            Stressor::Other => "other",
            Stressor::Pesticides => "pesticides",
            Stressor::Unknown => "unknown",
            Stressor::Diseases => "diseases",
            Stressor::LostPerc => "lost_perc",
        }
    }

    /// Label used in chart titles.
    pub fn label(&self) -> &'static str {
        match self {
            Stressor::VarroaMites => "Varroa Mites",
            Stressor::OtherPests => "Other Pests (Tracheal Mites, Hive Beetles, Wax Moths, etc.)",
            Stressor::Other => "Other Categories (Weather, Starvation, etc.)",
            Stressor::Pesticides => "Pesticides",
            Stressor::Unknown => "Unknown Causes",
            Stressor::Diseases => "Diseases (Foulbrood, Chalkbrood, Stonebrood, Paralysis)",
            Stressor::LostPerc => "Colonies Lost",
        }
    }

    /// Shorter label used in dropdown menus.
    pub fn option_label(&self) -> &'static str {
        match self {
            Stressor::VarroaMites => "Varroa Mites",
            Stressor::OtherPests => "Other Pests (Tracheal Mites, Nosema, Wax Moths, etc)",
            Stressor::Other => "Other Causes (Weather, Starvation, Queen Failure, etc)",
            Stressor::Pesticides => "Pesticides",
            Stressor::Unknown => "Unknown",
            Stressor::Diseases => "Diseases",
            Stressor::LostPerc => "Colonies Lost",
        }
    }

    /// Look up a stressor by its identifier.
    pub fn from_id(id: &str) -> Result<Self, HoneyError> {
        Self::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| HoneyError::InvalidCategory(id.to_string()))
    }

    /// Resolve a list of identifiers, failing on the first unknown one.
    pub fn from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Vec<Self>, HoneyError> {
        ids.iter().map(|id| Self::from_id(id.as_ref())).collect()
    }
}

impl fmt::Display for Stressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Stressor {
    type Err = HoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for stressor in Stressor::ALL {
            assert_eq!(Stressor::from_id(stressor.id()).unwrap(), stressor);
        }
    }

    #[test]
    fn test_serde_uses_ids() {
        for stressor in Stressor::ALL {
            let json = serde_json::to_string(&stressor).unwrap();
            assert_eq!(json, format!("\"{}\"", stressor.id()));
        }
    }

    #[test]
    fn test_unknown_id() {
        assert!(matches!(
            Stressor::from_id("wax_moths"),
            Err(HoneyError::InvalidCategory(id)) if id == "wax_moths"
        ));
    }

    #[test]
    fn test_line_chart_excludes_other_and_unknown() {
        assert!(!LINE_CHART_STRESSORS.contains(&Stressor::Other));
        assert!(!LINE_CHART_STRESSORS.contains(&Stressor::Unknown));
    }

    #[test]
    fn test_dropdown_excludes_colonies_lost() {
        assert!(!DROPDOWN_STRESSORS.contains(&Stressor::LostPerc));
        assert!(
            Stressor::ALL
                .iter()
                .filter(|s| **s != Stressor::LostPerc)
                .all(|s| DROPDOWN_STRESSORS.contains(s))
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Stressor::VarroaMites.label(), "Varroa Mites");
        assert_eq!(Stressor::Unknown.option_label(), "Unknown");
    }
}
