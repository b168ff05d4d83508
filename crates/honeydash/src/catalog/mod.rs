//! Static catalogs: stressors, states and survey periods.
//!
//! These back both parameter validation in the chart builders and the
//! option lists offered to dropdown widgets, so the UI can only ever offer
//! values the builders accept.

mod period;
mod state;
mod stressor;

pub use period::{KNOWN_PERIODS, Period};
pub use state::StateDirectory;
pub use stressor::{DROPDOWN_STRESSORS, LINE_CHART_STRESSORS, Stressor};

use serde::{Deserialize, Serialize};

/// One entry of a dropdown menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Every state name in the directory, whether or not it has data.
pub fn state_names() -> Vec<&'static str> {
    StateDirectory::names().collect()
}

/// Dropdown options for the state selector (label and value are the name).
pub fn state_dropdown_options() -> Vec<DropdownOption> {
    StateDirectory::names()
        .map(|name| DropdownOption::new(name, name))
        .collect()
}

/// Dropdown options for the stressor selector, in menu order.
pub fn stressor_dropdown_options() -> Vec<DropdownOption> {
    DROPDOWN_STRESSORS
        .iter()
        .map(|s| DropdownOption::new(s.option_label(), s.id()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_options_cover_directory() {
        let options = state_dropdown_options();
        assert_eq!(options.len(), StateDirectory::len());
        assert_eq!(options[0], DropdownOption::new("Alabama", "Alabama"));
        assert!(state_names().contains(&"Puerto Rico"));
    }

    #[test]
    fn test_stressor_options_use_ids() {
        let options = stressor_dropdown_options();
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["varroa_mites", "pesticides", "other_pests", "unknown", "diseases", "other"]
        );
        assert!(options.iter().all(|o| Stressor::from_id(&o.value).is_ok()));
        assert_eq!(options[1], DropdownOption::new("Pesticides", "pesticides"));
    }
}
