//! Bidirectional directory of US state names and postal codes.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::error::HoneyError;

/// Full names and postal codes, alphabetical by name.
const STATES: [(&str, &str); 55] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Northern Mariana Islands", "MP"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Palau", "PW"),
    ("Pennsylvania", "PA"),
    ("Puerto Rico", "PR"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virgin Islands", "VI"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

static BY_NAME: Lazy<IndexMap<&'static str, &'static str>> =
    Lazy::new(|| STATES.iter().copied().collect());

static BY_CODE: Lazy<IndexMap<&'static str, &'static str>> =
    Lazy::new(|| STATES.iter().map(|&(name, code)| (code, name)).collect());

/// Static lookup between state names and postal codes.
pub struct StateDirectory;

impl StateDirectory {
    /// Postal code for a full state name.
    pub fn code_for(name: &str) -> Option<&'static str> {
        BY_NAME.get(name).copied()
    }

    /// Full state name for a postal code. Case-insensitive.
    pub fn name_for(code: &str) -> Option<&'static str> {
        BY_CODE.get(code.to_ascii_uppercase().as_str()).copied()
    }

    /// Whether the name is in the directory.
    pub fn contains(name: &str) -> bool {
        BY_NAME.contains_key(name)
    }

    /// The canonical spelling of a state name, or `InvalidState`.
    pub fn require(name: &str) -> Result<&'static str, HoneyError> {
        BY_NAME
            .get_key_value(name)
            .map(|(name, _)| *name)
            .ok_or_else(|| HoneyError::InvalidState(name.to_string()))
    }

    /// All names in directory order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        BY_NAME.keys().copied()
    }

    /// Number of entries.
    pub fn len() -> usize {
        BY_NAME.len()
    }
}
