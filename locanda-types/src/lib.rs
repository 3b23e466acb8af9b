use serde::{Deserialize, Serialize};

/// One restaurant location, with fields bound by name rather than by
/// column position.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub address: String,
}

// Response types
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
}
