use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub notifications: bool,
    #[serde(default)]
    pub preferred_centers: Vec<String>,
}

/// The signed-in donor shown in the header and profile screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorProfile {
    pub name: String,
    pub points: u32,
    pub blood_type: String,
    #[serde(default)]
    pub preferences: Preferences,
}

impl DonorProfile {
    pub fn preferred_center(&self) -> Option<&str> {
        self.preferences.preferred_centers.first().map(String::as_str)
    }
}
