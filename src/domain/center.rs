//! Donation centers and the read-only directory the booking wizard draws from.

use serde::{Deserialize, Serialize};

/// A physical donation location with fixed opening hours and bookable slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Center {
    pub id: String,
    pub name: String,
    pub address: String,
    pub distance: String,
    pub hours: String,
    /// Slot labels such as `"09:00"`. They are matched verbatim, never parsed.
    pub available_slots: Vec<String>,
}

impl Center {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            distance: String::new(),
            hours: String::new(),
            available_slots: Vec::new(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_distance(mut self, distance: impl Into<String>) -> Self {
        self.distance = distance.into();
        self
    }

    pub fn with_hours(mut self, hours: impl Into<String>) -> Self {
        self.hours = hours.into();
        self
    }

    pub fn with_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_slots = slots.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_slot(&self, slot: &str) -> bool {
        self.available_slots.iter().any(|candidate| candidate == slot)
    }
}

/// Ordered, immutable list of centers supplied by the embedding application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CenterDirectory {
    centers: Vec<Center>,
}

impl CenterDirectory {
    pub fn new(centers: Vec<Center>) -> Self {
        Self { centers }
    }

    pub fn centers(&self) -> &[Center] {
        &self.centers
    }

    pub fn find(&self, id: &str) -> Option<&Center> {
        self.centers.iter().find(|center| center.id == id)
    }

    /// Resolves either a center identifier or a 1-based list position.
    pub fn resolve(&self, key: &str) -> Option<&Center> {
        let key = key.trim();
        self.find(key).or_else(|| {
            key.parse::<usize>()
                .ok()
                .and_then(|position| position.checked_sub(1))
                .and_then(|index| self.centers.get(index))
        })
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}

impl From<Vec<Center>> for CenterDirectory {
    fn from(centers: Vec<Center>) -> Self {
        Self::new(centers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> CenterDirectory {
        CenterDirectory::new(vec![
            Center::new("a", "Alpha").with_slots(["09:00"]),
            Center::new("b", "Beta").with_slots(["10:00", "11:00"]),
        ])
    }

    #[test]
    fn resolve_prefers_identifier_then_position() {
        let dir = directory();
        assert_eq!(dir.resolve("b").map(|c| c.name.as_str()), Some("Beta"));
        assert_eq!(dir.resolve("1").map(|c| c.name.as_str()), Some("Alpha"));
        assert!(dir.resolve("0").is_none());
        assert!(dir.resolve("9").is_none());
    }

    #[test]
    fn slots_match_verbatim() {
        let dir = directory();
        let beta = dir.find("b").unwrap();
        assert!(beta.has_slot("10:00"));
        assert!(!beta.has_slot("10:00 "));
    }

    #[test]
    fn directory_deserializes_from_plain_array() {
        let json = r#"[{"id":"7","name":"Pop-up","address":"","distance":"","hours":"","availableSlots":["12:00"]}]"#;
        let dir: CenterDirectory = serde_json::from_str(json).unwrap();
        assert_eq!(dir.len(), 1);
        assert!(dir.find("7").unwrap().has_slot("12:00"));
    }
}
