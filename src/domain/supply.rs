//! Blood requests and inventory levels displayed on the dashboard.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Urgency of a blood request. Ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Critical,
    High,
    Moderate,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::Critical => "Critical",
            Urgency::High => "High",
            Urgency::Moderate => "Moderate",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodNeed {
    pub id: String,
    #[serde(rename = "type")]
    pub blood_type: String,
    pub urgency: Urgency,
    pub location: String,
    pub requester: String,
}

/// Stock of one blood type, as a percentage of the bank's target level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "type")]
    pub blood_type: String,
    pub level: u8,
}

impl InventoryItem {
    pub fn new(blood_type: impl Into<String>, level: u8) -> Self {
        Self {
            blood_type: blood_type.into(),
            level: level.min(100),
        }
    }

    pub fn is_low(&self, threshold: u8) -> bool {
        self.level < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_orders_critical_first() {
        let mut levels = vec![Urgency::Moderate, Urgency::Critical, Urgency::High];
        levels.sort();
        assert_eq!(levels, vec![Urgency::Critical, Urgency::High, Urgency::Moderate]);
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        assert!(InventoryItem::new("O-", 15).is_low(30));
        assert!(!InventoryItem::new("AB-", 30).is_low(30));
        assert_eq!(InventoryItem::new("A+", 150).level, 100);
    }
}
