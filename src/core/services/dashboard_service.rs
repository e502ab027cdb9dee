use crate::domain::{BloodNeed, InventoryItem, Urgency};

/// Inventory level annotated with the low-stock flag used for highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStatus {
    pub blood_type: String,
    pub level: u8,
    pub low: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub needs: Vec<BloodNeed>,
    pub inventory: Vec<InventoryStatus>,
    pub critical_count: usize,
    pub low_stock: Vec<String>,
}

pub struct DashboardService;

impl DashboardService {
    /// Requests ordered most urgent first; ties keep their input order.
    pub fn urgent_needs(needs: &[BloodNeed]) -> Vec<BloodNeed> {
        let mut sorted = needs.to_vec();
        sorted.sort_by_key(|need| need.urgency);
        sorted
    }

    pub fn inventory_status(items: &[InventoryItem], threshold: u8) -> Vec<InventoryStatus> {
        items
            .iter()
            .map(|item| InventoryStatus {
                blood_type: item.blood_type.clone(),
                level: item.level,
                low: item.is_low(threshold),
            })
            .collect()
    }

    pub fn summarize(
        needs: &[BloodNeed],
        inventory: &[InventoryItem],
        threshold: u8,
    ) -> DashboardSummary {
        let needs = Self::urgent_needs(needs);
        let inventory = Self::inventory_status(inventory, threshold);
        let critical_count = needs
            .iter()
            .filter(|need| need.urgency == Urgency::Critical)
            .count();
        let low_stock = inventory
            .iter()
            .filter(|status| status.low)
            .map(|status| status.blood_type.clone())
            .collect();
        DashboardSummary {
            needs,
            inventory,
            critical_count,
            low_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample;

    #[test]
    fn sample_dashboard_flags_low_stock() {
        let summary = DashboardService::summarize(&sample::needs(), &sample::inventory(), 30);
        assert_eq!(summary.critical_count, 1);
        assert_eq!(summary.low_stock, vec!["A-".to_string(), "O-".to_string()]);
        assert_eq!(summary.needs[0].blood_type, "A-");
    }

    #[test]
    fn needs_sorted_by_urgency() {
        let mut needs = sample::needs();
        needs.reverse();
        let sorted = DashboardService::urgent_needs(&needs);
        let urgencies: Vec<_> = sorted.iter().map(|n| n.urgency).collect();
        assert_eq!(urgencies, vec![Urgency::Critical, Urgency::High, Urgency::Moderate]);
    }

    #[test]
    fn threshold_is_configurable() {
        let statuses = DashboardService::inventory_status(&sample::inventory(), 50);
        let low: Vec<_> = statuses
            .iter()
            .filter(|s| s.low)
            .map(|s| s.blood_type.as_str())
            .collect();
        assert_eq!(low, vec!["A-", "B-", "O-", "AB-"]);
    }
}
