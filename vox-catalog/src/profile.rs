//! Telecom customer profiles used by the customer-service scenario.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerProfile {
    pub account_number: String,
    pub name: String,
    pub usage_history: Vec<MonthlyUsage>,
    pub billing_history: Vec<BillingRecord>,
    pub current_plan: Plan,
    pub current_device: Device,
    pub contract: Contract,
    pub preferences: ProfilePreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyUsage {
    /// `YYYY-MM`.
    pub month: String,
    pub data_gb: f64,
    pub minutes: u32,
    pub texts: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BillingRecord {
    pub month: String,
    pub amount: f64,
    pub status: String,
    pub late: bool,
    pub overage_charge: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub plan_id: String,
    pub plan_name: String,
    /// Monthly data allowance in GB.
    pub data_allowance: u32,
    pub price_monthly: f64,
    pub international_roaming: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Device {
    pub model: String,
    pub purchase_date: String,
    pub age_months: u32,
    pub trade_in_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contract {
    pub start_date: String,
    pub end_date: String,
    pub months_remaining: u32,
    pub eligible_for_upgrade: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfilePreferences {
    pub brand_affinity: String,
    pub price_sensitivity: String,
    pub feature_priorities: Vec<String>,
    pub last_interaction: String,
}

impl CustomerProfile {
    /// Average monthly data use over the recorded history, in GB.
    pub fn average_data_gb(&self) -> f64 {
        if self.usage_history.is_empty() {
            return 0.0;
        }
        let total: f64 = self.usage_history.iter().map(|u| u.data_gb).sum();
        total / self.usage_history.len() as f64
    }

    /// Whether recent usage runs over the current plan's allowance.
    pub fn over_allowance(&self) -> bool {
        self.average_data_gb() > self.current_plan.data_allowance as f64
    }
}
