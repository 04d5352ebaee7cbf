//! System prompt loading.
//!
//! Prompts are markdown files with an optional `{{CUSTOMER_PROFILE}}`
//! placeholder. When a customer profile is supplied it is rendered into a
//! readable block before substitution; otherwise the placeholder becomes a
//! visible "not available" marker rather than leaking template syntax into
//! the model instructions.

use std::path::Path;
use vox_catalog::CustomerProfile;
use vox_core::Result;

pub const PROFILE_PLACEHOLDER: &str = "{{CUSTOMER_PROFILE}}";
pub const PROFILE_UNAVAILABLE: &str = "(Customer profile not available)";

/// Render a customer profile as a markdown block for the system prompt.
pub fn format_customer_profile(profile: &CustomerProfile) -> String {
    let avg = profile.average_data_gb();
    let allowance_note = if profile.over_allowance() { "over allowance" } else { "within allowance" };
    let upgrade = if profile.contract.eligible_for_upgrade { "Yes" } else { "No" };

    let mut lines = vec![
        format!("**Customer:** {} ({})", profile.name, profile.account_number),
        format!(
            "**Plan:** {} ({}GB for £{:.2}/month)",
            profile.current_plan.plan_name,
            profile.current_plan.data_allowance,
            profile.current_plan.price_monthly,
        ),
        format!("**Average Data Use:** {avg:.1}GB/month ({allowance_note})"),
        String::new(),
        format!(
            "**Device:** {} ({} months old, trade-in value £{:.2})",
            profile.current_device.model,
            profile.current_device.age_months,
            profile.current_device.trade_in_value,
        ),
        format!(
            "**Contract:** ends {}, {} months remaining, upgrade eligible: {upgrade}",
            profile.contract.end_date, profile.contract.months_remaining,
        ),
        String::new(),
    ];

    for bill in &profile.billing_history {
        let late = if bill.late { ", late" } else { "" };
        lines.push(format!(
            "**Bill {}:** £{:.2} ({}{late}, overage £{:.2})",
            bill.month, bill.amount, bill.status, bill.overage_charge,
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "**Preferences:** brand {}, price sensitivity {}, priorities: {}",
        profile.preferences.brand_affinity,
        profile.preferences.price_sensitivity,
        profile.preferences.feature_priorities.join(", "),
    ));

    lines.join("\n")
}

/// Load a prompt file and substitute the customer-profile placeholder.
pub fn load_prompt(path: &Path, profile: Option<&CustomerProfile>) -> Result<String> {
    let prompt = std::fs::read_to_string(path)?;
    let profile_text = match profile {
        Some(profile) => format_customer_profile(profile),
        None => PROFILE_UNAVAILABLE.to_string(),
    };
    Ok(prompt.replace(PROFILE_PLACEHOLDER, &profile_text))
}

/// Load a prompt, resolving the profile by catalog account number.
pub fn load_prompt_for_account(path: &Path, account_number: Option<&str>) -> Result<String> {
    let profile = account_number.and_then(vox_catalog::profile_by_account);
    load_prompt(path, profile.as_ref())
}
