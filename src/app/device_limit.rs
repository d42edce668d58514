//! Device limit input on the subscription page.
//!
//! The requested limit is debounced, then clamped to what the plan allows and
//! snapped up to the billing step. A settled limit that is a whole number of
//! steps can be priced with a billing preview. Plans that cannot be priced go
//! through a plan change request to support instead.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::{AddonId, PlanId};

pub const DEFAULT_STEP: u32 = 50;
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(700);
pub const DEFAULT_PRODUCT_NAME: &str = "mender_standard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitRules {
    pub step: u32,
    pub os_minimum: u32,
    pub professional_minimum: u32,
    /// Also the largest limit that can be set without contacting support.
    pub enterprise_minimum: u32,
    pub debounce: Duration,
    pub product_name: String,
}

impl Default for LimitRules {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            os_minimum: 50,
            professional_minimum: 250,
            enterprise_minimum: 5000,
            debounce: DEFAULT_DEBOUNCE,
            product_name: DEFAULT_PRODUCT_NAME.to_string(),
        }
    }
}

impl LimitRules {
    pub fn minimal_device_count(&self, plan: PlanId) -> u32 {
        match plan {
            PlanId::Os => self.os_minimum,
            PlanId::Professional => self.professional_minimum,
            PlanId::Enterprise => self.enterprise_minimum,
        }
    }

    /// Requests at or above this count are Enterprise territory.
    pub fn enterprise_device_count(&self) -> u32 {
        self.enterprise_minimum
    }

    pub fn snap(&self, value: u32) -> u32 {
        let step = self.step.max(1);
        value.div_ceil(step).saturating_mul(step)
    }
}

/// Why the user is pointed at support instead of self-service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactReason {
    ReduceLimit,
    OverLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitDecision {
    pub limit: u32,
    pub contact_reason: Option<ContactReason>,
    /// Replacement helper text for the input, when the value was corrected.
    pub helper_text: Option<String>,
}

pub fn minimum_helper_text(plan: PlanId, rules: &LimitRules) -> String {
    format!(
        "The minimum limit for {} is {}",
        plan.display_name(),
        rules.minimal_device_count(plan)
    )
}

pub fn plan_limit(
    requested: u32,
    plan: PlanId,
    current_device_limit: u32,
    rules: &LimitRules,
) -> LimitDecision {
    let minimum = rules.minimal_device_count(plan);
    let cap = rules.enterprise_device_count();

    if requested >= cap {
        LimitDecision {
            limit: cap,
            contact_reason: Some(ContactReason::OverLimit),
            helper_text: Some(format!("The maximum you can set is {cap} devices.")),
        }
    } else if requested < minimum {
        LimitDecision {
            limit: minimum,
            contact_reason: None,
            helper_text: Some(minimum_helper_text(plan, rules)),
        }
    } else if requested < current_device_limit {
        LimitDecision {
            limit: current_device_limit,
            contact_reason: Some(ContactReason::ReduceLimit),
            helper_text: Some(format!("Your current device limit is {current_device_limit}.")),
        }
    } else {
        LimitDecision {
            limit: rules.snap(requested),
            contact_reason: None,
            helper_text: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewAddon {
    pub name: AddonId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewProduct {
    pub name: String,
    pub quantity: u32,
    pub addons: Vec<PreviewAddon>,
}

/// Body of a recurring billing preview request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewOrder {
    pub preview_mode: &'static str,
    pub plan: PlanId,
    pub products: Vec<PreviewProduct>,
}

/// Body of a plan change request sent to support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanChangeRequest {
    pub current_plan: String,
    pub requested_plan: String,
    pub current_addons: String,
    pub requested_addons: String,
    pub user_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanChangeError {
    #[error("Organization is not loaded yet")]
    OrganizationNotLoaded,
    #[error("A message for the sales team is required")]
    EmptyMessage,
}

/// Comma separated add-on names, `-` when there are none.
pub fn addons_to_string<'a>(addons: impl IntoIterator<Item = &'a AddonId>) -> String {
    let names: Vec<String> = addons.into_iter().map(ToString::to_string).collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionState {
    pub plan: PlanId,
    pub limit: u32,
    pub current_plan: PlanId,
    pub current_device_limit: u32,
    pub org_loaded: bool,
    pub addons: BTreeSet<AddonId>,
    pub org_addons: BTreeSet<AddonId>,
    pub contact_reason: Option<ContactReason>,
    pub helper_text: String,
    pending: Option<(u32, Instant)>,
    rules: LimitRules,
}

impl Default for SubscriptionState {
    fn default() -> Self {
        Self::new(LimitRules::default())
    }
}

impl SubscriptionState {
    pub fn new(rules: LimitRules) -> Self {
        let plan = PlanId::default();
        Self {
            plan,
            limit: rules.minimal_device_count(plan),
            current_plan: plan,
            current_device_limit: 0,
            org_loaded: false,
            addons: BTreeSet::new(),
            org_addons: BTreeSet::new(),
            contact_reason: None,
            helper_text: minimum_helper_text(plan, &rules),
            pending: None,
            rules,
        }
    }

    pub fn rules(&self) -> &LimitRules {
        &self.rules
    }

    /// Records raw input; it settles once it has been stable for the debounce
    /// window. A newer value restarts the window.
    pub fn request_limit(&mut self, value: u32, now: Instant) {
        self.limit = value;
        self.contact_reason = None;
        self.pending = Some((value, now));
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, since)| since + self.rules.debounce)
    }

    /// Settles the pending value if its debounce window has passed. Returns
    /// the decision when something settled.
    pub fn settle(&mut self, now: Instant) -> Option<LimitDecision> {
        let (value, since) = self.pending?;
        if now < since + self.rules.debounce {
            return None;
        }
        self.pending = None;

        let decision = plan_limit(value, self.plan, self.current_device_limit, &self.rules);
        debug!(
            requested = value,
            limit = decision.limit,
            plan = %self.plan,
            "device limit settled"
        );
        self.limit = decision.limit;
        self.contact_reason = decision.contact_reason;
        if let Some(text) = &decision.helper_text {
            self.helper_text.clone_from(text);
        }
        Some(decision)
    }

    /// Switches the plan. The limit is raised to the plan's minimum and add-ons
    /// the plan cannot carry are deselected.
    pub fn select_plan(&mut self, plan: PlanId) {
        self.plan = plan;
        self.contact_reason = None;
        self.helper_text = minimum_helper_text(plan, &self.rules);
        self.addons.retain(|addon| addon.is_eligible(plan));
        let minimum = self.rules.minimal_device_count(plan);
        if self.limit < minimum {
            self.limit = minimum;
        }
    }

    /// Returns false when the add-on is not available on the selected plan.
    pub fn toggle_addon(&mut self, addon: AddonId) -> bool {
        if !addon.is_eligible(self.plan) {
            debug!(%addon, plan = %self.plan, "add-on not available on plan");
            return false;
        }
        if !self.addons.remove(&addon) {
            self.addons.insert(addon);
        }
        true
    }

    /// Applies the organization's current subscription. The limit input never
    /// starts below the limit already paid for, and the add-ons already enabled
    /// start selected.
    pub fn organization_loaded(
        &mut self,
        plan: PlanId,
        current_device_limit: u32,
        addons: &[AddonId],
    ) {
        self.org_loaded = true;
        self.current_plan = plan;
        self.current_device_limit = current_device_limit;
        self.org_addons = addons.iter().copied().collect();
        self.addons = self.org_addons.clone();
        self.select_plan(plan);
        if self.limit < current_device_limit {
            self.limit = current_device_limit;
        }
    }

    /// Billing preview for the current choice, when it can be priced.
    pub fn preview_order(&self) -> Option<PreviewOrder> {
        if !self.org_loaded
            || self.pending.is_some()
            || self.plan == PlanId::Enterprise
            || self.limit % self.rules.step.max(1) != 0
        {
            return None;
        }
        Some(PreviewOrder {
            preview_mode: "recurring",
            plan: self.plan,
            products: vec![PreviewProduct {
                name: self.rules.product_name.clone(),
                quantity: self.limit,
                addons: self
                    .addons
                    .iter()
                    .map(|&name| PreviewAddon { name })
                    .collect(),
            }],
        })
    }

    /// Request for support to move the organization to the selected plan.
    /// Without a new add-on selection the current add-ons are requested again.
    pub fn plan_change_request(
        &self,
        message: &str,
    ) -> Result<PlanChangeRequest, PlanChangeError> {
        if !self.org_loaded {
            return Err(PlanChangeError::OrganizationNotLoaded);
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(PlanChangeError::EmptyMessage);
        }
        let requested = if self.addons.is_empty() {
            &self.org_addons
        } else {
            &self.addons
        };
        Ok(PlanChangeRequest {
            current_plan: self.current_plan.display_name().to_string(),
            requested_plan: self.plan.display_name().to_string(),
            current_addons: addons_to_string(&self.org_addons),
            requested_addons: addons_to_string(requested),
            user_message: message.to_string(),
        })
    }
}
