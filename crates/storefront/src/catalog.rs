//! Static product catalog.
//!
//! The store sells exactly one product in two purchase formats: a 7-day trial
//! pack and a 28-day subscription. All merchandising copy lives here in code,
//! so catalog edits ship through the same review pipeline as everything else.

use axis_core::{Price, Product, ProductId, SpecDetail};

/// The full product catalog, built once at startup and shared via `AppState`.
#[derive(Debug, Clone)]
pub struct Catalog {
    hook: Product,
    habit: Product,
}

impl Catalog {
    /// Look up a product by ID. Total: every `ProductId` has a catalog entry.
    pub const fn get(&self, id: ProductId) -> &Product {
        match id {
            ProductId::Hook => &self.hook,
            ProductId::Habit => &self.habit,
        }
    }

    /// All products in display order (trial first, subscription second).
    pub const fn all(&self) -> [&Product; 2] {
        [&self.hook, &self.habit]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            hook: Product {
                id: ProductId::Hook,
                name: "THE HOOK (TRIAL)".to_string(),
                price: Price::from_cents(1900),
                shipping: Price::from_cents(495),
                subtitle: "7-DAY SKEPTIC PROTOCOL".to_string(),
                description: "You've tried everything else. Melatonin grogginess. Smart rings \
                              that just tell you how poorly you slept. This is your 7-day audit. \
                              Verify the mechanism before you commit to the lifestyle."
                    .to_string(),
                includes: vec![
                    "7x Neuro-Primer Tablets".to_string(),
                    "1x Digital Sleep Audit".to_string(),
                    "Zero Commitment".to_string(),
                ],
                tag: "STARTER PACK".to_string(),
                sku: "AX-001-TRL".to_string(),
                details: vec![
                    SpecDetail::new("PRIMARY AGENT", "LINALOOL (RAPID UPTAKE)"),
                    SpecDetail::new("SUPPLY", "7 DOSES (1 WEEK)"),
                    SpecDetail::new("PACKAGING", "STANDARD RESEALABLE"),
                    SpecDetail::new("OBJECTIVE", "VALIDATION"),
                ],
                mission: vec![
                    "Objective: Test efficacy of olfactory pathway.".to_string(),
                    "Duration: 7 consecutive nights.".to_string(),
                    "Failure Condition: If sleep does not improve, system is incompatible. \
                     Refund issued."
                        .to_string(),
                    "Success Condition: Proceed to Monthly Automation.".to_string(),
                ],
            },
            habit: Product {
                id: ProductId::Habit,
                name: "THE HABIT (SUB)".to_string(),
                price: Price::from_cents(5900),
                shipping: Price::ZERO,
                subtitle: "SYSTEM AUTOMATION".to_string(),
                description: "Consistency is the only biohack that matters. Automate your \
                              recovery. Ensure your bathroom is stocked before you run out. The \
                              highest ROI for your sleep, delivered on autopilot."
                    .to_string(),
                includes: vec![
                    "28x Neuro-Primer Tablets".to_string(),
                    "Priority Free Shipping".to_string(),
                    "VIP Lab Access".to_string(),
                    "Premium Storage Tin (First Order)".to_string(),
                ],
                tag: "PRO LOADOUT".to_string(),
                sku: "AX-002-SUB".to_string(),
                details: vec![
                    SpecDetail::new("PRIMARY AGENT", "LINALOOL (SUSTAINED)"),
                    SpecDetail::new("SUPPLY", "28 DOSES (4 WEEKS)"),
                    SpecDetail::new("PACKAGING", "REFILLABLE TIN + ECO BAG"),
                    SpecDetail::new("OBJECTIVE", "OPTIMIZATION"),
                ],
                mission: vec![
                    "Objective: Maintain Cortisol/HPA regulation.".to_string(),
                    "Frequency: Auto-ship every 30 days.".to_string(),
                    "Flexibility: Pause or Cancel anytime via SMS.".to_string(),
                    "Perks: Early access to new scents (Lavender/Bergamot) beta tests."
                        .to_string(),
                ],
            },
        }
    }
}
