//! Lifestyle and medical recommendations by risk category
//!
//! The list order is part of the output: baseline lifestyle items first,
//! then the alcohol item, then the category-specific follow-up.

use crate::framingham::{BiologicalSex, RiskCategory};

const BASELINE: [&str; 3] = [
    "Maintain a healthy diet rich in fruits and vegetables",
    "Engage in at least 150 minutes of moderate exercise weekly",
    "Maintain a healthy weight (BMI 18.5-24.9)",
];

const LOW_RISK: [&str; 2] = [
    "Regular health check-ups every 2 years",
    "Monitor blood pressure annually",
];

const MODERATE_RISK: [&str; 4] = [
    "Consult with your primary care physician",
    "Consider cholesterol screening annually",
    "Monitor blood pressure regularly (every 6 months)",
    "Consider aspirin therapy (discuss with doctor)",
];

const HIGH_RISK: [&str; 5] = [
    "Urgent consultation with a cardiologist",
    "Medication evaluation may be needed (statins, antihypertensives)",
    "Comprehensive cardiac workup recommended",
    "Strict blood pressure control (<130/80 mmHg)",
    "LDL cholesterol target <100 mg/dL (or <70 if very high risk)",
];

/// Alcohol moderation advice phrased for the patient's sex
pub fn alcohol_advice(sex: BiologicalSex) -> &'static str {
    match sex {
        BiologicalSex::Male => "Reduce alcohol consumption (≤2 drinks/day for men)",
        BiologicalSex::Female => "Reduce alcohol consumption (≤1 drink/day for women)",
    }
}

/// Follow-up items specific to a risk category
pub fn category_advice(category: RiskCategory) -> &'static [&'static str] {
    match category {
        RiskCategory::Low => &LOW_RISK,
        RiskCategory::Moderate => &MODERATE_RISK,
        RiskCategory::High => &HIGH_RISK,
    }
}

/// Build the ordered recommendation list for a category and sex
pub fn recommend(category: RiskCategory, sex: BiologicalSex) -> Vec<String> {
    let tail = category_advice(category);
    let mut items = Vec::with_capacity(BASELINE.len() + 1 + tail.len());
    items.extend(BASELINE.iter().map(|s| s.to_string()));
    items.push(alcohol_advice(sex).to_string());
    items.extend(tail.iter().map(|s| s.to_string()));
    items
}
