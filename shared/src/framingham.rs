//! Framingham point-table risk scoring
//!
//! Estimates 10-year cardiovascular disease risk from age, sex, cholesterol,
//! blood pressure, smoking and diabetes status.
//!
//! The pipeline is: risk factors → points → risk percentage → category.
//! Every step is a table lookup or an addition, so all functions here are
//! pure and total over validated input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::RiskError;

// ============================================================================
// Risk Factor Types
// ============================================================================

/// Biological sex for risk calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    pub fn as_str(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "male",
            BiologicalSex::Female => "female",
        }
    }
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(BiologicalSex::Male),
            "female" => Ok(BiologicalSex::Female),
            _ => Err(format!("Unknown biological sex: {}", s)),
        }
    }
}

/// Validated patient risk factors
///
/// Construct through [`crate::types::RiskAssessmentRequest::into_factors`]
/// when the values come from outside the process. Deserializing runs the
/// same range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "crate::validation::UncheckedRiskFactors")]
pub struct RiskFactors {
    /// Age in years
    pub age: u32,
    pub sex: BiologicalSex,
    /// Total cholesterol in mg/dL
    pub total_cholesterol: u32,
    /// HDL cholesterol in mg/dL, always > 0
    pub hdl_cholesterol: u32,
    /// Systolic blood pressure in mmHg
    pub systolic_bp: u32,
    pub is_smoker: bool,
    pub is_diabetic: bool,
    pub is_on_bp_treatment: bool,
}

// ============================================================================
// Result Types
// ============================================================================

/// Risk category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::High => "High",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one set of risk factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    pub points_total: i32,
    /// Estimated 10-year risk, always one of the table values
    pub risk_percentage: u8,
    pub risk_category: RiskCategory,
}

/// Per-factor contribution to the point total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub age: i32,
    pub cholesterol: i32,
    pub hdl: i32,
    pub blood_pressure: i32,
    pub smoking: i32,
    pub diabetes: i32,
}

impl PointsBreakdown {
    pub fn total(&self) -> i32 {
        self.age + self.cholesterol + self.hdl + self.blood_pressure + self.smoking + self.diabetes
    }
}

// ============================================================================
// Point Tables
// ============================================================================

/// (minimum age, points), highest bracket first
const MALE_AGE_POINTS: [(u32, i32); 8] = [
    (70, 12),
    (65, 11),
    (60, 10),
    (55, 8),
    (50, 6),
    (45, 4),
    (40, 2),
    (35, 1),
];

const FEMALE_AGE_POINTS: [(u32, i32); 8] = [
    (70, 16),
    (65, 14),
    (60, 12),
    (55, 10),
    (50, 8),
    (45, 6),
    (40, 4),
    (35, 2),
];

/// Lower bounds of cholesterol bands 1..=4 (band 0 is below 160 mg/dL)
const CHOLESTEROL_BAND_LIMITS: [u32; 4] = [160, 200, 240, 280];

/// (minimum age, points per cholesterol band), highest bracket first.
/// Every bracket from 40 up shares one vector; only under-40 differs.
const CHOLESTEROL_POINTS_BY_AGE: [(u32, [i32; 5]); 5] = [
    (70, [0, 1, 2, 3, 4]),
    (60, [0, 1, 2, 3, 4]),
    (50, [0, 1, 2, 3, 4]),
    (40, [0, 1, 2, 3, 4]),
    (0, [0, 4, 7, 9, 11]),
];

const BP_TREATMENT_POINTS: i32 = 2;

/// (exclusive upper threshold, risk %), ascending
const MALE_RISK_TABLE: [(i32, u8); 13] = [
    (0, 1),
    (5, 2),
    (7, 3),
    (8, 4),
    (9, 5),
    (10, 6),
    (11, 8),
    (12, 10),
    (13, 12),
    (14, 16),
    (15, 20),
    (16, 25),
    (17, 30),
];

const FEMALE_RISK_TABLE: [(i32, u8); 13] = [
    (9, 1),
    (12, 2),
    (14, 3),
    (15, 4),
    (16, 5),
    (17, 6),
    (18, 8),
    (19, 11),
    (20, 14),
    (21, 17),
    (22, 22),
    (23, 27),
    (24, 30),
];

/// Risk at or above which any patient is classified High
const HIGH_RISK_PERCENT: u8 = 20;

// ============================================================================
// Points Accumulation
// ============================================================================

fn bracket_points(value: u32, table: &[(u32, i32)]) -> i32 {
    table
        .iter()
        .find(|(min, _)| value >= *min)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// Points for age; ages under 35 score zero
pub fn age_points(age: u32, sex: BiologicalSex) -> i32 {
    match sex {
        BiologicalSex::Male => bracket_points(age, &MALE_AGE_POINTS),
        BiologicalSex::Female => bracket_points(age, &FEMALE_AGE_POINTS),
    }
}

/// Index of the cholesterol band (0..=4) for a total cholesterol value
pub fn cholesterol_band(total_cholesterol: u32) -> usize {
    CHOLESTEROL_BAND_LIMITS
        .iter()
        .take_while(|limit| total_cholesterol >= **limit)
        .count()
}

/// Points for total cholesterol, which depend on the age bracket
pub fn cholesterol_points(total_cholesterol: u32, age: u32) -> i32 {
    let band = cholesterol_band(total_cholesterol);
    CHOLESTEROL_POINTS_BY_AGE
        .iter()
        .find(|(min_age, _)| age >= *min_age)
        .map(|(_, points)| points[band])
        .unwrap_or(0)
}

/// Points for HDL cholesterol (higher HDL is protective)
pub fn hdl_points(hdl_cholesterol: u32) -> i32 {
    if hdl_cholesterol >= 60 {
        -2
    } else if hdl_cholesterol >= 50 {
        -1
    } else if hdl_cholesterol >= 40 {
        0
    } else if hdl_cholesterol >= 35 {
        1
    } else {
        2
    }
}

/// Points for systolic blood pressure, plus a flat surcharge when treated
pub fn blood_pressure_points(systolic_bp: u32, on_treatment: bool) -> i32 {
    let points = if systolic_bp < 120 {
        0
    } else if systolic_bp < 130 {
        1
    } else if systolic_bp < 140 {
        2
    } else if systolic_bp < 160 {
        3
    } else {
        4
    };
    if on_treatment {
        points + BP_TREATMENT_POINTS
    } else {
        points
    }
}

pub fn smoking_points(is_smoker: bool, sex: BiologicalSex) -> i32 {
    match (is_smoker, sex) {
        (false, _) => 0,
        (true, BiologicalSex::Male) => 4,
        (true, BiologicalSex::Female) => 3,
    }
}

pub fn diabetes_points(is_diabetic: bool, sex: BiologicalSex) -> i32 {
    match (is_diabetic, sex) {
        (false, _) => 0,
        (true, BiologicalSex::Male) => 3,
        (true, BiologicalSex::Female) => 4,
    }
}

/// Score every factor separately
pub fn points_breakdown(factors: &RiskFactors) -> PointsBreakdown {
    PointsBreakdown {
        age: age_points(factors.age, factors.sex),
        cholesterol: cholesterol_points(factors.total_cholesterol, factors.age),
        hdl: hdl_points(factors.hdl_cholesterol),
        blood_pressure: blood_pressure_points(factors.systolic_bp, factors.is_on_bp_treatment),
        smoking: smoking_points(factors.is_smoker, factors.sex),
        diabetes: diabetes_points(factors.is_diabetic, factors.sex),
    }
}

/// Total points for a set of risk factors (no clamping)
pub fn compute_points(factors: &RiskFactors) -> i32 {
    points_breakdown(factors).total()
}

// ============================================================================
// Risk Mapping and Classification
// ============================================================================

fn risk_table(sex: BiologicalSex) -> &'static [(i32, u8)] {
    match sex {
        BiologicalSex::Male => &MALE_RISK_TABLE,
        BiologicalSex::Female => &FEMALE_RISK_TABLE,
    }
}

/// Highest risk percentage the table for `sex` can return
pub fn max_risk_percentage(sex: BiologicalSex) -> u8 {
    risk_table(sex).last().map(|(_, risk)| *risk).unwrap_or(0)
}

/// Convert a point total to a 10-year risk percentage
///
/// Returns the risk of the first threshold strictly greater than `points`.
/// Totals past the last threshold are capped at the table ceiling.
pub fn points_to_risk(points: i32, sex: BiologicalSex) -> u8 {
    risk_table(sex)
        .iter()
        .find(|(threshold, _)| points < *threshold)
        .map(|(_, risk)| *risk)
        .unwrap_or_else(|| max_risk_percentage(sex))
}

/// Risk below which a patient is classified Low
pub fn low_risk_cutoff(sex: BiologicalSex) -> u8 {
    match sex {
        BiologicalSex::Male => 6,
        BiologicalSex::Female => 5,
    }
}

/// Classify a risk percentage; cut-off values belong to the higher category
pub fn categorize(risk_percentage: u8, sex: BiologicalSex) -> RiskCategory {
    if risk_percentage < low_risk_cutoff(sex) {
        RiskCategory::Low
    } else if risk_percentage < HIGH_RISK_PERCENT {
        RiskCategory::Moderate
    } else {
        RiskCategory::High
    }
}

// ============================================================================
// Scoring Models
// ============================================================================

/// Identifier of the point-table model
pub const FRAMINGHAM_POINTS_V1: &str = "framingham-points-v1";

/// A versioned risk scoring strategy
///
/// Implementations hold no state, so one instance can be shared between any
/// number of concurrent callers.
pub trait RiskModel: Send + Sync {
    /// Stable identifier reported alongside every result
    fn id(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn points_breakdown(&self, factors: &RiskFactors) -> PointsBreakdown;

    fn points_to_risk(&self, points: i32, sex: BiologicalSex) -> u8;

    fn categorize(&self, risk_percentage: u8, sex: BiologicalSex) -> RiskCategory;

    fn score(&self, factors: &RiskFactors) -> RiskResult {
        let points_total = self.points_breakdown(factors).total();
        let risk_percentage = self.points_to_risk(points_total, factors.sex);
        RiskResult {
            points_total,
            risk_percentage,
            risk_category: self.categorize(risk_percentage, factors.sex),
        }
    }
}

/// Sex-specific Framingham point tables
#[derive(Debug, Clone, Copy, Default)]
pub struct FraminghamPointsModel;

impl RiskModel for FraminghamPointsModel {
    fn id(&self) -> &'static str {
        FRAMINGHAM_POINTS_V1
    }

    fn description(&self) -> &'static str {
        "Framingham 10-year cardiovascular risk, sex-specific point tables"
    }

    fn points_breakdown(&self, factors: &RiskFactors) -> PointsBreakdown {
        points_breakdown(factors)
    }

    fn points_to_risk(&self, points: i32, sex: BiologicalSex) -> u8 {
        points_to_risk(points, sex)
    }

    fn categorize(&self, risk_percentage: u8, sex: BiologicalSex) -> RiskCategory {
        categorize(risk_percentage, sex)
    }
}

/// Identifiers accepted by [`model_by_id`]
pub const AVAILABLE_MODELS: &[&str] = &[FRAMINGHAM_POINTS_V1];

/// Look up a scoring model by its identifier
pub fn model_by_id(id: &str) -> Result<Box<dyn RiskModel>, RiskError> {
    match id {
        FRAMINGHAM_POINTS_V1 => Ok(Box::new(FraminghamPointsModel)),
        other => Err(RiskError::UnknownModel(other.to_string())),
    }
}
