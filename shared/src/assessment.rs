//! Full risk assessment: score plus recommendations

use serde::{Deserialize, Serialize};

use crate::framingham::{PointsBreakdown, RiskFactors, RiskModel, RiskResult};
use crate::recommendations::recommend;

/// Everything a presentation layer needs to render one assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub factors: RiskFactors,
    pub breakdown: PointsBreakdown,
    pub result: RiskResult,
    pub recommendations: Vec<String>,
    /// Identifier of the model that produced the result
    pub model: String,
}

/// Score `factors` with `model` and attach recommendations
pub fn assess(model: &dyn RiskModel, factors: RiskFactors) -> RiskAssessment {
    let breakdown = model.points_breakdown(&factors);
    let result = model.score(&factors);
    let recommendations = recommend(result.risk_category, factors.sex);

    RiskAssessment {
        factors,
        breakdown,
        result,
        recommendations,
        model: model.id().to_string(),
    }
}
