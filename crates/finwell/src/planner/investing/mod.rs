mod allocation;
mod education;
mod readiness;

pub use allocation::{allocation_example, AllocationExample, AllocationSignals};
pub use education::{infer_region, region_education, InvestingEducation, Region};
pub use readiness::{assess_readiness, InvestingReadiness, ReadinessSignals};

use serde::{Deserialize, Serialize};

/// Education-only investing view attached to every plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestingAssessment {
    pub region: Region,
    pub readiness: InvestingReadiness,
    pub education: InvestingEducation,
    pub allocation_example: AllocationExample,
    pub allocation_visual: String,
}

pub fn assess(
    region: Region,
    readiness: &ReadinessSignals,
    allocation: &AllocationSignals,
) -> InvestingAssessment {
    let allocation_example = allocation_example(allocation);

    InvestingAssessment {
        region,
        readiness: assess_readiness(readiness),
        education: region_education(region),
        allocation_visual: allocation_example.visual(),
        allocation_example,
    }
}
