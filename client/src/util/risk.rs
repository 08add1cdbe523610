//! Risk banner copy per `RiskStatus`.

#[cfg(test)]
#[path = "risk_test.rs"]
mod risk_test;

use crate::net::types::RiskStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiskBanner {
    pub headline: &'static str,
    pub detail: &'static str,
    /// BEM modifier: `danger`, `stable`, or `unknown`.
    pub modifier: &'static str,
}

pub fn risk_banner(status: RiskStatus) -> RiskBanner {
    match status {
        RiskStatus::LifeThreatening => RiskBanner {
            headline: "LIFE-THREATENING CONDITION DETECTED",
            detail: "Immediate medical attention may be required.",
            modifier: "danger",
        },
        RiskStatus::Stable => RiskBanner {
            headline: "No Life-Threatening Conditions Detected",
            detail: "Patient condition appears stable.",
            modifier: "stable",
        },
        RiskStatus::Unknown => RiskBanner {
            headline: "Risk Status Unavailable",
            detail: "The analysis did not report a risk assessment.",
            modifier: "unknown",
        },
    }
}
