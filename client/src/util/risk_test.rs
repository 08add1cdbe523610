use super::*;

#[test]
fn life_threatening_uses_danger_copy() {
    let banner = risk_banner(RiskStatus::LifeThreatening);
    assert_eq!(banner.headline, "LIFE-THREATENING CONDITION DETECTED");
    assert_eq!(banner.detail, "Immediate medical attention may be required.");
    assert_eq!(banner.modifier, "danger");
}

#[test]
fn stable_uses_green_copy() {
    let banner = risk_banner(RiskStatus::Stable);
    assert_eq!(banner.headline, "No Life-Threatening Conditions Detected");
    assert_eq!(banner.detail, "Patient condition appears stable.");
    assert_eq!(banner.modifier, "stable");
}

#[test]
fn unknown_never_reuses_danger_or_stable_copy() {
    let unknown = risk_banner(RiskStatus::Unknown);
    assert_eq!(unknown.modifier, "unknown");
    assert_ne!(unknown, risk_banner(RiskStatus::LifeThreatening));
    assert_ne!(unknown, risk_banner(RiskStatus::Stable));
}
