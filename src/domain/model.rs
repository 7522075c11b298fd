use crate::domain::ports::EmergencyCooling;
use crate::utils::error::Result;
use crate::utils::validation::validate_range;
use std::fmt;

pub const MIN_STABILITY: f64 = 0.0;
pub const MAX_STABILITY: f64 = 100.0;
pub const DEFAULT_STABILITY: f64 = 50.0;
pub const COOLING_BOOST: f64 = 20.0;

/// A stability score that is always inside `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Stability(f64);

impl Stability {
    pub fn new(value: f64) -> Result<Self> {
        validate_range("stability", value, MIN_STABILITY, MAX_STABILITY)?;
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    fn boosted(self, amount: f64) -> Self {
        Self((self.0 + amount).min(MAX_STABILITY))
    }
}

impl Default for Stability {
    fn default() -> Self {
        Self(DEFAULT_STABILITY)
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lower bound of the middle band and lower bound of the top band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    pub elevated_from: f64,
    pub nominal_from: f64,
}

pub const STORAGE_THRESHOLDS: TierThresholds = TierThresholds {
    elevated_from: 30.0,
    nominal_from: 60.0,
};

pub const METHOD_THRESHOLDS: TierThresholds = TierThresholds {
    elevated_from: 20.0,
    nominal_from: 50.0,
};

/// Variant-independent risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskBand {
    High,
    Elevated,
    Nominal,
}

impl RiskBand {
    pub fn classify(stability: f64, thresholds: TierThresholds) -> Self {
        if stability < thresholds.elevated_from {
            RiskBand::High
        } else if stability < thresholds.nominal_from {
            RiskBand::Elevated
        } else {
            RiskBand::Nominal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DangerTier {
    // Storage
    Critical,
    ModerateRisk,
    Safe,
    // Method
    CrashRisk,
    Unstable,
    Stable,
}

impl DangerTier {
    pub fn label(self) -> &'static str {
        match self {
            DangerTier::Critical => "WARNING",
            DangerTier::ModerateRisk => "CAUTION",
            DangerTier::Safe => "SAFE",
            DangerTier::CrashRisk => "CRITICAL",
            DangerTier::Unstable => "WARNING",
            DangerTier::Stable => "STABLE",
        }
    }

    pub fn band(self) -> RiskBand {
        match self {
            DangerTier::Critical | DangerTier::CrashRisk => RiskBand::High,
            DangerTier::ModerateRisk | DangerTier::Unstable => RiskBand::Elevated,
            DangerTier::Safe | DangerTier::Stable => RiskBand::Nominal,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DangerReport {
    pub tier: DangerTier,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoolingReport {
    pub id: String,
    pub before: f64,
    pub after: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageUnit {
    supervisor: String,
}

impl StorageUnit {
    pub fn new(supervisor: impl Into<String>) -> Self {
        Self {
            supervisor: supervisor.into(),
        }
    }

    pub fn supervisor(&self) -> &str {
        &self.supervisor
    }

    pub fn set_supervisor(&mut self, supervisor: impl Into<String>) {
        self.supervisor = supervisor.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisMethod {
    analysis_type: String,
    status_reporting_enabled: bool,
}

impl AnalysisMethod {
    pub fn new(analysis_type: impl Into<String>) -> Self {
        Self {
            analysis_type: analysis_type.into(),
            status_reporting_enabled: true,
        }
    }

    pub fn analysis_type(&self) -> &str {
        &self.analysis_type
    }

    pub fn set_analysis_type(&mut self, analysis_type: impl Into<String>) {
        self.analysis_type = analysis_type.into();
    }

    /// Informational only; nothing is gated on it.
    pub fn status_reporting_enabled(&self) -> bool {
        self.status_reporting_enabled
    }

    pub fn set_status_reporting_enabled(&mut self, enabled: bool) {
        self.status_reporting_enabled = enabled;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Storage(StorageUnit),
    Method(AnalysisMethod),
}

impl ObjectKind {
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Storage(_) => "Storage",
            ObjectKind::Method(_) => "Method",
        }
    }

    pub fn thresholds(&self) -> TierThresholds {
        match self {
            ObjectKind::Storage(_) => STORAGE_THRESHOLDS,
            ObjectKind::Method(_) => METHOD_THRESHOLDS,
        }
    }
}

/// An identified object with a bounded stability score.
///
/// The shared fields live here; variant data and behavior are selected by
/// [`ObjectKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumObject {
    id: String,
    stability: Stability,
    kind: ObjectKind,
}

impl QuantumObject {
    pub fn new(id: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            id: id.into(),
            stability: Stability::default(),
            kind,
        }
    }

    pub fn storage(id: impl Into<String>, supervisor: impl Into<String>) -> Self {
        Self::new(id, ObjectKind::Storage(StorageUnit::new(supervisor)))
    }

    pub fn method(id: impl Into<String>, analysis_type: impl Into<String>) -> Self {
        Self::new(id, ObjectKind::Method(AnalysisMethod::new(analysis_type)))
    }

    /// Builder-style variant of [`set_stability`](Self::set_stability).
    pub fn with_stability(mut self, value: f64) -> Result<Self> {
        self.set_stability(value)?;
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn stability(&self) -> f64 {
        self.stability.value()
    }

    /// Rejects values outside `[0, 100]` and keeps the previous value.
    pub fn set_stability(&mut self, value: f64) -> Result<()> {
        self.stability = Stability::new(value)?;
        Ok(())
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut ObjectKind {
        &mut self.kind
    }

    pub fn danger_level(&self) -> DangerReport {
        let band = RiskBand::classify(self.stability(), self.kind.thresholds());
        let (id, s) = (&self.id, self.stability);

        let (tier, message) = match (&self.kind, band) {
            (ObjectKind::Storage(_), RiskBand::High) => (
                DangerTier::Critical,
                format!("{id} storage is at a critical level! Stability: {s}%"),
            ),
            (ObjectKind::Storage(_), RiskBand::Elevated) => (
                DangerTier::ModerateRisk,
                format!("{id} storage is at moderate risk. Stability: {s}%"),
            ),
            (ObjectKind::Storage(_), RiskBand::Nominal) => (
                DangerTier::Safe,
                format!("{id} storage is at a safe level. Stability: {s}%"),
            ),
            (ObjectKind::Method(_), RiskBand::High) => (
                DangerTier::CrashRisk,
                format!("{id} method is at risk of crashing! Stability: {s}%"),
            ),
            (ObjectKind::Method(_), RiskBand::Elevated) => (
                DangerTier::Unstable,
                format!("{id} method is unstable. Stability: {s}%"),
            ),
            (ObjectKind::Method(_), RiskBand::Nominal) => (
                DangerTier::Stable,
                format!("{id} method is operating normally. Stability: {s}%"),
            ),
        };

        DangerReport {
            tier,
            message: format!("{}: {}", tier.label(), message),
        }
    }

    fn base_status(&self) -> String {
        format!("Object ID: {}, Stability: {}%", self.id, self.stability)
    }

    pub fn status_report(&self) -> String {
        let mut report = self.base_status();
        match &self.kind {
            ObjectKind::Storage(storage) => {
                report.push_str(&format!("\nShift Supervisor: {}", storage.supervisor()));
            }
            ObjectKind::Method(method) => {
                report.push_str(&format!(
                    "\nAnalysis Type: {}, Status Reporting Enabled: {}",
                    method.analysis_type(),
                    method.status_reporting_enabled()
                ));
            }
        }
        report
    }

    pub fn supports_cooling(&self) -> bool {
        matches!(self.kind, ObjectKind::Storage(_))
    }

    /// Borrows the cooling capability when this object has one.
    pub fn cooling(&mut self) -> Option<Cooling<'_>> {
        match self.kind {
            ObjectKind::Storage(_) => Some(Cooling {
                id: &self.id,
                stability: &mut self.stability,
            }),
            ObjectKind::Method(_) => None,
        }
    }
}

/// Handle to an object's emergency cooling capability.
#[derive(Debug)]
pub struct Cooling<'a> {
    id: &'a str,
    stability: &'a mut Stability,
}

impl EmergencyCooling for Cooling<'_> {
    fn emergency_cooling(&mut self) -> CoolingReport {
        let before = self.stability.value();
        // The only place a stability change is clamped instead of rejected.
        *self.stability = self.stability.boosted(COOLING_BOOST);

        CoolingReport {
            id: self.id.to_string(),
            before,
            after: self.stability.value(),
            message: format!("Emergency cooling initiated for storage {}!", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_at(value: f64) -> QuantumObject {
        QuantumObject::storage("AMB-T", "Tester").with_stability(value).unwrap()
    }

    fn method_at(value: f64) -> QuantumObject {
        QuantumObject::method("MET-T", "Probe").with_stability(value).unwrap()
    }

    #[test]
    fn test_new_objects_start_at_default_stability() {
        assert_eq!(QuantumObject::storage("A", "B").stability(), 50.0);
        assert_eq!(QuantumObject::method("M", "T").stability(), 50.0);
    }

    #[test]
    fn test_valid_stability_is_stored() {
        let mut obj = QuantumObject::storage("A", "B");
        for v in [0.0, 0.5, 29.9, 50.0, 99.99, 100.0] {
            obj.set_stability(v).unwrap();
            assert_eq!(obj.stability(), v);
        }
    }

    #[test]
    fn test_invalid_stability_keeps_previous_value() {
        let mut obj = QuantumObject::method("M", "T");
        obj.set_stability(42.0).unwrap();
        for v in [-0.01, -50.0, 100.01, 1e9, f64::NAN, f64::INFINITY] {
            assert!(obj.set_stability(v).is_err());
            assert_eq!(obj.stability(), 42.0);
        }
    }

    #[test]
    fn test_storage_tier_boundaries() {
        assert_eq!(storage_at(29.0).danger_level().tier, DangerTier::Critical);
        assert_eq!(storage_at(30.0).danger_level().tier, DangerTier::ModerateRisk);
        assert_eq!(storage_at(59.0).danger_level().tier, DangerTier::ModerateRisk);
        assert_eq!(storage_at(60.0).danger_level().tier, DangerTier::Safe);
    }

    #[test]
    fn test_method_tier_boundaries() {
        assert_eq!(method_at(19.0).danger_level().tier, DangerTier::CrashRisk);
        assert_eq!(method_at(20.0).danger_level().tier, DangerTier::Unstable);
        assert_eq!(method_at(49.0).danger_level().tier, DangerTier::Unstable);
        assert_eq!(method_at(50.0).danger_level().tier, DangerTier::Stable);
    }

    #[test]
    fn test_variants_do_not_share_cutoffs() {
        // 25 is critical for storage but only unstable for a method.
        assert_eq!(storage_at(25.0).danger_level().tier.band(), RiskBand::High);
        assert_eq!(method_at(25.0).danger_level().tier.band(), RiskBand::Elevated);
    }

    #[test]
    fn test_danger_messages_include_id_and_stability() {
        let report = storage_at(25.0).danger_level();
        assert_eq!(
            report.message,
            "WARNING: AMB-T storage is at a critical level! Stability: 25%"
        );

        let report = method_at(80.5).danger_level();
        assert_eq!(
            report.message,
            "STABLE: MET-T method is operating normally. Stability: 80.5%"
        );
    }

    #[test]
    fn test_status_report_extends_base_line() {
        let storage = storage_at(75.0);
        assert_eq!(
            storage.status_report(),
            "Object ID: AMB-T, Stability: 75%\nShift Supervisor: Tester"
        );

        let mut method = method_at(15.0);
        if let ObjectKind::Method(m) = method.kind_mut() {
            m.set_status_reporting_enabled(false);
        }
        assert_eq!(
            method.status_report(),
            "Object ID: MET-T, Stability: 15%\nAnalysis Type: Probe, Status Reporting Enabled: false"
        );
    }

    #[test]
    fn test_cooling_adds_twenty() {
        let mut obj = storage_at(50.0);
        let report = obj.cooling().unwrap().emergency_cooling();
        assert_eq!(report.before, 50.0);
        assert_eq!(report.after, 70.0);
        assert_eq!(obj.stability(), 70.0);
        assert_eq!(report.message, "Emergency cooling initiated for storage AMB-T!");
    }

    #[test]
    fn test_cooling_clamps_at_maximum() {
        let mut obj = storage_at(90.0);
        obj.cooling().unwrap().emergency_cooling();
        assert_eq!(obj.stability(), 100.0);

        obj.cooling().unwrap().emergency_cooling();
        assert_eq!(obj.stability(), 100.0);
    }

    #[test]
    fn test_methods_have_no_cooling() {
        let mut obj = method_at(10.0);
        assert!(!obj.supports_cooling());
        assert!(obj.cooling().is_none());
        assert_eq!(obj.stability(), 10.0);
    }

    #[test]
    fn test_attribute_setters() {
        let mut obj = QuantumObject::storage("A", "B");
        obj.set_id("AMB-009");
        assert_eq!(obj.id(), "AMB-009");
        if let ObjectKind::Storage(s) = obj.kind_mut() {
            s.set_supervisor("Night Shift");
        }
        match obj.kind() {
            ObjectKind::Storage(s) => assert_eq!(s.supervisor(), "Night Shift"),
            other => panic!("unexpected kind: {other:?}"),
        }

        let mut method = AnalysisMethod::new("Thermal");
        assert!(method.status_reporting_enabled());
        method.set_analysis_type("Spectral");
        assert_eq!(method.analysis_type(), "Spectral");
    }
}
