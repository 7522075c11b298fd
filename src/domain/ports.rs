use crate::domain::model::CoolingReport;

/// Remedial operation available to a subset of objects.
///
/// Callers reach it through [`QuantumObject::cooling`](crate::domain::model::QuantumObject::cooling)
/// instead of checking the concrete variant.
pub trait EmergencyCooling {
    fn emergency_cooling(&mut self) -> CoolingReport;
}
