use crate::core::summary::SystemSummary;
use crate::domain::model::{CoolingReport, DangerReport, QuantumObject};
use crate::domain::ports::EmergencyCooling;
use crate::utils::error::Result;

/// Owns the session's objects in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    objects: Vec<QuantumObject>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed set the walkthrough and `--demo` start from.
    pub fn demo() -> Result<Self> {
        let mut registry = Self::new();
        registry.add(QuantumObject::storage("AMB-001", "Ahmet Yılmaz").with_stability(25.0)?);
        registry.add(QuantumObject::storage("AMB-002", "Ayşe Demir").with_stability(75.0)?);
        registry.add(QuantumObject::method("MET-001", "Cooling Analysis").with_stability(15.0)?);
        registry.add(QuantumObject::method("MET-002", "Stability Check").with_stability(80.0)?);
        Ok(registry)
    }

    /// Returns the position of the new object.
    pub fn add(&mut self, object: QuantumObject) -> usize {
        tracing::debug!(
            id = object.id(),
            kind = object.kind().name(),
            stability = object.stability(),
            "Object registered"
        );
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn extend<I: IntoIterator<Item = QuantumObject>>(&mut self, objects: I) {
        for object in objects {
            self.add(object);
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<QuantumObject> {
        let index = self.objects.iter().position(|o| o.id() == id)?;
        tracing::debug!(id, "Object removed");
        Some(self.objects.remove(index))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuantumObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut QuantumObject> {
        self.objects.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&QuantumObject> {
        self.objects.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut QuantumObject> {
        self.objects.get_mut(index)
    }

    /// First object with the given id. Ids are not required to be unique.
    pub fn find(&self, id: &str) -> Option<&QuantumObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn status_reports(&self) -> Vec<String> {
        self.objects.iter().map(QuantumObject::status_report).collect()
    }

    pub fn danger_reports(&self) -> Vec<DangerReport> {
        self.objects.iter().map(QuantumObject::danger_level).collect()
    }

    pub fn cooling_capable(&self) -> usize {
        self.objects.iter().filter(|o| o.supports_cooling()).count()
    }

    /// Runs emergency cooling on every object that supports it.
    pub fn cool_all(&mut self) -> Vec<CoolingReport> {
        let reports: Vec<CoolingReport> = self
            .objects
            .iter_mut()
            .filter_map(QuantumObject::cooling)
            .map(|mut cooling| cooling.emergency_cooling())
            .collect();

        for report in &reports {
            tracing::info!(
                id = %report.id,
                before = report.before,
                after = report.after,
                "Emergency cooling applied"
            );
        }
        reports
    }

    pub fn summary(&self) -> SystemSummary {
        SystemSummary::from_objects(self.objects.iter())
    }

    pub fn into_objects(self) -> Vec<QuantumObject> {
        self.objects
    }
}

impl FromIterator<QuantumObject> for ObjectRegistry {
    fn from_iter<I: IntoIterator<Item = QuantumObject>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let registry = ObjectRegistry::demo().unwrap();
        let ids: Vec<&str> = registry.iter().map(QuantumObject::id).collect();
        assert_eq!(ids, ["AMB-001", "AMB-002", "MET-001", "MET-002"]);
    }

    #[test]
    fn test_cool_all_only_touches_capable_objects() {
        let mut registry = ObjectRegistry::demo().unwrap();
        assert_eq!(registry.cooling_capable(), 2);

        let reports = registry.cool_all();
        assert_eq!(reports.len(), 2);
        assert_eq!(registry.find("AMB-001").unwrap().stability(), 45.0);
        assert_eq!(registry.find("AMB-002").unwrap().stability(), 95.0);
        assert_eq!(registry.find("MET-001").unwrap().stability(), 15.0);
        assert_eq!(registry.find("MET-002").unwrap().stability(), 80.0);
    }

    #[test]
    fn test_cool_all_without_storage() {
        let mut registry: ObjectRegistry =
            [QuantumObject::method("MET-010", "Drift")].into_iter().collect();
        assert!(registry.cool_all().is_empty());
        assert_eq!(registry.get(0).unwrap().stability(), 50.0);
    }

    #[test]
    fn test_demo_summary() {
        let summary = ObjectRegistry::demo().unwrap().summary();
        assert_eq!((summary.critical, summary.safe, summary.moderate), (2, 2, 0));
    }

    #[test]
    fn test_remove() {
        let mut registry = ObjectRegistry::demo().unwrap();
        let removed = registry.remove("AMB-002").unwrap();
        assert_eq!(removed.id(), "AMB-002");
        assert_eq!(registry.len(), 3);
        assert!(registry.remove("AMB-002").is_none());
    }
}
