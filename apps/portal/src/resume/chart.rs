use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::resume::analysis::SKILL_LEVELS;

/// Radar chart configuration handed to the page's chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillChart {
    pub handle: Uuid,
    pub kind: &'static str,
    pub dataset_label: &'static str,
    pub labels: Vec<String>,
    pub data: Vec<u8>,
    pub scale_max: u8,
    pub step_size: u8,
}

impl SkillChart {
    fn from_levels(levels: &[(&str, u8)]) -> Self {
        Self {
            handle: Uuid::new_v4(),
            kind: "radar",
            dataset_label: "Your Skills",
            labels: levels.iter().map(|(skill, _)| skill.to_string()).collect(),
            data: levels.iter().map(|(_, level)| *level).collect(),
            scale_max: 10,
            step_size: 2,
        }
    }
}

/// Owns at most one live chart. Creating a chart releases any previous one.
#[derive(Debug, Default)]
pub struct ChartSlot {
    current: Option<SkillChart>,
}

impl ChartSlot {
    pub fn create(&mut self) -> &SkillChart {
        self.release();
        let chart = SkillChart::from_levels(SKILL_LEVELS);
        debug!(handle = %chart.handle, "skill chart created");
        self.current.insert(chart)
    }

    /// Releases the live chart, if any. Safe to call repeatedly.
    pub fn release(&mut self) -> bool {
        match self.current.take() {
            Some(chart) => {
                debug!(handle = %chart.handle, "skill chart released");
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<&SkillChart> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_replaces_previous_handle() {
        let mut slot = ChartSlot::default();
        let first = slot.create().handle;
        let second = slot.create().handle;
        assert_ne!(first, second);
        assert_eq!(slot.current().unwrap().handle, second);
    }

    #[test]
    fn test_release_then_create_succeeds() {
        let mut slot = ChartSlot::default();
        slot.create();
        assert!(slot.release());
        assert!(!slot.release());
        assert!(slot.current().is_none());
        let chart = slot.create();
        assert_eq!(chart.labels.len(), SKILL_LEVELS.len());
        assert_eq!(chart.scale_max, 10);
    }
}
