use path_schema::{NodeStatus, PathNode, PathNodeKind, MAX_MASTERY};
use serde::Serialize;

/// Aggregated view of a laid-out path, for progress badges.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSummary {
    pub lessons: usize,
    pub completed_lessons: usize,
    pub units: usize,
    pub rewards: usize,
    pub rewards_unlocked: usize,
    pub total_mastery: u32,
    pub max_mastery: u32,
    pub current_lesson: Option<String>,
    pub next_lesson: Option<String>,
}

impl PathSummary {
    pub fn from_nodes(nodes: &[PathNode]) -> Self {
        let mut summary = Self::default();

        for node in nodes {
            match &node.kind {
                PathNodeKind::Lesson { opening, .. } => {
                    summary.lessons += 1;
                    summary.total_mastery += u32::from(node.mastery_level);
                    summary.max_mastery += u32::from(MAX_MASTERY);
                    match node.status {
                        NodeStatus::Completed => summary.completed_lessons += 1,
                        NodeStatus::Current => summary.current_lesson = Some(opening.clone()),
                        NodeStatus::Next => summary.next_lesson = Some(opening.clone()),
                        NodeStatus::Locked => {}
                    }
                }
                PathNodeKind::Reward { .. } => {
                    summary.rewards += 1;
                    if node.status == NodeStatus::Completed {
                        summary.rewards_unlocked += 1;
                    }
                }
                PathNodeKind::UnitHeader { .. } => summary.units += 1,
            }
        }

        summary
    }

    pub fn progress_ratio(&self) -> f64 {
        if self.lessons == 0 {
            return 0.0;
        }
        self.completed_lessons as f64 / self.lessons as f64
    }
}
