use path_schema::{
    NodeStatus, Opening, OpeningStat, PathNode, PathNodeKind, RepertoireColor, MAX_MASTERY,
};
use tracing::trace;

use crate::sort::StatIndex;
use crate::LayoutOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitTheme {
    pub title: &'static str,
    pub color: &'static str,
}

pub const UNIT_THEMES: [UnitTheme; 4] = [
    UnitTheme {
        title: "Foundations",
        color: "#58CC02",
    },
    UnitTheme {
        title: "Center Control",
        color: "#1CB0F6",
    },
    UnitTheme {
        title: "Gambits & Sacrifices",
        color: "#FF9600",
    },
    UnitTheme {
        title: "Master Lines",
        color: "#CE82FF",
    },
];

pub fn unit_theme(unit_id: usize) -> UnitTheme {
    UNIT_THEMES[unit_id % UNIT_THEMES.len()]
}

/// Status and mastery for the lesson at `index`.
pub fn classify(index: usize, current_index: usize, stat: Option<&OpeningStat>) -> (NodeStatus, u8) {
    match stat {
        Some(s) if s.is_completed() => {
            let mastery = s.completed_sessions.min(MAX_MASTERY as u32) as u8;
            (NodeStatus::Completed, mastery)
        }
        _ if index == current_index => {
            let attempted = stat.is_some_and(|s| s.is_attempted());
            (NodeStatus::Current, u8::from(attempted))
        }
        _ if index == current_index + 1 => (NodeStatus::Next, 0),
        _ => (NodeStatus::Locked, 0),
    }
}

fn unit_status(start: usize, end: usize, current_index: usize) -> NodeStatus {
    if end <= current_index {
        NodeStatus::Completed
    } else if (start..end).contains(&current_index) {
        NodeStatus::Current
    } else {
        NodeStatus::Locked
    }
}

fn reward_status(anchor_index: usize, current_index: usize) -> NodeStatus {
    if anchor_index <= current_index {
        NodeStatus::Completed
    } else {
        NodeStatus::Locked
    }
}

pub(crate) fn layout_nodes(
    sorted: &[&Opening],
    stats: &StatIndex<'_>,
    current_index: usize,
    options: &LayoutOptions,
) -> Vec<PathNode> {
    let total = sorted.len();
    let mut nodes = Vec::with_capacity(total + total / options.reward_interval + total / options.unit_size + 1);
    let mut y = options.start_y;

    for (i, opening) in sorted.iter().enumerate() {
        let color = opening.repertoire_color();

        if i % options.unit_size == 0 {
            let unit_id = i / options.unit_size;
            let theme = unit_theme(unit_id);
            let end = (i + options.unit_size).min(total);
            nodes.push(PathNode {
                id: format!("unit-{unit_id}"),
                x: options.center_x,
                y,
                status: unit_status(i, end, current_index),
                mastery_level: 0,
                repertoire_color: color,
                kind: PathNodeKind::UnitHeader {
                    unit_id,
                    title: theme.title.to_string(),
                    color: theme.color.to_string(),
                },
            });
            y += options.header_spacing;
        }

        let side = if i % 2 == 0 { 1.0 } else { -1.0 };
        let stat = stats.get(opening.name.as_str()).copied();
        let (status, mastery_level) = classify(i, current_index, stat);
        trace!(index = i, opening = %opening.name, ?status, mastery_level, "lesson node");

        let lesson_y = y;
        nodes.push(PathNode {
            id: format!("lesson-{i}"),
            x: options.center_x + side * options.x_offset,
            y: lesson_y,
            status,
            mastery_level,
            repertoire_color: color,
            kind: PathNodeKind::Lesson {
                index: i,
                opening: opening.name.clone(),
            },
        });
        y += options.row_spacing;

        if (i + 1) % options.reward_interval == 0 {
            nodes.push(reward_node(i, lesson_y, side, color, current_index, options));
        }
    }

    nodes
}

fn reward_node(
    anchor_index: usize,
    lesson_y: f64,
    side: f64,
    color: RepertoireColor,
    current_index: usize,
    options: &LayoutOptions,
) -> PathNode {
    PathNode {
        id: format!("reward-{anchor_index}"),
        x: options.center_x - side * options.reward_offset,
        y: lesson_y + options.row_spacing / 2.0,
        status: reward_status(anchor_index, current_index),
        mastery_level: 0,
        repertoire_color: color,
        kind: PathNodeKind::Reward { anchor_index },
    }
}
