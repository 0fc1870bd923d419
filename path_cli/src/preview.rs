use path_layout::LayoutOptions;
use path_schema::{NodeStatus, PathNode, PathNodeKind, RepertoireColor};

const CENTER_COLUMN: usize = 24;
const UNITS_PER_COLUMN: f64 = 4.0;

fn column(x: f64, options: &LayoutOptions) -> usize {
    let offset = ((x - options.center_x) / UNITS_PER_COLUMN).round();
    (CENTER_COLUMN as f64 + offset).clamp(0.0, (CENTER_COLUMN * 2) as f64) as usize
}

fn status_marker(status: NodeStatus) -> char {
    match status {
        NodeStatus::Completed => '#',
        NodeStatus::Current => '@',
        NodeStatus::Next => '>',
        NodeStatus::Locked => '.',
    }
}

fn color_tag(color: RepertoireColor) -> &'static str {
    match color {
        RepertoireColor::White => "W",
        RepertoireColor::Black => "B",
        RepertoireColor::Both => "WB",
    }
}

/// One line per node, `y` on the left and the marker indented by its `x`.
pub fn render_preview(nodes: &[PathNode], options: &LayoutOptions) -> String {
    let mut out = String::new();
    if nodes.is_empty() {
        out.push_str("Path is empty.\n");
        return out;
    }

    for node in nodes {
        let label = match &node.kind {
            PathNodeKind::UnitHeader { unit_id, title, .. } => {
                // headers span the center, so shift left by half their width
                let text = format!("== Unit {}: {title} ==", unit_id + 1);
                let col = column(node.x, options).saturating_sub(text.len() / 2);
                out.push_str(&format!("{:>7.0} | {}{}\n", node.y, " ".repeat(col), text));
                continue;
            }
            PathNodeKind::Lesson { opening, .. } => format!(
                "{} {} [{}] m{}",
                status_marker(node.status),
                opening,
                color_tag(node.repertoire_color),
                node.mastery_level
            ),
            PathNodeKind::Reward { .. } => {
                let chest = if node.status == NodeStatus::Completed { '$' } else { '?' };
                format!("{chest} reward")
            }
        };

        out.push_str(&format!(
            "{:>7.0} | {}{}\n",
            node.y,
            " ".repeat(column(node.x, options)),
            label
        ));
    }
    out
}
