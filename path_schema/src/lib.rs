use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Difficulty level -> availability flag. A level counts as available when its key is present.
pub type LevelMap = BTreeMap<u32, bool>;

/// Sort key used for openings that carry no level data at all.
pub const NO_LEVEL_SENTINEL: u32 = 99;

pub const MAX_MASTERY: u8 = 3;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Opening {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white_levels: Option<LevelMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub black_levels: Option<LevelMap>,
}

impl Opening {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            white_levels: None,
            black_levels: None,
        }
    }

    pub fn with_white_levels(mut self, levels: impl IntoIterator<Item = u32>) -> Self {
        self.white_levels = Some(levels.into_iter().map(|l| (l, true)).collect());
        self
    }

    pub fn with_black_levels(mut self, levels: impl IntoIterator<Item = u32>) -> Self {
        self.black_levels = Some(levels.into_iter().map(|l| (l, true)).collect());
        self
    }

    pub fn has_white(&self) -> bool {
        self.white_levels.as_ref().is_some_and(|m| !m.is_empty())
    }

    pub fn has_black(&self) -> bool {
        self.black_levels.as_ref().is_some_and(|m| !m.is_empty())
    }

    /// Lowest level key present across both perspectives.
    pub fn lowest_level(&self) -> Option<u32> {
        let white = self.white_levels.iter().flat_map(|m| m.keys());
        let black = self.black_levels.iter().flat_map(|m| m.keys());
        white.chain(black).copied().min()
    }

    pub fn sort_level(&self) -> u32 {
        self.lowest_level().unwrap_or(NO_LEVEL_SENTINEL)
    }

    pub fn repertoire_color(&self) -> RepertoireColor {
        match (self.has_white(), self.has_black()) {
            (true, true) => RepertoireColor::Both,
            (false, true) => RepertoireColor::Black,
            // white is checked first, so level-less openings land here too
            _ => RepertoireColor::White,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct OpeningStat {
    pub opening_name: String,
    #[serde(default)]
    pub completed_sessions: u32,
    #[serde(default)]
    pub total_sessions: u32,
}

impl OpeningStat {
    pub fn new(opening_name: impl Into<String>, completed_sessions: u32, total_sessions: u32) -> Self {
        Self {
            opening_name: opening_name.into(),
            completed_sessions,
            total_sessions,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_sessions > 0
    }

    pub fn is_attempted(&self) -> bool {
        self.total_sessions > 0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RepertoireColor {
    White,
    Black,
    Both,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Completed,
    Current,
    Next,
    Locked,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PathNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub status: NodeStatus,
    pub mastery_level: u8,
    pub repertoire_color: RepertoireColor,
    #[serde(flatten)]
    pub kind: PathNodeKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum PathNodeKind {
    #[serde(rename = "lesson")]
    Lesson { index: usize, opening: String },

    #[serde(rename = "reward")]
    Reward {
        #[serde(rename = "anchorIndex")]
        anchor_index: usize,
    },

    #[serde(rename = "unit_header")]
    UnitHeader {
        #[serde(rename = "unitId")]
        unit_id: usize,
        title: String,
        color: String,
    },
}

impl PathNode {
    pub fn is_lesson(&self) -> bool {
        matches!(self.kind, PathNodeKind::Lesson { .. })
    }

    pub fn is_reward(&self) -> bool {
        matches!(self.kind, PathNodeKind::Reward { .. })
    }

    pub fn is_unit_header(&self) -> bool {
        matches!(self.kind, PathNodeKind::UnitHeader { .. })
    }

    pub fn opening_name(&self) -> Option<&str> {
        match &self.kind {
            PathNodeKind::Lesson { opening, .. } => Some(opening),
            _ => None,
        }
    }
}
