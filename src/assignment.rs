//! Multi-item assignment quizzes (drag devices into categories, drop layer
//! names onto layer numbers).
//!
//! All grading goes through [`AssignmentBoard::assign`]. Pointer devices
//! reach it through [`DragAdapter`], touch screens through [`TapAdapter`];
//! neither adapter grades anything itself.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::error::{LearnError, Result};

/// Something to be placed, with the target it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentItem {
    pub id: &'static str,
    pub label: &'static str,
    pub correct_target: &'static str,
}

/// A drop zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentTarget {
    pub id: &'static str,
    pub label: &'static str,
}

/// The literal definition of one assignment quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentSet {
    pub id: &'static str,
    pub title: &'static str,
    pub instructions: &'static str,
    pub items: &'static [AssignmentItem],
    pub targets: &'static [AssignmentTarget],
}

impl AssignmentSet {
    pub fn item(&self, id: &str) -> Option<&'static AssignmentItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn target(&self, id: &str) -> Option<&'static AssignmentTarget> {
        self.targets.iter().find(|t| t.id == id)
    }
}

/// `correct` out of `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }

    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct * 100 / self.total) as u32
    }
}

/// Per-target breakdown shown after checking answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetScore {
    pub target: &'static AssignmentTarget,
    pub score: Score,
}

/// The learner's current placements for one [`AssignmentSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentBoard {
    set: &'static AssignmentSet,
    placements: BTreeMap<&'static str, &'static str>,
    checked: bool,
}

impl AssignmentBoard {
    pub fn new(set: &'static AssignmentSet) -> Self {
        Self {
            set,
            placements: BTreeMap::new(),
            checked: false,
        }
    }

    pub fn set(&self) -> &'static AssignmentSet {
        self.set
    }

    /// Place `item` on `target`, moving it if already placed elsewhere.
    pub fn assign(&mut self, item: &str, target: &str) -> Result<()> {
        let Some(item) = self.set.item(item) else {
            warn!("assignment '{}': unknown item '{}'", self.set.id, item);
            return Err(LearnError::UnknownItem(item.to_string()));
        };
        let Some(target) = self.set.target(target) else {
            warn!("assignment '{}': unknown target '{}'", self.set.id, target);
            return Err(LearnError::UnknownTarget(target.to_string()));
        };
        debug!("assignment '{}': {} -> {}", self.set.id, item.id, target.id);
        self.placements.insert(item.id, target.id);
        self.checked = false;
        Ok(())
    }

    pub fn unassign(&mut self, item: &str) {
        if self.placements.remove(item).is_some() {
            self.checked = false;
        }
    }

    pub fn reset(&mut self) {
        self.placements.clear();
        self.checked = false;
    }

    pub fn placement(&self, item: &str) -> Option<&'static str> {
        self.placements.get(item).copied()
    }

    pub fn assigned_to(&self, target: &str) -> Vec<&'static AssignmentItem> {
        self.set
            .items
            .iter()
            .filter(|i| self.placements.get(i.id) == Some(&target))
            .collect()
    }

    pub fn unplaced(&self) -> Vec<&'static AssignmentItem> {
        self.set
            .items
            .iter()
            .filter(|i| !self.placements.contains_key(i.id))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.placements.len() == self.set.items.len()
    }

    /// Reveal results. The view only colors placements once checked.
    pub fn check(&mut self) -> Score {
        self.checked = true;
        self.score()
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether `item` sits on its correct target; `None` if unplaced.
    pub fn is_correct(&self, item: &str) -> Option<bool> {
        let item = self.set.item(item)?;
        self.placement(item.id).map(|t| t == item.correct_target)
    }

    pub fn score(&self) -> Score {
        let correct = self
            .set
            .items
            .iter()
            .filter(|i| self.placements.get(i.id) == Some(&i.correct_target))
            .count();
        Score {
            correct,
            total: self.set.items.len(),
        }
    }

    /// For each target: items correctly placed there over items that
    /// belong there.
    pub fn target_scores(&self) -> Vec<TargetScore> {
        self.set
            .targets
            .iter()
            .map(|target| {
                let belonging = self
                    .set
                    .items
                    .iter()
                    .filter(|i| i.correct_target == target.id);
                let total = belonging.clone().count();
                let correct = belonging
                    .filter(|i| self.placements.get(i.id) == Some(&target.id))
                    .count();
                TargetScore {
                    target,
                    score: Score { correct, total },
                }
            })
            .collect()
    }
}

/// Which input adapter the current device should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Drag,
    Tap,
}

impl InputMode {
    /// Touch screens (coarse pointers) get tap-to-place.
    pub fn from_coarse_pointer(coarse: bool) -> Self {
        if coarse { InputMode::Tap } else { InputMode::Drag }
    }

    pub fn hint(self) -> &'static str {
        match self {
            InputMode::Drag => "Drag each item onto a box",
            InputMode::Tap => "Tap an item, then tap a box",
        }
    }
}

/// Input adapters hold at most one pending item between gestures.
pub trait AssignmentInput {
    fn pending(&self) -> Option<&'static str>;
    fn cancel(&mut self);
}

/// Pointer drag: `drag_start` on an item, `drop_on` a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragAdapter {
    dragging: Option<&'static str>,
}

impl DragAdapter {
    pub fn drag_start(&mut self, board: &AssignmentBoard, item: &str) -> Result<()> {
        let item = board
            .set()
            .item(item)
            .ok_or_else(|| LearnError::UnknownItem(item.to_string()))?;
        self.dragging = Some(item.id);
        Ok(())
    }

    /// Drop the dragged item. Dropping with nothing dragged does nothing.
    pub fn drop_on(&mut self, board: &mut AssignmentBoard, target: &str) -> Result<()> {
        let Some(item) = self.dragging.take() else {
            return Ok(());
        };
        board.assign(item, target)
    }

    /// The drag ended outside any target.
    pub fn drag_end(&mut self) {
        self.dragging = None;
    }
}

impl AssignmentInput for DragAdapter {
    fn pending(&self) -> Option<&'static str> {
        self.dragging
    }

    fn cancel(&mut self) {
        self.dragging = None;
    }
}

/// Tap sequence: tap an item to select it, tap a target to place it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TapAdapter {
    selected: Option<&'static str>,
}

impl TapAdapter {
    /// Select an item; tapping the selected item again deselects it.
    pub fn tap_item(&mut self, board: &AssignmentBoard, item: &str) -> Result<()> {
        let item = board
            .set()
            .item(item)
            .ok_or_else(|| LearnError::UnknownItem(item.to_string()))?;
        if self.selected == Some(item.id) {
            self.selected = None;
        } else {
            self.selected = Some(item.id);
        }
        Ok(())
    }

    /// Place the selected item. Tapping a target first does nothing.
    pub fn tap_target(&mut self, board: &mut AssignmentBoard, target: &str) -> Result<()> {
        let Some(item) = self.selected else {
            return Ok(());
        };
        board.assign(item, target)?;
        self.selected = None;
        Ok(())
    }
}

impl AssignmentInput for TapAdapter {
    fn pending(&self) -> Option<&'static str> {
        self.selected
    }

    fn cancel(&mut self) {
        self.selected = None;
    }
}
