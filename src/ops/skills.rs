use crate::model::skill::{Skill, SkillCategory, SkillFocus};

/// Column width of the virtual grid used for up/down movement
pub const GRID_COLUMNS: usize = 3;

/// A navigation command on the skills grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
}

impl GridMove {
    fn delta(self) -> isize {
        match self {
            GridMove::Left => -1,
            GridMove::Right => 1,
            GridMove::Up => -(GRID_COLUMNS as isize),
            GridMove::Down => GRID_COLUMNS as isize,
        }
    }
}

/// Keep skills in the focused category (or all) with `strength >= min_strength`
pub fn compute_visible_skills(all: &[Skill], focus: SkillFocus, min_strength: u8) -> Vec<&Skill> {
    all.iter()
        .filter(|s| focus.matches(s.category) && s.strength >= min_strength)
        .collect()
}

/// Apply a move to a selection index over `len` cells, clamping at the edges.
/// Empty grids always yield 0.
pub fn move_selection(selection: usize, len: usize, mv: GridMove) -> usize {
    if len == 0 {
        return 0;
    }
    let next = selection as isize + mv.delta();
    next.clamp(0, len as isize - 1) as usize
}

/// Clamp a selection index into `[0, len-1]`, or 0 for an empty grid
pub fn clamp_selection(selection: usize, len: usize) -> usize {
    selection.min(len.saturating_sub(1))
}

/// Enter on a cell: pin its category, or unpin if it is already pinned
pub fn toggle_focus(current: SkillFocus, selected: SkillCategory) -> SkillFocus {
    if current == SkillFocus::Category(selected) {
        SkillFocus::All
    } else {
        SkillFocus::Category(selected)
    }
}
