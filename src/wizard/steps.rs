use serde::Serialize;

use crate::error::NavError;

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 5;

/// Static description of one wizard page
#[derive(Debug, Clone, Copy)]
pub struct StepInfo {
    pub id: u8,
    pub title: &'static str,
}

pub const STEPS: [StepInfo; 5] = [
    StepInfo { id: 1, title: "Basic Details" },
    StepInfo { id: 2, title: "Location Details" },
    StepInfo { id: 3, title: "Property Profile" },
    StepInfo { id: 4, title: "Photos, Videos & Voice-over" },
    StepInfo { id: 5, title: "Amenities section" },
];

/// What a step indicator needs to draw one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub id: u8,
    pub title: &'static str,
    pub subtitle: String,
    pub current: bool,
    pub completed: bool,
    /// Whether a click on this entry would be honoured by `jump`
    pub clickable: bool,
}

/// Current step plus the set of steps marked complete.
///
/// Completed marks are never cleared when an earlier step is edited again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepNavigator {
    current: u8,
    completed: Vec<u8>,
}

impl Default for StepNavigator {
    fn default() -> Self {
        Self {
            current: FIRST_STEP,
            completed: Vec::new(),
        }
    }
}

impl StepNavigator {
    pub fn current(&self) -> u8 {
        self.current
    }

    /// Completed steps in the order they were completed
    pub fn completed(&self) -> &[u8] {
        &self.completed
    }

    pub fn is_completed(&self, step: u8) -> bool {
        self.completed.contains(&step)
    }

    pub fn is_last(&self) -> bool {
        self.current == LAST_STEP
    }

    /// Mark the current step complete and move forward, if `current_valid`.
    /// Stays on the last step once there.
    pub fn advance(&mut self, current_valid: bool) -> Result<u8, NavError> {
        if !current_valid {
            return Err(NavError::StepIncomplete(self.current));
        }
        if !self.is_completed(self.current) {
            self.completed.push(self.current);
        }
        self.current = (self.current + 1).min(LAST_STEP);
        Ok(self.current)
    }

    pub fn can_jump(&self, step: u8) -> bool {
        (FIRST_STEP..=LAST_STEP).contains(&step) && (step <= self.current || self.is_completed(step))
    }

    pub fn jump(&mut self, step: u8) -> Result<u8, NavError> {
        if !(FIRST_STEP..=LAST_STEP).contains(&step) {
            return Err(NavError::UnknownStep(step));
        }
        if !self.can_jump(step) {
            return Err(NavError::StepLocked(step));
        }
        self.current = step;
        Ok(step)
    }

    pub fn views(&self) -> Vec<StepView> {
        STEPS
            .iter()
            .map(|step| StepView {
                id: step.id,
                title: step.title,
                subtitle: format!("Step {}", step.id),
                current: step.id == self.current,
                completed: self.is_completed(step.id),
                clickable: self.can_jump(step.id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = StepNavigator::default();
        assert_eq!(nav.current(), 1);
        assert!(nav.completed().is_empty());
    }

    #[test]
    fn test_advance_requires_valid_step() {
        let mut nav = StepNavigator::default();
        assert_eq!(nav.advance(false), Err(NavError::StepIncomplete(1)));
        assert_eq!(nav.current(), 1);

        assert_eq!(nav.advance(true), Ok(2));
        assert_eq!(nav.completed(), &[1]);
    }

    #[test]
    fn test_advance_saturates_on_last_step() {
        let mut nav = StepNavigator::default();
        for _ in 0..7 {
            nav.advance(true).unwrap();
        }
        assert_eq!(nav.current(), LAST_STEP);
        assert_eq!(nav.completed(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_jump_back_and_forward_to_completed() {
        let mut nav = StepNavigator::default();
        nav.advance(true).unwrap();
        nav.advance(true).unwrap();
        assert_eq!(nav.current(), 3);

        assert_eq!(nav.jump(1), Ok(1));
        // step 2 was completed, so it stays reachable from step 1
        assert_eq!(nav.jump(2), Ok(2));
        // step 3 was reached but never completed
        assert_eq!(nav.jump(3), Err(NavError::StepLocked(3)));
        assert_eq!(nav.jump(9), Err(NavError::UnknownStep(9)));
    }

    #[test]
    fn test_completed_marks_survive_revisits() {
        let mut nav = StepNavigator::default();
        nav.advance(true).unwrap();
        nav.advance(true).unwrap();
        nav.jump(1).unwrap();
        assert!(nav.is_completed(2));
        assert!(nav.can_jump(2));
    }

    #[test]
    fn test_views_reflect_state() {
        let mut nav = StepNavigator::default();
        nav.advance(true).unwrap();
        let views = nav.views();
        assert_eq!(views.len(), 5);
        assert!(views[0].completed && views[0].clickable && !views[0].current);
        assert!(views[1].current && views[1].clickable);
        assert!(!views[2].clickable);
        assert_eq!(views[3].title, "Photos, Videos & Voice-over");
        assert_eq!(views[4].subtitle, "Step 5");
    }
}
