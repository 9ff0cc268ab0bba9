use std::collections::HashSet;

use crate::services::simulation_error::SimulationError;

pub const DEFAULT_CALENDAR_DAYS: u32 = 365;

/// A calendar of `days` equally likely labels, numbered `1..=days`.
///
/// The calendar does not wrap around: the last day and day 1 are not adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    pub days: u32,
}

impl Default for Calendar {
    fn default() -> Self {
        Self {
            days: DEFAULT_CALENDAR_DAYS,
        }
    }
}

impl Calendar {
    pub fn new(days: u32) -> Result<Self, SimulationError> {
        if days == 0 {
            return Err(SimulationError::InvalidCalendar);
        }
        Ok(Self { days })
    }
}

/// The birthdays drawn in one trial, in draw order. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BirthdaySet {
    days: Vec<u32>,
}

impl BirthdaySet {
    pub fn new(days: Vec<u32>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[u32] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// True when at least two people share a day. Stops at the first repeat.
    pub fn has_shared_day(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.days.len());
        for day in &self.days {
            if !seen.insert(*day) {
                return true;
            }
        }
        false
    }

    /// Distinct days in ascending order.
    pub fn distinct_sorted(&self) -> Vec<u32> {
        let mut distinct = self.days.clone();
        distinct.sort_unstable();
        distinct.dedup();
        distinct
    }

    /// Differences between neighbouring distinct days, prefixed with a `0`
    /// for the first day. An empty set has no gaps.
    pub fn gaps(&self) -> Vec<u32> {
        let distinct = self.distinct_sorted();
        let mut gaps = Vec::with_capacity(distinct.len());
        if distinct.is_empty() {
            return gaps;
        }
        gaps.push(0);
        gaps.extend(distinct.windows(2).map(|pair| pair[1] - pair[0]));
        gaps
    }

    /// True when `run_length` consecutive gaps are all exactly one day.
    ///
    /// The leading sentinel gap is `0`, so a single isolated birthday never
    /// counts, and `run_length == 1` needs two distinct days one day apart.
    pub fn has_consecutive_run(&self, run_length: usize) -> bool {
        if run_length == 0 {
            return false;
        }
        let mut run = 0usize;
        for gap in self.gaps() {
            if gap == 1 {
                run += 1;
                if run >= run_length {
                    return true;
                }
            } else {
                run = 0;
            }
        }
        false
    }
}

impl From<Vec<u32>> for BirthdaySet {
    fn from(days: Vec<u32>) -> Self {
        Self::new(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_defaults_to_365_days() {
        assert_eq!(Calendar::default().days, 365);
    }

    #[test]
    fn calendar_rejects_zero_days() {
        assert!(matches!(
            Calendar::new(0),
            Err(SimulationError::InvalidCalendar)
        ));
        assert_eq!(Calendar::new(12).unwrap().days, 12);
    }

    #[test]
    fn has_shared_day_detects_repeats() {
        assert!(BirthdaySet::from(vec![4, 9, 4]).has_shared_day());
        assert!(!BirthdaySet::from(vec![4, 9, 5]).has_shared_day());
        assert!(!BirthdaySet::default().has_shared_day());
        assert!(!BirthdaySet::from(vec![200]).has_shared_day());
    }

    #[test]
    fn gaps_start_with_sentinel_and_ignore_duplicates() {
        let set = BirthdaySet::from(vec![10, 3, 4, 4, 12]);
        assert_eq!(set.distinct_sorted(), vec![3, 4, 10, 12]);
        assert_eq!(set.gaps(), vec![0, 1, 6, 2]);
        assert!(BirthdaySet::default().gaps().is_empty());
    }

    #[test]
    fn run_of_one_needs_two_adjacent_days() {
        assert!(BirthdaySet::from(vec![100, 101]).has_consecutive_run(1));
        assert!(!BirthdaySet::from(vec![100, 102, 200, 300]).has_consecutive_run(1));
        assert!(!BirthdaySet::from(vec![100]).has_consecutive_run(1));
        assert!(!BirthdaySet::from(vec![100, 100]).has_consecutive_run(1));
    }

    #[test]
    fn run_resets_on_larger_gap() {
        // gaps: 0,1,1,3,1,1,1
        let set = BirthdaySet::from(vec![1, 2, 3, 6, 7, 8, 9]);
        assert!(set.has_consecutive_run(3));
        assert!(!set.has_consecutive_run(4));
    }

    #[test]
    fn run_longer_than_available_gaps_is_false() {
        let set = BirthdaySet::from(vec![5, 6]);
        assert!(!set.has_consecutive_run(5));
        assert!(!BirthdaySet::default().has_consecutive_run(1));
    }

    #[test]
    fn last_and_first_day_are_not_adjacent() {
        let set = BirthdaySet::from(vec![365, 1]);
        assert!(!set.has_consecutive_run(1));
    }
}
