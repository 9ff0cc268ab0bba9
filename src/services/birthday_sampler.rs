use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::domain::calendar::{BirthdaySet, Calendar};

pub trait BirthdaySampler {
    fn draw(&mut self, people: usize) -> BirthdaySet;
}

/// Draws each birthday independently and uniformly from `1..=calendar.days`.
pub struct UniformBirthdaySampler<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    days: Uniform<u32>,
}

impl<'a, R: Rng + ?Sized> UniformBirthdaySampler<'a, R> {
    pub fn new(calendar: Calendar, rng: &'a mut R) -> Self {
        // Calendar::new guarantees at least one day; max(1) keeps a
        // hand-built `Calendar { days: 0 }` from panicking in Uniform.
        let last_day = calendar.days.max(1);
        Self {
            rng,
            days: Uniform::new_inclusive(1, last_day),
        }
    }
}

impl<R: Rng + ?Sized> BirthdaySampler for UniformBirthdaySampler<'_, R> {
    fn draw(&mut self, people: usize) -> BirthdaySet {
        let mut days = Vec::with_capacity(people);
        for _ in 0..people {
            days.push(self.days.sample(&mut *self.rng));
        }
        BirthdaySet::new(days)
    }
}

pub fn sample_birthdays<R: Rng + ?Sized>(
    people: usize,
    calendar: Calendar,
    rng: &mut R,
) -> BirthdaySet {
    UniformBirthdaySampler::new(calendar, rng).draw(people)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn draws_requested_number_of_days_within_calendar() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = sample_birthdays(500, Calendar::default(), &mut rng);
        assert_eq!(set.len(), 500);
        assert!(set.days().iter().all(|day| (1..=365).contains(day)));
    }

    #[test]
    fn zero_people_yields_empty_set() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample_birthdays(0, Calendar::default(), &mut rng).is_empty());
    }

    #[test]
    fn single_day_calendar_always_returns_day_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let set = sample_birthdays(20, Calendar::new(1).unwrap(), &mut rng);
        assert!(set.days().iter().all(|day| *day == 1));
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut first = StdRng::seed_from_u64(2024);
        let mut second = StdRng::seed_from_u64(2024);
        let a = sample_birthdays(50, Calendar::default(), &mut first);
        let b = sample_birthdays(50, Calendar::default(), &mut second);
        assert_eq!(a, b);
    }

    #[test]
    fn covers_both_ends_of_a_small_calendar() {
        let mut rng = StdRng::seed_from_u64(3);
        let set = sample_birthdays(1000, Calendar::new(4).unwrap(), &mut rng);
        for day in 1..=4 {
            assert!(set.days().contains(&day), "day {day} never drawn");
        }
    }
}
