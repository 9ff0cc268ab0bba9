use crate::domain::calendar::BirthdaySet;
use crate::services::birthday_sampler::BirthdaySampler;

/// A sampler that replays fixed birthday sets in order, cycling when it
/// runs out. The requested group size is ignored.
pub struct FixedSampler {
    sets: Vec<Vec<u32>>,
    next: usize,
}

impl FixedSampler {
    pub fn new(sets: Vec<Vec<u32>>) -> Self {
        Self { sets, next: 0 }
    }
}

impl BirthdaySampler for FixedSampler {
    fn draw(&mut self, _people: usize) -> BirthdaySet {
        if self.sets.is_empty() {
            return BirthdaySet::default();
        }
        let set = self.sets[self.next % self.sets.len()].clone();
        self.next += 1;
        BirthdaySet::new(set)
    }
}
