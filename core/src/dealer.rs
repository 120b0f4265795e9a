use alloc::string::String;
use alloc::vec::Vec;

use crate::*;

pub trait PhraseDealer {
    /// Picks the phrases for a new board, in row-major order. Returns at most `CELL_COUNT` phrases.
    fn deal(self, phrases: &[String]) -> Vec<String>;
}

/// Uniform random permutation of the phrase list, seeded so a deal can be reproduced.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomDealer {
    seed: u64,
}

impl RandomDealer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PhraseDealer for RandomDealer {
    fn deal(self, phrases: &[String]) -> Vec<String> {
        use rand::prelude::*;
        use rand::rngs::SmallRng;

        if phrases.len() < CELL_COUNT {
            log::warn!(
                "Only {} phrases available, board will have fewer than {} cells",
                phrases.len(),
                CELL_COUNT
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut shuffled = phrases.to_vec();
        shuffled.shuffle(&mut rng);
        shuffled.truncate(CELL_COUNT);
        log::debug!("dealt {} phrases with seed {}", shuffled.len(), self.seed);
        shuffled
    }
}

/// Keeps the input order, for tests and fixed layouts.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InOrderDealer;

impl PhraseDealer for InOrderDealer {
    fn deal(self, phrases: &[String]) -> Vec<String> {
        phrases.iter().take(CELL_COUNT).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn phrases(count: usize) -> Vec<String> {
        (0..count).map(|i| i.to_string()).collect()
    }

    #[test]
    fn same_seed_same_deal() {
        let input = phrases(30);
        assert_eq!(
            RandomDealer::new(7).deal(&input),
            RandomDealer::new(7).deal(&input)
        );
    }

    #[test]
    fn deal_takes_at_most_a_board_of_distinct_phrases() {
        let input = phrases(30);
        let mut dealt = RandomDealer::new(42).deal(&input);
        assert_eq!(dealt.len(), CELL_COUNT);
        dealt.sort();
        dealt.dedup();
        assert_eq!(dealt.len(), CELL_COUNT);
        assert!(dealt.iter().all(|phrase| input.contains(phrase)));
    }

    #[test]
    fn short_list_is_not_padded() {
        let input = phrases(5);
        let mut dealt = RandomDealer::new(1).deal(&input);
        dealt.sort();
        assert_eq!(dealt, input);
    }

    #[test]
    fn different_seeds_reorder_the_board() {
        let input = phrases(CELL_COUNT);
        let deals: Vec<_> = (0..8).map(|seed| RandomDealer::new(seed).deal(&input)).collect();
        assert!(deals.iter().any(|deal| deal != &deals[0]));
    }

    #[test]
    fn every_phrase_can_land_in_the_first_cell() {
        let input = phrases(4);
        let mut seen = [false; 4];
        for seed in 0..200 {
            let dealt = RandomDealer::new(seed).deal(&input);
            let first: usize = dealt[0].parse().unwrap();
            seen[first] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn in_order_dealer_truncates() {
        let dealt = InOrderDealer.deal(&phrases(20));
        assert_eq!(dealt, phrases(CELL_COUNT));
    }
}
