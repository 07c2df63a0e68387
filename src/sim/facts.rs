//! Bee facts shown on the round-over screen

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;

pub const BEE_FACTS: &[&str] = &[
    "Honey bees fly at 15 miles per hour.",
    "Honey bees' wings stroke 11,400 times per minute.",
    "A honey bee visits 50 to 100 flowers during one collection trip.",
    "Bees have 5 eyes.",
    "Male bees (drones) don't have stingers.",
    "Honey never spoils.",
    "A single bee colony can produce 60 to 100 pounds of honey per year.",
    "Bees communicate through dancing (the 'waggle dance').",
    "The queen bee can live for several years.",
    "Bees are responsible for pollinating about 80% of all flowering plants.",
    "A bee produces only about 1/12th of a teaspoon of honey in its lifetime.",
];

/// Supplies one display string per finished round
pub trait FactProvider {
    fn next_fact(&mut self) -> String;
}

/// Picks uniformly from a fixed list
#[derive(Debug, Clone)]
pub struct RandomFacts {
    facts: Vec<String>,
    rng: Pcg32,
}

impl RandomFacts {
    pub fn new(facts: Vec<String>, seed: u64) -> Self {
        Self {
            facts,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// The built-in bee facts
    pub fn bee_facts(seed: u64) -> Self {
        Self::new(BEE_FACTS.iter().map(|f| f.to_string()).collect(), seed)
    }
}

impl FactProvider for RandomFacts {
    fn next_fact(&mut self) -> String {
        self.facts.choose(&mut self.rng).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_comes_from_list() {
        let mut facts = RandomFacts::bee_facts(1);
        for _ in 0..20 {
            let fact = facts.next_fact();
            assert!(BEE_FACTS.contains(&fact.as_str()));
        }
    }

    #[test]
    fn test_empty_list_gives_empty_fact() {
        let mut facts = RandomFacts::new(Vec::new(), 1);
        assert_eq!(facts.next_fact(), "");
    }

    #[test]
    fn test_seeded_sequence_repeats() {
        let mut a = RandomFacts::bee_facts(77);
        let mut b = RandomFacts::bee_facts(77);
        for _ in 0..5 {
            assert_eq!(a.next_fact(), b.next_fact());
        }
    }
}
