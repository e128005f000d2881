//! Random positional pairing of adjectives and animals

use super::value_objects::{Combo, ListSize};
use crate::core::error::DomainError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Shuffle both lists in place, pair them by position and keep the first `size` pairs
///
/// At most `min(animals, adjectives)` pairs exist; asking for more returns
/// them all. The lists are left in their shuffled order for later display.
pub fn generate_combos<R: Rng + ?Sized>(
    animals: &mut [String],
    adjectives: &mut [String],
    size: ListSize,
    rng: &mut R,
) -> Result<Vec<Combo>, DomainError> {
    if animals.is_empty() {
        return Err(DomainError::NoAnimals);
    }
    if adjectives.is_empty() {
        return Err(DomainError::NoAdjectives);
    }

    animals.shuffle(rng);
    adjectives.shuffle(rng);

    Ok(adjectives
        .iter()
        .zip(animals.iter())
        .take(size.get())
        .map(|(adjective, animal)| Combo::new(adjective.as_str(), animal.as_str()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn size(n: i64) -> ListSize {
        ListSize::try_from(n).unwrap()
    }

    #[test]
    fn test_pairs_come_from_both_sets() {
        let mut animals = strings(&["baboon", "badger"]);
        let mut adjectives = strings(&["brave", "busy", "bold"]);
        let mut rng = StdRng::seed_from_u64(7);

        let combos = generate_combos(&mut animals, &mut adjectives, size(2), &mut rng).unwrap();

        assert_eq!(combos.len(), 2);
        for combo in &combos {
            assert!(["baboon", "badger"].contains(&combo.animal.as_str()));
            assert!(["brave", "busy", "bold"].contains(&combo.adjective.as_str()));
        }
        assert_ne!(combos[0].animal, combos[1].animal);
        assert_ne!(combos[0].adjective, combos[1].adjective);
    }

    #[test]
    fn test_pairs_follow_shuffled_positions() {
        let mut animals = strings(&["baboon", "badger", "bat", "bear"]);
        let mut adjectives = strings(&["brave", "busy", "bold", "bright"]);
        let mut rng = StdRng::seed_from_u64(42);

        let combos = generate_combos(&mut animals, &mut adjectives, size(4), &mut rng).unwrap();

        for (i, combo) in combos.iter().enumerate() {
            assert_eq!(combo.adjective, adjectives[i]);
            assert_eq!(combo.animal, animals[i]);
        }
    }

    #[test]
    fn test_capped_at_shorter_list() {
        let mut animals = strings(&["akita", "ant", "ape", "alpaca", "avocet"]);
        let mut adjectives: Vec<String> = (0..20).map(|i| format!("adj{i}")).collect();
        let mut rng = StdRng::seed_from_u64(1);

        let combos = generate_combos(&mut animals, &mut adjectives, size(10), &mut rng).unwrap();

        assert_eq!(combos.len(), 5);
    }

    #[test]
    fn test_truncates_to_requested_size() {
        let mut animals = strings(&["cat", "cod", "crab", "crow"]);
        let mut adjectives = strings(&["calm", "cool", "cute", "cozy"]);
        let mut rng = StdRng::seed_from_u64(3);

        let combos = generate_combos(&mut animals, &mut adjectives, size(1), &mut rng).unwrap();

        assert_eq!(combos.len(), 1);
    }

    #[test]
    fn test_empty_adjectives_is_fatal() {
        let mut animals = strings(&["baboon", "badger"]);
        let mut rng = StdRng::seed_from_u64(0);

        let err = generate_combos(&mut animals, &mut [], size(1), &mut rng).unwrap_err();

        assert_eq!(err, DomainError::NoAdjectives);
        assert!(err.is_empty_result());
    }

    #[test]
    fn test_empty_animals_is_fatal() {
        let mut adjectives = strings(&["brave"]);
        let mut rng = StdRng::seed_from_u64(0);

        let err = generate_combos(&mut [], &mut adjectives, size(1), &mut rng).unwrap_err();

        assert_eq!(err, DomainError::NoAnimals);
    }

    #[test]
    fn test_shuffle_keeps_list_contents() {
        let mut animals = strings(&["deer", "dog", "dove", "duck"]);
        let mut adjectives = strings(&["daft", "dark"]);
        let mut rng = StdRng::seed_from_u64(9);

        generate_combos(&mut animals, &mut adjectives, size(2), &mut rng).unwrap();

        animals.sort();
        adjectives.sort();
        assert_eq!(animals, strings(&["deer", "dog", "dove", "duck"]));
        assert_eq!(adjectives, strings(&["daft", "dark"]));
    }
}
