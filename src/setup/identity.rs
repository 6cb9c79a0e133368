//! Random permutations of the fixed catalogs.
//!
//! ```
//! use forbidden_island::core::GameRng;
//! use forbidden_island::setup::{assign_roles, assign_terrain_names};
//!
//! let mut rng = GameRng::new(42);
//!
//! let names = assign_terrain_names(&mut rng, &forbidden_island::core::TERRAIN_NAMES[..]);
//! assert_eq!(names.len(), 24);
//!
//! let roles = assign_roles(&mut rng, 3);
//! assert_eq!(roles.active.len(), 3);
//! assert_eq!(roles.turn_order.len(), 3);
//! ```

use crate::core::catalog::Treasure;
use crate::core::player::{Role, RoleAssignment, RoleList};
use crate::core::rng::GameRng;

/// The terrain catalog in a random order.
pub fn assign_terrain_names<S: AsRef<str>>(rng: &mut GameRng, catalog: &[S]) -> Vec<String> {
    let mut names: Vec<String> = catalog.iter().map(|name| name.as_ref().to_string()).collect();
    rng.shuffle(&mut names);
    names
}

/// The four treasures in a random order.
pub fn assign_treasures(rng: &mut GameRng) -> [Treasure; 4] {
    let mut treasures = Treasure::ALL;
    rng.shuffle(&mut treasures);
    treasures
}

/// Treasure names in a random order.
pub fn assign_treasure_names(rng: &mut GameRng) -> Vec<&'static str> {
    assign_treasures(rng).iter().map(|t| t.name()).collect()
}

/// Choose `count` of the six roles and an independent turn order.
///
/// Roles are drawn uniformly without replacement; the turn order is a
/// separate random permutation of the chosen roles. `count` is clamped to the
/// number of roles; callers validate the player count beforehand.
pub fn assign_roles(rng: &mut GameRng, count: usize) -> RoleAssignment {
    let active: RoleList = rng.sample(&Role::ALL, count).into_iter().collect();

    let mut turn_order = active.clone();
    rng.shuffle(&mut turn_order);

    RoleAssignment { active, turn_order }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::TERRAIN_NAMES;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_terrain_names_permuted() {
        let mut rng = GameRng::new(42);

        let names = assign_terrain_names(&mut rng, &TERRAIN_NAMES[..]);

        assert_eq!(names.len(), TERRAIN_NAMES.len());
        let unique: FxHashSet<_> = names.iter().map(String::as_str).collect();
        assert_eq!(unique.len(), names.len());
        for name in TERRAIN_NAMES {
            assert!(unique.contains(name));
        }
    }

    #[test]
    fn test_terrain_names_vary_with_seed() {
        let a = assign_terrain_names(&mut GameRng::new(1), &TERRAIN_NAMES[..]);
        let b = assign_terrain_names(&mut GameRng::new(2), &TERRAIN_NAMES[..]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_treasures_permuted() {
        let mut rng = GameRng::new(3);

        let mut treasures = assign_treasures(&mut rng).to_vec();
        treasures.sort();

        assert_eq!(treasures, Treasure::ALL.to_vec());
        assert_eq!(assign_treasure_names(&mut rng).len(), 4);
    }

    #[test]
    fn test_roles_distinct() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            for count in 2..=4 {
                let assignment = assign_roles(&mut rng, count);
                assert_eq!(assignment.len(), count);

                let active: FxHashSet<_> = assignment.active.iter().collect();
                assert_eq!(active.len(), count);

                let order: FxHashSet<_> = assignment.turn_order.iter().collect();
                assert_eq!(order, active);
            }
        }
    }

    #[test]
    fn test_roles_cover_catalog() {
        let mut rng = GameRng::new(5);
        let mut seen = FxHashSet::default();

        for _ in 0..200 {
            seen.extend(assign_roles(&mut rng, 2).active);
        }

        assert_eq!(seen.len(), Role::ALL.len());
    }

    #[test]
    fn test_roles_clamped() {
        let mut rng = GameRng::new(5);
        assert_eq!(assign_roles(&mut rng, 10).len(), Role::ALL.len());
    }
}
