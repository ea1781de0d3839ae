use itertools::Itertools;

use crate::{
    army::Army,
    unit::{BattleOutcome, Unit},
};

pub const DEFAULT_MIN_WINS: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    min_wins: usize,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    pub fn new() -> Self {
        Self {
            min_wins: DEFAULT_MIN_WINS,
        }
    }

    pub fn with_min_wins(min_wins: usize) -> Self {
        Self { min_wins }
    }

    pub fn min_wins(&self) -> usize {
        self.min_wins
    }

    /// Outcomes of own units against enemy units at the same position. Units past the
    /// shorter army's length don't fight.
    pub fn battle_outcomes(own: &Army, enemy: &Army) -> Vec<BattleOutcome> {
        Self::outcomes_of(own.units().iter(), enemy).collect()
    }

    pub fn wins_of(own: &Army, enemy: &Army) -> usize {
        Self::count_wins(own.units().iter(), enemy)
    }

    /// Tries every ordering of own units, in lexicographic order of their original positions,
    /// and returns the first one that wins at least `min_wins` battles.
    pub fn find_winning_arrangement(&self, own: &Army, enemy: &Army) -> Option<Army> {
        let mut examined_n = 0usize;
        let found = own
            .units()
            .iter()
            .permutations(own.len())
            .inspect(|_| examined_n += 1)
            .find(|perm| Self::count_wins(perm.iter().copied(), enemy) >= self.min_wins);

        match found {
            Some(perm) => {
                tracing::info!(
                    "Found winning arrangement after examining {} arrangement(s).",
                    examined_n
                );
                Some(perm.into_iter().cloned().collect())
            }
            None => {
                tracing::info!(
                    "No arrangement of {} platoon(s) reaches {} win(s), examined {}.",
                    own.len(),
                    self.min_wins,
                    examined_n
                );
                None
            }
        }
    }

    fn outcomes_of<'a, I>(
        own_units: I,
        enemy: &'a Army,
    ) -> impl Iterator<Item = BattleOutcome> + 'a
    where
        I: Iterator<Item = &'a Unit> + 'a,
    {
        own_units
            .zip(enemy.units())
            .map(|(own, enemy)| own.battle_outcome(enemy))
    }

    fn count_wins<'a, I>(own_units: I, enemy: &'a Army) -> usize
    where
        I: Iterator<Item = &'a Unit> + Clone + 'a,
    {
        let wins = Self::outcomes_of(own_units.clone(), enemy)
            .filter(|o| *o == BattleOutcome::Win)
            .count();
        tracing::trace!(
            "Arrangement({}) wins {} battle(s).",
            own_units.map(|u| u.to_string()).collect::<Vec<_>>().join(";"),
            wins
        );
        wins
    }
}
