use std::{collections::HashMap, fmt::Display};

use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnitClass {
    Militia,
    Spearmen,
    LightCavalry,
    HeavyCavalry,
    CavalryArcher,
    FootArcher,
    Other(String),
}

impl UnitClass {
    pub const KNOWN: [UnitClass; 6] = [
        UnitClass::Militia,
        UnitClass::Spearmen,
        UnitClass::LightCavalry,
        UnitClass::HeavyCavalry,
        UnitClass::CavalryArcher,
        UnitClass::FootArcher,
    ];

    pub fn name(&self) -> &str {
        match self {
            UnitClass::Militia => "Militia",
            UnitClass::Spearmen => "Spearmen",
            UnitClass::LightCavalry => "LightCavalry",
            UnitClass::HeavyCavalry => "HeavyCavalry",
            UnitClass::CavalryArcher => "CavalryArcher",
            UnitClass::FootArcher => "FootArcher",
            UnitClass::Other(s) => s,
        }
    }

    /// Classes this class defeats. Unknown classes defeat nobody.
    pub fn advantages(&self) -> &'static [UnitClass] {
        static ADVANTAGE_MAP: Lazy<HashMap<UnitClass, Vec<UnitClass>>> = Lazy::new(|| {
            use UnitClass::*;
            HashMap::from([
                (Militia, vec![Spearmen, LightCavalry]),
                (Spearmen, vec![LightCavalry, HeavyCavalry]),
                (LightCavalry, vec![FootArcher, CavalryArcher]),
                (HeavyCavalry, vec![Militia, FootArcher, LightCavalry]),
                (CavalryArcher, vec![Spearmen, HeavyCavalry]),
                (FootArcher, vec![Militia, CavalryArcher]),
            ])
        });

        ADVANTAGE_MAP
            .get(self)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}

impl From<&str> for UnitClass {
    fn from(value: &str) -> Self {
        UnitClass::KNOWN
            .into_iter()
            .find(|c| c.name() == value)
            .unwrap_or_else(|| UnitClass::Other(value.to_string()))
    }
}

impl Display for UnitClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Win,
    Draw,
    Lose,
}

impl Display for BattleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BattleOutcome::Win => write!(f, "win"),
            BattleOutcome::Draw => write!(f, "draw"),
            BattleOutcome::Lose => write!(f, "lose"),
        }
    }
}

/// A platoon: soldiers of one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    class: UnitClass,
    count: u32,
}

impl Unit {
    pub fn new(class: UnitClass, count: u32) -> Self {
        Self { class, count }
    }

    pub fn class(&self) -> &UnitClass {
        &self.class
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn has_advantage_over(&self, enemy: &Unit) -> bool {
        self.class.advantages().contains(&enemy.class)
    }

    pub fn effective_strength(&self, enemy: &Unit) -> u64 {
        let multiplier = if self.has_advantage_over(enemy) { 2 } else { 1 };
        u64::from(self.count) * multiplier
    }

    pub fn battle_outcome(&self, enemy: &Unit) -> BattleOutcome {
        let strength = self.effective_strength(enemy);
        let enemy_count = u64::from(enemy.count);
        if strength > enemy_count {
            BattleOutcome::Win
        } else if strength == enemy_count {
            BattleOutcome::Draw
        } else {
            BattleOutcome::Lose
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.class, self.count)
    }
}
