//! Main lifts and per-lift value records.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ProgramError;

/// One of the four main barbell lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lift {
    BenchPress,
    Squat,
    Deadlift,
    OverheadPress,
}

impl Lift {
    /// All lifts in training-day order.
    pub const ALL: [Lift; 4] = [
        Lift::OverheadPress,
        Lift::Deadlift,
        Lift::BenchPress,
        Lift::Squat,
    ];

    /// Storage key used in backups and the settings store.
    pub fn key(&self) -> &'static str {
        match self {
            Lift::BenchPress => "bench_press",
            Lift::Squat => "squat",
            Lift::Deadlift => "deadlift",
            Lift::OverheadPress => "overhead_press",
        }
    }

    /// Whether the lift is an upper-body press.
    pub fn is_upper_body(&self) -> bool {
        matches!(self, Lift::BenchPress | Lift::OverheadPress)
    }

    /// Default per-cycle progression: 2.5 for presses, 5 for squat and deadlift.
    pub fn default_progression(&self) -> f64 {
        if self.is_upper_body() {
            2.5
        } else {
            5.0
        }
    }
}

impl std::fmt::Display for Lift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lift::BenchPress => write!(f, "Bench Press"),
            Lift::Squat => write!(f, "Squat"),
            Lift::Deadlift => write!(f, "Deadlift"),
            Lift::OverheadPress => write!(f, "Overhead Press"),
        }
    }
}

impl FromStr for Lift {
    type Err = ProgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "bench_press" | "bench" | "bp" => Ok(Lift::BenchPress),
            "squat" | "sq" | "back_squat" => Ok(Lift::Squat),
            "deadlift" | "dl" => Ok(Lift::Deadlift),
            "overhead_press" | "ohp" | "press" | "military_press" => Ok(Lift::OverheadPress),
            _ => Err(ProgramError::InvalidInput(format!("unknown lift '{}'", s))),
        }
    }
}

/// A value stored for each of the four lifts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LiftMap<T> {
    pub bench_press: T,
    pub squat: T,
    pub deadlift: T,
    pub overhead_press: T,
}

impl<T> LiftMap<T> {
    /// Build a map by evaluating `f` for each lift.
    pub fn from_fn(mut f: impl FnMut(Lift) -> T) -> Self {
        Self {
            bench_press: f(Lift::BenchPress),
            squat: f(Lift::Squat),
            deadlift: f(Lift::Deadlift),
            overhead_press: f(Lift::OverheadPress),
        }
    }

    pub fn get(&self, lift: Lift) -> &T {
        match lift {
            Lift::BenchPress => &self.bench_press,
            Lift::Squat => &self.squat,
            Lift::Deadlift => &self.deadlift,
            Lift::OverheadPress => &self.overhead_press,
        }
    }

    pub fn get_mut(&mut self, lift: Lift) -> &mut T {
        match lift {
            Lift::BenchPress => &mut self.bench_press,
            Lift::Squat => &mut self.squat,
            Lift::Deadlift => &mut self.deadlift,
            Lift::OverheadPress => &mut self.overhead_press,
        }
    }

    pub fn set(&mut self, lift: Lift, value: T) {
        *self.get_mut(lift) = value;
    }

    /// Iterate lifts and values in training-day order.
    pub fn iter(&self) -> impl Iterator<Item = (Lift, &T)> {
        Lift::ALL.into_iter().map(move |lift| (lift, self.get(lift)))
    }

    /// Transform every value, keeping the lift association.
    pub fn map<U>(&self, mut f: impl FnMut(Lift, &T) -> U) -> LiftMap<U> {
        LiftMap::from_fn(|lift| f(lift, self.get(lift)))
    }
}

impl LiftMap<f64> {
    /// Default per-cycle progression increments.
    pub fn default_progression() -> Self {
        Self::from_fn(|lift| lift.default_progression())
    }
}
