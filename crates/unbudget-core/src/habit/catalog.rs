//! Built-in "guilty spending habit" catalogue.

use serde::{Deserialize, Serialize};

/// Per-use spend credited for habits outside the catalogue.
pub const DEFAULT_PER_USE_SPEND: f64 = 10.0;

/// Habits offered on the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HabitKind {
    DoorDash,
    ImpulseAmazon,
    Uber,
    ThriftFits,
    CryptoCoins,
}

impl HabitKind {
    pub const ALL: [HabitKind; 5] = [
        HabitKind::DoorDash,
        HabitKind::ImpulseAmazon,
        HabitKind::Uber,
        HabitKind::ThriftFits,
        HabitKind::CryptoCoins,
    ];

    /// Display name, also the key used in the habit map.
    pub fn name(&self) -> &'static str {
        match self {
            HabitKind::DoorDash => "DoorDash",
            HabitKind::ImpulseAmazon => "Impulse Amazon",
            HabitKind::Uber => "Uber",
            HabitKind::ThriftFits => "Thrift fits",
            HabitKind::CryptoCoins => "Crypto coins",
        }
    }

    /// Typical cost of one instance.
    pub fn per_use_spend(&self) -> f64 {
        match self {
            HabitKind::DoorDash => 25.0,      // food delivery order
            HabitKind::ImpulseAmazon => 15.0, // impulse buy
            HabitKind::Uber => 12.0,          // short ride
            HabitKind::ThriftFits => 30.0,    // thrift store haul
            HabitKind::CryptoCoins => 50.0,
        }
    }

    pub fn roast(&self) -> &'static str {
        match self {
            HabitKind::DoorDash => "C'mon at least drive there yourself",
            HabitKind::ImpulseAmazon => "Congrats, you own 4 milk frothers.",
            HabitKind::Uber => "No license? Walking too difficult?",
            HabitKind::ThriftFits => "You bought vintage… from Shein.",
            HabitKind::CryptoCoins => "Your 'investment' is worth $0.73.",
        }
    }

    /// Exact-name lookup. Free-text habits return `None`.
    pub fn from_name(name: &str) -> Option<HabitKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Default per-use spend for a habit name, falling back to
/// [`DEFAULT_PER_USE_SPEND`] for names outside the catalogue.
pub fn default_per_use_spend(name: &str) -> f64 {
    HabitKind::from_name(name)
        .map(|kind| kind.per_use_spend())
        .unwrap_or(DEFAULT_PER_USE_SPEND)
}
