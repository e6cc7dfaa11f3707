//! Core stat identifiers shared by every engine component

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! stat_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

stat_id!(
    /// Primary attribute (Strength, Agility, ...). Every zone offers all of them.
    PrimaryAttr
);

stat_id!(
    /// Secondary stat rolled from a zone's secondary pool
    SecondaryStat
);

stat_id!(
    /// Skill stat rolled from a zone's skill pool
    SkillStat
);

/// The three slots of an essence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatSlot {
    Primary,
    Secondary,
    Skill,
}

impl StatSlot {
    /// Get all slots in essence order
    pub fn all() -> &'static [StatSlot] {
        &[StatSlot::Primary, StatSlot::Secondary, StatSlot::Skill]
    }
}

impl fmt::Display for StatSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatSlot::Primary => write!(f, "Primary"),
            StatSlot::Secondary => write!(f, "Secondary"),
            StatSlot::Skill => write!(f, "Skill"),
        }
    }
}

/// Which slot a pre-engrave locks. The primary slot can never be locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedStatType {
    Secondary,
    Skill,
}

impl From<FixedStatType> for StatSlot {
    fn from(t: FixedStatType) -> Self {
        match t {
            FixedStatType::Secondary => StatSlot::Secondary,
            FixedStatType::Skill => StatSlot::Skill,
        }
    }
}

/// Weapon category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    Sword,
    Greatsword,
    Polearm,
    Handcannon,
    ArtsUnit,
}
