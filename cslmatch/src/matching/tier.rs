//! Match tier table.
//!
//! Each tier describes which parts of an aircraft identification make up its
//! lookup key. Tiers are searched best-first; the tier number becomes the
//! match quality.
//!
//! | tier | base  | airline | livery | example key                 |
//! |------|-------|---------|--------|-----------------------------|
//! | 0    | ICAO  | yes     | yes    | `B738 SWA SHAMU`            |
//! | 1    | ICAO  | yes     | no     | `B738 SWA`                  |
//! | 2    | group | yes     | yes    | `B736 B737 B738 SWA SHAMU`  |
//! | 3    | group | yes     | no     | `B736 B737 B738 SWA`        |
//! | 4    | ICAO  | no      | yes    | `B738 SHAMU`                |
//! | 5    | ICAO  | no      | no     | `B738`                      |
//! | 6    | group | no      | yes    | `B736 B737 B738 SHAMU`      |
//! | 7    | group | no      | no     | `B736 B737 B738`            |
//!
//! Manifest lines only ever write tiers 0, 1, 2, 3, 5 and 7. Tiers 4 and 6
//! are still searched but stay empty.

use std::fmt;

/// Number of match tiers.
pub const TIER_COUNT: usize = 8;

/// Tier keyed by ICAO, airline and livery.
pub const ICAO_AIRLINE_LIVERY: usize = 0;
/// Tier keyed by ICAO and airline.
pub const ICAO_AIRLINE: usize = 1;
/// Tier keyed by group, airline and livery.
pub const GROUP_AIRLINE_LIVERY: usize = 2;
/// Tier keyed by group and airline.
pub const GROUP_AIRLINE: usize = 3;
/// Tier keyed by ICAO and livery.
pub const ICAO_LIVERY: usize = 4;
/// Tier keyed by ICAO alone.
pub const ICAO: usize = 5;
/// Tier keyed by group and livery.
pub const GROUP_LIVERY: usize = 6;
/// Tier keyed by group alone.
pub const GROUP: usize = 7;

/// First part of a tier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBase {
    Icao,
    Group,
}

/// Descriptor of one match tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    pub base: KeyBase,
    pub uses_airline: bool,
    pub uses_livery: bool,
}

/// All tiers, best first.
pub const TIERS: [Tier; TIER_COUNT] = [
    Tier::new(KeyBase::Icao, true, true),
    Tier::new(KeyBase::Icao, true, false),
    Tier::new(KeyBase::Group, true, true),
    Tier::new(KeyBase::Group, true, false),
    Tier::new(KeyBase::Icao, false, true),
    Tier::new(KeyBase::Icao, false, false),
    Tier::new(KeyBase::Group, false, true),
    Tier::new(KeyBase::Group, false, false),
];

/// Reason a tier cannot produce a key for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoGroup,
    NoAirline,
    NoLivery,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoGroup => write!(f, "no group"),
            SkipReason::NoAirline => write!(f, "no airline"),
            SkipReason::NoLivery => write!(f, "no livery"),
        }
    }
}

/// Identification parts a key is built from. Empty strings mean absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyParts<'a> {
    pub icao: &'a str,
    pub group: &'a str,
    pub airline: &'a str,
    pub livery: &'a str,
}

impl Tier {
    pub const fn new(base: KeyBase, uses_airline: bool, uses_livery: bool) -> Self {
        Self {
            base,
            uses_airline,
            uses_livery,
        }
    }

    /// Build this tier's key, joining the parts with single spaces.
    pub fn key(&self, parts: &KeyParts<'_>) -> Result<String, SkipReason> {
        let base = match self.base {
            KeyBase::Icao => parts.icao,
            KeyBase::Group => {
                if parts.group.is_empty() {
                    return Err(SkipReason::NoGroup);
                }
                parts.group
            }
        };
        let mut key = base.to_string();
        if self.uses_airline {
            if parts.airline.is_empty() {
                return Err(SkipReason::NoAirline);
            }
            key.push(' ');
            key.push_str(parts.airline);
        }
        if self.uses_livery {
            if parts.livery.is_empty() {
                return Err(SkipReason::NoLivery);
            }
            key.push(' ');
            key.push_str(parts.livery);
        }
        Ok(key)
    }
}
