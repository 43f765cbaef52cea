//! Property codes attached to features.
//!
//! Codes are plain `u16`s. Related values are numbered contiguously so that
//! categories can be tested with ranges (place sizes run from city down to
//! hamlet, open natural land from fell to wetland, rock from bare rock to
//! scree).

use std::ops::RangeInclusive;

pub const NAME: u16 = 0;

pub const BADMINISTRATIVE: u16 = 10;
pub const BNATIONAL_PARK: u16 = 11;
pub const BPROTECTED_AREA: u16 = 12;

pub const A1: u16 = 21;
pub const A2: u16 = 22;
pub const A3: u16 = 23;
pub const A4: u16 = 24;
pub const A5: u16 = 25;
pub const A6: u16 = 26;
pub const A7: u16 = 27;
pub const A8: u16 = 28;

pub const PCITY: u16 = 40;
pub const PTOWN: u16 = 41;
pub const PVILLAGE: u16 = 42;
pub const PHAMLET: u16 = 43;
pub const PSUBURB: u16 = 44;
pub const PNEIGHBOURHOOD: u16 = 45;

pub const NFELL: u16 = 60;
pub const NGRASSLAND: u16 = 61;
pub const NHEATH: u16 = 62;
pub const NMOOR: u16 = 63;
pub const NSCRUB: u16 = 64;
pub const NWETLAND: u16 = 65;
pub const NWOOD: u16 = 66;
pub const NTREE_ROW: u16 = 67;
pub const NBARE_ROCK: u16 = 68;
pub const NROCK: u16 = 69;
pub const NSCREE: u16 = 70;
pub const NBEACH: u16 = 71;
pub const NSAND: u16 = 72;
pub const NWATER: u16 = 73;

/// Numeric codes the classifier compares against.
///
/// [`CodeTable::default`] carries the constants of this module, which is
/// also the numbering [`code_for_tag`] and the GeoJSON loader emit. A feature
/// source with its own numbering builds its own table.
#[derive(Debug, Clone)]
pub struct CodeTable {
    pub admin_boundary: u16,
    pub admin_level: u16,
    /// City through hamlet, largest first
    pub places: RangeInclusive<u16>,
    /// Fell through wetland
    pub open_land: RangeInclusive<u16>,
    pub wood: u16,
    pub tree_row: u16,
    /// Bare rock through scree
    pub rock: RangeInclusive<u16>,
    pub beach: u16,
    pub sand: u16,
    pub water: u16,
}

impl Default for CodeTable {
    fn default() -> Self {
        Self {
            admin_boundary: BADMINISTRATIVE,
            admin_level: A2,
            places: PCITY..=PHAMLET,
            open_land: NFELL..=NWETLAND,
            wood: NWOOD,
            tree_row: NTREE_ROW,
            rock: NBARE_ROCK..=NSCREE,
            beach: NBEACH,
            sand: NSAND,
            water: NWATER,
        }
    }
}

impl CodeTable {
    #[inline(always)]
    pub fn is_place(&self, code: u16) -> bool {
        self.places.contains(&code)
    }

    #[inline(always)]
    pub fn is_open_land(&self, code: u16) -> bool {
        self.open_land.contains(&code)
    }

    #[inline(always)]
    pub fn is_forest(&self, code: u16) -> bool {
        code == self.wood || code == self.tree_row
    }

    #[inline(always)]
    pub fn is_rock(&self, code: u16) -> bool {
        self.rock.contains(&code)
    }

    #[inline(always)]
    pub fn is_sand(&self, code: u16) -> bool {
        code == self.beach || code == self.sand
    }

    #[inline(always)]
    pub fn is_water(&self, code: u16) -> bool {
        code == self.water
    }
}

/// OSM-style `key=value` tags and the code each maps to
const TAGS: &[(&str, &str, u16)] = &[
    ("boundary", "administrative", BADMINISTRATIVE),
    ("boundary", "national_park", BNATIONAL_PARK),
    ("boundary", "protected_area", BPROTECTED_AREA),
    ("admin_level", "1", A1),
    ("admin_level", "2", A2),
    ("admin_level", "3", A3),
    ("admin_level", "4", A4),
    ("admin_level", "5", A5),
    ("admin_level", "6", A6),
    ("admin_level", "7", A7),
    ("admin_level", "8", A8),
    ("place", "city", PCITY),
    ("place", "town", PTOWN),
    ("place", "village", PVILLAGE),
    ("place", "hamlet", PHAMLET),
    ("place", "suburb", PSUBURB),
    ("place", "neighbourhood", PNEIGHBOURHOOD),
    ("natural", "fell", NFELL),
    ("natural", "grassland", NGRASSLAND),
    ("natural", "heath", NHEATH),
    ("natural", "moor", NMOOR),
    ("natural", "scrub", NSCRUB),
    ("natural", "wetland", NWETLAND),
    ("natural", "wood", NWOOD),
    ("natural", "tree_row", NTREE_ROW),
    ("natural", "bare_rock", NBARE_ROCK),
    ("natural", "rock", NROCK),
    ("natural", "scree", NSCREE),
    ("natural", "beach", NBEACH),
    ("natural", "sand", NSAND),
    ("natural", "water", NWATER),
];

/// Look up the code for a `key=value` tag
pub fn code_for_tag(key: &str, value: &str) -> Option<u16> {
    TAGS.iter()
        .find(|(k, v, _)| *k == key && *v == value)
        .map(|&(_, _, code)| code)
}
