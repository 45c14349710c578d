//! Default bag used to seed an empty installation

use rand::Rng;
use std::ops::RangeInclusive;
use yardbook_domain::club::FULL_SHOT_TYPE;
use yardbook_domain::{nickname, Club};

/// Standard clubs with their "Full" carry, in bag order
pub const DEFAULT_CLUBS: [(&str, u32); 13] = [
    ("Driver", 250),
    ("3 Wood", 230),
    ("5 Wood", 215),
    ("4 Hybrid", 200),
    ("5 Iron", 185),
    ("6 Iron", 175),
    ("7 Iron", 165),
    ("8 Iron", 155),
    ("9 Iron", 145),
    ("Pitching Wedge", 135),
    ("Gap Wedge", 120),
    ("Sand Wedge", 100),
    ("Lob Wedge", 80),
];

/// A derived shot type and the percentage range of the full carry it covers
#[derive(Debug, Clone)]
pub struct SeedVariant {
    /// Shot-type name
    pub name: &'static str,

    /// Inclusive percentage range of the full carry
    pub percent: RangeInclusive<u32>,
}

/// Shot types seeded alongside "Full", in display order
pub const SEED_VARIANTS: [SeedVariant; 3] = [
    SeedVariant {
        name: "3/4",
        percent: 90..=95,
    },
    SeedVariant {
        name: "Hard",
        percent: 102..=108,
    },
    SeedVariant {
        name: "1/2",
        percent: 55..=75,
    },
];

/// Build the default bag, drawing variant percentages from `rng`
pub(crate) fn default_bag<R: Rng>(rng: &mut R) -> Vec<Club> {
    DEFAULT_CLUBS
        .iter()
        .enumerate()
        .map(|(index, (name, full))| {
            let mut club = Club::new(*name, nickname::generate(name), index as u32);
            club.push_shot_type(FULL_SHOT_TYPE, *full);
            for variant in &SEED_VARIANTS {
                let percent = rng.gen_range(variant.percent.clone());
                let carry = (full * percent / 100).max(1);
                club.push_shot_type(variant.name, carry);
            }
            club
        })
        .collect()
}
