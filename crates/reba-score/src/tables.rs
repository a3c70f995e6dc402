//! REBA lookup tables

use serde::{Deserialize, Serialize};

/// Table identity, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Table {
    A,
    B,
    C,
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Table::A => f.write_str("A"),
            Table::B => f.write_str("B"),
            Table::C => f.write_str("C"),
        }
    }
}

pub const TABLE_A_LEGS: usize = 2;
pub const TABLE_A_TRUNK: usize = 5;
pub const TABLE_A_NECK: usize = 6;

pub const TABLE_B_WRIST: usize = 3;
pub const TABLE_B_ARM: usize = 6;
pub const TABLE_B_FOREARM: usize = 2;

pub const TABLE_C_SIZE: usize = 12;

/// Table A, indexed `[legs][trunk][neck]`.
/// Neck columns 4-6 continue each row by +1.
pub const TABLE_A: [[[u8; TABLE_A_NECK]; TABLE_A_TRUNK]; TABLE_A_LEGS] = [
    [
        [1, 1, 3, 4, 5, 6],
        [2, 3, 4, 5, 6, 7],
        [2, 4, 5, 6, 7, 8],
        [3, 5, 6, 7, 8, 9],
        [4, 6, 7, 8, 9, 10],
    ],
    [
        [2, 2, 3, 4, 5, 6],
        [3, 4, 5, 6, 7, 8],
        [4, 5, 6, 7, 8, 9],
        [5, 6, 7, 8, 9, 10],
        [6, 7, 8, 9, 10, 11],
    ],
];

/// Table B, indexed `[wrist][arm][forearm]`
pub const TABLE_B: [[[u8; TABLE_B_FOREARM]; TABLE_B_ARM]; TABLE_B_WRIST] = [
    [[1, 1], [1, 2], [3, 4], [4, 5], [6, 7], [7, 8]],
    [[2, 2], [2, 3], [4, 5], [5, 6], [7, 8], [8, 9]],
    [[2, 3], [3, 4], [5, 5], [5, 7], [8, 8], [8, 9]],
];

/// Table C, indexed `[score_a - 1][score_b - 1]`
pub const TABLE_C: [[u8; TABLE_C_SIZE]; TABLE_C_SIZE] = [
    [1, 1, 1, 2, 3, 3, 4, 5, 6, 7, 7, 7],
    [1, 2, 2, 3, 4, 4, 5, 6, 6, 7, 7, 8],
    [2, 3, 3, 3, 4, 5, 6, 7, 7, 8, 8, 8],
    [3, 4, 4, 4, 5, 6, 7, 8, 8, 9, 9, 9],
    [4, 4, 4, 5, 6, 7, 8, 8, 9, 9, 9, 9],
    [6, 6, 6, 7, 8, 8, 9, 9, 10, 10, 10, 10],
    [7, 7, 7, 8, 9, 9, 9, 10, 10, 11, 11, 11],
    [8, 8, 8, 9, 10, 10, 10, 10, 10, 11, 11, 11],
    [9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12, 12],
    [10, 10, 10, 11, 11, 11, 11, 12, 12, 12, 12, 12],
    [11, 11, 11, 11, 12, 12, 12, 12, 12, 12, 12, 12],
    [12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12],
];

/// Map a one-based score to a zero-based index of a dimension of `len`.
///
/// This is the only place table indices are produced.
#[inline]
pub fn clamp_index(score: i32, len: usize) -> usize {
    let max = len.saturating_sub(1) as i32;
    (score.saturating_sub(1)).clamp(0, max) as usize
}

/// Table A lookup on adjusted scores
pub fn table_a(legs: i32, trunk: i32, neck: i32) -> Option<u8> {
    TABLE_A
        .get(clamp_index(legs, TABLE_A_LEGS))?
        .get(clamp_index(trunk, TABLE_A_TRUNK))?
        .get(clamp_index(neck, TABLE_A_NECK))
        .copied()
}

/// Table B lookup on adjusted scores
pub fn table_b(wrist: i32, arm: i32, forearm: i32) -> Option<u8> {
    TABLE_B
        .get(clamp_index(wrist, TABLE_B_WRIST))?
        .get(clamp_index(arm, TABLE_B_ARM))?
        .get(clamp_index(forearm, TABLE_B_FOREARM))
        .copied()
}

/// Table C lookup on posture scores A and B
pub fn table_c(score_a: i32, score_b: i32) -> Option<u8> {
    TABLE_C
        .get(clamp_index(score_a, TABLE_C_SIZE))?
        .get(clamp_index(score_b, TABLE_C_SIZE))
        .copied()
}
