/// Tunable weights for heuristic play scoring.
///
/// Positive values make a card more attractive. Totals are squashed into a
/// quality in `[-1, 1]` by `HeuristicPolicy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayWeights {
    // === Capturing ===
    /// Applied when the card is certain to take the trick (default: -400)
    pub take_trick_penalty: i32,

    /// Per point on the table when the card takes the trick (default: -900)
    pub take_points_mult: i32,

    /// Per rank when the card currently wins but others still play (default: -60)
    pub provisional_win_rank_mult: i32,

    // === Ducking and following ===
    /// Flat bonus for playing under the current winner (default: 600)
    pub duck_bonus: i32,

    /// Per rank when ducking; favours shedding the highest safe card (default: 25)
    pub duck_rank_mult: i32,

    // === Sloughing ===
    /// Per point carried by a discarded card (default: 450)
    pub slough_points_mult: i32,

    /// Per rank of a discarded card (default: 30)
    pub slough_rank_mult: i32,

    /// Extra for getting rid of the queen of spades (default: 2500)
    pub slough_queen_bonus: i32,

    // === Leading ===
    /// Per rank when leading; negative keeps leads low (default: -40)
    pub lead_rank_mult: i32,

    /// Leading a suit in which an opponent has shown a void (default: -350)
    pub lead_into_void_penalty: i32,

    /// Leading the queen of spades (default: -3000)
    pub lead_queen_penalty: i32,

    /// Leading a spade above the queen while still holding the queen (default: -800)
    pub lead_high_spade_penalty: i32,

    // === Shape ===
    /// Emptying a suit, opening future discards (default: 150)
    pub void_creation_bonus: i32,
}

impl Default for PlayWeights {
    fn default() -> Self {
        Self {
            take_trick_penalty: -400,
            take_points_mult: -900,
            provisional_win_rank_mult: -60,
            duck_bonus: 600,
            duck_rank_mult: 25,
            slough_points_mult: 450,
            slough_rank_mult: 30,
            slough_queen_bonus: 2500,
            lead_rank_mult: -40,
            lead_into_void_penalty: -350,
            lead_queen_penalty: -3000,
            lead_high_spade_penalty: -800,
            void_creation_bonus: 150,
        }
    }
}
