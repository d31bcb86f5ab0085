use crate::error::EngineError;
use crate::game::player::Player;
use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::seat::Seat;
use crate::model::trick::Trick;
use crate::rules;
use serde::{Deserialize, Serialize};
use std::array;

/// Reward handed to every seat that did not take points on a trick.
pub const LEADERSHIP_BONUS: f64 = 0.5;
pub const SIMPLIFIED_LEADERSHIP_BONUS: f64 = 0.25;

/// Authoritative snapshot of a game in progress.
///
/// Transitions take `&self` and return a fresh value, so a snapshot handed
/// to a policy or stored in a history never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    players: [Player; 4],
    trick: Trick,
    hearts_broken: bool,
    simplified: bool,
    trick_leader: Seat,
}

/// What happened when a full trick was taken off the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrickResolution {
    pub winner: Seat,
    pub winning_card: Card,
    pub points: u32,
    pub rewards: [f64; 4],
}

impl GameState {
    pub fn new(hands: [Hand; 4], trick_leader: Seat, simplified: bool) -> Self {
        let mut hands = hands.into_iter();
        let players = array::from_fn(|index| {
            let seat = Seat::LOOP[index];
            Player::new(seat, hands.next().unwrap_or_default())
        });
        Self {
            players,
            trick: Trick::new(),
            hearts_broken: false,
            simplified,
            trick_leader,
        }
    }

    /// Places a partially played trick on the table, e.g. to examine a
    /// mid-trick decision.
    pub fn with_trick(mut self, trick: Trick, hearts_broken: bool) -> Self {
        self.trick = trick;
        self.hearts_broken = hearts_broken;
        self
    }

    pub(crate) fn with_leader(mut self, trick_leader: Seat) -> Self {
        self.trick_leader = trick_leader;
        self
    }

    pub fn players(&self) -> &[Player; 4] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn trick(&self) -> &Trick {
        &self.trick
    }

    pub fn hearts_broken(&self) -> bool {
        self.hearts_broken
    }

    pub fn simplified(&self) -> bool {
        self.simplified
    }

    pub fn trick_leader(&self) -> Seat {
        self.trick_leader
    }

    pub fn next_to_play(&self) -> Seat {
        self.trick_leader.offset(self.trick.len())
    }

    pub fn scores(&self) -> [u32; 4] {
        array::from_fn(|index| self.players[index].score())
    }

    pub fn cards_remaining(&self) -> usize {
        self.players.iter().map(|player| player.hand().len()).sum()
    }

    pub fn valid_plays(&self, seat: Seat) -> Vec<Card> {
        rules::valid_plays(
            self.trick.suit(),
            self.simplified,
            self.hearts_broken,
            self.player(seat).hand(),
        )
    }

    /// Puts `card` from `actor`'s hand on the table.
    ///
    /// The card must come from `valid_plays`; recording the decision is the
    /// caller's job and has to happen against `self`, before this call.
    pub fn play_card(&self, actor: Seat, card: Card) -> GameState {
        let mut next = self.clone();
        let player = &mut next.players[actor.index()];
        let removed = player.remove_card(card);
        debug_assert!(removed, "{actor} does not hold {card}");

        if let Some(suit) = next.trick.suit() {
            if card.suit != suit {
                player.mark_out_of_suit(suit);
            }
        }

        next.trick.push(card);
        if !next.hearts_broken && rules::card_points(card, next.simplified) != 0 {
            next.hearts_broken = true;
        }
        next
    }

    /// Scores the completed trick and hands the lead to its winner.
    pub fn resolve_trick(&self) -> Result<(GameState, TrickResolution), EngineError> {
        if !self.trick.is_complete() {
            return Err(EngineError::IncompleteTrick {
                played: self.trick.len(),
            });
        }

        let winning_card = rules::trick_winner(&self.trick).ok_or(EngineError::NoTrickWinner)?;
        let winner = self
            .trick
            .position_of(winning_card)
            .and_then(|position| Seat::from_index((position + self.trick_leader.index()) % 4))
            .ok_or(EngineError::WinnerSeatNotFound { card: winning_card })?;
        let points = rules::trick_points(&self.trick, self.simplified);

        let bonus = if self.simplified {
            SIMPLIFIED_LEADERSHIP_BONUS
        } else {
            LEADERSHIP_BONUS
        };
        let rewards = array::from_fn(|index| {
            if points != 0 && index == winner.index() {
                -f64::from(points)
            } else {
                bonus
            }
        });

        let mut next = self.clone();
        if points != 0 {
            next.players[winner.index()].add_points(points);
        }
        next.trick_leader = winner;
        next.trick = Trick::new();

        Ok((
            next,
            TrickResolution {
                winner,
                winning_card,
                points,
                rewards,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn hands(cards: [Vec<Card>; 4]) -> [Hand; 4] {
        cards.map(Hand::with_cards)
    }

    fn heart_trick_state() -> GameState {
        GameState::new(
            hands([
                vec![card(Rank::Two, Suit::Hearts), card(Rank::Three, Suit::Clubs)],
                vec![card(Rank::Five, Suit::Hearts), card(Rank::Four, Suit::Clubs)],
                vec![card(Rank::King, Suit::Clubs), card(Rank::Five, Suit::Clubs)],
                vec![card(Rank::Ace, Suit::Hearts), card(Rank::Six, Suit::Clubs)],
            ]),
            Seat::North,
            false,
        )
    }

    fn play_all(state: &GameState, cards: &[Card]) -> GameState {
        let mut current = state.clone();
        for &card in cards {
            let seat = current.next_to_play();
            current = current.play_card(seat, card);
        }
        current
    }

    #[test]
    fn play_card_leaves_original_untouched() {
        let state = heart_trick_state();
        let next = state.play_card(Seat::North, card(Rank::Two, Suit::Hearts));

        assert_eq!(state.player(Seat::North).hand().len(), 2);
        assert!(state.trick().is_empty());
        assert!(!state.hearts_broken());

        assert_eq!(next.player(Seat::North).hand().len(), 1);
        assert_eq!(next.trick().suit(), Some(Suit::Hearts));
        assert!(next.hearts_broken());
        assert_eq!(next.next_to_play(), Seat::East);
    }

    #[test]
    fn discarding_off_suit_marks_player() {
        let state = heart_trick_state();
        let state = play_all(
            &state,
            &[card(Rank::Two, Suit::Hearts), card(Rank::Five, Suit::Hearts)],
        );
        let next = state.play_card(Seat::South, card(Rank::King, Suit::Clubs));
        assert!(next.player(Seat::South).plays_out_of_suit(Suit::Hearts));
        assert!(!next.player(Seat::South).plays_out_of_suit(Suit::Clubs));
        assert!(!next.player(Seat::East).plays_out_of_suit(Suit::Hearts));
    }

    #[test]
    fn zero_point_cards_do_not_break_hearts() {
        let state = GameState::new(
            hands([
                vec![Card::QUEEN_OF_SPADES],
                vec![card(Rank::Two, Suit::Spades)],
                vec![],
                vec![],
            ]),
            Seat::North,
            true,
        );
        let next = state.play_card(Seat::North, Card::QUEEN_OF_SPADES);
        assert!(!next.hearts_broken());
    }

    #[test]
    fn resolves_heart_trick_to_highest_heart() {
        let state = play_all(
            &heart_trick_state(),
            &[
                card(Rank::Two, Suit::Hearts),
                card(Rank::Five, Suit::Hearts),
                card(Rank::King, Suit::Clubs),
                card(Rank::Ace, Suit::Hearts),
            ],
        );
        let (next, resolution) = state.resolve_trick().expect("trick resolves");

        assert_eq!(resolution.winning_card, card(Rank::Ace, Suit::Hearts));
        assert_eq!(resolution.winner, Seat::West);
        assert_eq!(resolution.points, 3);
        assert_eq!(resolution.rewards, [0.5, 0.5, 0.5, -3.0]);

        assert_eq!(next.scores(), [0, 0, 0, 3]);
        assert_eq!(next.trick_leader(), Seat::West);
        assert!(next.trick().is_empty());
        assert_eq!(next.trick().suit(), None);
        assert!(next.hearts_broken());
    }

    #[test]
    fn winner_index_is_offset_by_leader() {
        let state = GameState::new(
            hands([
                vec![card(Rank::Four, Suit::Clubs)],
                vec![card(Rank::Nine, Suit::Clubs)],
                vec![card(Rank::Two, Suit::Clubs)],
                vec![card(Rank::Three, Suit::Clubs)],
            ]),
            Seat::South,
            false,
        );
        let state = play_all(
            &state,
            &[
                card(Rank::Two, Suit::Clubs),
                card(Rank::Three, Suit::Clubs),
                card(Rank::Four, Suit::Clubs),
                card(Rank::Nine, Suit::Clubs),
            ],
        );
        let (next, resolution) = state.resolve_trick().expect("trick resolves");
        assert_eq!(resolution.winner, Seat::East);
        assert_eq!(resolution.points, 0);
        assert_eq!(resolution.rewards, [0.5; 4]);
        assert_eq!(next.scores(), [0; 4]);
        assert_eq!(next.trick_leader(), Seat::East);
    }

    #[test]
    fn simplified_mode_uses_smaller_bonus_and_ignores_queen() {
        let state = GameState::new(
            hands([
                vec![card(Rank::Two, Suit::Spades)],
                vec![Card::QUEEN_OF_SPADES],
                vec![card(Rank::Three, Suit::Spades)],
                vec![card(Rank::Four, Suit::Spades)],
            ]),
            Seat::North,
            true,
        );
        let state = play_all(
            &state,
            &[
                card(Rank::Two, Suit::Spades),
                Card::QUEEN_OF_SPADES,
                card(Rank::Three, Suit::Spades),
                card(Rank::Four, Suit::Spades),
            ],
        );
        let (next, resolution) = state.resolve_trick().expect("trick resolves");
        assert_eq!(resolution.winner, Seat::East);
        assert_eq!(resolution.points, 0);
        assert_eq!(resolution.rewards, [0.25; 4]);
        assert_eq!(next.player(Seat::East).score(), 0);
    }

    #[test]
    fn resolving_partial_trick_is_an_integrity_error() {
        let state = heart_trick_state().play_card(Seat::North, card(Rank::Two, Suit::Hearts));
        assert_eq!(
            state.resolve_trick().unwrap_err(),
            EngineError::IncompleteTrick { played: 1 }
        );
    }

    #[test]
    fn state_roundtrips_through_json() {
        let state = heart_trick_state().play_card(Seat::North, card(Rank::Three, Suit::Clubs));
        let json = serde_json::to_string(&state).expect("serialize");
        let back: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state);
    }
}
