//! Pure rule functions: legal plays, point values and trick winners.

use crate::game::player::Player;
use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::seat::Seat;
use crate::model::suit::Suit;
use crate::model::trick::Trick;

pub const HEART_POINTS: u32 = 1;
pub const QUEEN_OF_SPADES_POINTS: u32 = 13;

/// Points carried by a single card. The queen of spades is worthless in
/// simplified mode.
pub fn card_points(card: Card, simplified: bool) -> u32 {
    if card.suit.is_heart() {
        HEART_POINTS
    } else if card.is_queen_of_spades() && !simplified {
        QUEEN_OF_SPADES_POINTS
    } else {
        0
    }
}

pub fn trick_points(trick: &Trick, simplified: bool) -> u32 {
    trick
        .cards()
        .iter()
        .map(|&card| card_points(card, simplified))
        .sum()
}

/// Highest card of the trick suit. Off-suit discards never win.
pub fn trick_winner(trick: &Trick) -> Option<Card> {
    let suit = trick.suit()?;
    trick
        .cards()
        .iter()
        .copied()
        .filter(|card| card.suit == suit)
        .max_by_key(|card| card.rank)
}

/// Cards the holder of `hand` may play onto a trick of `trick_suit`
/// (`None` when leading).
pub fn valid_plays(
    trick_suit: Option<Suit>,
    simplified: bool,
    hearts_broken: bool,
    hand: &Hand,
) -> Vec<Card> {
    match trick_suit {
        Some(suit) if hand.has_suit(suit) => hand
            .iter()
            .copied()
            .filter(|card| card.suit == suit)
            .collect(),
        Some(_) => hand.cards().to_vec(),
        None if simplified || hearts_broken => hand.cards().to_vec(),
        None => {
            let safe: Vec<Card> = hand
                .iter()
                .copied()
                .filter(|&card| card_points(card, simplified) == 0)
                .collect();
            if safe.is_empty() {
                hand.cards().to_vec()
            } else {
                safe
            }
        }
    }
}

pub fn player_with_card(players: &[Player], suit: Suit, rank: Rank) -> Option<Seat> {
    let card = Card::new(rank, suit);
    players
        .iter()
        .find(|player| player.hand().contains(card))
        .map(Player::seat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn mixed_hand() -> Hand {
        Hand::with_cards(vec![
            card(Rank::Three, Suit::Clubs),
            card(Rank::Nine, Suit::Diamonds),
            card(Rank::Queen, Suit::Spades),
            card(Rank::Four, Suit::Spades),
            card(Rank::Ace, Suit::Hearts),
        ])
    }

    #[test]
    fn card_points_follow_scoring_table() {
        for rank in Rank::ORDERED {
            assert_eq!(card_points(card(rank, Suit::Hearts), false), 1);
            assert_eq!(card_points(card(rank, Suit::Hearts), true), 1);
            assert_eq!(card_points(card(rank, Suit::Clubs), false), 0);
            assert_eq!(card_points(card(rank, Suit::Diamonds), false), 0);
        }
        assert_eq!(card_points(Card::QUEEN_OF_SPADES, false), 13);
        assert_eq!(card_points(Card::QUEEN_OF_SPADES, true), 0);
        assert_eq!(card_points(card(Rank::King, Suit::Spades), false), 0);
    }

    #[test]
    fn full_deck_carries_26_points() {
        let deck = crate::model::deck::Deck::standard();
        let standard: u32 = deck.cards().iter().map(|&c| card_points(c, false)).sum();
        let simplified: u32 = deck.cards().iter().map(|&c| card_points(c, true)).sum();
        assert_eq!(standard, 26);
        assert_eq!(simplified, 13);
    }

    #[test]
    fn trick_points_are_additive() {
        let trick = Trick::from_cards(vec![
            card(Rank::Two, Suit::Spades),
            Card::QUEEN_OF_SPADES,
            card(Rank::Five, Suit::Hearts),
            card(Rank::Six, Suit::Hearts),
        ]);
        assert_eq!(trick_points(&trick, false), 15);
        assert_eq!(trick_points(&trick, true), 2);
        assert_eq!(trick_points(&Trick::new(), false), 0);
    }

    #[test]
    fn winner_ignores_higher_off_suit_discard() {
        let trick = Trick::from_cards(vec![
            card(Rank::Two, Suit::Hearts),
            card(Rank::Five, Suit::Hearts),
            card(Rank::King, Suit::Clubs),
            card(Rank::Ace, Suit::Hearts),
        ]);
        assert_eq!(trick_winner(&trick), Some(card(Rank::Ace, Suit::Hearts)));
        assert_eq!(trick_points(&trick, false), 3);

        let discard = Trick::from_cards(vec![
            card(Rank::Four, Suit::Diamonds),
            card(Rank::Ace, Suit::Spades),
            card(Rank::Three, Suit::Diamonds),
        ]);
        assert_eq!(trick_winner(&discard), Some(card(Rank::Four, Suit::Diamonds)));
    }

    #[test]
    fn empty_trick_has_no_winner() {
        assert_eq!(trick_winner(&Trick::new()), None);
    }

    #[test]
    fn must_follow_suit_when_able() {
        let plays = valid_plays(Some(Suit::Spades), false, false, &mixed_hand());
        assert_eq!(
            plays,
            vec![card(Rank::Four, Suit::Spades), Card::QUEEN_OF_SPADES]
        );
    }

    #[test]
    fn void_in_trick_suit_may_discard_anything() {
        let hand = Hand::with_cards(vec![Card::QUEEN_OF_SPADES, card(Rank::Ace, Suit::Hearts)]);
        let plays = valid_plays(Some(Suit::Clubs), false, false, &hand);
        assert_eq!(plays, hand.cards().to_vec());
    }

    #[test]
    fn leading_before_hearts_broken_excludes_point_cards() {
        let plays = valid_plays(None, false, false, &mixed_hand());
        assert_eq!(
            plays,
            vec![
                card(Rank::Three, Suit::Clubs),
                card(Rank::Nine, Suit::Diamonds),
                card(Rank::Four, Suit::Spades),
            ]
        );
    }

    #[test]
    fn leading_with_only_point_cards_lifts_restriction() {
        let hand = Hand::with_cards(vec![Card::QUEEN_OF_SPADES, card(Rank::Two, Suit::Hearts)]);
        assert_eq!(valid_plays(None, false, false, &hand), hand.cards().to_vec());
    }

    #[test]
    fn leading_after_break_or_in_simplified_mode_allows_anything() {
        let hand = mixed_hand();
        assert_eq!(valid_plays(None, false, true, &hand), hand.cards().to_vec());
        assert_eq!(valid_plays(None, true, false, &hand), hand.cards().to_vec());
    }

    #[test]
    fn player_with_card_finds_holder() {
        let players = [
            Player::new(Seat::North, Hand::with_cards(vec![card(Rank::Three, Suit::Clubs)])),
            Player::new(Seat::East, Hand::new()),
            Player::new(Seat::South, Hand::with_cards(vec![Card::TWO_OF_CLUBS])),
            Player::new(Seat::West, Hand::new()),
        ];
        assert_eq!(
            player_with_card(&players, Suit::Clubs, Rank::Two),
            Some(Seat::South)
        );
        assert_eq!(player_with_card(&players, Suit::Hearts, Rank::Two), None);
    }
}
