use crate::error::EngineError;
use crate::game::policy::{ActionSummary, Policy, PolicyContext, select_action};
use crate::game::state::GameState;
use crate::history::record::{History, Recorder};
use crate::model::card::Card;
use crate::model::deck::{Deck, HAND_SIZE};
use crate::model::hand::Hand;
use crate::model::seat::Seat;
use crate::rules;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::array;
use tracing::{Level, event};

/// Settings for a single seeded game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub simplified: bool,
    #[serde(default)]
    pub seed: u64,
}

/// Result of a finished game.
#[derive(Debug, Clone)]
pub struct GameOutcome<T> {
    /// One sealed history per seat, in seat order.
    pub histories: [History<T>; 4],
    pub final_state: GameState,
}

impl<T> GameOutcome<T> {
    pub fn scores(&self) -> [u32; 4] {
        self.final_state.scores()
    }

    pub fn into_histories(self) -> [History<T>; 4] {
        self.histories
    }
}

/// Deals `deck` and hands the first lead to the holder of the two of clubs.
pub fn opening_state(deck: &Deck, simplified: bool) -> Result<GameState, EngineError> {
    open_with_hands(deck.deal(), simplified)
}

fn open_with_hands(hands: [Hand; 4], simplified: bool) -> Result<GameState, EngineError> {
    let start = Card::TWO_OF_CLUBS;
    let dealt = GameState::new(hands, Seat::North, simplified);
    let leader = rules::player_with_card(dealt.players(), start.suit, start.rank)
        .ok_or(EngineError::StartingCardMissing { card: start })?;
    Ok(dealt.with_leader(leader))
}

/// Plays one complete game: deal, thirteen tricks, then seal every history.
pub fn play_game<T, R>(
    mut policies: [&mut dyn Policy<T>; 4],
    simplified: bool,
    rng: &mut R,
) -> Result<GameOutcome<T>, EngineError>
where
    R: rand::Rng + ?Sized,
{
    let deck = Deck::shuffled(rng);
    let mut state = opening_state(&deck, simplified)?;
    let mut recorders: [Recorder<T>; 4] = array::from_fn(|index| Recorder::new(Seat::LOOP[index]));

    event!(
        target: "hearts_core::driver",
        Level::DEBUG,
        leader = %state.trick_leader(),
        simplified,
        "game started"
    );

    for trick_index in 0..HAND_SIZE {
        state = play_round(state, &mut policies, &mut recorders, trick_index as u32)?;
    }

    let scores = state.scores();
    let histories = recorders.map(|recorder| {
        let score = scores[recorder.actor().index()];
        recorder.terminate(score)
    });

    event!(
        target: "hearts_core::driver",
        Level::INFO,
        north = scores[0],
        east = scores[1],
        south = scores[2],
        west = scores[3],
        simplified,
        "game finished"
    );

    Ok(GameOutcome {
        histories,
        final_state: state,
    })
}

/// Convenience wrapper seeding a [`StdRng`] from `config.seed`.
pub fn play_game_with_seed<T>(
    policies: [&mut dyn Policy<T>; 4],
    config: GameConfig,
) -> Result<GameOutcome<T>, EngineError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    play_game(policies, config.simplified, &mut rng)
}

/// Four plays clockwise from the current leader, then trick resolution.
fn play_round<T>(
    state: GameState,
    policies: &mut [&mut dyn Policy<T>; 4],
    recorders: &mut [Recorder<T>; 4],
    trick_index: u32,
) -> Result<GameState, EngineError> {
    let leader = state.trick_leader();
    let mut state = state;

    for step in 0..Seat::COUNT {
        let seat = leader.offset(step);
        let action = choose_action(&mut *policies[seat.index()], &state, seat)?;

        if tracing::enabled!(target: "hearts_core::driver", Level::DEBUG) {
            event!(
                target: "hearts_core::driver",
                Level::DEBUG,
                trick = trick_index,
                seat = %seat,
                card = %action.card,
                quality = action.quality,
                hearts_broken = state.hearts_broken(),
            );
        }

        let ActionSummary {
            card,
            quality,
            trace,
        } = action;
        recorders[seat.index()].record_action(state.clone(), card, quality, trace);
        state = state.play_card(seat, card);
    }

    let (next, resolution) = state.resolve_trick()?;
    for (recorder, reward) in recorders.iter_mut().zip(resolution.rewards) {
        recorder.assign_reward(reward);
    }

    event!(
        target: "hearts_core::driver",
        Level::DEBUG,
        trick = trick_index,
        winner = %resolution.winner,
        winning_card = %resolution.winning_card,
        points = resolution.points,
        "trick resolved"
    );

    Ok(next)
}

fn choose_action<T>(
    policy: &mut dyn Policy<T>,
    state: &GameState,
    seat: Seat,
) -> Result<ActionSummary<T>, EngineError> {
    let legal = state.valid_plays(seat);
    let ctx = PolicyContext::new(state, seat, &legal);
    let chosen = select_action(policy.evaluate(&ctx))
        .ok_or(EngineError::EmptyPolicyResponse { seat })?;
    if !legal.contains(&chosen.card) {
        return Err(EngineError::IllegalCandidate {
            seat,
            card: chosen.card,
        });
    }
    Ok(chosen)
}
