use crate::restrictions::filter_candidates;
use crate::restrictions::WordConstraints;
use crate::results::*;
use crate::scorers::RankedCorpus;
use rayon::prelude::*;
use std::sync::Arc;

/// The number of guesses a game allows unless a caller chooses otherwise.
///
/// Five guesses, not the six of the best-known variant of the game. Win rates across a
/// whole corpus shift noticeably if this changes.
pub const DEFAULT_TURN_BUDGET: u32 = 5;

/// A guess-selection policy.
///
/// Implementations see the full history of past guesses with their feedback and may keep
/// per-game state. An instance is meant to play exactly one game; [`evaluate_strategy`]
/// constructs a fresh one per answer so nothing carries over between games.
pub trait Strategy {
    /// Chooses the next word to guess, given every previous guess in play order.
    fn make_guess(&mut self, history: &[Guess]) -> Result<Arc<str>, GameError>;
}

/// Guesses the highest-ranked word still consistent with all feedback seen so far.
///
/// An opening word can be configured; it is played on the first turn and never again.
pub struct CommonLettersStrategy<'a> {
    ranking: &'a RankedCorpus,
    opening: Option<Arc<str>>,
    opening_played: bool,
}

impl<'a> CommonLettersStrategy<'a> {
    pub fn new(ranking: &'a RankedCorpus) -> CommonLettersStrategy<'a> {
        CommonLettersStrategy {
            ranking,
            opening: None,
            opening_played: false,
        }
    }

    /// Like [`CommonLettersStrategy::new`], but the first guess is always `opening`.
    pub fn with_opening(ranking: &'a RankedCorpus, opening: Arc<str>) -> CommonLettersStrategy<'a> {
        CommonLettersStrategy {
            ranking,
            opening: Some(opening),
            opening_played: false,
        }
    }
}

impl Strategy for CommonLettersStrategy<'_> {
    fn make_guess(&mut self, history: &[Guess]) -> Result<Arc<str>, GameError> {
        if let Some(opening) = &self.opening {
            if !self.opening_played {
                self.opening_played = true;
                return Ok(Arc::clone(opening));
            }
        }
        let constraints =
            WordConstraints::from_marks(history.iter().flat_map(|guess| guess.feedback.iter()));
        self.ranking
            .words()
            .iter()
            .find(|word| constraints.is_satisfied_by(word))
            .map(Arc::clone)
            .ok_or(GameError::NoCandidate)
    }
}

/// Guesses uniformly at random among the words still consistent with all feedback.
pub struct RandomStrategy<'a> {
    ranking: &'a RankedCorpus,
}

impl<'a> RandomStrategy<'a> {
    pub fn new(ranking: &'a RankedCorpus) -> RandomStrategy<'a> {
        RandomStrategy { ranking }
    }
}

impl Strategy for RandomStrategy<'_> {
    fn make_guess(&mut self, history: &[Guess]) -> Result<Arc<str>, GameError> {
        let constraints =
            WordConstraints::from_marks(history.iter().flat_map(|guess| guess.feedback.iter()));
        let candidates = filter_candidates(self.ranking.words(), &constraints);
        if candidates.is_empty() {
            return Err(GameError::NoCandidate);
        }
        let random: usize = rand::random();
        Ok(Arc::clone(&candidates[random % candidates.len()]))
    }
}

/// Plays a single game to completion: while turns remain and the secret has not been
/// guessed, ask the strategy for a word, grade it, and record it.
///
/// The returned outcome is final; nothing mutates it afterwards. A strategy failure
/// (such as [`GameError::NoCandidate`]) is surfaced to the caller rather than retried.
pub fn play_game<S: Strategy>(
    secret: &str,
    turn_budget: u32,
    mut strategy: S,
) -> Result<GameOutcome, GameError> {
    let mut guesses: Vec<Guess> = Vec::new();
    let mut turns_used = 0;
    while turns_used < turn_budget
        && guesses.last().map(|guess| guess.word.as_ref()) != Some(secret)
    {
        let word = strategy.make_guess(&guesses)?;
        let feedback = get_feedback_for_guess(secret, &word);
        guesses.push(Guess { word, feedback });
        turns_used += 1;
    }
    let won = turns_used <= turn_budget
        && guesses.last().map(|guess| guess.word.as_ref()) == Some(secret);
    Ok(GameOutcome {
        secret: Arc::from(secret),
        won,
        turns_used,
        guesses,
    })
}

/// Plays one game per answer and returns the outcomes in answer order.
///
/// `strategy_factory` is invoked once per answer, so every game starts from a fresh
/// strategy and no state can leak between games. Games share only the read-only ranking
/// the factory closes over, which lets them run in parallel. A game that fails is
/// reported in its own slot and does not interrupt the remaining games.
pub fn evaluate_strategy<S, F>(
    answers: &[Arc<str>],
    turn_budget: u32,
    strategy_factory: F,
) -> Vec<Result<GameOutcome, GameError>>
where
    S: Strategy,
    F: Fn() -> S + Sync,
{
    answers
        .par_iter()
        .map(|answer| play_game(answer, turn_budget, strategy_factory()))
        .collect()
}
