use super::game::{resolve_round, Move, Outcome, Side};

pub const GAMES_TO_WIN: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    InProgress,
    Concluded { winner: Side },
}

// Frozen once concluded, until reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchState {
    wins: (u8, u8),
    draws: u32,
    rounds_played: u32,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_score(&self) -> u8 {
        self.wins.0
    }

    pub fn computer_score(&self) -> u8 {
        self.wins.1
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn is_concluded(&self) -> bool {
        self.check_match_end()
    }

    pub fn score(&self, side: Side) -> u8 {
        match side {
            Side::User => self.wins.0,
            Side::Computer => self.wins.1,
        }
    }

    pub fn apply_outcome(self, outcome: Outcome) -> Self {
        if self.is_concluded() {
            return self;
        }
        let (mut user, mut computer) = self.wins;
        let mut draws = self.draws;
        match outcome.scorer() {
            Some(Side::User) => user += 1,
            Some(Side::Computer) => computer += 1,
            None => draws += 1,
        }
        MatchState {
            wins: (user, computer),
            draws,
            rounds_played: self.rounds_played + 1,
        }
    }

    pub fn check_match_end(&self) -> bool {
        self.wins.0 >= GAMES_TO_WIN || self.wins.1 >= GAMES_TO_WIN
    }

    pub fn phase(&self) -> MatchPhase {
        if !self.is_concluded() {
            MatchPhase::InProgress
        } else if self.wins.0 >= GAMES_TO_WIN {
            MatchPhase::Concluded { winner: Side::User }
        } else {
            MatchPhase::Concluded {
                winner: Side::Computer,
            }
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase() {
            MatchPhase::Concluded { winner } => Some(winner),
            MatchPhase::InProgress => None,
        }
    }
}

pub fn reset_match() -> MatchState {
    MatchState::new()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub user_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
    pub state: MatchState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResolution {
    Played(RoundReport),
    Rejected,
}

pub fn play_round(state: MatchState, user_move: Move, computer_move: Move) -> RoundResolution {
    if state.is_concluded() {
        return RoundResolution::Rejected;
    }
    let outcome = resolve_round(user_move, computer_move);
    RoundResolution::Played(RoundReport {
        user_move,
        computer_move,
        outcome,
        state: state.apply_outcome(outcome),
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn play_all(state: MatchState, rounds: &[(Move, Move)]) -> (MatchState, Vec<Outcome>) {
        let mut state = state;
        let mut outcomes = vec![];
        for (user_move, computer_move) in rounds {
            if let RoundResolution::Played(report) = play_round(state, *user_move, *computer_move) {
                outcomes.push(report.outcome);
                state = report.state;
            }
        }
        (state, outcomes)
    }

    #[test]
    fn starts_fresh() {
        let state = MatchState::new();
        assert_eq!(state.user_score(), 0);
        assert_eq!(state.computer_score(), 0);
        assert!(!state.is_concluded());
        assert_eq!(state.phase(), MatchPhase::InProgress);
        assert_eq!(state, reset_match());
    }

    #[test]
    fn rock_beats_scissors_five_times() {
        let rounds = [(Move::Rock, Move::Scissors); 5];
        let (state, outcomes) = play_all(MatchState::new(), &rounds);
        assert_eq!(state.user_score(), 5);
        assert_eq!(state.computer_score(), 0);
        assert!(state.is_concluded());
        assert_eq!(outcomes, vec![Outcome::Win; 5]);
        assert_eq!(state.winner(), Some(Side::User));
    }

    #[test]
    fn concludes_on_fifth_win_not_before() {
        let mut state = MatchState::new();
        for round in 1..=GAMES_TO_WIN {
            state = state.apply_outcome(Outcome::Loss);
            assert_eq!(state.is_concluded(), round == GAMES_TO_WIN);
        }
        assert_eq!(
            state.phase(),
            MatchPhase::Concluded {
                winner: Side::Computer
            }
        );
    }

    #[test]
    fn draw_changes_no_score() {
        let state = MatchState::new().apply_outcome(Outcome::Win);
        let next = state.apply_outcome(Outcome::Draw);
        assert_eq!(next.user_score(), 1);
        assert_eq!(next.computer_score(), 0);
        assert_eq!(next.draws(), 1);
        assert!(!next.is_concluded());
    }

    #[test]
    fn concluded_match_rejects_rounds() {
        let (state, _) = play_all(MatchState::new(), &[(Move::Paper, Move::Rock); 5]);
        assert_eq!(
            play_round(state, Move::Rock, Move::Rock),
            RoundResolution::Rejected
        );
        assert_eq!(state.apply_outcome(Outcome::Loss), state);
    }

    #[test]
    fn stops_counting_at_five() {
        let (state, outcomes) = play_all(MatchState::new(), &[(Move::Scissors, Move::Rock); 7]);
        assert!(state.is_concluded());
        assert_eq!(state.rounds_played(), 5);
        assert_eq!(state.computer_score(), GAMES_TO_WIN);
        assert_eq!(outcomes.len(), 5);
    }

    #[test]
    fn winning_score_alone_decides_the_match() {
        let state = MatchState {
            wins: (GAMES_TO_WIN, 2),
            draws: 0,
            rounds_played: 7,
        };
        assert!(state.is_concluded());
        assert_eq!(state.winner(), Some(Side::User));
        assert_eq!(state.apply_outcome(Outcome::Win), state);
        assert_eq!(
            play_round(state, Move::Rock, Move::Scissors),
            RoundResolution::Rejected
        );
    }

    fn any_move() -> impl Strategy<Value = Move> {
        prop_oneof![Just(Move::Rock), Just(Move::Paper), Just(Move::Scissors)]
    }

    proptest! {
        #[test]
        fn scores_account_for_every_round(
            rounds in prop::collection::vec((any_move(), any_move()), 0..60)
        ) {
            let mut state = MatchState::new();
            let mut played = 0u32;
            for (user_move, computer_move) in rounds {
                let before = state;
                match play_round(state, user_move, computer_move) {
                    RoundResolution::Played(report) => {
                        played += 1;
                        let gained = (report.state.user_score() - before.user_score())
                            + (report.state.computer_score() - before.computer_score());
                        prop_assert!(gained <= 1);
                        state = report.state;
                    }
                    RoundResolution::Rejected => {
                        prop_assert!(before.is_concluded());
                    }
                }
                prop_assert!(state.user_score() <= GAMES_TO_WIN);
                prop_assert!(state.computer_score() <= GAMES_TO_WIN);
                prop_assert_eq!(state.is_concluded(), state.check_match_end());
            }
            prop_assert_eq!(
                u32::from(state.user_score()) + u32::from(state.computer_score()) + state.draws(),
                played
            );
            prop_assert_eq!(state.rounds_played(), played);
        }
    }
}
