use colored::Colorize;
use common::{
    message::console::{ClientResponse, RoundResultResponse},
    model::game::{Move, Outcome, Side},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Good,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub tone: Tone,
}

impl Banner {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Banner {
            text: text.into(),
            tone,
        }
    }

    pub fn welcome() -> Self {
        Banner::new("Play your move", Tone::Neutral)
    }

    pub fn for_round(round: &RoundResultResponse) -> Self {
        let (mine, theirs) = (round.your_move, round.other_move);
        match round.result {
            Outcome::Win => Banner::new(
                format!("🎉 You Win! Your {} beats {}", mine, theirs),
                Tone::Good,
            ),
            Outcome::Loss => Banner::new(
                format!("💻 You Lose! {} beats your {}", theirs, mine),
                Tone::Bad,
            ),
            Outcome::Draw => Banner::new("🤝 Game was draw, Play Again.", Tone::Neutral),
        }
    }

    pub fn for_winner(winner: Side) -> Self {
        match winner {
            Side::User => Banner::new("🏆 You are the Champion!", Tone::Good),
            Side::Computer => Banner::new("💻 Computer Wins the Match!", Tone::Bad),
        }
    }

    pub fn match_over() -> Self {
        Banner::new("The match is over, type `reset` to play again.", Tone::Neutral)
    }

    pub fn paint(&self, color: bool) -> String {
        if !color {
            return self.text.clone();
        }
        match self.tone {
            Tone::Neutral => self.text.bold().to_string(),
            Tone::Good => self.text.green().bold().to_string(),
            Tone::Bad => self.text.red().bold().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Animations {
    pub choice: Option<Move>,
    pub user_score: bool,
    pub computer_score: bool,
}

fn pulse(score: u8, active: bool) -> String {
    if active {
        format!("[{}]", score)
    } else {
        score.to_string()
    }
}

pub fn score_line(user_score: u8, computer_score: u8, animations: &Animations) -> String {
    format!(
        "You {} - {} Computer",
        pulse(user_score, animations.user_score),
        pulse(computer_score, animations.computer_score)
    )
}

pub fn choices_line(your_move: Move, other_move: Move) -> String {
    format!("You chose {} | Computer chose {}", your_move, other_move)
}

pub fn palette(animations: &Animations, disabled: bool) -> String {
    if disabled {
        return "Moves are locked until you type `reset`.".to_owned();
    }
    let moves: Vec<String> = Move::ALL
        .iter()
        .map(|value| {
            if animations.choice == Some(*value) {
                format!("[{}]", value)
            } else {
                value.to_string()
            }
        })
        .collect();
    format!("Pick one: {}", moves.join("  "))
}

pub fn popup(winner: Side, user_score: u8, computer_score: u8, color: bool) -> Vec<String> {
    let rule = "=".repeat(36);
    vec![
        rule.clone(),
        Banner::for_winner(winner).paint(color),
        format!("Final Score: You {} - {} Computer", user_score, computer_score),
        "Type `reset` to play again.".to_owned(),
        rule,
    ]
}

pub fn describe(response: &ClientResponse, animations: &Animations, color: bool) -> Vec<String> {
    match response {
        ClientResponse::RoundResult(round) => vec![
            Banner::for_round(round).paint(color),
            score_line(round.user_score, round.computer_score, animations),
            choices_line(round.your_move, round.other_move),
        ],
        ClientResponse::MatchResult {
            winner,
            user_score,
            computer_score,
        } => popup(*winner, *user_score, *computer_score, color),
        ClientResponse::MoveRejected { .. } => vec![Banner::match_over().paint(color)],
        ClientResponse::MatchReset => vec![
            Banner::welcome().paint(color),
            score_line(0, 0, &Animations::default()),
            palette(animations, false),
        ],
        ClientResponse::Status {
            user_score,
            computer_score,
            rounds_played,
            draws,
            concluded,
        } => vec![
            score_line(*user_score, *computer_score, animations),
            format!("{} rounds played, {} drawn", rounds_played, draws),
            palette(animations, *concluded),
        ],
    }
}
