use agon_core::error::GameError;
use agon_core::game::Game;
use agon_core::matrix::PayoffMatrix;
use crate::common::SymmetricRewardTable;
use crate::encoding::CompetitiveEncoding;

/// Rewards of the crop game for the row player (China).
pub const CROP_GAME_ROW: [[i64; 2]; 2] = [[10, 4], [12, 0]];
/// Rewards of the crop game for the column player (US).
pub const CROP_GAME_COLUMN: [[i64; 2]; 2] = [[10, 12], [4, 0]];
/// Base matrix of Thelma and Louise prisoners' dilemma.
pub const PRISONERS_DILEMMA_BASE: [[i64; 2]; 2] = [[1, 10], [0, 5]];

/// Named game, ready to be solved and reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario{
    /// Name of game used in summary header.
    pub title: &'static str,
    pub row_player: &'static str,
    pub column_player: &'static str,
    pub game: Game,
}

impl Scenario{
    pub fn new(title: &'static str, row_player: &'static str, column_player: &'static str, game: Game) -> Self{
        Self{title, row_player, column_player, game}
    }
}

/// Hawk-Dove variant of resource conflict between China and US.
/// Both countries choose to share (dove) or to grab (hawk) the crop.
pub fn crop_game() -> Result<Scenario, GameError>{
    let game = Game::new(
        PayoffMatrix::from_array(CROP_GAME_ROW),
        PayoffMatrix::from_array(CROP_GAME_COLUMN)
    )?;
    Ok(Scenario::new("crop game", "China", "US", game))
}

/// General sum prisoners' dilemma, Louise's payoffs are the transpose of Thelma's.
pub fn prisoners_dilemma() -> Result<Scenario, GameError>{
    let [[a, b], [c, d]] = PRISONERS_DILEMMA_BASE;
    let game = SymmetricRewardTable::new(a, b, c, d).to_game()?;
    Ok(Scenario::new("prisoners' dilemma", "Thelma", "Louise", game))
}

/// Prisoners' dilemma base matrix made strictly competitive by `encoding`.
pub fn competitive_prisoners_dilemma(encoding: CompetitiveEncoding) -> Result<Scenario, GameError>{
    let game = encoding.encode(&PayoffMatrix::from_array(PRISONERS_DILEMMA_BASE))?;
    let title = match encoding{
        CompetitiveEncoding::Negation => "zero-sum prisoners' dilemma",
        CompetitiveEncoding::NegatedTranspose => "negated prisoners' dilemma",
    };
    Ok(Scenario::new(title, "Thelma", "Louise", game))
}
