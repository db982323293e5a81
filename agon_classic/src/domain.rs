use std::fmt::{Display, Formatter};
use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// Choice from two possible actions in simple classic game.
/// `Up` is the first row (or column) of payoff matrix, `Down` is the second one.
/// In different problems and different papers they are differently called.
/// In prisoners' dilemma they can be referenced as _Cooperate_ and _Defect_.
/// In chicken (hawk-dove) game they are commonly named _Dove_ and _Hawk_.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum ClassicAction {
    Up,
    Down
}

impl ClassicAction{
    /// Index of row (or column) in payoff matrix.
    pub fn index(&self) -> usize{
        self.into_usize()
    }

    /// Represent variants in prisoner game (Up -> Cooperate, Down -> Defect)
    pub fn str_prisoner(&self) -> &'static str{
        match self {
            ClassicAction::Up => "Cooperate",
            ClassicAction::Down => "Defect"
        }
    }
    /// Represent variants in chicken game (Up -> Dove, Down -> Hawk)
    pub fn str_chicken(&self) -> &'static str{
        match self {
            ClassicAction::Up => "Dove",
            ClassicAction::Down => "Hawk"
        }
    }
}

/// Alias for prisoner's cooperate
#[allow(non_upper_case_globals)]
pub const Cooperate: ClassicAction = ClassicAction::Up;
/// Alias for prisoner's defect
#[allow(non_upper_case_globals)]
pub const Defect: ClassicAction = ClassicAction::Down;
/// Alias for passive action in chicken game
#[allow(non_upper_case_globals)]
pub const Dove: ClassicAction = ClassicAction::Up;
/// Alias for aggressive action in chicken game
#[allow(non_upper_case_globals)]
pub const Hawk: ClassicAction = ClassicAction::Down;

/// Both actions in order of matrix rows.
pub const CLASSIC_ACTIONS: [ClassicAction; 2] = [ClassicAction::Up, ClassicAction::Down];

impl Display for ClassicAction {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Enum for representing on which side of encounter is player.
/// `Left` plays rows, `Right` plays columns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Enum, Serialize, Deserialize, Default)]
pub enum Side{
    #[default]
    Left,
    Right
}

impl Side{
    pub fn other(self) -> Self{
        match self{
            Side::Left => Side::Right,
            Side::Right => Side::Left
        }
    }
}
