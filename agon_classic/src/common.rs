use serde::{Serialize, Deserialize};
use enum_map::{enum_map, EnumMap};
use agon_core::error::GameError;
use agon_core::game::Game;
use agon_core::matrix::PayoffMatrix;
use agon_core::payoff::Payoff;
use crate::domain::{ClassicAction, Side, CLASSIC_ACTIONS};

/// This is reward table for games where it is not important on what side the player is.
/// > The reward table would look like this (row player's reward in the lower left corner):
/// ```norust
///  --------------------
/// |      |  Up  | Down |
/// |--------------------
/// |  Up  |    A |    C |
/// |      | A    | B    |
/// |--------------------|
/// | Down |    B |    D |
/// |      | C    | D    |
///  --------------------
/// ```
/// Note that you only need 4 numbers to define this table (compare to [`AsymmetricRewardTable`]).
/// ```
/// use agon_classic::SymmetricRewardTable;
/// use agon_classic::domain::{Dove, Hawk};
/// let table = SymmetricRewardTable::new(10, 4, 12, 0);
/// assert_eq!(table.reward(Hawk, Dove), 12);
/// assert_eq!(table.reward(Dove, Hawk), 4);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq)]
pub struct SymmetricRewardTable<R: Payoff> {

    pub map: EnumMap<ClassicAction, EnumMap<ClassicAction, R>>
}

impl<R: Payoff> SymmetricRewardTable<R> {

    /// Rewards are given for own action first and opponent's action second.
    pub fn new(up_when_up: R, up_when_down: R, down_when_up: R, down_when_down: R) -> Self{
        Self{
            map: enum_map! {
                ClassicAction::Up => enum_map! {
                    ClassicAction::Up => up_when_up,
                    ClassicAction::Down => up_when_down,
                },
                ClassicAction::Down => enum_map! {
                    ClassicAction::Up => down_when_up,
                    ClassicAction::Down => down_when_down,
                }
            }
        }
    }

    pub fn reward(&self, action: ClassicAction, other_action: ClassicAction) -> R {
        self.map[action][other_action]
    }

    /// Matrix where entry `(i, j)` is reward for action `i` against action `j`.
    pub fn own_matrix(&self) -> PayoffMatrix{
        PayoffMatrix::from_array(CLASSIC_ACTIONS.map(|own| CLASSIC_ACTIONS.map(|other| self.reward(own, other))))
    }

    /// Game where both players use this table, column player's matrix is the transpose
    /// of row player's.
    pub fn to_game(&self) -> Result<Game, GameError>{
        let row = self.own_matrix();
        let column = row.transposed();
        Game::new(row, column)
    }
}

/// This is reward table for games where it is important on what side the player is.
/// > May be used for games that has asymmetric tables - if two players switched certain action it
/// > may not necessarily need to reverted payoffs.
///
/// Both inner tables are indexed by `(left action, right action)`.
///
/// The reward table would look like this:
/// ```norust
///  --------------------
/// |      |  Up  | Down |
/// |--------------------
/// |  Up  |    A |    C |
/// |      | B    | D    |
/// |--------------------|
/// | Down |    E |    F |
/// |      | G    | H    |
///  --------------------
/// ```
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct AsymmetricRewardTable<R: Payoff>{

    table: EnumMap<Side, EnumMap<ClassicAction, EnumMap<ClassicAction, R>>>
}

impl<R: Payoff> AsymmetricRewardTable<R> {

    pub fn new(left_table: EnumMap<ClassicAction, EnumMap<ClassicAction, R>>, right_table: EnumMap<ClassicAction, EnumMap<ClassicAction, R>>) -> Self{
        Self{
            table: enum_map! {
                Side::Left => left_table,
                Side::Right => right_table
            }
        }
    }

    pub fn reward_for_side(&self, reward_for: Side, left_action: ClassicAction, right_action: ClassicAction) -> R {
        self.table[reward_for][left_action][right_action]
    }

    pub fn rewards(&self, left_action: ClassicAction, right_action: ClassicAction) -> (R, R){
        (
            self.reward_for_side(Side::Left, left_action, right_action),
            self.reward_for_side(Side::Right, left_action, right_action)
        )
    }

    pub fn side_matrix(&self, side: Side) -> PayoffMatrix{
        PayoffMatrix::from_array(CLASSIC_ACTIONS.map(|left| CLASSIC_ACTIONS.map(|right| self.reward_for_side(side, left, right))))
    }

    pub fn to_game(&self) -> Result<Game, GameError>{
        Game::new(self.side_matrix(Side::Left), self.side_matrix(Side::Right))
    }
}

impl<R: Payoff> From<SymmetricRewardTable<R>> for AsymmetricRewardTable<R>{
    fn from(value: SymmetricRewardTable<R>) -> Self {
        let mut reverted = value.map;
        reverted[ClassicAction::Down][ClassicAction::Up] =
            value.map[ClassicAction::Up][ClassicAction::Down];
        reverted[ClassicAction::Up][ClassicAction::Down] =
            value.map[ClassicAction::Down][ClassicAction::Up];

        AsymmetricRewardTable::new(value.map, reverted)
    }
}

#[cfg(test)]
mod tests{
    use crate::{AsymmetricRewardTable, SymmetricRewardTable};
    use crate::domain::{Cooperate, Defect, Side};

    #[test]
    fn symmetric_table_gives_transposed_column_matrix(){
        let game = SymmetricRewardTable::new(1, 10, 0, 5).to_game().unwrap();
        assert_eq!(format!("{}", game.row_matrix()), "[[1, 10], [0, 5]]");
        assert_eq!(format!("{}", game.column_matrix()), "[[1, 0], [10, 5]]");
    }

    #[test]
    fn asymmetric_from_symmetric_keeps_game(){
        let symmetric = SymmetricRewardTable::<i64>::new(-1, -10, 0, -5);
        let asymmetric: AsymmetricRewardTable<i64> = symmetric.into();
        assert_eq!(asymmetric.rewards(Cooperate, Defect), (-10, 0));
        assert_eq!(asymmetric.reward_for_side(Side::Right, Defect, Cooperate), -10);
        assert_eq!(asymmetric.to_game().unwrap(), symmetric.to_game().unwrap());
    }
}
