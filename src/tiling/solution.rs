use crate::algorithms::checkerboard::CellColor;
use crate::algorithms::flow_network::Capacity;
use crate::geometry::grid_xy::GridXY;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// A domino covering two adjacent cells, one of each color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Constructor, Serialize, Deserialize)]
pub struct Domino {
    pub black: GridXY,
    pub white: GridXY,
}

impl Domino {
    /// A domino over the two cells, ordered by their color. If the cells have the same color, they
    /// are kept in the given order.
    pub fn from_cells(first: GridXY, second: GridXY) -> Self {
        if CellColor::of(first) == CellColor::White && CellColor::of(second) == CellColor::Black {
            Domino::new(second, first)
        } else {
            Domino::new(first, second)
        }
    }

    pub fn cells(self) -> [GridXY; 2] {
        [self.black, self.white]
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpossibleReason {
    /// The numbers of black and white open cells differ, so there was no point in computing the flow.
    UnbalancedColors { black: usize, white: usize },
    /// The maximum matching does not cover all cells.
    InsufficientFlow { flow: Capacity, required: usize },
}

/// The answer for a board: either it cannot be covered or the list of dominoes covering it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tiling {
    Impossible(ImpossibleReason),
    /// Dominoes in the order in which they were found.
    Matching(Vec<Domino>),
}

impl Tiling {
    pub fn is_possible(&self) -> bool {
        matches!(self, Tiling::Matching(_))
    }

    pub fn dominoes(&self) -> Option<&[Domino]> {
        match self {
            Tiling::Matching(dominoes) => Some(dominoes),
            Tiling::Impossible(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::grid_xy::GridXY;
    use crate::tiling::solution::{Domino, ImpossibleReason, Tiling};

    #[test]
    fn test_from_cells_orders_by_color() {
        let black = GridXY::new(1, 1);
        let white = GridXY::new(1, 2);
        assert_eq!(Domino::from_cells(white, black), Domino::new(black, white));
        assert_eq!(Domino::from_cells(black, white), Domino::new(black, white));
        assert_eq!(Domino::from_cells(black, black).cells(), [black, black]);
    }

    #[test]
    fn test_serialize_tiling() {
        let tiling = Tiling::Impossible(ImpossibleReason::UnbalancedColors { black: 5, white: 4 });
        assert_eq!(
            serde_json::to_string(&tiling).unwrap(),
            r#"{"impossible":{"unbalanced_colors":{"black":5,"white":4}}}"#
        );
        let tiling = Tiling::Matching(vec![Domino::new(GridXY::new(0, 0), GridXY::new(0, 1))]);
        assert_eq!(
            serde_json::to_string(&tiling).unwrap(),
            r#"{"matching":[{"black":{"row":0,"col":0},"white":{"row":0,"col":1}}]}"#
        );
        assert!(tiling.is_possible());
        assert_eq!(tiling.dominoes().map(|dominoes| dominoes.len()), Some(1));
    }
}
