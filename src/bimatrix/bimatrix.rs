use super::*;
use crate::Position;
use crate::Probability;
use crate::Utility;
use crate::game::*;
use ndarray::Array2;
use ndarray::ArrayView1;

/// A two-player [`NormalForm`] with both payoff matrices materialized.
///
/// Rows index player one's strategies and columns player two's, in the
/// order of their strategy sets. The oracle is read once per cell here
/// and never again; every solver works off the matrices.
#[derive(Debug, Clone, PartialEq)]
pub struct Bimatrix {
    game: NormalForm,
    u: [Array2<Utility>; 2],
}

impl TryFrom<NormalForm> for Bimatrix {
    type Error = MixedError;
    fn try_from(game: NormalForm) -> Result<Self, Self::Error> {
        Self::new(game)
    }
}

impl Bimatrix {
    pub fn new(game: NormalForm) -> Result<Self, MixedError> {
        if game.n() != 2 {
            return Err(MixedError::NotTwoPlayer(game.n()));
        }
        let rows = game.strategies(0)?;
        let cols = game.strategies(1)?;
        let mut u1 = Array2::<Utility>::zeros((rows.len(), cols.len()));
        let mut u2 = Array2::<Utility>::zeros((rows.len(), cols.len()));
        for (i, r) in rows.iter().enumerate() {
            for (j, c) in cols.iter().enumerate() {
                let payoff = game.payoff(&Profile::from(vec![r.clone(), c.clone()]))?;
                u1[(i, j)] = payoff[0];
                u2[(i, j)] = payoff[1];
            }
        }
        Ok(Self { game, u: [u1, u2] })
    }

    pub fn game(&self) -> &NormalForm {
        &self.game
    }

    pub fn rows(&self) -> usize {
        self.u[0].nrows()
    }

    pub fn cols(&self) -> usize {
        self.u[0].ncols()
    }

    /// `player`'s payoff matrix, always indexed (row, column)
    pub fn matrix(&self, player: Position) -> Result<&Array2<Utility>, MixedError> {
        self.u.get(player).ok_or(MixedError::Game(GameError::Player(player)))
    }

    pub fn strategies(&self, player: Position) -> Result<&[Strategy], MixedError> {
        Ok(self.game.strategies(player)?)
    }

    /// `player`'s expected payoff when the row player mixes `p` and the
    /// column player mixes `q`
    pub fn expected(&self, player: Position, p: &[Probability], q: &[Probability]) -> Result<Utility, MixedError> {
        let u = self.matrix(player)?;
        if p.len() != self.rows() || q.len() != self.cols() {
            return Err(MixedError::Game(GameError::Validation(format!(
                "mixed profile of shape {}x{} against a {}x{} game",
                p.len(),
                q.len(),
                self.rows(),
                self.cols()
            ))));
        }
        Ok(ArrayView1::from(p).dot(&u.dot(&ArrayView1::from(q))))
    }

    /// Iterated elimination on the underlying game, rebuilt as a bimatrix.
    pub fn eliminate(&self) -> Result<Self, MixedError> {
        Self::new(self.game.eliminate()?)
    }
}

impl std::fmt::Display for Bimatrix {
    /// one cell per profile, `u1, u2`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self.game.strategies(0).map_err(|_| std::fmt::Error)?;
        let cols = self.game.strategies(1).map_err(|_| std::fmt::Error)?;
        let cells = (0..self.rows())
            .map(|i| {
                (0..self.cols())
                    .map(|j| format!("{}, {}", self.u[0][(i, j)], self.u[1][(i, j)]))
                    .collect::<Vec<String>>()
            })
            .collect::<Vec<Vec<String>>>();
        let label = rows.iter().map(|s| s.as_str().chars().count()).max().unwrap_or(0);
        let width = cells
            .iter()
            .flatten()
            .map(|c| c.chars().count())
            .chain(cols.iter().map(|s| s.as_str().chars().count()))
            .max()
            .unwrap_or(0);
        let rule = |l: &str, m: &str, r: &str| {
            let mut line = format!("{}{}", l, "─".repeat(label + 2));
            for _ in cols {
                line.push_str(m);
                line.push_str(&"─".repeat(width + 2));
            }
            line.push_str(r);
            line
        };
        writeln!(f, "{}", rule("┌", "┬", "┐"))?;
        write!(f, "│ {:label$} ", "")?;
        for c in cols {
            write!(f, "│ {:>width$} ", c.as_str())?;
        }
        writeln!(f, "│")?;
        writeln!(f, "{}", rule("├", "┼", "┤"))?;
        for (r, row) in rows.iter().zip(cells.iter()) {
            write!(f, "│ {:label$} ", r.as_str())?;
            for cell in row {
                write!(f, "│ {:>width$} ", cell)?;
            }
            writeln!(f, "│")?;
        }
        writeln!(f, "{}", rule("└", "┴", "┘"))
    }
}
