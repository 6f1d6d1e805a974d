//! Game logic: the hidden [`MineField`] and the player-visible
//! [`VisibleField`] state machine layered on top of it.

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::data::{CellStatus, FieldError};
use crate::model::{self, GameParams};

/// Hidden mine layout with adjacency queries.
///
/// A field is either built from an explicit layout or created empty with a
/// target mine count and filled in later by [`MineField::populate`]. Until
/// `populate` runs on such a field it contains no mines at all, even though
/// [`MineField::num_mines`] already reports the target count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MineField {
    rows: usize,
    cols: usize,
    mines: Vec<bool>,
    mine_count: usize,
}

impl MineField {
    /// Copies a caller-provided layout, `true` marking a mine.
    ///
    /// The layout must have at least one row, at least one column and rows of
    /// equal length; nothing else is validated. The mine count is the number
    /// of `true` cells.
    pub fn from_layout(layout: &[Vec<bool>]) -> Result<Self, FieldError> {
        let rows = layout.len();
        let cols = layout.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || cols == 0 || layout.iter().any(|row| row.len() != cols) {
            return Err(FieldError::InvalidConfiguration);
        }

        let mines: Vec<bool> = layout.iter().flatten().copied().collect();
        let mine_count = mines.iter().filter(|&&mine| mine).count();
        Ok(Self {
            rows,
            cols,
            mines,
            mine_count,
        })
    }

    /// Creates an all-empty field that will hold `mine_count` mines once
    /// [`MineField::populate`] is called.
    ///
    /// Requires `rows > 0`, `cols > 0` and `rows * cols > 3 * mine_count`.
    pub fn new(rows: usize, cols: usize, mine_count: usize) -> Result<Self, FieldError> {
        if rows == 0 || cols == 0 || rows * cols <= 3 * mine_count {
            return Err(FieldError::InvalidConfiguration);
        }
        Ok(Self {
            rows,
            cols,
            mines: vec![false; rows * cols],
            mine_count,
        })
    }

    /// Creates an all-empty field from presentation-layer parameters.
    /// Rejects bad mine counts instead of clamping them.
    pub fn with_params(params: GameParams) -> Result<Self, FieldError> {
        Self::new(params.rows, params.cols, params.mines)
    }

    /// Clears the field, then places exactly [`MineField::num_mines`] mines
    /// at distinct uniformly-random locations, never at
    /// `(avoid_row, avoid_col)`.
    ///
    /// Walks the field once, keeping each non-avoided cell as a mine with
    /// probability `mines_left / cells_left`. That draw is uniform without
    /// replacement and terminates unconditionally.
    #[instrument(level = "trace", skip(self, rng))]
    pub fn populate<R: Rng>(
        &mut self,
        rng: &mut R,
        avoid_row: usize,
        avoid_col: usize,
    ) -> Result<(), FieldError> {
        if !self.in_range(avoid_row, avoid_col) {
            return Err(FieldError::OutOfRange);
        }
        debug_assert!(
            self.mine_count < self.rows * self.cols,
            "{} mines cannot fit a {}x{} field with one cell excluded",
            self.mine_count,
            self.rows,
            self.cols
        );

        self.reset_empty();
        let avoid = self.index(avoid_row, avoid_col);
        let mut mines_left = self.mine_count;
        let mut cells_left = self.rows * self.cols - 1;
        for index in 0..self.mines.len() {
            if index == avoid {
                continue;
            }
            if rng.random_ratio(mines_left as u32, cells_left as u32) {
                self.mines[index] = true;
                mines_left -= 1;
            }
            cells_left -= 1;
        }

        debug!(
            "placed {} mines on a {}x{} field, keeping ({}, {}) clear",
            self.mine_count, self.rows, self.cols, avoid_row, avoid_col
        );
        Ok(())
    }

    /// Removes every mine. Dimensions and [`MineField::num_mines`] are
    /// unchanged, so the actual mine count no longer matches `num_mines()`
    /// until the next `populate`. This is the state a field starts a game in.
    pub fn reset_empty(&mut self) {
        self.mines.fill(false);
    }

    /// Number of mines in the up to 8 neighboring squares, diagonals
    /// included, `(row, col)` itself excluded. Always in `[0, 8]`.
    ///
    /// # Panics
    /// If `(row, col)` is out of range.
    pub fn num_adjacent_mines(&self, row: usize, col: usize) -> u8 {
        assert!(
            self.in_range(row, col),
            "({}, {}) is outside the {}x{} field",
            row,
            col,
            self.rows,
            self.cols
        );

        let mut count = 0;
        for dr in -1..=1isize {
            for dc in -1..=1isize {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let r = row as isize + dr;
                let c = col as isize + dc;
                if r >= 0
                    && c >= 0
                    && self.in_range(r as usize, c as usize)
                    && self.mines[self.index(r as usize, c as usize)]
                {
                    count += 1;
                }
            }
        }
        count
    }

    /// Whether `(row, col)` is a valid field location. Row and column
    /// numbers start from 0.
    pub fn in_range(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Whether there is a mine at `(row, col)`.
    ///
    /// # Panics
    /// If `(row, col)` is out of range.
    pub fn has_mine(&self, row: usize, col: usize) -> bool {
        assert!(
            self.in_range(row, col),
            "({}, {}) is outside the {}x{} field",
            row,
            col,
            self.rows,
            self.cols
        );
        self.mines[self.index(row, col)]
    }

    /// Number of rows in the field.
    pub fn num_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the field.
    pub fn num_cols(&self) -> usize {
        self.cols
    }

    /// Target number of mines; matches the actual count once populated.
    pub fn num_mines(&self) -> usize {
        self.mine_count
    }

    fn index(&self, row: usize, col: usize) -> usize {
        col + row * self.cols
    }
}

/// Player-visible game state layered on a [`MineField`].
///
/// Tracks the display state of every square plus the running guess count,
/// and implements the moves a presentation layer routes to it:
/// [`VisibleField::cycle_guess`], [`VisibleField::uncover`] and the mutating
/// query [`VisibleField::is_game_over`].
pub struct VisibleField {
    field: MineField,
    cells: Vec<CellStatus>,
    guesses: usize,
}

impl VisibleField {
    /// Wraps `field` with every square covered and no guesses made.
    pub fn new(field: MineField) -> Self {
        let cells = vec![CellStatus::Covered; field.num_rows() * field.num_cols()];
        Self {
            field,
            cells,
            guesses: 0,
        }
    }

    /// Back to the initial state: all squares covered, guess count zero,
    /// same underlying mine field.
    pub fn reset(&mut self) {
        self.cells.fill(CellStatus::Covered);
        self.guesses = 0;
    }

    /// The mine field this display covers.
    pub fn mine_field(&self) -> &MineField {
        &self.field
    }

    /// Display state of the square at `(row, col)`.
    ///
    /// # Panics
    /// If `(row, col)` is out of range.
    pub fn status(&self, row: usize, col: usize) -> CellStatus {
        assert!(
            self.field.in_range(row, col),
            "({}, {}) is outside the {}x{} field",
            row,
            col,
            self.field.num_rows(),
            self.field.num_cols()
        );
        self.cells[self.index(row, col)]
    }

    /// Integer encoding of [`VisibleField::status`], see
    /// [`CellStatus::code`]. This is the stable contract renderers are built
    /// against.
    pub fn status_code(&self, row: usize, col: usize) -> i8 {
        self.status(row, col).code()
    }

    /// Number of mines minus the number of squares currently flagged.
    ///
    /// Purely informational: it says nothing about whether the guesses are
    /// correct, and goes negative when the player has flagged more squares
    /// than there are mines.
    pub fn num_mines_left(&self) -> isize {
        self.field.num_mines() as isize - self.guesses as isize
    }

    /// Cycles a hidden square through covered, flagged and questioned,
    /// keeping the guess count in step: `Covered` becomes `MineGuess` (count
    /// up), `MineGuess` becomes `Question` (count down), `Question` becomes
    /// `Covered`. Uncovered squares and out-of-range input are ignored.
    #[instrument(level = "trace", skip(self))]
    pub fn cycle_guess(&mut self, row: usize, col: usize) {
        if !self.field.in_range(row, col) {
            warn!("ignoring guess on out-of-range square ({}, {})", row, col);
            return;
        }

        let index = self.index(row, col);
        match self.cells[index] {
            CellStatus::Covered => {
                self.cells[index] = CellStatus::MineGuess;
                self.guesses += 1;
                debug!("square ({}, {}) flagged", row, col);
            }
            CellStatus::MineGuess => {
                self.cells[index] = CellStatus::Question;
                self.guesses -= 1;
                debug!("square ({}, {}) questioned", row, col);
            }
            CellStatus::Question => {
                self.cells[index] = CellStatus::Covered;
                debug!("square ({}, {}) covered again", row, col);
            }
            _ => debug!("ignoring guess on uncovered square ({}, {})", row, col),
        }
    }

    /// Uncovers `(row, col)`, returning `false` iff a mine was hit.
    ///
    /// Uncovering a square with no adjacent mines spreads through its whole
    /// zero-adjacency region, also revealing the mine-adjacent squares that
    /// form the region's rim. Squares flagged as `MineGuess` are neither
    /// uncovered nor searched through. Already-uncovered squares and
    /// out-of-range input are no-ops reporting `true`.
    #[instrument(level = "trace", skip(self))]
    pub fn uncover(&mut self, row: usize, col: usize) -> bool {
        if !self.field.in_range(row, col) {
            warn!("ignoring uncover of out-of-range square ({}, {})", row, col);
            return true;
        }
        self.uncover_in_range(row, col)
    }

    fn uncover_in_range(&mut self, row: usize, col: usize) -> bool {
        let index = self.index(row, col);
        match self.cells[index] {
            CellStatus::Covered | CellStatus::Question => {}
            _ => return true,
        }

        if self.field.has_mine(row, col) {
            warn!("mine hit at ({}, {})", row, col);
            self.cells[index] = CellStatus::ExplodedMine;
            return false;
        }

        let adjacent = self.field.num_adjacent_mines(row, col);
        // Reveal before recursing so the flood visits each square once.
        self.cells[index] = CellStatus::Revealed { adjacent };
        if adjacent == 0 {
            for dr in -1..=1isize {
                for dc in -1..=1isize {
                    if dr == 0 && dc == 0 {
                        continue;
                    }

                    let r = row as isize + dr;
                    let c = col as isize + dc;
                    if r >= 0 && c >= 0 && self.field.in_range(r as usize, c as usize) {
                        self.uncover_in_range(r as usize, c as usize);
                    }
                }
            }
        }
        true
    }

    /// Whether `(row, col)` has been uncovered, counting the states only
    /// shown by the end-of-game reveal. Out-of-range squares report `false`.
    pub fn is_uncovered(&self, row: usize, col: usize) -> bool {
        self.field.in_range(row, col) && self.status(row, col).code() >= 0
    }

    /// Whether the game has ended, performing the terminal board reveal as a
    /// side effect of detecting it.
    ///
    /// This is deliberately a mutating query. On detecting a loss, every
    /// unguessed mine becomes [`CellStatus::Mine`], every wrongly flagged
    /// square becomes [`CellStatus::IncorrectGuess`], correctly flagged mines
    /// keep their flag and the triggering square stays
    /// [`CellStatus::ExplodedMine`]. On detecting a win, when every safe
    /// square is revealed, the remaining covered squares are auto-flagged as
    /// [`CellStatus::MineGuess`]. Mid-game it mutates nothing, and calling it
    /// again after the game ended leaves the transformed board unchanged.
    #[instrument(level = "trace", skip(self))]
    pub fn is_game_over(&mut self) -> bool {
        let mut revealed = 0;
        let mut exploded = false;
        for status in &self.cells {
            match status {
                CellStatus::Revealed { .. } => revealed += 1,
                CellStatus::ExplodedMine => exploded = true,
                _ => {}
            }
        }

        if exploded {
            info!("game lost, revealing the remaining mines");
            self.reveal_mines();
            return true;
        }

        let total = self.field.num_rows() * self.field.num_cols();
        if revealed == total - self.field.num_mines() {
            info!("game won, flagging the remaining mines");
            self.flag_remaining();
            return true;
        }
        false
    }

    /// Loss-time transformation: show what the player got right and wrong.
    fn reveal_mines(&mut self) {
        for row in 0..self.field.num_rows() {
            for col in 0..self.field.num_cols() {
                let index = self.index(row, col);
                match self.cells[index] {
                    // The square that ended the game keeps its own state.
                    CellStatus::ExplodedMine => {}
                    CellStatus::MineGuess => {
                        if !self.field.has_mine(row, col) {
                            self.cells[index] = CellStatus::IncorrectGuess;
                        }
                    }
                    _ => {
                        if self.field.has_mine(row, col) {
                            self.cells[index] = CellStatus::Mine;
                        }
                    }
                }
            }
        }
    }

    /// Win-time transformation: every square still covered holds a mine, so
    /// flag it. Question squares are left as they are.
    fn flag_remaining(&mut self) {
        for cell in &mut self.cells {
            if *cell == CellStatus::Covered {
                *cell = CellStatus::MineGuess;
            }
        }
    }

    /// Whole-board view for a renderer, outer vector in row order.
    pub fn snapshot(&self) -> Vec<Vec<model::Cell>> {
        self.cells
            .iter()
            .map(|&status| status.into())
            .collect::<Vec<model::Cell>>()
            .chunks(self.field.num_cols())
            .map(|chunk| chunk.to_vec())
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        col + row * self.field.num_cols()
    }
}
