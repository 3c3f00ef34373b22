use std::fmt;

/// Board side length. The game is played on the dark squares of a 10x10 grid.
pub const SIZE: u8 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline(always)]
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline(always)]
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Row a man of this color promotes on.
    #[inline(always)]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => SIZE - 1,
            Color::Black => 0,
        }
    }

    /// Row delta of a forward step for a man of this color.
    #[inline(always)]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Man,
    King,
}

impl PieceKind {
    #[inline(always)]
    pub const fn idx(self) -> usize {
        match self {
            PieceKind::Man => 0,
            PieceKind::King => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline(always)]
    pub const fn man(color: Color) -> Piece {
        Piece {
            color,
            kind: PieceKind::Man,
        }
    }

    #[inline(always)]
    pub const fn king(color: Color) -> Piece {
        Piece {
            color,
            kind: PieceKind::King,
        }
    }

    #[inline(always)]
    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }

    /// Upgrade a man to a king in place. Kings are unchanged.
    #[inline(always)]
    pub fn promote(&mut self) {
        self.kind = PieceKind::King;
    }

    #[inline(always)]
    pub fn is_opponent(self, other: Piece) -> bool {
        self.color != other.color
    }

    /// One-character code: 'w'/'b' for men, 'W'/'B' for kings.
    pub const fn code(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Man) => 'w',
            (Color::White, PieceKind::King) => 'W',
            (Color::Black, PieceKind::Man) => 'b',
            (Color::Black, PieceKind::King) => 'B',
        }
    }

    /// Inverse of `code`; `None` for any other character.
    pub const fn from_code(code: char) -> Option<Piece> {
        match code {
            'w' => Some(Piece::man(Color::White)),
            'W' => Some(Piece::king(Color::White)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }
}

/// A coordinate on the 10x10 board. Row 0 is White's back rank at the start;
/// row 9 is Black's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Bounds-checked constructor; `None` for coordinates off the board.
    #[inline(always)]
    pub const fn at(row: i8, col: i8) -> Option<Square> {
        if row >= 0 && row < SIZE as i8 && col >= 0 && col < SIZE as i8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::at(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// Dark squares are the playable ones.
    #[inline(always)]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Flat index for key tables.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.row as usize * SIZE as usize + self.col as usize
    }
}

/// A move from one square to another, with the squares of every piece it
/// captures. The intermediate landings of a multi-jump are implicit; only the
/// final landing square is recorded.
#[derive(Clone, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captures: Vec<Square>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            captures: Vec::new(),
        }
    }

    pub fn with_captures(from: Square, to: Square, captures: Vec<Square>) -> Move {
        Move { from, to, captures }
    }

    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

/// Captured squares compare as a set: two capture paths over the same pieces
/// to the same landing are the same move.
impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.captures.len() == other.captures.len()
            && self.captures.iter().all(|sq| other.captures.contains(sq))
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})->({},{})",
            self.from.row, self.from.col, self.to.row, self.to.col
        )?;
        if self.is_capture() {
            write!(f, " captures:")?;
            for sq in &self.captures {
                write!(f, "({},{})", sq.row, sq.col)?;
            }
        }
        Ok(())
    }
}
