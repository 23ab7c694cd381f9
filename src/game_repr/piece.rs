#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Man,
    King,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Red,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Red,
            Self::Red => Self::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Default for Piece {
    fn default() -> Self {
        Self {
            color: Color::White,
            piece_type: Type::None,
        }
    }
}

impl Piece {
    pub fn none() -> Self {
        Self {
            color: Color::White,
            piece_type: Type::None,
        }
    }

    pub fn man(color: Color) -> Self {
        Self {
            color,
            piece_type: Type::Man,
        }
    }

    pub fn king(color: Color) -> Self {
        Self {
            color,
            piece_type: Type::King,
        }
    }

    pub fn is_none(&self) -> bool {
        self.piece_type == Type::None
    }

    pub fn is(&self, color: Color) -> bool {
        !self.is_none() && self.color == color
    }

    /// Board-character encoding used by `GameState::from_board` and `Display`:
    /// 'w'/'W' white man/king, 'r'/'R' red man/king, '.' empty.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Self::man(Color::White)),
            'W' => Some(Self::king(Color::White)),
            'r' => Some(Self::man(Color::Red)),
            'R' => Some(Self::king(Color::Red)),
            '.' => Some(Self::none()),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match (self.color, self.piece_type) {
            (_, Type::None) => '.',
            (Color::White, Type::Man) => 'w',
            (Color::White, Type::King) => 'W',
            (Color::Red, Type::Man) => 'r',
            (Color::Red, Type::King) => 'R',
        }
    }
}
