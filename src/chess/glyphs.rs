use shakmaty::{Color, Piece, Role};

/// Unicode chess symbol for a piece.
///
/// Light pieces use the outlined symbols and dark pieces the filled ones.
pub fn piece_glyph(piece: Piece) -> char {
    match (piece.color, piece.role) {
        (Color::White, Role::King) => '♔',
        (Color::White, Role::Queen) => '♕',
        (Color::White, Role::Rook) => '♖',
        (Color::White, Role::Bishop) => '♗',
        (Color::White, Role::Knight) => '♘',
        (Color::White, Role::Pawn) => '♙',
        (Color::Black, Role::King) => '♚',
        (Color::Black, Role::Queen) => '♛',
        (Color::Black, Role::Rook) => '♜',
        (Color::Black, Role::Bishop) => '♝',
        (Color::Black, Role::Knight) => '♞',
        (Color::Black, Role::Pawn) => '♟',
    }
}

/// Glyph for a raw FEN token; anything outside the twelve piece letters is returned as is.
pub fn token_glyph(token: char) -> char {
    Piece::from_char(token).map_or(token, piece_glyph)
}

/// Uppercase tokens belong to the light side.
pub fn is_light_token(token: char) -> bool {
    token.is_uppercase()
}
