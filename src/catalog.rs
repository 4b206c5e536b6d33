//! Static catalog of piece-set themes and piece codes.
//!
//! The catalog is fixed at build time: three chess.com themes and the
//! twelve piece codes. Nothing here is configurable or mutated.

/// A piece-set theme: a named visual style served from one base URL.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Base URL prefix; piece images live at `{base_url}/{code}.png`.
    pub base_url: &'static str,
    /// Theme name, used as the destination folder name.
    pub name: &'static str,
}

/// The three themes, in download order.
pub const THEMES: [Theme; 3] = [
    Theme {
        base_url: "https://images.chesscomfiles.com/chess-themes/pieces/classic/150",
        name: "classic",
    },
    Theme {
        base_url: "https://images.chesscomfiles.com/chess-themes/pieces/game_room/150",
        name: "club",
    },
    Theme {
        base_url: "https://assets-themes.chess.com/image/ejgfv/150",
        name: "neo",
    },
];

const COLORS: [char; 2] = ['w', 'b'];
const PIECE_TYPES: [char; 6] = ['b', 'k', 'n', 'q', 'r', 'p'];

/// All twelve piece codes, color-major: `wb`, `wk`, ... `bp`.
///
/// A code is positional: first char is the color (`w`/`b`), second the
/// piece type (bishop, king, knight, queen, rook, pawn). The letter `b`
/// doing double duty (black color, bishop type) is standard chess
/// notation, not a collision.
pub fn piece_codes() -> Vec<String> {
    COLORS
        .iter()
        .flat_map(|color| {
            PIECE_TYPES
                .iter()
                .map(move |piece| format!("{color}{piece}"))
        })
        .collect()
}
