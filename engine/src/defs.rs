#[rustfmt::skip]
const BANNER: &str = r#"
        _        _                _
  _ __ | |_ __ _| |_ ___         | |
 | '_ \| __/ _` | __/ _ \ ____   | |
 | |_) | || (_| | ||  __/  __|  _| |
 | .__/ \__\__,_|\__\___|_____|/ |_|
 |_|                            |__/
"#;

pub struct About;
impl About {
    pub const NAME: &'static str = "pesto-chess";
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
    pub const SHORT_DESCRIPTION: &'static str =
        "pesto-chess is a UCI-compatible chess engine core.";
    pub const AUTHORS: &'static str = "pesto-chess contributors";
    pub const BANNER: &'static str = BANNER;
}

/// Maximum recursion depth the search is ever allowed to reach, including
/// quiescence plies. Bounds the size of tables indexed by ply (killers, PV).
pub const MAX_DEPTH: u8 = 128;

/// Maximum depth quiescence search will descend from the point it is entered,
/// regardless of how much check-extension or capture availability remains.
pub const MAX_QUIESCENCE_DEPTH: u8 = 6;
