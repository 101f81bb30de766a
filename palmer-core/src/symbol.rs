//! Tooth symbol table.
//!
//! Every symbol of the Palmer alphabet maps to a display name and an ordinal
//! rank counted from the midline. The three primary alphabets (letters, ASCII
//! Roman numerals, Unicode Roman numerals) share ranks 1..=5; permanent digits
//! use 1..=8.

/// Rank assigned to symbols outside the table. Larger than any real rank so
/// unknown symbols sort last.
pub const UNKNOWN_RANK: u8 = 99;

struct Entry {
    symbol: &'static str,
    name: &'static str,
    rank: u8,
}

const fn e(symbol: &'static str, name: &'static str, rank: u8) -> Entry {
    Entry { symbol, name, rank }
}

const PERMANENT_NAMES: [&str; 8] = [
    "中切牙",
    "侧切牙",
    "尖牙",
    "第一前磨牙",
    "第二前磨牙",
    "第一磨牙",
    "第二磨牙",
    "第三磨牙",
];

const PRIMARY_NAMES: [&str; 5] = ["乳中切牙", "乳侧切牙", "乳尖牙", "第一乳磨牙", "第二乳磨牙"];

static TABLE: [Entry; 23] = [
    // permanent
    e("1", PERMANENT_NAMES[0], 1),
    e("2", PERMANENT_NAMES[1], 2),
    e("3", PERMANENT_NAMES[2], 3),
    e("4", PERMANENT_NAMES[3], 4),
    e("5", PERMANENT_NAMES[4], 5),
    e("6", PERMANENT_NAMES[5], 6),
    e("7", PERMANENT_NAMES[6], 7),
    e("8", PERMANENT_NAMES[7], 8),
    // primary, letters
    e("A", PRIMARY_NAMES[0], 1),
    e("B", PRIMARY_NAMES[1], 2),
    e("C", PRIMARY_NAMES[2], 3),
    e("D", PRIMARY_NAMES[3], 4),
    e("E", PRIMARY_NAMES[4], 5),
    // primary, ASCII Roman
    e("I", PRIMARY_NAMES[0], 1),
    e("II", PRIMARY_NAMES[1], 2),
    e("III", PRIMARY_NAMES[2], 3),
    e("IV", PRIMARY_NAMES[3], 4),
    e("V", PRIMARY_NAMES[4], 5),
    // primary, Unicode Roman
    e("Ⅰ", PRIMARY_NAMES[0], 1),
    e("Ⅱ", PRIMARY_NAMES[1], 2),
    e("Ⅲ", PRIMARY_NAMES[2], 3),
    e("Ⅳ", PRIMARY_NAMES[3], 4),
    e("Ⅴ", PRIMARY_NAMES[4], 5),
];

fn lookup(symbol: &str) -> Option<&'static Entry> {
    let find = |s: &str| TABLE.iter().find(|en| en.symbol == s);
    find(symbol).or_else(|| {
        if symbol.bytes().any(|b| b.is_ascii_lowercase()) {
            find(&symbol.to_ascii_uppercase())
        } else {
            None
        }
    })
}

/// Display name of a tooth symbol; unknown symbols name themselves.
pub fn name_of(symbol: &str) -> &str {
    match lookup(symbol) {
        Some(en) => en.name,
        None => symbol,
    }
}

/// Ordinal rank from the midline, or [`UNKNOWN_RANK`].
pub fn rank_of(symbol: &str) -> u8 {
    lookup(symbol).map_or(UNKNOWN_RANK, |en| en.rank)
}

/// Rank of a single code point, used when decomposing raw quadrant text.
pub fn rank_of_char(c: char) -> u8 {
    let mut buf = [0u8; 4];
    rank_of(c.encode_utf8(&mut buf))
}

/// Which dentition a full-quadrant preset fills in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dentition {
    Permanent,
    Primary,
}

impl Dentition {
    /// All symbols of one quadrant, mesial first.
    pub fn full_quadrant(self) -> &'static str {
        match self {
            Dentition::Permanent => "12345678",
            Dentition::Primary => "ABCDE",
        }
    }
}
