//! International Morse code table for the Latin letters.

/// (code, letter) pairs, shorter codes first.
pub const STANDARD_TABLE: [(&str, char); 26] = [
    // level 1
    (".", 'e'),
    ("-", 't'),
    // level 2
    ("..", 'i'),
    (".-", 'a'),
    ("-.", 'n'),
    ("--", 'm'),
    // level 3
    ("...", 's'),
    ("..-", 'u'),
    (".-.", 'r'),
    (".--", 'w'),
    ("-..", 'd'),
    ("-.-", 'k'),
    ("--.", 'g'),
    ("---", 'o'),
    // level 4
    ("....", 'h'),
    ("...-", 'v'),
    ("..-.", 'f'),
    (".-..", 'l'),
    (".--.", 'p'),
    (".---", 'j'),
    ("-...", 'b'),
    ("-..-", 'x'),
    ("-.-.", 'c'),
    ("-.--", 'y'),
    ("--..", 'z'),
    ("--.-", 'q'),
];

/// In-order listing of the tree built from `STANDARD_TABLE`.
pub const STANDARD_FINGERPRINT: &str = "h s v i f u e l r a p w j  b d x n c k y t z g q m o";
