//! Hand-drawn 7-row glyphs for the letters of DEMOS

/// Rows of a single letter, top to bottom
pub(crate) type Glyph = [&'static str; 7];

pub(crate) type GlyphSet = [(char, Glyph); 5];

/// Full-block characters
pub(crate) const BLOCK: GlyphSet = [
    (
        'D',
        [
            "███████████ ",
            "████    ████",
            "████     ███",
            "████     ███",
            "████     ███",
            "████    ████",
            "███████████ ",
        ],
    ),
    (
        'E',
        [
            "████████████",
            "████        ",
            "████        ",
            "████████████",
            "████        ",
            "████        ",
            "████████████",
        ],
    ),
    (
        'M',
        [
            "████    ████",
            "█████  █████",
            "██████ █████",
            "████ ██ ████",
            "████    ████",
            "████    ████",
            "████    ████",
        ],
    ),
    (
        'O',
        [
            " ██████████ ",
            "████    ████",
            "████    ████",
            "████    ████",
            "████    ████",
            "████    ████",
            " ██████████ ",
        ],
    ),
    (
        'S',
        [
            " ███████████",
            "████        ",
            "████        ",
            " ██████████ ",
            "        ████",
            "        ████",
            "███████████ ",
        ],
    ),
];

/// M/W characters
pub(crate) const ALTERNATIVE: GlyphSet = [
    (
        'D',
        [
            "WMMMMMMMMM  ",
            "WMM     MMW ",
            "WMM      MMW",
            "WMM      MMW",
            "WMM      MMW",
            "WMM     MMW ",
            "WMMMMMMMMM  ",
        ],
    ),
    (
        'E',
        [
            "WMMMMMMMMMMM",
            "WMM         ",
            "WMM         ",
            "WMMMMMMMMM  ",
            "WMM         ",
            "WMM         ",
            "WMMMMMMMMMMM",
        ],
    ),
    (
        'M',
        [
            "WMM      MMW",
            "WMMM    MMMW",
            "WMM MMMM MMW",
            "WMM  MM  MMW",
            "WMM      MMW",
            "WMM      MMW",
            "WMM      MMW",
        ],
    ),
    (
        'O',
        [
            " MMMMMMMMMM ",
            "MMM      MMM",
            "MMM      MMM",
            "MMM      MMM",
            "MMM      MMM",
            "MMM      MMM",
            " MMMMMMMMMM ",
        ],
    ),
    (
        'S',
        [
            " MMMMMMMMMMM",
            "MMM         ",
            "MMM         ",
            " MMMMMMMMMM ",
            "         MMM",
            "         MMM",
            "MMMMMMMMMMM ",
        ],
    ),
];

/// Mixed characters, styled after the Jules logo
pub(crate) const JULES: GlyphSet = [
    (
        'D',
        [
            "XMMMMMMMMKl ",
            "XMM     MMW ",
            "XMM      MMc",
            "XMM      MMc",
            "XMM      MMc",
            "XMM     MMW ",
            "XMMMMMMMMKl ",
        ],
    ),
    (
        'E',
        [
            "XMMMMMMMMMM0",
            "XMM         ",
            "XMM         ",
            "XMMMMMMMM0  ",
            "XMM         ",
            "XMM         ",
            "XMMMMMMMMMM0",
        ],
    ),
    (
        'M',
        [
            "XMM      MMc",
            "XMMM    MMMc",
            "XMM WMMM MMc",
            "XMM  WW  MMc",
            "XMM      MMc",
            "XMM      MMc",
            "XMM      MMc",
        ],
    ),
    (
        'O',
        [
            " 0MMMMMMMM0 ",
            "0MM      MM0",
            "0MM      MM0",
            "0MM      MM0",
            "0MM      MM0",
            "0MM      MM0",
            " 0MMMMMMMM0 ",
        ],
    ),
    (
        'S',
        [
            " KMMMMMMMM0 ",
            "KMM         ",
            "KMM         ",
            " KMMMMMMMK  ",
            "         MM0",
            "         MM0",
            " 0MMMMMMMMK ",
        ],
    ),
];
