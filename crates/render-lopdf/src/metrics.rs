//! Glyph advance widths of the standard Helvetica faces, in 1/1000 em.
//!
//! Values are taken from the Adobe core font AFM files for the printable ASCII range.
//! Accented Latin letters share the advance of their base letter in those files, so
//! they are folded before lookup.

use selo_render_core::FontWeight;

const FIRST: u32 = 32;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015,                                             // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N'..'Z'
    278, 278, 278, 469, 556, 333,                                                   // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // 'n'..'z'
    334, 260, 334, 584,                                                             // '{'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// Characters WinAnsiEncoding places in 0x80..=0x9F, with their code and their
/// Helvetica / Helvetica-Bold advances.
#[rustfmt::skip]
const WIN_ANSI_HIGH: [(char, u8, u16, u16); 27] = [
    ('€', 0x80, 556, 556), ('‚', 0x82, 222, 278), ('ƒ', 0x83, 556, 556), ('„', 0x84, 333, 500),
    ('…', 0x85, 1000, 1000), ('†', 0x86, 556, 556), ('‡', 0x87, 556, 556), ('ˆ', 0x88, 333, 333),
    ('‰', 0x89, 1000, 1000), ('Š', 0x8A, 667, 667), ('‹', 0x8B, 333, 333), ('Œ', 0x8C, 1000, 1000),
    ('Ž', 0x8E, 611, 611), ('‘', 0x91, 222, 278), ('’', 0x92, 222, 278), ('“', 0x93, 333, 500),
    ('”', 0x94, 333, 500), ('•', 0x95, 350, 350), ('–', 0x96, 556, 556), ('—', 0x97, 1000, 1000),
    ('˜', 0x98, 333, 333), ('™', 0x99, 1000, 1000), ('š', 0x9A, 500, 556), ('›', 0x9B, 333, 333),
    ('œ', 0x9C, 944, 944), ('ž', 0x9E, 500, 500), ('Ÿ', 0x9F, 667, 667),
];

fn win_ansi_high(c: char) -> Option<&'static (char, u8, u16, u16)> {
    WIN_ANSI_HIGH.iter().find(|entry| entry.0 == c)
}

/// Base letter for the accented Latin-1 letters used in Portuguese (and neighbours).
fn fold(c: char) -> char {
    match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'Ç' => 'C',
        'ç' => 'c',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ñ' => 'N',
        'ñ' => 'n',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ý' => 'Y',
        'ý' | 'ÿ' => 'y',
        'ª' => 'a',
        'º' | '°' => 'o',
        '\u{a0}' => ' ',
        other => other,
    }
}

/// Advance of a single character in 1/1000 em.
pub fn char_width(c: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    if let Some(&(_, _, regular, bold)) = win_ansi_high(c) {
        return match weight {
            FontWeight::Regular => regular,
            FontWeight::Bold => bold,
        };
    }
    let code = fold(c) as u32;
    if (FIRST..FIRST + table.len() as u32).contains(&code) {
        table[(code - FIRST) as usize]
    } else {
        // Unknown glyphs are written as '?' by the encoder.
        table[('?' as u32 - FIRST) as usize]
    }
}

/// Width of `text` in points at `size`.
pub fn text_width(text: &str, weight: FontWeight, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c, weight) as u32).sum();
    units as f32 * size / 1000.0
}

/// Encodes text for a WinAnsi simple font.
///
/// Latin-1 maps to itself apart from the C1 control range, which WinAnsi reuses for
/// typographic punctuation such as curly quotes, dashes and the euro sign. Anything
/// else becomes '?'.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match win_ansi_high(c) {
            Some(&(_, code, _, _)) => code,
            None if matches!(c as u32, 0x80..=0x9F) => b'?',
            None if (c as u32) <= 255 => c as u8,
            None => b'?',
        })
        .collect()
}
