//! The ASCII fold table.
//!
//! Every foldable codepoint has exactly one entry. Entries are grouped by their
//! replacement so that all variants of a letter (accented, small-capital,
//! circled, fullwidth, ...) sit next to each other. Replacements are pure ASCII
//! and at most [`MAX_FOLD_LEN`](super::MAX_FOLD_LEN) bytes long.
//!
//! `U+01E7` (LATIN SMALL LETTER G WITH CARON) folds to an uppercase `"G"`.
//! Indexes built with this table depend on that, so it stays.

use phf::{Map, phf_map};

pub static FOLD_TABLE: Map<char, &'static str> = phf_map! {
    '\u{00C0}' => "A", // LATIN CAPITAL LETTER A WITH GRAVE
    '\u{00C1}' => "A", // LATIN CAPITAL LETTER A WITH ACUTE
    '\u{00C2}' => "A", // LATIN CAPITAL LETTER A WITH CIRCUMFLEX
    '\u{00C3}' => "A", // LATIN CAPITAL LETTER A WITH TILDE
    '\u{00C4}' => "A", // LATIN CAPITAL LETTER A WITH DIAERESIS
    '\u{00C5}' => "A", // LATIN CAPITAL LETTER A WITH RING ABOVE
    '\u{0100}' => "A", // LATIN CAPITAL LETTER A WITH MACRON
    '\u{0102}' => "A", // LATIN CAPITAL LETTER A WITH BREVE
    '\u{0104}' => "A", // LATIN CAPITAL LETTER A WITH OGONEK
    '\u{018F}' => "A", // LATIN CAPITAL LETTER SCHWA
    '\u{01CD}' => "A", // LATIN CAPITAL LETTER A WITH CARON
    '\u{01DE}' => "A", // LATIN CAPITAL LETTER A WITH DIAERESIS AND MACRON
    '\u{01E0}' => "A", // LATIN CAPITAL LETTER A WITH DOT ABOVE AND MACRON
    '\u{01FA}' => "A", // LATIN CAPITAL LETTER A WITH RING ABOVE AND ACUTE
    '\u{0200}' => "A", // LATIN CAPITAL LETTER A WITH DOUBLE GRAVE
    '\u{0202}' => "A", // LATIN CAPITAL LETTER A WITH INVERTED BREVE
    '\u{0226}' => "A", // LATIN CAPITAL LETTER A WITH DOT ABOVE
    '\u{023A}' => "A", // LATIN CAPITAL LETTER A WITH STROKE
    '\u{1D00}' => "A", // LATIN LETTER SMALL CAPITAL A
    '\u{1E00}' => "A", // LATIN CAPITAL LETTER A WITH RING BELOW
    '\u{1EA0}' => "A", // LATIN CAPITAL LETTER A WITH DOT BELOW
    '\u{1EA2}' => "A", // LATIN CAPITAL LETTER A WITH HOOK ABOVE
    '\u{1EA4}' => "A", // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND ACUTE
    '\u{1EA6}' => "A", // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND GRAVE
    '\u{1EA8}' => "A", // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND HOOK ABOVE
    '\u{1EAA}' => "A", // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND TILDE
    '\u{1EAC}' => "A", // LATIN CAPITAL LETTER A WITH CIRCUMFLEX AND DOT BELOW
    '\u{1EAE}' => "A", // LATIN CAPITAL LETTER A WITH BREVE AND ACUTE
    '\u{1EB0}' => "A", // LATIN CAPITAL LETTER A WITH BREVE AND GRAVE
    '\u{1EB2}' => "A", // LATIN CAPITAL LETTER A WITH BREVE AND HOOK ABOVE
    '\u{1EB4}' => "A", // LATIN CAPITAL LETTER A WITH BREVE AND TILDE
    '\u{1EB6}' => "A", // LATIN CAPITAL LETTER A WITH BREVE AND DOT BELOW
    '\u{24B6}' => "A", // CIRCLED LATIN CAPITAL LETTER A
    '\u{FF21}' => "A", // FULLWIDTH LATIN CAPITAL LETTER A

    '\u{00E0}' => "a", // LATIN SMALL LETTER A WITH GRAVE
    '\u{00E1}' => "a", // LATIN SMALL LETTER A WITH ACUTE
    '\u{00E2}' => "a", // LATIN SMALL LETTER A WITH CIRCUMFLEX
    '\u{00E3}' => "a", // LATIN SMALL LETTER A WITH TILDE
    '\u{00E4}' => "a", // LATIN SMALL LETTER A WITH DIAERESIS
    '\u{00E5}' => "a", // LATIN SMALL LETTER A WITH RING ABOVE
    '\u{0101}' => "a", // LATIN SMALL LETTER A WITH MACRON
    '\u{0103}' => "a", // LATIN SMALL LETTER A WITH BREVE
    '\u{0105}' => "a", // LATIN SMALL LETTER A WITH OGONEK
    '\u{01CE}' => "a", // LATIN SMALL LETTER A WITH CARON
    '\u{01DF}' => "a", // LATIN SMALL LETTER A WITH DIAERESIS AND MACRON
    '\u{01E1}' => "a", // LATIN SMALL LETTER A WITH DOT ABOVE AND MACRON
    '\u{01FB}' => "a", // LATIN SMALL LETTER A WITH RING ABOVE AND ACUTE
    '\u{0201}' => "a", // LATIN SMALL LETTER A WITH DOUBLE GRAVE
    '\u{0203}' => "a", // LATIN SMALL LETTER A WITH INVERTED BREVE
    '\u{0227}' => "a", // LATIN SMALL LETTER A WITH DOT ABOVE
    '\u{0250}' => "a", // LATIN SMALL LETTER TURNED A
    '\u{0259}' => "a", // LATIN SMALL LETTER SCHWA
    '\u{025A}' => "a", // LATIN SMALL LETTER SCHWA WITH HOOK
    '\u{1D8F}' => "a", // LATIN SMALL LETTER A WITH RETROFLEX HOOK
    '\u{1D95}' => "a", // LATIN SMALL LETTER SCHWA WITH RETROFLEX HOOK
    '\u{1E01}' => "a", // LATIN SMALL LETTER A WITH RING BELOW
    '\u{1E9A}' => "a", // LATIN SMALL LETTER A WITH RIGHT HALF RING
    '\u{1EA1}' => "a", // LATIN SMALL LETTER A WITH DOT BELOW
    '\u{1EA3}' => "a", // LATIN SMALL LETTER A WITH HOOK ABOVE
    '\u{1EA5}' => "a", // LATIN SMALL LETTER A WITH CIRCUMFLEX AND ACUTE
    '\u{1EA7}' => "a", // LATIN SMALL LETTER A WITH CIRCUMFLEX AND GRAVE
    '\u{1EA9}' => "a", // LATIN SMALL LETTER A WITH CIRCUMFLEX AND HOOK ABOVE
    '\u{1EAB}' => "a", // LATIN SMALL LETTER A WITH CIRCUMFLEX AND TILDE
    '\u{1EAD}' => "a", // LATIN SMALL LETTER A WITH CIRCUMFLEX AND DOT BELOW
    '\u{1EAF}' => "a", // LATIN SMALL LETTER A WITH BREVE AND ACUTE
    '\u{1EB1}' => "a", // LATIN SMALL LETTER A WITH BREVE AND GRAVE
    '\u{1EB3}' => "a", // LATIN SMALL LETTER A WITH BREVE AND HOOK ABOVE
    '\u{1EB5}' => "a", // LATIN SMALL LETTER A WITH BREVE AND TILDE
    '\u{1EB7}' => "a", // LATIN SMALL LETTER A WITH BREVE AND DOT BELOW
    '\u{2090}' => "a", // LATIN SUBSCRIPT SMALL LETTER A
    '\u{2094}' => "a", // LATIN SUBSCRIPT SMALL LETTER SCHWA
    '\u{24D0}' => "a", // CIRCLED LATIN SMALL LETTER A
    '\u{2C65}' => "a", // LATIN SMALL LETTER A WITH STROKE
    '\u{2C6F}' => "a", // LATIN CAPITAL LETTER TURNED A
    '\u{FF41}' => "a", // FULLWIDTH LATIN SMALL LETTER A

    '\u{A732}' => "AA", // LATIN CAPITAL LETTER AA

    '\u{00C6}' => "AE", // LATIN CAPITAL LETTER AE
    '\u{01E2}' => "AE", // LATIN CAPITAL LETTER AE WITH MACRON
    '\u{01FC}' => "AE", // LATIN CAPITAL LETTER AE WITH ACUTE
    '\u{1D01}' => "AE", // LATIN LETTER SMALL CAPITAL AE

    '\u{A734}' => "AO", // LATIN CAPITAL LETTER AO

    '\u{A736}' => "AU", // LATIN CAPITAL LETTER AU

    '\u{A738}' => "AV", // LATIN CAPITAL LETTER AV
    '\u{A73A}' => "AV", // LATIN CAPITAL LETTER AV WITH HORIZONTAL BAR

    '\u{A73C}' => "AY", // LATIN CAPITAL LETTER AY

    '\u{249C}' => "(a)", // PARENTHESIZED LATIN SMALL LETTER A

    '\u{A733}' => "aa", // LATIN SMALL LETTER AA

    '\u{00E6}' => "ae", // LATIN SMALL LETTER AE
    '\u{01E3}' => "ae", // LATIN SMALL LETTER AE WITH MACRON
    '\u{01FD}' => "ae", // LATIN SMALL LETTER AE WITH ACUTE
    '\u{1D02}' => "ae", // LATIN SMALL LETTER TURNED AE

    '\u{A735}' => "ao", // LATIN SMALL LETTER AO

    '\u{A737}' => "au", // LATIN SMALL LETTER AU

    '\u{A739}' => "av", // LATIN SMALL LETTER AV
    '\u{A73B}' => "av", // LATIN SMALL LETTER AV WITH HORIZONTAL BAR

    '\u{A73D}' => "ay", // LATIN SMALL LETTER AY

    '\u{0181}' => "B", // LATIN CAPITAL LETTER B WITH HOOK
    '\u{0182}' => "B", // LATIN CAPITAL LETTER B WITH TOPBAR
    '\u{0243}' => "B", // LATIN CAPITAL LETTER B WITH STROKE
    '\u{0299}' => "B", // LATIN LETTER SMALL CAPITAL B
    '\u{1D03}' => "B", // LATIN LETTER SMALL CAPITAL BARRED B
    '\u{1E02}' => "B", // LATIN CAPITAL LETTER B WITH DOT ABOVE
    '\u{1E04}' => "B", // LATIN CAPITAL LETTER B WITH DOT BELOW
    '\u{1E06}' => "B", // LATIN CAPITAL LETTER B WITH LINE BELOW
    '\u{24B7}' => "B", // CIRCLED LATIN CAPITAL LETTER B
    '\u{FF22}' => "B", // FULLWIDTH LATIN CAPITAL LETTER B

    '\u{0180}' => "b", // LATIN SMALL LETTER B WITH STROKE
    '\u{0183}' => "b", // LATIN SMALL LETTER B WITH TOPBAR
    '\u{0253}' => "b", // LATIN SMALL LETTER B WITH HOOK
    '\u{1D6C}' => "b", // LATIN SMALL LETTER B WITH MIDDLE TILDE
    '\u{1D80}' => "b", // LATIN SMALL LETTER B WITH PALATAL HOOK
    '\u{1E03}' => "b", // LATIN SMALL LETTER B WITH DOT ABOVE
    '\u{1E05}' => "b", // LATIN SMALL LETTER B WITH DOT BELOW
    '\u{1E07}' => "b", // LATIN SMALL LETTER B WITH LINE BELOW
    '\u{24D1}' => "b", // CIRCLED LATIN SMALL LETTER B
    '\u{FF42}' => "b", // FULLWIDTH LATIN SMALL LETTER B

    '\u{249D}' => "(b)", // PARENTHESIZED LATIN SMALL LETTER B

    '\u{00C7}' => "C", // LATIN CAPITAL LETTER C WITH CEDILLA
    '\u{0106}' => "C", // LATIN CAPITAL LETTER C WITH ACUTE
    '\u{0108}' => "C", // LATIN CAPITAL LETTER C WITH CIRCUMFLEX
    '\u{010A}' => "C", // LATIN CAPITAL LETTER C WITH DOT ABOVE
    '\u{010C}' => "C", // LATIN CAPITAL LETTER C WITH CARON
    '\u{0187}' => "C", // LATIN CAPITAL LETTER C WITH HOOK
    '\u{023B}' => "C", // LATIN CAPITAL LETTER C WITH STROKE
    '\u{0297}' => "C", // LATIN LETTER STRETCHED C
    '\u{1D04}' => "C", // LATIN LETTER SMALL CAPITAL C
    '\u{1E08}' => "C", // LATIN CAPITAL LETTER C WITH CEDILLA AND ACUTE
    '\u{24B8}' => "C", // CIRCLED LATIN CAPITAL LETTER C
    '\u{FF23}' => "C", // FULLWIDTH LATIN CAPITAL LETTER C

    '\u{00E7}' => "c", // LATIN SMALL LETTER C WITH CEDILLA
    '\u{0107}' => "c", // LATIN SMALL LETTER C WITH ACUTE
    '\u{0109}' => "c", // LATIN SMALL LETTER C WITH CIRCUMFLEX
    '\u{010B}' => "c", // LATIN SMALL LETTER C WITH DOT ABOVE
    '\u{010D}' => "c", // LATIN SMALL LETTER C WITH CARON
    '\u{0188}' => "c", // LATIN SMALL LETTER C WITH HOOK
    '\u{023C}' => "c", // LATIN SMALL LETTER C WITH STROKE
    '\u{0255}' => "c", // LATIN SMALL LETTER C WITH CURL
    '\u{1E09}' => "c", // LATIN SMALL LETTER C WITH CEDILLA AND ACUTE
    '\u{2184}' => "c", // LATIN SMALL LETTER REVERSED C
    '\u{24D2}' => "c", // CIRCLED LATIN SMALL LETTER C
    '\u{A73E}' => "c", // LATIN CAPITAL LETTER REVERSED C WITH DOT
    '\u{A73F}' => "c", // LATIN SMALL LETTER REVERSED C WITH DOT
    '\u{FF43}' => "c", // FULLWIDTH LATIN SMALL LETTER C

    '\u{249E}' => "(c)", // PARENTHESIZED LATIN SMALL LETTER C

    '\u{00D0}' => "D", // LATIN CAPITAL LETTER ETH
    '\u{010E}' => "D", // LATIN CAPITAL LETTER D WITH CARON
    '\u{0110}' => "D", // LATIN CAPITAL LETTER D WITH STROKE
    '\u{0189}' => "D", // LATIN CAPITAL LETTER AFRICAN D
    '\u{018A}' => "D", // LATIN CAPITAL LETTER D WITH HOOK
    '\u{018B}' => "D", // LATIN CAPITAL LETTER D WITH TOPBAR
    '\u{1D05}' => "D", // LATIN LETTER SMALL CAPITAL D
    '\u{1D06}' => "D", // LATIN LETTER SMALL CAPITAL ETH
    '\u{1E0A}' => "D", // LATIN CAPITAL LETTER D WITH DOT ABOVE
    '\u{1E0C}' => "D", // LATIN CAPITAL LETTER D WITH DOT BELOW
    '\u{1E0E}' => "D", // LATIN CAPITAL LETTER D WITH LINE BELOW
    '\u{1E10}' => "D", // LATIN CAPITAL LETTER D WITH CEDILLA
    '\u{1E12}' => "D", // LATIN CAPITAL LETTER D WITH CIRCUMFLEX BELOW
    '\u{24B9}' => "D", // CIRCLED LATIN CAPITAL LETTER D
    '\u{A779}' => "D", // LATIN CAPITAL LETTER INSULAR D
    '\u{FF24}' => "D", // FULLWIDTH LATIN CAPITAL LETTER D

    '\u{00F0}' => "d", // LATIN SMALL LETTER ETH
    '\u{010F}' => "d", // LATIN SMALL LETTER D WITH CARON
    '\u{0111}' => "d", // LATIN SMALL LETTER D WITH STROKE
    '\u{018C}' => "d", // LATIN SMALL LETTER D WITH TOPBAR
    '\u{0221}' => "d", // LATIN SMALL LETTER D WITH CURL
    '\u{0256}' => "d", // LATIN SMALL LETTER D WITH TAIL
    '\u{0257}' => "d", // LATIN SMALL LETTER D WITH HOOK
    '\u{1D6D}' => "d", // LATIN SMALL LETTER D WITH MIDDLE TILDE
    '\u{1D81}' => "d", // LATIN SMALL LETTER D WITH PALATAL HOOK
    '\u{1D91}' => "d", // LATIN SMALL LETTER D WITH HOOK AND TAIL
    '\u{1E0B}' => "d", // LATIN SMALL LETTER D WITH DOT ABOVE
    '\u{1E0D}' => "d", // LATIN SMALL LETTER D WITH DOT BELOW
    '\u{1E0F}' => "d", // LATIN SMALL LETTER D WITH LINE BELOW
    '\u{1E11}' => "d", // LATIN SMALL LETTER D WITH CEDILLA
    '\u{1E13}' => "d", // LATIN SMALL LETTER D WITH CIRCUMFLEX BELOW
    '\u{24D3}' => "d", // CIRCLED LATIN SMALL LETTER D
    '\u{A77A}' => "d", // LATIN SMALL LETTER INSULAR D
    '\u{FF44}' => "d", // FULLWIDTH LATIN SMALL LETTER D

    '\u{01C4}' => "DZ", // LATIN CAPITAL LETTER DZ WITH CARON
    '\u{01F1}' => "DZ", // LATIN CAPITAL LETTER DZ

    '\u{01C5}' => "Dz", // LATIN CAPITAL LETTER D WITH SMALL LETTER Z WITH CARON
    '\u{01F2}' => "Dz", // LATIN CAPITAL LETTER D WITH SMALL LETTER Z

    '\u{249F}' => "(d)", // PARENTHESIZED LATIN SMALL LETTER D

    '\u{0238}' => "db", // LATIN SMALL LETTER DB DIGRAPH

    '\u{01C6}' => "dz", // LATIN SMALL LETTER DZ WITH CARON
    '\u{01F3}' => "dz", // LATIN SMALL LETTER DZ
    '\u{02A3}' => "dz", // LATIN SMALL LETTER DZ DIGRAPH
    '\u{02A5}' => "dz", // LATIN SMALL LETTER DZ DIGRAPH WITH CURL

    '\u{00C8}' => "E", // LATIN CAPITAL LETTER E WITH GRAVE
    '\u{00C9}' => "E", // LATIN CAPITAL LETTER E WITH ACUTE
    '\u{00CA}' => "E", // LATIN CAPITAL LETTER E WITH CIRCUMFLEX
    '\u{00CB}' => "E", // LATIN CAPITAL LETTER E WITH DIAERESIS
    '\u{0112}' => "E", // LATIN CAPITAL LETTER E WITH MACRON
    '\u{0114}' => "E", // LATIN CAPITAL LETTER E WITH BREVE
    '\u{0116}' => "E", // LATIN CAPITAL LETTER E WITH DOT ABOVE
    '\u{0118}' => "E", // LATIN CAPITAL LETTER E WITH OGONEK
    '\u{011A}' => "E", // LATIN CAPITAL LETTER E WITH CARON
    '\u{018E}' => "E", // LATIN CAPITAL LETTER REVERSED E
    '\u{0190}' => "E", // LATIN CAPITAL LETTER OPEN E
    '\u{0204}' => "E", // LATIN CAPITAL LETTER E WITH DOUBLE GRAVE
    '\u{0206}' => "E", // LATIN CAPITAL LETTER E WITH INVERTED BREVE
    '\u{0228}' => "E", // LATIN CAPITAL LETTER E WITH CEDILLA
    '\u{0246}' => "E", // LATIN CAPITAL LETTER E WITH STROKE
    '\u{1D07}' => "E", // LATIN LETTER SMALL CAPITAL E
    '\u{1E14}' => "E", // LATIN CAPITAL LETTER E WITH MACRON AND GRAVE
    '\u{1E16}' => "E", // LATIN CAPITAL LETTER E WITH MACRON AND ACUTE
    '\u{1E18}' => "E", // LATIN CAPITAL LETTER E WITH CIRCUMFLEX BELOW
    '\u{1E1A}' => "E", // LATIN CAPITAL LETTER E WITH TILDE BELOW
    '\u{1E1C}' => "E", // LATIN CAPITAL LETTER E WITH CEDILLA AND BREVE
    '\u{1EB8}' => "E", // LATIN CAPITAL LETTER E WITH DOT BELOW
    '\u{1EBA}' => "E", // LATIN CAPITAL LETTER E WITH HOOK ABOVE
    '\u{1EBC}' => "E", // LATIN CAPITAL LETTER E WITH TILDE
    '\u{1EBE}' => "E", // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND ACUTE
    '\u{1EC0}' => "E", // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND GRAVE
    '\u{1EC2}' => "E", // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND HOOK ABOVE
    '\u{1EC4}' => "E", // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND TILDE
    '\u{1EC6}' => "E", // LATIN CAPITAL LETTER E WITH CIRCUMFLEX AND DOT BELOW
    '\u{24BA}' => "E", // CIRCLED LATIN CAPITAL LETTER E
    '\u{2C7B}' => "E", // LATIN LETTER SMALL CAPITAL TURNED E
    '\u{FF25}' => "E", // FULLWIDTH LATIN CAPITAL LETTER E

    '\u{00E8}' => "e", // LATIN SMALL LETTER E WITH GRAVE
    '\u{00E9}' => "e", // LATIN SMALL LETTER E WITH ACUTE
    '\u{00EA}' => "e", // LATIN SMALL LETTER E WITH CIRCUMFLEX
    '\u{00EB}' => "e", // LATIN SMALL LETTER E WITH DIAERESIS
    '\u{0113}' => "e", // LATIN SMALL LETTER E WITH MACRON
    '\u{0115}' => "e", // LATIN SMALL LETTER E WITH BREVE
    '\u{0117}' => "e", // LATIN SMALL LETTER E WITH DOT ABOVE
    '\u{0119}' => "e", // LATIN SMALL LETTER E WITH OGONEK
    '\u{011B}' => "e", // LATIN SMALL LETTER E WITH CARON
    '\u{01DD}' => "e", // LATIN SMALL LETTER TURNED E
    '\u{0205}' => "e", // LATIN SMALL LETTER E WITH DOUBLE GRAVE
    '\u{0207}' => "e", // LATIN SMALL LETTER E WITH INVERTED BREVE
    '\u{0229}' => "e", // LATIN SMALL LETTER E WITH CEDILLA
    '\u{0247}' => "e", // LATIN SMALL LETTER E WITH STROKE
    '\u{0258}' => "e", // LATIN SMALL LETTER REVERSED E
    '\u{025B}' => "e", // LATIN SMALL LETTER OPEN E
    '\u{025C}' => "e", // LATIN SMALL LETTER REVERSED OPEN E
    '\u{025D}' => "e", // LATIN SMALL LETTER REVERSED OPEN E WITH HOOK
    '\u{025E}' => "e", // LATIN SMALL LETTER CLOSED REVERSED OPEN E
    '\u{029A}' => "e", // LATIN SMALL LETTER CLOSED OPEN E
    '\u{1D08}' => "e", // LATIN SMALL LETTER TURNED OPEN E
    '\u{1D92}' => "e", // LATIN SMALL LETTER E WITH RETROFLEX HOOK
    '\u{1D93}' => "e", // LATIN SMALL LETTER OPEN E WITH RETROFLEX HOOK
    '\u{1D94}' => "e", // LATIN SMALL LETTER REVERSED OPEN E WITH RETROFLEX HOOK
    '\u{1E15}' => "e", // LATIN SMALL LETTER E WITH MACRON AND GRAVE
    '\u{1E17}' => "e", // LATIN SMALL LETTER E WITH MACRON AND ACUTE
    '\u{1E19}' => "e", // LATIN SMALL LETTER E WITH CIRCUMFLEX BELOW
    '\u{1E1B}' => "e", // LATIN SMALL LETTER E WITH TILDE BELOW
    '\u{1E1D}' => "e", // LATIN SMALL LETTER E WITH CEDILLA AND BREVE
    '\u{1EB9}' => "e", // LATIN SMALL LETTER E WITH DOT BELOW
    '\u{1EBB}' => "e", // LATIN SMALL LETTER E WITH HOOK ABOVE
    '\u{1EBD}' => "e", // LATIN SMALL LETTER E WITH TILDE
    '\u{1EBF}' => "e", // LATIN SMALL LETTER E WITH CIRCUMFLEX AND ACUTE
    '\u{1EC1}' => "e", // LATIN SMALL LETTER E WITH CIRCUMFLEX AND GRAVE
    '\u{1EC3}' => "e", // LATIN SMALL LETTER E WITH CIRCUMFLEX AND HOOK ABOVE
    '\u{1EC5}' => "e", // LATIN SMALL LETTER E WITH CIRCUMFLEX AND TILDE
    '\u{1EC7}' => "e", // LATIN SMALL LETTER E WITH CIRCUMFLEX AND DOT BELOW
    '\u{2091}' => "e", // LATIN SUBSCRIPT SMALL LETTER E
    '\u{24D4}' => "e", // CIRCLED LATIN SMALL LETTER E
    '\u{2C78}' => "e", // LATIN SMALL LETTER E WITH NOTCH
    '\u{FF45}' => "e", // FULLWIDTH LATIN SMALL LETTER E

    '\u{24A0}' => "(e)", // PARENTHESIZED LATIN SMALL LETTER E

    '\u{0191}' => "F", // LATIN CAPITAL LETTER F WITH HOOK
    '\u{1E1E}' => "F", // LATIN CAPITAL LETTER F WITH DOT ABOVE
    '\u{24BB}' => "F", // CIRCLED LATIN CAPITAL LETTER F
    '\u{A730}' => "F", // LATIN LETTER SMALL CAPITAL F
    '\u{A77B}' => "F", // LATIN CAPITAL LETTER INSULAR F
    '\u{A7FB}' => "F", // LATIN EPIGRAPHIC LETTER REVERSED F
    '\u{FF26}' => "F", // FULLWIDTH LATIN CAPITAL LETTER F

    '\u{0192}' => "f", // LATIN SMALL LETTER F WITH HOOK
    '\u{1D6E}' => "f", // LATIN SMALL LETTER F WITH MIDDLE TILDE
    '\u{1D82}' => "f", // LATIN SMALL LETTER F WITH PALATAL HOOK
    '\u{1E1F}' => "f", // LATIN SMALL LETTER F WITH DOT ABOVE
    '\u{1E9B}' => "f", // LATIN SMALL LETTER LONG S WITH DOT ABOVE
    '\u{24D5}' => "f", // CIRCLED LATIN SMALL LETTER F
    '\u{A77C}' => "f", // LATIN SMALL LETTER INSULAR F
    '\u{FF46}' => "f", // FULLWIDTH LATIN SMALL LETTER F

    '\u{24A1}' => "(f)", // PARENTHESIZED LATIN SMALL LETTER F

    '\u{FB00}' => "ff", // LATIN SMALL LIGATURE FF

    '\u{FB03}' => "ffi", // LATIN SMALL LIGATURE FFI

    '\u{FB04}' => "ffl", // LATIN SMALL LIGATURE FFL

    '\u{FB01}' => "fi", // LATIN SMALL LIGATURE FI

    '\u{FB02}' => "fl", // LATIN SMALL LIGATURE FL

    '\u{011C}' => "G", // LATIN CAPITAL LETTER G WITH CIRCUMFLEX
    '\u{011E}' => "G", // LATIN CAPITAL LETTER G WITH BREVE
    '\u{0120}' => "G", // LATIN CAPITAL LETTER G WITH DOT ABOVE
    '\u{0122}' => "G", // LATIN CAPITAL LETTER G WITH CEDILLA
    '\u{0193}' => "G", // LATIN CAPITAL LETTER G WITH HOOK
    '\u{01E4}' => "G", // LATIN CAPITAL LETTER G WITH STROKE
    '\u{01E5}' => "G", // LATIN SMALL LETTER G WITH STROKE
    '\u{01E6}' => "G", // LATIN CAPITAL LETTER G WITH CARON
    '\u{01E7}' => "G", // LATIN SMALL LETTER G WITH CARON
    '\u{01F4}' => "G", // LATIN CAPITAL LETTER G WITH ACUTE
    '\u{0262}' => "G", // LATIN LETTER SMALL CAPITAL G
    '\u{029B}' => "G", // LATIN LETTER SMALL CAPITAL G WITH HOOK
    '\u{1E20}' => "G", // LATIN CAPITAL LETTER G WITH MACRON
    '\u{24BC}' => "G", // CIRCLED LATIN CAPITAL LETTER G
    '\u{A77D}' => "G", // LATIN CAPITAL LETTER INSULAR G
    '\u{A77E}' => "G", // LATIN CAPITAL LETTER TURNED INSULAR G
    '\u{FF27}' => "G", // FULLWIDTH LATIN CAPITAL LETTER G

    '\u{011D}' => "g", // LATIN SMALL LETTER G WITH CIRCUMFLEX
    '\u{011F}' => "g", // LATIN SMALL LETTER G WITH BREVE
    '\u{0121}' => "g", // LATIN SMALL LETTER G WITH DOT ABOVE
    '\u{0123}' => "g", // LATIN SMALL LETTER G WITH CEDILLA
    '\u{01F5}' => "g", // LATIN SMALL LETTER G WITH ACUTE
    '\u{0260}' => "g", // LATIN SMALL LETTER G WITH HOOK
    '\u{0261}' => "g", // LATIN SMALL LETTER SCRIPT G
    '\u{1D77}' => "g", // LATIN SMALL LETTER TURNED G
    '\u{1D79}' => "g", // LATIN SMALL LETTER INSULAR G
    '\u{1D83}' => "g", // LATIN SMALL LETTER G WITH PALATAL HOOK
    '\u{1E21}' => "g", // LATIN SMALL LETTER G WITH MACRON
    '\u{24D6}' => "g", // CIRCLED LATIN SMALL LETTER G
    '\u{A77F}' => "g", // LATIN SMALL LETTER TURNED INSULAR G
    '\u{FF47}' => "g", // FULLWIDTH LATIN SMALL LETTER G

    '\u{24A2}' => "(g)", // PARENTHESIZED LATIN SMALL LETTER G

    '\u{0124}' => "H", // LATIN CAPITAL LETTER H WITH CIRCUMFLEX
    '\u{0126}' => "H", // LATIN CAPITAL LETTER H WITH STROKE
    '\u{021E}' => "H", // LATIN CAPITAL LETTER H WITH CARON
    '\u{029C}' => "H", // LATIN LETTER SMALL CAPITAL H
    '\u{1E22}' => "H", // LATIN CAPITAL LETTER H WITH DOT ABOVE
    '\u{1E24}' => "H", // LATIN CAPITAL LETTER H WITH DOT BELOW
    '\u{1E26}' => "H", // LATIN CAPITAL LETTER H WITH DIAERESIS
    '\u{1E28}' => "H", // LATIN CAPITAL LETTER H WITH CEDILLA
    '\u{1E2A}' => "H", // LATIN CAPITAL LETTER H WITH BREVE BELOW
    '\u{24BD}' => "H", // CIRCLED LATIN CAPITAL LETTER H
    '\u{2C67}' => "H", // LATIN CAPITAL LETTER H WITH DESCENDER
    '\u{2C75}' => "H", // LATIN CAPITAL LETTER HALF H
    '\u{FF28}' => "H", // FULLWIDTH LATIN CAPITAL LETTER H

    '\u{0125}' => "h", // LATIN SMALL LETTER H WITH CIRCUMFLEX
    '\u{0127}' => "h", // LATIN SMALL LETTER H WITH STROKE
    '\u{021F}' => "h", // LATIN SMALL LETTER H WITH CARON
    '\u{0265}' => "h", // LATIN SMALL LETTER TURNED H
    '\u{0266}' => "h", // LATIN SMALL LETTER H WITH HOOK
    '\u{02AE}' => "h", // LATIN SMALL LETTER TURNED H WITH FISHHOOK
    '\u{02AF}' => "h", // LATIN SMALL LETTER TURNED H WITH FISHHOOK AND TAIL
    '\u{1E23}' => "h", // LATIN SMALL LETTER H WITH DOT ABOVE
    '\u{1E25}' => "h", // LATIN SMALL LETTER H WITH DOT BELOW
    '\u{1E27}' => "h", // LATIN SMALL LETTER H WITH DIAERESIS
    '\u{1E29}' => "h", // LATIN SMALL LETTER H WITH CEDILLA
    '\u{1E2B}' => "h", // LATIN SMALL LETTER H WITH BREVE BELOW
    '\u{1E96}' => "h", // LATIN SMALL LETTER H WITH LINE BELOW
    '\u{24D7}' => "h", // CIRCLED LATIN SMALL LETTER H
    '\u{2C68}' => "h", // LATIN SMALL LETTER H WITH DESCENDER
    '\u{2C76}' => "h", // LATIN SMALL LETTER HALF H
    '\u{FF48}' => "h", // FULLWIDTH LATIN SMALL LETTER H

    '\u{01F6}' => "HV", // LATIN CAPITAL LETTER HWAIR

    '\u{24A3}' => "(h)", // PARENTHESIZED LATIN SMALL LETTER H

    '\u{0195}' => "hv", // LATIN SMALL LETTER HV

    '\u{00CC}' => "I", // LATIN CAPITAL LETTER I WITH GRAVE
    '\u{00CD}' => "I", // LATIN CAPITAL LETTER I WITH ACUTE
    '\u{00CE}' => "I", // LATIN CAPITAL LETTER I WITH CIRCUMFLEX
    '\u{00CF}' => "I", // LATIN CAPITAL LETTER I WITH DIAERESIS
    '\u{0128}' => "I", // LATIN CAPITAL LETTER I WITH TILDE
    '\u{012A}' => "I", // LATIN CAPITAL LETTER I WITH MACRON
    '\u{012C}' => "I", // LATIN CAPITAL LETTER I WITH BREVE
    '\u{012E}' => "I", // LATIN CAPITAL LETTER I WITH OGONEK
    '\u{0130}' => "I", // LATIN CAPITAL LETTER I WITH DOT ABOVE
    '\u{0196}' => "I", // LATIN CAPITAL LETTER IOTA
    '\u{0197}' => "I", // LATIN CAPITAL LETTER I WITH STROKE
    '\u{01CF}' => "I", // LATIN CAPITAL LETTER I WITH CARON
    '\u{0208}' => "I", // LATIN CAPITAL LETTER I WITH DOUBLE GRAVE
    '\u{020A}' => "I", // LATIN CAPITAL LETTER I WITH INVERTED BREVE
    '\u{026A}' => "I", // LATIN LETTER SMALL CAPITAL I
    '\u{1D7B}' => "I", // LATIN SMALL CAPITAL LETTER I WITH STROKE
    '\u{1E2C}' => "I", // LATIN CAPITAL LETTER I WITH TILDE BELOW
    '\u{1E2E}' => "I", // LATIN CAPITAL LETTER I WITH DIAERESIS AND ACUTE
    '\u{1EC8}' => "I", // LATIN CAPITAL LETTER I WITH HOOK ABOVE
    '\u{1ECA}' => "I", // LATIN CAPITAL LETTER I WITH DOT BELOW
    '\u{24BE}' => "I", // CIRCLED LATIN CAPITAL LETTER I
    '\u{A7FE}' => "I", // LATIN EPIGRAPHIC LETTER I LONGA
    '\u{FF29}' => "I", // FULLWIDTH LATIN CAPITAL LETTER I

    '\u{00EC}' => "i", // LATIN SMALL LETTER I WITH GRAVE
    '\u{00ED}' => "i", // LATIN SMALL LETTER I WITH ACUTE
    '\u{00EE}' => "i", // LATIN SMALL LETTER I WITH CIRCUMFLEX
    '\u{00EF}' => "i", // LATIN SMALL LETTER I WITH DIAERESIS
    '\u{0129}' => "i", // LATIN SMALL LETTER I WITH TILDE
    '\u{012B}' => "i", // LATIN SMALL LETTER I WITH MACRON
    '\u{012D}' => "i", // LATIN SMALL LETTER I WITH BREVE
    '\u{012F}' => "i", // LATIN SMALL LETTER I WITH OGONEK
    '\u{0131}' => "i", // LATIN SMALL LETTER DOTLESS I
    '\u{01D0}' => "i", // LATIN SMALL LETTER I WITH CARON
    '\u{0209}' => "i", // LATIN SMALL LETTER I WITH DOUBLE GRAVE
    '\u{020B}' => "i", // LATIN SMALL LETTER I WITH INVERTED BREVE
    '\u{0268}' => "i", // LATIN SMALL LETTER I WITH STROKE
    '\u{1D09}' => "i", // LATIN SMALL LETTER TURNED I
    '\u{1D62}' => "i", // LATIN SUBSCRIPT SMALL LETTER I
    '\u{1D7C}' => "i", // LATIN SMALL LETTER IOTA WITH STROKE
    '\u{1D96}' => "i", // LATIN SMALL LETTER I WITH RETROFLEX HOOK
    '\u{1E2D}' => "i", // LATIN SMALL LETTER I WITH TILDE BELOW
    '\u{1E2F}' => "i", // LATIN SMALL LETTER I WITH DIAERESIS AND ACUTE
    '\u{1EC9}' => "i", // LATIN SMALL LETTER I WITH HOOK ABOVE
    '\u{1ECB}' => "i", // LATIN SMALL LETTER I WITH DOT BELOW
    '\u{2071}' => "i", // SUPERSCRIPT LATIN SMALL LETTER I
    '\u{24D8}' => "i", // CIRCLED LATIN SMALL LETTER I
    '\u{FF49}' => "i", // FULLWIDTH LATIN SMALL LETTER I

    '\u{0132}' => "IJ", // LATIN CAPITAL LIGATURE IJ

    '\u{24A4}' => "(i)", // PARENTHESIZED LATIN SMALL LETTER I

    '\u{0133}' => "ij", // LATIN SMALL LIGATURE IJ

    '\u{0134}' => "J", // LATIN CAPITAL LETTER J WITH CIRCUMFLEX
    '\u{0248}' => "J", // LATIN CAPITAL LETTER J WITH STROKE
    '\u{1D0A}' => "J", // LATIN LETTER SMALL CAPITAL J
    '\u{24BF}' => "J", // CIRCLED LATIN CAPITAL LETTER J
    '\u{FF2A}' => "J", // FULLWIDTH LATIN CAPITAL LETTER J

    '\u{0135}' => "j", // LATIN SMALL LETTER J WITH CIRCUMFLEX
    '\u{01F0}' => "j", // LATIN SMALL LETTER J WITH CARON
    '\u{0237}' => "j", // LATIN SMALL LETTER DOTLESS J
    '\u{0249}' => "j", // LATIN SMALL LETTER J WITH STROKE
    '\u{025F}' => "j", // LATIN SMALL LETTER DOTLESS J WITH STROKE
    '\u{0284}' => "j", // LATIN SMALL LETTER DOTLESS J WITH STROKE AND HOOK
    '\u{029D}' => "j", // LATIN SMALL LETTER J WITH CROSSED-TAIL
    '\u{24D9}' => "j", // CIRCLED LATIN SMALL LETTER J
    '\u{2C7C}' => "j", // LATIN SUBSCRIPT SMALL LETTER J
    '\u{FF4A}' => "j", // FULLWIDTH LATIN SMALL LETTER J

    '\u{24A5}' => "(j)", // PARENTHESIZED LATIN SMALL LETTER J

    '\u{0136}' => "K", // LATIN CAPITAL LETTER K WITH CEDILLA
    '\u{0198}' => "K", // LATIN CAPITAL LETTER K WITH HOOK
    '\u{01E8}' => "K", // LATIN CAPITAL LETTER K WITH CARON
    '\u{1D0B}' => "K", // LATIN LETTER SMALL CAPITAL K
    '\u{1E30}' => "K", // LATIN CAPITAL LETTER K WITH ACUTE
    '\u{1E32}' => "K", // LATIN CAPITAL LETTER K WITH DOT BELOW
    '\u{1E34}' => "K", // LATIN CAPITAL LETTER K WITH LINE BELOW
    '\u{24C0}' => "K", // CIRCLED LATIN CAPITAL LETTER K
    '\u{2C69}' => "K", // LATIN CAPITAL LETTER K WITH DESCENDER
    '\u{A740}' => "K", // LATIN CAPITAL LETTER K WITH STROKE
    '\u{A742}' => "K", // LATIN CAPITAL LETTER K WITH DIAGONAL STROKE
    '\u{A744}' => "K", // LATIN CAPITAL LETTER K WITH STROKE AND DIAGONAL STROKE
    '\u{FF2B}' => "K", // FULLWIDTH LATIN CAPITAL LETTER K

    '\u{0137}' => "k", // LATIN SMALL LETTER K WITH CEDILLA
    '\u{0199}' => "k", // LATIN SMALL LETTER K WITH HOOK
    '\u{01E9}' => "k", // LATIN SMALL LETTER K WITH CARON
    '\u{029E}' => "k", // LATIN SMALL LETTER TURNED K
    '\u{1D84}' => "k", // LATIN SMALL LETTER K WITH PALATAL HOOK
    '\u{1E31}' => "k", // LATIN SMALL LETTER K WITH ACUTE
    '\u{1E33}' => "k", // LATIN SMALL LETTER K WITH DOT BELOW
    '\u{1E35}' => "k", // LATIN SMALL LETTER K WITH LINE BELOW
    '\u{24DA}' => "k", // CIRCLED LATIN SMALL LETTER K
    '\u{2C6A}' => "k", // LATIN SMALL LETTER K WITH DESCENDER
    '\u{A741}' => "k", // LATIN SMALL LETTER K WITH STROKE
    '\u{A743}' => "k", // LATIN SMALL LETTER K WITH DIAGONAL STROKE
    '\u{A745}' => "k", // LATIN SMALL LETTER K WITH STROKE AND DIAGONAL STROKE
    '\u{FF4B}' => "k", // FULLWIDTH LATIN SMALL LETTER K

    '\u{24A6}' => "(k)", // PARENTHESIZED LATIN SMALL LETTER K

    '\u{0139}' => "L", // LATIN CAPITAL LETTER L WITH ACUTE
    '\u{013B}' => "L", // LATIN CAPITAL LETTER L WITH CEDILLA
    '\u{013D}' => "L", // LATIN CAPITAL LETTER L WITH CARON
    '\u{013F}' => "L", // LATIN CAPITAL LETTER L WITH MIDDLE DOT
    '\u{0141}' => "L", // LATIN CAPITAL LETTER L WITH STROKE
    '\u{023D}' => "L", // LATIN CAPITAL LETTER L WITH BAR
    '\u{029F}' => "L", // LATIN LETTER SMALL CAPITAL L
    '\u{1D0C}' => "L", // LATIN LETTER SMALL CAPITAL L WITH STROKE
    '\u{1E36}' => "L", // LATIN CAPITAL LETTER L WITH DOT BELOW
    '\u{1E38}' => "L", // LATIN CAPITAL LETTER L WITH DOT BELOW AND MACRON
    '\u{1E3A}' => "L", // LATIN CAPITAL LETTER L WITH LINE BELOW
    '\u{1E3C}' => "L", // LATIN CAPITAL LETTER L WITH CIRCUMFLEX BELOW
    '\u{24C1}' => "L", // CIRCLED LATIN CAPITAL LETTER L
    '\u{2C60}' => "L", // LATIN CAPITAL LETTER L WITH DOUBLE BAR
    '\u{2C62}' => "L", // LATIN CAPITAL LETTER L WITH MIDDLE TILDE
    '\u{A746}' => "L", // LATIN CAPITAL LETTER BROKEN L
    '\u{A748}' => "L", // LATIN CAPITAL LETTER L WITH HIGH STROKE
    '\u{A780}' => "L", // LATIN CAPITAL LETTER TURNED L
    '\u{FF2C}' => "L", // FULLWIDTH LATIN CAPITAL LETTER L

    '\u{013A}' => "l", // LATIN SMALL LETTER L WITH ACUTE
    '\u{013C}' => "l", // LATIN SMALL LETTER L WITH CEDILLA
    '\u{013E}' => "l", // LATIN SMALL LETTER L WITH CARON
    '\u{0140}' => "l", // LATIN SMALL LETTER L WITH MIDDLE DOT
    '\u{0142}' => "l", // LATIN SMALL LETTER L WITH STROKE
    '\u{019A}' => "l", // LATIN SMALL LETTER L WITH BAR
    '\u{0234}' => "l", // LATIN SMALL LETTER L WITH CURL
    '\u{026B}' => "l", // LATIN SMALL LETTER L WITH MIDDLE TILDE
    '\u{026C}' => "l", // LATIN SMALL LETTER L WITH BELT
    '\u{026D}' => "l", // LATIN SMALL LETTER L WITH RETROFLEX HOOK
    '\u{1D85}' => "l", // LATIN SMALL LETTER L WITH PALATAL HOOK
    '\u{1E37}' => "l", // LATIN SMALL LETTER L WITH DOT BELOW
    '\u{1E39}' => "l", // LATIN SMALL LETTER L WITH DOT BELOW AND MACRON
    '\u{1E3B}' => "l", // LATIN SMALL LETTER L WITH LINE BELOW
    '\u{1E3D}' => "l", // LATIN SMALL LETTER L WITH CIRCUMFLEX BELOW
    '\u{24DB}' => "l", // CIRCLED LATIN SMALL LETTER L
    '\u{2C61}' => "l", // LATIN SMALL LETTER L WITH DOUBLE BAR
    '\u{A747}' => "l", // LATIN SMALL LETTER BROKEN L
    '\u{A749}' => "l", // LATIN SMALL LETTER L WITH HIGH STROKE
    '\u{A781}' => "l", // LATIN SMALL LETTER TURNED L
    '\u{FF4C}' => "l", // FULLWIDTH LATIN SMALL LETTER L

    '\u{01C7}' => "LJ", // LATIN CAPITAL LETTER LJ

    '\u{1EFA}' => "LL", // LATIN CAPITAL LETTER MIDDLE-WELSH LL

    '\u{01C8}' => "Lj", // LATIN CAPITAL LETTER L WITH SMALL LETTER J

    '\u{24A7}' => "(l)", // PARENTHESIZED LATIN SMALL LETTER L

    '\u{01C9}' => "lj", // LATIN SMALL LETTER LJ

    '\u{1EFB}' => "ll", // LATIN SMALL LETTER MIDDLE-WELSH LL

    '\u{02AA}' => "ls", // LATIN SMALL LETTER LS DIGRAPH

    '\u{02AB}' => "lz", // LATIN SMALL LETTER LZ DIGRAPH

    '\u{019C}' => "M", // LATIN CAPITAL LETTER TURNED M
    '\u{1D0D}' => "M", // LATIN LETTER SMALL CAPITAL M
    '\u{1E3E}' => "M", // LATIN CAPITAL LETTER M WITH ACUTE
    '\u{1E40}' => "M", // LATIN CAPITAL LETTER M WITH DOT ABOVE
    '\u{1E42}' => "M", // LATIN CAPITAL LETTER M WITH DOT BELOW
    '\u{24C2}' => "M", // CIRCLED LATIN CAPITAL LETTER M
    '\u{2C6E}' => "M", // LATIN CAPITAL LETTER M WITH HOOK
    '\u{A7FD}' => "M", // LATIN EPIGRAPHIC LETTER INVERTED M
    '\u{A7FF}' => "M", // LATIN EPIGRAPHIC LETTER ARCHAIC M
    '\u{FF2D}' => "M", // FULLWIDTH LATIN CAPITAL LETTER M

    '\u{026F}' => "m", // LATIN SMALL LETTER TURNED M
    '\u{0270}' => "m", // LATIN SMALL LETTER TURNED M WITH LONG LEG
    '\u{0271}' => "m", // LATIN SMALL LETTER M WITH HOOK
    '\u{1D6F}' => "m", // LATIN SMALL LETTER M WITH MIDDLE TILDE
    '\u{1D86}' => "m", // LATIN SMALL LETTER M WITH PALATAL HOOK
    '\u{1E3F}' => "m", // LATIN SMALL LETTER M WITH ACUTE
    '\u{1E41}' => "m", // LATIN SMALL LETTER M WITH DOT ABOVE
    '\u{1E43}' => "m", // LATIN SMALL LETTER M WITH DOT BELOW
    '\u{24DC}' => "m", // CIRCLED LATIN SMALL LETTER M
    '\u{FF4D}' => "m", // FULLWIDTH LATIN SMALL LETTER M

    '\u{24A8}' => "(m)", // PARENTHESIZED LATIN SMALL LETTER M

    '\u{00D1}' => "N", // LATIN CAPITAL LETTER N WITH TILDE
    '\u{0143}' => "N", // LATIN CAPITAL LETTER N WITH ACUTE
    '\u{0145}' => "N", // LATIN CAPITAL LETTER N WITH CEDILLA
    '\u{0147}' => "N", // LATIN CAPITAL LETTER N WITH CARON
    '\u{014A}' => "N", // LATIN CAPITAL LETTER ENG
    '\u{019D}' => "N", // LATIN CAPITAL LETTER N WITH LEFT HOOK
    '\u{01F8}' => "N", // LATIN CAPITAL LETTER N WITH GRAVE
    '\u{0220}' => "N", // LATIN CAPITAL LETTER N WITH LONG RIGHT LEG
    '\u{0274}' => "N", // LATIN LETTER SMALL CAPITAL N
    '\u{1D0E}' => "N", // LATIN LETTER SMALL CAPITAL REVERSED N
    '\u{1E44}' => "N", // LATIN CAPITAL LETTER N WITH DOT ABOVE
    '\u{1E46}' => "N", // LATIN CAPITAL LETTER N WITH DOT BELOW
    '\u{1E48}' => "N", // LATIN CAPITAL LETTER N WITH LINE BELOW
    '\u{1E4A}' => "N", // LATIN CAPITAL LETTER N WITH CIRCUMFLEX BELOW
    '\u{24C3}' => "N", // CIRCLED LATIN CAPITAL LETTER N
    '\u{FF2E}' => "N", // FULLWIDTH LATIN CAPITAL LETTER N

    '\u{00F1}' => "n", // LATIN SMALL LETTER N WITH TILDE
    '\u{0144}' => "n", // LATIN SMALL LETTER N WITH ACUTE
    '\u{0146}' => "n", // LATIN SMALL LETTER N WITH CEDILLA
    '\u{0148}' => "n", // LATIN SMALL LETTER N WITH CARON
    '\u{0149}' => "n", // LATIN SMALL LETTER N PRECEDED BY APOSTROPHE
    '\u{014B}' => "n", // LATIN SMALL LETTER ENG
    '\u{019E}' => "n", // LATIN SMALL LETTER N WITH LONG RIGHT LEG
    '\u{01F9}' => "n", // LATIN SMALL LETTER N WITH GRAVE
    '\u{0235}' => "n", // LATIN SMALL LETTER N WITH CURL
    '\u{0272}' => "n", // LATIN SMALL LETTER N WITH LEFT HOOK
    '\u{0273}' => "n", // LATIN SMALL LETTER N WITH RETROFLEX HOOK
    '\u{1D70}' => "n", // LATIN SMALL LETTER N WITH MIDDLE TILDE
    '\u{1D87}' => "n", // LATIN SMALL LETTER N WITH PALATAL HOOK
    '\u{1E45}' => "n", // LATIN SMALL LETTER N WITH DOT ABOVE
    '\u{1E47}' => "n", // LATIN SMALL LETTER N WITH DOT BELOW
    '\u{1E49}' => "n", // LATIN SMALL LETTER N WITH LINE BELOW
    '\u{1E4B}' => "n", // LATIN SMALL LETTER N WITH CIRCUMFLEX BELOW
    '\u{207F}' => "n", // SUPERSCRIPT LATIN SMALL LETTER N
    '\u{24DD}' => "n", // CIRCLED LATIN SMALL LETTER N
    '\u{FF4E}' => "n", // FULLWIDTH LATIN SMALL LETTER N

    '\u{01CA}' => "NJ", // LATIN CAPITAL LETTER NJ

    '\u{01CB}' => "Nj", // LATIN CAPITAL LETTER N WITH SMALL LETTER J

    '\u{24A9}' => "(n)", // PARENTHESIZED LATIN SMALL LETTER N

    '\u{01CC}' => "nj", // LATIN SMALL LETTER NJ

    '\u{00D2}' => "O", // LATIN CAPITAL LETTER O WITH GRAVE
    '\u{00D3}' => "O", // LATIN CAPITAL LETTER O WITH ACUTE
    '\u{00D4}' => "O", // LATIN CAPITAL LETTER O WITH CIRCUMFLEX
    '\u{00D5}' => "O", // LATIN CAPITAL LETTER O WITH TILDE
    '\u{00D6}' => "O", // LATIN CAPITAL LETTER O WITH DIAERESIS
    '\u{00D8}' => "O", // LATIN CAPITAL LETTER O WITH STROKE
    '\u{014C}' => "O", // LATIN CAPITAL LETTER O WITH MACRON
    '\u{014E}' => "O", // LATIN CAPITAL LETTER O WITH BREVE
    '\u{0150}' => "O", // LATIN CAPITAL LETTER O WITH DOUBLE ACUTE
    '\u{0186}' => "O", // LATIN CAPITAL LETTER OPEN O
    '\u{019F}' => "O", // LATIN CAPITAL LETTER O WITH MIDDLE TILDE
    '\u{01A0}' => "O", // LATIN CAPITAL LETTER O WITH HORN
    '\u{01D1}' => "O", // LATIN CAPITAL LETTER O WITH CARON
    '\u{01EA}' => "O", // LATIN CAPITAL LETTER O WITH OGONEK
    '\u{01EC}' => "O", // LATIN CAPITAL LETTER O WITH OGONEK AND MACRON
    '\u{01FE}' => "O", // LATIN CAPITAL LETTER O WITH STROKE AND ACUTE
    '\u{020C}' => "O", // LATIN CAPITAL LETTER O WITH DOUBLE GRAVE
    '\u{020E}' => "O", // LATIN CAPITAL LETTER O WITH INVERTED BREVE
    '\u{022A}' => "O", // LATIN CAPITAL LETTER O WITH DIAERESIS AND MACRON
    '\u{022C}' => "O", // LATIN CAPITAL LETTER O WITH TILDE AND MACRON
    '\u{022E}' => "O", // LATIN CAPITAL LETTER O WITH DOT ABOVE
    '\u{0230}' => "O", // LATIN CAPITAL LETTER O WITH DOT ABOVE AND MACRON
    '\u{1D0F}' => "O", // LATIN LETTER SMALL CAPITAL O
    '\u{1D10}' => "O", // LATIN LETTER SMALL CAPITAL OPEN O
    '\u{1E4C}' => "O", // LATIN CAPITAL LETTER O WITH TILDE AND ACUTE
    '\u{1E4E}' => "O", // LATIN CAPITAL LETTER O WITH TILDE AND DIAERESIS
    '\u{1E50}' => "O", // LATIN CAPITAL LETTER O WITH MACRON AND GRAVE
    '\u{1E52}' => "O", // LATIN CAPITAL LETTER O WITH MACRON AND ACUTE
    '\u{1ECC}' => "O", // LATIN CAPITAL LETTER O WITH DOT BELOW
    '\u{1ECE}' => "O", // LATIN CAPITAL LETTER O WITH HOOK ABOVE
    '\u{1ED0}' => "O", // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND ACUTE
    '\u{1ED2}' => "O", // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND GRAVE
    '\u{1ED4}' => "O", // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND HOOK ABOVE
    '\u{1ED6}' => "O", // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND TILDE
    '\u{1ED8}' => "O", // LATIN CAPITAL LETTER O WITH CIRCUMFLEX AND DOT BELOW
    '\u{1EDA}' => "O", // LATIN CAPITAL LETTER O WITH HORN AND ACUTE
    '\u{1EDC}' => "O", // LATIN CAPITAL LETTER O WITH HORN AND GRAVE
    '\u{1EDE}' => "O", // LATIN CAPITAL LETTER O WITH HORN AND HOOK ABOVE
    '\u{1EE0}' => "O", // LATIN CAPITAL LETTER O WITH HORN AND TILDE
    '\u{1EE2}' => "O", // LATIN CAPITAL LETTER O WITH HORN AND DOT BELOW
    '\u{24C4}' => "O", // CIRCLED LATIN CAPITAL LETTER O
    '\u{A74A}' => "O", // LATIN CAPITAL LETTER O WITH LONG STROKE OVERLAY
    '\u{A74C}' => "O", // LATIN CAPITAL LETTER O WITH LOOP
    '\u{FF2F}' => "O", // FULLWIDTH LATIN CAPITAL LETTER O

    '\u{00F2}' => "o", // LATIN SMALL LETTER O WITH GRAVE
    '\u{00F3}' => "o", // LATIN SMALL LETTER O WITH ACUTE
    '\u{00F4}' => "o", // LATIN SMALL LETTER O WITH CIRCUMFLEX
    '\u{00F5}' => "o", // LATIN SMALL LETTER O WITH TILDE
    '\u{00F6}' => "o", // LATIN SMALL LETTER O WITH DIAERESIS
    '\u{00F8}' => "o", // LATIN SMALL LETTER O WITH STROKE
    '\u{014D}' => "o", // LATIN SMALL LETTER O WITH MACRON
    '\u{014F}' => "o", // LATIN SMALL LETTER O WITH BREVE
    '\u{0151}' => "o", // LATIN SMALL LETTER O WITH DOUBLE ACUTE
    '\u{01A1}' => "o", // LATIN SMALL LETTER O WITH HORN
    '\u{01D2}' => "o", // LATIN SMALL LETTER O WITH CARON
    '\u{01EB}' => "o", // LATIN SMALL LETTER O WITH OGONEK
    '\u{01ED}' => "o", // LATIN SMALL LETTER O WITH OGONEK AND MACRON
    '\u{01FF}' => "o", // LATIN SMALL LETTER O WITH STROKE AND ACUTE
    '\u{020D}' => "o", // LATIN SMALL LETTER O WITH DOUBLE GRAVE
    '\u{020F}' => "o", // LATIN SMALL LETTER O WITH INVERTED BREVE
    '\u{022B}' => "o", // LATIN SMALL LETTER O WITH DIAERESIS AND MACRON
    '\u{022D}' => "o", // LATIN SMALL LETTER O WITH TILDE AND MACRON
    '\u{022F}' => "o", // LATIN SMALL LETTER O WITH DOT ABOVE
    '\u{0231}' => "o", // LATIN SMALL LETTER O WITH DOT ABOVE AND MACRON
    '\u{0254}' => "o", // LATIN SMALL LETTER OPEN O
    '\u{0275}' => "o", // LATIN SMALL LETTER BARRED O
    '\u{1D16}' => "o", // LATIN SMALL LETTER TOP HALF O
    '\u{1D17}' => "o", // LATIN SMALL LETTER BOTTOM HALF O
    '\u{1D97}' => "o", // LATIN SMALL LETTER OPEN O WITH RETROFLEX HOOK
    '\u{1E4D}' => "o", // LATIN SMALL LETTER O WITH TILDE AND ACUTE
    '\u{1E4F}' => "o", // LATIN SMALL LETTER O WITH TILDE AND DIAERESIS
    '\u{1E51}' => "o", // LATIN SMALL LETTER O WITH MACRON AND GRAVE
    '\u{1E53}' => "o", // LATIN SMALL LETTER O WITH MACRON AND ACUTE
    '\u{1ECD}' => "o", // LATIN SMALL LETTER O WITH DOT BELOW
    '\u{1ECF}' => "o", // LATIN SMALL LETTER O WITH HOOK ABOVE
    '\u{1ED1}' => "o", // LATIN SMALL LETTER O WITH CIRCUMFLEX AND ACUTE
    '\u{1ED3}' => "o", // LATIN SMALL LETTER O WITH CIRCUMFLEX AND GRAVE
    '\u{1ED5}' => "o", // LATIN SMALL LETTER O WITH CIRCUMFLEX AND HOOK ABOVE
    '\u{1ED7}' => "o", // LATIN SMALL LETTER O WITH CIRCUMFLEX AND TILDE
    '\u{1ED9}' => "o", // LATIN SMALL LETTER O WITH CIRCUMFLEX AND DOT BELOW
    '\u{1EDB}' => "o", // LATIN SMALL LETTER O WITH HORN AND ACUTE
    '\u{1EDD}' => "o", // LATIN SMALL LETTER O WITH HORN AND GRAVE
    '\u{1EDF}' => "o", // LATIN SMALL LETTER O WITH HORN AND HOOK ABOVE
    '\u{1EE1}' => "o", // LATIN SMALL LETTER O WITH HORN AND TILDE
    '\u{1EE3}' => "o", // LATIN SMALL LETTER O WITH HORN AND DOT BELOW
    '\u{2092}' => "o", // LATIN SUBSCRIPT SMALL LETTER O
    '\u{24DE}' => "o", // CIRCLED LATIN SMALL LETTER O
    '\u{2C7A}' => "o", // LATIN SMALL LETTER O WITH LOW RING INSIDE
    '\u{A74B}' => "o", // LATIN SMALL LETTER O WITH LONG STROKE OVERLAY
    '\u{A74D}' => "o", // LATIN SMALL LETTER O WITH LOOP
    '\u{FF4F}' => "o", // FULLWIDTH LATIN SMALL LETTER O

    '\u{0152}' => "OE", // LATIN CAPITAL LIGATURE OE
    '\u{0276}' => "OE", // LATIN LETTER SMALL CAPITAL OE

    '\u{A74E}' => "OO", // LATIN CAPITAL LETTER OO

    '\u{0222}' => "OU", // LATIN CAPITAL LETTER OU
    '\u{1D15}' => "OU", // LATIN LETTER SMALL CAPITAL OU

    '\u{24AA}' => "(o)", // PARENTHESIZED LATIN SMALL LETTER O

    '\u{0153}' => "oe", // LATIN SMALL LIGATURE OE
    '\u{1D14}' => "oe", // LATIN SMALL LETTER TURNED OE

    '\u{A74F}' => "oo", // LATIN SMALL LETTER OO

    '\u{0223}' => "ou", // LATIN SMALL LETTER OU

    '\u{01A4}' => "P", // LATIN CAPITAL LETTER P WITH HOOK
    '\u{1D18}' => "P", // LATIN LETTER SMALL CAPITAL P
    '\u{1E54}' => "P", // LATIN CAPITAL LETTER P WITH ACUTE
    '\u{1E56}' => "P", // LATIN CAPITAL LETTER P WITH DOT ABOVE
    '\u{24C5}' => "P", // CIRCLED LATIN CAPITAL LETTER P
    '\u{2C63}' => "P", // LATIN CAPITAL LETTER P WITH STROKE
    '\u{A750}' => "P", // LATIN CAPITAL LETTER P WITH STROKE THROUGH DESCENDER
    '\u{A752}' => "P", // LATIN CAPITAL LETTER P WITH FLOURISH
    '\u{A754}' => "P", // LATIN CAPITAL LETTER P WITH SQUIRREL TAIL
    '\u{FF30}' => "P", // FULLWIDTH LATIN CAPITAL LETTER P

    '\u{01A5}' => "p", // LATIN SMALL LETTER P WITH HOOK
    '\u{1D71}' => "p", // LATIN SMALL LETTER P WITH MIDDLE TILDE
    '\u{1D7D}' => "p", // LATIN SMALL LETTER P WITH STROKE
    '\u{1D88}' => "p", // LATIN SMALL LETTER P WITH PALATAL HOOK
    '\u{1E55}' => "p", // LATIN SMALL LETTER P WITH ACUTE
    '\u{1E57}' => "p", // LATIN SMALL LETTER P WITH DOT ABOVE
    '\u{24DF}' => "p", // CIRCLED LATIN SMALL LETTER P
    '\u{A751}' => "p", // LATIN SMALL LETTER P WITH STROKE THROUGH DESCENDER
    '\u{A753}' => "p", // LATIN SMALL LETTER P WITH FLOURISH
    '\u{A755}' => "p", // LATIN SMALL LETTER P WITH SQUIRREL TAIL
    '\u{A7FC}' => "p", // LATIN EPIGRAPHIC LETTER REVERSED P
    '\u{FF50}' => "p", // FULLWIDTH LATIN SMALL LETTER P

    '\u{24AB}' => "(p)", // PARENTHESIZED LATIN SMALL LETTER P

    '\u{024A}' => "Q", // LATIN CAPITAL LETTER SMALL Q WITH HOOK TAIL
    '\u{24C6}' => "Q", // CIRCLED LATIN CAPITAL LETTER Q
    '\u{A756}' => "Q", // LATIN CAPITAL LETTER Q WITH STROKE THROUGH DESCENDER
    '\u{A758}' => "Q", // LATIN CAPITAL LETTER Q WITH DIAGONAL STROKE
    '\u{FF31}' => "Q", // FULLWIDTH LATIN CAPITAL LETTER Q

    '\u{0138}' => "q", // LATIN SMALL LETTER KRA
    '\u{024B}' => "q", // LATIN SMALL LETTER Q WITH HOOK TAIL
    '\u{02A0}' => "q", // LATIN SMALL LETTER Q WITH HOOK
    '\u{24E0}' => "q", // CIRCLED LATIN SMALL LETTER Q
    '\u{A757}' => "q", // LATIN SMALL LETTER Q WITH STROKE THROUGH DESCENDER
    '\u{A759}' => "q", // LATIN SMALL LETTER Q WITH DIAGONAL STROKE
    '\u{FF51}' => "q", // FULLWIDTH LATIN SMALL LETTER Q

    '\u{24AC}' => "(q)", // PARENTHESIZED LATIN SMALL LETTER Q

    '\u{0239}' => "qp", // LATIN SMALL LETTER QP DIGRAPH

    '\u{0154}' => "R", // LATIN CAPITAL LETTER R WITH ACUTE
    '\u{0156}' => "R", // LATIN CAPITAL LETTER R WITH CEDILLA
    '\u{0158}' => "R", // LATIN CAPITAL LETTER R WITH CARON
    '\u{0210}' => "R", // LATIN CAPITAL LETTER R WITH DOUBLE GRAVE
    '\u{0212}' => "R", // LATIN CAPITAL LETTER R WITH INVERTED BREVE
    '\u{024C}' => "R", // LATIN CAPITAL LETTER R WITH STROKE
    '\u{0280}' => "R", // LATIN LETTER SMALL CAPITAL R
    '\u{0281}' => "R", // LATIN LETTER SMALL CAPITAL INVERTED R
    '\u{1D19}' => "R", // LATIN LETTER SMALL CAPITAL REVERSED R
    '\u{1D1A}' => "R", // LATIN LETTER SMALL CAPITAL TURNED R
    '\u{1E58}' => "R", // LATIN CAPITAL LETTER R WITH DOT ABOVE
    '\u{1E5A}' => "R", // LATIN CAPITAL LETTER R WITH DOT BELOW
    '\u{1E5C}' => "R", // LATIN CAPITAL LETTER R WITH DOT BELOW AND MACRON
    '\u{1E5E}' => "R", // LATIN CAPITAL LETTER R WITH LINE BELOW
    '\u{24C7}' => "R", // CIRCLED LATIN CAPITAL LETTER R
    '\u{2C64}' => "R", // LATIN CAPITAL LETTER R WITH TAIL
    '\u{A75A}' => "R", // LATIN CAPITAL LETTER R ROTUNDA
    '\u{A782}' => "R", // LATIN CAPITAL LETTER INSULAR R
    '\u{FF32}' => "R", // FULLWIDTH LATIN CAPITAL LETTER R

    '\u{0155}' => "r", // LATIN SMALL LETTER R WITH ACUTE
    '\u{0157}' => "r", // LATIN SMALL LETTER R WITH CEDILLA
    '\u{0159}' => "r", // LATIN SMALL LETTER R WITH CARON
    '\u{0211}' => "r", // LATIN SMALL LETTER R WITH DOUBLE GRAVE
    '\u{0213}' => "r", // LATIN SMALL LETTER R WITH INVERTED BREVE
    '\u{024D}' => "r", // LATIN SMALL LETTER R WITH STROKE
    '\u{027C}' => "r", // LATIN SMALL LETTER R WITH LONG LEG
    '\u{027D}' => "r", // LATIN SMALL LETTER R WITH TAIL
    '\u{027E}' => "r", // LATIN SMALL LETTER R WITH FISHHOOK
    '\u{027F}' => "r", // LATIN SMALL LETTER REVERSED R WITH FISHHOOK
    '\u{1D63}' => "r", // LATIN SUBSCRIPT SMALL LETTER R
    '\u{1D72}' => "r", // LATIN SMALL LETTER R WITH MIDDLE TILDE
    '\u{1D73}' => "r", // LATIN SMALL LETTER R WITH FISHHOOK AND MIDDLE TILDE
    '\u{1D89}' => "r", // LATIN SMALL LETTER R WITH PALATAL HOOK
    '\u{1E59}' => "r", // LATIN SMALL LETTER R WITH DOT ABOVE
    '\u{1E5B}' => "r", // LATIN SMALL LETTER R WITH DOT BELOW
    '\u{1E5D}' => "r", // LATIN SMALL LETTER R WITH DOT BELOW AND MACRON
    '\u{1E5F}' => "r", // LATIN SMALL LETTER R WITH LINE BELOW
    '\u{24E1}' => "r", // CIRCLED LATIN SMALL LETTER R
    '\u{A75B}' => "r", // LATIN SMALL LETTER R ROTUNDA
    '\u{A783}' => "r", // LATIN SMALL LETTER INSULAR R
    '\u{FF52}' => "r", // FULLWIDTH LATIN SMALL LETTER R

    '\u{24AD}' => "(r)", // PARENTHESIZED LATIN SMALL LETTER R

    '\u{015A}' => "S", // LATIN CAPITAL LETTER S WITH ACUTE
    '\u{015C}' => "S", // LATIN CAPITAL LETTER S WITH CIRCUMFLEX
    '\u{015E}' => "S", // LATIN CAPITAL LETTER S WITH CEDILLA
    '\u{0160}' => "S", // LATIN CAPITAL LETTER S WITH CARON
    '\u{0218}' => "S", // LATIN CAPITAL LETTER S WITH COMMA BELOW
    '\u{1E60}' => "S", // LATIN CAPITAL LETTER S WITH DOT ABOVE
    '\u{1E62}' => "S", // LATIN CAPITAL LETTER S WITH DOT BELOW
    '\u{1E64}' => "S", // LATIN CAPITAL LETTER S WITH ACUTE AND DOT ABOVE
    '\u{1E66}' => "S", // LATIN CAPITAL LETTER S WITH CARON AND DOT ABOVE
    '\u{1E68}' => "S", // LATIN CAPITAL LETTER S WITH DOT BELOW AND DOT ABOVE
    '\u{24C8}' => "S", // CIRCLED LATIN CAPITAL LETTER S
    '\u{A731}' => "S", // LATIN LETTER SMALL CAPITAL S
    '\u{A785}' => "S", // LATIN SMALL LETTER INSULAR S
    '\u{FF33}' => "S", // FULLWIDTH LATIN CAPITAL LETTER S

    '\u{015B}' => "s", // LATIN SMALL LETTER S WITH ACUTE
    '\u{015D}' => "s", // LATIN SMALL LETTER S WITH CIRCUMFLEX
    '\u{015F}' => "s", // LATIN SMALL LETTER S WITH CEDILLA
    '\u{0161}' => "s", // LATIN SMALL LETTER S WITH CARON
    '\u{017F}' => "s", // LATIN SMALL LETTER LONG S
    '\u{0219}' => "s", // LATIN SMALL LETTER S WITH COMMA BELOW
    '\u{023F}' => "s", // LATIN SMALL LETTER S WITH SWASH TAIL
    '\u{0282}' => "s", // LATIN SMALL LETTER S WITH HOOK
    '\u{1D74}' => "s", // LATIN SMALL LETTER S WITH MIDDLE TILDE
    '\u{1D8A}' => "s", // LATIN SMALL LETTER S WITH PALATAL HOOK
    '\u{1E61}' => "s", // LATIN SMALL LETTER S WITH DOT ABOVE
    '\u{1E63}' => "s", // LATIN SMALL LETTER S WITH DOT BELOW
    '\u{1E65}' => "s", // LATIN SMALL LETTER S WITH ACUTE AND DOT ABOVE
    '\u{1E67}' => "s", // LATIN SMALL LETTER S WITH CARON AND DOT ABOVE
    '\u{1E69}' => "s", // LATIN SMALL LETTER S WITH DOT BELOW AND DOT ABOVE
    '\u{1E9C}' => "s", // LATIN SMALL LETTER LONG S WITH DIAGONAL STROKE
    '\u{1E9D}' => "s", // LATIN SMALL LETTER LONG S WITH HIGH STROKE
    '\u{24E2}' => "s", // CIRCLED LATIN SMALL LETTER S
    '\u{A784}' => "s", // LATIN CAPITAL LETTER INSULAR S
    '\u{FF53}' => "s", // FULLWIDTH LATIN SMALL LETTER S

    '\u{1E9E}' => "SS", // LATIN CAPITAL LETTER SHARP S

    '\u{24AE}' => "(s)", // PARENTHESIZED LATIN SMALL LETTER S

    '\u{00DF}' => "ss", // LATIN SMALL LETTER SHARP S

    '\u{FB06}' => "st", // LATIN SMALL LIGATURE ST

    '\u{0162}' => "T", // LATIN CAPITAL LETTER T WITH CEDILLA
    '\u{0164}' => "T", // LATIN CAPITAL LETTER T WITH CARON
    '\u{0166}' => "T", // LATIN CAPITAL LETTER T WITH STROKE
    '\u{01AC}' => "T", // LATIN CAPITAL LETTER T WITH HOOK
    '\u{01AE}' => "T", // LATIN CAPITAL LETTER T WITH RETROFLEX HOOK
    '\u{021A}' => "T", // LATIN CAPITAL LETTER T WITH COMMA BELOW
    '\u{023E}' => "T", // LATIN CAPITAL LETTER T WITH DIAGONAL STROKE
    '\u{1D1B}' => "T", // LATIN LETTER SMALL CAPITAL T
    '\u{1E6A}' => "T", // LATIN CAPITAL LETTER T WITH DOT ABOVE
    '\u{1E6C}' => "T", // LATIN CAPITAL LETTER T WITH DOT BELOW
    '\u{1E6E}' => "T", // LATIN CAPITAL LETTER T WITH LINE BELOW
    '\u{1E70}' => "T", // LATIN CAPITAL LETTER T WITH CIRCUMFLEX BELOW
    '\u{24C9}' => "T", // CIRCLED LATIN CAPITAL LETTER T
    '\u{A786}' => "T", // LATIN CAPITAL LETTER INSULAR T
    '\u{FF34}' => "T", // FULLWIDTH LATIN CAPITAL LETTER T

    '\u{0163}' => "t", // LATIN SMALL LETTER T WITH CEDILLA
    '\u{0165}' => "t", // LATIN SMALL LETTER T WITH CARON
    '\u{0167}' => "t", // LATIN SMALL LETTER T WITH STROKE
    '\u{01AB}' => "t", // LATIN SMALL LETTER T WITH PALATAL HOOK
    '\u{01AD}' => "t", // LATIN SMALL LETTER T WITH HOOK
    '\u{021B}' => "t", // LATIN SMALL LETTER T WITH COMMA BELOW
    '\u{0236}' => "t", // LATIN SMALL LETTER T WITH CURL
    '\u{0287}' => "t", // LATIN SMALL LETTER TURNED T
    '\u{0288}' => "t", // LATIN SMALL LETTER T WITH RETROFLEX HOOK
    '\u{1D75}' => "t", // LATIN SMALL LETTER T WITH MIDDLE TILDE
    '\u{1E6B}' => "t", // LATIN SMALL LETTER T WITH DOT ABOVE
    '\u{1E6D}' => "t", // LATIN SMALL LETTER T WITH DOT BELOW
    '\u{1E6F}' => "t", // LATIN SMALL LETTER T WITH LINE BELOW
    '\u{1E71}' => "t", // LATIN SMALL LETTER T WITH CIRCUMFLEX BELOW
    '\u{1E97}' => "t", // LATIN SMALL LETTER T WITH DIAERESIS
    '\u{24E3}' => "t", // CIRCLED LATIN SMALL LETTER T
    '\u{2C66}' => "t", // LATIN SMALL LETTER T WITH DIAGONAL STROKE
    '\u{FF54}' => "t", // FULLWIDTH LATIN SMALL LETTER T

    '\u{00DE}' => "TH", // LATIN CAPITAL LETTER THORN
    '\u{A766}' => "TH", // LATIN CAPITAL LETTER THORN WITH STROKE THROUGH DESCENDER

    '\u{A728}' => "TZ", // LATIN CAPITAL LETTER TZ

    '\u{24AF}' => "(t)", // PARENTHESIZED LATIN SMALL LETTER T

    '\u{02A8}' => "tc", // LATIN SMALL LETTER TC DIGRAPH WITH CURL

    '\u{00FE}' => "th", // LATIN SMALL LETTER THORN
    '\u{1D7A}' => "th", // LATIN SMALL LETTER TH WITH STRIKETHROUGH
    '\u{A767}' => "th", // LATIN SMALL LETTER THORN WITH STROKE THROUGH DESCENDER

    '\u{02A6}' => "ts", // LATIN SMALL LETTER TS DIGRAPH

    '\u{A729}' => "tz", // LATIN SMALL LETTER TZ

    '\u{00D9}' => "U", // LATIN CAPITAL LETTER U WITH GRAVE
    '\u{00DA}' => "U", // LATIN CAPITAL LETTER U WITH ACUTE
    '\u{00DB}' => "U", // LATIN CAPITAL LETTER U WITH CIRCUMFLEX
    '\u{00DC}' => "U", // LATIN CAPITAL LETTER U WITH DIAERESIS
    '\u{0168}' => "U", // LATIN CAPITAL LETTER U WITH TILDE
    '\u{016A}' => "U", // LATIN CAPITAL LETTER U WITH MACRON
    '\u{016C}' => "U", // LATIN CAPITAL LETTER U WITH BREVE
    '\u{016E}' => "U", // LATIN CAPITAL LETTER U WITH RING ABOVE
    '\u{0170}' => "U", // LATIN CAPITAL LETTER U WITH DOUBLE ACUTE
    '\u{0172}' => "U", // LATIN CAPITAL LETTER U WITH OGONEK
    '\u{01AF}' => "U", // LATIN CAPITAL LETTER U WITH HORN
    '\u{01D3}' => "U", // LATIN CAPITAL LETTER U WITH CARON
    '\u{01D5}' => "U", // LATIN CAPITAL LETTER U WITH DIAERESIS AND MACRON
    '\u{01D7}' => "U", // LATIN CAPITAL LETTER U WITH DIAERESIS AND ACUTE
    '\u{01D9}' => "U", // LATIN CAPITAL LETTER U WITH DIAERESIS AND CARON
    '\u{01DB}' => "U", // LATIN CAPITAL LETTER U WITH DIAERESIS AND GRAVE
    '\u{0214}' => "U", // LATIN CAPITAL LETTER U WITH DOUBLE GRAVE
    '\u{0216}' => "U", // LATIN CAPITAL LETTER U WITH INVERTED BREVE
    '\u{0244}' => "U", // LATIN CAPITAL LETTER U BAR
    '\u{1D1C}' => "U", // LATIN LETTER SMALL CAPITAL U
    '\u{1D7E}' => "U", // LATIN SMALL CAPITAL LETTER U WITH STROKE
    '\u{1E72}' => "U", // LATIN CAPITAL LETTER U WITH DIAERESIS BELOW
    '\u{1E74}' => "U", // LATIN CAPITAL LETTER U WITH TILDE BELOW
    '\u{1E76}' => "U", // LATIN CAPITAL LETTER U WITH CIRCUMFLEX BELOW
    '\u{1E78}' => "U", // LATIN CAPITAL LETTER U WITH TILDE AND ACUTE
    '\u{1E7A}' => "U", // LATIN CAPITAL LETTER U WITH MACRON AND DIAERESIS
    '\u{1EE4}' => "U", // LATIN CAPITAL LETTER U WITH DOT BELOW
    '\u{1EE6}' => "U", // LATIN CAPITAL LETTER U WITH HOOK ABOVE
    '\u{1EE8}' => "U", // LATIN CAPITAL LETTER U WITH HORN AND ACUTE
    '\u{1EEA}' => "U", // LATIN CAPITAL LETTER U WITH HORN AND GRAVE
    '\u{1EEC}' => "U", // LATIN CAPITAL LETTER U WITH HORN AND HOOK ABOVE
    '\u{1EEE}' => "U", // LATIN CAPITAL LETTER U WITH HORN AND TILDE
    '\u{1EF0}' => "U", // LATIN CAPITAL LETTER U WITH HORN AND DOT BELOW
    '\u{24CA}' => "U", // CIRCLED LATIN CAPITAL LETTER U
    '\u{FF35}' => "U", // FULLWIDTH LATIN CAPITAL LETTER U

    '\u{00F9}' => "u", // LATIN SMALL LETTER U WITH GRAVE
    '\u{00FA}' => "u", // LATIN SMALL LETTER U WITH ACUTE
    '\u{00FB}' => "u", // LATIN SMALL LETTER U WITH CIRCUMFLEX
    '\u{00FC}' => "u", // LATIN SMALL LETTER U WITH DIAERESIS
    '\u{0169}' => "u", // LATIN SMALL LETTER U WITH TILDE
    '\u{016B}' => "u", // LATIN SMALL LETTER U WITH MACRON
    '\u{016D}' => "u", // LATIN SMALL LETTER U WITH BREVE
    '\u{016F}' => "u", // LATIN SMALL LETTER U WITH RING ABOVE
    '\u{0171}' => "u", // LATIN SMALL LETTER U WITH DOUBLE ACUTE
    '\u{0173}' => "u", // LATIN SMALL LETTER U WITH OGONEK
    '\u{01B0}' => "u", // LATIN SMALL LETTER U WITH HORN
    '\u{01D4}' => "u", // LATIN SMALL LETTER U WITH CARON
    '\u{01D6}' => "u", // LATIN SMALL LETTER U WITH DIAERESIS AND MACRON
    '\u{01D8}' => "u", // LATIN SMALL LETTER U WITH DIAERESIS AND ACUTE
    '\u{01DA}' => "u", // LATIN SMALL LETTER U WITH DIAERESIS AND CARON
    '\u{01DC}' => "u", // LATIN SMALL LETTER U WITH DIAERESIS AND GRAVE
    '\u{0215}' => "u", // LATIN SMALL LETTER U WITH DOUBLE GRAVE
    '\u{0217}' => "u", // LATIN SMALL LETTER U WITH INVERTED BREVE
    '\u{0289}' => "u", // LATIN SMALL LETTER U BAR
    '\u{1D64}' => "u", // LATIN SUBSCRIPT SMALL LETTER U
    '\u{1D99}' => "u", // LATIN SMALL LETTER U WITH RETROFLEX HOOK
    '\u{1E73}' => "u", // LATIN SMALL LETTER U WITH DIAERESIS BELOW
    '\u{1E75}' => "u", // LATIN SMALL LETTER U WITH TILDE BELOW
    '\u{1E77}' => "u", // LATIN SMALL LETTER U WITH CIRCUMFLEX BELOW
    '\u{1E79}' => "u", // LATIN SMALL LETTER U WITH TILDE AND ACUTE
    '\u{1E7B}' => "u", // LATIN SMALL LETTER U WITH MACRON AND DIAERESIS
    '\u{1EE5}' => "u", // LATIN SMALL LETTER U WITH DOT BELOW
    '\u{1EE7}' => "u", // LATIN SMALL LETTER U WITH HOOK ABOVE
    '\u{1EE9}' => "u", // LATIN SMALL LETTER U WITH HORN AND ACUTE
    '\u{1EEB}' => "u", // LATIN SMALL LETTER U WITH HORN AND GRAVE
    '\u{1EED}' => "u", // LATIN SMALL LETTER U WITH HORN AND HOOK ABOVE
    '\u{1EEF}' => "u", // LATIN SMALL LETTER U WITH HORN AND TILDE
    '\u{1EF1}' => "u", // LATIN SMALL LETTER U WITH HORN AND DOT BELOW
    '\u{24E4}' => "u", // CIRCLED LATIN SMALL LETTER U
    '\u{FF55}' => "u", // FULLWIDTH LATIN SMALL LETTER U

    '\u{24B0}' => "(u)", // PARENTHESIZED LATIN SMALL LETTER U

    '\u{1D6B}' => "ue", // LATIN SMALL LETTER UE

    '\u{01B2}' => "V", // LATIN CAPITAL LETTER V WITH HOOK
    '\u{0245}' => "V", // LATIN CAPITAL LETTER TURNED V
    '\u{1D20}' => "V", // LATIN LETTER SMALL CAPITAL V
    '\u{1E7C}' => "V", // LATIN CAPITAL LETTER V WITH TILDE
    '\u{1E7E}' => "V", // LATIN CAPITAL LETTER V WITH DOT BELOW
    '\u{1EFC}' => "V", // LATIN CAPITAL LETTER MIDDLE-WELSH V
    '\u{24CB}' => "V", // CIRCLED LATIN CAPITAL LETTER V
    '\u{A75E}' => "V", // LATIN CAPITAL LETTER V WITH DIAGONAL STROKE
    '\u{A768}' => "V", // LATIN CAPITAL LETTER VEND
    '\u{FF36}' => "V", // FULLWIDTH LATIN CAPITAL LETTER V

    '\u{028B}' => "v", // LATIN SMALL LETTER V WITH HOOK
    '\u{028C}' => "v", // LATIN SMALL LETTER TURNED V
    '\u{1D65}' => "v", // LATIN SUBSCRIPT SMALL LETTER V
    '\u{1D8C}' => "v", // LATIN SMALL LETTER V WITH PALATAL HOOK
    '\u{1E7D}' => "v", // LATIN SMALL LETTER V WITH TILDE
    '\u{1E7F}' => "v", // LATIN SMALL LETTER V WITH DOT BELOW
    '\u{24E5}' => "v", // CIRCLED LATIN SMALL LETTER V
    '\u{2C71}' => "v", // LATIN SMALL LETTER V WITH RIGHT HOOK
    '\u{2C74}' => "v", // LATIN SMALL LETTER V WITH CURL
    '\u{A75F}' => "v", // LATIN SMALL LETTER V WITH DIAGONAL STROKE
    '\u{FF56}' => "v", // FULLWIDTH LATIN SMALL LETTER V

    '\u{A760}' => "VY", // LATIN CAPITAL LETTER VY

    '\u{24B1}' => "(v)", // PARENTHESIZED LATIN SMALL LETTER V

    '\u{A761}' => "vy", // LATIN SMALL LETTER VY

    '\u{0174}' => "W", // LATIN CAPITAL LETTER W WITH CIRCUMFLEX
    '\u{01F7}' => "W", // LATIN CAPITAL LETTER WYNN
    '\u{1D21}' => "W", // LATIN LETTER SMALL CAPITAL W
    '\u{1E80}' => "W", // LATIN CAPITAL LETTER W WITH GRAVE
    '\u{1E82}' => "W", // LATIN CAPITAL LETTER W WITH ACUTE
    '\u{1E84}' => "W", // LATIN CAPITAL LETTER W WITH DIAERESIS
    '\u{1E86}' => "W", // LATIN CAPITAL LETTER W WITH DOT ABOVE
    '\u{1E88}' => "W", // LATIN CAPITAL LETTER W WITH DOT BELOW
    '\u{24CC}' => "W", // CIRCLED LATIN CAPITAL LETTER W
    '\u{2C72}' => "W", // LATIN CAPITAL LETTER W WITH HOOK
    '\u{FF37}' => "W", // FULLWIDTH LATIN CAPITAL LETTER W

    '\u{0175}' => "w", // LATIN SMALL LETTER W WITH CIRCUMFLEX
    '\u{01BF}' => "w", // LATIN LETTER WYNN
    '\u{028D}' => "w", // LATIN SMALL LETTER TURNED W
    '\u{1E81}' => "w", // LATIN SMALL LETTER W WITH GRAVE
    '\u{1E83}' => "w", // LATIN SMALL LETTER W WITH ACUTE
    '\u{1E85}' => "w", // LATIN SMALL LETTER W WITH DIAERESIS
    '\u{1E87}' => "w", // LATIN SMALL LETTER W WITH DOT ABOVE
    '\u{1E89}' => "w", // LATIN SMALL LETTER W WITH DOT BELOW
    '\u{1E98}' => "w", // LATIN SMALL LETTER W WITH RING ABOVE
    '\u{24E6}' => "w", // CIRCLED LATIN SMALL LETTER W
    '\u{2C73}' => "w", // LATIN SMALL LETTER W WITH HOOK
    '\u{FF57}' => "w", // FULLWIDTH LATIN SMALL LETTER W

    '\u{24B2}' => "(w)", // PARENTHESIZED LATIN SMALL LETTER W

    '\u{1E8A}' => "X", // LATIN CAPITAL LETTER X WITH DOT ABOVE
    '\u{1E8C}' => "X", // LATIN CAPITAL LETTER X WITH DIAERESIS
    '\u{24CD}' => "X", // CIRCLED LATIN CAPITAL LETTER X
    '\u{FF38}' => "X", // FULLWIDTH LATIN CAPITAL LETTER X

    '\u{1D8D}' => "x", // LATIN SMALL LETTER X WITH PALATAL HOOK
    '\u{1E8B}' => "x", // LATIN SMALL LETTER X WITH DOT ABOVE
    '\u{1E8D}' => "x", // LATIN SMALL LETTER X WITH DIAERESIS
    '\u{2093}' => "x", // LATIN SUBSCRIPT SMALL LETTER X
    '\u{24E7}' => "x", // CIRCLED LATIN SMALL LETTER X
    '\u{FF58}' => "x", // FULLWIDTH LATIN SMALL LETTER X

    '\u{24B3}' => "(x)", // PARENTHESIZED LATIN SMALL LETTER X

    '\u{00DD}' => "Y", // LATIN CAPITAL LETTER Y WITH ACUTE
    '\u{0176}' => "Y", // LATIN CAPITAL LETTER Y WITH CIRCUMFLEX
    '\u{0178}' => "Y", // LATIN CAPITAL LETTER Y WITH DIAERESIS
    '\u{01B3}' => "Y", // LATIN CAPITAL LETTER Y WITH HOOK
    '\u{0232}' => "Y", // LATIN CAPITAL LETTER Y WITH MACRON
    '\u{024E}' => "Y", // LATIN CAPITAL LETTER Y WITH STROKE
    '\u{028F}' => "Y", // LATIN LETTER SMALL CAPITAL Y
    '\u{1E8E}' => "Y", // LATIN CAPITAL LETTER Y WITH DOT ABOVE
    '\u{1EF2}' => "Y", // LATIN CAPITAL LETTER Y WITH GRAVE
    '\u{1EF4}' => "Y", // LATIN CAPITAL LETTER Y WITH DOT BELOW
    '\u{1EF6}' => "Y", // LATIN CAPITAL LETTER Y WITH HOOK ABOVE
    '\u{1EF8}' => "Y", // LATIN CAPITAL LETTER Y WITH TILDE
    '\u{1EFE}' => "Y", // LATIN CAPITAL LETTER Y WITH LOOP
    '\u{24CE}' => "Y", // CIRCLED LATIN CAPITAL LETTER Y
    '\u{FF39}' => "Y", // FULLWIDTH LATIN CAPITAL LETTER Y

    '\u{00FD}' => "y", // LATIN SMALL LETTER Y WITH ACUTE
    '\u{00FF}' => "y", // LATIN SMALL LETTER Y WITH DIAERESIS
    '\u{0177}' => "y", // LATIN SMALL LETTER Y WITH CIRCUMFLEX
    '\u{01B4}' => "y", // LATIN SMALL LETTER Y WITH HOOK
    '\u{0233}' => "y", // LATIN SMALL LETTER Y WITH MACRON
    '\u{024F}' => "y", // LATIN SMALL LETTER Y WITH STROKE
    '\u{028E}' => "y", // LATIN SMALL LETTER TURNED Y
    '\u{1E8F}' => "y", // LATIN SMALL LETTER Y WITH DOT ABOVE
    '\u{1E99}' => "y", // LATIN SMALL LETTER Y WITH RING ABOVE
    '\u{1EF3}' => "y", // LATIN SMALL LETTER Y WITH GRAVE
    '\u{1EF5}' => "y", // LATIN SMALL LETTER Y WITH DOT BELOW
    '\u{1EF7}' => "y", // LATIN SMALL LETTER Y WITH HOOK ABOVE
    '\u{1EF9}' => "y", // LATIN SMALL LETTER Y WITH TILDE
    '\u{1EFF}' => "y", // LATIN SMALL LETTER Y WITH LOOP
    '\u{24E8}' => "y", // CIRCLED LATIN SMALL LETTER Y
    '\u{FF59}' => "y", // FULLWIDTH LATIN SMALL LETTER Y

    '\u{24B4}' => "(y)", // PARENTHESIZED LATIN SMALL LETTER Y

    '\u{0179}' => "Z", // LATIN CAPITAL LETTER Z WITH ACUTE
    '\u{017B}' => "Z", // LATIN CAPITAL LETTER Z WITH DOT ABOVE
    '\u{017D}' => "Z", // LATIN CAPITAL LETTER Z WITH CARON
    '\u{01B5}' => "Z", // LATIN CAPITAL LETTER Z WITH STROKE
    '\u{021C}' => "Z", // LATIN CAPITAL LETTER YOGH
    '\u{0224}' => "Z", // LATIN CAPITAL LETTER Z WITH HOOK
    '\u{1D22}' => "Z", // LATIN LETTER SMALL CAPITAL Z
    '\u{1E90}' => "Z", // LATIN CAPITAL LETTER Z WITH CIRCUMFLEX
    '\u{1E92}' => "Z", // LATIN CAPITAL LETTER Z WITH DOT BELOW
    '\u{1E94}' => "Z", // LATIN CAPITAL LETTER Z WITH LINE BELOW
    '\u{24CF}' => "Z", // CIRCLED LATIN CAPITAL LETTER Z
    '\u{2C6B}' => "Z", // LATIN CAPITAL LETTER Z WITH DESCENDER
    '\u{A762}' => "Z", // LATIN CAPITAL LETTER VISIGOTHIC Z
    '\u{FF3A}' => "Z", // FULLWIDTH LATIN CAPITAL LETTER Z

    '\u{017A}' => "z", // LATIN SMALL LETTER Z WITH ACUTE
    '\u{017C}' => "z", // LATIN SMALL LETTER Z WITH DOT ABOVE
    '\u{017E}' => "z", // LATIN SMALL LETTER Z WITH CARON
    '\u{01B6}' => "z", // LATIN SMALL LETTER Z WITH STROKE
    '\u{021D}' => "z", // LATIN SMALL LETTER YOGH
    '\u{0225}' => "z", // LATIN SMALL LETTER Z WITH HOOK
    '\u{0240}' => "z", // LATIN SMALL LETTER Z WITH SWASH TAIL
    '\u{0290}' => "z", // LATIN SMALL LETTER Z WITH RETROFLEX HOOK
    '\u{0291}' => "z", // LATIN SMALL LETTER Z WITH CURL
    '\u{1D76}' => "z", // LATIN SMALL LETTER Z WITH MIDDLE TILDE
    '\u{1D8E}' => "z", // LATIN SMALL LETTER Z WITH PALATAL HOOK
    '\u{1E91}' => "z", // LATIN SMALL LETTER Z WITH CIRCUMFLEX
    '\u{1E93}' => "z", // LATIN SMALL LETTER Z WITH DOT BELOW
    '\u{1E95}' => "z", // LATIN SMALL LETTER Z WITH LINE BELOW
    '\u{24E9}' => "z", // CIRCLED LATIN SMALL LETTER Z
    '\u{2C6C}' => "z", // LATIN SMALL LETTER Z WITH DESCENDER
    '\u{A763}' => "z", // LATIN SMALL LETTER VISIGOTHIC Z
    '\u{FF5A}' => "z", // FULLWIDTH LATIN SMALL LETTER Z

    '\u{24B5}' => "(z)", // PARENTHESIZED LATIN SMALL LETTER Z

    '\u{2070}' => "0", // SUPERSCRIPT ZERO
    '\u{2080}' => "0", // SUBSCRIPT ZERO
    '\u{24EA}' => "0", // CIRCLED DIGIT ZERO
    '\u{24FF}' => "0", // NEGATIVE CIRCLED DIGIT ZERO
    '\u{FF10}' => "0", // FULLWIDTH DIGIT ZERO

    '\u{00B9}' => "1", // SUPERSCRIPT ONE
    '\u{2081}' => "1", // SUBSCRIPT ONE
    '\u{2460}' => "1", // CIRCLED DIGIT ONE
    '\u{24F5}' => "1", // DOUBLE CIRCLED DIGIT ONE
    '\u{2776}' => "1", // DINGBAT NEGATIVE CIRCLED DIGIT ONE
    '\u{2780}' => "1", // DINGBAT CIRCLED SANS-SERIF DIGIT ONE
    '\u{278A}' => "1", // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT ONE
    '\u{FF11}' => "1", // FULLWIDTH DIGIT ONE

    '\u{2488}' => "1.", // DIGIT ONE FULL STOP

    '\u{2474}' => "(1)", // PARENTHESIZED DIGIT ONE

    '\u{00B2}' => "2", // SUPERSCRIPT TWO
    '\u{2082}' => "2", // SUBSCRIPT TWO
    '\u{2461}' => "2", // CIRCLED DIGIT TWO
    '\u{24F6}' => "2", // DOUBLE CIRCLED DIGIT TWO
    '\u{2777}' => "2", // DINGBAT NEGATIVE CIRCLED DIGIT TWO
    '\u{2781}' => "2", // DINGBAT CIRCLED SANS-SERIF DIGIT TWO
    '\u{278B}' => "2", // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT TWO
    '\u{FF12}' => "2", // FULLWIDTH DIGIT TWO

    '\u{2489}' => "2.", // DIGIT TWO FULL STOP

    '\u{2475}' => "(2)", // PARENTHESIZED DIGIT TWO

    '\u{00B3}' => "3", // SUPERSCRIPT THREE
    '\u{2083}' => "3", // SUBSCRIPT THREE
    '\u{2462}' => "3", // CIRCLED DIGIT THREE
    '\u{24F7}' => "3", // DOUBLE CIRCLED DIGIT THREE
    '\u{2778}' => "3", // DINGBAT NEGATIVE CIRCLED DIGIT THREE
    '\u{2782}' => "3", // DINGBAT CIRCLED SANS-SERIF DIGIT THREE
    '\u{278C}' => "3", // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT THREE
    '\u{FF13}' => "3", // FULLWIDTH DIGIT THREE

    '\u{248A}' => "3.", // DIGIT THREE FULL STOP

    '\u{2476}' => "(3)", // PARENTHESIZED DIGIT THREE

    '\u{2074}' => "4", // SUPERSCRIPT FOUR
    '\u{2084}' => "4", // SUBSCRIPT FOUR
    '\u{2463}' => "4", // CIRCLED DIGIT FOUR
    '\u{24F8}' => "4", // DOUBLE CIRCLED DIGIT FOUR
    '\u{2779}' => "4", // DINGBAT NEGATIVE CIRCLED DIGIT FOUR
    '\u{2783}' => "4", // DINGBAT CIRCLED SANS-SERIF DIGIT FOUR
    '\u{278D}' => "4", // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT FOUR
    '\u{FF14}' => "4", // FULLWIDTH DIGIT FOUR

    '\u{248B}' => "4.", // DIGIT FOUR FULL STOP

    '\u{2477}' => "(4)", // PARENTHESIZED DIGIT FOUR

    '\u{2075}' => "5", // SUPERSCRIPT FIVE
    '\u{2085}' => "5", // SUBSCRIPT FIVE
    '\u{2464}' => "5", // CIRCLED DIGIT FIVE
    '\u{24F9}' => "5", // DOUBLE CIRCLED DIGIT FIVE
    '\u{277A}' => "5", // DINGBAT NEGATIVE CIRCLED DIGIT FIVE
    '\u{2784}' => "5", // DINGBAT CIRCLED SANS-SERIF DIGIT FIVE
    '\u{278E}' => "5", // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT FIVE
    '\u{FF15}' => "5", // FULLWIDTH DIGIT FIVE

    '\u{248C}' => "5.", // DIGIT FIVE FULL STOP

    '\u{2478}' => "(5)", // PARENTHESIZED DIGIT FIVE

    '\u{2076}' => "6", // SUPERSCRIPT SIX
    '\u{2086}' => "6", // SUBSCRIPT SIX
    '\u{2465}' => "6", // CIRCLED DIGIT SIX
    '\u{24FA}' => "6", // DOUBLE CIRCLED DIGIT SIX
    '\u{277B}' => "6", // DINGBAT NEGATIVE CIRCLED DIGIT SIX
    '\u{2785}' => "6", // DINGBAT CIRCLED SANS-SERIF DIGIT SIX
    '\u{278F}' => "6", // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT SIX
    '\u{FF16}' => "6", // FULLWIDTH DIGIT SIX

    '\u{248D}' => "6.", // DIGIT SIX FULL STOP

    '\u{2479}' => "(6)", // PARENTHESIZED DIGIT SIX

    '\u{2077}' => "7", // SUPERSCRIPT SEVEN
    '\u{2087}' => "7", // SUBSCRIPT SEVEN
    '\u{2466}' => "7", // CIRCLED DIGIT SEVEN
    '\u{24FB}' => "7", // DOUBLE CIRCLED DIGIT SEVEN
    '\u{277C}' => "7", // DINGBAT NEGATIVE CIRCLED DIGIT SEVEN
    '\u{2786}' => "7", // DINGBAT CIRCLED SANS-SERIF DIGIT SEVEN
    '\u{2790}' => "7", // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT SEVEN
    '\u{FF17}' => "7", // FULLWIDTH DIGIT SEVEN

    '\u{248E}' => "7.", // DIGIT SEVEN FULL STOP

    '\u{247A}' => "(7)", // PARENTHESIZED DIGIT SEVEN

    '\u{2078}' => "8", // SUPERSCRIPT EIGHT
    '\u{2088}' => "8", // SUBSCRIPT EIGHT
    '\u{2467}' => "8", // CIRCLED DIGIT EIGHT
    '\u{24FC}' => "8", // DOUBLE CIRCLED DIGIT EIGHT
    '\u{277D}' => "8", // DINGBAT NEGATIVE CIRCLED DIGIT EIGHT
    '\u{2787}' => "8", // DINGBAT CIRCLED SANS-SERIF DIGIT EIGHT
    '\u{2791}' => "8", // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT EIGHT
    '\u{FF18}' => "8", // FULLWIDTH DIGIT EIGHT

    '\u{248F}' => "8.", // DIGIT EIGHT FULL STOP

    '\u{247B}' => "(8)", // PARENTHESIZED DIGIT EIGHT

    '\u{2079}' => "9", // SUPERSCRIPT NINE
    '\u{2089}' => "9", // SUBSCRIPT NINE
    '\u{2468}' => "9", // CIRCLED DIGIT NINE
    '\u{24FD}' => "9", // DOUBLE CIRCLED DIGIT NINE
    '\u{277E}' => "9", // DINGBAT NEGATIVE CIRCLED DIGIT NINE
    '\u{2788}' => "9", // DINGBAT CIRCLED SANS-SERIF DIGIT NINE
    '\u{2792}' => "9", // DINGBAT NEGATIVE CIRCLED SANS-SERIF DIGIT NINE
    '\u{FF19}' => "9", // FULLWIDTH DIGIT NINE

    '\u{2490}' => "9.", // DIGIT NINE FULL STOP

    '\u{247C}' => "(9)", // PARENTHESIZED DIGIT NINE

    '\u{2469}' => "10", // CIRCLED NUMBER TEN
    '\u{24FE}' => "10", // DOUBLE CIRCLED NUMBER TEN
    '\u{277F}' => "10", // DINGBAT NEGATIVE CIRCLED NUMBER TEN
    '\u{2789}' => "10", // DINGBAT CIRCLED SANS-SERIF NUMBER TEN
    '\u{2793}' => "10", // DINGBAT NEGATIVE CIRCLED SANS-SERIF NUMBER TEN

    '\u{2491}' => "10.", // NUMBER TEN FULL STOP

    '\u{247D}' => "(10)", // PARENTHESIZED NUMBER TEN

    '\u{246A}' => "11", // CIRCLED NUMBER ELEVEN
    '\u{24EB}' => "11", // NEGATIVE CIRCLED NUMBER ELEVEN

    '\u{2492}' => "11.", // NUMBER ELEVEN FULL STOP

    '\u{247E}' => "(11)", // PARENTHESIZED NUMBER ELEVEN

    '\u{246B}' => "12", // CIRCLED NUMBER TWELVE
    '\u{24EC}' => "12", // NEGATIVE CIRCLED NUMBER TWELVE

    '\u{2493}' => "12.", // NUMBER TWELVE FULL STOP

    '\u{247F}' => "(12)", // PARENTHESIZED NUMBER TWELVE

    '\u{246C}' => "13", // CIRCLED NUMBER THIRTEEN
    '\u{24ED}' => "13", // NEGATIVE CIRCLED NUMBER THIRTEEN

    '\u{2494}' => "13.", // NUMBER THIRTEEN FULL STOP

    '\u{2480}' => "(13)", // PARENTHESIZED NUMBER THIRTEEN

    '\u{246D}' => "14", // CIRCLED NUMBER FOURTEEN
    '\u{24EE}' => "14", // NEGATIVE CIRCLED NUMBER FOURTEEN

    '\u{2495}' => "14.", // NUMBER FOURTEEN FULL STOP

    '\u{2481}' => "(14)", // PARENTHESIZED NUMBER FOURTEEN

    '\u{246E}' => "15", // CIRCLED NUMBER FIFTEEN
    '\u{24EF}' => "15", // NEGATIVE CIRCLED NUMBER FIFTEEN

    '\u{2496}' => "15.", // NUMBER FIFTEEN FULL STOP

    '\u{2482}' => "(15)", // PARENTHESIZED NUMBER FIFTEEN

    '\u{246F}' => "16", // CIRCLED NUMBER SIXTEEN
    '\u{24F0}' => "16", // NEGATIVE CIRCLED NUMBER SIXTEEN

    '\u{2497}' => "16.", // NUMBER SIXTEEN FULL STOP

    '\u{2483}' => "(16)", // PARENTHESIZED NUMBER SIXTEEN

    '\u{2470}' => "17", // CIRCLED NUMBER SEVENTEEN
    '\u{24F1}' => "17", // NEGATIVE CIRCLED NUMBER SEVENTEEN

    '\u{2498}' => "17.", // NUMBER SEVENTEEN FULL STOP

    '\u{2484}' => "(17)", // PARENTHESIZED NUMBER SEVENTEEN

    '\u{2471}' => "18", // CIRCLED NUMBER EIGHTEEN
    '\u{24F2}' => "18", // NEGATIVE CIRCLED NUMBER EIGHTEEN

    '\u{2499}' => "18.", // NUMBER EIGHTEEN FULL STOP

    '\u{2485}' => "(18)", // PARENTHESIZED NUMBER EIGHTEEN

    '\u{2472}' => "19", // CIRCLED NUMBER NINETEEN
    '\u{24F3}' => "19", // NEGATIVE CIRCLED NUMBER NINETEEN

    '\u{249A}' => "19.", // NUMBER NINETEEN FULL STOP

    '\u{2486}' => "(19)", // PARENTHESIZED NUMBER NINETEEN

    '\u{2473}' => "20", // CIRCLED NUMBER TWENTY
    '\u{24F4}' => "20", // NEGATIVE CIRCLED NUMBER TWENTY

    '\u{249B}' => "20.", // NUMBER TWENTY FULL STOP

    '\u{2487}' => "(20)", // PARENTHESIZED NUMBER TWENTY

    '\u{00AB}' => "\"", // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
    '\u{00BB}' => "\"", // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
    '\u{201C}' => "\"", // LEFT DOUBLE QUOTATION MARK
    '\u{201D}' => "\"", // RIGHT DOUBLE QUOTATION MARK
    '\u{201E}' => "\"", // DOUBLE LOW-9 QUOTATION MARK
    '\u{2033}' => "\"", // DOUBLE PRIME
    '\u{2036}' => "\"", // REVERSED DOUBLE PRIME
    '\u{275D}' => "\"", // HEAVY DOUBLE TURNED COMMA QUOTATION MARK ORNAMENT
    '\u{275E}' => "\"", // HEAVY DOUBLE COMMA QUOTATION MARK ORNAMENT
    '\u{276E}' => "\"", // HEAVY LEFT-POINTING ANGLE QUOTATION MARK ORNAMENT
    '\u{276F}' => "\"", // HEAVY RIGHT-POINTING ANGLE QUOTATION MARK ORNAMENT
    '\u{FF02}' => "\"", // FULLWIDTH QUOTATION MARK

    '\u{2018}' => "'", // LEFT SINGLE QUOTATION MARK
    '\u{2019}' => "'", // RIGHT SINGLE QUOTATION MARK
    '\u{201A}' => "'", // SINGLE LOW-9 QUOTATION MARK
    '\u{201B}' => "'", // SINGLE HIGH-REVERSED-9 QUOTATION MARK
    '\u{2032}' => "'", // PRIME
    '\u{2035}' => "'", // REVERSED PRIME
    '\u{2039}' => "'", // SINGLE LEFT-POINTING ANGLE QUOTATION MARK
    '\u{203A}' => "'", // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
    '\u{275B}' => "'", // HEAVY SINGLE TURNED COMMA QUOTATION MARK ORNAMENT
    '\u{275C}' => "'", // HEAVY SINGLE COMMA QUOTATION MARK ORNAMENT
    '\u{FF07}' => "'", // FULLWIDTH APOSTROPHE

    '\u{2010}' => "-", // HYPHEN
    '\u{2011}' => "-", // NON-BREAKING HYPHEN
    '\u{2012}' => "-", // FIGURE DASH
    '\u{2013}' => "-", // EN DASH
    '\u{2014}' => "-", // EM DASH
    '\u{207B}' => "-", // SUPERSCRIPT MINUS
    '\u{208B}' => "-", // SUBSCRIPT MINUS
    '\u{FF0D}' => "-", // FULLWIDTH HYPHEN-MINUS

    '\u{2045}' => "[", // LEFT SQUARE BRACKET WITH QUILL
    '\u{2772}' => "[", // LIGHT LEFT TORTOISE SHELL BRACKET ORNAMENT
    '\u{FF3B}' => "[", // FULLWIDTH LEFT SQUARE BRACKET

    '\u{2046}' => "]", // RIGHT SQUARE BRACKET WITH QUILL
    '\u{2773}' => "]", // LIGHT RIGHT TORTOISE SHELL BRACKET ORNAMENT
    '\u{FF3D}' => "]", // FULLWIDTH RIGHT SQUARE BRACKET

    '\u{207D}' => "(", // SUPERSCRIPT LEFT PARENTHESIS
    '\u{208D}' => "(", // SUBSCRIPT LEFT PARENTHESIS
    '\u{2768}' => "(", // MEDIUM LEFT PARENTHESIS ORNAMENT
    '\u{276A}' => "(", // MEDIUM FLATTENED LEFT PARENTHESIS ORNAMENT
    '\u{FF08}' => "(", // FULLWIDTH LEFT PARENTHESIS

    '\u{2E28}' => "((", // LEFT DOUBLE PARENTHESIS

    '\u{207E}' => ")", // SUPERSCRIPT RIGHT PARENTHESIS
    '\u{208E}' => ")", // SUBSCRIPT RIGHT PARENTHESIS
    '\u{2769}' => ")", // MEDIUM RIGHT PARENTHESIS ORNAMENT
    '\u{276B}' => ")", // MEDIUM FLATTENED RIGHT PARENTHESIS ORNAMENT
    '\u{FF09}' => ")", // FULLWIDTH RIGHT PARENTHESIS

    '\u{2E29}' => "))", // RIGHT DOUBLE PARENTHESIS

    '\u{276C}' => "<", // MEDIUM LEFT-POINTING ANGLE BRACKET ORNAMENT
    '\u{2770}' => "<", // HEAVY LEFT-POINTING ANGLE BRACKET ORNAMENT
    '\u{FF1C}' => "<", // FULLWIDTH LESS-THAN SIGN

    '\u{276D}' => ">", // MEDIUM RIGHT-POINTING ANGLE BRACKET ORNAMENT
    '\u{2771}' => ">", // HEAVY RIGHT-POINTING ANGLE BRACKET ORNAMENT
    '\u{FF1E}' => ">", // FULLWIDTH GREATER-THAN SIGN

    '\u{2774}' => "{", // MEDIUM LEFT CURLY BRACKET ORNAMENT
    '\u{FF5B}' => "{", // FULLWIDTH LEFT CURLY BRACKET

    '\u{2775}' => "}", // MEDIUM RIGHT CURLY BRACKET ORNAMENT
    '\u{FF5D}' => "}", // FULLWIDTH RIGHT CURLY BRACKET

    '\u{207A}' => "+", // SUPERSCRIPT PLUS SIGN
    '\u{208A}' => "+", // SUBSCRIPT PLUS SIGN
    '\u{FF0B}' => "+", // FULLWIDTH PLUS SIGN

    '\u{207C}' => "=", // SUPERSCRIPT EQUALS SIGN
    '\u{208C}' => "=", // SUBSCRIPT EQUALS SIGN
    '\u{FF1D}' => "=", // FULLWIDTH EQUALS SIGN

    '\u{FF01}' => "!", // FULLWIDTH EXCLAMATION MARK

    '\u{203C}' => "!!", // DOUBLE EXCLAMATION MARK

    '\u{2049}' => "!?", // EXCLAMATION QUESTION MARK

    '\u{FF03}' => "#", // FULLWIDTH NUMBER SIGN

    '\u{FF04}' => "$", // FULLWIDTH DOLLAR SIGN

    '\u{2052}' => "%", // COMMERCIAL MINUS SIGN
    '\u{FF05}' => "%", // FULLWIDTH PERCENT SIGN

    '\u{FF06}' => "&", // FULLWIDTH AMPERSAND

    '\u{204E}' => "*", // LOW ASTERISK
    '\u{FF0A}' => "*", // FULLWIDTH ASTERISK

    '\u{FF0C}' => ",", // FULLWIDTH COMMA

    '\u{FF0E}' => ".", // FULLWIDTH FULL STOP

    '\u{2044}' => "/", // FRACTION SLASH
    '\u{FF0F}' => "/", // FULLWIDTH SOLIDUS

    '\u{FF1A}' => ":", // FULLWIDTH COLON

    '\u{204F}' => ";", // REVERSED SEMICOLON
    '\u{FF1B}' => ";", // FULLWIDTH SEMICOLON

    '\u{FF1F}' => "?", // FULLWIDTH QUESTION MARK

    '\u{2047}' => "??", // DOUBLE QUESTION MARK

    '\u{2048}' => "?!", // QUESTION EXCLAMATION MARK

    '\u{FF20}' => "@", // FULLWIDTH COMMERCIAL AT

    '\u{FF3C}' => "\\", // FULLWIDTH REVERSE SOLIDUS

    '\u{2038}' => "^", // CARET
    '\u{FF3E}' => "^", // FULLWIDTH CIRCUMFLEX ACCENT

    '\u{FF3F}' => "_", // FULLWIDTH LOW LINE

    '\u{2053}' => "~", // SWUNG DASH
    '\u{FF5E}' => "~", // FULLWIDTH TILDE
};
