//! Character classes for Chinese text and the sentence pattern built from them
//!
//! The constants in this module are regex character-class fragments: plain
//! strings of code points and `X-Y` ranges meant to be spliced between `[` and
//! `]`. They are transcribed from the curated tables of the zhon project
//! (<https://github.com/tsroten/zhon>) and are intentionally not "completed"
//! against the full Unicode CJK punctuation blocks — the enumerated code
//! points are the contract.
//!
//! The split between [`NON_STOPS`] and [`STOPS`] is what drives sentence
//! segmentation: a stop terminates a sentence, a non-stop merely decorates
//! one. [`CLOSING_MARKS`] may legally trail a stop (a quoted statement ending
//! with 。”) and still belong to the same sentence.

macro_rules! characters {
    () => {
        concat!(
            "\u{3007}",             // Ideographic number zero
            "\u{4e00}-\u{9fff}",    // CJK Unified Ideographs
            "\u{3400}-\u{4dbf}",    // CJK Unified Ideographs Extension A
            "\u{f900}-\u{faff}",    // CJK Compatibility Ideographs
            "\u{20000}-\u{2a6df}",  // CJK Unified Ideographs Extension B
            "\u{2a700}-\u{2b73f}",  // CJK Unified Ideographs Extension C
            "\u{2b740}-\u{2b81f}",  // CJK Unified Ideographs Extension D
            "\u{2f800}-\u{2fa1f}",  // CJK Compatibility Ideographs Supplement
        )
    };
}

macro_rules! radicals {
    () => {
        concat!(
            "\u{2f00}-\u{2fd5}", // Kangxi radicals
            "\u{2e80}-\u{2ef3}", // CJK Radicals Supplement
        )
    };
}

macro_rules! non_stops {
    () => {
        concat!(
            // Fullwidth ASCII variants
            "\u{ff02}\u{ff03}\u{ff04}\u{ff05}\u{ff06}\u{ff07}\u{ff08}\u{ff09}",
            "\u{ff0a}\u{ff0b}\u{ff0c}\u{ff0d}\u{ff0f}\u{ff1a}\u{ff1b}\u{ff1c}",
            "\u{ff1d}\u{ff1e}\u{ff20}\u{ff3b}\u{ff3c}\u{ff3d}\u{ff3e}\u{ff3f}",
            "\u{ff40}\u{ff5b}\u{ff5c}\u{ff5d}\u{ff5e}\u{ff5f}\u{ff60}",
            // Halfwidth CJK punctuation
            "\u{ff62}\u{ff63}\u{ff64}",
            // CJK symbols and punctuation
            "\u{3000}\u{3001}\u{3003}",
            // CJK angle and corner brackets
            "\u{3008}\u{3009}\u{300a}\u{300b}\u{300c}\u{300d}\u{300e}\u{300f}",
            "\u{3010}\u{3011}",
            // CJK brackets and symbols/punctuation
            "\u{3014}\u{3015}\u{3016}\u{3017}\u{3018}\u{3019}\u{301a}\u{301b}",
            "\u{301c}\u{301d}\u{301e}\u{301f}",
            // Other CJK symbols
            "\u{3030}",
            // Special CJK indicators
            "\u{303e}\u{303f}",
            // Dashes
            "\u{2013}\u{2014}",
            // Quotation marks and apostrophe
            "\u{2018}\u{2019}\u{201b}\u{201c}\u{201d}\u{201e}\u{201f}",
            // General punctuation
            "\u{2026}\u{2027}",
            // Overscores and underscores
            "\u{fe4f}",
            // Small form variants
            "\u{fe51}\u{fe54}",
            // Latin punctuation
            "\u{00b7}",
        )
    };
}

macro_rules! stops {
    () => {
        concat!(
            "\u{ff0e}", // Fullwidth full stop
            "\u{ff01}", // Fullwidth exclamation mark
            "\u{ff1f}", // Fullwidth question mark
            "\u{ff61}", // Halfwidth ideographic full stop
            "\u{3002}", // Ideographic full stop
        )
    };
}

macro_rules! closing_marks {
    () => {
        "」﹂”』’》）］｝〕〗〙〛〉】"
    };
}

/// Code-point ranges for the pertinent CJK ideograph Unicode blocks.
///
/// Rust's `char` covers the supplementary planes natively, so the
/// extension-B-and-beyond ranges are always included.
pub const CHARACTERS: &str = characters!();

/// Alias for [`CHARACTERS`].
pub const CJK_IDEOGRAPHS: &str = CHARACTERS;

/// Code-point ranges for the Kangxi radicals and CJK Radicals Supplement.
pub const RADICALS: &str = radicals!();

/// Chinese punctuation marks that appear inside a sentence (non-stops).
pub const NON_STOPS: &str = non_stops!();

/// Chinese stops: punctuation that terminates a sentence.
pub const STOPS: &str = stops!();

/// All Chinese punctuation covered by this module: non-stops then stops.
pub const PUNCTUATION: &str = concat!(non_stops!(), stops!());

/// Container-closing marks that may trail a stop and still belong to the
/// sentence it ends.
pub const CLOSING_MARKS: &str = closing_marks!();

/// Pattern for one Chinese sentence: a run of ideographs, radicals, and
/// non-stop punctuation, then exactly one stop, then any closing marks.
pub const SENTENCE: &str = concat!(
    "[",
    characters!(),
    radicals!(),
    non_stops!(),
    "]*[",
    stops!(),
    "][",
    closing_marks!(),
    "]*",
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Expands a character-class fragment into the set of code points it
    /// covers, interpreting an ASCII `-` between two members as a range.
    fn expand(class: &str) -> HashSet<char> {
        let chars: Vec<char> = class.chars().collect();
        let mut set = HashSet::new();
        let mut i = 0;
        while i < chars.len() {
            if i + 2 < chars.len() && chars[i + 1] == '-' {
                let (lo, hi) = (chars[i] as u32, chars[i + 2] as u32);
                assert!(lo <= hi, "descending range in class fragment");
                for cp in lo..=hi {
                    set.insert(char::from_u32(cp).unwrap());
                }
                i += 3;
            } else {
                set.insert(chars[i]);
                i += 1;
            }
        }
        set
    }

    #[test]
    fn stops_are_exactly_the_five_terminal_marks() {
        let stops: Vec<char> = STOPS.chars().collect();
        assert_eq!(stops, vec!['．', '！', '？', '｡', '。']);
    }

    #[test]
    fn punctuation_is_non_stops_then_stops() {
        assert_eq!(PUNCTUATION, format!("{NON_STOPS}{STOPS}"));
    }

    #[test]
    fn ideograph_ranges_cover_common_hanzi() {
        let ideographs = expand(CHARACTERS);
        for ch in ['你', '好', '世', '界', '〇', '㐀', '𠀀'] {
            assert!(ideographs.contains(&ch), "{ch:?} should be an ideograph");
        }
        assert!(!ideographs.contains(&'A'));
        assert!(!ideographs.contains(&'。'));
    }

    #[test]
    fn enumeration_comma_is_a_non_stop() {
        let non_stops = expand(NON_STOPS);
        assert!(non_stops.contains(&'、'));
        assert!(non_stops.contains(&'：'));
        assert!(non_stops.contains(&'“'));
        assert!(!non_stops.contains(&'。'));
    }

    #[test]
    fn character_classes_are_pairwise_disjoint() {
        let classes = [
            ("characters", expand(CHARACTERS)),
            ("radicals", expand(RADICALS)),
            ("non_stops", expand(NON_STOPS)),
            ("stops", expand(STOPS)),
        ];
        for (i, (name_a, a)) in classes.iter().enumerate() {
            for (name_b, b) in classes.iter().skip(i + 1) {
                let overlap: Vec<&char> = a.intersection(b).collect();
                assert!(
                    overlap.is_empty(),
                    "{name_a} and {name_b} share code points: {overlap:?}"
                );
            }
        }
    }

    #[test]
    fn closing_marks_do_not_contain_stops() {
        let stops = expand(STOPS);
        for ch in CLOSING_MARKS.chars() {
            assert!(!stops.contains(&ch), "{ch:?} is both closer and stop");
        }
    }

    #[test]
    fn sentence_pattern_composition() {
        assert!(SENTENCE.starts_with('['));
        assert!(SENTENCE.ends_with("]*"));
        assert!(SENTENCE.contains(STOPS));
        assert!(SENTENCE.contains(CLOSING_MARKS));
    }
}
