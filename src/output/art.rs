//! ASCII art assets
//!
//! One banner and eight gallows frames. Frame `n` is shown with `n` attempts
//! remaining: 7 is the empty gallows, 0 the finished figure.

/// Title banner
pub const BANNER: &[&str] = &[
    r" _",
    r"| |__   __ _ _ __   __ _ _ __ ___   __ _ _ __",
    r"| '_ \ / _` | '_ \ / _` | '_ ` _ \ / _` | '_ \",
    r"| | | | (_| | | | | (_| | | | | | | (_| | | | |",
    r"|_| |_|\__,_|_| |_|\__, |_| |_| |_|\__,_|_| |_|",
    r"                   |___/",
];

/// Gallows frames indexed by attempts remaining
pub const STAGES: [&[&str]; 8] = [
    &[
        r"  +---+",
        r"  |   |",
        r"  X   |",
        r" /|\  |",
        r" / \  |",
        r"      |",
        r"=========",
    ],
    &[
        r"  +---+",
        r"  |   |",
        r"  O   |",
        r" /|\  |",
        r" / \  |",
        r"      |",
        r"=========",
    ],
    &[
        r"  +---+",
        r"  |   |",
        r"  O   |",
        r" /|\  |",
        r" /    |",
        r"      |",
        r"=========",
    ],
    &[
        r"  +---+",
        r"  |   |",
        r"  O   |",
        r" /|\  |",
        r"      |",
        r"      |",
        r"=========",
    ],
    &[
        r"  +---+",
        r"  |   |",
        r"  O   |",
        r" /|   |",
        r"      |",
        r"      |",
        r"=========",
    ],
    &[
        r"  +---+",
        r"  |   |",
        r"  O   |",
        r"  |   |",
        r"      |",
        r"      |",
        r"=========",
    ],
    &[
        r"  +---+",
        r"  |   |",
        r"  O   |",
        r"      |",
        r"      |",
        r"      |",
        r"=========",
    ],
    &[
        r"  +---+",
        r"  |   |",
        r"      |",
        r"      |",
        r"      |",
        r"      |",
        r"=========",
    ],
];

/// Index of the frame for `attempts` remaining, clamped to the frame range
#[must_use]
pub fn stage_index(attempts: i32) -> usize {
    attempts.clamp(0, STAGES.len() as i32 - 1) as usize
}

/// Frame for `attempts` remaining
///
/// # Examples
/// ```
/// use hangman::output::art::stage;
///
/// assert_eq!(stage(9), stage(7));
/// assert_eq!(stage(-1), stage(0));
/// ```
#[must_use]
pub fn stage(attempts: i32) -> &'static [&'static str] {
    STAGES[stage_index(attempts)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_clamps_above_range() {
        assert_eq!(stage_index(9), 7);
        assert_eq!(stage(9), stage(7));
        assert_eq!(stage(i32::MAX), STAGES[7]);
    }

    #[test]
    fn stage_clamps_below_range() {
        assert_eq!(stage_index(-1), 0);
        assert_eq!(stage(-1), stage(0));
    }

    #[test]
    fn stage_in_range_is_identity() {
        for i in 0..8 {
            assert_eq!(stage_index(i), i as usize);
        }
    }

    #[test]
    fn frames_are_distinct_and_same_height() {
        for (i, frame) in STAGES.iter().enumerate() {
            assert_eq!(frame.len(), STAGES[0].len());
            for other in &STAGES[i + 1..] {
                assert_ne!(frame, other);
            }
        }
    }
}
