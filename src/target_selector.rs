use chrono::Timelike;
use rand::seq::IndexedRandom;

/// How the next target word is drawn from the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetPick {
    /// `word_list[second_of_minute % len]`. Cycles every minute and favours the
    /// first `60 % len` words.
    #[default]
    SecondOfMinute,
    /// Uniform random pick.
    Uniform,
}

impl TargetPick {
    pub fn pick<'a, T: Timelike>(&self, word_list: &'a [String], now: &T) -> Option<&'a str> {
        match self {
            TargetPick::SecondOfMinute => pick_target(word_list, now),
            TargetPick::Uniform => word_list.choose(&mut rand::rng()).map(String::as_str),
        }
    }
}

/// Picks the word indexed by the seconds component of `now`.
pub fn pick_target<'a, T: Timelike>(word_list: &'a [String], now: &T) -> Option<&'a str> {
    if word_list.is_empty() {
        return None;
    }

    let index = now.second() as usize % word_list.len();

    word_list.get(index).map(String::as_str)
}
