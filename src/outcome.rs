#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Won when any result line contains the target word, ignoring case.
///
/// Matching is a plain substring test on the displayed lines, so "cat" also
/// matches "caterpillar 80%".
pub fn evaluate<S: AsRef<str>>(results: &[S], target_word: &str) -> Outcome {
    let target = target_word.to_lowercase();

    if results
        .iter()
        .any(|result| result.as_ref().to_lowercase().contains(&target))
    {
        Outcome::Won
    } else {
        Outcome::Lost
    }
}
