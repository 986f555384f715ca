use crate::target_selector::TargetPick;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub word_list: Vec<String>,
    pub target_pick: TargetPick,
    pub picture_dir: PathBuf,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_list: default_word_list(),
            target_pick: TargetPick::SecondOfMinute,
            picture_dir: std::env::temp_dir().join("photo-hunt").join("Pictures"),
            logger_timezone: *chrono::Local::now().offset(),
        }
    }
}

fn default_word_list() -> Vec<String> {
    [
        "Cup", "Chair", "Table", "Plant", "Shoe", "Bag", "Glasses", "Bottle", "Book", "Clock",
        "Computer", "Keyboard", "Television", "Jacket", "Flower", "Car", "Bicycle", "Dog", "Cat",
        "Tree",
    ]
    .iter()
    .map(|word| word.to_string())
    .collect()
}
