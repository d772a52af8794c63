use std::borrow::Cow;
use std::ops::RangeInclusive;

use fake::faker::lorem::en::Words;
use fake::Fake;
use rand::Rng;

/// Built-in genre catalogue.
pub const GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Fighting",
    "Platformer",
    "Puzzle",
    "Racing",
    "Roguelike",
    "Role-Playing",
    "Shooter",
    "Simulation",
    "Sports",
    "Strategy",
];

/// Built-in platform catalogue.
pub const PLATFORMS: &[&str] = &[
    "PC",
    "PlayStation 5",
    "PlayStation 4",
    "Xbox Series X",
    "Xbox One",
    "Nintendo Switch",
    "Steam Deck",
    "iOS",
    "Android",
];

/// Catalogue entries as zero-cost borrows, the default when no override is configured.
pub fn builtin(list: &'static [&'static str]) -> Vec<Cow<'static, str>> {
    list.iter().map(|s| Cow::Borrowed(*s)).collect()
}

/// A title of one to three lorem words with the first letter capitalized.
pub fn title(rng: &mut impl Rng) -> String {
    let words: Vec<String> = Words(1..4).fake_with_rng(rng);
    let title = words.join(" ");
    let mut chars = title.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

/// Uniform pick from a non-empty catalogue.
pub fn pick(rng: &mut impl Rng, catalogue: &[Cow<'static, str>]) -> String {
    catalogue[rng.random_range(0..catalogue.len())].to_string()
}

/// Uniform integer price within the inclusive range.
pub fn price(rng: &mut impl Rng, range: &RangeInclusive<i64>) -> i64 {
    rng.random_range(range.clone())
}
