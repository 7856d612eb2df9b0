//! Character prompts — a random subject paired with a random scenario. No LLM involved.

use rand::Rng;
use serde::Serialize;

pub const SUBJECTS: [&str; 20] = [
    "A forgotten god",
    "An ancient robot",
    "A lonely ghost",
    "A time-traveling chef",
    "A dream merchant",
    "A library that breathes",
    "A clockmaker's apprentice",
    "A shadow with amnesia",
    "A singing mountain",
    "A detective made of smoke",
    "A garden that remembers",
    "A lighthouse keeper's diary",
    "A mirror that lies",
    "A storm collector",
    "A painter of silence",
    "A door that leads nowhere",
    "A memory thief",
    "A constellation's last wish",
    "A broken compass",
    "A storyteller's echo",
];

pub const SCENARIOS: [&str; 20] = [
    "running a coffee shop",
    "afraid of the dark",
    "in a vending machine",
    "learning to dance",
    "writing love letters",
    "hiding in plain sight",
    "teaching children to fly",
    "collecting lost things",
    "building paper airplanes",
    "whispering to plants",
    "painting with starlight",
    "solving impossible puzzles",
    "baking bread at midnight",
    "reading minds reluctantly",
    "fixing broken hearts",
    "translating bird songs",
    "weaving dreams together",
    "counting backwards from infinity",
    "dancing with their shadow",
    "searching for the perfect word",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterPrompt {
    pub subject: &'static str,
    pub scenario: &'static str,
    /// `"{subject} {scenario}"`
    pub prompt: String,
}

/// Draws one subject and one scenario independently and uniformly.
pub fn generate_character_prompt<R: Rng + ?Sized>(rng: &mut R) -> CharacterPrompt {
    let subject = SUBJECTS[rng.gen_range(0..SUBJECTS.len())];
    let scenario = SCENARIOS[rng.gen_range(0..SCENARIOS.len())];
    CharacterPrompt {
        subject,
        scenario,
        prompt: format!("{subject} {scenario}"),
    }
}
