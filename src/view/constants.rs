//! Fixed text used in the game transcript.
//!
//! Centralized so tests and formatting functions agree on every string.

/// Width of the horizontal rule between transcript blocks.
pub const SEPARATOR_WIDTH: usize = 47;

/// Prompt shown before each guess. Printed without a trailing newline.
pub const GUESS_PROMPT: &str = "Enter a number: ";

/// Prompt shown after each solved session. Printed without a trailing newline.
pub const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? (y/n): ";

/// Answer (after trimming and lower-casing) that starts another session.
pub const PLAY_AGAIN_YES: &str = "y";

/// First line of every session banner.
pub const GREETING: &str = "Hi there!";

/// Banner line announcing the new secret.
pub const INTRO_GENERATED: &str = "I've generated a random 4 digit number for you.";

/// Banner line inviting the player to start guessing.
pub const INTRO_GAME: &str = "Let's play a bulls and cows game.";

/// First line printed once the secret is guessed.
pub const SOLVED_HEADLINE: &str = "Correct, you've guessed the right number";

/// Printed once when the player stops, before the summary.
pub const GOODBYE: &str = "Thanks for playing! Goodbye.";
