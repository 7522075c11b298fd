// Presentation layer: prompts and the menu loop. Talks to the registry only.

pub mod console;
pub mod shell;
