use crate::engine::output::Output;

const COMMANDS: &[(&str, &str)] = &[
    ("look", "Describe the current room and items."),
    ("look at [item]", "Describe a specific item."),
    ("go [direction]", "Move in a direction (e.g., 'go north')."),
    ("take [item]", "Pick up an item."),
    ("inventory / i", "Show items you are carrying."),
    ("help / ?", "Show this help message."),
    ("quit / exit", "Leave the game."),
];

pub fn handle_help(out: &mut Output) {
    out.rule('*', 40);
    out.say("Available Commands:");
    for (usage, what) in COMMANDS {
        out.say(format!("  {:<14}: {}", usage, what));
    }
    out.rule('*', 40);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_verb_is_listed() {
        let mut out = Output::new();
        handle_help(&mut out);
        for verb in ["look", "go", "take", "inventory", "help", "quit"] {
            assert!(out.contains(verb), "help is missing '{verb}'");
        }
    }
}
