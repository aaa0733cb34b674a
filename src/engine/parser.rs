//! Line parsing: first word is the verb, the rest is the noun phrase.

/// A parsed player command. Nouns keep the case the player typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// `look` alone looks around; with a noun it looks at an item.
    Look(Option<String>),
    Go(Option<String>),
    Take(Option<String>),
    Inventory,
    Help,
    Unknown(String),
}

/// Splits a line into lowercased verb and trimmed remainder.
/// Returns `None` for empty or whitespace-only lines.
pub fn split_verb_noun(line: &str) -> Option<(String, String)> {
    let line = line.trim_start();
    if line.is_empty() {
        return None;
    }

    let (verb, rest) = match line.find(char::is_whitespace) {
        Some(idx) => line.split_at(idx),
        None => (line, ""),
    };

    // both ends: "take torch " must still find the torch
    Some((verb.to_lowercase(), rest.trim().to_string()))
}

pub fn parse_command(line: &str) -> Option<Command> {
    let (verb, noun) = split_verb_noun(line)?;
    let noun = if noun.is_empty() { None } else { Some(noun) };

    let cmd = match verb.as_str() {
        "quit" | "exit" => Command::Quit,
        "look" => Command::Look(noun.map(strip_at)),
        "go" | "move" | "walk" => Command::Go(noun),
        "take" | "get" | "pickup" => Command::Take(noun),
        "inventory" | "i" => Command::Inventory,
        "help" | "?" => Command::Help,
        _ => Command::Unknown(verb),
    };
    Some(cmd)
}

/// "look at torch" reads the same as "look torch".
fn strip_at(noun: String) -> String {
    if let Some((first, rest)) = noun.split_once(char::is_whitespace) {
        if first.eq_ignore_ascii_case("at") && !rest.trim().is_empty() {
            return rest.trim().to_string();
        }
    }
    noun
}
