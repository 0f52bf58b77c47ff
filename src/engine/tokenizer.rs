//! Command-line tokenizer
//!
//! Splits a raw command line on spaces, treating a double-quoted run as a
//! single token so commit messages can contain spaces. An unterminated
//! quote is tolerated: end of input acts as the closing quote.

pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;
    let mut was_quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                inside_quotes = !inside_quotes;
                was_quoted = true;
            }
            ' ' if !inside_quotes => {
                if !current.is_empty() || was_quoted {
                    tokens.push(std::mem::take(&mut current));
                }
                was_quoted = false;
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() || was_quoted {
        tokens.push(current);
    }

    tokens
}
