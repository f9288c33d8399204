//! Line splitting.

/// One line of user input split into command and arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lower-cased first token, absent for blank input
    pub command: Option<String>,

    /// Remaining tokens in their original order and case
    pub args: Vec<String>,
}

/// Split a line on whitespace into a lower-cased command and its arguments.
///
/// Blank input yields no command and no arguments.
pub fn parse_input(line: &str) -> ParsedInput {
    let mut tokens = line.split_whitespace();

    let Some(first) = tokens.next() else {
        return ParsedInput::default();
    };

    ParsedInput {
        command: Some(first.to_lowercase()),
        args: tokens.map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_input(""), ParsedInput::default());
        assert_eq!(parse_input("   \t  "), ParsedInput::default());
    }

    #[test]
    fn test_parse_lowercases_command_only() {
        let parsed = parse_input("ADD Ann 555-1234");
        assert_eq!(parsed.command.as_deref(), Some("add"));
        assert_eq!(parsed.args, vec!["Ann", "555-1234"]);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let parsed = parse_input("  phone \t  Ann  \n");
        assert_eq!(parsed.command.as_deref(), Some("phone"));
        assert_eq!(parsed.args, vec!["Ann"]);
    }

    #[test]
    fn test_parse_command_without_args() {
        let parsed = parse_input("all");
        assert_eq!(parsed.command.as_deref(), Some("all"));
        assert!(parsed.args.is_empty());
    }
}
