/// A decoded client message, classified by the kind of execution it needs.
///
/// Classification is a case-insensitive prefix check for the read keyword,
/// nothing more. Whatever does not read as a query is dispatched as a
/// mutation, so malformed input still gets a response, produced by the
/// storage engine rather than by the classifier. The message text itself is
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A row-returning read statement.
    Query(String),
    /// Anything else: inserts, updates, deletes, schema statements,
    /// malformed input.
    Mutation(String),
}

impl From<String> for Command {
    fn from(message: String) -> Self {
        if message.trim().to_lowercase().starts_with("select") {
            Command::Query(message)
        } else {
            Command::Mutation(message)
        }
    }
}

impl Command {
    /// The raw statement text, regardless of classification.
    pub fn text(&self) -> &str {
        match self {
            Command::Query(s) | Command::Mutation(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_classifies_as_query() {
        let cmd = Command::from(String::from("SELECT username FROM Users"));
        assert!(matches!(cmd, Command::Query(_)));
    }

    #[test]
    fn case_variants_classify_identically() {
        for s in ["select 1", "SeLeCt 1", "SELECT 1"] {
            let cmd = Command::from(String::from(s));
            assert!(matches!(cmd, Command::Query(_)), "{s}");
        }
    }

    #[test]
    fn leading_whitespace_is_trimmed() {
        let cmd = Command::from(String::from("  \tselect 1"));
        assert!(matches!(cmd, Command::Query(_)));
    }

    #[test]
    fn insert_classifies_as_mutation() {
        let cmd = Command::from(String::from(
            "INSERT INTO Users(username,password) VALUES('a','b')",
        ));
        assert!(matches!(cmd, Command::Mutation(_)));
    }

    #[test]
    fn empty_message_classifies_as_mutation() {
        let cmd = Command::from(String::default());
        assert!(matches!(cmd, Command::Mutation(_)));
    }

    #[test]
    fn malformed_input_classifies_as_mutation() {
        let cmd = Command::from(String::from("definitely not sql"));
        assert!(matches!(cmd, Command::Mutation(_)));
    }

    #[test]
    fn classified_command_keeps_original_text() {
        let cmd = Command::from(String::from("  select 1"));
        assert_eq!(cmd.text(), "  select 1");
    }
}
