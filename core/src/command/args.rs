//! Command line tokenization

/// Whether the host wants the command run or completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationMode {
    /// Run the command
    Execute,
    /// Offer tab completions; the line may still be half typed
    Suggest,
}

/// One command line delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub input: &'a str,
    pub mode: InvocationMode,
}

impl<'a> Invocation<'a> {
    pub fn execute(input: &'a str) -> Self {
        Self {
            input,
            mode: InvocationMode::Execute,
        }
    }

    pub fn suggest(input: &'a str) -> Self {
        Self {
            input,
            mode: InvocationMode::Suggest,
        }
    }

    pub fn tokens(&self) -> Vec<&'a str> {
        tokenize(self.input, self.mode)
    }
}

/// Split on every single space.
///
/// Execute mode drops trailing empty tokens. Suggest mode keeps them, so
/// `"spark "` ends in an empty token and completion offers the next word.
pub fn tokenize(input: &str, mode: InvocationMode) -> Vec<&str> {
    let mut tokens: Vec<&str> = input.split(' ').collect();
    if mode == InvocationMode::Execute {
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
    }
    tokens
}

/// The arguments after the command keyword, or `None` if the line is not
/// addressed to `keyword` (bare or with a leading `/`).
pub fn arguments(invocation: &Invocation<'_>, keyword: &str) -> Option<Vec<String>> {
    let tokens = invocation.tokens();
    let (head, rest) = tokens.split_first()?;
    if !is_keyword(head, keyword) {
        return None;
    }
    Some(rest.iter().map(|t| t.to_string()).collect())
}

fn is_keyword(token: &str, keyword: &str) -> bool {
    token == keyword || token.strip_prefix('/') == Some(keyword)
}
