/// Which line prefixes mark a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSyntax {
    /// `#` only.
    Hash,
    /// `#` and `/` (covers `// ...` and `/* ... */` lines).
    HashAndSlash,
}

impl CommentSyntax {
    pub fn from_legacy(legacy: bool) -> Self {
        if legacy {
            CommentSyntax::HashAndSlash
        } else {
            CommentSyntax::Hash
        }
    }

    pub fn is_comment(self, trimmed: &str) -> bool {
        match self {
            CommentSyntax::Hash => trimmed.starts_with('#'),
            CommentSyntax::HashAndSlash => trimmed.starts_with('#') || trimmed.starts_with('/'),
        }
    }
}

/// Trim every line and drop blanks and comments, keeping input order.
pub fn normalize_lines(text: &str, syntax: CommentSyntax) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !syntax.is_comment(line))
        .collect()
}
