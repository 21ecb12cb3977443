use crate::SourcePosition;

/// An error produced while parsing an executable document.
///
/// Every failure aborts the whole parse; a partially consumed or
/// partially valid document is never returned. Inside the parser, errors
/// are also the signal that drives ordered alternation: a failing
/// alternative's error is discarded when a later alternative succeeds,
/// and only the error of the last alternative survives when all fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required token was not found.
    ///
    /// `expected` describes the token or production that was required
    /// (e.g. "name", "`:`", "selection set").
    #[error("expected {expected} at {position}")]
    ExpectedInput {
        expected: String,
        position: SourcePosition,
    },

    /// A richer failure, such as numeric overflow, carrying a snippet of
    /// the input around the failing attempt.
    #[error("{summary}: {label} at {from} (near `{snippet}`)")]
    Failed {
        /// What was being parsed (e.g. "failed to parse `i64`").
        summary: String,
        /// What went wrong (e.g. "overflowed 9223372036854775807").
        label: String,
        /// Where the failing attempt began.
        from: SourcePosition,
        /// The input just after the failure point.
        snippet: String,
    },
}

impl ParseError {
    pub(crate) fn expected(expected: impl Into<String>, position: SourcePosition) -> Self {
        ParseError::ExpectedInput {
            expected: expected.into(),
            position,
        }
    }

    /// Returns the position the error is anchored to.
    pub fn position(&self) -> SourcePosition {
        match self {
            ParseError::ExpectedInput { position, .. } => *position,
            ParseError::Failed { from, .. } => *from,
        }
    }
}
