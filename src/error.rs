use thiserror::Error;

/// Failure to encode output.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::txt::Formatter;

    /// Map keys that are not strings cannot be written as JSON object keys.
    #[derive(serde::Serialize)]
    struct TupleKeys(BTreeMap<(u8, u8), u8>);

    impl Formatter for TupleKeys {}

    #[test]
    fn test_encode_error_from_serde() {
        let keys = TupleKeys([((1, 2), 3)].into_iter().collect());
        let err = keys.to_json(false).unwrap_err();
        assert!(matches!(err, EncodeError::Json(_)));
        assert!(err.to_string().starts_with("JSON encoding error: "));
    }
}
