//! Typed id parsing for path segments and body fields.

use std::str::FromStr;

use attend_core::error::AppError;

/// Parses a typed id, reporting a validation error naming `field`.
pub fn parse_id<T: FromStr>(raw: &str, field: &str) -> Result<T, AppError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::validation(format!("Invalid {field}: '{raw}'")))
}

#[cfg(test)]
mod tests {
    use attend_core::types::LectureId;

    use super::*;

    #[test]
    fn test_parse_id() {
        let id = LectureId::new();
        assert_eq!(parse_id::<LectureId>(&id.to_string(), "lectureId").unwrap(), id);
        let err = parse_id::<LectureId>("abc", "lectureId").unwrap_err();
        assert_eq!(err.message, "Invalid lectureId: 'abc'");
    }
}
