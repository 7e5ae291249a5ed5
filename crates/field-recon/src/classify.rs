use crate::model::MatchStatus;

/// Trim surrounding whitespace and lowercase
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Compare a reference value with an extracted value.
///
/// Equal after normalization is a match; one containing the other is a
/// warning (e.g. "340g" inside "340g (12oz)"); anything else is an error.
pub fn classify_values(reference: &str, extracted: &str) -> MatchStatus {
    let reference = normalize(reference);
    let extracted = normalize(extracted);

    if reference == extracted {
        MatchStatus::Match
    } else if reference.contains(extracted.as_str()) || extracted.contains(reference.as_str()) {
        MatchStatus::Warning
    } else {
        MatchStatus::Error
    }
}
