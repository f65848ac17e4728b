use crate::shared::http::ApiError;

/// Extensions accepted for rule uploads, longest first so `.txt.nfo`
/// is stripped as a whole.
const RULE_EXTENSIONS: [&str; 3] = [".txt.nfo", ".nfo", ".txt"];

fn matched_extension(file_name: &str) -> Option<&'static str> {
    let lower = file_name.to_ascii_lowercase();
    RULE_EXTENSIONS
        .into_iter()
        .find(|ext| lower.len() > ext.len() && lower.ends_with(ext))
}

pub fn validate_rule_file_name(file_name: &str) -> Result<(), ApiError> {
    match matched_extension(file_name) {
        Some(_) => Ok(()),
        None => Err(ApiError::Validation(format!(
            "Invalid file \"{}\": only .nfo and .txt files are accepted",
            file_name
        ))),
    }
}

/// Rule name suggested for an uploaded file: the file name without its
/// extension.
pub fn default_rule_name(file_name: &str) -> String {
    match matched_extension(file_name) {
        Some(ext) => file_name[..file_name.len() - ext.len()].to_string(),
        None => file_name.to_string(),
    }
}

/// Parses the optional year field of the rule forms.
pub fn parse_year(raw: &str) -> Result<Option<i32>, ApiError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i32>()
        .ok()
        .filter(|y| (1990..=2100).contains(y))
        .map(Some)
        .ok_or_else(|| ApiError::Validation(format!("Invalid year: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_extensions() {
        for name in ["rules.nfo", "rules.txt", "rules.txt.nfo", "RULES.NFO", "Tv.Txt"] {
            assert!(validate_rule_file_name(name).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_rejected_extensions() {
        for name in ["rules.pdf", "rules.nfo.zip", "rules", ".nfo", "nfo"] {
            let err = validate_rule_file_name(name).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)), "{}", name);
        }
    }

    #[test]
    fn test_default_rule_name() {
        assert_eq!(default_rule_name("2024_EBOOK.nfo"), "2024_EBOOK");
        assert_eq!(default_rule_name("tv-x264.TXT.NFO"), "tv-x264");
        assert_eq!(default_rule_name("notes.txt"), "notes");
        assert_eq!(default_rule_name("archive.zip"), "archive.zip");
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year(""), Ok(None));
        assert_eq!(parse_year(" 2024 "), Ok(Some(2024)));
        assert!(parse_year("20x4").is_err());
        assert!(parse_year("1200").is_err());
    }
}
