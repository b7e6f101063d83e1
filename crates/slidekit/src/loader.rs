//! Loading layout and review documents.

use crate::error::{Error, Result};
use crate::template::interpolate;
use crate::types::{ReviewData, SlideConfig};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse a layout file.
pub fn load_config(path: &Path) -> Result<SlideConfig> {
    let content = read(path)?;
    parse(&content, &path.display().to_string())
}

/// Read a template file, substitute `data` into it, then parse the result.
///
/// Substitution never fails; a template that yields invalid JSON surfaces
/// as [`Error::Parse`].
pub fn load_template(path: &Path, data: &Value) -> Result<SlideConfig> {
    let content = read(path)?;
    let interpolated = interpolate(&content, data);
    parse(&interpolated, &path.display().to_string())
}

/// Read a JSON data file (template values).
pub fn load_data(path: &Path) -> Result<Value> {
    let content = read(path)?;
    parse(&content, &path.display().to_string())
}

/// Read a review data file.
pub fn load_review(path: &Path) -> Result<ReviewData> {
    let content = read(path)?;
    parse_review(&content, &path.display().to_string())
}

/// Parse a layout document from text.
pub fn parse_config(content: &str, origin: &str) -> Result<SlideConfig> {
    parse(content, origin)
}

/// Parse a review document from text.
pub fn parse_review(content: &str, origin: &str) -> Result<ReviewData> {
    parse(content, origin)
}

fn read(path: &Path) -> Result<String> {
    log::debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

fn parse<T: DeserializeOwned>(content: &str, origin: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|e| Error::parse(origin, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorRef;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config() {
        let file = write_temp(r#"{"title": "Test Presentation", "slides": [{"elements": []}]}"#);
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.title, "Test Presentation");
        assert_eq!(config.slides.len(), 1);
        assert!(config.slides[0].elements.is_empty());
        assert!(config.presentation_id.is_none());
    }

    #[test]
    fn test_load_config_invalid_json() {
        let file = write_temp("{\"title\": ");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/slides.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_template() {
        let file = write_temp(
            r#"{
                "title": "{{deck.title}}",
                "slides": [{
                    "elements": [{"text": "{{points}}", "x": 0, "y": 0, "w": 10, "h": 10, "size": 12, "color": "{{deck.color}}"}],
                    "notes": "{{missing}}"
                }]
            }"#,
        );
        let data = json!({
            "deck": {"title": "Quarterly \"Review\"", "color": "#ff0000"},
            "points": ["Revenue up", "Costs down"],
        });

        let config = load_template(file.path(), &data).unwrap();
        assert_eq!(config.title, "Quarterly \"Review\"");
        let slide = &config.slides[0];
        assert_eq!(slide.elements[0].text, "Revenue up\nCosts down");
        assert_eq!(slide.elements[0].color, ColorRef::from("#ff0000"));
        assert_eq!(slide.notes.as_deref(), Some("{{missing}}"));
    }

    #[test]
    fn test_load_template_invalid_after_substitution() {
        // Unquoted placeholder producing a bare word is not valid JSON.
        let file = write_temp(r#"{"title": {{title}}, "slides": []}"#);
        let err = load_template(file.path(), &json!({"title": "plain"})).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_load_template_numeric_substitution() {
        let file = write_temp(
            r#"{"title": "t", "slides": [{"elements": [{"text": "x", "x": {{pos.x}}, "y": 0, "w": 1, "h": 1, "size": {{size}}, "color": "black"}]}]}"#,
        );
        let config = load_template(file.path(), &json!({"pos": {"x": 72}, "size": 24})).unwrap();
        assert_eq!(config.slides[0].elements[0].x, 72.0);
        assert_eq!(config.slides[0].elements[0].size, 24.0);
    }

    #[test]
    fn test_load_data() {
        let file = write_temp(r#"{"name": "value"}"#);
        assert_eq!(load_data(file.path()).unwrap(), json!({"name": "value"}));
    }

    #[test]
    fn test_parse_review_from_stdin_text() {
        let review = parse_review(
            r#"{
                "prNumber": 7, "prTitle": "Fix", "prAuthor": "dev", "prDate": "2024-01-15",
                "repository": "org/repo", "summary": "s", "changes": [],
                "qualityAssessment": {
                    "codeQuality": {"status": "pass", "notes": ""},
                    "tests": {"status": "warning", "notes": ""},
                    "security": {"status": "pass", "notes": ""},
                    "performance": {"status": "issue", "notes": ""}
                },
                "issuesFound": [], "suggestions": [],
                "verdict": "COMMENT", "verdictExplanation": "ok"
            }"#,
            "stdin",
        )
        .unwrap();
        assert_eq!(review.pr_number, 7);
        assert!(review.risk_level.is_none());
    }

    #[test]
    fn test_parse_review_error_names_origin() {
        let err = parse_review("[]", "stdin").unwrap_err();
        assert!(err.to_string().contains("stdin"));
    }
}
