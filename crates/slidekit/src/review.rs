//! Fixed five-slide template for code review results.
//!
//! This path is independent of [`crate::compiler`]: slides use the
//! `TITLE_AND_BODY` layout and text goes into the layout's placeholders, so
//! there is no theme, color, or geometry involved.

use crate::request::{CreateSlide, LayoutReference, PredefinedLayout, Request};
use crate::types::{PresentationInfo, ReviewData};
use chrono::{DateTime, NaiveDate};

/// The slides of a review deck, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewSlide {
    /// PR title, number, repository, author, date.
    Title,
    /// Summary and change bullets.
    Summary,
    /// Business impact, affected areas, quality summary.
    Impact,
    /// Risk level, risk factors, issues.
    Risks,
    /// Verdict and suggestions.
    Verdict,
}

impl ReviewSlide {
    /// All slides in deck order.
    pub const ALL: [ReviewSlide; 5] = [
        Self::Title,
        Self::Summary,
        Self::Impact,
        Self::Risks,
        Self::Verdict,
    ];

    fn prefix(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Summary => "summary",
            Self::Impact => "impact",
            Self::Risks => "risks",
            Self::Verdict => "verdict",
        }
    }

    /// Object id for this slide.
    #[must_use]
    pub fn object_id(&self, stamp: i64) -> String {
        format!("{}_{}", self.prefix(), stamp)
    }

    /// Text of the title placeholder.
    #[must_use]
    pub fn title_text(&self, data: &ReviewData) -> String {
        match self {
            Self::Title => data.pr_title.clone(),
            Self::Summary => "What Changed".to_string(),
            Self::Impact => "Impact Assessment".to_string(),
            Self::Risks => "Risk Assessment".to_string(),
            Self::Verdict => format!("Recommendation: {}", data.verdict),
        }
    }

    /// Text of the body placeholder.
    #[must_use]
    pub fn body_text(&self, data: &ReviewData) -> String {
        let lines = match self {
            Self::Title => vec![
                format!("PR #{} | {}", data.pr_number, data.repository),
                format!("{} | {}", data.pr_author, format_date(&data.pr_date)),
            ],
            Self::Summary => summary_lines(data),
            Self::Impact => impact_lines(data),
            Self::Risks => risk_lines(data),
            Self::Verdict => verdict_lines(data),
        };
        lines.join("\n")
    }
}

/// Title of the generated deck.
#[must_use]
pub fn deck_title(data: &ReviewData) -> String {
    format!("PR Review: {}", data.pr_title)
}

/// Delete the service's default slide and add the five review slides.
#[must_use]
pub fn setup_requests(initial_slide_id: Option<&str>, stamp: i64) -> Vec<Request> {
    let create = ReviewSlide::ALL.iter().map(|slide| {
        Request::CreateSlide(CreateSlide {
            object_id: slide.object_id(stamp),
            insertion_index: None,
            slide_layout_reference: LayoutReference {
                predefined_layout: PredefinedLayout::TitleAndBody,
            },
        })
    });

    initial_slide_id
        .map(Request::delete)
        .into_iter()
        .chain(create)
        .collect()
}

/// Fill the title and body placeholders of every review slide in `deck`.
///
/// Slides not created by [`setup_requests`] with the same `stamp` are
/// ignored, as are missing placeholders.
#[must_use]
pub fn content_requests(data: &ReviewData, deck: &PresentationInfo, stamp: i64) -> Vec<Request> {
    let mut requests = Vec::new();

    for fetched in &deck.slides {
        let Some(slide) = ReviewSlide::ALL
            .iter()
            .find(|s| s.object_id(stamp) == fetched.object_id)
        else {
            continue;
        };

        if let Some(title_id) = fetched.placeholder("TITLE") {
            requests.push(Request::insert_text_at_start(title_id, slide.title_text(data)));
        }
        if let Some(body_id) = fetched.placeholder("BODY") {
            requests.push(Request::insert_text_at_start(body_id, slide.body_text(data)));
        }
    }

    requests
}

/// Format an ISO date like `January 15, 2024`.
///
/// Accepts a full RFC 3339 timestamp or a plain `YYYY-MM-DD` date; anything
/// else is returned unchanged.
#[must_use]
pub fn format_date(iso_date: &str) -> String {
    let date = DateTime::parse_from_rfc3339(iso_date)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(iso_date, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => iso_date.to_string(),
    }
}

fn bullets(items: &[String]) -> impl Iterator<Item = String> + '_ {
    items.iter().map(|item| format!("- {}", item))
}

fn summary_lines(data: &ReviewData) -> Vec<String> {
    let mut lines = vec![data.summary.clone(), String::new()];
    lines.extend(bullets(&data.changes));
    lines
}

fn impact_lines(data: &ReviewData) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(impact) = data.business_impact.as_deref().filter(|s| !s.is_empty()) {
        lines.push("Business Impact:".to_string());
        lines.push(impact.to_string());
        lines.push(String::new());
    }

    if !data.affected_areas.is_empty() {
        lines.push("Affected Areas:".to_string());
        lines.extend(bullets(&data.affected_areas));
        lines.push(String::new());
    }

    let qa = &data.quality_assessment;
    lines.push("Quality Summary:".to_string());
    lines.push(format!("- Code Quality: {}", qa.code_quality.status.label()));
    lines.push(format!("- Tests: {}", qa.tests.status.label()));
    lines.push(format!("- Security: {}", qa.security.status.label()));
    lines.push(format!("- Performance: {}", qa.performance.status.label()));
    lines
}

fn risk_lines(data: &ReviewData) -> Vec<String> {
    let level = data.risk_level.unwrap_or_default();
    let mut lines = vec![format!("Risk Level: {}", level.label()), String::new()];

    if !data.risk_factors.is_empty() {
        lines.push("Risk Factors:".to_string());
        lines.extend(bullets(&data.risk_factors));
        lines.push(String::new());
    }

    if data.issues_found.is_empty() {
        lines.push("No blocking issues found.".to_string());
    } else {
        lines.push("Issues Found:".to_string());
        lines.extend(bullets(&data.issues_found));
    }
    lines
}

fn verdict_lines(data: &ReviewData) -> Vec<String> {
    let mut lines = vec![data.verdict_explanation.clone(), String::new()];

    if !data.suggestions.is_empty() {
        lines.push("Suggestions:".to_string());
        lines.extend(bullets(&data.suggestions));
    }
    lines
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::{
        CheckStatus, Placeholder, QualityAssessment, QualityCheck, RiskLevel, SlideInfo, Verdict,
    };

    fn check(status: CheckStatus) -> QualityCheck {
        QualityCheck {
            status,
            notes: String::new(),
        }
    }

    pub(crate) fn sample_review() -> ReviewData {
        ReviewData {
            pr_number: 42,
            pr_title: "Add retry to uploader".to_string(),
            pr_author: "octocat".to_string(),
            pr_date: "2024-01-15T10:30:00Z".to_string(),
            repository: "acme/uploader".to_string(),
            summary: "Adds bounded retries.".to_string(),
            changes: vec!["New retry module".to_string(), "Config flag".to_string()],
            quality_assessment: QualityAssessment {
                code_quality: check(CheckStatus::Pass),
                tests: check(CheckStatus::Warning),
                security: check(CheckStatus::Pass),
                performance: check(CheckStatus::Issue),
            },
            issues_found: vec![],
            suggestions: vec!["Add jitter".to_string()],
            verdict: Verdict::Approve,
            verdict_explanation: "Solid change.".to_string(),
            business_impact: None,
            risk_level: None,
            risk_factors: vec![],
            affected_areas: vec![],
        }
    }

    /// A fetched slide with title and body placeholders.
    pub(crate) fn slide_with_placeholders(id: &str) -> SlideInfo {
        SlideInfo {
            object_id: id.to_string(),
            notes_object_id: None,
            placeholders: vec![
                Placeholder {
                    object_id: format!("{}_t", id),
                    kind: "TITLE".to_string(),
                },
                Placeholder {
                    object_id: format!("{}_b", id),
                    kind: "BODY".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_deck_title() {
        assert_eq!(deck_title(&sample_review()), "PR Review: Add retry to uploader");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-15"), "January 15, 2024");
        assert_eq!(format_date("2024-03-05T12:00:00Z"), "March 5, 2024");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_title_slide_text() {
        let data = sample_review();
        assert_eq!(ReviewSlide::Title.title_text(&data), "Add retry to uploader");
        assert_eq!(
            ReviewSlide::Title.body_text(&data),
            "PR #42 | acme/uploader\noctocat | January 15, 2024"
        );
    }

    #[test]
    fn test_summary_slide_text() {
        let data = sample_review();
        assert_eq!(ReviewSlide::Summary.title_text(&data), "What Changed");
        assert_eq!(
            ReviewSlide::Summary.body_text(&data),
            "Adds bounded retries.\n\n- New retry module\n- Config flag"
        );
    }

    #[test]
    fn test_impact_slide_minimal() {
        let data = sample_review();
        assert_eq!(
            ReviewSlide::Impact.body_text(&data),
            "Quality Summary:\n- Code Quality: OK\n- Tests: WARN\n- Security: OK\n- Performance: ISSUE"
        );
    }

    #[test]
    fn test_impact_slide_full() {
        let mut data = sample_review();
        data.business_impact = Some("Fewer failed uploads".to_string());
        data.affected_areas = vec!["uploader".to_string()];
        let body = ReviewSlide::Impact.body_text(&data);
        assert!(body.starts_with(
            "Business Impact:\nFewer failed uploads\n\nAffected Areas:\n- uploader\n\nQuality Summary:"
        ));
    }

    #[test]
    fn test_risk_slide_defaults() {
        let data = sample_review();
        assert_eq!(
            ReviewSlide::Risks.body_text(&data),
            "Risk Level: LOW\n\nNo blocking issues found."
        );
    }

    #[test]
    fn test_risk_slide_with_issues() {
        let mut data = sample_review();
        data.risk_level = Some(RiskLevel::High);
        data.risk_factors = vec!["Touches auth".to_string()];
        data.issues_found = vec!["Missing test".to_string()];
        assert_eq!(
            ReviewSlide::Risks.body_text(&data),
            "Risk Level: HIGH\n\nRisk Factors:\n- Touches auth\n\nIssues Found:\n- Missing test"
        );
    }

    #[test]
    fn test_verdict_slide_text() {
        let mut data = sample_review();
        data.verdict = Verdict::RequestChanges;
        assert_eq!(
            ReviewSlide::Verdict.title_text(&data),
            "Recommendation: REQUEST_CHANGES"
        );
        assert_eq!(
            ReviewSlide::Verdict.body_text(&data),
            "Solid change.\n\nSuggestions:\n- Add jitter"
        );

        data.suggestions.clear();
        assert_eq!(ReviewSlide::Verdict.body_text(&data), "Solid change.\n");
    }

    #[test]
    fn test_setup_requests() {
        let requests = setup_requests(Some("default"), 9);
        assert_eq!(requests.len(), 6);
        assert_eq!(requests[0], Request::delete("default"));
        let ids: Vec<_> = requests[1..].iter().map(Request::object_id).collect();
        assert_eq!(
            ids,
            vec!["title_9", "summary_9", "impact_9", "risks_9", "verdict_9"]
        );

        assert_eq!(setup_requests(None, 9).len(), 5);
    }

    #[test]
    fn test_content_requests_match_by_id() {
        let data = sample_review();
        let mut missing_body = slide_with_placeholders("verdict_1");
        missing_body.placeholders.pop();

        let deck = PresentationInfo {
            presentation_id: "p".to_string(),
            slides: vec![
                slide_with_placeholders("title_1"),
                slide_with_placeholders("unrelated"),
                missing_body,
            ],
        };

        let requests = content_requests(&data, &deck, 1);
        assert_eq!(
            requests,
            vec![
                Request::insert_text_at_start("title_1_t", "Add retry to uploader"),
                Request::insert_text_at_start(
                    "title_1_b",
                    "PR #42 | acme/uploader\noctocat | January 15, 2024"
                ),
                Request::insert_text_at_start("verdict_1_t", "Recommendation: APPROVE"),
            ]
        );
    }
}
