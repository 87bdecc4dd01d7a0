//! Lead input types and field-level validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Look-back period bounding which platform activity counts as "recent".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryWindow {
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
}

impl HistoryWindow {
    /// Number of days covered by the window.
    #[must_use]
    pub fn days(self) -> i64 {
        match self {
            HistoryWindow::ThreeMonths => 90,
            HistoryWindow::SixMonths => 180,
            HistoryWindow::OneYear => 365,
        }
    }
}

/// Optional public profile URLs supplied with a lead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

/// A sales prospect (person + company) being evaluated.
///
/// Immutable input to the pipeline; created from user input, validated once,
/// then passed into the coordinator and scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadData {
    pub name: String,
    pub email: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "historyWindow")]
    pub history_window: HistoryWindow,
    #[serde(
        rename = "profileLinks",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_links: Option<ProfileLinks>,
}

/// A single invalid or missing lead field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Lead payload failed validation; carries every offending field.
#[derive(Debug, Clone, Error)]
#[error("invalid lead data ({} field(s))", .fields.len())]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl LeadData {
    /// Validate all lead fields, collecting every failure rather than
    /// stopping at the first.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] listing each invalid field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();

        if self.name.trim().is_empty() {
            fields.push(FieldError {
                field: "name",
                message: "Lead name is required",
            });
        }
        if !is_well_formed_email(&self.email) {
            fields.push(FieldError {
                field: "email",
                message: "Valid email is required",
            });
        }
        if self.title.trim().is_empty() {
            fields.push(FieldError {
                field: "title",
                message: "Job title is required",
            });
        }
        if self.company.trim().is_empty() {
            fields.push(FieldError {
                field: "company",
                message: "Company name is required",
            });
        }
        if self.location.trim().is_empty() {
            fields.push(FieldError {
                field: "location",
                message: "Location/Industry is required",
            });
        }

        if let Some(links) = &self.profile_links {
            for (field, value) in [
                ("profileLinks.linkedin", &links.linkedin),
                ("profileLinks.x", &links.x),
                ("profileLinks.other", &links.other),
            ] {
                if let Some(url) = value {
                    if !url.is_empty() && !is_well_formed_url(url) {
                        fields.push(FieldError {
                            field,
                            message: "Must be a well-formed URL or empty",
                        });
                    }
                }
            }
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields })
        }
    }

    /// Drop empty-string profile links so downstream consumers only see
    /// real URLs or `None`.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if let Some(links) = self.profile_links.take() {
            let clean = |v: Option<String>| v.filter(|s| !s.is_empty());
            let links = ProfileLinks {
                linkedin: clean(links.linkedin),
                x: clean(links.x),
                other: clean(links.other),
            };
            if links != ProfileLinks::default() {
                self.profile_links = Some(links);
            }
        }
        self
    }
}

/// Minimal structural email check: one `@`, dotted domain, no whitespace.
#[must_use]
pub fn is_well_formed_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

fn is_well_formed_url(url: &str) -> bool {
    let rest = if let Some(r) = url.strip_prefix("https://") {
        r
    } else if let Some(r) = url.strip_prefix("http://") {
        r
    } else {
        return false;
    };
    let host = rest.split('/').next().unwrap_or_default();
    !host.is_empty() && !host.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> LeadData {
        LeadData {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            title: "CTO".to_owned(),
            company: "Acme".to_owned(),
            location: "Berlin".to_owned(),
            history_window: HistoryWindow::SixMonths,
            profile_links: None,
        }
    }

    #[test]
    fn valid_lead_passes() {
        assert!(lead().validate().is_ok());
    }

    #[test]
    fn history_window_days() {
        assert_eq!(HistoryWindow::ThreeMonths.days(), 90);
        assert_eq!(HistoryWindow::SixMonths.days(), 180);
        assert_eq!(HistoryWindow::OneYear.days(), 365);
    }

    #[test]
    fn collects_all_invalid_fields() {
        let mut l = lead();
        l.name = "  ".to_owned();
        l.email = "not-an-email".to_owned();
        l.company = String::new();
        let err = l.validate().unwrap_err();
        let fields: Vec<&str> = err.fields.iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["name", "email", "company"]);
    }

    #[test]
    fn empty_profile_link_is_allowed() {
        let mut l = lead();
        l.profile_links = Some(ProfileLinks {
            linkedin: Some(String::new()),
            x: None,
            other: None,
        });
        assert!(l.validate().is_ok());
    }

    #[test]
    fn malformed_profile_link_is_rejected() {
        let mut l = lead();
        l.profile_links = Some(ProfileLinks {
            linkedin: Some("notaurl".to_owned()),
            x: None,
            other: None,
        });
        let err = l.validate().unwrap_err();
        assert_eq!(err.fields[0].field, "profileLinks.linkedin");
    }

    #[test]
    fn normalized_drops_empty_links() {
        let mut l = lead();
        l.profile_links = Some(ProfileLinks {
            linkedin: Some(String::new()),
            x: Some("https://x.com/jane".to_owned()),
            other: Some(String::new()),
        });
        let n = l.normalized();
        let links = n.profile_links.unwrap();
        assert_eq!(links.linkedin, None);
        assert_eq!(links.x.as_deref(), Some("https://x.com/jane"));
    }

    #[test]
    fn history_window_serde_round_trip() {
        let json = serde_json::to_string(&HistoryWindow::ThreeMonths).unwrap();
        assert_eq!(json, "\"3months\"");
        let back: HistoryWindow = serde_json::from_str("\"1year\"").unwrap();
        assert_eq!(back, HistoryWindow::OneYear);
    }
}
