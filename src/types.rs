use serde::{Deserialize, Serialize};

/// Overall verdict returned by the analysis provider. Closed set: a status
/// outside these four values fails validation rather than being coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
    Suspicious,
}

/// Fields the provider managed to read off the document. All optional;
/// absence means "not found on document", not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
}

/// One verification verdict. Built once per successful analysis call and
/// replaced wholesale by the next; `status`, `confidence_score`,
/// `risk_factors` and `summary` are required on the wire, `extracted_data`
/// entries are individually optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub status: VerificationStatus,
    pub confidence_score: f64,
    #[serde(default)]
    pub extracted_data: ExtractedFields,
    pub risk_factors: Vec<String>,
    pub summary: String,
}

/// Presentation affordance class for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Affirmative,
    Negative,
    Cautionary,
    Neutral,
}

/// What the results pane shows next to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub tone: StatusTone,
    pub color_class: &'static str,
    pub icon: &'static str,
}

/// Total over the enumeration; `PENDING` falls through to neutral.
pub fn status_badge(status: VerificationStatus) -> StatusBadge {
    match status {
        VerificationStatus::Verified => StatusBadge {
            tone: StatusTone::Affirmative,
            color_class: "text-green-600 bg-green-50 border-green-200",
            icon: "check-circle",
        },
        VerificationStatus::Rejected => StatusBadge {
            tone: StatusTone::Negative,
            color_class: "text-red-600 bg-red-50 border-red-200",
            icon: "x",
        },
        VerificationStatus::Suspicious => StatusBadge {
            tone: StatusTone::Cautionary,
            color_class: "text-amber-600 bg-amber-50 border-amber-200",
            icon: "alert-triangle",
        },
        VerificationStatus::Pending => StatusBadge {
            tone: StatusTone::Neutral,
            color_class: "text-slate-600 bg-slate-50 border-slate-200",
            icon: "file-text",
        },
    }
}

/// "documentNumber" -> "document number", for human-readable field labels.
pub fn field_label(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out.trim().to_string()
}
