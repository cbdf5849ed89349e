use crate::types::institute::Institute;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A plain text rendering of an institute record.
///
/// Building the report is pure, delivering the bytes to the user is an
/// effect of the shell.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub file_name: String,
    pub content: String,
}

impl Report {
    pub fn new(institute: &Institute, generated_at: DateTime<Utc>) -> Self {
        let year = institute
            .year
            .map(|year| year.to_string())
            .unwrap_or_else(|| "N/A".to_owned());
        let mut lines = vec![
            "Institute Information Report".to_owned(),
            String::new(),
            format!("Institute Name: {}", institute.institute_name),
            format!("Institute Name (Bengali): {}", institute.institute_name_bn),
            format!("EIIN Number: {}", institute.eiin_no),
            format!("Type: {}", institute.institute_type_name),
            format!("Year: {year}"),
            String::new(),
            "Location:".to_owned(),
            format!(
                "Division: {} ({})",
                institute.division_name, institute.division_name_bn
            ),
            format!(
                "District: {} ({})",
                institute.district_name, institute.district_name_bn
            ),
            format!(
                "Thana: {} ({})",
                institute.thana_name, institute.thana_name_bn
            ),
            format!(
                "Mouza: {} ({})",
                institute.mouza_name, institute.mouza_name_bn
            ),
            String::new(),
            "Contact Information:".to_owned(),
        ];
        if let Some(mobile) = &institute.mobile {
            lines.push(format!("Mobile: {mobile}"));
        };
        if let Some(email) = &institute.email {
            lines.push(format!("Email: {email}"));
        };
        lines.extend(vec![
            String::new(),
            "Survey Information:".to_owned(),
            format!("Status: {}", institute.submission_status),
            format!("Verification: {}", institute.verification),
            format!(
                "Submission Date: {}",
                institute.submission_date.as_deref().unwrap_or("N/A")
            ),
            format!(
                "Circular Expiry: {}",
                institute.circular_expiry_date.as_deref().unwrap_or("N/A")
            ),
            String::new(),
            format!(
                "Generated on: {}",
                generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
        ]);
        Report {
            file_name: format!("institute_{}_report.txt", institute.eiin_no),
            content: lines.join("\n"),
        }
    }
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}
