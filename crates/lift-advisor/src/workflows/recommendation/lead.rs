//! Quote-request leads built from a recommendation, ready to hand to a CRM or a chat message.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::domain::{AccessCategory, JobRequirement, ScoredCandidate};

pub const LEAD_SOURCE: &str = "Spider lift advisor";

/// Sales line that receives quote requests over WhatsApp.
pub const SALES_WHATSAPP_NUMBER: &str = "+56942600557";

pub const DISCLAIMER: &str = "This recommendation is based solely on the information provided by \
the customer and on the equipment data sheets available at the time of the request. It is \
indicative only and is not a definitive technical validation. The final choice and use of the \
equipment is the customer's sole responsibility.";

/// Company and contact fields as entered by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub company_name: String,
    #[serde(default)]
    pub company_tax_id: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
}

impl ContactDetails {
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.company_name.trim().chars().count() < 2 {
            return Err(LeadError::CompanyName);
        }
        if self.contact_name.trim().chars().count() < 2 {
            return Err(LeadError::ContactName);
        }
        if normalize_phone(&self.phone).len() < 8 {
            return Err(LeadError::Phone(self.phone.clone()));
        }
        if !is_valid_email(&self.email) {
            return Err(LeadError::Email(self.email.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("company name must have at least 2 characters")]
    CompanyName,
    #[error("contact name must have at least 2 characters")]
    ContactName,
    #[error("phone number '{0}' is too short")]
    Phone(String),
    #[error("email '{0}' is not a valid address")]
    Email(String),
    #[error("no equipment available to recommend")]
    NoRecommendation,
}

/// Digits only, with the Chilean country code added to bare local numbers.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    if digits.starts_with("56") {
        return format!("+{digits}");
    }
    if digits.len() >= 8 {
        return format!("+56{digits}");
    }
    format!("+{digits}")
}

/// Chilean RUT layout: digits grouped with dots, check digit after a dash.
///
/// Everything but digits and `K` is dropped first. Input too short to hold a body and a
/// check digit is returned as entered.
pub fn format_tax_id(raw: &str) -> String {
    let cleaned: Vec<char> = raw
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'K')
        .collect();
    let Some((check, body)) = cleaned.split_last() else {
        return raw.to_string();
    };
    if body.is_empty() {
        return raw.to_string();
    }

    let mut grouped = String::with_capacity(body.len() + body.len() / 3);
    for (index, digit) in body.iter().enumerate() {
        if index > 0 && (body.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit);
    }
    format!("{grouped}-{check}")
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

/// `local@domain.tld` shape check: no whitespace, one `@`, a dot inside the domain.
pub fn is_valid_email(raw: &str) -> bool {
    email_pattern().is_match(raw.trim())
}

/// `wa.me` click-to-chat link that opens `number` with `text` prefilled.
pub fn whatsapp_url(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(text))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadCompany {
    pub name: String,
    pub tax_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadJob {
    #[serde(flatten)]
    pub requirement: JobRequirement,
    pub slope_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadRecommendation {
    pub model: String,
    pub max_working_height_m: f64,
    pub max_outreach_m: f64,
    pub power: String,
    pub min_access_width_cm: f64,
    pub stowed_height_m: f64,
    pub stowed_width_m: f64,
    pub stowed_length_m: f64,
    pub weight_kg: f64,
    pub score: f64,
    pub warnings: Vec<String>,
}

impl From<&ScoredCandidate> for LeadRecommendation {
    fn from(candidate: &ScoredCandidate) -> Self {
        let equipment = &candidate.equipment;
        Self {
            model: equipment.name.clone(),
            max_working_height_m: equipment.max_working_height_m,
            max_outreach_m: equipment.max_outreach_m,
            power: equipment.power_description.clone(),
            min_access_width_cm: equipment.min_access_width_cm,
            stowed_height_m: equipment.stowed_height_m,
            stowed_width_m: equipment.stowed_width_m,
            stowed_length_m: equipment.stowed_length_m,
            weight_kg: equipment.weight_kg,
            score: candidate.score,
            warnings: candidate.warnings.clone(),
        }
    }
}

/// Structured payload for the sales CRM.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteLead {
    pub source: String,
    pub company: LeadCompany,
    pub contact: LeadContact,
    pub job: LeadJob,
    pub recommendation: LeadRecommendation,
    pub generated_at: DateTime<Utc>,
}

impl QuoteLead {
    /// Assembles the lead from validated contact details and the top-ranked candidate.
    pub fn build(
        contact: &ContactDetails,
        requirement: &JobRequirement,
        top: Option<&ScoredCandidate>,
        generated_at: DateTime<Utc>,
    ) -> Result<Self, LeadError> {
        contact.validate()?;
        let top = top.ok_or(LeadError::NoRecommendation)?;

        Ok(Self {
            source: LEAD_SOURCE.to_string(),
            company: LeadCompany {
                name: contact.company_name.trim().to_string(),
                tax_id: format_tax_id(contact.company_tax_id.trim()),
            },
            contact: LeadContact {
                name: contact.contact_name.trim().to_string(),
                phone: normalize_phone(&contact.phone),
                email: contact.email.trim().to_string(),
            },
            job: LeadJob {
                requirement: requirement.clone(),
                slope_pct: requirement.slope_pct(),
            },
            recommendation: LeadRecommendation::from(top),
            generated_at,
        })
    }

    /// Plain-text quote request, one field per line, absent optional values omitted.
    pub fn message(&self) -> String {
        let job = &self.job.requirement;
        let rec = &self.recommendation;
        let yes_no = |flag: bool| if flag { "Yes" } else { "No" };

        let mut lines = vec![
            "Hello, I would like a formal quote with the following details:\n".to_string(),
            "COMPANY".to_string(),
            format!("- Name: {}", self.company.name),
            format!("- Tax ID: {}", self.company.tax_id),
            "\nCONTACT".to_string(),
            format!("- Name: {}", self.contact.name),
            format!("- Phone: {}", self.contact.phone),
            format!("- Email: {}", self.contact.email),
            "\nJOB".to_string(),
            format!("- Required working height: {} m", job.height_m),
        ];

        if let Some(outreach) = job.outreach_m {
            lines.push(format!("- Required outreach: {outreach} m"));
        }
        lines.push(format!("- Job type: {}", job.job_type.label()));
        lines.push(format!(
            "- Indoor/outdoor: {}",
            if job.indoor { "Indoor" } else { "Outdoor" }
        ));
        lines.push(format!("- Terrain: {}", job.terrain.label()));
        if let Some(slope) = job.slope_deg {
            lines.push(format!("- Slope: {slope:.1}°"));
        }
        lines.push(format!("- Access type: {}", job.access.label()));
        lines.push(format!("- Available access width: {} cm", job.access_width_cm));
        if let Some(height) = job.access_height_cm {
            lines.push(format!("- Available access height: {height} cm"));
        }
        if job.access == AccessCategory::Elevator {
            if let Some(kg) = job.elevator.max_load_kg {
                lines.push(format!("- Elevator max load: {kg} kg"));
            }
            if let Some(width) = job.elevator.cab_width_cm {
                lines.push(format!("- Elevator cab width: {width} cm"));
            }
            if let Some(depth) = job.elevator.cab_depth_cm {
                lines.push(format!("- Elevator cab depth: {depth} cm"));
            }
        }
        lines.push(format!(
            "- Emission/noise restriction: {}",
            yes_no(job.emissions_restricted)
        ));
        lines.push(format!(
            "- Negative access required: {}",
            yes_no(job.needs_negative_access)
        ));
        if !job.notes.is_empty() {
            lines.push(format!("- Notes: {}", job.notes));
        }

        lines.push("\nRECOMMENDED EQUIPMENT".to_string());
        lines.push(format!("- Model: {}", rec.model));
        lines.push(format!("- Max working height: {} m", rec.max_working_height_m));
        lines.push(format!("- Max outreach: {} m", rec.max_outreach_m));
        lines.push(format!("- Power: {}", rec.power));
        lines.push("\nSite photos attached.".to_string());
        lines.push(format!("\n{DISCLAIMER}"));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_phone_adds_country_code() {
        assert_eq!(normalize_phone("9 4260 0557"), "+56942600557");
        assert_eq!(normalize_phone("+56 9 4260 0557"), "+56942600557");
        assert_eq!(normalize_phone("12-34"), "+1234");
        assert_eq!(normalize_phone("n/a"), "");
    }

    #[test]
    fn email_shape_checks() {
        assert!(is_valid_email(" ops@example.cl "));
        assert!(is_valid_email("a.b@mail.example.com"));
        assert!(!is_valid_email("ops@example"));
        assert!(!is_valid_email("ops@.cl"));
        assert!(!is_valid_email("ops@example."));
        assert!(!is_valid_email("o ps@example.cl"));
        assert!(!is_valid_email("@example.cl"));
        assert!(!is_valid_email("ops@@example.cl"));
    }

    #[test]
    fn format_tax_id_groups_body_and_check_digit() {
        assert_eq!(format_tax_id("765432107"), "76.543.210-7");
        assert_eq!(format_tax_id("76543210k"), "76.543.210-K");
        assert_eq!(format_tax_id("76.543.210-k"), "76.543.210-K");
        assert_eq!(format_tax_id("1-9"), "1-9");
        assert_eq!(format_tax_id("7"), "7");
        assert_eq!(format_tax_id(""), "");
    }

    #[test]
    fn email_rejects_non_breaking_space() {
        assert!(!is_valid_email("ops@exa\u{a0}mple.cl"));
        assert!(!is_valid_email("a@b.c@d.e"));
    }

    #[test]
    fn whatsapp_url_keeps_digits_and_encodes_text() {
        assert_eq!(
            whatsapp_url("+56 9 4260 0557", "Hola, PSO-18BL & más"),
            "https://wa.me/56942600557?text=Hola%2C%20PSO-18BL%20%26%20m%C3%A1s"
        );
    }

    #[test]
    fn validate_reports_first_problem() {
        let mut contact = ContactDetails {
            company_name: "Acme".to_string(),
            company_tax_id: "76.123.456-7".to_string(),
            contact_name: "Ana".to_string(),
            phone: "942600557".to_string(),
            email: "ana@acme.cl".to_string(),
        };
        assert_eq!(contact.validate(), Ok(()));

        contact.phone = "123".to_string();
        assert_eq!(contact.validate(), Err(LeadError::Phone("123".to_string())));

        contact.company_name = " A ".to_string();
        assert_eq!(contact.validate(), Err(LeadError::CompanyName));
    }
}
