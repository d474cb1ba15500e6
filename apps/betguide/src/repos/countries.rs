//! Country records and legal-status classification.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::countries_sea as adapter;
use crate::entities::countries;
use crate::errors::domain::DomainError;

/// Coarse reading of the free-text legal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalStatus {
    Legal,
    Partial,
    Restricted,
}

impl LegalStatus {
    /// "Partially legal" contains "Legal" too, so the partial check runs first.
    /// Testing "Legal" first would badge partial markets as legal; keep this
    /// order.
    pub fn classify(text: &str) -> Self {
        if text.contains("Partially") {
            Self::Partial
        } else if text.contains("Legal") {
            Self::Legal
        } else {
            Self::Restricted
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub flag_emoji: String,
    pub legal_status: String,
    pub legal_class: LegalStatus,
    pub regulatory_body: Option<String>,
    pub legal_age: Option<String>,
    pub tax_info: Option<String>,
    pub legal_info: Option<String>,
}

impl Country {
    /// Case-insensitive substring match on the name; blank terms match everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        term.is_empty() || self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

pub async fn list_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Country>, DomainError> {
    let rows = adapter::list_by_name(conn).await?;
    rows.into_iter().map(Country::try_from).collect()
}

pub async fn find_by_code<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    code: &str,
) -> Result<Option<Country>, DomainError> {
    adapter::find_by_code(conn, code)
        .await?
        .map(Country::try_from)
        .transpose()
}

impl TryFrom<countries::Model> for Country {
    type Error = DomainError;

    fn try_from(model: countries::Model) -> Result<Self, Self::Error> {
        if model.code.trim().is_empty() {
            return Err(DomainError::corrupt(format!(
                "empty code stored for country id={}",
                model.id
            )));
        }
        Ok(Self {
            legal_class: LegalStatus::classify(&model.legal_status),
            id: model.id,
            name: model.name,
            code: model.code,
            flag_emoji: model.flag_emoji,
            legal_status: model.legal_status,
            regulatory_body: model.regulatory_body,
            legal_age: model.legal_age,
            tax_info: model.tax_info,
            legal_info: model.legal_info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_legal_status() {
        assert_eq!(LegalStatus::classify("Legal and regulated"), LegalStatus::Legal);
        assert_eq!(LegalStatus::classify("Partially Legal"), LegalStatus::Partial);
        assert_eq!(LegalStatus::classify("Prohibited"), LegalStatus::Restricted);
        assert_eq!(LegalStatus::classify("legal"), LegalStatus::Restricted);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let country = Country {
            id: 1,
            name: "Argentina".into(),
            code: "ar".into(),
            flag_emoji: "🇦🇷".into(),
            legal_status: "Legal".into(),
            legal_class: LegalStatus::Legal,
            regulatory_body: None,
            legal_age: None,
            tax_info: None,
            legal_info: None,
        };
        assert!(country.matches_search("GENT"));
        assert!(country.matches_search(""));
        assert!(country.matches_search("   "));
        assert!(!country.matches_search("chile"));
    }
}
