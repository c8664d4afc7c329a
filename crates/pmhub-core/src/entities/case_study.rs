use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Market, Objective};
use crate::errors::CoreError;

/// A product case study served by the content API.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    #[serde(rename = "isNew")]
    pub is_new: bool,
    pub likes: u32,
    pub category: String,
    pub company: String,
    #[serde(default)]
    pub creator: Option<String>,
    pub market: Market,
    /// Always populated upstream, but not enforced there.
    #[schemars(length(min = 1))]
    pub objective: Vec<Objective>,
    pub description: String,
    pub image: String,
}

impl CaseStudy {
    /// Check the invariants the content API declares but does not enforce.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `objective` is empty or `id` is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::Validation(
                "case study id must not be empty".into(),
            ));
        }
        if self.objective.is_empty() {
            return Err(CoreError::Validation(format!(
                "case study '{}' has no objective tags",
                self.id
            )));
        }
        Ok(())
    }

    /// Whether the case study carries `objective`.
    #[must_use]
    pub fn has_objective(&self, objective: Objective) -> bool {
        self.objective.contains(&objective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CaseStudy {
        CaseStudy {
            id: "17".into(),
            title: "How Duolingo doubled DAU".into(),
            is_new: true,
            likes: 420,
            category: "Consumer".into(),
            company: "Duolingo".into(),
            creator: None,
            market: Market::B2c,
            objective: vec![Objective::Engagement, Objective::Retention],
            description: "Streaks, leagues, and notifications.".into(),
            image: "https://cdn.example.com/duolingo.png".into(),
        }
    }

    #[test]
    fn valid_case_study_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn empty_objective_is_rejected() {
        let mut study = sample();
        study.objective.clear();
        let err = study.validate().unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(err.to_string().contains("no objective"));
    }

    #[test]
    fn blank_id_is_rejected() {
        let mut study = sample();
        study.id = "  ".into();
        assert!(study.validate().is_err());
    }

    #[test]
    fn is_new_uses_camel_case_wire_name() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["isNew"], true);
        assert!(value.get("is_new").is_none());
    }

    #[test]
    fn creator_may_be_absent_or_null() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["creator"] = serde_json::Value::Null;
        let with_null: CaseStudy = serde_json::from_value(value.clone()).unwrap();
        assert!(with_null.creator.is_none());

        value.as_object_mut().unwrap().remove("creator");
        let absent: CaseStudy = serde_json::from_value(value).unwrap();
        assert!(absent.creator.is_none());
    }

    #[test]
    fn has_objective_checks_membership() {
        let study = sample();
        assert!(study.has_objective(Objective::Retention));
        assert!(!study.has_objective(Objective::Pricing));
    }
}
