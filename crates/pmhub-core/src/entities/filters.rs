use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::CaseStudy;
use crate::enums::{LikesRange, Market, Objective};

/// Client-side selection over a case-study collection.
///
/// Every empty criterion is unconstrained; non-empty criteria combine with AND.
/// Within `objectives`, a case study matches if it carries any selected tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CaseStudiesFilters {
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub companies: BTreeSet<String>,
    #[serde(default)]
    pub markets: BTreeSet<Market>,
    #[serde(default)]
    pub likes: Option<LikesRange>,
    #[serde(default)]
    pub objectives: BTreeSet<Objective>,
    #[serde(default)]
    pub search: String,
}

impl CaseStudiesFilters {
    /// True when no criterion is set, i.e. every case study matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.companies.is_empty()
            && self.markets.is_empty()
            && self.likes.is_none()
            && self.objectives.is_empty()
            && self.search.trim().is_empty()
    }

    #[must_use]
    pub fn matches(&self, study: &CaseStudy) -> bool {
        if !contains_ignore_case(&self.categories, &study.category) {
            return false;
        }
        if !contains_ignore_case(&self.companies, &study.company) {
            return false;
        }
        if !self.markets.is_empty() && !self.markets.contains(&study.market) {
            return false;
        }
        if let Some(range) = self.likes
            && !range.contains(study.likes)
        {
            return false;
        }
        if !self.objectives.is_empty()
            && !study.objective.iter().any(|o| self.objectives.contains(o))
        {
            return false;
        }
        self.matches_search(study)
    }

    /// Matching case studies, in input order.
    #[must_use]
    pub fn apply<'a>(&self, studies: &'a [CaseStudy]) -> Vec<&'a CaseStudy> {
        studies.iter().filter(|s| self.matches(s)).collect()
    }

    fn matches_search(&self, study: &CaseStudy) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            &study.title,
            &study.company,
            &study.category,
            &study.description,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Empty set means "no constraint".
fn contains_ignore_case(set: &BTreeSet<String>, value: &str) -> bool {
    set.is_empty() || set.iter().any(|v| v.trim().eq_ignore_ascii_case(value))
}

/// One distinct value with the number of case studies carrying it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Distinct filterable values present in a collection, for building filter menus.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CaseStudyFacets {
    pub categories: Vec<FacetCount>,
    pub companies: Vec<FacetCount>,
    pub total: usize,
}

impl CaseStudyFacets {
    /// Collect sorted, distinct categories and companies with counts.
    #[must_use]
    pub fn collect(studies: &[CaseStudy]) -> Self {
        let mut categories = BTreeMap::<&str, usize>::new();
        let mut companies = BTreeMap::<&str, usize>::new();
        for study in studies {
            *categories.entry(study.category.as_str()).or_default() += 1;
            *companies.entry(study.company.as_str()).or_default() += 1;
        }
        let to_counts = |map: BTreeMap<&str, usize>| {
            map.into_iter()
                .map(|(value, count)| FacetCount {
                    value: value.to_string(),
                    count,
                })
                .collect()
        };
        Self {
            categories: to_counts(categories),
            companies: to_counts(companies),
            total: studies.len(),
        }
    }
}
