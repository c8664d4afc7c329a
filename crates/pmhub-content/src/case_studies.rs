//! Case-study endpoints.

use pmhub_core::entities::CaseStudy;
use pmhub_schema::names;
use serde::de::DeserializeOwned;

use crate::error::ContentError;
use crate::http::{check_response, parse_body};
use crate::ContentClient;

impl ContentClient {
    /// Fetch the full case-study collection (`GET {base}/case_studies`).
    ///
    /// An empty body or JSON `null` yields an empty list, never an error.
    ///
    /// # Errors
    ///
    /// - [`ContentError::Http`] on a non-success status
    /// - [`ContentError::Decode`] if the body is not a valid list of case
    ///   studies (including an empty `objective` or duplicate ids)
    /// - [`ContentError::Transport`] if the request never completes
    pub async fn get_case_studies(&self) -> Result<Vec<CaseStudy>, ContentError> {
        let body = self.fetch("case_studies").await?;
        let Some(value) = parse_body(&body)? else {
            return Ok(Vec::new());
        };

        let studies: Vec<CaseStudy> = self.decode(names::CASE_STUDY_LIST, value)?;
        pmhub_core::validate_collection(&studies)
            .map_err(|e| ContentError::Decode(e.to_string()))?;
        tracing::debug!(count = studies.len(), "decoded case studies");
        Ok(studies)
    }

    /// Fetch one case study (`GET {base}/case_studies/{id}`).
    ///
    /// A missing resource surfaces as `ContentError::Http { status: 404, .. }`.
    ///
    /// # Errors
    ///
    /// - [`ContentError::Http`] on a non-success status
    /// - [`ContentError::Decode`] if the body is empty or not a valid case study
    /// - [`ContentError::Transport`] if the request never completes
    pub async fn get_case_study(&self, id: u64) -> Result<CaseStudy, ContentError> {
        let body = self.fetch(&format!("case_studies/{id}")).await?;
        let value = parse_body(&body)?
            .ok_or_else(|| ContentError::Decode(format!("empty body for case study {id}")))?;

        let study: CaseStudy = self.decode(names::CASE_STUDY, value)?;
        study
            .validate()
            .map_err(|e| ContentError::Decode(e.to_string()))?;
        Ok(study)
    }

    /// Issue one GET and return the raw body of a success response.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ContentError> {
        let url = self.endpoint(path);
        tracing::debug!(%url, "GET");
        let resp = self
            .http
            .get(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.bytes().await?.to_vec())
    }

    /// Validate `value` against the named schema, then decode it.
    fn decode<T: DeserializeOwned>(
        &self,
        schema: &str,
        value: serde_json::Value,
    ) -> Result<T, ContentError> {
        self.schemas
            .validate(schema, &value)
            .map_err(|e| ContentError::Decode(format!("{schema}: {e}")))?;
        serde_json::from_value(value).map_err(|e| ContentError::Decode(format!("{schema}: {e}")))
    }
}
