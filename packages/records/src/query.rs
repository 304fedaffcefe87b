//! List query parameters and search planning.

use crate::config::SearchMode;

/// Query string parameters for a list request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    params: Vec<(String, String)>,
}

impl ListQuery {
    /// No filters: the whole collection.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Translate search text into the list requests to issue.
    ///
    /// Blank text is a single unfiltered request. Otherwise [`SearchMode::AnyName`]
    /// asks once per search field (the caller merges the answers) and
    /// [`SearchMode::LastFieldOnly`] filters on the last field alone.
    pub fn plan(search: &str, fields: &[&str], mode: SearchMode) -> Vec<ListQuery> {
        let needle = search.trim();
        if needle.is_empty() || fields.is_empty() {
            return vec![ListQuery::all()];
        }
        match mode {
            SearchMode::AnyName => fields
                .iter()
                .map(|field| ListQuery::all().param(field, needle))
                .collect(),
            SearchMode::LastFieldOnly => {
                let field = fields[fields.len() - 1];
                vec![ListQuery::all().param(field, needle)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[&str] = &["firstName", "lastName"];

    #[test]
    fn test_blank_search_is_unfiltered() {
        let plan = ListQuery::plan("   ", FIELDS, SearchMode::AnyName);
        assert_eq!(plan, vec![ListQuery::all()]);
    }

    #[test]
    fn test_any_name_queries_each_field() {
        let plan = ListQuery::plan(" ann ", FIELDS, SearchMode::AnyName);
        assert_eq!(
            plan,
            vec![
                ListQuery::all().param("firstName", "ann"),
                ListQuery::all().param("lastName", "ann"),
            ]
        );
    }

    #[test]
    fn test_last_field_only_matches_observed_behaviour() {
        let plan = ListQuery::plan("ann", FIELDS, SearchMode::LastFieldOnly);
        assert_eq!(plan, vec![ListQuery::all().param("lastName", "ann")]);
    }
}
