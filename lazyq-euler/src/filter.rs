use crate::problems::Problem;

/// Selects problems whose name contains the filter text; no filter selects
/// them all.
pub(crate) struct NameFilter {
    name_filter: Option<String>,
}

impl NameFilter {
    pub(crate) fn new(name_filter: Option<String>) -> Self {
        Self { name_filter }
    }

    pub(crate) fn is_included(&self, problem: &Problem) -> bool {
        if let Some(name_filter) = &self.name_filter {
            problem.name.contains(name_filter.as_str())
        } else {
            true
        }
    }

    pub(crate) fn describe(&self) -> &str {
        self.name_filter.as_deref().unwrap_or("")
    }
}
