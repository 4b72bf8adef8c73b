/// URL builder for the four feedback pages, relative to the mount point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paths {
    base: String,
}

impl Paths {
    /// `base` may be empty, `/`, `feedback`, `/feedback/` and so on; all are
    /// normalised to either `""` or `/segment[/segment...]`.
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_matches('/');
        let base = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn index(&self) -> String {
        format!("{}/", self.base)
    }

    pub fn detail(&self, question_id: i64) -> String {
        format!("{}/{}/", self.base, question_id)
    }

    pub fn results(&self, question_id: i64) -> String {
        format!("{}/{}/results/", self.base, question_id)
    }

    pub fn answer(&self, question_id: i64) -> String {
        format!("{}/{}/answer/", self.base, question_id)
    }

    /// Router pattern for `suffix` (an axum path such as `/{question_id}/`).
    pub(crate) fn pattern(&self, suffix: &str) -> String {
        format!("{}{}", self.base, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_mount() {
        for base in ["", "/", "  ", "//"] {
            let paths = Paths::new(base);
            assert_eq!(paths.base(), "");
            assert_eq!(paths.index(), "/");
            assert_eq!(paths.detail(1), "/1/");
            assert_eq!(paths.results(1), "/1/results/");
            assert_eq!(paths.answer(1), "/1/answer/");
        }
    }

    #[test]
    fn prefixed_mount() {
        for base in ["feedback", "/feedback", "/feedback/", "feedback/"] {
            let paths = Paths::new(base);
            assert_eq!(paths.index(), "/feedback/");
            assert_eq!(paths.results(5), "/feedback/5/results/");
            assert_eq!(paths.pattern("/{question_id}/"), "/feedback/{question_id}/");
        }
    }

    #[test]
    fn nested_prefix_keeps_inner_slashes() {
        let paths = Paths::new("/apps/feedback/");
        assert_eq!(paths.detail(7), "/apps/feedback/7/");
    }
}
