use crate::model::Bucket;

/// Keywords that route a category token into a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    pub bucket: Bucket,
    pub keywords: &'static [&'static str],
}

impl ClassificationRule {
    /// `token` must already be lowercase.
    pub fn matches(&self, token: &str) -> bool {
        self.keywords.iter().any(|keyword| token.contains(keyword))
    }
}

/// Evaluated top to bottom, first match wins. Tokens matching nothing are `Bucket::Other`.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        bucket: Bucket::Debug,
        keywords: &["debug"],
    },
    ClassificationRule {
        bucket: Bucket::Info,
        keywords: &["info"],
    },
    ClassificationRule {
        bucket: Bucket::Error,
        keywords: &["error", "warn", "crit"],
    },
];

pub fn classify_token(token: &str) -> Bucket {
    let token = token.to_lowercase();
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.matches(&token))
        .map(|rule| rule.bucket)
        .unwrap_or(Bucket::Other)
}
