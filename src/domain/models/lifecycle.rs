use crate::domain::errors::ValidationError;

/// Rule id for the expiration rule covering current and noncurrent versions
pub const EXPIRE_OBJECTS_RULE_ID: &str = "DeleteObjectsAfter1Day";

/// Rule id for the expired delete marker cleanup rule
pub const EXPIRE_DELETE_MARKERS_RULE_ID: &str = "DeleteExpiredObjectDeleteMarkers";

/// Rule id for the incomplete multipart upload abort rule
pub const ABORT_MULTIPART_RULE_ID: &str = "DeleteIncompleteMultipartUploads";

/// Lifecycle configuration for a bucket
///
/// The storage service applies a configuration atomically and replaces any
/// configuration previously stored on the bucket; rules are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleConfiguration {
    pub rules: Vec<LifecycleRule>,
}

/// A single declarative lifecycle rule
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LifecycleRule {
    pub id: String,
    pub status: RuleStatus,
    pub filter: RuleFilter,

    // Expiration settings
    pub expiration_days: Option<u32>,
    pub noncurrent_version_expiration_days: Option<u32>,
    pub expired_object_delete_marker: Option<bool>,

    // Abort incomplete multipart uploads
    pub abort_incomplete_multipart_upload_days: Option<u32>,
}

/// Status of a lifecycle rule
#[derive(Debug, Clone, PartialEq)]
pub enum RuleStatus {
    Enabled,
    Disabled,
}

impl Default for RuleStatus {
    fn default() -> Self {
        RuleStatus::Disabled
    }
}

/// Key scope of a lifecycle rule
///
/// An empty or absent prefix scopes the rule to every key in the bucket.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleFilter {
    pub prefix: Option<String>,
}

impl RuleFilter {
    /// A filter matching every key in the bucket
    pub fn all_keys() -> Self {
        Self {
            prefix: Some(String::new()),
        }
    }

    /// The prefix this filter scopes to, empty string meaning "all keys"
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or_default()
    }
}

impl LifecycleRule {
    /// Rule expiring current objects and noncurrent versions after `days`
    pub fn expire_after(id: impl Into<String>, days: u32) -> Self {
        Self {
            id: id.into(),
            status: RuleStatus::Enabled,
            filter: RuleFilter::all_keys(),
            expiration_days: Some(days),
            noncurrent_version_expiration_days: Some(days),
            ..Default::default()
        }
    }

    /// Rule removing delete markers with no remaining noncurrent versions
    pub fn expire_delete_markers(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: RuleStatus::Enabled,
            filter: RuleFilter::all_keys(),
            expired_object_delete_marker: Some(true),
            ..Default::default()
        }
    }

    /// Rule aborting multipart uploads still incomplete after `days`
    pub fn abort_incomplete_multipart_uploads(id: impl Into<String>, days: u32) -> Self {
        Self {
            id: id.into(),
            status: RuleStatus::Enabled,
            filter: RuleFilter::all_keys(),
            abort_incomplete_multipart_upload_days: Some(days),
            ..Default::default()
        }
    }

    /// Check if the rule has any action defined
    pub fn has_any_action(&self) -> bool {
        self.expiration_days.is_some()
            || self.noncurrent_version_expiration_days.is_some()
            || self.expired_object_delete_marker.is_some()
            || self.abort_incomplete_multipart_upload_days.is_some()
    }

    /// Validate the rule for logical consistency
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyRuleId);
        }

        if self.id.len() > 255 {
            return Err(ValidationError::RuleIdTooLong(self.id.clone()));
        }

        if !self.has_any_action() {
            return Err(ValidationError::NoActionsInRule(self.id.clone()));
        }

        // The service rejects a delete marker expiry combined with a
        // day-based expiry in the same rule
        if self.expired_object_delete_marker == Some(true) && self.expiration_days.is_some() {
            return Err(ValidationError::ConflictingExpirationSettings(
                self.id.clone(),
            ));
        }

        Ok(())
    }
}

impl LifecycleConfiguration {
    /// The fixed retention policy this tool applies to every swept bucket:
    /// expire current objects and noncurrent versions after `days`, remove
    /// expired delete markers, and abort incomplete multipart uploads
    /// after the same number of days.
    pub fn retention_policy(days: u32) -> Self {
        Self {
            rules: vec![
                LifecycleRule::expire_after(EXPIRE_OBJECTS_RULE_ID, days),
                LifecycleRule::expire_delete_markers(EXPIRE_DELETE_MARKERS_RULE_ID),
                LifecycleRule::abort_incomplete_multipart_uploads(ABORT_MULTIPART_RULE_ID, days),
            ],
        }
    }

    /// Validate the lifecycle configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen_ids = std::collections::HashSet::new();
        for rule in &self.rules {
            rule.validate()?;

            if !seen_ids.insert(&rule.id) {
                return Err(ValidationError::DuplicateRuleId(rule.id.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retention_policy_rules() {
        let config = LifecycleConfiguration::retention_policy(1);
        assert!(config.validate().is_ok());
        assert_eq!(config.rules.len(), 3);

        let ids: Vec<&str> = config.rules.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                EXPIRE_OBJECTS_RULE_ID,
                EXPIRE_DELETE_MARKERS_RULE_ID,
                ABORT_MULTIPART_RULE_ID
            ]
        );

        assert!(
            config
                .rules
                .iter()
                .all(|r| r.status == RuleStatus::Enabled)
        );
        // Every rule covers the whole bucket
        assert!(config.rules.iter().all(|r| r.filter.prefix() == ""));
    }

    #[test]
    fn test_retention_policy_day_counts() {
        let config = LifecycleConfiguration::retention_policy(1);

        let expire = &config.rules[0];
        assert_eq!(expire.expiration_days, Some(1));
        assert_eq!(expire.noncurrent_version_expiration_days, Some(1));

        let markers = &config.rules[1];
        assert_eq!(markers.expired_object_delete_marker, Some(true));
        assert_eq!(markers.expiration_days, None);

        let multipart = &config.rules[2];
        assert_eq!(multipart.abort_incomplete_multipart_upload_days, Some(1));
    }

    #[test]
    fn test_rule_validation() {
        let rule = LifecycleRule::expire_after("keep-short", 7);
        assert!(rule.validate().is_ok());

        let empty_id = LifecycleRule::expire_after("", 7);
        assert_eq!(empty_id.validate(), Err(ValidationError::EmptyRuleId));

        let long_id = LifecycleRule::expire_after("x".repeat(256), 7);
        assert!(matches!(
            long_id.validate(),
            Err(ValidationError::RuleIdTooLong(_))
        ));

        let no_action = LifecycleRule {
            id: "noop".to_string(),
            status: RuleStatus::Enabled,
            filter: RuleFilter::all_keys(),
            ..Default::default()
        };
        assert!(matches!(
            no_action.validate(),
            Err(ValidationError::NoActionsInRule(_))
        ));
    }

    #[test]
    fn test_conflicting_expiration_settings() {
        let mut rule = LifecycleRule::expire_after("conflicted", 1);
        rule.expired_object_delete_marker = Some(true);
        assert!(matches!(
            rule.validate(),
            Err(ValidationError::ConflictingExpirationSettings(_))
        ));
    }

    #[test]
    fn test_duplicate_rule_ids_rejected() {
        let config = LifecycleConfiguration {
            rules: vec![
                LifecycleRule::expire_after("same", 1),
                LifecycleRule::abort_incomplete_multipart_uploads("same", 1),
            ],
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::DuplicateRuleId(_))
        ));
    }
}
