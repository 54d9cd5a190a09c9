pub mod lifecycle;

pub use lifecycle::{
    LifecycleConfiguration, LifecycleRule, RuleFilter, RuleStatus, ABORT_MULTIPART_RULE_ID,
    EXPIRE_DELETE_MARKERS_RULE_ID, EXPIRE_OBJECTS_RULE_ID,
};
