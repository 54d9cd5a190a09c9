/// Validation errors for domain value objects and lifecycle rules
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // BucketName validation errors
    BucketNameTooShort {
        actual: usize,
        min: usize,
    },
    BucketNameTooLong {
        actual: usize,
        max: usize,
    },
    BucketNameInvalidStart,
    BucketNameInvalidEnd,
    BucketNameInvalidCharacter(char),
    BucketNameConsecutiveHyphens,
    BucketNameLooksLikeIpAddress,

    // Lifecycle validation errors
    EmptyRuleId,
    RuleIdTooLong(String),
    DuplicateRuleId(String),
    NoActionsInRule(String),
    ConflictingExpirationSettings(String),

    // Configuration field errors
    InvalidField {
        field: String,
        value: String,
        expected: String,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // BucketName errors
            ValidationError::BucketNameTooShort { actual, min } => {
                write!(
                    f,
                    "Bucket name too short: {} characters (min: {})",
                    actual, min
                )
            }
            ValidationError::BucketNameTooLong { actual, max } => {
                write!(
                    f,
                    "Bucket name too long: {} characters (max: {})",
                    actual, max
                )
            }
            ValidationError::BucketNameInvalidStart => {
                write!(f, "Bucket name must start with lowercase letter or number")
            }
            ValidationError::BucketNameInvalidEnd => {
                write!(f, "Bucket name must end with lowercase letter or number")
            }
            ValidationError::BucketNameInvalidCharacter(c) => {
                write!(
                    f,
                    "Invalid character in bucket name: '{}'. Only lowercase letters, numbers, and hyphens allowed",
                    c
                )
            }
            ValidationError::BucketNameConsecutiveHyphens => {
                write!(f, "Bucket name cannot contain consecutive hyphens")
            }
            ValidationError::BucketNameLooksLikeIpAddress => {
                write!(f, "Bucket name cannot be formatted as an IP address")
            }

            // Lifecycle errors
            ValidationError::EmptyRuleId => write!(f, "Lifecycle rule ID cannot be empty"),
            ValidationError::RuleIdTooLong(id) => {
                write!(f, "Lifecycle rule ID too long (max 255 characters): {}", id)
            }
            ValidationError::DuplicateRuleId(id) => {
                write!(f, "Duplicate lifecycle rule ID: {}", id)
            }
            ValidationError::NoActionsInRule(id) => {
                write!(f, "Lifecycle rule '{}' has no actions defined", id)
            }
            ValidationError::ConflictingExpirationSettings(id) => {
                write!(
                    f,
                    "Lifecycle rule '{}' cannot combine a delete marker expiry with a day-based expiry",
                    id
                )
            }

            ValidationError::InvalidField {
                field,
                value,
                expected,
            } => {
                write!(
                    f,
                    "Invalid value for field '{}': '{}' (expected: {})",
                    field, value, expected
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
