use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FernError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("fern would need more than {limit} draw calls")]
    DrawBudgetExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, FernError>;

impl FernError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
