use crate::config::var_or;
use crate::error::AppError;

/// Page-size limits applied to list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Size used when the client omits `size`
    pub default_size: u64,
    /// Larger requested sizes are clamped to this
    pub max_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: 10,
            max_size: 100,
        }
    }
}

impl PaginationConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let default_size = var_or("POSTBOARD_PAGE_SIZE_DEFAULT", defaults.default_size)?;
        let max_size = var_or("POSTBOARD_PAGE_SIZE_MAX", defaults.max_size)?;

        if default_size == 0 || max_size == 0 {
            return Err(AppError::config("page sizes must be at least 1"));
        }
        if default_size > max_size {
            return Err(AppError::config(format!(
                "default page size {default_size} exceeds maximum {max_size}"
            )));
        }

        Ok(Self {
            default_size,
            max_size,
        })
    }
}
