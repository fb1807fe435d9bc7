use crate::{
    error::{Result, TaskError},
    models::{NewTask, UpdateTask},
};

/// Priority range documented by the remote service (1=normal, 4=urgent)
pub const PRIORITY_MIN: u8 = 1;
/// Upper bound of the documented priority range
pub const PRIORITY_MAX: u8 = 4;

/// Local input validation for task operations.
///
/// Only constraints the remote service documents are enforced here:
/// a task needs a non-empty title, and priorities live in the 1-4 range.
/// Everything else (label existence, project ids, due-date plausibility)
/// is the remote service's call and passes through untouched. Filter
/// query strings are deliberately never validated.
pub struct TaskValidator;

impl TaskValidator {
    /// Validate a task title
    ///
    /// # Returns
    /// * `Ok(())` - If the title is non-empty after trimming
    /// * `Err(TaskError::Validation)` - Otherwise
    pub fn validate_content(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(TaskError::empty_field("content"));
        }
        Ok(())
    }

    /// Validate a priority value against the documented 1-4 range
    ///
    /// # Returns
    /// * `Ok(())` - If the priority is in range
    /// * `Err(TaskError::Validation)` - Otherwise
    pub fn validate_priority(priority: u8) -> Result<()> {
        if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&priority) {
            return Err(TaskError::invalid_priority(priority));
        }
        Ok(())
    }

    /// Validate an optional priority; `None` means "no constraint" and is
    /// always accepted. A provided out-of-range value is rejected rather
    /// than silently disabling the filter.
    pub fn validate_optional_priority(priority: Option<u8>) -> Result<()> {
        match priority {
            Some(p) => Self::validate_priority(p),
            None => Ok(()),
        }
    }

    /// Validate a complete creation input
    ///
    /// # Returns
    /// * `Ok(())` - If the input is valid
    /// * `Err(TaskError::Validation)` - If any field is invalid
    pub fn validate_new_task(task: &NewTask) -> Result<()> {
        Self::validate_content(&task.content)?;
        Self::validate_optional_priority(task.priority)?;
        Ok(())
    }

    /// Validate a partial update. An update with no fields set is valid;
    /// the remote call is still issued with just the identifier.
    pub fn validate_update(updates: &UpdateTask) -> Result<()> {
        if let Some(ref content) = updates.content {
            Self::validate_content(content)?;
        }
        Self::validate_optional_priority(updates.priority)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_content() {
        assert!(TaskValidator::validate_content("Buy milk").is_ok());
        assert!(TaskValidator::validate_content("  padded  ").is_ok());
        assert!(TaskValidator::validate_content("x").is_ok());
    }

    #[test]
    fn test_invalid_content() {
        assert!(TaskValidator::validate_content("").is_err());
        assert!(TaskValidator::validate_content("   ").is_err());
        assert!(TaskValidator::validate_content("\t\n").is_err());
    }

    #[test]
    fn test_priority_range() {
        for p in 1..=4u8 {
            assert!(TaskValidator::validate_priority(p).is_ok());
        }
        assert!(TaskValidator::validate_priority(0).is_err());
        assert!(TaskValidator::validate_priority(5).is_err());
        assert!(TaskValidator::validate_priority(255).is_err());
    }

    #[test]
    fn test_optional_priority() {
        assert!(TaskValidator::validate_optional_priority(None).is_ok());
        assert!(TaskValidator::validate_optional_priority(Some(2)).is_ok());
        // Zero is not "no filter", it is a rejected value
        assert!(TaskValidator::validate_optional_priority(Some(0)).is_err());
    }

    #[test]
    fn test_validate_new_task() {
        let valid = NewTask {
            content: "Write report".to_string(),
            priority: Some(3),
            ..NewTask::default()
        };
        assert!(TaskValidator::validate_new_task(&valid).is_ok());

        let empty_content = NewTask::new("");
        assert!(TaskValidator::validate_new_task(&empty_content).is_err());

        let bad_priority = NewTask {
            content: "Write report".to_string(),
            priority: Some(9),
            ..NewTask::default()
        };
        assert!(TaskValidator::validate_new_task(&bad_priority).is_err());
    }

    #[test]
    fn test_validate_update() {
        // Empty update is valid; the remote call still happens
        assert!(TaskValidator::validate_update(&UpdateTask::default()).is_ok());

        let rename = UpdateTask {
            content: Some("New title".to_string()),
            ..UpdateTask::default()
        };
        assert!(TaskValidator::validate_update(&rename).is_ok());

        let blank_rename = UpdateTask {
            content: Some("   ".to_string()),
            ..UpdateTask::default()
        };
        assert!(TaskValidator::validate_update(&blank_rename).is_err());

        let bad_priority = UpdateTask {
            priority: Some(0),
            ..UpdateTask::default()
        };
        assert!(TaskValidator::validate_update(&bad_priority).is_err());
    }
}
