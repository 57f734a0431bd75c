//! Field rules for video input.
//!
//! The validator works on the raw decoded JSON so that type mismatches are
//! reported as messages alongside every other violation, instead of being
//! rejected wholesale by a typed decoder. All checks always run; messages are
//! reported in field order: title, description, date, availableResolutions.

use crate::date::VideoDate;
use crate::error::ValidationError;
use crate::resolution::Resolution;
use crate::video::{NewVideo, VideoPatch};
use serde_json::{Map, Value};

const TITLE: &str = "title";
const DESCRIPTION: &str = "description";
const DATE: &str = "date";
const AVAILABLE_RESOLUTIONS: &str = "availableResolutions";

/// Which rule set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `title`, `date` and `availableResolutions` are mandatory.
    Create,
    /// Every field is optional; present fields follow the create rules.
    Update,
}

/// The outcome of validating one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    errors: Vec<String>,
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.errors))
        }
    }
}

/// Checks `input` against the field rules for `mode`.
pub fn validate(input: &Value, mode: Mode) -> Validation {
    Validation {
        errors: Checked::run(input, mode).errors,
    }
}

impl NewVideo {
    /// Validates `input` in create mode and extracts the typed fields.
    pub fn from_input(input: &Value) -> Result<Self, ValidationError> {
        let checked = Checked::run(input, Mode::Create);
        if !checked.errors.is_empty() {
            return Err(ValidationError::new(checked.errors));
        }

        let (Some(title), Some(date), Some(available_resolutions)) =
            (checked.title, checked.date, checked.available_resolutions)
        else {
            return Err(ValidationError::new(vec![
                "incomplete video input".to_string()
            ]));
        };

        Ok(NewVideo {
            title,
            description: checked.description,
            date,
            available_resolutions,
        })
    }
}

impl VideoPatch {
    /// Validates `input` in update mode and extracts the fields it carries.
    pub fn from_input(input: &Value) -> Result<Self, ValidationError> {
        let checked = Checked::run(input, Mode::Update);
        if !checked.errors.is_empty() {
            return Err(ValidationError::new(checked.errors));
        }

        Ok(VideoPatch {
            title: checked.title,
            description: checked.description,
            date: checked.date,
            available_resolutions: checked.available_resolutions,
        })
    }
}

/// Field values that passed their rule, plus every violation found.
#[derive(Debug, Default)]
struct Checked {
    title: Option<String>,
    description: Option<String>,
    date: Option<VideoDate>,
    available_resolutions: Option<Vec<Resolution>>,
    errors: Vec<String>,
}

impl Checked {
    fn run(input: &Value, mode: Mode) -> Self {
        let mut checked = Checked::default();

        let Some(fields) = input.as_object() else {
            checked
                .errors
                .push("video input must be a JSON object".to_string());
            return checked;
        };

        checked.title = checked.check_title(fields, mode);
        checked.description = checked.check_description(fields);
        checked.date = checked.check_date(fields, mode);
        checked.available_resolutions = checked.check_available_resolutions(fields, mode);
        checked
    }

    fn check_title(&mut self, fields: &Map<String, Value>, mode: Mode) -> Option<String> {
        match fields.get(TITLE) {
            None => {
                self.require(TITLE, mode);
                None
            }
            Some(Value::String(title)) if title.trim().is_empty() => {
                self.errors.push("title must not be empty".to_string());
                None
            }
            Some(Value::String(title)) => Some(title.clone()),
            Some(_) => {
                self.errors.push("title must be a string".to_string());
                None
            }
        }
    }

    fn check_description(&mut self, fields: &Map<String, Value>) -> Option<String> {
        match fields.get(DESCRIPTION) {
            None => None,
            Some(Value::String(description)) => Some(description.clone()),
            Some(_) => {
                self.errors.push("description must be a string".to_string());
                None
            }
        }
    }

    fn check_date(&mut self, fields: &Map<String, Value>, mode: Mode) -> Option<VideoDate> {
        match fields.get(DATE) {
            None => {
                self.require(DATE, mode);
                None
            }
            Some(Value::String(raw)) => {
                let date = VideoDate::parse(raw);
                if date.is_none() {
                    self.errors
                        .push(format!("date must be a valid date, got '{}'", raw));
                }
                date
            }
            Some(_) => {
                self.errors.push("date must be a string".to_string());
                None
            }
        }
    }

    fn check_available_resolutions(
        &mut self,
        fields: &Map<String, Value>,
        mode: Mode,
    ) -> Option<Vec<Resolution>> {
        match fields.get(AVAILABLE_RESOLUTIONS) {
            None => {
                if mode == Mode::Create {
                    self.errors
                        .push(format!("missing {}", AVAILABLE_RESOLUTIONS));
                }
                None
            }
            Some(Value::Array(items)) => {
                let before = self.errors.len();
                let resolutions: Vec<Resolution> = items
                    .iter()
                    .filter_map(|item| {
                        let resolution = item.as_str().and_then(|tag| tag.parse::<Resolution>().ok());
                        if resolution.is_none() {
                            self.errors.push(format!("invalid resolution: {}", item));
                        }
                        resolution
                    })
                    .collect();
                (self.errors.len() == before).then_some(resolutions)
            }
            Some(_) => {
                self.errors
                    .push(format!("{} must be an array", AVAILABLE_RESOLUTIONS));
                None
            }
        }
    }

    fn require(&mut self, field: &str, mode: Mode) {
        if mode == Mode::Create {
            self.errors.push(format!("{} is required", field));
        }
    }
}
