//! The user's current form selections.

use crate::catalog::Field;
use crate::error::SelectionError;

pub const ANONYMOUS: &str = "Anonymous";

/// Five catalog-constrained selections plus a free-text nickname.
///
/// Catalog fields can only hold values from their catalog; the nickname is kept
/// as typed and normalized when a submission is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    starter: &'static str,
    mood: &'static str,
    color: &'static str,
    focus: &'static str,
    activity: &'static str,
    nickname: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            starter: Field::Starter.default_value(),
            mood: Field::Mood.default_value(),
            color: Field::Color.default_value(),
            focus: Field::Focus.default_value(),
            activity: Field::Activity.default_value(),
            nickname: String::new(),
        }
    }
}

impl Selection {
    pub fn get(&self, field: Field) -> &'static str {
        match field {
            Field::Starter => self.starter,
            Field::Mood => self.mood,
            Field::Color => self.color,
            Field::Focus => self.focus,
            Field::Activity => self.activity,
        }
    }

    /// Set `field` to `value`, which must be one of the field's catalog values.
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), SelectionError> {
        let option = field.find(value).ok_or_else(|| SelectionError::UnknownOption {
            field: field.as_str(),
            value: value.to_string(),
        })?;
        let slot = match field {
            Field::Starter => &mut self.starter,
            Field::Mood => &mut self.mood,
            Field::Color => &mut self.color,
            Field::Focus => &mut self.focus,
            Field::Activity => &mut self.activity,
        };
        *slot = option.value;
        Ok(())
    }

    /// Raw nickname text as typed.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    /// Trimmed nickname, or "Anonymous" when blank.
    pub fn display_nickname(&self) -> String {
        let trimmed = self.nickname.trim();
        if trimmed.is_empty() {
            ANONYMOUS.to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Compose the situation sentence sent to the oracle.
    pub fn situation(&self) -> String {
        format!(
            "{} {}, feeling like the color {}. It's mainly about {}. Lately, I've been {}.",
            self.starter, self.mood, self.color, self.focus, self.activity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_first_options() {
        let selection = Selection::default();
        assert_eq!(selection.get(Field::Starter), "I feel");
        assert_eq!(selection.get(Field::Mood), "happy");
        assert_eq!(selection.get(Field::Color), "red, like passion or urgency");
        assert_eq!(selection.nickname(), "");
    }

    #[test]
    fn test_set_rejects_unknown_value() {
        let mut selection = Selection::default();
        let err = selection.set(Field::Mood, "ecstatic").unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownOption {
                field: "emotionState",
                value: "ecstatic".to_string(),
            }
        );
        assert_eq!(selection.get(Field::Mood), "happy");
    }

    #[test]
    fn test_situation_sentence() {
        let mut selection = Selection::default();
        selection.set(Field::Starter, "My day was").unwrap();
        selection.set(Field::Mood, "tired").unwrap();
        selection.set(Field::Color, "grey, like neutrality or indecision").unwrap();
        selection.set(Field::Focus, "my daily routine").unwrap();
        selection.set(Field::Activity, "working hard towards something").unwrap();
        assert_eq!(
            selection.situation(),
            "My day was tired, feeling like the color grey, like neutrality or indecision. \
             It's mainly about my daily routine. Lately, I've been working hard towards something."
        );
    }

    #[test]
    fn test_display_nickname() {
        let mut selection = Selection::default();
        assert_eq!(selection.display_nickname(), "Anonymous");
        selection.set_nickname("   ");
        assert_eq!(selection.display_nickname(), "Anonymous");
        selection.set_nickname("  Ada ");
        assert_eq!(selection.display_nickname(), "Ada");
        assert_eq!(selection.nickname(), "  Ada ");
    }
}
