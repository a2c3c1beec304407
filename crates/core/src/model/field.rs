use crate::model::entity::EntityKind;

/// Browser-style hints for numeric inputs. Never enforced on submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberHints {
    pub step: Option<&'static str>,
    pub min: Option<&'static str>,
    pub max: Option<&'static str>,
}

impl NumberHints {
    pub const NONE: Self = Self {
        step: None,
        min: None,
        max: None,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number(NumberHints),
    /// Identifier of another entity, picked from that entity's collection.
    Reference(EntityKind),
}

/// One editable field of an entity form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name, also used as the form key.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

impl FieldSpec {
    #[must_use]
    pub const fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            placeholder,
        }
    }

    #[must_use]
    pub const fn text_area(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::TextArea,
            placeholder,
        }
    }

    #[must_use]
    pub const fn number(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        hints: NumberHints,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number(hints),
            placeholder,
        }
    }

    #[must_use]
    pub const fn reference(
        name: &'static str,
        label: &'static str,
        target: EntityKind,
        placeholder: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Reference(target),
            placeholder,
        }
    }

    /// Required-field check with the same truthiness the form always had:
    /// the empty string is empty, and so is a number that reads as zero.
    /// Whitespace counts as a value.
    #[must_use]
    pub fn is_empty_value(&self, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        match self.kind {
            FieldKind::Number(_) => value.parse::<f64>().is_ok_and(|n| n == 0.0),
            _ => false,
        }
    }
}
