use crate::error::FormError;
use crate::model::field::{FieldKind, FieldSpec};

/// Controlled form state: one text value per field, in schema order.
///
/// Values stay as typed; conversion to wire types happens only when a draft
/// is built for submission.
#[derive(Clone, Debug, PartialEq)]
pub struct Form {
    fields: &'static [FieldSpec],
    values: Vec<String>,
}

impl Form {
    #[must_use]
    pub fn empty(fields: &'static [FieldSpec]) -> Self {
        Self {
            fields,
            values: vec![String::new(); fields.len()],
        }
    }

    #[must_use]
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Value of a field, or `None` for a name outside the schema.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.values[idx].as_str())
    }

    /// Value of a field, empty for a name outside the schema.
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// Merge one field's new value. Returns `false` (and changes nothing)
    /// for a name outside the schema.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.values[idx] = value.into();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static FieldSpec, &str)> + '_ {
        self.fields
            .iter()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Wire names of the fields that fail the required check.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.entries()
            .filter(|(field, value)| field.is_empty_value(value))
            .map(|(field, _)| field.name)
            .collect()
    }

    /// # Errors
    ///
    /// Returns `FormError::MissingFields` when any field is empty.
    pub fn require_all(&self) -> Result<(), FormError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingFields(missing))
        }
    }

    /// True when every value is the empty string.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }

    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    /// Field value as submitted text.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        self.value(name).to_owned()
    }

    /// Field value parsed as a number.
    ///
    /// # Errors
    ///
    /// Returns `FormError::InvalidNumber` when the text is not numeric.
    pub fn number(&self, name: &'static str) -> Result<f64, FormError> {
        let label = self
            .fields
            .iter()
            .find(|field| field.name == name && matches!(field.kind, FieldKind::Number(_)))
            .map_or(name, |field| field.label);
        self.value(name)
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or(FormError::InvalidNumber { field: name, label })
    }
}

/// Format a wire number the way a number input displays it (`20000`, `4.5`).
#[must_use]
pub fn format_number(value: f64) -> String {
    value.to_string()
}
