//! Form field value objects

/// Kind of input a text field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    /// Digits only
    Integer,
    /// Digits and a single decimal point
    Decimal,
}

/// Represents a single editable form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: String,
    pub kind: FieldKind,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(label: &str, is_multiline: bool) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            kind: FieldKind::Text,
            is_multiline,
        }
    }

    /// Create a new integer field
    pub fn integer(label: &str) -> Self {
        Self {
            kind: FieldKind::Integer,
            ..Self::text(label, false)
        }
    }

    /// Create a new decimal field
    pub fn decimal(label: &str) -> Self {
        Self {
            kind: FieldKind::Decimal,
            ..Self::text(label, false)
        }
    }

    /// Get the raw text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Get the value with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// True when the field holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value.
    ///
    /// Numeric fields silently drop characters they cannot hold.
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Text => self.value.push(c),
            FieldKind::Integer => {
                if c.is_ascii_digit() {
                    self.value.push(c);
                }
            }
            FieldKind::Decimal => {
                if c.is_ascii_digit() || (c == '.' && !self.value.contains('.')) {
                    self.value.push(c);
                }
            }
        }
    }

    /// Insert a newline (multiline fields only)
    pub fn push_newline(&mut self) {
        if self.is_multiline {
            self.value.push('\n');
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Parse the value as a decimal number
    pub fn as_decimal(&self) -> Option<f64> {
        self.trimmed().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Parse the value as an unsigned integer
    pub fn as_integer(&self) -> Option<u32> {
        self.trimmed().parse::<u32>().ok()
    }

    /// True when the value is a non-empty run of digits, whatever its size
    pub fn has_only_digits(&self) -> bool {
        let value = self.trimmed();
        !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
    }
}
