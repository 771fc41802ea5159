use crate::core::{format_year, parse_year};
use crate::data::Attribute;
use crate::error::{ChartError, ChartResult};

/// State of the attribute selector and the two year inputs.
///
/// Year text stays raw until a redraw asks for it, the same way a text input
/// holds whatever the user last typed.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControls {
    attribute: Attribute,
    begin_year_text: String,
    end_year_text: String,
}

impl Default for FilterControls {
    fn default() -> Self {
        Self::new(Attribute::default())
    }
}

impl FilterControls {
    #[must_use]
    pub fn new(attribute: Attribute) -> Self {
        Self {
            attribute,
            begin_year_text: String::new(),
            end_year_text: String::new(),
        }
    }

    #[must_use]
    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    #[must_use]
    pub fn begin_year_text(&self) -> &str {
        &self.begin_year_text
    }

    #[must_use]
    pub fn end_year_text(&self) -> &str {
        &self.end_year_text
    }

    pub fn select_attribute(&mut self, attribute: Attribute) {
        self.attribute = attribute;
    }

    /// Resolves a selector option by its dataset column name.
    ///
    /// The attribute set is closed; an unknown name leaves the current
    /// selection untouched.
    pub fn select_attribute_name(&mut self, name: &str) -> ChartResult<Attribute> {
        let attribute = Attribute::from_name(name).ok_or_else(|| ChartError::UnknownAttribute {
            name: name.to_owned(),
        })?;
        self.attribute = attribute;
        Ok(attribute)
    }

    pub fn set_begin_year_text(&mut self, text: impl Into<String>) {
        self.begin_year_text = text.into();
    }

    pub fn set_end_year_text(&mut self, text: impl Into<String>) {
        self.end_year_text = text.into();
    }

    /// Fills both year inputs from a concrete range, as bootstrap does with
    /// the dataset's year bounds.
    pub fn set_year_range(&mut self, begin_year: i32, end_year: i32) {
        self.begin_year_text = format_year(begin_year);
        self.end_year_text = format_year(end_year);
    }

    pub fn parsed_begin_year(&self) -> ChartResult<i32> {
        parse_year(&self.begin_year_text)
    }

    pub fn parsed_end_year(&self) -> ChartResult<i32> {
        parse_year(&self.end_year_text)
    }

    /// Both year inputs parsed strictly; fails on the first bad input.
    pub fn parsed_range(&self) -> ChartResult<(i32, i32)> {
        Ok((self.parsed_begin_year()?, self.parsed_end_year()?))
    }
}
