use crate::display::Displayable;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equipment {
    pub name: String,
    pub category: String,
    pub is_available: bool,
}

impl Equipment {
    pub fn new(name: impl Into<String>, category: impl Into<String>, is_available: bool) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            is_available,
        }
    }
}

impl Displayable for Equipment {
    fn describe(&self) -> String {
        let availability = if self.is_available {
            "Available"
        } else {
            "Not available"
        };
        format!("Equipment: {} ({}), {}", self.name, self.category, availability)
    }
}
