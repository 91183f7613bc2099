use crate::display::Displayable;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trainer {
    pub name: String,
    pub age: u32,
    pub experience_years: u32,
    pub specialization: String,
}

impl Trainer {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        experience_years: u32,
        specialization: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            experience_years,
            specialization: specialization.into(),
        }
    }

    /// The line a trainer opens a first session with.
    pub fn introduction(&self) -> String {
        format!(
            "Hi, I'm {}. I've been coaching for {} years and I specialize in {}.",
            self.name, self.experience_years, self.specialization
        )
    }
}

impl Displayable for Trainer {
    fn describe(&self) -> String {
        format!(
            "Trainer: {}, Age: {}, Experience: {} years, Specialization: {}",
            self.name, self.age, self.experience_years, self.specialization
        )
    }
}
