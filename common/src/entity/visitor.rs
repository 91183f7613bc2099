use crate::display::Displayable;
use crate::entity::gender::Gender;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Visitor {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
}

impl Visitor {
    pub fn new(name: impl Into<String>, age: u32, gender: Gender) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
        }
    }

    /// Where this visitor should go to change.
    pub fn locker_room_direction(&self) -> &'static str {
        match self.gender {
            Gender::Male => "Men's locker room: down the hall, first door on the left",
            Gender::Female => "Women's locker room: down the hall, first door on the right",
        }
    }
}

impl Displayable for Visitor {
    fn describe(&self) -> String {
        format!(
            "Visitor: {}, Age: {}, Gender: {}",
            self.name, self.age, self.gender
        )
    }
}
