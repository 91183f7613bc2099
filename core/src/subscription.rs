use gymkit_common::entity::{Trainer, Visitor};

/// A visitor's paid plan. The trainer is genuinely optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub visitor: Visitor,
    pub trainer: Option<Trainer>,
    pub duration_months: u32,
    pub price: f64,
}

impl Subscription {
    pub fn new(
        visitor: Visitor,
        trainer: Option<Trainer>,
        duration_months: u32,
        price: f64,
    ) -> Self {
        Self {
            visitor,
            trainer,
            duration_months,
            price,
        }
    }

    pub fn details(&self) -> String {
        let trainer: String = match &self.trainer {
            Some(trainer) => format!("Trainer: {}", trainer.name),
            None => String::from("no trainer"),
        };
        format!(
            "Visitor: {}, Duration: {} months, Price: {:.2}, {}",
            self.visitor.name, self.duration_months, self.price, trainer
        )
    }
}
