mod gym;
mod membership;
