//! BDD step definitions for the greeter service

pub mod greeting_steps;
