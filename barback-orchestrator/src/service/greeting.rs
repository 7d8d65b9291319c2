//! Greeting Service
//!
//! Simple demo endpoint logic, unrelated to the recipe pipeline.

use barback_core::dto::intake::Greeting;

/// Service error type
#[derive(Debug, PartialEq)]
pub enum GreetingError {
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, GreetingError>;

const MAX_NAME_CHARS: usize = 100;

/// Builds a greeting for the given name (1-100 characters)
pub fn greet(name: &str) -> Result<Greeting> {
    let length = name.chars().count();

    if length == 0 {
        return Err(GreetingError::InvalidName(
            "name cannot be empty".to_string(),
        ));
    }

    if length > MAX_NAME_CHARS {
        return Err(GreetingError::InvalidName(format!(
            "name is too long (max {} characters)",
            MAX_NAME_CHARS
        )));
    }

    Ok(Greeting {
        message: format!("Olá, {}", name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet() {
        assert_eq!(greet("Ana").unwrap().message, "Olá, Ana");
    }

    #[test]
    fn test_greet_empty_name() {
        assert!(matches!(greet(""), Err(GreetingError::InvalidName(_))));
    }

    #[test]
    fn test_greet_name_too_long() {
        let name = "a".repeat(101);
        assert!(matches!(greet(&name), Err(GreetingError::InvalidName(_))));
    }

    #[test]
    fn test_greet_name_at_limit() {
        let name = "a".repeat(100);
        assert!(greet(&name).is_ok());
    }
}
