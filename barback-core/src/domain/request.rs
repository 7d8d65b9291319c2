//! Drink request domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer-supplied drink request
///
/// Immutable once accepted by the intake endpoint. Enumerated fields are
/// enforced at deserialization; semantic checks (non-empty name and lists)
/// live in [`DrinkRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkRequest {
    pub customer_name: String,
    pub mood: Mood,
    pub flavor: Flavor,
    pub fruit: Vec<String>,
    pub liquids: Vec<String>,
    #[serde(default)]
    pub syrups: Vec<String>,
    #[serde(default)]
    pub leaves: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Mood associated with the drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Calm,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary flavor profile of the drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Fruity,
    Citric,
    Sweet,
    Bitter,
    Complex,
}

impl Flavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Fruity => "fruity",
            Flavor::Citric => "citric",
            Flavor::Sweet => "sweet",
            Flavor::Bitter => "bitter",
            Flavor::Complex => "complex",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure for a drink request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
    EmptyCustomerName,
    EmptyFruitList,
    EmptyLiquidList,
}

impl fmt::Display for InvalidRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidRequest::EmptyCustomerName => {
                write!(f, "customer_name cannot be empty or contain only whitespace")
            }
            InvalidRequest::EmptyFruitList => write!(f, "fruit list cannot be empty"),
            InvalidRequest::EmptyLiquidList => write!(f, "liquids list cannot be empty"),
        }
    }
}

impl std::error::Error for InvalidRequest {}

impl DrinkRequest {
    /// Checks the semantic constraints the schema alone cannot express
    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if self.customer_name.trim().is_empty() {
            return Err(InvalidRequest::EmptyCustomerName);
        }

        if self.fruit.is_empty() {
            return Err(InvalidRequest::EmptyFruitList);
        }

        if self.liquids.is_empty() {
            return Err(InvalidRequest::EmptyLiquidList);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> DrinkRequest {
        DrinkRequest {
            customer_name: "Maria Silva".to_string(),
            mood: Mood::Happy,
            flavor: Flavor::Fruity,
            fruit: vec!["pineapple".to_string(), "mango".to_string()],
            liquids: vec!["coconut water".to_string(), "soda".to_string()],
            syrups: vec!["simple syrup".to_string()],
            leaves: vec!["mint".to_string()],
            notes: None,
            email: Some("maria@example.com".to_string()),
        }
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_validate_whitespace_customer_name() {
        let mut req = valid_request();
        req.customer_name = "   ".to_string();
        assert_eq!(req.validate(), Err(InvalidRequest::EmptyCustomerName));
    }

    #[test]
    fn test_validate_empty_fruit_list() {
        let mut req = valid_request();
        req.fruit.clear();
        assert_eq!(req.validate(), Err(InvalidRequest::EmptyFruitList));
    }

    #[test]
    fn test_validate_empty_liquid_list() {
        let mut req = valid_request();
        req.liquids.clear();
        assert_eq!(req.validate(), Err(InvalidRequest::EmptyLiquidList));
    }

    #[test]
    fn test_rejects_unknown_mood() {
        let body = r#"{
            "customer_name": "Ana",
            "mood": "furious",
            "flavor": "fruity",
            "fruit": ["mango"],
            "liquids": ["soda"]
        }"#;

        assert!(serde_json::from_str::<DrinkRequest>(body).is_err());
    }

    #[test]
    fn test_rejects_missing_required_field() {
        let body = r#"{
            "mood": "happy",
            "flavor": "fruity",
            "fruit": ["mango"],
            "liquids": ["soda"]
        }"#;

        assert!(serde_json::from_str::<DrinkRequest>(body).is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let body = r#"{
            "customer_name": "Ana",
            "mood": "happy",
            "flavor": "fruity",
            "fruit": ["mango"],
            "liquids": ["soda"]
        }"#;

        let req: DrinkRequest = serde_json::from_str(body).unwrap();
        assert!(req.syrups.is_empty());
        assert!(req.leaves.is_empty());
        assert_eq!(req.notes, None);
        assert_eq!(req.email, None);
    }

    #[test]
    fn test_wire_round_trip() {
        let req = valid_request();
        let json = serde_json::to_string(&req).unwrap();
        let parsed: DrinkRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, req);
    }
}
