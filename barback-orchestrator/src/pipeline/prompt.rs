//! Prompt construction
//!
//! Prompts are pure functions of the request (and, for the image, the
//! generated text), so the same request always produces the same prompt.

use barback_core::domain::request::DrinkRequest;

/// Builds the text-generation prompt from the request fields
pub fn recipe_prompt(request: &DrinkRequest) -> String {
    let mut prompt = format!(
        "Create a detailed drink recipe with the following specifications:\n\n\
         Customer: {}\n\
         Mood: {}\n\
         Flavor Profile: {}\n\
         Fruits: {}\n\
         Liquids: {}\n",
        request.customer_name,
        request.mood,
        request.flavor,
        request.fruit.join(", "),
        request.liquids.join(", "),
    );

    if !request.syrups.is_empty() {
        prompt.push_str(&format!("Syrups: {}\n", request.syrups.join(", ")));
    }

    if !request.leaves.is_empty() {
        prompt.push_str(&format!("Leaves: {}\n", request.leaves.join(", ")));
    }

    if let Some(notes) = &request.notes {
        prompt.push_str(&format!("Additional Notes: {}\n", notes));
    }

    prompt.push_str(
        "\nPlease include:\n\
         1. A brief introduction about the drink\n\
         2. List of ingredients with precise measurements\n\
         3. Step-by-step preparation instructions\n\
         4. Serving suggestions\n\
         5. Any interesting facts or history related to this type of drink\n\n\
         Format the recipe in a clear, professional style suitable for a \
         cocktail recipe book.\n",
    );

    prompt
}

/// Builds the image-generation prompt from the request and the generated text
///
/// The first line of the recipe text usually carries the drink's name, so it
/// anchors the image to what was actually generated.
pub fn image_prompt(request: &DrinkRequest, recipe_text: &str) -> String {
    let title = recipe_text.lines().next().unwrap_or_default().trim();

    let mut prompt = format!(
        "A professional, high-quality photograph of a {} drink crafted for {}, \
         featuring {}. ",
        request.flavor,
        request.customer_name,
        request.fruit.join(", "),
    );

    if !title.is_empty() {
        prompt.push_str(&format!("The drink is presented as \"{}\". ", title));
    }

    prompt.push_str(
        "The drink should be in an appropriate glass, garnished beautifully, \
         with perfect lighting and composition. The image should look like it \
         belongs in a high-end cocktail recipe book or luxury bar menu. \
         Studio lighting, high resolution, photorealistic.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use barback_core::domain::request::{Flavor, Mood};

    fn request() -> DrinkRequest {
        DrinkRequest {
            customer_name: "Ana".to_string(),
            mood: Mood::Happy,
            flavor: Flavor::Fruity,
            fruit: vec!["mango".to_string(), "lime".to_string()],
            liquids: vec!["soda".to_string()],
            syrups: vec![],
            leaves: vec![],
            notes: None,
            email: None,
        }
    }

    #[test]
    fn test_recipe_prompt_contains_request_fields() {
        let prompt = recipe_prompt(&request());
        assert!(prompt.contains("Customer: Ana"));
        assert!(prompt.contains("Mood: happy"));
        assert!(prompt.contains("Flavor Profile: fruity"));
        assert!(prompt.contains("Fruits: mango, lime"));
        assert!(prompt.contains("Liquids: soda"));
    }

    #[test]
    fn test_recipe_prompt_omits_empty_optional_sections() {
        let prompt = recipe_prompt(&request());
        assert!(!prompt.contains("Syrups:"));
        assert!(!prompt.contains("Leaves:"));
        assert!(!prompt.contains("Additional Notes:"));
    }

    #[test]
    fn test_recipe_prompt_includes_optional_sections_when_present() {
        let mut req = request();
        req.syrups = vec!["grenadine".to_string()];
        req.leaves = vec!["mint".to_string()];
        req.notes = Some("not too sweet".to_string());

        let prompt = recipe_prompt(&req);
        assert!(prompt.contains("Syrups: grenadine"));
        assert!(prompt.contains("Leaves: mint"));
        assert!(prompt.contains("Additional Notes: not too sweet"));
    }

    #[test]
    fn test_recipe_prompt_is_deterministic() {
        assert_eq!(recipe_prompt(&request()), recipe_prompt(&request()));
    }

    #[test]
    fn test_image_prompt_combines_request_and_text() {
        let prompt = image_prompt(&request(), "Mango Sunrise\n\nA bright mocktail...");
        assert!(prompt.contains("fruity drink crafted for Ana"));
        assert!(prompt.contains("mango, lime"));
        assert!(prompt.contains("\"Mango Sunrise\""));
    }

    #[test]
    fn test_image_prompt_with_empty_text() {
        let prompt = image_prompt(&request(), "");
        assert!(!prompt.contains("presented as"));
        assert!(prompt.contains("photorealistic"));
    }
}
