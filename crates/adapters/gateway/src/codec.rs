//! JSON encoding of recipes for request and response bodies.
//!
//! Creation timestamps are rounded to whole seconds before encoding so a
//! record read back from storage encodes to the same bytes as the one that
//! was written.

use recipeboard_domain::recipe::Recipe;
use recipeboard_domain::time::round_to_second;

/// Encoding or decoding of a recipe body failed.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("malformed recipe JSON")]
    Decode(#[source] serde_json::Error),

    #[error("unable to encode recipe JSON")]
    Encode(#[source] serde_json::Error),
}

fn normalized(recipe: &Recipe) -> Recipe {
    let mut recipe = recipe.clone();
    recipe.created_at = recipe.created_at.map(round_to_second);
    recipe
}

/// Encode a single recipe.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode_one(recipe: &Recipe) -> Result<String, CodecError> {
    serde_json::to_string(&normalized(recipe)).map_err(CodecError::Encode)
}

/// Encode a list of recipes as a JSON array.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode_many(recipes: &[Recipe]) -> Result<String, CodecError> {
    let recipes: Vec<Recipe> = recipes.iter().map(normalized).collect();
    serde_json::to_string(&recipes).map_err(CodecError::Encode)
}

/// Decode a single recipe from a request body.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] if `text` is not a valid recipe object.
pub fn decode_one(text: &str) -> Result<Recipe, CodecError> {
    serde_json::from_str(text).map_err(CodecError::Decode)
}
