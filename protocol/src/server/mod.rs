mod tests;

use serde::Deserialize;

use crate::ParseError;

/// A creature as described by the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: Option<u32>,
    pub name: String,
    /// Primary (slot 1) category, lowercase as sent by the catalog
    pub category: String,
    pub sprite_url: Option<String>,
}

impl CatalogEntry {
    /// Name with the first letter uppercased ("bulbasaur" -> "Bulbasaur")
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[derive(Deserialize)]
struct RawPokemon {
    id: Option<u32>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    types: Vec<RawTypeSlot>,
    #[serde(default)]
    sprites: Option<RawSprites>,
}

#[derive(Deserialize)]
struct RawTypeSlot {
    slot: u8,
    #[serde(rename = "type")]
    kind: RawNamed,
}

#[derive(Deserialize)]
struct RawNamed {
    name: String,
}

#[derive(Deserialize)]
struct RawSprites {
    front_default: Option<String>,
}

/// Parse a `/pokemon/{id|name}` response body
pub fn parse_pokemon(body: &str) -> Result<CatalogEntry, ParseError> {
    let raw: RawPokemon =
        serde_json::from_str(body).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    let name = raw.name.trim();
    if name.is_empty() {
        return Err(ParseError::MissingField("name".to_string()));
    }

    // Slot order in the payload is not guaranteed, pick slot 1 explicitly
    let category = raw
        .types
        .iter()
        .min_by_key(|t| t.slot)
        .map(|t| t.kind.name.to_lowercase())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ParseError::NoCategory(name.to_string()))?;

    Ok(CatalogEntry {
        id: raw.id,
        name: name.to_string(),
        category,
        sprite_url: raw.sprites.and_then(|s| s.front_default),
    })
}
