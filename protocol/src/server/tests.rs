#[cfg(test)]
mod tests {
    use crate::{CatalogEntry, ParseError, parse_pokemon};

    const ONIX: &str = r#"{
        "id": 95,
        "name": "onix",
        "sprites": { "front_default": "https://img.example/95.png", "back_default": null },
        "types": [
            { "slot": 2, "type": { "name": "ground", "url": "x" } },
            { "slot": 1, "type": { "name": "rock", "url": "x" } }
        ]
    }"#;

    #[test]
    fn test_parse_pokemon() {
        let entry = parse_pokemon(ONIX).unwrap();

        assert_eq!(
            entry,
            CatalogEntry {
                id: Some(95),
                name: "onix".into(),
                category: "rock".into(),
                sprite_url: Some("https://img.example/95.png".into()),
            }
        );
        assert_eq!(entry.display_name(), "Onix");
    }

    #[test]
    fn test_parse_missing_sprite() {
        let body = r#"{"id": 1, "name": "bulbasaur", "sprites": {"front_default": null},
            "types": [{"slot": 1, "type": {"name": "Grass"}}]}"#;
        let entry = parse_pokemon(body).unwrap();

        assert_eq!(entry.category, "grass");
        assert_eq!(entry.sprite_url, None);
    }

    #[test]
    fn test_parse_no_types() {
        let body = r#"{"id": 1, "name": "missingno", "types": []}"#;
        let result = parse_pokemon(body);

        assert_eq!(result, Err(ParseError::NoCategory("missingno".into())));
    }

    #[test]
    fn test_parse_missing_name() {
        let body = r#"{"id": 1, "types": [{"slot": 1, "type": {"name": "fire"}}]}"#;
        let result = parse_pokemon(body);

        assert_eq!(result, Err(ParseError::MissingField("name".into())));
    }

    #[test]
    fn test_parse_invalid() {
        let result = parse_pokemon("Not Found");

        assert!(matches!(result, Err(ParseError::InvalidJson(_))));
    }
}
