use serde::Serialize;

/// A single joke from the protected collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Joke {
    pub id: &'static str,
    pub joke: &'static str,
}

/// The static joke collection served behind the token guard.
///
/// Read-only and embedded in the binary; every request sees the identical
/// collection.
const JOKES: [Joke; 3] = [
    Joke {
        id: "0189hNRf2g",
        joke: "I'm tired of following my dreams. I'm just going to ask them where they are going and meet up with them later.",
    },
    Joke {
        id: "08EQZ8EQukb",
        joke: "Did you hear about the guy whose whole left side was cut off? He's all right now.",
    },
    Joke {
        id: "08xHQCdx5Ed",
        joke: "Why didn't the skeleton cross the road? Because he had no guts.",
    },
];

/// Get the full joke collection.
pub fn catalog() -> &'static [Joke] {
    &JOKES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_stable() {
        // Same slice on every call
        assert_eq!(catalog(), catalog());
        assert_eq!(catalog().len(), 3);
    }

    #[test]
    fn test_catalog_serializes_as_id_and_joke() {
        let value = serde_json::to_value(catalog()).unwrap();
        let first = &value[0];
        assert_eq!(first["id"], "0189hNRf2g");
        assert!(first["joke"].as_str().unwrap().starts_with("I'm tired"));
    }
}
