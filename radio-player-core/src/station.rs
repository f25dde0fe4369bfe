use serde::{Deserialize, Serialize};

/// A single entry of the radio catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Short identifier typed by the user, e.g. `fip`
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub twitter: String,
    /// Stream URL handed to the external player
    #[serde(rename = "stream")]
    pub stream_url: String,
}

impl Station {
    pub fn new(id: impl Into<String>, name: impl Into<String>, stream_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stream_url: stream_url.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_entry_with_stream_key() {
        let json = r#"{
            "id": "fip",
            "name": "FIP",
            "description": "Eclectic",
            "website": "https://www.radiofrance.fr/fip",
            "facebook": "",
            "twitter": "",
            "stream": "https://icecast.radiofrance.fr/fip-midfi.mp3"
        }"#;

        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station.id, "fip");
        assert_eq!(station.stream_url, "https://icecast.radiofrance.fr/fip-midfi.mp3");
    }

    #[test]
    fn metadata_fields_are_optional() {
        let json = r#"{ "id": "x", "name": "X", "stream": "http://x" }"#;
        let station: Station = serde_json::from_str(json).unwrap();
        assert_eq!(station, Station::new("x", "X", "http://x"));
    }
}
