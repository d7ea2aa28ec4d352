//! Type definitions for the `update_branding` instruction.
//!
//! The branding record is a closed set of structs: once constructed, every
//! key the program expects is present. Untyped metadata (JSON) is checked
//! key-by-key on construction and reports the dotted path of the first
//! missing key.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{SdkError, SdkResult};
use crate::program::constants::BRANDING_FIELD_COUNT;

// ============================================================================
// Record Types
// ============================================================================

/// Image references (URIs or content hashes) for each branding surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingImages {
    pub token: String,
    pub twitter: String,
    pub telegram: String,
    pub discord: String,
    pub favicon: String,
    pub high_res: String,
}

/// Hex color strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
}

/// Official project links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialLinks {
    pub website: String,
    pub twitter: String,
    pub telegram: String,
    pub discord: String,
}

/// Full branding record carried by `update_branding`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingRecord {
    pub name: String,
    pub symbol: String,
    pub description: String,
    #[serde(alias = "logoUri")]
    pub logo_uri: String,
    pub images: BrandingImages,
    pub colors: BrandingColors,
    #[serde(alias = "officialLinks")]
    pub official_links: OfficialLinks,
}

impl BrandingRecord {
    /// All string fields in wire order, each paired with its dotted path.
    pub fn fields(&self) -> [(&'static str, &str); BRANDING_FIELD_COUNT] {
        [
            ("name", &self.name),
            ("symbol", &self.symbol),
            ("description", &self.description),
            ("logo_uri", &self.logo_uri),
            ("images.token", &self.images.token),
            ("images.twitter", &self.images.twitter),
            ("images.telegram", &self.images.telegram),
            ("images.discord", &self.images.discord),
            ("images.favicon", &self.images.favicon),
            ("images.high_res", &self.images.high_res),
            ("colors.primary", &self.colors.primary),
            ("colors.secondary", &self.colors.secondary),
            ("colors.accent", &self.colors.accent),
            ("colors.background", &self.colors.background),
            ("official_links.website", &self.official_links.website),
            ("official_links.twitter", &self.official_links.twitter),
            ("official_links.telegram", &self.official_links.telegram),
            ("official_links.discord", &self.official_links.discord),
        ]
    }

    /// Build a record from a JSON document in record form.
    ///
    /// Accepts `logo_uri`/`logoUri` and `official_links`/`officialLinks`.
    /// Extra keys are ignored.
    pub fn from_json(value: &Value) -> SdkResult<Self> {
        let root = as_object(value, "record")?;
        let logo_uri = required_str(root, &["logo_uri", "logoUri"], "")?;
        let links = required(root, &["official_links", "officialLinks"], "")?;
        Self::from_parts(root, logo_uri, links)
    }

    /// Build a record from the image processor's metadata document.
    ///
    /// The metadata carries no separate logo; `logo_uri` is the token image.
    pub fn from_image_metadata(value: &Value) -> SdkResult<Self> {
        let root = as_object(value, "metadata")?;
        let images = as_object(required(root, &["images"], "")?, "images")?;
        let logo_uri = required_str(images, &["token"], "images")?;
        let links = required(root, &["official_links", "officialLinks"], "")?;
        Self::from_parts(root, logo_uri, links)
    }

    fn from_parts(root: &Map<String, Value>, logo_uri: String, links: &Value) -> SdkResult<Self> {
        let images = as_object(required(root, &["images"], "")?, "images")?;
        let colors = as_object(required(root, &["colors"], "")?, "colors")?;
        let links = as_object(links, "official_links")?;

        Ok(Self {
            name: required_str(root, &["name"], "")?,
            symbol: required_str(root, &["symbol"], "")?,
            description: required_str(root, &["description"], "")?,
            logo_uri,
            images: BrandingImages {
                token: required_str(images, &["token"], "images")?,
                twitter: required_str(images, &["twitter"], "images")?,
                telegram: required_str(images, &["telegram"], "images")?,
                discord: required_str(images, &["discord"], "images")?,
                favicon: required_str(images, &["favicon"], "images")?,
                high_res: required_str(images, &["high_res"], "images")?,
            },
            colors: BrandingColors {
                primary: required_str(colors, &["primary"], "colors")?,
                secondary: required_str(colors, &["secondary"], "colors")?,
                accent: required_str(colors, &["accent"], "colors")?,
                background: required_str(colors, &["background"], "colors")?,
            },
            official_links: OfficialLinks {
                website: required_str(links, &["website"], "official_links")?,
                twitter: required_str(links, &["twitter"], "official_links")?,
                telegram: required_str(links, &["telegram"], "official_links")?,
                discord: required_str(links, &["discord"], "official_links")?,
            },
        })
    }
}

// ============================================================================
// JSON Helpers
// ============================================================================

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn as_object<'a>(value: &'a Value, path: &str) -> SdkResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| SdkError::Encoding {
        field: path.to_string(),
        reason: "expected an object".to_string(),
    })
}

/// Look up the first present key among `keys` (canonical name first).
fn required<'a>(obj: &'a Map<String, Value>, keys: &[&str], parent: &str) -> SdkResult<&'a Value> {
    keys.iter()
        .find_map(|key| obj.get(*key))
        .ok_or_else(|| SdkError::MissingField(join_path(parent, keys[0])))
}

fn required_str(obj: &Map<String, Value>, keys: &[&str], parent: &str) -> SdkResult<String> {
    match required(obj, keys, parent)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(SdkError::Encoding {
            field: join_path(parent, keys[0]),
            reason: format!("expected a string, got {}", json_kind(other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
