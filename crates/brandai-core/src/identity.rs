//! The generated brand identity returned by every generation backend.
//!
//! Nested types reject unknown keys so that untrusted remote output is held
//! to the same shape the local generator produces.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::SchemaViolation;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("static hex color regex")
});

pub const MIN_POSTS: usize = 2;
pub const MIN_CAPTIONS: usize = 3;
pub const MIN_RECOMMENDATIONS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub neutral: String,
    pub success: String,
}

impl ColorPalette {
    /// Slots in declaration order, labelled for error messages.
    #[must_use]
    pub fn slots(&self) -> [(&'static str, &str); 5] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("neutral", &self.neutral),
            ("success", &self.success),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Typography {
    pub primary_font: String,
    pub secondary_font: String,
    pub font_weights: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialMediaPost {
    pub concept: String,
    pub colors: Vec<String>,
    pub caption: String,
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandIdentity {
    pub brand_name: String,
    pub slogan: String,
    pub color_palette: ColorPalette,
    pub typography: Typography,
    pub social_media_posts: Vec<SocialMediaPost>,
    pub captions: Vec<String>,
    pub brand_description: String,
    pub recommendations: Vec<String>,
}

impl BrandIdentity {
    /// Check the response-schema invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaViolation`] describing the first broken invariant.
    pub fn validate(&self) -> Result<(), SchemaViolation> {
        non_empty("brand_name", &self.brand_name)?;
        non_empty("slogan", &self.slogan)?;
        non_empty("brand_description", &self.brand_description)?;

        for (slot, color) in self.color_palette.slots() {
            hex_color(&format!("color_palette.{slot}"), color)?;
        }

        non_empty("typography.primary_font", &self.typography.primary_font)?;
        non_empty("typography.secondary_font", &self.typography.secondary_font)?;
        if self.typography.font_weights.is_empty() {
            return Err(SchemaViolation(
                "typography.font_weights must not be empty".to_string(),
            ));
        }
        for (name, weight) in &self.typography.font_weights {
            if !(100..=900).contains(weight) {
                return Err(SchemaViolation(format!(
                    "typography.font_weights.{name} = {weight} is outside 100..=900"
                )));
            }
        }

        min_len("social_media_posts", self.social_media_posts.len(), MIN_POSTS)?;
        for (i, post) in self.social_media_posts.iter().enumerate() {
            non_empty(&format!("social_media_posts[{i}].concept"), &post.concept)?;
            non_empty(&format!("social_media_posts[{i}].caption"), &post.caption)?;
            for color in &post.colors {
                hex_color(&format!("social_media_posts[{i}].colors"), color)?;
            }
        }

        min_len("captions", self.captions.len(), MIN_CAPTIONS)?;
        min_len(
            "recommendations",
            self.recommendations.len(),
            MIN_RECOMMENDATIONS,
        )?;
        Ok(())
    }
}

fn non_empty(field: &str, value: &str) -> Result<(), SchemaViolation> {
    if value.trim().is_empty() {
        return Err(SchemaViolation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn hex_color(field: &str, value: &str) -> Result<(), SchemaViolation> {
    if !HEX_COLOR.is_match(value) {
        return Err(SchemaViolation(format!(
            "{field} has non-hex color '{value}'"
        )));
    }
    Ok(())
}

fn min_len(field: &str, len: usize, min: usize) -> Result<(), SchemaViolation> {
    if len < min {
        return Err(SchemaViolation(format!(
            "{field} needs at least {min} entries, got {len}"
        )));
    }
    Ok(())
}
