use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Number of keywords from `palavras` that feed generation.
pub const KEYWORD_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    #[serde(rename = "séria")]
    Seria,
    #[serde(rename = "descontraída")]
    Descontraida,
    #[serde(rename = "equilibrada")]
    Equilibrada,
    #[serde(rename = "luxuosa")]
    Luxuosa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualStyle {
    #[serde(rename = "minimalista")]
    Minimalista,
    #[serde(rename = "vibrante")]
    Vibrante,
    #[serde(rename = "elegante")]
    Elegante,
    #[serde(rename = "orgânico")]
    Organico,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Era {
    #[serde(rename = "moderna")]
    Moderna,
    #[serde(rename = "clássica")]
    Classica,
    #[serde(rename = "futurista")]
    Futurista,
    #[serde(rename = "retrô")]
    Retro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Vender,
    Servicos,
    Educar,
    Entreter,
    Comunidade,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Seria,
        Tone::Descontraida,
        Tone::Equilibrada,
        Tone::Luxuosa,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Seria => "séria",
            Tone::Descontraida => "descontraída",
            Tone::Equilibrada => "equilibrada",
            Tone::Luxuosa => "luxuosa",
        }
    }
}

impl VisualStyle {
    pub const ALL: [VisualStyle; 4] = [
        VisualStyle::Minimalista,
        VisualStyle::Vibrante,
        VisualStyle::Elegante,
        VisualStyle::Organico,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VisualStyle::Minimalista => "minimalista",
            VisualStyle::Vibrante => "vibrante",
            VisualStyle::Elegante => "elegante",
            VisualStyle::Organico => "orgânico",
        }
    }
}

impl Era {
    pub const ALL: [Era; 4] = [Era::Moderna, Era::Classica, Era::Futurista, Era::Retro];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Era::Moderna => "moderna",
            Era::Classica => "clássica",
            Era::Futurista => "futurista",
            Era::Retro => "retrô",
        }
    }
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::Vender,
        Goal::Servicos,
        Goal::Educar,
        Goal::Entreter,
        Goal::Comunidade,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Vender => "vender",
            Goal::Servicos => "servicos",
            Goal::Educar => "educar",
            Goal::Entreter => "entreter",
            Goal::Comunidade => "comunidade",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Tone, VisualStyle, Era, Goal);

/// Inbound description of the brand to generate an identity for.
///
/// Field names follow the public JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandBrief {
    pub nome: String,
    pub segmento: String,
    /// Comma-separated keywords; only the first three are used.
    pub palavras: String,
    pub cores_sim: String,
    pub cores_nao: String,
    pub tom: Tone,
    pub estilo: VisualStyle,
    pub moderno: Era,
    pub publico: String,
    pub objetivo: Goal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspiracao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elementos: Option<String>,
}

impl BrandBrief {
    /// Trim surrounding whitespace from every text field, then validate.
    ///
    /// Blank optional fields become `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a bounded field is out of range or
    /// `palavras` has fewer than three keywords.
    pub fn into_validated(mut self) -> Result<Self, ValidationError> {
        for field in [
            &mut self.nome,
            &mut self.segmento,
            &mut self.palavras,
            &mut self.cores_sim,
            &mut self.cores_nao,
            &mut self.publico,
        ] {
            *field = field.trim().to_string();
        }
        for field in [&mut self.inspiracao, &mut self.elementos] {
            *field = field
                .take()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty());
        }

        self.validate()?;
        Ok(self)
    }

    /// Check length bounds and the keyword count.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("nome", &self.nome, 2, 100)?;
        check_length("segmento", &self.segmento, 2, 100)?;
        check_length("publico", &self.publico, 2, 200)?;

        let found = self.keyword_list().count();
        if found < KEYWORD_COUNT {
            return Err(ValidationError::NotEnoughKeywords { found });
        }
        Ok(())
    }

    /// The first three keywords from `palavras`, trimmed.
    ///
    /// Missing entries are empty strings so callers that skipped validation
    /// still get a total result.
    #[must_use]
    pub fn keywords(&self) -> [&str; KEYWORD_COUNT] {
        let mut out = [""; KEYWORD_COUNT];
        for (slot, kw) in out.iter_mut().zip(self.keyword_list()) {
            *slot = kw;
        }
        out
    }

    fn keyword_list(&self) -> impl Iterator<Item = &str> {
        self.palavras
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let actual = value.trim().chars().count();
    if actual < min || actual > max {
        return Err(ValidationError::Length {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "brief_test.rs"]
mod tests;
