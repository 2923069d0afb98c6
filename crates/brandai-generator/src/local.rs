//! Table-driven identity generator used when the remote backend is
//! unavailable or fails.
//!
//! Palettes are keyed by visual style and slogans by tone; one entry of each
//! is drawn from the caller's random source. Everything else is rendered
//! from fixed templates over the brief.

use std::collections::BTreeMap;

use brandai_core::{
    BrandBrief, BrandIdentity, ColorPalette, SocialMediaPost, Tone, Typography, VisualStyle,
};
use rand::Rng;

/// A palette row from the static tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteTemplate {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub neutral: &'static str,
    pub success: &'static str,
}

impl PaletteTemplate {
    const fn new(
        primary: &'static str,
        secondary: &'static str,
        accent: &'static str,
        neutral: &'static str,
        success: &'static str,
    ) -> Self {
        Self {
            primary,
            secondary,
            accent,
            neutral,
            success,
        }
    }

    fn to_palette(self) -> ColorPalette {
        ColorPalette {
            primary: self.primary.to_string(),
            secondary: self.secondary.to_string(),
            accent: self.accent.to_string(),
            neutral: self.neutral.to_string(),
            success: self.success.to_string(),
        }
    }
}

const MINIMALISTA: [PaletteTemplate; 3] = [
    PaletteTemplate::new("#2D3748", "#4A5568", "#3182CE", "#F7FAFC", "#38A169"),
    PaletteTemplate::new("#1A202C", "#2D3748", "#2B6CB0", "#EDF2F7", "#2F855A"),
    PaletteTemplate::new("#4A5568", "#718096", "#4299E1", "#EBF4FF", "#48BB78"),
];

const VIBRANTE: [PaletteTemplate; 3] = [
    PaletteTemplate::new("#E53E3E", "#DD6B20", "#D69E2E", "#FFFBEB", "#38A169"),
    PaletteTemplate::new("#B83280", "#D69E2E", "#38A169", "#FAF5FF", "#2F855A"),
    PaletteTemplate::new("#3182CE", "#DD6B20", "#B83280", "#EBF8FF", "#38A169"),
];

const ELEGANTE: [PaletteTemplate; 3] = [
    PaletteTemplate::new("#1A365D", "#2D3748", "#B7791F", "#EDF2F7", "#276749"),
    PaletteTemplate::new("#2D3748", "#4A5568", "#744210", "#FAFAFA", "#22543D"),
    PaletteTemplate::new("#322659", "#44337A", "#B7791F", "#FAF5FF", "#22543D"),
];

const ORGANICO: [PaletteTemplate; 3] = [
    PaletteTemplate::new("#22543D", "#2F855A", "#D69E2E", "#F0FFF4", "#38A169"),
    PaletteTemplate::new("#1A4731", "#2D5A3C", "#B7791F", "#F0FFF4", "#2F855A"),
    PaletteTemplate::new("#2F855A", "#38A169", "#D69E2E", "#F0FFF4", "#48BB78"),
];

// `{nome}` and `{segmento}` are substituted at render time.
const SLOGANS_SERIA: [&str; 4] = [
    "Excelência em {segmento} - {nome}",
    "Profissionalismo que inspira confiança",
    "{nome}: Qualidade e seriedade",
    "Soluções {segmento} com credibilidade",
];

const SLOGANS_DESCONTRAIDA: [&str; 4] = [
    "Tornando {segmento} divertido!",
    "{nome}: Estilo com personalidade",
    "Experiências incríveis em {segmento}",
    "{segmento} com alegria e descontração",
];

const SLOGANS_EQUILIBRADA: [&str; 4] = [
    "O equilíbrio perfeito em {segmento}",
    "{nome}: Tradição e inovação",
    "Harmonia entre qualidade e acessibilidade",
    "Conectando tradição e modernidade",
];

const SLOGANS_LUXUOSA: [&str; 4] = [
    "O luxo redefinido em {segmento}",
    "{nome}: Sofisticação sem igual",
    "Experiência premium exclusiva",
    "Excelência que transcende expectativas",
];

const PRIMARY_FONT: &str = "Inter";
const SECONDARY_FONT: &str = "system-ui";

/// Candidate palettes for a visual style.
#[must_use]
pub fn palettes_for(style: VisualStyle) -> &'static [PaletteTemplate] {
    match style {
        VisualStyle::Minimalista => &MINIMALISTA,
        VisualStyle::Vibrante => &VIBRANTE,
        VisualStyle::Elegante => &ELEGANTE,
        VisualStyle::Organico => &ORGANICO,
    }
}

fn slogan_templates(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Seria => &SLOGANS_SERIA,
        Tone::Descontraida => &SLOGANS_DESCONTRAIDA,
        Tone::Equilibrada => &SLOGANS_EQUILIBRADA,
        Tone::Luxuosa => &SLOGANS_LUXUOSA,
    }
}

/// Every slogan the local backend can produce for `brief`.
#[must_use]
pub fn slogan_options(brief: &BrandBrief) -> Vec<String> {
    slogan_templates(brief.tom)
        .iter()
        .map(|template| render_slogan(template, brief))
        .collect()
}

fn render_slogan(template: &str, brief: &BrandBrief) -> String {
    template
        .replace("{nome}", &brief.nome)
        .replace("{segmento}", &brief.segmento)
}

/// Uppercase the first letter of each word and lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Offline generator. Holds no state; randomness comes from the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalBackend;

impl LocalBackend {
    /// Build an identity for `brief`, drawing palette and slogan from `rng`.
    ///
    /// Produces 3 posts, 5 captions and 6 recommendations. Briefs with fewer
    /// than three keywords render the missing ones as empty strings.
    pub fn generate<R: Rng>(&self, brief: &BrandBrief, rng: &mut R) -> BrandIdentity {
        let palettes = palettes_for(brief.estilo);
        let palette = palettes[rng.random_range(0..palettes.len())];

        let templates = slogan_templates(brief.tom);
        let slogan = render_slogan(templates[rng.random_range(0..templates.len())], brief);

        let keywords = brief.keywords();
        let nome = &brief.nome;
        let segmento = &brief.segmento;
        let publico = &brief.publico;
        let moderno = brief.moderno.as_str();
        let estilo = brief.estilo.as_str();
        let tom = brief.tom.as_str();
        let [kw1, kw2, kw3] = keywords.map(title_case);

        let social_media_posts = vec![
            SocialMediaPost {
                concept: format!("Lançamento {nome}"),
                colors: vec![palette.primary.to_string(), palette.accent.to_string()],
                caption: format!(
                    "🚀 Estamos lançando o {nome}! Uma nova era em {segmento} para {publico}."
                ),
                hashtags: vec![
                    format!("#{}", nome.replace(' ', "")),
                    format!("#{segmento}"),
                    "#novamarca".to_string(),
                ],
            },
            SocialMediaPost {
                concept: format!("Valores {}", keywords[0]),
                colors: vec![palette.secondary.to_string(), palette.success.to_string()],
                caption: format!(
                    "💫 {kw1} é nosso compromisso com {publico}. Descubra a diferença {nome}!"
                ),
                hashtags: vec![
                    format!("#{}", keywords[0]),
                    "#valores".to_string(),
                    "#qualidade".to_string(),
                ],
            },
            SocialMediaPost {
                concept: "Futuro e Inovação".to_string(),
                colors: vec![palette.accent.to_string(), palette.primary.to_string()],
                caption: format!("🌟 Moldando o futuro do {segmento} com soluções {moderno}."),
                hashtags: vec![
                    "#inovação".to_string(),
                    "#futuro".to_string(),
                    format!("#{segmento}"),
                ],
            },
        ];

        let captions = vec![
            format!("Bem-vindo ao {nome} - revolucionando o {segmento}"),
            format!("Descubra uma nova experiência em {segmento} com {nome}"),
            format!("{kw1}, {kw2}, {kw3} - é o que nos define"),
            format!("Transformando {segmento} com excelência desde o primeiro dia"),
            format!("Conectando {publico} com as melhores soluções em {segmento}"),
        ];

        let brand_description = format!(
            "Identidade visual criada para {nome}, uma marca {estilo} e {moderno} \
             no segmento de {segmento}. Com foco em {}, a marca se comunica de forma \
             {tom} com seu público-alvo: {publico}.",
            keywords.join(", ")
        );

        let recommendations = vec![
            format!(
                "Use a cor primária ({}) para logotipo e elementos principais",
                palette.primary
            ),
            format!(
                "A cor secundária ({}) é ideal para botões e call-to-actions",
                palette.secondary
            ),
            format!(
                "O acento ({}) deve ser usado para destaques e elementos interativos",
                palette.accent
            ),
            format!("Mantenha a tipografia '{estilo}' em todos os materiais"),
            format!("Adapte o tom {tom} na comunicação com {publico}"),
            "Utilize a paleta de cores de forma consistente em todas as plataformas"
                .to_string(),
        ];

        BrandIdentity {
            brand_name: brief.nome.clone(),
            slogan,
            color_palette: palette.to_palette(),
            typography: default_typography(),
            social_media_posts,
            captions,
            brand_description,
            recommendations,
        }
    }
}

// Same fonts for every visual style.
fn default_typography() -> Typography {
    Typography {
        primary_font: PRIMARY_FONT.to_string(),
        secondary_font: SECONDARY_FONT.to_string(),
        font_weights: BTreeMap::from([
            ("light".to_string(), 300),
            ("regular".to_string(), 400),
            ("bold".to_string(), 700),
        ]),
    }
}

#[cfg(test)]
#[path = "local_test.rs"]
mod tests;
