//! Prompt construction for the remote completion call.

use brandai_core::BrandBrief;

pub(crate) const SYSTEM_PROMPT: &str = "Você é um especialista criativo em branding e design. \
Gere identidades visuais ÚNICAS e ORIGINAIS baseadas nas informações. \
Seja CRIATIVO e evite repetições. Retorne APENAS JSON válido.";

const NOT_SPECIFIED: &str = "Não especificado";

/// Build the user prompt for one brief.
///
/// Embeds every brief field (only the first three keywords) and the exact
/// JSON shape the response parser accepts.
#[must_use]
pub fn build_prompt(brief: &BrandBrief) -> String {
    let [kw1, kw2, kw3] = brief.keywords();
    let keywords = [kw1, kw2, kw3]
        .into_iter()
        .filter(|k| !k.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let nome = &brief.nome;
    let segmento = &brief.segmento;
    let publico = &brief.publico;
    let estilo = brief.estilo;
    let moderno = brief.moderno;
    let hashtag_nome = brief.nome.replace(' ', "");

    format!(
        "Crie uma identidade visual COMPLETAMENTE ÚNICA e CRIATIVA para a marca: {nome}

CONTEXTO ESPECÍFICO:
- Segmento: {segmento}
- Palavras-chave: {keywords}
- Cores preferidas: {cores_sim}
- Cores a evitar: {cores_nao}
- Tom de voz: {tom}
- Estilo visual: {estilo}
- Estilo temporal: {moderno}
- Público-alvo: {publico}
- Objetivo: {objetivo}
- Inspirações: {inspiracao}
- Elementos: {elementos}

INSTRUÇÕES CRÍTICAS:
- Seja EXTREMAMENTE CRIATIVO e ORIGINAL
- NUNCA repita as mesmas cores, slogans ou conceitos
- Crie combinações de cores INOVADORAS e ÚNICAS
- Gere slogans COMPLETAMENTE DIFERENTES para cada marca
- Adapte TUDO ao contexto específico fornecido
- Use tipografias DIFERENTES baseadas no estilo
- Todas as cores devem ser hexadecimais no formato #RRGGBB
- Os pesos de fonte devem ser inteiros entre 100 e 900

RETORNE APENAS JSON com exatamente estas chaves:
{{
    \"slogan\": \"slogan criativo e memorável ÚNICO para {nome}\",
    \"color_palette\": {{
        \"primary\": \"cor HEXADECIMAL única baseada em {cores_sim}\",
        \"secondary\": \"cor HEXADECIMAL complementar ÚNICA\",
        \"accent\": \"cor HEXADECIMAL de destaque INOVADORA\",
        \"neutral\": \"cor HEXADECIMAL neutra equilibrada\",
        \"success\": \"cor HEXADECIMAL para sucesso harmoniosa\"
    }},
    \"typography\": {{
        \"primary_font\": \"Nome de fonte ÚNICA para {estilo}\",
        \"secondary_font\": \"Nome de fonte complementar DIFERENTE\",
        \"font_weights\": {{ \"light\": 300, \"regular\": 400, \"bold\": 700 }}
    }},
    \"social_media_posts\": [
        {{
            \"concept\": \"conceito criativo ÚNICO 1 para {nome}\",
            \"colors\": [\"#cor1\", \"#cor2\"],
            \"caption\": \"legenda engajadora ORIGINAL 1 para {publico}\",
            \"hashtags\": [\"#{hashtag_nome}\", \"#{segmento}\"]
        }},
        {{
            \"concept\": \"conceito criativo ÚNICO 2 para {segmento}\",
            \"colors\": [\"#cor3\", \"#cor4\"],
            \"caption\": \"legenda engajadora ORIGINAL 2 sobre {keywords}\",
            \"hashtags\": [\"#{kw1}\", \"#{moderno}\"]
        }}
    ],
    \"captions\": [
        \"legenda COMPLETAMENTE ORIGINAL 1 para redes sociais\",
        \"legenda ÚNICA 2 destacando {kw2}\",
        \"legenda INOVADORA 3 com call-to-action personalizado\"
    ],
    \"brand_description\": \"descrição completa e ÚNICA da identidade visual de {nome}\",
    \"recommendations\": [
        \"recomendação prática PERSONALIZADA 1 para {nome}\",
        \"recomendação específica 2 baseada em {estilo}\",
        \"recomendação ÚNICA 3 para {publico}\"
    ]
}}
",
        cores_sim = brief.cores_sim,
        cores_nao = brief.cores_nao,
        tom = brief.tom,
        objetivo = brief.objetivo,
        inspiracao = brief.inspiracao.as_deref().unwrap_or(NOT_SPECIFIED),
        elementos = brief.elementos.as_deref().unwrap_or(NOT_SPECIFIED),
    )
}
