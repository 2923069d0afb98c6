use brandai_core::{Era, Goal, Tone, VisualStyle};

use super::*;

fn lumen() -> BrandBrief {
    BrandBrief {
        nome: "Lumen".to_string(),
        segmento: "café".to_string(),
        palavras: "quente,acolhedor,simples".to_string(),
        cores_sim: "verde".to_string(),
        cores_nao: "vermelho".to_string(),
        tom: Tone::Descontraida,
        estilo: VisualStyle::Organico,
        moderno: Era::Moderna,
        publico: "jovens urbanos".to_string(),
        objetivo: Goal::Vender,
        inspiracao: None,
        elementos: None,
    }
}

fn payload() -> serde_json::Value {
    serde_json::json!({
        "slogan": "Lumen, o café que abraça",
        "color_palette": {
            "primary": "#3B2F2F",
            "secondary": "#6F4E37",
            "accent": "#C8A165",
            "neutral": "#FAF3E0",
            "success": "#4F7942"
        },
        "typography": {
            "primary_font": "Fraunces",
            "secondary_font": "Work Sans",
            "font_weights": { "light": 300, "regular": 400, "bold": 700 }
        },
        "social_media_posts": [
            {
                "concept": "Manhãs quentes",
                "colors": ["#3B2F2F", "#C8A165"],
                "caption": "Seu abraço matinal em forma de café.",
                "hashtags": ["#Lumen", "#café"]
            },
            {
                "concept": "Simples assim",
                "colors": ["#6F4E37", "#4F7942"],
                "caption": "Quente, acolhedor e simples.",
                "hashtags": ["#quente", "#moderna"]
            }
        ],
        "captions": ["Bom dia!", "Acolhedor como casa.", "Venha provar."],
        "brand_description": "Uma cafeteria orgânica para jovens urbanos.",
        "recommendations": ["Use o marrom no logo.", "Fotos com luz natural.", "Tom leve."]
    })
}

#[test]
fn strip_code_fences_removes_json_fence() {
    let content = "```json\n{\"a\": 1}\n```";
    assert_eq!(strip_code_fences(content), "{\"a\": 1}");
}

#[test]
fn strip_code_fences_removes_bare_fence() {
    let content = "  ```\n{\"a\": 1}\n```  ";
    assert_eq!(strip_code_fences(content), "{\"a\": 1}");
}

#[test]
fn strip_code_fences_handles_single_line_fence() {
    assert_eq!(strip_code_fences("```json{\"a\": 1}```"), "{\"a\": 1}");
}

#[test]
fn strip_code_fences_drops_surrounding_prose() {
    let content = "Claro! Aqui está:\n{\"a\": 1}\nBoa sorte.";
    assert_eq!(strip_code_fences(content), "{\"a\": 1}");
}

#[test]
fn strip_code_fences_leaves_plain_json_alone() {
    assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
}

#[test]
fn parse_identity_maps_payload_fields() {
    let content = payload().to_string();
    let identity = parse_identity(&content, &lumen()).expect("valid payload");
    assert_eq!(identity.brand_name, "Lumen");
    assert_eq!(identity.slogan, "Lumen, o café que abraça");
    assert_eq!(identity.color_palette.primary, "#3B2F2F");
    assert_eq!(identity.typography.primary_font, "Fraunces");
    assert_eq!(identity.typography.font_weights.get("bold"), Some(&700));
    assert_eq!(identity.social_media_posts.len(), 2);
    assert_eq!(identity.captions.len(), 3);
}

#[test]
fn parse_identity_overrides_model_brand_name() {
    let mut value = payload();
    value["brand_name"] = serde_json::json!("Lúmen Café Ltda");
    let identity = parse_identity(&value.to_string(), &lumen()).expect("valid payload");
    assert_eq!(identity.brand_name, "Lumen");
}

#[test]
fn parse_identity_accepts_fenced_payload() {
    let content = format!("```json\n{}\n```", payload());
    assert!(parse_identity(&content, &lumen()).is_ok());
}

#[test]
fn parse_identity_rejects_non_json() {
    let err = parse_identity("Desculpe, não consigo ajudar.", &lumen()).unwrap_err();
    assert!(
        matches!(err, RemoteGenerationError::MalformedJson(_)),
        "expected MalformedJson, got: {err:?}"
    );
}

#[test]
fn parse_identity_rejects_missing_palette_key() {
    let mut value = payload();
    value["color_palette"]
        .as_object_mut()
        .unwrap()
        .remove("success");
    let err = parse_identity(&value.to_string(), &lumen()).unwrap_err();
    assert!(
        matches!(err, RemoteGenerationError::Schema(_)),
        "expected Schema, got: {err:?}"
    );
}

#[test]
fn parse_identity_rejects_missing_typography_key() {
    let mut value = payload();
    value["typography"]
        .as_object_mut()
        .unwrap()
        .remove("secondary_font");
    assert!(matches!(
        parse_identity(&value.to_string(), &lumen()),
        Err(RemoteGenerationError::Schema(_))
    ));
}

#[test]
fn parse_identity_rejects_empty_posts() {
    let mut value = payload();
    value["social_media_posts"] = serde_json::json!([]);
    assert!(matches!(
        parse_identity(&value.to_string(), &lumen()),
        Err(RemoteGenerationError::Schema(_))
    ));
}

#[test]
fn parse_identity_rejects_empty_captions() {
    let mut value = payload();
    value["captions"] = serde_json::json!([]);
    assert!(matches!(
        parse_identity(&value.to_string(), &lumen()),
        Err(RemoteGenerationError::Schema(_))
    ));
}

#[test]
fn parse_identity_rejects_unknown_top_level_key() {
    let mut value = payload();
    value["mood_board"] = serde_json::json!(["x"]);
    assert!(matches!(
        parse_identity(&value.to_string(), &lumen()),
        Err(RemoteGenerationError::Schema(_))
    ));
}

#[test]
fn parse_identity_rejects_mistyped_weight() {
    let mut value = payload();
    value["typography"]["font_weights"]["bold"] = serde_json::json!("bold");
    assert!(matches!(
        parse_identity(&value.to_string(), &lumen()),
        Err(RemoteGenerationError::Schema(_))
    ));
}

#[test]
fn parse_identity_rejects_non_hex_color() {
    let mut value = payload();
    value["color_palette"]["accent"] = serde_json::json!("dourado");
    assert!(matches!(
        parse_identity(&value.to_string(), &lumen()),
        Err(RemoteGenerationError::Schema(_))
    ));
}

#[test]
fn extract_content_reads_first_choice() {
    let body = serde_json::json!({
        "id": "chatcmpl-1",
        "choices": [{ "index": 0, "message": { "role": "assistant", "content": "{}" } }]
    })
    .to_string();
    assert_eq!(extract_content(&body).unwrap(), "{}");
}

#[test]
fn extract_content_without_choices_is_empty_completion() {
    let body = serde_json::json!({ "choices": [] }).to_string();
    assert!(matches!(
        extract_content(&body),
        Err(RemoteGenerationError::EmptyCompletion)
    ));
}

#[test]
fn extract_content_with_null_content_is_empty_completion() {
    let body = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": null } }]
    })
    .to_string();
    assert!(matches!(
        extract_content(&body),
        Err(RemoteGenerationError::EmptyCompletion)
    ));
}

#[test]
fn extract_content_rejects_non_json_envelope() {
    assert!(matches!(
        extract_content("<html>bad gateway</html>"),
        Err(RemoteGenerationError::Envelope(_))
    ));
}
