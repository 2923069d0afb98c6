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

#[test]
fn deserializes_accented_enum_values() {
    let json = serde_json::json!({
        "nome": "Lumen",
        "segmento": "café",
        "palavras": "quente,acolhedor,simples",
        "cores_sim": "verde",
        "cores_nao": "vermelho",
        "tom": "séria",
        "estilo": "orgânico",
        "moderno": "retrô",
        "publico": "jovens urbanos",
        "objetivo": "servicos"
    });
    let brief: BrandBrief = serde_json::from_value(json).expect("valid brief");
    assert_eq!(brief.tom, Tone::Seria);
    assert_eq!(brief.estilo, VisualStyle::Organico);
    assert_eq!(brief.moderno, Era::Retro);
    assert_eq!(brief.objetivo, Goal::Servicos);
    assert!(brief.inspiracao.is_none());
}

#[test]
fn rejects_unknown_enum_value() {
    let json = serde_json::json!({
        "nome": "Lumen",
        "segmento": "café",
        "palavras": "a,b,c",
        "cores_sim": "verde",
        "cores_nao": "vermelho",
        "tom": "sarcástica",
        "estilo": "orgânico",
        "moderno": "moderna",
        "publico": "jovens",
        "objetivo": "vender"
    });
    assert!(serde_json::from_value::<BrandBrief>(json).is_err());
}

#[test]
fn enum_display_matches_wire_value() {
    for tone in Tone::ALL {
        let wire = serde_json::to_value(tone).unwrap();
        assert_eq!(wire.as_str(), Some(tone.to_string().as_str()));
    }
    for style in VisualStyle::ALL {
        let wire = serde_json::to_value(style).unwrap();
        assert_eq!(wire.as_str(), Some(style.as_str()));
    }
    for era in Era::ALL {
        let wire = serde_json::to_value(era).unwrap();
        assert_eq!(wire.as_str(), Some(era.as_str()));
    }
    for goal in Goal::ALL {
        let wire = serde_json::to_value(goal).unwrap();
        assert_eq!(wire.as_str(), Some(goal.as_str()));
    }
}

#[test]
fn valid_brief_passes() {
    assert!(lumen().validate().is_ok());
}

#[test]
fn nome_too_short_fails() {
    let mut brief = lumen();
    brief.nome = "L".to_string();
    assert_eq!(
        brief.validate(),
        Err(ValidationError::Length {
            field: "nome",
            min: 2,
            max: 100,
            actual: 1
        })
    );
}

#[test]
fn publico_too_long_fails() {
    let mut brief = lumen();
    brief.publico = "x".repeat(201);
    assert!(matches!(
        brief.validate(),
        Err(ValidationError::Length {
            field: "publico",
            ..
        })
    ));
}

#[test]
fn length_counts_characters_not_bytes() {
    let mut brief = lumen();
    // 100 two-byte characters is still within bounds.
    brief.segmento = "é".repeat(100);
    assert!(brief.validate().is_ok());
}

#[test]
fn fewer_than_three_keywords_fails() {
    let mut brief = lumen();
    brief.palavras = "quente, ,acolhedor".to_string();
    assert_eq!(
        brief.validate(),
        Err(ValidationError::NotEnoughKeywords { found: 2 })
    );
}

#[test]
fn keywords_takes_first_three_trimmed() {
    let mut brief = lumen();
    brief.palavras = " quente , acolhedor,simples, extra".to_string();
    assert_eq!(brief.keywords(), ["quente", "acolhedor", "simples"]);
}

#[test]
fn keywords_pads_missing_entries() {
    let mut brief = lumen();
    brief.palavras = "quente".to_string();
    assert_eq!(brief.keywords(), ["quente", "", ""]);
}

#[test]
fn into_validated_trims_fields() {
    let mut brief = lumen();
    brief.nome = "  Lumen  ".to_string();
    brief.inspiracao = Some("   ".to_string());
    brief.elementos = Some(" folhas ".to_string());
    let brief = brief.into_validated().expect("valid after trim");
    assert_eq!(brief.nome, "Lumen");
    assert!(brief.inspiracao.is_none());
    assert_eq!(brief.elementos.as_deref(), Some("folhas"));
}
