use chrono::NaiveDate;
use contract_gen::core::clauses::template_for;
use contract_gen::core::format::to_text;
use contract_gen::core::template::{Template, CITY_PLACEHOLDER, NAME_PLACEHOLDER, TAX_ID_PLACEHOLDER};
use contract_gen::{render_on, DocumentKind, Draft, Field};

fn signing_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
}

fn render_text(kind: DocumentKind, draft: &Draft) -> String {
    to_text(&render_on(kind, draft, signing_date()))
}

/// Every (field, placeholder) pair a template can emit.
fn field_placeholders(template: &Template) -> Vec<(Field, &'static str)> {
    let spans = template.preamble.iter().chain(
        template
            .clauses
            .iter()
            .flat_map(|clause| clause.paragraphs.iter().flat_map(|p| p.iter())),
    );
    let mut pairs: Vec<(Field, &'static str)> = spans
        .filter_map(|span| Some((span.field()?, span.placeholder()?)))
        .collect();
    pairs.push((Field::City, CITY_PLACEHOLDER));
    for signatory in template.signatories {
        pairs.push((signatory.name, NAME_PLACEHOLDER));
        if let Some(tax_id) = signatory.tax_id {
            pairs.push((tax_id, TAX_ID_PLACEHOLDER));
        }
    }
    pairs
}

#[test]
fn test_empty_draft_shows_every_placeholder_of_its_kind() {
    for kind in DocumentKind::ALL {
        let text = render_text(kind, &Draft::empty());
        for placeholder in template_for(kind).placeholders() {
            assert!(
                text.contains(placeholder),
                "{} document is missing placeholder {}",
                kind,
                placeholder
            );
        }
    }
}

#[test]
fn test_empty_draft_shows_no_placeholder_of_other_kinds() {
    for kind in DocumentKind::ALL {
        let own = template_for(kind).placeholders();
        let text = render_text(kind, &Draft::empty());

        for other in DocumentKind::ALL.into_iter().filter(|k| *k != kind) {
            for placeholder in template_for(other).placeholders() {
                if own.contains(&placeholder) || !placeholder.starts_with('[') {
                    continue;
                }
                assert!(
                    !text.contains(placeholder),
                    "{} document unexpectedly contains {}",
                    kind,
                    placeholder
                );
            }
        }
    }
}

#[test]
fn test_filled_field_replaces_its_placeholder() {
    for kind in DocumentKind::ALL {
        let template = template_for(kind);
        let pairs = field_placeholders(template);

        for field in template.referenced_fields() {
            let value = format!("valor-de-{}", field.key());
            let mut draft = Draft::empty();
            draft.set(field, value.as_str());
            let text = render_text(kind, &draft);

            assert!(text.contains(&value), "{}: {} not rendered", kind, field);

            for (_, placeholder) in pairs.iter().filter(|(f, _)| *f == field) {
                let shared = pairs.iter().any(|(f, p)| p == placeholder && *f != field);
                if !shared {
                    assert!(
                        !text.contains(*placeholder),
                        "{}: {} still shows {}",
                        kind,
                        field,
                        placeholder
                    );
                }
            }
        }
    }
}

#[test]
fn test_fully_filled_draft_has_no_brackets() {
    let mut draft = Draft::empty();
    for field in Field::ALL {
        draft.set(field, format!("v-{}", field.key()));
    }

    for kind in DocumentKind::ALL {
        let text = render_text(kind, &draft);
        assert!(!text.contains('['), "{} still has a placeholder:\n{}", kind, text);
    }
}

#[test]
fn test_values_are_rendered_verbatim() {
    let mut draft = Draft::default();
    draft.set(Field::ClientTaxId, "  000.000.000-00 (sem validação) ");
    draft.set(Field::Price, "mil e poucos");

    let text = render_text(DocumentKind::Service, &draft);
    assert!(text.contains("  000.000.000-00 (sem validação) "));
    assert!(text.contains("R$ mil e poucos (mil e poucos reais)"));
}

#[test]
fn test_rendering_is_deterministic_for_a_date() {
    let mut draft = Draft::default();
    draft.set(Field::ClientName, "Helena Prado");

    for kind in DocumentKind::ALL {
        assert_eq!(
            render_on(kind, &draft, signing_date()),
            render_on(kind, &draft, signing_date())
        );
    }
}

#[test]
fn test_scenario_service_with_empty_fields() {
    let text = render_text(DocumentKind::Service, &Draft::empty());

    assert!(text.contains("[NOME DO CONTRATANTE]"));
    assert!(text.contains("[NOME DO CONTRATADO]"));
    assert!(text.contains("antecedência mínima de 15 (quinze) dias"));
    assert!(text.contains("[CIDADE], 7 de março de 2025."));
    assert!(text.contains("TESTEMUNHA 1"));
    assert!(text.contains("TESTEMUNHA 2"));
}

#[test]
fn test_scenario_freelancer_price() {
    let mut draft = Draft::default();
    draft.set(Field::Price, "5.000,00");

    let text = render_text(DocumentKind::Freelancer, &draft);
    assert!(text.contains("R$ 5.000,00"));
    assert!(text.contains("não há qualquer vínculo empregatício entre as partes"));
    assert!(text.contains("até 2 (duas) rodadas de revisão"));
    assert!(!text.contains("TESTEMUNHA"));
}

#[test]
fn test_scenario_nda_defaults() {
    let text = render_text(DocumentKind::Nda, &Draft::default());

    assert!(text.contains("pelo período de 2 anos"));
    assert!(text.contains("multa no valor de R$ 10.000,00"));
    assert!(text.contains("Devam ser divulgadas por força de lei ou ordem judicial."));
}

#[test]
fn test_nda_cleared_term_falls_back_to_default() {
    let mut draft = Draft::default();
    draft.set(Field::ConfidentialityTerm, "");
    draft.set(Field::Penalty, "");

    let text = render_text(DocumentKind::Nda, &draft);
    assert!(text.contains("pelo período de 2 anos"));
    assert!(text.contains("R$ 10.000,00"));
}

#[test]
fn test_party_role_labels_per_kind() {
    let cases = [
        (DocumentKind::Service, ["CONTRATANTE", "CONTRATADO"]),
        (DocumentKind::Freelancer, ["CLIENTE", "FREELANCER"]),
        (DocumentKind::Nda, ["PARTE REVELADORA", "PARTE RECEPTORA"]),
    ];

    for (kind, roles) in cases {
        let text = render_text(kind, &Draft::default());
        for role in roles {
            assert!(
                text.contains(&format!("doravante denominado {}", role)),
                "{} preamble lacks {}",
                kind,
                role
            );
            assert!(text.contains(&format!("{}\n", role)), "{} signature lacks {}", kind, role);
        }
    }
}

#[test]
fn test_titles() {
    let titles: Vec<String> = DocumentKind::ALL
        .into_iter()
        .map(|kind| render_on(kind, &Draft::default(), signing_date()).title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "CONTRATO DE PRESTAÇÃO DE SERVIÇOS",
            "CONTRATO DE PRESTAÇÃO DE SERVIÇOS AUTÔNOMOS",
            "TERMO DE CONFIDENCIALIDADE E SIGILO (NDA)",
        ]
    );
}
