use super::*;
use crate::format::markdown::render_markdown_html;

const TITLE_PRIMARY: &str = r#"<span class="diagnosis-section-title">Primary Diagnosis:</span>"#;
const TITLE_SEVERITY: &str = r#"<span class="diagnosis-section-title">Severity Level:</span>"#;

fn warning_banner() -> String {
    format!(r#"<div class="severe-warning">⚠️ {SEVERE_WARNING}</div>"#)
}

// =============================================================
// Primary diagnosis
// =============================================================

#[test]
fn primary_diagnosis_with_confidence() {
    let out = postprocess("<p><strong>Primary Diagnosis:</strong> Influenza (85%)</p>");
    assert_eq!(
        out,
        format!(
            r#"<p>{TITLE_PRIMARY} <span class="diagnosis-name">Influenza</span> <span class="diagnosis-probability">85% Confidence</span></p>"#
        )
    );
}

#[test]
fn primary_diagnosis_plain_without_confidence() {
    let out = postprocess("<p>Primary Diagnosis: Common Cold</p>");
    assert_eq!(out, format!(r#"<p>{TITLE_PRIMARY} <span class="diagnosis-name">Common Cold</span></p>"#));
}

#[test]
fn primary_diagnosis_markdown_bold_with_colon_inside_or_outside() {
    let expected = format!(r#"{TITLE_PRIMARY} <span class="diagnosis-name">Migraine</span>"#);
    assert_eq!(postprocess("**Primary Diagnosis:** Migraine"), expected);
    assert_eq!(postprocess("**Primary Diagnosis**: Migraine"), expected);
}

#[test]
fn primary_diagnosis_is_case_insensitive() {
    let out = postprocess("primary diagnosis: flu");
    assert_eq!(out, format!(r#"{TITLE_PRIMARY} <span class="diagnosis-name">flu</span>"#));
}

#[test]
fn bare_primary_diagnosis_header_is_left_alone() {
    let input = "<p><strong>Primary Diagnosis:</strong></p>";
    assert_eq!(postprocess(input), input);
}

#[test]
fn diagnosis_name_is_not_restyled_by_label_stage() {
    let out = postprocess("Primary Diagnosis: Treatment: unclear");
    assert!(out.contains(r#"<span class="diagnosis-name">Treatment: unclear</span>"#));
    assert!(!out.contains("General Treatment"));
}

// =============================================================
// Severity
// =============================================================

#[test]
fn severe_maps_to_risk_with_banner_and_absorbs_boilerplate() {
    let input = format!("<p><strong>Severity Level:</strong> Red Severe. {SEVERE_WARNING}</p>");
    let out = postprocess(&input);
    assert_eq!(
        out,
        format!(
            r#"<p>{TITLE_SEVERITY} <span class="severity-badge severity-risk">Severe</span>{}</p>"#,
            warning_banner()
        )
    );
    assert_eq!(out.matches("This is a severe condition").count(), 1);
}

#[test]
fn mild_maps_to_mild_without_banner() {
    let out = postprocess("<p>Severity Level: Green Mild</p>");
    assert_eq!(out, format!(r#"<p>{TITLE_SEVERITY} <span class="severity-badge severity-mild">Mild</span></p>"#));
    assert!(!out.contains("severe-warning"));
}

#[test]
fn risk_without_boilerplate_still_gets_banner() {
    let out = postprocess("Severity Level: Risk");
    assert!(out.contains(r#"<span class="severity-badge severity-risk">Risk</span>"#));
    assert!(out.ends_with(&warning_banner()));
}

#[test]
fn non_risk_level_keeps_following_sentence() {
    let out = postprocess(&format!("Severity Level: Moderate. {SEVERE_WARNING}"));
    assert_eq!(
        out,
        format!(r#"{TITLE_SEVERITY} <span class="severity-badge severity-moderate">Moderate</span>. {SEVERE_WARNING}"#)
    );
}

#[test]
fn severity_keeps_source_casing_in_badge() {
    let out = postprocess("SEVERITY LEVEL: yellow SEVERE");
    assert!(out.contains(r#"<span class="severity-badge severity-risk">SEVERE</span>"#));
}

#[test]
fn unknown_severity_word_is_left_alone() {
    let input = "Severity Level: Unknown";
    assert_eq!(postprocess(input), input);
}

#[test]
fn severity_class_mapping() {
    assert_eq!(SeverityClass::from_level("Severe"), Some(SeverityClass::Risk));
    assert_eq!(SeverityClass::from_level("risk"), Some(SeverityClass::Risk));
    assert_eq!(SeverityClass::from_level("Mild").map(SeverityClass::css_class), Some("severity-mild"));
    assert_eq!(SeverityClass::from_level("Severe").map(SeverityClass::css_class), Some("severity-risk"));
    assert!(SeverityClass::Risk.needs_warning());
    assert!(!SeverityClass::Moderate.needs_warning());
    assert_eq!(SeverityClass::from_level("extreme"), None);
}

// =============================================================
// Section labels
// =============================================================

#[test]
fn medication_label_becomes_recommended_medication() {
    let out = postprocess("<p><strong>Medication:</strong> Paracetamol</p>");
    assert_eq!(out, r#"<p><span class="diagnosis-section-title">Recommended Medication:</span> Paracetamol</p>"#);
}

#[test]
fn each_label_maps_to_its_display_form() {
    for (label, display) in SECTION_LABELS {
        let out = postprocess(&format!("{label}: text"));
        assert_eq!(out, format!(r#"<span class="diagnosis-section-title">{display}:</span> text"#), "label {label}");
    }
}

#[test]
fn existing_qualifier_is_not_doubled() {
    assert_eq!(
        postprocess("Recommended Medication: x"),
        r#"<span class="diagnosis-section-title">Recommended Medication:</span> x"#
    );
    assert_eq!(
        postprocess("<strong>General Treatment:</strong> rest"),
        r#"<span class="diagnosis-section-title">General Treatment:</span> rest"#
    );
}

#[test]
fn labels_need_word_boundary_and_colon() {
    assert_eq!(postprocess("Pretreatment: none"), "Pretreatment: none");
    assert_eq!(postprocess("Treatment plan follows"), "Treatment plan follows");
}

// =============================================================
// Pipeline
// =============================================================

#[test]
fn standard_pipeline_stage_order() {
    let pipeline = Postprocessor::standard().expect("pipeline");
    let names = pipeline.stage_names();
    assert_eq!(names.len(), 2 + SECTION_LABELS.len());
    assert_eq!(names[0], "primary-diagnosis");
    assert_eq!(names[1], "severity");
    assert!(names[2..].iter().all(|n| *n == "section-label"));
}

#[test]
fn empty_pipeline_is_identity() {
    let pipeline = Postprocessor::with_stages(Vec::new()).expect("pipeline");
    assert_eq!(pipeline.apply("<p>Medication: x</p>"), "<p>Medication: x</p>");
}

#[test]
fn postprocess_is_idempotent_on_full_reply() {
    let reply = "**Primary Diagnosis:** Influenza (85%)\n\
                 **Severity Level:** Red Severe. This is a severe condition and should be treated/referred rather than managed at home.\n\n\
                 **Other Probable Diagnoses:** Common cold\n\n\
                 **Medication:** Rest and fluids\n\n\
                 **Treatment:** Sleep\n\n\
                 **Disclaimer:** Consult a doctor.";
    let once = postprocess(&render_markdown_html(reply));
    let twice = postprocess(&once);
    assert_eq!(once, twice);

    assert!(once.contains(r#"<span class="diagnosis-name">Influenza</span>"#));
    assert!(once.contains("85% Confidence"));
    assert!(once.contains("severity-risk"));
    assert!(once.contains("Recommended Medication:"));
    assert!(once.contains("General Treatment:"));
    assert!(once.contains("Medical Disclaimer:"));
    assert_eq!(once.matches("severe-warning").count(), 1);
    assert!(!once.contains("Recommended Recommended"));
    assert!(once.contains("85% Confidence</span><br />"));
}

#[test]
fn text_without_labels_is_unchanged() {
    let html = "<p>Drink water and rest.</p>\n";
    assert_eq!(postprocess(html), html);
}
