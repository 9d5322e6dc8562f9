//! Diagnosis label styling for rendered AI message HTML.
//!
//! DESIGN
//! ======
//! A [`Postprocessor`] is an ordered list of independent [`RewriteStage`]s.
//! Each stage sees only the text *outside* markup that a stage already
//! emitted (see [`STYLED_MARKUP`]), so running the pipeline over its own
//! output is a no-op and later stages never rewrite earlier results. History
//! is re-rendered from raw text on load, but the pipeline does not rely on
//! that.
//!
//! All stages match case-insensitively and accept the label plain, wrapped
//! in `**`, or wrapped in `<strong>`.

#[cfg(test)]
#[path = "postprocess_test.rs"]
mod postprocess_test;

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

pub const SEVERE_WARNING: &str = "This is a severe condition and should be treated/referred rather than managed at home.";

/// Markup emitted by the stages. Content never contains `<`.
const STYLED_MARKUP: &str = r#"<span class="(?:diagnosis-section-title|diagnosis-name|diagnosis-probability|severity-badge[^"]*)">[^<]*</span>|<div class="severe-warning">[^<]*</div>"#;

const BOLD_OPEN: &str = r"(?:\*\*|<strong>)?";
const BOLD_CLOSE: &str = r"(?:\*\*|</strong>)?";

/// One text-transform step of the pipeline.
pub trait RewriteStage: Send + Sync {
    fn name(&self) -> &'static str;

    /// Rewrite a run of unstyled HTML text.
    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str>;
}

fn section_title(label: &str) -> String {
    format!(r#"<span class="diagnosis-section-title">{label}</span>"#)
}

// =============================================================
// Primary diagnosis
// =============================================================

/// `[bold]Primary Diagnosis[bold][:][bold] <name> [(NN%)]`
///
/// becomes
///
/// `<title>Primary Diagnosis:</title> <name-span>name</name-span>[ <probability>NN% Confidence</probability>]`
///
/// The name runs up to the first `<`, `(` or newline and must not start with
/// whitespace or `:`, so a bare header with nothing after it is left alone.
pub struct PrimaryDiagnosisStage {
    pattern: Regex,
}

impl PrimaryDiagnosisStage {
    /// # Errors
    ///
    /// Returns an error if the stage pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"(?i){BOLD_OPEN}Primary Diagnosis{BOLD_CLOSE}:?{BOLD_CLOSE}\s*([^<(\n:\s][^<(\n]*)(?:\s*\((\d+%)\))?"
        ))?;
        Ok(Self { pattern })
    }
}

impl RewriteStage for PrimaryDiagnosisStage {
    fn name(&self) -> &'static str {
        "primary-diagnosis"
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, |caps: &Captures<'_>| {
            let name = caps[1].trim();
            let probability = caps
                .get(2)
                .map(|p| format!(r#" <span class="diagnosis-probability">{} Confidence</span>"#, p.as_str()))
                .unwrap_or_default();
            format!(
                r#"{} <span class="diagnosis-name">{name}</span>{probability}"#,
                section_title("Primary Diagnosis:")
            )
        })
    }
}

// =============================================================
// Severity
// =============================================================

/// Display class of a severity badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityClass {
    Mild,
    Moderate,
    Risk,
}

impl SeverityClass {
    /// Map a severity word; `Severe` and `Risk` both display as `Risk`.
    pub fn from_level(level: &str) -> Option<Self> {
        match level.to_ascii_lowercase().as_str() {
            "mild" => Some(Self::Mild),
            "moderate" => Some(Self::Moderate),
            "severe" | "risk" => Some(Self::Risk),
            _ => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Mild => "severity-mild",
            Self::Moderate => "severity-moderate",
            Self::Risk => "severity-risk",
        }
    }

    pub fn needs_warning(self) -> bool {
        self == Self::Risk
    }
}

/// `[bold]Severity Level[bold][:][bold] [Green|Yellow|Red] <Mild|Moderate|Severe|Risk>[. <warning sentence>]`
///
/// becomes
///
/// `<title>Severity Level:</title> <badge class="severity-badge severity-X">Level</badge>[<warning banner>]`
///
/// The colour word is dropped. For the risk class the boilerplate warning
/// sentence, if it follows, is absorbed into the banner; other classes leave
/// it in place.
pub struct SeverityStage {
    pattern: Regex,
}

impl SeverityStage {
    /// # Errors
    ///
    /// Returns an error if the stage pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        let warning = regex::escape(SEVERE_WARNING.trim_end_matches('.'));
        let pattern = Regex::new(&format!(
            r"(?i){BOLD_OPEN}Severity Level{BOLD_CLOSE}:?{BOLD_CLOSE}\s*(?:(?:Green|Yellow|Red)\s+)?(Mild|Moderate|Severe|Risk)\b(\.?\s*{warning}\.?)?"
        ))?;
        Ok(Self { pattern })
    }
}

impl RewriteStage for SeverityStage {
    fn name(&self) -> &'static str {
        "severity"
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, |caps: &Captures<'_>| {
            let level = &caps[1];
            let Some(class) = SeverityClass::from_level(level) else {
                return caps[0].to_owned();
            };
            let mut out = format!(
                r#"{} <span class="severity-badge {}">{level}</span>"#,
                section_title("Severity Level:"),
                class.css_class()
            );
            if class.needs_warning() {
                out.push_str(&format!(r#"<div class="severe-warning">⚠️ {SEVERE_WARNING}</div>"#));
            } else if let Some(tail) = caps.get(2) {
                out.push_str(tail.as_str());
            }
            out
        })
    }
}

// =============================================================
// Section labels
// =============================================================

/// Raw label and its display form.
pub const SECTION_LABELS: &[(&str, &str)] = &[
    ("Medication", "Recommended Medication"),
    ("Other Probable Diagnoses", "Other Probable Diagnoses"),
    ("Treatment", "General Treatment"),
    ("Case Description", "Case Description"),
    ("Disclaimer", "Medical Disclaimer"),
];

/// `[bold]<Label>:[bold]` at a word boundary becomes `<title>Display Label:</title>`.
///
/// When the display label adds a leading qualifier (`Recommended`,
/// `General`, `Medical`) and the source already carries it, the qualifier
/// is absorbed instead of doubled.
pub struct SectionLabelStage {
    pattern: Regex,
    qualifier: String,
    display: String,
}

impl SectionLabelStage {
    /// # Errors
    ///
    /// Returns an error if the stage pattern fails to compile.
    pub fn new(label: &str, display: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(r"(?i){BOLD_OPEN}\b{}:{BOLD_CLOSE}", regex::escape(label)))?;
        let qualifier = display
            .len()
            .checked_sub(label.len())
            .filter(|&cut| display.get(cut..).is_some_and(|tail| tail.eq_ignore_ascii_case(label)))
            .and_then(|cut| display.get(..cut))
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        Ok(Self { pattern, qualifier, display: format!("{display}:") })
    }

    /// Move `start` back over an existing qualifier (and any bold opener before it).
    fn absorb_qualifier(&self, text: &str, floor: usize, start: usize) -> usize {
        if self.qualifier.is_empty() {
            return start;
        }
        let before = &text[floor..start];
        if !before.to_ascii_lowercase().ends_with(&self.qualifier) {
            return start;
        }
        let start = start - self.qualifier.len();
        let before = &text[floor..start];
        ["**", "<strong>"]
            .iter()
            .find(|open| before.ends_with(*open))
            .map_or(start, |open| start - open.len())
    }
}

impl RewriteStage for SectionLabelStage {
    fn name(&self) -> &'static str {
        "section-label"
    }

    fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut matches = self.pattern.find_iter(text).peekable();
        if matches.peek().is_none() {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len() + 64);
        let mut last = 0;
        for m in matches {
            let start = self.absorb_qualifier(text, last, m.start());
            out.push_str(&text[last..start]);
            out.push_str(&section_title(&self.display));
            last = m.end();
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

// =============================================================
// Pipeline
// =============================================================

/// Ordered rewrite pipeline.
pub struct Postprocessor {
    styled: Regex,
    stages: Vec<Box<dyn RewriteStage>>,
}

impl Postprocessor {
    /// # Errors
    ///
    /// Returns an error if the styled-markup pattern fails to compile.
    pub fn with_stages(stages: Vec<Box<dyn RewriteStage>>) -> Result<Self, regex::Error> {
        Ok(Self { styled: Regex::new(STYLED_MARKUP)?, stages })
    }

    /// Primary diagnosis, then severity, then the section labels in
    /// [`SECTION_LABELS`] order.
    ///
    /// # Errors
    ///
    /// Returns an error if any stage pattern fails to compile.
    pub fn standard() -> Result<Self, regex::Error> {
        let mut stages: Vec<Box<dyn RewriteStage>> =
            vec![Box::new(PrimaryDiagnosisStage::new()?), Box::new(SeverityStage::new()?)];
        for (label, display) in SECTION_LABELS {
            stages.push(Box::new(SectionLabelStage::new(label, display)?));
        }
        Self::with_stages(stages)
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage in order over `html`.
    pub fn apply(&self, html: &str) -> String {
        let mut current = html.to_owned();
        for stage in &self.stages {
            current = self.rewrite_unstyled(&current, stage.as_ref());
        }
        current
    }

    /// Apply `stage` to the text between already-styled spans.
    fn rewrite_unstyled(&self, html: &str, stage: &dyn RewriteStage) -> String {
        let mut out = String::with_capacity(html.len());
        let mut last = 0;
        for styled in self.styled.find_iter(html) {
            out.push_str(&stage.rewrite(&html[last..styled.start()]));
            out.push_str(styled.as_str());
            last = styled.end();
        }
        out.push_str(&stage.rewrite(&html[last..]));
        out
    }
}

static STANDARD: LazyLock<Option<Postprocessor>> = LazyLock::new(|| match Postprocessor::standard() {
    Ok(p) => {
        log::debug!("diagnosis postprocessor stages: {:?}", p.stage_names());
        Some(p)
    }
    Err(e) => {
        log::error!("diagnosis postprocessor unavailable: {e}");
        None
    }
});

/// Style diagnosis labels in rendered AI HTML with the standard pipeline.
///
/// Returns the input unchanged if the pipeline could not be built.
pub fn postprocess(html: &str) -> String {
    match STANDARD.as_ref() {
        Some(pipeline) => pipeline.apply(html),
        None => html.to_owned(),
    }
}
