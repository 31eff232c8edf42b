use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// On-disk schema (one JSON file per candidate, French field names)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct RawProfile {
    pub nom: String,
    pub titre: String,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub localisation: Option<String>,
    pub linkedin: Option<String>,
    pub profil: RawProfileBlock,
    #[serde(default)]
    pub competences: Competences,
    #[serde(default)]
    pub experiences_professionnelles: Vec<RawExperience>,
    pub certifications_formations: Option<CertificationsBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProfileBlock {
    pub description: String,
    pub formation: Option<String>,
}

/// Skill categories. Every list is optional on disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Competences {
    #[serde(default)]
    pub langages: Vec<String>,
    #[serde(default)]
    pub outils: Vec<String>,
    #[serde(default)]
    pub ia_ml: Vec<String>,
    #[serde(default)]
    pub thematiques: Vec<String>,
    #[serde(default)]
    pub bases_de_donnees: Vec<String>,
    #[serde(default)]
    pub methodologies: Vec<String>,
    /// Spoken languages. Never part of the flattened skill list.
    #[serde(default)]
    pub langues: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawExperience {
    pub titre: String,
    pub description: String,
}

/// Passed through to the normalized record unchanged, same keys on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationsBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cours_en_ligne: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autres: Option<Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Normalized in-memory shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub name: String,
    pub title: String,
    /// languages, tools, AI/ML, themes, databases, methodologies, in that order, duplicates kept.
    pub skills: Vec<String>,
    /// Always ≥ 1.
    pub years_experience: u32,
    pub sectors: Vec<String>,
    pub contact: ContactInfo,
    pub description: String,
    pub formation: Option<String>,
    pub experiences: Vec<Experience>,
    pub spoken_languages: Vec<String>,
    pub certifications: Option<CertificationsBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experience {
    pub title: String,
    pub description: String,
}
