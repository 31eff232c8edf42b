//! Raw → normalized profile reshaping, with the sector and seniority heuristics.

use crate::models::profile::{
    CandidateProfile, Competences, ContactInfo, Experience, RawExperience, RawProfile,
};

/// Sectors at or above this many characters are discarded.
const MAX_SECTOR_CHARS: usize = 50;
const YEARS_PER_EXPERIENCE: f64 = 1.5;

/// Concatenates the technical skill categories in fixed order. Spoken languages are excluded.
pub fn flatten_skills(competences: &Competences) -> Vec<String> {
    [
        &competences.langages,
        &competences.outils,
        &competences.ia_ml,
        &competences.thematiques,
        &competences.bases_de_donnees,
        &competences.methodologies,
    ]
    .into_iter()
    .flatten()
    .cloned()
    .collect()
}

/// Leading segment of each experience title (before the first `–`, `-` or `,`),
/// deduplicated in order of first appearance.
pub fn extract_sectors(experiences: &[RawExperience]) -> Vec<String> {
    let mut sectors: Vec<String> = Vec::new();
    for experience in experiences {
        let Some(sector) = sector_of(&experience.titre) else {
            continue;
        };
        if !sectors.iter().any(|s| s == sector) {
            sectors.push(sector.to_string());
        }
    }
    sectors
}

fn sector_of(title: &str) -> Option<&str> {
    let head = title.split(['–', '-', ',']).next().unwrap_or_default().trim();
    let valid =
        !head.is_empty() && head.chars().count() < MAX_SECTOR_CHARS && !head.contains('(');
    valid.then_some(head)
}

/// `round(count × 1.5)`, never below 1.
pub fn estimate_years(experience_count: usize) -> u32 {
    let years = (experience_count as f64 * YEARS_PER_EXPERIENCE).round() as u32;
    years.max(1)
}

pub fn normalize(raw: RawProfile) -> CandidateProfile {
    let skills = flatten_skills(&raw.competences);
    let sectors = extract_sectors(&raw.experiences_professionnelles);
    let years_experience = estimate_years(raw.experiences_professionnelles.len());

    CandidateProfile {
        name: raw.nom,
        title: raw.titre,
        skills,
        years_experience,
        sectors,
        contact: ContactInfo {
            email: raw.email,
            phone: raw.telephone,
            location: raw.localisation,
            linkedin: raw.linkedin,
        },
        description: raw.profil.description,
        formation: raw.profil.formation,
        experiences: raw
            .experiences_professionnelles
            .into_iter()
            .map(|e| Experience {
                title: e.titre,
                description: e.description,
            })
            .collect(),
        spoken_languages: raw.competences.langues,
        certifications: raw.certifications_formations,
    }
}
