// All LLM prompt constants for job-description enrichment.

/// System prompt describing the required output structure and tone.
pub const ENRICH_SYSTEM: &str = "Tu es un expert en recrutement et en rédaction de fiches de poste. \
    Tu reformules des descriptions de poste brutes en fiches claires, structurées et attractives. \
    Structure OBLIGATOIRE de la réponse, en Markdown : \
    ## Contexte, ## Missions, ## Profil recherché, ## Compétences techniques, ## Conditions. \
    Sous chaque titre, utilise des puces courtes (une idée par puce). \
    Ton professionnel, précis et inclusif ; pas de superlatifs creux ni de jargon marketing. \
    N'invente aucune information absente du texte fourni. \
    Réponds uniquement avec la fiche enrichie, sans phrase d'introduction ni de conclusion.";

/// User prompt template. Replace `{job_description}` before sending.
pub const ENRICH_PROMPT_TEMPLATE: &str = r#"Voici une description de poste à enrichir et à restructurer :

"""
{job_description}
"""

Consignes :
- Reprends les sections ## Contexte, ## Missions, ## Profil recherché, ## Compétences techniques, ## Conditions, dans cet ordre.
- Une section sans information dans le texte source est omise.
- Sous chaque section, des puces "- " courtes et factuelles.
- Conserve le vocabulaire technique d'origine (langages, outils, certifications).
- Ne commence pas ta réponse par une phrase du type "Voici le texte enrichi"."#;

/// Boilerplate openings the model sometimes prepends despite the instructions.
/// Matched case-insensitively, in order; only the first match is stripped.
pub const KNOWN_PREFIXES: [&str; 7] = [
    "Voici le texte enrichi :",
    "Voici le texte enrichi:",
    "Voici la description enrichie :",
    "Voici la description enrichie:",
    "Voici une version enrichie :",
    "Texte enrichi :",
    "Description enrichie :",
];

pub fn build_user_prompt(job_description: &str) -> String {
    ENRICH_PROMPT_TEMPLATE.replace("{job_description}", job_description)
}
