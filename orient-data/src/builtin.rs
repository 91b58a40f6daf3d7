//! Example programs shipped with the engine.
#![forbid(unsafe_code)]

use orient_core::{Catalog, CatalogError, Program};

/// Subjects the interactive interview asks about, in prompt order.
pub const SUBJECTS: [&str; 6] = ["maths", "physique", "svt", "francais", "philo", "langues"];

/// The example programs in catalog order.
#[must_use]
pub fn builtin_programs() -> Vec<Program> {
    vec![
        Program::new(
            "ing_info",
            "Cycle Prépa + Ingénieur Informatique",
            "Informatique",
        )
        .with_min_grade("maths", 14.0)
        .with_min_grade("physique", 12.0)
        .with_min_grade("francais", 10.0)
        .with_tags([
            "informatique",
            "programmation",
            "algorithmes",
            "intelligence artificielle",
        ]),
        Program::new("medecine", "Médecine", "Santé")
            .with_min_grade("maths", 12.0)
            .with_min_grade("physique", 13.0)
            .with_min_grade("svt", 15.0)
            .with_min_grade("francais", 12.0)
            .with_tags(["santé", "biologie", "contact humain", "hôpital"]),
        Program::new("eco_gestion", "Économie & Gestion", "Business")
            .with_min_grade("maths", 11.0)
            .with_min_grade("francais", 12.0)
            .with_min_grade("philo", 10.0)
            .with_tags(["économie", "management", "entrepreneuriat", "finance"]),
        Program::new("lettres", "Lettres & Sciences Humaines", "Lettres")
            .with_min_grade("francais", 14.0)
            .with_min_grade("philo", 13.0)
            .with_min_grade("langues", 14.0)
            .with_tags(["littérature", "philosophie", "langues", "écriture"]),
    ]
}

/// The example programs as a validated catalog.
///
/// # Errors
/// Propagates [`CatalogError`]; the shipped identifiers are unique, so this
/// only fails if the table above is edited carelessly.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(builtin_programs())
}
