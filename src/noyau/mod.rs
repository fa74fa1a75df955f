//! Noyau flottant
//!
//! Organisation interne :
//! - operateurs.rs  : registre (symbole -> identité -> fonction) + priorités
//! - jetons.rs      : normalisation du texte + jetons typés
//! - parentheses.rs : groupes entre parenthèses (pile explicite)
//! - reduction.rs   : classement positionnel + réduction par niveaux
//! - format.rs      : affichage "%g" des résultats
//! - erreur.rs      : erreurs typées
//! - eval.rs        : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod parentheses;
pub mod reduction;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_robustesse;

// API publique minimale
pub use eval::{evaluer, evaluer_avec_demarche};
pub use format::formater_resultat;
