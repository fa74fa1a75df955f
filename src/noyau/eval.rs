//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> jetons typés -> parenthèses (pile) -> réduction par niveaux
//!
//! Aucun état partagé : deux appels sur la même ligne donnent le même résultat.

use super::erreur::ResultatCalcul;
use super::format::formater_resultat;
use super::jetons::{format_tokens, tokenize};
use super::parentheses::{resoudre, Groupe};

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub groupes: Vec<Groupe>,
    pub resultat: String,
}

/// API publique : évalue une ligne en f64.
pub fn evaluer(ligne: &str) -> ResultatCalcul<f64> {
    let mut groupes = Vec::new();
    resoudre(tokenize(ligne)?, &mut groupes)
}

/// Même évaluation, avec la démarche (jetons normalisés + chaque groupe réduit).
pub fn evaluer_avec_demarche(ligne: &str) -> ResultatCalcul<(f64, DemarcheNoyau)> {
    let jetons = tokenize(ligne)?;
    let jetons_txt = format_tokens(&jetons);

    let mut groupes = Vec::new();
    let r = resoudre(jetons, &mut groupes)?;

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        groupes,
        resultat: formater_resultat(r),
    };
    Ok((r, d))
}
