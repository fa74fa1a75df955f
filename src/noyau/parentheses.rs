// src/noyau/parentheses.rs
//
// Résolution des parenthèses par pile explicite (pas de récursion).
//
// Chaque ')' ferme le groupe le plus interne : les jetons entre lui et le '('
// correspondant sont réduits, puis le nombre obtenu remplace le groupe.
// Un résultat négatif est réinjecté comme "négation + valeur absolue" :
// la grammaire n’a pas de littéral négatif.

use super::erreur::{Malformation, ResultatCalcul};
use super::jetons::{format_tokens, Jeton};
use super::operateurs::Operateur;
use super::reduction::reduire;

/// Un groupe réduit (pour la démarche).
#[derive(Clone, Debug, PartialEq)]
pub struct Groupe {
    pub jetons: String,
    pub valeur: f64,
}

fn empiler_resultat(pile: &mut Vec<Jeton>, r: f64) {
    if r < 0.0 {
        pile.push(Jeton::Op(Operateur::Negation));
        pile.push(Jeton::Nombre(-r));
    } else {
        // NaN compris : ni négatif, il reste un littéral et se propage.
        pile.push(Jeton::Nombre(r));
    }
}

/// Consomme toute la suite (parenthèses synthétiques comprises) et rend le résultat.
///
/// `groupes` reçoit chaque groupe réduit, du plus interne au plus externe.
pub fn resoudre(jetons: Vec<Jeton>, groupes: &mut Vec<Groupe>) -> ResultatCalcul<f64> {
    let mut pile: Vec<Jeton> = Vec::with_capacity(jetons.len());

    for jeton in jetons {
        if jeton != Jeton::RPar {
            pile.push(jeton);
            continue;
        }

        // dépile jusqu’au '(' correspondant; le groupe reste dans l’ordre du texte
        let ouvrante = pile
            .iter()
            .rposition(|j| *j == Jeton::LPar)
            .ok_or(Malformation::FermanteOrpheline)?;
        let groupe = pile.split_off(ouvrante + 1);
        pile.pop();

        let r = reduire(&groupe)?;
        log::debug!("groupe ( {} ) = {r}", format_tokens(&groupe));
        groupes.push(Groupe {
            jetons: format_tokens(&groupe),
            valeur: r,
        });

        empiler_resultat(&mut pile, r);
    }

    if pile.contains(&Jeton::LPar) {
        return Err(Malformation::OuvranteNonFermee.into());
    }

    reduire(&pile)
}
