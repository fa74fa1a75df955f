// src/noyau/reduction.rs
//
// Réduction par niveaux de priorité d’une suite SANS parenthèses.
//
// Passe 1 (classement) : on parcourt les jetons dans l’ordre du texte avec un
// état explicite `Attente`. Un symbole à une position "opérande" est préfixe,
// à une position "opérateur" il est postfixe ou binaire.
//
// Passe 2 (niveaux) : pour chaque niveau de NIVEAUX (du plus fort au plus
// faible), on consomme les opérateurs du niveau et on reporte les autres.
//
// Files (VecDeque) : l’AVANT est toujours l’opérande le plus à gauche encore
// non consommé par le niveau courant. Les résultats sont remis à l’avant.

use std::collections::VecDeque;

use super::erreur::{ErreurCalcul, Malformation, ResultatCalcul};
use super::jetons::Jeton;
use super::operateurs::{Fonction, Forme, Operateur, NIVEAUX};

/// Ce que le classement attend à la position courante.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Attente {
    OperandeOuPrefixe,
    Operateur,
}

/// Sortie de la passe 1, dans l’ordre du texte.
#[derive(Debug, Default)]
struct Classement {
    operandes: VecDeque<f64>,
    operateurs: VecDeque<Operateur>,
}

fn classer(jetons: &[Jeton]) -> ResultatCalcul<Classement> {
    let mut c = Classement::default();
    let mut attente = Attente::OperandeOuPrefixe;

    for jeton in jetons {
        attente = match (attente, jeton) {
            (Attente::OperandeOuPrefixe, Jeton::Nombre(x)) => {
                c.operandes.push_back(*x);
                Attente::Operateur
            }
            (Attente::OperandeOuPrefixe, Jeton::Symbole(s)) => {
                let op = Operateur::prefixe(s)
                    .ok_or_else(|| Malformation::PrefixeInconnu(s.clone()))?;
                c.operateurs.push_back(op);
                Attente::OperandeOuPrefixe
            }
            (Attente::OperandeOuPrefixe, Jeton::Op(op)) if op.forme() == Forme::Prefixe => {
                c.operateurs.push_back(*op);
                Attente::OperandeOuPrefixe
            }
            (Attente::Operateur, Jeton::Symbole(s)) => {
                if let Some(op) = Operateur::postfixe(s) {
                    c.operateurs.push_back(op);
                    Attente::Operateur
                } else {
                    let op = Operateur::binaire(s)
                        .ok_or_else(|| Malformation::BinaireInconnu(s.clone()))?;
                    c.operateurs.push_back(op);
                    Attente::OperandeOuPrefixe
                }
            }
            (Attente::Operateur, Jeton::Op(op)) if op.forme() != Forme::Prefixe => {
                c.operateurs.push_back(*op);
                if op.forme() == Forme::Binaire {
                    Attente::OperandeOuPrefixe
                } else {
                    Attente::Operateur
                }
            }
            (Attente::Operateur, Jeton::Nombre(x)) => {
                return Err(Malformation::OperandeInattendu(format!("{x}")).into());
            }
            (Attente::OperandeOuPrefixe, Jeton::Op(op)) => {
                return Err(Malformation::PrefixeInconnu(op.symbole().to_string()).into());
            }
            (Attente::Operateur, Jeton::Op(op)) => {
                return Err(Malformation::OperandeInattendu(op.symbole().to_string()).into());
            }
            // La résolution des parenthèses ne transmet jamais de parenthèse.
            (_, Jeton::LPar) => return Err(Malformation::OuvranteNonFermee.into()),
            (_, Jeton::RPar) => return Err(Malformation::FermanteOrpheline.into()),
        };
        log::trace!("classement: {jeton:?} -> attente {attente:?}");
    }

    if attente == Attente::OperandeOuPrefixe {
        return Err(Malformation::OperandeAttendu.into());
    }
    Ok(c)
}

fn retirer_avant(operandes: &mut VecDeque<f64>, quoi: &'static str) -> ResultatCalcul<f64> {
    operandes
        .pop_front()
        .ok_or(ErreurCalcul::SousCapacite(quoi))
}

/// Une passe de la réduction : consomme les opérateurs du niveau `indice`, reporte les autres.
fn reduire_niveau(c: Classement, indice: usize) -> ResultatCalcul<Classement> {
    let Classement {
        mut operandes,
        operateurs,
    } = c;
    let mut reste = Classement::default();

    for op in operateurs {
        if op.niveau() == indice {
            let r = match op.fonction() {
                Fonction::Unaire(f) => f(retirer_avant(&mut operandes, "opérande unaire")?),
                Fonction::Binaire(f) => {
                    let a = retirer_avant(&mut operandes, "opérande gauche")?;
                    let b = retirer_avant(&mut operandes, "opérande droit")?;
                    f(a, b)
                }
            };
            log::trace!("réduction {} -> {r}", op.symbole());
            operandes.push_front(r);
        } else {
            // Un préfixe s’applique à l’opérande qui le SUIT : il ne déplace rien.
            if op.forme() != Forme::Prefixe {
                let a = retirer_avant(&mut operandes, "opérande reporté")?;
                reste.operandes.push_back(a);
            }
            reste.operateurs.push_back(op);
        }
    }

    let dernier = retirer_avant(&mut operandes, "opérande final")?;
    reste.operandes.push_back(dernier);
    Ok(reste)
}

/// Réduit une suite plate (sans parenthèses, dans l’ordre du texte) à un nombre.
pub fn reduire(jetons: &[Jeton]) -> ResultatCalcul<f64> {
    let mut c = classer(jetons)?;

    for indice in 0..NIVEAUX.len() {
        if c.operateurs.is_empty() {
            break;
        }
        c = reduire_niveau(c, indice)?;
    }

    retirer_avant(&mut c.operandes, "résultat")
}
