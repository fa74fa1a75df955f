// src/noyau/jetons.rs
//
// Normalisation du texte + jetons typés.
//
// La normalisation ne peut pas échouer : elle ne fait qu’insérer des espaces
// puis découper. La validité des littéraux est vérifiée en typant chaque jeton.

use super::erreur::{Malformation, ResultatCalcul};
use super::operateurs::Operateur;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),

    LPar,
    RPar,

    // Symbole tel qu’écrit ("-", "sin", "d", ...).
    // NOTE: son identité dépend de la position, elle est résolue par la réduction.
    Symbole(String),

    // Opérateur déjà résolu (négation réinjectée devant un résultat négatif).
    Op(Operateur),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Classe {
    Autre,
    Lettre,
    Chiffre,
}

fn classe_de(c: char) -> Classe {
    if c.is_ascii_digit() {
        Classe::Chiffre
    } else if c.is_ascii_alphabetic() {
        Classe::Lettre
    } else {
        Classe::Autre
    }
}

/// Étape 1 : espace à chaque frontière lettre/chiffre ("sin90" -> "sin 90", "90d" -> "90 d").
fn separer_lettres_chiffres(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    let mut derniere = Classe::Autre;

    for c in s.chars() {
        let classe = classe_de(c);
        if matches!(
            (derniere, classe),
            (Classe::Lettre, Classe::Chiffre) | (Classe::Chiffre, Classe::Lettre)
        ) {
            out.push(' ');
        }
        out.push(c);
        derniere = classe;
    }
    out
}

/// Étape 2 : isole tout caractère qui n’est ni alphanumérique ni '.'.
fn separer_symboles(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        if !c.is_ascii_alphanumeric() && c != '.' {
            out.push(' ');
            out.push(c);
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Découpe une ligne en jetons texte, entourée de "( … )".
///
/// Exemple:
///   "sin90d*(1-2)" -> ["(", "sin", "90", "d", "*", "(", "1", "-", "2", ")", ")"]
pub fn normaliser(ligne: &str) -> Vec<String> {
    let s = separer_symboles(&separer_lettres_chiffres(ligne));
    let s = format!("( {s} )");
    s.split_whitespace().map(str::to_string).collect()
}

/// Littéral numérique : non vide, chiffres et '.' seulement, au plus un '.'.
pub fn est_litteral(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(|c| c.is_ascii_digit() || c == '.')
        && s.matches('.').count() <= 1
}

impl Jeton {
    /// Type un jeton texte. Seul un littéral numérique invalide échoue ("1.2.3", ".").
    pub fn depuis_texte(s: &str) -> ResultatCalcul<Self> {
        match s {
            "(" => return Ok(Jeton::LPar),
            ")" => return Ok(Jeton::RPar),
            _ => {}
        }

        let que_chiffres_et_points = s.chars().all(|c| c.is_ascii_digit() || c == '.');
        if !que_chiffres_et_points {
            return Ok(Jeton::Symbole(s.to_string()));
        }

        if !est_litteral(s) {
            return Err(Malformation::LitteralInvalide(s.to_string()).into());
        }
        s.parse::<f64>()
            .map(Jeton::Nombre)
            .map_err(|_| Malformation::LitteralInvalide(s.to_string()).into())
    }
}

/// Normalise puis type toute la ligne.
pub fn tokenize(ligne: &str) -> ResultatCalcul<Vec<Jeton>> {
    normaliser(ligne)
        .iter()
        .map(|s| Jeton::depuis_texte(s))
        .collect()
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Jeton::Nombre(x) => format!("{x}"),
            Jeton::LPar => "(".to_string(),
            Jeton::RPar => ")".to_string(),
            Jeton::Symbole(s) => s.clone(),
            Jeton::Op(op) => op.symbole().to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
