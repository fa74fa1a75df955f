// src/noyau/operateurs.rs
//
// Registre des opérateurs (lecture seule)
// ---------------------------------------
// - identité de chaque opérateur (binaire / préfixe / postfixe)
// - symbole -> identité, séparément pour chaque rôle
// - identité -> fonction f64
// - table des priorités (niveau 0 = lie le plus fort)
//
// Un même symbole peut avoir deux identités selon sa position :
// "-" vaut Soustraction en rôle binaire, Negation en rôle préfixe.

use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    // binaires
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Puissance,

    // préfixes
    Negation,
    Sinus,
    Cosinus,

    // postfixe
    DegresVersRadians,
}

/// Forme grammaticale d’un opérateur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Forme {
    Binaire,
    Prefixe,
    Postfixe,
}

/// Table des priorités, du plus fort au plus faible.
pub const NIVEAUX: [&[Operateur]; 4] = [
    &[Operateur::Puissance, Operateur::DegresVersRadians],
    &[Operateur::Negation, Operateur::Sinus, Operateur::Cosinus],
    &[Operateur::Multiplication, Operateur::Division],
    &[Operateur::Addition, Operateur::Soustraction],
];

impl Operateur {
    /// Rôle binaire : `+ - * / ^`.
    pub fn binaire(symbole: &str) -> Option<Self> {
        match symbole {
            "+" => Some(Self::Addition),
            "-" => Some(Self::Soustraction),
            "*" => Some(Self::Multiplication),
            "/" => Some(Self::Division),
            "^" => Some(Self::Puissance),
            _ => None,
        }
    }

    /// Rôle préfixe : `-`, `sin`, `cos`.
    pub fn prefixe(symbole: &str) -> Option<Self> {
        match symbole {
            "-" => Some(Self::Negation),
            "sin" => Some(Self::Sinus),
            "cos" => Some(Self::Cosinus),
            _ => None,
        }
    }

    /// Rôle postfixe : `d` (degrés -> radians).
    pub fn postfixe(symbole: &str) -> Option<Self> {
        match symbole {
            "d" => Some(Self::DegresVersRadians),
            _ => None,
        }
    }

    pub fn forme(self) -> Forme {
        use Operateur::*;
        match self {
            Addition | Soustraction | Multiplication | Division | Puissance => Forme::Binaire,
            Negation | Sinus | Cosinus => Forme::Prefixe,
            DegresVersRadians => Forme::Postfixe,
        }
    }

    /// Symbole canonique (affichage de la démarche).
    pub fn symbole(self) -> &'static str {
        use Operateur::*;
        match self {
            Addition => "+",
            Soustraction | Negation => "-",
            Multiplication => "*",
            Division => "/",
            Puissance => "^",
            Sinus => "sin",
            Cosinus => "cos",
            DegresVersRadians => "d",
        }
    }

    /// Indice du niveau de priorité (0 = lie le plus fort).
    pub fn niveau(self) -> usize {
        NIVEAUX
            .iter()
            .position(|niveau| niveau.contains(&self))
            .unwrap_or(NIVEAUX.len())
    }

    /// Fonction d’évaluation, dont l’arité suit la forme.
    ///
    /// Pas de garde sur la division par zéro : la sémantique IEEE s’applique.
    pub fn fonction(self) -> Fonction {
        use Operateur::*;
        match self {
            Addition => Fonction::Binaire(|a, b| a + b),
            Soustraction => Fonction::Binaire(|a, b| a - b),
            Multiplication => Fonction::Binaire(|a, b| a * b),
            Division => Fonction::Binaire(|a, b| a / b),
            Puissance => Fonction::Binaire(f64::powf),
            Negation => Fonction::Unaire(|a| -a),
            Sinus => Fonction::Unaire(f64::sin),
            Cosinus => Fonction::Unaire(f64::cos),
            DegresVersRadians => Fonction::Unaire(|a| a * PI / 180.0),
        }
    }
}

/// Fonction attachée à une identité. En binaire, le premier argument est l’opérande gauche.
#[derive(Clone, Copy, Debug)]
pub enum Fonction {
    Unaire(fn(f64) -> f64),
    Binaire(fn(f64, f64) -> f64),
}
