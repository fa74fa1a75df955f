//! Erreurs du noyau.
//!
//! La tokenisation ne peut pas échouer : toutes les erreurs viennent de la
//! résolution des parenthèses ou de la réduction par priorités.

use thiserror::Error;

/// Échec d’évaluation d’une ligne.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ErreurCalcul {
    /// Expression mal formée (parenthèses, alternance opérande/opérateur, littéral).
    #[error("expression mal formée : {0}")]
    Malformee(#[from] Malformation),

    /// Une réduction a demandé un opérande absent.
    #[error("opérande manquant pendant la réduction ({0})")]
    SousCapacite(&'static str),
}

/// Détail d’une expression mal formée.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Malformation {
    #[error("parenthèse fermante sans ouvrante")]
    FermanteOrpheline,

    #[error("parenthèse ouvrante non fermée")]
    OuvranteNonFermee,

    #[error("opérande attendu en fin d’expression")]
    OperandeAttendu,

    #[error("opérande inattendu : '{0}' (opérateur attendu)")]
    OperandeInattendu(String),

    #[error("littéral numérique invalide : '{0}'")]
    LitteralInvalide(String),

    #[error("opérateur préfixe inconnu : '{0}'")]
    PrefixeInconnu(String),

    #[error("opérateur binaire inconnu : '{0}'")]
    BinaireInconnu(String),
}

pub type ResultatCalcul<T> = Result<T, ErreurCalcul>;
