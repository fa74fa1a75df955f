//! Propriétés de l’évaluateur : cas concrets + comparaison avec un parseur de référence.
//!
//! Le parseur de référence est une descente récursive classique, indépendante
//! du noyau (pas de pile de jetons, pas de niveaux). Il ne couvre que les
//! littéraux entiers et les opérateurs binaires, puissance associative à gauche.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::erreur::{ErreurCalcul, Malformation};
use super::evaluer;

fn eval_ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, attendu: f64) {
    let r = eval_ok(expr);
    assert!(
        (r - attendu).abs() < 1e-12,
        "expr={expr:?} obtenu={r} attendu={attendu}"
    );
}

/* ------------------------ Cas concrets ------------------------ */

#[test]
fn binaires_simples() {
    assert_eq!(eval_ok("1+2"), 3.0);
    assert_eq!(eval_ok("2^3"), 8.0);
    assert_eq!(eval_ok("3-1"), 2.0);
    assert_eq!(eval_ok("8/2"), 4.0);
}

#[test]
fn priorites() {
    assert_eq!(eval_ok("2+3*4"), 14.0);
    assert_eq!(eval_ok("(2+3)*4"), 20.0);
    assert_eq!(eval_ok("2*3^2"), 18.0);
    assert_eq!(eval_ok("10-4-3"), 3.0);
    assert_eq!(eval_ok("16/4/2"), 2.0);
}

#[test]
fn puissance_associative_a_gauche() {
    assert_eq!(eval_ok("2^3^2"), 64.0);
}

#[test]
fn negation_prefixe() {
    assert_eq!(eval_ok("-3+4"), 1.0);
    assert_eq!(eval_ok("--3"), 3.0);
    assert_eq!(eval_ok("2*-3"), -6.0);
    assert_eq!(eval_ok("-2^2"), -4.0);
}

#[test]
fn puissance_lie_plus_fort_que_la_negation_a_droite() {
    // "2^-1" : la puissance est réduite avant la négation
    assert_eq!(eval_ok("2^-1"), -2.0);
}

#[test]
fn degres_et_trigo() {
    assert_proche("sin90d", 1.0);
    assert_proche("cos0", 1.0);
    assert_proche("cos180d", -1.0);
    assert_proche("2*sin30d", 1.0);
    assert_proche("-sin90d", -1.0);
    assert_proche("sin(45+45)d", 1.0);
}

#[test]
fn litteraux_seuls() {
    assert_eq!(eval_ok("42"), 42.0);
    assert_eq!(eval_ok("3.14"), 3.14);
    assert_eq!(eval_ok(".5"), 0.5);
    assert_eq!(eval_ok("  7  "), 7.0);
}

#[test]
fn groupes_negatifs_reinjectes() {
    assert_eq!(eval_ok("3*(1-5)"), -12.0);
    assert_eq!(eval_ok("(1-5)"), -4.0);
    assert_eq!(eval_ok("((1-5))"), -4.0);
    assert_eq!(eval_ok("10+(2-7)*2"), 0.0);
}

#[test]
fn groupe_reinjecte_sans_arrondi() {
    // la valeur d’un groupe repart en f64 complet, pas en texte à 6 décimales
    assert_eq!(eval_ok("(1/3)*3"), 1.0);
    assert_eq!(eval_ok("(0.0000001)*10000000"), 1.0);
    assert_eq!(eval_ok("(2^0.5)^2"), 2f64.powf(0.5).powf(2.0));
}

#[test]
fn valeurs_ieee() {
    assert_eq!(eval_ok("1/0"), f64::INFINITY);
    assert_eq!(eval_ok("-1/0"), f64::NEG_INFINITY);
    assert!(eval_ok("0/0").is_nan());
    assert!(eval_ok("(0/0)*2").is_nan());
    assert_eq!(eval_ok("0^0"), 1.0);
}

#[test]
fn idempotence() {
    for expr in ["sin90d", "3*(1-5)", "2^0.5", "1/3"] {
        let a = eval_ok(expr);
        let b = eval_ok(expr);
        assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
    }
}

#[test]
fn parenthese_non_fermee() {
    assert_eq!(
        evaluer("(1+2"),
        Err(ErreurCalcul::Malformee(Malformation::OuvranteNonFermee))
    );
}

/* ------------------------ Parseur de référence ------------------------ */

struct Reference<'a> {
    octets: &'a [u8],
    pos: usize,
}

impl Reference<'_> {
    fn peek(&self) -> Option<u8> {
        self.octets.get(self.pos).copied()
    }

    fn nombre(&mut self) -> f64 {
        let debut = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        std::str::from_utf8(&self.octets[debut..self.pos])
            .unwrap()
            .parse()
            .unwrap()
    }

    fn puissance(&mut self) -> f64 {
        let mut a = self.nombre();
        while self.peek() == Some(b'^') {
            self.pos += 1;
            a = a.powf(self.nombre());
        }
        a
    }

    fn terme(&mut self) -> f64 {
        let mut a = self.puissance();
        while let Some(op @ (b'*' | b'/')) = self.peek() {
            self.pos += 1;
            let b = self.puissance();
            a = if op == b'*' { a * b } else { a / b };
        }
        a
    }

    fn expression(&mut self) -> f64 {
        let mut a = self.terme();
        while let Some(op @ (b'+' | b'-')) = self.peek() {
            self.pos += 1;
            let b = self.terme();
            a = if op == b'+' { a + b } else { a - b };
        }
        a
    }
}

fn reference(expr: &str) -> f64 {
    Reference {
        octets: expr.as_bytes(),
        pos: 0,
    }
    .expression()
}

fn expression_binaire() -> impl Strategy<Value = String> {
    let op = prop::sample::select(vec!['+', '-', '*', '/', '^']);
    (0u32..20, prop::collection::vec((op, 0u32..20), 0..8)).prop_map(|(premier, suite)| {
        let mut s = premier.to_string();
        for (op, n) in suite {
            s.push(op);
            s.push_str(&n.to_string());
        }
        s
    })
}

fn memes_valeurs(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

proptest! {
    #[test]
    fn binaires_comme_la_reference(expr in expression_binaire()) {
        let attendu = reference(&expr);
        let obtenu = evaluer(&expr).unwrap();
        prop_assert!(
            memes_valeurs(obtenu, attendu),
            "expr={} obtenu={} attendu={}", expr, obtenu, attendu
        );
    }

    #[test]
    fn parentheses_englobantes_neutres(expr in expression_binaire()) {
        let nu = evaluer(&expr).unwrap();
        let entoure = evaluer(&format!("(({expr}))")).unwrap();
        prop_assert!(memes_valeurs(nu, entoure));
    }

    #[test]
    fn litteral_evalue_a_lui_meme(entier in 0u32..1_000_000, frac in 0u32..1000) {
        let texte = format!("{entier}.{frac}");
        let attendu: f64 = texte.parse().unwrap();
        prop_assert_eq!(evaluer(&texte).unwrap(), attendu);
    }
}
