//! Tests de robustesse : entrées bien formées aléatoires, entrées mal formées,
//! profondeur d’imbrication, déterminisme.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée pour les expressions générées
//! - budget temps global
//! - invariant clé : une entrée quelconque donne Ok ou une ErreurCalcul, jamais de panique

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::erreur::{ErreurCalcul, Malformation};
use super::{evaluer, evaluer_avec_demarche};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

fn gen_litteral(rng: &mut Rng) -> String {
    let entier = rng.pick(100);
    if rng.coin() {
        format!("{entier}.{}", rng.pick(100))
    } else {
        format!("{entier}")
    }
}

fn gen_operande(rng: &mut Rng, depth: usize) -> String {
    let base = if depth == 0 || rng.pick(3) == 0 {
        gen_litteral(rng)
    } else {
        format!("({})", gen_expr(rng, depth - 1))
    };

    let avec_degres = if rng.pick(4) == 0 {
        format!("{base}d")
    } else {
        base
    };

    match rng.pick(6) {
        0 => format!("-{avec_degres}"),
        1 => format!("sin{avec_degres}"),
        2 => format!("cos {avec_degres}"),
        _ => avec_degres,
    }
}

/// Expression toujours bien formée.
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    let mut s = gen_operande(rng, depth);
    for _ in 0..rng.pick(4) {
        let op = ["+", "-", "*", "/", "^"][rng.pick(5) as usize];
        s.push_str(op);
        s.push_str(&gen_operande(rng, depth));
    }
    s
}

/// Bruit : caractères pris dans l’alphabet de la calculatrice + quelques intrus.
fn gen_bruit(rng: &mut Rng) -> String {
    const ALPHABET: [&str; 16] = [
        "1", "2", ".", "+", "-", "*", "/", "^", "(", ")", "sin", "cos", "d", " ", "x", "π",
    ];
    (0..rng.pick(12))
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        let a = evaluer(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        let b = evaluer(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        // déterminisme (NaN compris)
        assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
    }
}

#[test]
fn fuzz_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let bruit = gen_bruit(&mut rng);
        match evaluer(&bruit) {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 0, "aucun succès vu");
    assert!(seen_err > 0, "aucune erreur vue");
}

#[test]
fn imbrication_profonde_sans_recursion() {
    let n = 20_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluer(&expr), Ok(1.0));

    let expr = format!("{}0-1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluer(&expr), Ok(-1.0));
}

#[test]
fn longue_somme() {
    let expr = vec!["0.5"; 800].join("+");
    assert_eq!(evaluer(&expr), Ok(400.0));
}

#[test]
fn entrees_mal_formees() {
    let cas: [(&str, Malformation); 9] = [
        ("", Malformation::OperandeAttendu),
        ("()", Malformation::OperandeAttendu),
        ("1+", Malformation::OperandeAttendu),
        ("(1+2", Malformation::OuvranteNonFermee),
        ("1+2)", Malformation::FermanteOrpheline),
        ("1.2.3", Malformation::LitteralInvalide("1.2.3".into())),
        (".", Malformation::LitteralInvalide(".".into())),
        ("x+1", Malformation::PrefixeInconnu("x".into())),
        ("2x", Malformation::BinaireInconnu("x".into())),
    ];

    for (expr, attendu) in cas {
        assert_eq!(
            evaluer(expr),
            Err(ErreurCalcul::Malformee(attendu)),
            "expr={expr:?}"
        );
    }
}

#[test]
fn operandes_colles() {
    assert!(matches!(
        evaluer("1 2"),
        Err(ErreurCalcul::Malformee(Malformation::OperandeInattendu(_)))
    ));
    assert!(matches!(
        evaluer("90d3"),
        Err(ErreurCalcul::Malformee(Malformation::OperandeInattendu(_)))
    ));
}

#[test]
fn caractere_non_ascii_isole() {
    assert_eq!(
        evaluer("π"),
        Err(ErreurCalcul::Malformee(Malformation::PrefixeInconnu(
            "π".into()
        )))
    );
}

#[test]
fn demarche_des_groupes() {
    let (r, d) = evaluer_avec_demarche("3*(1-5)").unwrap();
    assert_eq!(r, -12.0);
    assert_eq!(d.jetons, "( 3 * ( 1 - 5 ) )");
    let groupes: Vec<(&str, f64)> = d
        .groupes
        .iter()
        .map(|g| (g.jetons.as_str(), g.valeur))
        .collect();
    assert_eq!(groupes, [("1 - 5", -4.0), ("3 * - 4", -12.0)]);
    assert_eq!(d.resultat, "-12");
}
