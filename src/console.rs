// src/console.rs
//
// Mode lignes : une expression par ligne sur l’entrée, "ligne = résultat" en sortie.
// Une ligne en erreur est signalée sur `erreurs` et n’interrompt pas la suite.
// Les octets non UTF-8 sont remplacés (U+FFFD) : la ligne échoue seule.

use std::io::{self, BufRead, Write};

use crate::noyau::{evaluer, formater_resultat};

/// Bilan d’une exécution (utile pour le code de sortie).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub evaluees: usize,
    pub en_erreur: usize,
}

/// Lit une ligne brute, sans "\n" ni "\r\n". `None` en fin d’entrée.
fn lire_ligne<R: BufRead>(entree: &mut R, tampon: &mut Vec<u8>) -> io::Result<Option<String>> {
    tampon.clear();
    if entree.read_until(b'\n', tampon)? == 0 {
        return Ok(None);
    }
    if tampon.ends_with(b"\n") {
        tampon.pop();
        if tampon.ends_with(b"\r") {
            tampon.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(tampon).into_owned()))
}

pub fn executer<R, W, E>(mut entree: R, mut sortie: W, mut erreurs: E) -> io::Result<Bilan>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut bilan = Bilan::default();
    let mut tampon = Vec::new();

    while let Some(ligne) = lire_ligne(&mut entree, &mut tampon)? {
        match evaluer(&ligne) {
            Ok(r) => {
                writeln!(sortie, "{ligne} = {}", formater_resultat(r))?;
                bilan.evaluees += 1;
            }
            Err(e) => {
                log::warn!("ligne rejetée {ligne:?}: {e}");
                writeln!(erreurs, "{ligne} : erreur : {e}")?;
                bilan.en_erreur += 1;
            }
        }
    }

    sortie.flush()?;
    Ok(bilan)
}
