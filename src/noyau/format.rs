// src/noyau/format.rs
//
// Affichage d’un résultat flottant, façon "%g" (6 chiffres significatifs) :
// - notation fixe si l’exposant décimal est dans [-4, 6[
// - sinon notation scientifique "1.5e-07", "1e+20"
// - zéros de queue retirés
// - inf / -inf / nan

/// Chiffres significatifs affichés.
const CHIFFRES_SIGNIFICATIFS: usize = 6;

fn retirer_zeros_queue(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Format final d’un résultat (lignes + historique de l’UI).
pub fn formater_resultat(x: f64) -> String {
    if x.is_nan() {
        return "nan".into();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf".into() } else { "-inf".into() };
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0".into() } else { "0".into() };
    }

    let p = CHIFFRES_SIGNIFICATIFS - 1;

    // L’exposant est celui APRÈS arrondi à 6 chiffres (999999.7 -> 1e+06).
    let sci = format!("{:.*e}", p, x);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exposant < -4 || exposant >= CHIFFRES_SIGNIFICATIFS as i32 {
        let signe = if exposant < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            retirer_zeros_queue(mantisse),
            signe,
            exposant.abs()
        )
    } else {
        let decimales = (p as i32 - exposant) as usize;
        let fixe = format!("{:.*}", decimales, x);
        retirer_zeros_queue(&fixe).to_string()
    }
}
