// src/noyau/lecture.rs
//
// Lecture du résultat : arrondi à 10^-9 puis texte décimal canonique.
// L’arrondi se fait en f64 (x·10^9, demi vers +∞) ; le rationnel exact ne sert
// qu’à écrire l’entier scalé en décimal, sans repasser par un flottant.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

/// Nombre de décimales conservées.
pub const DECIMALES: usize = 9;

/// Au-delà de 2^53 tout f64 est entier : rien à arrondir.
const ENTIER_EXACT: f64 = 9_007_199_254_740_992.0;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal,
/// sans zéros de queue ni point final (« 1.500 » -> « 1.5 », « 2.000 » -> « 2 »).
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    if frac.is_empty() {
        format!("{signe}{int_part}")
    } else {
        format!("{signe}{int_part}.{frac}")
    }
}

/// x -> entier “scalé” = floor(x * 10^digits + 1/2), calculé en f64.
fn arrondi_scaled(x: f64, digits: usize) -> Result<BigInt, String> {
    let facteur = 10f64.powi(digits as i32);
    let scaled = (x * facteur + 0.5).floor();
    // entier flottant -> entier exact
    BigRational::from_float(scaled)
        .map(|r| r.to_integer())
        .ok_or_else(|| format!("valeur non représentable: {x}"))
}

/// Arrondit `x` à `digits` décimales et le rend en texte canonique.
///
/// Refuse les valeurs non finies. Jamais de notation exponentielle, jamais de « -0 ».
pub fn arrondir(x: f64, digits: usize) -> Result<String, String> {
    if !x.is_finite() {
        return Err(format!("résultat non fini: {x}"));
    }

    if x.abs() >= ENTIER_EXACT {
        // f64 entier : Display donne la forme la plus courte, sans exposant
        return Ok(format!("{x}"));
    }

    Ok(scaled_to_decimal(arrondi_scaled(x, digits)?, digits))
}
