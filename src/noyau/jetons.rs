// src/noyau/jetons.rs
//
// Deux alphabets :
// - Touche : ce que l’utilisateur saisit (forme canonique stockée dans le tampon)
// - Tok    : lexèmes évaluables, produits par la normalisation (voir normalisation.rs)

/// Fonctions unaires disponibles (touches « sin( », « log( », …).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
}

impl Fonction {
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Sqrt => "sqrt",
        }
    }

    /// Orthographe de la touche, parenthèse ouvrante comprise.
    pub fn touche(self) -> &'static str {
        match self {
            Fonction::Sin => "sin(",
            Fonction::Cos => "cos(",
            Fonction::Tan => "tan(",
            Fonction::Log => "log(",
            Fonction::Ln => "ln(",
            Fonction::Sqrt => "sqrt(",
        }
    }
}

const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Marqueur affiché à la place de l’expression après un échec.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Unité de saisie. Le tampon ne stocke que des Touche : le rendu (glyphes,
/// chiffres devanagari) est fait ailleurs, au moment d’afficher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8),
    Point,

    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    Pourcent,

    ParOuvrante,
    ParFermante,

    Pi,
    E,
    Racine, // √ (sans parenthèse)

    Fonction(Fonction), // « sin( » … : une seule touche, parenthèse incluse

    Erreur,
}

impl Touche {
    /// Touche chiffre, si `d` ∈ 0..=9.
    pub fn chiffre(d: u8) -> Option<Touche> {
        (d <= 9).then_some(Touche::Chiffre(d))
    }

    /// Orthographe canonique ASCII.
    pub fn texte(self) -> &'static str {
        match self {
            Touche::Chiffre(d) => CHIFFRES[usize::from(d.min(9))],
            Touche::Point => ".",
            Touche::Plus => "+",
            Touche::Moins => "-",
            Touche::Fois => "*",
            Touche::Divise => "/",
            Touche::Puissance => "^",
            Touche::Pourcent => "%",
            Touche::ParOuvrante => "(",
            Touche::ParFermante => ")",
            Touche::Pi => "pi",
            Touche::E => "e",
            Touche::Racine => "sqrt",
            Touche::Fonction(f) => f.touche(),
            Touche::Erreur => MARQUEUR_ERREUR,
        }
    }

    /// Glyphe affiché à l’écran.
    pub fn glyphe(self) -> &'static str {
        match self {
            Touche::Moins => "−",
            Touche::Fois => "×",
            Touche::Divise => "÷",
            Touche::Pi => "π",
            Touche::Racine => "√",
            autre => autre.texte(),
        }
    }

    pub fn est_chiffre(self) -> bool {
        matches!(self, Touche::Chiffre(_))
    }

    /// Vrai si la touche apporte une « ( » (parenthèse seule ou fonction).
    pub fn ouvre_parenthese(self) -> bool {
        matches!(self, Touche::ParOuvrante | Touche::Fonction(_))
    }
}

/// Orthographes reconnues par `lire_touches`, par ordre de priorité :
/// les fonctions (avec « ( ») passent avant « sqrt » seul et avant « e ».
const ORTHOGRAPHES: [(&str, Touche); 24] = [
    ("sin(", Touche::Fonction(Fonction::Sin)),
    ("cos(", Touche::Fonction(Fonction::Cos)),
    ("tan(", Touche::Fonction(Fonction::Tan)),
    ("log(", Touche::Fonction(Fonction::Log)),
    ("sqrt(", Touche::Fonction(Fonction::Sqrt)),
    ("ln(", Touche::Fonction(Fonction::Ln)),
    (MARQUEUR_ERREUR, Touche::Erreur),
    ("sqrt", Touche::Racine),
    ("√", Touche::Racine),
    ("pi", Touche::Pi),
    ("π", Touche::Pi),
    ("e", Touche::E),
    ("+", Touche::Plus),
    ("-", Touche::Moins),
    ("−", Touche::Moins),
    ("*", Touche::Fois),
    ("×", Touche::Fois),
    ("/", Touche::Divise),
    ("÷", Touche::Divise),
    ("^", Touche::Puissance),
    ("%", Touche::Pourcent),
    ("(", Touche::ParOuvrante),
    (")", Touche::ParFermante),
    (".", Touche::Point),
];

/// Relit un texte (glyphes ou ASCII, au choix) en touches. Espaces ignorés.
pub fn lire_touches(s: &str) -> Result<Vec<Touche>, String> {
    let mut out = Vec::new();
    let mut reste = s;

    'lecture: while let Some(c) = reste.chars().next() {
        if c.is_whitespace() {
            reste = &reste[c.len_utf8()..];
            continue;
        }

        if let Some(d) = c.to_digit(10) {
            // to_digit(10) < 10 : la conversion ne peut pas échouer
            out.push(Touche::Chiffre(d as u8));
            reste = &reste[c.len_utf8()..];
            continue;
        }

        for (motif, touche) in ORTHOGRAPHES {
            if let Some(suite) = reste.strip_prefix(motif) {
                out.push(touche);
                reste = suite;
                continue 'lecture;
            }
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Touches d’un résultat rendu (« -12.5 ») : chiffres, point, signe.
pub fn touches_du_nombre(s: &str) -> Vec<Touche> {
    s.chars()
        .filter_map(|c| match c {
            '-' => Some(Touche::Moins),
            '.' => Some(Touche::Point),
            _ => c.to_digit(10).map(|d| Touche::Chiffre(d as u8)),
        })
        .collect()
}

/// Texte canonique d’une suite de touches.
pub fn texte_touches(touches: &[Touche]) -> String {
    touches.iter().map(|t| t.texte()).collect()
}

/// Texte « écran » d’une suite de touches (×, ÷, −, π, √).
pub fn glyphes_touches(touches: &[Touche]) -> String {
    touches.iter().map(|t| t.glyphe()).collect()
}

/* ------------------------ Lexèmes évaluables ------------------------ */

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Func(Fonction),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // puissance

    Neg, // moins unaire (n’apparaît qu’en RPN)
    Pos, // plus unaire, idem

    LPar,
    RPar,
}

/// Format utilitaire (journal) : liste de lexèmes en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Func(f) => f.nom().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Neg => "neg".to_string(),
            Tok::Pos => "pos".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
