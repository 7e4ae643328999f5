// src/noyau/jetons.rs
//
// Lexer permissif : la saisie vient toujours de l’éditeur.
// - chiffres + au plus un point par littéral (gourmand)
// - `-` = début d’un littéral négatif si 1er caractère ou juste après + - * /
// - tout autre caractère est ignoré (ex: "Error5" -> 5)

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Op {
    fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Minus => 1,
            Op::Star | Op::Slash => 2,
        }
    }
}

/// Un littéral reste du texte ici : la conversion en nombre se fait dans rpn.rs.
#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(String),
    Op(Op),
}

/// Tokenize une expression déjà normalisée (symboles de calcul).
pub fn tokenize(s: &str) -> Vec<Tok> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];
        let unaire = i == 0 || Op::depuis_char(chars[i - 1]).is_some();

        if c.is_ascii_digit() || c == '.' || (c == '-' && unaire) {
            let start = i;
            let mut point = c == '.';
            i += 1;
            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() {
                    i += 1;
                } else if d == '.' && !point {
                    point = true;
                    i += 1;
                } else {
                    break;
                }
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        if let Some(op) = Op::depuis_char(c) {
            out.push(Tok::Op(op));
        } else {
            tracing::debug!(caractere = %c, position = i, "caractère ignoré par le lexer");
        }
        i += 1;
    }

    out
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(n) => n.clone(),
            Tok::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
