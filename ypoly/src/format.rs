use num_traits::One;

use crate::{Deg, Poly};

/// Renders `p` in canonical text form, the inverse of [`crate::parse`]. 
/// 
/// Zero terms are skipped, and an empty (or all-zero) polynomial
/// is rendered as `"0"`.
pub fn format(p: &Poly) -> String { 
    format_by(p, fmt_deg_ascii)
}

/// Renders `p` with exponents as superscripts, e.g. `3x²+2x+5`. 
/// Display-only: the result is not accepted by the parser.
pub fn format_unicode(p: &Poly) -> String { 
    format_by(p, superscript)
}

fn format_by<F>(p: &Poly, fmt_deg: F) -> String
where F: Fn(Deg) -> String + Copy { 
    let res = p.iter()
        .filter(|t| !t.is_zero())
        .enumerate()
        .map(|(i, t)| t.fmt_with(i == 0, fmt_deg))
        .collect::<String>();

    if res.is_empty() { 
        "0".to_string()
    } else { 
        res
    }
}

pub(crate) fn fmt_deg_ascii(d: Deg) -> String { 
    if d.is_one() { 
        String::new()
    } else { 
        format!("^{d}")
    }
}

pub(crate) fn superscript(d: Deg) -> String { 
    if d.is_one() { 
        return String::new()
    }

    d.to_string().chars().map(|c| match c { 
        '1' => '\u{00B9}',
        '2' => '\u{00B2}',
        '3' => '\u{00B3}',
        c => { 
            let d = c.to_digit(10).unwrap_or(0);
            char::from_u32(('\u{2070}' as u32) + d).unwrap_or(c)
        }
    }).collect()
}
