use clap::ValueEnum;
use derive_more::Display;
use prettytable::{format, Cell, Row, Table};
use ypoly::{Poly, Step};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum Format { 
    #[default] Ascii, 
    Unicode
}

impl Format { 
    pub fn poly(&self, p: &Poly) -> String { 
        match self { 
            Format::Ascii   => ypoly::format(p),
            Format::Unicode => ypoly::format_unicode(p),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum Output { 
    #[default] Text, 
    Json
}

const LABEL_WIDTH: usize = 15;

/// Equation / derivative box:
/// ```text
/// ----------------
/// Equation:      x^2-2
/// Derivative:    2x
/// ----------------
/// ```
pub fn header(equation: &str, derivative: &str) -> String { 
    let width = LABEL_WIDTH + equation.chars().count().max(derivative.chars().count());
    let line = "-".repeat(width);
    [
        line.clone(),
        format!("{:<w$}{equation}", "Equation:", w = LABEL_WIDTH),
        format!("{:<w$}{derivative}", "Derivative:", w = LABEL_WIDTH),
        line
    ].join("\n")
}

pub fn steps_table(steps: &[Step]) -> String { 
    fn row<I>(cols: I) -> Row
    where I: Iterator<Item = String> { 
        Row::new(cols.map(|s| Cell::new(&s).style_spec("r")).collect())
    }

    let mut table = Table::new();

    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row(
        ["i", "x", "f(x)"].into_iter().map(String::from)
    ));

    for s in steps { 
        table.add_row(row(
            [s.iter.to_string(), s.x.to_string(), s.fx.to_string()].into_iter()
        ));
    }

    table.to_string()
}
