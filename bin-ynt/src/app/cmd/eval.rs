use itertools::Itertools;
use ypoly::{evaluate, evaluate_derivative_at};
use super::super::err::*;
use super::super::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    ensure!(!args.xs.is_empty(), "no point given.");

    let p = load_poly(&args.equation, false)?;
    let f = if args.derivative { 
        evaluate_derivative_at
    } else { 
        evaluate
    };

    let res = args.xs.iter().map(|&x| 
        if args.xs.len() > 1 { 
            format!("{x}\t{}", f(&p, x))
        } else { 
            f(&p, x).to_string()
        }
    ).join("\n");

    Ok(res)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub equation: String,

    #[arg(allow_hyphen_values = true)]
    pub xs: Vec<f64>,

    #[arg(short, long)]
    pub derivative: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn test1() { 
        let args = Args { 
            equation: "3x^2+2x+5".to_string(), 
            xs: vec![2.0],
            ..Default::default()
        };
        assert_eq!(dispatch(&args).unwrap(), "21");
    }

    #[test]
    fn derivative() { 
        let args = Args { 
            equation: "3x^2+2x+5".to_string(), 
            xs: vec![2.0],
            derivative: true,
            ..Default::default()
        };
        assert_eq!(dispatch(&args).unwrap(), "14");
    }

    #[test]
    fn multiple() { 
        let args = Args { 
            equation: "x^2-2".to_string(), 
            xs: vec![-1.0, 0.5],
            ..Default::default()
        };
        assert_eq!(dispatch(&args).unwrap(), "-1\t-1\n0.5\t-1.75");
    }

    #[test]
    fn no_points() { 
        let args = Args { 
            equation: "x".to_string(), 
            ..Default::default()
        };
        assert!(dispatch(&args).is_err());
    }
}
