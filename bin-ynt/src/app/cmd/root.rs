use std::io::BufRead;
use log::info;
use serde::Serialize;
use ypoly::{differentiate, Error, Newton, NewtonCfg, Poly, Root, Step};
use super::super::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    App::new(args.clone()).run(&mut input)
}

/// Missing `equation` and `x0` are read from the input stream. 
/// Missing `tolerance` and `max_iter` take the defaults of `NewtonCfg`.
#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args { 
    pub equation: Option<String>,

    #[arg(short = 'x', long, allow_hyphen_values = true)]
    pub x0: Option<f64>,

    #[arg(short, long)]
    pub tolerance: Option<f64>,

    #[arg(short = 'n', long)]
    pub max_iter: Option<usize>,

    #[arg(short, long)]
    pub simplify: bool,

    #[arg(short, long, default_value = "ascii")]
    pub format: Format,

    #[arg(short, long, default_value = "text")]
    pub output: Output,

    #[arg(short, long)]
    pub quiet: bool,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

#[derive(Serialize, Debug)]
struct Report<'a> { 
    equation: &'a Poly,
    derivative: &'a Poly,
    x0: f64,
    cfg: NewtonCfg,
    steps: &'a [Step],
    root: Option<Root>,
}

pub struct App { 
    args: Args,
    buff: String,
}

impl App { 
    pub fn new(args: Args) -> Self { 
        let buff = String::with_capacity(1024);
        App { args, buff }
    }

    pub fn run<R>(&mut self, input: &mut R) -> Result<String, Box<dyn std::error::Error>>
    where R: BufRead { 
        let eq: String = match &self.args.equation { 
            Some(s) => s.clone(),
            None => prompt(input, "Enter an equation: ")?
        };
        let x0: f64 = match self.args.x0 { 
            Some(x) => x,
            None => prompt(input, "Enter an initial guess: ")?
        };
        let cfg = NewtonCfg::new(
            self.args.tolerance.unwrap_or(NewtonCfg::DEFAULT_TOLERANCE),
            self.args.max_iter.unwrap_or(NewtonCfg::DEFAULT_MAX_ITER)
        );

        let p = load_poly(&eq, self.args.simplify)?;
        let dp = differentiate(&p)?;

        info!("equation: {p}, derivative: {dp}");
        info!("x0: {x0}, cfg: {cfg:?}");

        let mut steps = vec![];
        let res = Newton::new(&p, cfg).run_with(x0, |s| steps.push(*s));

        let root = match res { 
            Ok(r) => Some(r),
            Err(Error::NoRootFound { .. }) => None,
            Err(e) => return Err(e.into())
        };

        info!("root: {root:?}");

        match self.args.output { 
            Output::Text => self.show_text(&p, &dp, &steps, root),
            Output::Json => { 
                let report = Report { equation: &p, derivative: &dp, x0, cfg, steps: &steps, root };
                let json = serde_json::to_string_pretty(&report)?;
                self.out(&json);
            }
        }

        Ok(self.flush())
    }

    fn show_text(&mut self, p: &Poly, dp: &Poly, steps: &[Step], root: Option<Root>) { 
        let fmt = self.args.format;
        self.out(&header(&fmt.poly(p), &fmt.poly(dp)));

        if !self.args.quiet && !steps.is_empty() { 
            self.out(&steps_table(steps));
        }

        match root { 
            Some(r) => self.out(&format!("Root: {}", r.x)),
            None    => self.out("No root found.")
        }
    }

    fn out(&mut self, str: &str) { 
        self.buff.push_str(str);
        self.buff.push('\n');
    }

    fn flush(&mut self) -> String { 
        let res = std::mem::take(&mut self.buff);
        res.trim().to_string()
    }
}
