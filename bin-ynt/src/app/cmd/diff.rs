use log::info;
use ypoly::nth_derivative;
use super::super::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let p = load_poly(&args.equation, args.simplify)?;
    let dp = nth_derivative(&p, args.order)?;

    info!("d^{}/dx^{} ({p}) = {dp}", args.order, args.order);

    Ok(args.format.poly(&dp))
}

#[derive(Clone, Debug, clap::Args)]
pub struct Args { 
    pub equation: String,

    #[arg(short = 'k', long, default_value = "1")]
    pub order: usize,

    #[arg(short, long)]
    pub simplify: bool,

    #[arg(short, long, default_value = "ascii")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

impl Default for Args { 
    fn default() -> Self {
        Self { 
            equation: String::new(), 
            order: 1, 
            simplify: false, 
            format: Format::default(), 
            log: 0 
        }
    }
}
