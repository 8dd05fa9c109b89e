mod app;

use std::process::ExitCode;
use app::App;

fn main() -> ExitCode {
    match App::new().run() { 
        Ok(output) => { 
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => { 
            log::error!("{e}");
            eprintln!("\x1b[0;31merror\x1b[0m: {e}");
            ExitCode::FAILURE
        }
    }
}
