use rusty_agenda::prelude::{AppError, run};

fn main() -> Result<(), AppError> {
    run::run_app()
}
