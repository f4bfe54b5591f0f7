mod scenarios;

use log::{info, LevelFilter, SetLoggerError};
use simple_logger::SimpleLogger;

fn main() -> Result<(), SetLoggerError> {
    SimpleLogger::new().with_level(LevelFilter::Warn).env().init()?;

    let ints = scenarios::even_doubled(&scenarios::numbers());
    info!("{} numbers kept", ints.len());
    for i in &ints {
        println!("{}", i);
    }

    let strs = scenarios::shouted_t_words(&scenarios::words());
    info!("{} words kept", strs.len());
    for s in &strs {
        println!("{}", s);
    }

    Ok(())
}
