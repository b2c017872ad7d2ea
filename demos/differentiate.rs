use log::LevelFilter;
use polydiff::prelude::{diff, diff_n};
use simple_logger::SimpleLogger;

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Trace)
        .init()
        .ok();

    for poly in ["x^4 - 3x^2 + x", "-x^-2 + 0.5x", "7", "2x^^3", "2x +"] {
        match diff(poly) {
            Ok(result) => println!("d/dx {poly} = {result}"),
            Err(err) => eprintln!("error for {poly}: {err}"),
        }
    }

    let poly = "x^4 - 3x^2 + x";
    match diff_n(poly, 3) {
        Ok(result) => println!("d3/dx3 {poly} = {result}"),
        Err(err) => eprintln!("error for {poly}: {err}"),
    }
}
