use polydiff::derivative;

fn main() {
    match derivative("2x^3 + 4x - 5") {
        Ok(result) => println!("{result}"),
        Err(err) => eprintln!("rejected: {err}"),
    }
}
