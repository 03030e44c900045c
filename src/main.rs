#[macro_use]
extern crate log;
extern crate complex_number;
extern crate env_logger;
extern crate time;

use complex_number::Complex;
use std::io;
use std::io::BufRead;

fn main() {
    env_logger::init();
    let start_time = time::precise_time_s();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let a = read_complex(&mut lines);
    let b = read_complex(&mut lines);
    info!("a = {}, b = {}", a, b);
    println!("a     = {}", a);
    println!("b     = {}", b);
    println!("a + b = {}", a + b);
    println!("a - b = {}", a - b);
    println!("a * b = {}", a * b);
    println!("a / 2 = {}", a / 2.0);
    println!("|a|   = {}", a.abs());
    println!("|b|   = {}", b.abs());
    info!("time taken {:.*}ms", 2, (time::precise_time_s() - start_time) * 1000f64);
}

/// Reads the next line and parses it as a complex value, two numbers
/// separated by whitespace.
fn read_complex<B: BufRead>(lines: &mut io::Lines<B>) -> Complex {
    match lines.next() {
        Some(Ok(line)) => match line.parse() {
            Ok(value) => value,
            Err(err) => panic!("Failed to parse '{}': {}", line, err),
        },
        Some(Err(err)) => panic!("Failed to read input: {}", err),
        None => panic!("Expected a line with two numbers"),
    }
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::read_complex;
    use complex_number::Complex;
    use std::io::BufRead;
    use std::io::Cursor;

    #[test]
    fn read_complex_from_line() {
        let mut lines = Cursor::new("3 -4\n").lines();
        assert_eq!(read_complex(&mut lines), Complex::new(3.0, -4.0));
    }

    #[test]
    fn read_complex_consumes_one_line_each() {
        let mut lines = Cursor::new("1 2\n3 4\n").lines();
        assert_eq!(read_complex(&mut lines), Complex::new(1.0, 2.0));
        assert_eq!(read_complex(&mut lines), Complex::new(3.0, 4.0));
    }
}
