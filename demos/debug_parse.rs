use pest::Parser;
use svg2canvas::{PathDataParser, Rule};

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "M10 10 l5-5.5 c1 2 3 4 5 6 Q1 1 2 2 z".to_string());

    println!("Parsing: {}", input);
    println!();

    match PathDataParser::parse(Rule::path_data, &input) {
        Ok(pairs) => {
            println!(
                "{}",
                pest_ascii_tree::into_ascii_tree(pairs.clone()).unwrap()
            );
        }
        Err(e) => {
            eprintln!("Parse error: {}", e);
        }
    }

    match svg2canvas::parse::tokenize(&input, svg2canvas::Rounding::default()) {
        Ok(commands) => {
            for command in commands {
                println!("{} {:?}", command.marker, command.values);
            }
        }
        Err(e) => eprintln!("Tokenize error: {}", e),
    }
}
