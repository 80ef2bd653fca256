fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rounding: svg2canvas::Rounding = std::env::args()
        .nth(2)
        .map(|mode| mode.parse().expect("Unknown rounding mode"))
        .unwrap_or_default();

    let input = std::env::args()
        .nth(1)
        .map(|path| std::fs::read_to_string(&path).expect("Failed to read file"))
        .unwrap_or_else(|| {
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">
  <path fill="#1e90ff" d="M12 2 l10 10 l-10 10 l-10 -10 z"/>
  <path stroke="#222222" stroke-width="2" d="M7 12 h10 M12 7 v10"/>
</svg>"##
                .to_string()
        });

    tracing::info!(bytes = input.len(), %rounding, "converting");
    let options = svg2canvas::ConvertOptions::default().with_rounding(rounding);
    match svg2canvas::convert(&input, &options) {
        Ok(code) => println!("{}", code),
        Err(e) => eprintln!("{:?}", miette::Report::new(e)),
    }
}
